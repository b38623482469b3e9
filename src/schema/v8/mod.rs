pub mod metadata;

pub use crate::schema::v4::learner;
pub use crate::schema::v6::{course, lesson_material, ped, sensor, training_app};
pub use crate::schema::v7::{conversation, dkf};

document_enum! {
    Course => course::Course,
    Scenario => dkf::Scenario,
    LearnerConfig => learner::LearnerConfiguration,
    PedagogyConfig => ped::Em2ap,
    Metadata => metadata::Metadata,
    TrainingAppRef => training_app::TrainingApplicationWrapper,
    SensorConfig => sensor::SensorsConfiguration,
    LessonMaterialRef => lesson_material::LessonMaterialList,
    ConversationTree => conversation::Conversation,
}
