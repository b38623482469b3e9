pub mod dkf;
pub mod sensor;

pub use crate::schema::v4::learner;
pub use crate::schema::v6::{course, lesson_material, ped, training_app};
pub use crate::schema::v7::conversation;
pub use crate::schema::v8::metadata;

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
