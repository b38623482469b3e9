pub mod course;
pub mod dkf;
pub mod lesson_material;
pub mod metadata;
pub mod training_app;

pub use crate::schema::v4::learner;
pub use crate::schema::v6::ped;
pub use crate::schema::v7::conversation;
pub use crate::schema::v9::sensor;

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
