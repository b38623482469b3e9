//! The current generation. Every converter chain ends here.

pub mod conversation;
pub mod metadata;

pub use crate::schema::v4::learner;
pub use crate::schema::v6::ped;
pub use crate::schema::v9::sensor;
pub use crate::schema::v10::{course, dkf, lesson_material, training_app};

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
