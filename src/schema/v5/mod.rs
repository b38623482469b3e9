pub mod dkf;
pub mod metadata;
pub mod training_app;

pub use crate::schema::v4::{course, learner, ped};

document_enum! {
    Course => course::Course,
    Scenario => dkf::Scenario,
    LearnerConfig => learner::LearnerConfiguration,
    PedagogyConfig => ped::Em2ap,
    Metadata => metadata::Metadata,
    TrainingAppRef => training_app::TrainingApplicationWrapper,
}
