pub mod course;
pub mod dkf;
pub mod learner;
pub mod ped;

document_enum! {
    Course => course::Course,
    Scenario => dkf::Scenario,
    LearnerConfig => learner::LearnerConfiguration,
    PedagogyConfig => ped::Emap,
}
