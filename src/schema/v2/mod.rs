//! The oldest convertible generation: courses and scenarios only.

pub mod course;
pub mod dkf;

document_enum! {
    Course => course::Course,
    Scenario => dkf::Scenario,
}
