//! Shapes shared by several lineages and generations.

use serde::{Deserialize, Serialize};

/// A choice alternative the typed tree has no variant for.
///
/// The XML reader never produces these; they exist so that trees assembled
/// in code can carry an element a converter was not written for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedElement {
    pub element: String,
}

impl UnrecognizedElement {
    pub fn new(element: impl Into<String>) -> Self {
        Self {
            element: element.into(),
        }
    }
}

/// A polymorphic element whose alternatives are fixed for one generation.
pub trait Choice {
    /// Name of the choice point, used in diagnostics.
    const ELEMENT: &'static str;

    /// The unrecognized alternative, if that is what this value holds.
    fn unrecognized(&self) -> Option<&UnrecognizedElement>;
}

/// Walks a tree looking for a choice that holds its unrecognized alternative.
pub trait Recognizable {
    /// The first unrecognized alternative in document order, with the name of
    /// the choice point holding it.
    fn find_unrecognized(&self) -> Option<(&'static str, &UnrecognizedElement)>;
}

impl<T: Recognizable> Recognizable for Option<T> {
    fn find_unrecognized(&self) -> Option<(&'static str, &UnrecognizedElement)> {
        self.as_ref().and_then(|value| value.find_unrecognized())
    }
}

impl<T: Recognizable> Recognizable for Vec<T> {
    fn find_unrecognized(&self) -> Option<(&'static str, &UnrecognizedElement)> {
        self.iter().find_map(|value| value.find_unrecognized())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BooleanEnum {
    #[serde(rename = "true")]
    True,
    #[serde(rename = "false")]
    False,
}

impl BooleanEnum {
    pub fn as_bool(&self) -> bool {
        matches!(self, BooleanEnum::True)
    }
}

impl From<bool> for BooleanEnum {
    fn from(value: bool) -> Self {
        if value {
            BooleanEnum::True
        } else {
            BooleanEnum::False
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssessmentLevel {
    BelowExpectation,
    AtExpectation,
    AboveExpectation,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nvpair {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@value")]
    pub value: String,
}

impl Nvpair {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
