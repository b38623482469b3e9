//! One converter per schema transition, plus the chain continuation shared by
//! all of them.

pub mod v10_v11;
pub mod v2_v3;
pub mod v3_v4;
pub mod v4_v5;
pub mod v5_v6;
pub mod v6_v7;
pub mod v7_v8;
pub mod v8_v9;
pub mod v9_v10;

use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::document_kind::DocumentKind;
use crate::issues::ConversionIssueList;
use crate::schema::common::{Choice, Recognizable, UnrecognizedElement};
use crate::schema::SchemaTree;
use crate::schema_registry::ConverterRegistry;
use crate::schema_version::SchemaVersion;

pub use v10_v11::V10ToV11Converter;
pub use v2_v3::V2ToV3Converter;
pub use v3_v4::V3ToV4Converter;
pub use v4_v5::V4ToV5Converter;
pub use v5_v6::V5ToV6Converter;
pub use v6_v7::V6ToV7Converter;
pub use v7_v8::V7ToV8Converter;
pub use v8_v9::V8ToV9Converter;
pub use v9_v10::V9ToV10Converter;

/// Maps every document kind from one schema generation to the next.
///
/// A converter does not know its own position in the chain; the registry
/// it is registered with does.
pub trait SchemaConverter: Send + Sync + fmt::Debug {
    /// Stable name, used for inverse lookup in the registry.
    fn name(&self) -> &'static str;

    /// Produces the next generation's tree. The input is consumed either way.
    fn convert(
        &self,
        tree: SchemaTree,
        context: &mut ConversionContext,
    ) -> Result<SchemaTree, MappingError>;
}

/// Per-document state carried through a chain.
#[derive(Debug, Clone)]
pub struct ConversionContext {
    file_id: String,
    issues: Vec<String>,
}

impl ConversionContext {
    pub fn new(file_id: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
            issues: Vec::new(),
        }
    }

    pub fn file_id(&self) -> &str {
        &self.file_id
    }

    /// Records one dropped element.
    pub fn add_issue(&mut self, description: &str) {
        self.issues.push(description.to_string());
    }

    pub fn issues(&self) -> &[String] {
        &self.issues
    }

    /// Moves the recorded issues into `list` under this document's file id.
    pub fn commit(self, list: &mut ConversionIssueList) {
        for description in &self.issues {
            list.add_issue(&self.file_id, description);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MappingError {
    #[error("Found an unhandled {choice} element '{element}'")]
    UnhandledVariant { choice: &'static str, element: String },

    #[error("The {field} value '{value}' has no counterpart in the target schema")]
    UnmappedEnumValue { field: &'static str, value: String },

    #[error("The {field} value '{value}' is invalid: {reason}")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("Required element '{0}' is missing")]
    MissingRequired(&'static str),

    #[error("Converter '{converter}' cannot accept a {found} {kind} tree")]
    WrongTree {
        converter: &'static str,
        kind: DocumentKind,
        found: SchemaVersion,
    },
}

impl MappingError {
    pub fn unhandled<T: Choice>(element: &UnrecognizedElement) -> Self {
        MappingError::UnhandledVariant {
            choice: T::ELEMENT,
            element: element.element.clone(),
        }
    }

    pub fn wrong_tree(converter: &dyn SchemaConverter, tree: &SchemaTree) -> Self {
        MappingError::WrongTree {
            converter: converter.name(),
            kind: tree.kind(),
            found: tree.generation(),
        }
    }
}

/// Passes a value through unchanged, rejecting it when any choice inside it
/// holds the unrecognized alternative.
pub(crate) fn recognized<T: Recognizable>(value: T) -> Result<T, MappingError> {
    match value.find_unrecognized() {
        Some((choice, element)) => Err(MappingError::UnhandledVariant {
            choice,
            element: element.element.clone(),
        }),
        None => Ok(value),
    }
}

pub(crate) fn all_recognized<T: Recognizable>(values: Vec<T>) -> Result<Vec<T>, MappingError> {
    values.into_iter().map(recognized).collect()
}

/// Maps each element in order, stopping at the first failure.
pub(crate) fn map_all<S, T>(
    values: Vec<S>,
    context: &mut ConversionContext,
    mut map: impl FnMut(S, &mut ConversionContext) -> Result<T, MappingError>,
) -> Result<Vec<T>, MappingError> {
    values.into_iter().map(|value| map(value, context)).collect()
}

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("Converter '{0}' is not registered")]
    Unregistered(&'static str),

    #[error("Step from {from} to {to} failed: {source}")]
    Step {
        from: SchemaVersion,
        to: SchemaVersion,
        #[source]
        source: MappingError,
    },

    #[error("The chain ended at version {0} instead of the current version")]
    Incomplete(SchemaVersion),
}

/// Runs `converter` and then every later registered step on `tree`.
///
/// The step that finds no successor in the registry stamps the current
/// version onto the tree; no other step writes a version.
pub fn continue_chain(
    registry: &ConverterRegistry,
    converter: Arc<dyn SchemaConverter>,
    tree: SchemaTree,
    context: &mut ConversionContext,
) -> Result<SchemaTree, ChainError> {
    let mut converter = converter;
    let mut tree = tree;
    loop {
        let from = registry
            .version_of(converter.as_ref())
            .ok_or(ChainError::Unregistered(converter.name()))?;
        let next = registry.next_after(from);
        let to = next
            .as_ref()
            .map(|(version, _)| *version)
            .unwrap_or_else(SchemaVersion::current);

        debug!(
            file = context.file_id(),
            kind = %tree.kind(),
            %from,
            %to,
            converter = converter.name(),
            "Converting one step"
        );
        // Converters never produce an unrecognized alternative, so one found
        // here was carried over untouched from the input.
        tree = converter
            .convert(tree, context)
            .and_then(recognized)
            .map_err(|source| ChainError::Step { from, to, source })?;

        match next {
            Some((_, successor)) => converter = successor,
            None => {
                if tree.generation() != SchemaVersion::current() {
                    return Err(ChainError::Incomplete(tree.generation()));
                }
                tree.stamp(&SchemaVersion::current().to_string());
                return Ok(tree);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{v10, v11, v3, v6};

    /// A 10.0 course with a single guidance transition.
    fn v10_course() -> v10::course::Course {
        v10::course::Course {
            version: Some("10.0".to_string()),
            name: "Orientation".to_string(),
            description: None,
            survey_context: None,
            exclude: None,
            transitions: v10::course::Transitions {
                transition: vec![v10::course::Transition::Guidance(v10::course::Guidance {
                    transition_name: "Welcome".to_string(),
                    display_time: None,
                    full_screen: None,
                    choice: v10::course::GuidanceChoice::Message(v10::course::GuidanceMessage {
                        content: "Welcome aboard".to_string(),
                    }),
                })],
            },
        }
    }

    #[test]
    fn test_context_commits_issues_under_file() {
        let mut context = ConversionContext::new("a.course.xml");
        context.add_issue("Show Avatar Initially Option");
        context.add_issue("Show Avatar Initially Option");
        assert_eq!(context.issues().len(), 2);

        let mut list = ConversionIssueList::new();
        context.commit(&mut list);
        assert_eq!(list.count("a.course.xml", "Show Avatar Initially Option"), 2);
    }

    #[test]
    fn test_recognized_rejects_unrecognized_alternative() {
        let ok = recognized(v10::course::MediaTypeProperties::Pdf(Default::default()));
        assert!(ok.is_ok());

        let err = recognized(v10::course::MediaTypeProperties::Unrecognized(
            UnrecognizedElement::new("HologramProperties"),
        ))
        .unwrap_err();
        assert_eq!(
            err,
            MappingError::UnhandledVariant {
                choice: "media properties",
                element: "HologramProperties".to_string(),
            }
        );
    }

    #[test]
    fn test_chain_from_last_step_stamps_current_version() {
        let registry = ConverterRegistry::standard().unwrap();
        let converter = registry.get(SchemaVersion::new(10, 0, 0)).unwrap();
        let tree = SchemaTree::V10(v10::Document::LearnerConfig(
            crate::fixtures::v4_learner_config(),
        ));

        let mut context = ConversionContext::new("learner.learnerconfig.xml");
        let converted = continue_chain(&registry, converter, tree, &mut context).unwrap();
        assert_eq!(converted.generation(), SchemaVersion::current());
        assert_eq!(converted.version_attribute(), Some("11.0"));
        assert!(matches!(converted, SchemaTree::V11(v11::Document::LearnerConfig(_))));
    }

    #[test]
    fn test_recognized_walks_into_nested_choices() {
        let mut course = crate::fixtures::v6_course();
        course.transitions.transition.push(v6::course::Transition::MerrillsBranchPoint(
            v6::course::MerrillsBranchPoint {
                transition_name: None,
                concepts: v6::course::BranchConcepts::default(),
                quadrants: v6::course::Quadrants {
                    content: vec![v6::course::Quadrant::Transitions(v6::course::Transitions {
                        transition: vec![v6::course::Transition::Unrecognized(
                            UnrecognizedElement::new("Hologram"),
                        )],
                    })],
                },
            },
        ));

        let err = recognized(course).unwrap_err();
        assert_eq!(
            err,
            MappingError::UnhandledVariant {
                choice: "transition",
                element: "Hologram".to_string(),
            }
        );
    }

    #[test]
    fn test_chain_rejects_unrecognized_transition_before_stamping() {
        let registry = ConverterRegistry::standard().unwrap();
        let converter = registry.get(SchemaVersion::new(10, 0, 0)).unwrap();
        let mut course = v10_course();
        course
            .transitions
            .transition
            .push(v10::course::Transition::Unrecognized(UnrecognizedElement::new("Hologram")));
        let tree = SchemaTree::V10(v10::Document::Course(course));

        let mut context = ConversionContext::new("hologram.course.xml");
        let err = continue_chain(&registry, converter, tree, &mut context).unwrap_err();
        match err {
            ChainError::Step { from, to, source } => {
                assert_eq!(from, SchemaVersion::new(10, 0, 0));
                assert_eq!(to, SchemaVersion::current());
                assert_eq!(
                    source,
                    MappingError::UnhandledVariant {
                        choice: "transition",
                        element: "Hologram".to_string(),
                    }
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_chain_rejects_unrecognized_choice_moved_unchanged() {
        let registry = ConverterRegistry::standard().unwrap();
        let converter = registry.get(SchemaVersion::new(3, 0, 0)).unwrap();
        let mut scenario = crate::fixtures::v3_scenario();
        let task = &mut scenario.assessment.as_mut().unwrap().tasks.task[0];
        task.concepts.as_mut().unwrap().concept[0].assessments = Some(v3::dkf::Assessments {
            kind: vec![v3::dkf::AssessmentType::Unrecognized(UnrecognizedElement::new(
                "Interview",
            ))],
        });
        let tree = SchemaTree::V3(v3::Document::Scenario(scenario));

        let mut context = ConversionContext::new("patrol.dkf.xml");
        let err = continue_chain(&registry, converter, tree, &mut context).unwrap_err();
        assert!(matches!(
            err,
            ChainError::Step {
                source: MappingError::UnhandledVariant { choice: "assessment", .. },
                ..
            }
        ));
    }

    #[test]
    fn test_chain_step_failure_names_versions() {
        let registry = ConverterRegistry::standard().unwrap();
        let converter = registry.get(SchemaVersion::new(9, 0, 0)).unwrap();
        let tree = SchemaTree::V2(crate::schema::v2::Document::Course(
            crate::fixtures::v2_course(),
        ));

        let mut context = ConversionContext::new("x.course.xml");
        let err = continue_chain(&registry, converter, tree, &mut context).unwrap_err();
        match err {
            ChainError::Step { from, to, source } => {
                assert_eq!(from, SchemaVersion::new(9, 0, 0));
                assert_eq!(to, SchemaVersion::new(10, 0, 0));
                assert!(matches!(source, MappingError::WrongTree { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
