use crate::converters::{recognized, ConversionContext, MappingError, SchemaConverter};
use crate::schema::common::AssessmentLevel;
use crate::schema::{v10, v11, v7, SchemaTree};

pub const CONCEPT_ATTRIBUTE_ISSUE: &str = "Concept Metadata Attribute";

#[derive(Debug, Default, Clone, Copy)]
pub struct V10ToV11Converter;

impl SchemaConverter for V10ToV11Converter {
    fn name(&self) -> &'static str {
        "v10_to_v11"
    }

    fn convert(
        &self,
        tree: SchemaTree,
        context: &mut ConversionContext,
    ) -> Result<SchemaTree, MappingError> {
        let document = match tree {
            SchemaTree::V10(document) => document,
            other => return Err(MappingError::wrong_tree(self, &other)),
        };
        let converted = match document {
            v10::Document::Course(course) => v11::Document::Course(recognized(course)?),
            v10::Document::Scenario(scenario) => v11::Document::Scenario(recognized(scenario)?),
            v10::Document::LearnerConfig(config) => {
                v11::Document::LearnerConfig(recognized(config)?)
            }
            v10::Document::PedagogyConfig(config) => {
                v11::Document::PedagogyConfig(recognized(config)?)
            }
            v10::Document::Metadata(metadata) => {
                v11::Document::Metadata(convert_metadata(metadata, context)?)
            }
            v10::Document::TrainingAppRef(wrapper) => {
                v11::Document::TrainingAppRef(recognized(wrapper)?)
            }
            v10::Document::SensorConfig(config) => v11::Document::SensorConfig(recognized(config)?),
            v10::Document::LessonMaterialRef(list) => {
                v11::Document::LessonMaterialRef(recognized(list)?)
            }
            v10::Document::ConversationTree(tree) => {
                v11::Document::ConversationTree(convert_conversation(tree)?)
            }
        };
        Ok(SchemaTree::V11(converted))
    }
}

fn convert_metadata(
    metadata: v10::metadata::Metadata,
    context: &mut ConversionContext,
) -> Result<v11::metadata::Metadata, MappingError> {
    use v10::metadata::ActivityKind as Old;
    use v11::metadata::ActivityKind as New;

    let mut concept = Vec::with_capacity(metadata.concepts.concept.len());
    for old in metadata.concepts.concept {
        let activity_type = match old.activity_type {
            Some(activity) => {
                let kind = match activity.kind {
                    Old::Passive(passive) => {
                        let dropped = passive
                            .attributes
                            .map(|attributes| attributes.attribute.len())
                            .unwrap_or(0);
                        for _ in 0..dropped {
                            context.add_issue(CONCEPT_ATTRIBUTE_ISSUE);
                        }
                        New::Passive(v11::metadata::EmptyActivity {})
                    }
                    Old::Interactive(empty) => New::Interactive(empty),
                    Old::Constructive(empty) => New::Constructive(empty),
                    Old::Active(empty) => New::Active(empty),
                    Old::Unrecognized(element) => {
                        return Err(MappingError::unhandled::<Old>(&element))
                    }
                };
                Some(v11::metadata::ActivityType { kind })
            }
            None => None,
        };
        concept.push(v11::metadata::Concept {
            name: old.name,
            activity_type,
        });
    }

    Ok(v11::metadata::Metadata {
        version: metadata.version,
        display_name: metadata.display_name,
        present_at: metadata.present_at,
        content: recognized(metadata.content)?,
        concepts: v11::metadata::Concepts { concept },
    })
}

fn convert_conversation(
    conversation: v7::conversation::Conversation,
) -> Result<v11::conversation::Conversation, MappingError> {
    use v11::conversation::Node as New;
    use v7::conversation::Node as Old;

    let node = conversation
        .nodes
        .node
        .into_iter()
        .map(|node| {
            Ok(match node {
                Old::MessageNode(message) => New::MessageNode(message),
                Old::QuestionNode(question) => {
                    New::QuestionNode(v11::conversation::QuestionNode {
                        id: question.id,
                        text: question.text,
                        choices: v11::conversation::Choices {
                            choice: question
                                .choices
                                .choice
                                .into_iter()
                                .map(|choice| v11::conversation::Choice {
                                    id: choice.id,
                                    assessment: choice_assessment(choice.assessment),
                                    text: choice.text,
                                    child: choice.child,
                                })
                                .collect(),
                        },
                    })
                }
                Old::EndNode(end) => New::EndNode(end),
                Old::Unrecognized(element) => return Err(MappingError::unhandled::<Old>(&element)),
            })
        })
        .collect::<Result<Vec<_>, MappingError>>()?;

    Ok(v11::conversation::Conversation {
        version: conversation.version,
        name: conversation.name,
        author: conversation.author,
        learners_objective: conversation.learners_objective,
        start_node_id: conversation.start_node_id,
        nodes: v11::conversation::Nodes { node },
    })
}

fn choice_assessment(level: AssessmentLevel) -> Option<v11::conversation::ChoiceAssessment> {
    use v11::conversation::ChoiceAssessment;

    match level {
        AssessmentLevel::BelowExpectation => Some(ChoiceAssessment::BelowExpectation),
        AssessmentLevel::AtExpectation => Some(ChoiceAssessment::AtExpectation),
        AssessmentLevel::AboveExpectation => Some(ChoiceAssessment::AboveExpectation),
        AssessmentLevel::Unknown => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(document: v10::Document, context: &mut ConversionContext) -> v11::Document {
        match V10ToV11Converter.convert(SchemaTree::V10(document), context).unwrap() {
            SchemaTree::V11(document) => document,
            other => panic!("expected an 11.0 tree, got {:?}", other.generation()),
        }
    }

    fn passive(values: &[&str]) -> v10::metadata::ActivityType {
        v10::metadata::ActivityType {
            kind: v10::metadata::ActivityKind::Passive(v10::metadata::Passive {
                attributes: Some(v10::metadata::Attributes {
                    attribute: values
                        .iter()
                        .map(|value| v10::metadata::Attribute {
                            value: value.to_string(),
                        })
                        .collect(),
                }),
            }),
        }
    }

    #[test]
    fn test_concept_attributes_are_recorded() {
        let metadata = v10::metadata::Metadata {
            version: Some("10.0".to_string()),
            display_name: None,
            present_at: v10::metadata::PresentAt {
                merrill_quadrant: "Rule".to_string(),
                remediation_only: None,
            },
            content: v10::metadata::Content::Simple(v10::metadata::ContentRef {
                value: "cover.html".to_string(),
            }),
            concepts: v10::metadata::Concepts {
                concept: vec![
                    v10::metadata::Concept {
                        name: "Cover".to_string(),
                        activity_type: Some(passive(&["Auditory", "Visual"])),
                    },
                    v10::metadata::Concept {
                        name: "Concealment".to_string(),
                        activity_type: Some(v10::metadata::ActivityType {
                            kind: v10::metadata::ActivityKind::Active(
                                v10::metadata::EmptyActivity {},
                            ),
                        }),
                    },
                ],
            },
        };

        let mut context = ConversionContext::new("cover.metadata.xml");
        let v11::Document::Metadata(converted) =
            convert(v10::Document::Metadata(metadata), &mut context)
        else {
            panic!("expected metadata");
        };
        assert_eq!(context.issues().len(), 2);
        assert!(context
            .issues()
            .iter()
            .all(|issue| issue == CONCEPT_ATTRIBUTE_ISSUE));
        assert!(matches!(
            converted.concepts.concept[0].activity_type.as_ref().unwrap().kind,
            v11::metadata::ActivityKind::Passive(_)
        ));
        assert!(matches!(
            converted.concepts.concept[1].activity_type.as_ref().unwrap().kind,
            v11::metadata::ActivityKind::Active(_)
        ));
    }

    #[test]
    fn test_unknown_choice_assessment_becomes_absent() {
        let choice = |id, assessment| v7::conversation::Choice {
            id,
            assessment,
            text: format!("Choice {id}"),
            child: None,
        };
        let conversation = v7::conversation::Conversation {
            version: Some("10.0".to_string()),
            name: "Checkpoint".to_string(),
            author: None,
            learners_objective: None,
            start_node_id: 1,
            nodes: v7::conversation::Nodes {
                node: vec![
                    v7::conversation::Node::QuestionNode(v7::conversation::QuestionNode {
                        id: 1,
                        text: "Who goes there?".to_string(),
                        choices: v7::conversation::Choices {
                            choice: vec![
                                choice(1, AssessmentLevel::Unknown),
                                choice(2, AssessmentLevel::AboveExpectation),
                            ],
                        },
                    }),
                    v7::conversation::Node::EndNode(v7::conversation::EndNode { id: 2 }),
                ],
            },
        };

        let mut context = ConversionContext::new("checkpoint.conversationTree.xml");
        let v11::Document::ConversationTree(converted) =
            convert(v10::Document::ConversationTree(conversation), &mut context)
        else {
            panic!("expected a conversation tree");
        };
        let v11::conversation::Node::QuestionNode(question) = &converted.nodes.node[0] else {
            panic!("expected a question");
        };
        let assessments: Vec<_> = question
            .choices
            .choice
            .iter()
            .map(|choice| choice.assessment)
            .collect();
        assert_eq!(
            assessments,
            vec![None, Some(v11::conversation::ChoiceAssessment::AboveExpectation)]
        );
        assert!(context.issues().is_empty());
    }
}
