use crate::converters::{
    all_recognized, map_all, recognized, ConversionContext, MappingError, SchemaConverter,
};
use crate::schema::{v2, v3, SchemaTree};

/// Recorded when a metric's name is dropped while its conditions move up
/// into the concept.
pub const METRIC_NAME_ISSUE: &str = "Metric Name Attribute";

#[derive(Debug, Default, Clone, Copy)]
pub struct V2ToV3Converter;

impl SchemaConverter for V2ToV3Converter {
    fn name(&self) -> &'static str {
        "v2_to_v3"
    }

    fn convert(
        &self,
        tree: SchemaTree,
        context: &mut ConversionContext,
    ) -> Result<SchemaTree, MappingError> {
        let document = match tree {
            SchemaTree::V2(document) => document,
            other => return Err(MappingError::wrong_tree(self, &other)),
        };
        let converted = match document {
            v2::Document::Course(course) => v3::Document::Course(convert_course(course, context)?),
            v2::Document::Scenario(scenario) => {
                v3::Document::Scenario(convert_scenario(scenario, context)?)
            }
        };
        Ok(SchemaTree::V3(converted))
    }
}

fn convert_course(
    course: v2::course::Course,
    context: &mut ConversionContext,
) -> Result<v3::course::Course, MappingError> {
    Ok(v3::course::Course {
        version: course.version,
        name: course.name,
        description: course.description,
        survey_context: course.survey_context,
        exclude: None,
        transitions: v3::course::Transitions {
            transition: map_all(course.transitions.transition, context, convert_transition)?,
        },
    })
}

fn convert_transition(
    transition: v2::course::Transition,
    _context: &mut ConversionContext,
) -> Result<v3::course::Transition, MappingError> {
    use v2::course::Transition as Old;
    use v3::course::Transition as New;

    Ok(match transition {
        Old::Guidance(guidance) => New::Guidance(convert_guidance(guidance)),
        Old::PresentSurvey(survey) => New::PresentSurvey(v3::course::PresentSurvey {
            transition_name: None,
            full_screen: survey.full_screen,
            choice: v3::course::SurveyChoice::GiftSurveyKey(survey.gift_survey_key),
        }),
        Old::Aar(aar) => New::Aar(v3::course::Aar {
            transition_name: None,
            full_screen: aar.full_screen,
        }),
        Old::TrainingApplication(app) => {
            New::TrainingApplication(convert_training_application(app)?)
        }
        Old::LessonMaterial(material) => New::LessonMaterial(v3::course::LessonMaterial {
            transition_name: None,
            list: material.list.map(check_media_list).transpose()?,
            files: material.files,
        }),
        Old::Unrecognized(element) => return Err(MappingError::unhandled::<Old>(&element)),
    })
}

fn convert_guidance(guidance: v2::course::Guidance) -> v3::course::Guidance {
    v3::course::Guidance {
        transition_name: None,
        display_time: guidance.display_time,
        full_screen: guidance.full_screen,
        choice: v3::course::GuidanceChoice::Message(v3::course::GuidanceMessage {
            content: guidance.message,
        }),
    }
}

fn convert_training_application(
    app: v2::course::TrainingApplication,
) -> Result<v3::course::TrainingApplication, MappingError> {
    Ok(v3::course::TrainingApplication {
        transition_name: None,
        dkf_ref: app.dkf_ref,
        finished_when: app.finished_when,
        guidance: app.guidance.map(convert_guidance),
        options: app.options,
        interops: check_interops(app.interops)?,
    })
}

fn check_interops(interops: v2::course::Interops) -> Result<v3::course::Interops, MappingError> {
    let interop = interops
        .interop
        .into_iter()
        .map(|interop| {
            Ok(v3::course::Interop {
                interop_impl: interop.interop_impl,
                interop_inputs: v3::course::InteropInputs {
                    input: recognized(interop.interop_inputs.input)?,
                },
            })
        })
        .collect::<Result<Vec<_>, MappingError>>()?;
    Ok(v3::course::Interops { interop })
}

fn check_media_list(
    list: v2::course::LessonMaterialList,
) -> Result<v3::course::LessonMaterialList, MappingError> {
    let media = list
        .media
        .into_iter()
        .map(|media| {
            Ok(v3::course::Media {
                name: media.name,
                uri: media.uri,
                properties: recognized(media.properties)?,
            })
        })
        .collect::<Result<Vec<_>, MappingError>>()?;
    Ok(v3::course::LessonMaterialList { media })
}

fn convert_scenario(
    scenario: v2::dkf::Scenario,
    context: &mut ConversionContext,
) -> Result<v3::dkf::Scenario, MappingError> {
    Ok(v3::dkf::Scenario {
        version: scenario.version,
        name: scenario.name,
        description: scenario.description,
        learner_id: scenario.learner_id.map(convert_learner_id).transpose()?,
        resources: scenario.resources,
        assessment: scenario
            .assessment
            .map(|assessment| convert_assessment(assessment, context))
            .transpose()?,
        actions: scenario.actions.map(convert_actions).transpose()?,
    })
}

fn convert_learner_id(learner_id: v2::dkf::LearnerId) -> Result<v3::dkf::LearnerId, MappingError> {
    let coordinate = learner_id.location.coordinate;
    Ok(v3::dkf::LearnerId {
        kind: v3::dkf::LearnerIdType::StartLocation(v3::dkf::StartLocation {
            coordinate: v3::dkf::Coordinate {
                kind: recognized(coordinate.kind)?,
            },
        }),
    })
}

fn convert_assessment(
    assessment: v2::dkf::Assessment,
    context: &mut ConversionContext,
) -> Result<v3::dkf::Assessment, MappingError> {
    Ok(v3::dkf::Assessment {
        objects: assessment.objects,
        tasks: v3::dkf::Tasks {
            task: map_all(assessment.tasks.task, context, convert_task)?,
        },
    })
}

fn check_triggers(triggers: v2::dkf::Triggers) -> Result<v3::dkf::Triggers, MappingError> {
    Ok(v3::dkf::Triggers {
        trigger: all_recognized(triggers.trigger)?,
    })
}

fn check_assessments(
    assessments: v2::dkf::Assessments,
) -> Result<v3::dkf::Assessments, MappingError> {
    Ok(v3::dkf::Assessments {
        kind: all_recognized(assessments.kind)?,
    })
}

fn convert_task(
    task: v2::dkf::Task,
    context: &mut ConversionContext,
) -> Result<v3::dkf::Task, MappingError> {
    Ok(v3::dkf::Task {
        name: task.name,
        node_id: task.node_id,
        start_triggers: task.start_triggers.map(check_triggers).transpose()?,
        end_triggers: task.end_triggers.map(check_triggers).transpose()?,
        concepts: task
            .concepts
            .map(|concepts| convert_concepts(concepts, context))
            .transpose()?,
        assessments: task.assessments.map(check_assessments).transpose()?,
    })
}

fn convert_concepts(
    concepts: v2::dkf::Concepts,
    context: &mut ConversionContext,
) -> Result<v3::dkf::Concepts, MappingError> {
    Ok(v3::dkf::Concepts {
        concept: map_all(concepts.concept, context, convert_concept)?,
    })
}

fn convert_concept(
    concept: v2::dkf::Concept,
    context: &mut ConversionContext,
) -> Result<v3::dkf::Concept, MappingError> {
    use v2::dkf::MetricsOrConcepts as Old;
    use v3::dkf::ConditionsOrConcepts as New;

    let children = match concept.children {
        Old::Metrics(metrics) => {
            let mut condition = Vec::new();
            for metric in metrics.metric {
                if metric.name.is_some() {
                    context.add_issue(METRIC_NAME_ISSUE);
                }
                for old in metric.conditions.condition {
                    condition.push(convert_condition(old)?);
                }
            }
            New::Conditions(v3::dkf::Conditions { condition })
        }
        Old::Concepts(concepts) => New::Concepts(convert_concepts(concepts, context)?),
        Old::Unrecognized(element) => return Err(MappingError::unhandled::<Old>(&element)),
    };

    Ok(v3::dkf::Concept {
        name: concept.name,
        node_id: concept.node_id,
        assessments: concept.assessments.map(check_assessments).transpose()?,
        children,
    })
}

fn convert_condition(condition: v2::dkf::Condition) -> Result<v3::dkf::Condition, MappingError> {
    Ok(v3::dkf::Condition {
        condition_impl: condition.condition_impl,
        default: condition.default,
        input: condition
            .input
            .map(|input| convert_input_type(input.kind).map(|kind| v3::dkf::Input { kind }))
            .transpose()?,
        scoring: condition.scoring.map(recognized).transpose()?,
    })
}

fn convert_input_type(input: v2::dkf::InputType) -> Result<v3::dkf::InputType, MappingError> {
    use v2::dkf::InputType as Old;
    use v3::dkf::InputType as New;

    Ok(match input {
        Old::ApplicationCompleted(condition) => New::ApplicationCompleted(condition),
        Old::AvoidLocation(condition) => New::AvoidLocation(condition),
        Old::CheckpointPace(condition) => New::CheckpointPace(condition),
        Old::CheckpointProgress(condition) => New::CheckpointProgress(condition),
        Old::CorridorBoundary(condition) => New::CorridorBoundary(condition),
        Old::CorridorPosture(condition) => New::CorridorPosture(condition),
        Old::EliminateHostiles(condition) => New::EliminateHostiles(recognized(condition)?),
        Old::EnterArea(condition) => New::EnterArea(condition),
        Old::Generic(condition) => New::Generic(condition),
        Old::Unrecognized(element) => return Err(MappingError::unhandled::<Old>(&element)),
    })
}

fn convert_actions(actions: v2::dkf::Actions) -> Result<v3::dkf::Actions, MappingError> {
    let instructional_strategies = match actions.instructional_strategies {
        Some(strategies) => Some(v3::dkf::InstructionalStrategies {
            strategy: strategies
                .strategy
                .into_iter()
                .map(convert_strategy)
                .collect::<Result<_, _>>()?,
        }),
        None => None,
    };
    let state_transitions = match actions.state_transitions {
        Some(transitions) => Some(v3::dkf::StateTransitions {
            state_transition: transitions
                .state_transition
                .into_iter()
                .map(convert_state_transition)
                .collect::<Result<_, _>>()?,
        }),
        None => None,
    };
    Ok(v3::dkf::Actions {
        instructional_strategies,
        state_transitions,
    })
}

fn convert_strategy(strategy: v2::dkf::Strategy) -> Result<v3::dkf::Strategy, MappingError> {
    use v2::dkf::StrategyType as Old;
    use v3::dkf::StrategyType as New;

    let kind = match strategy.kind {
        Old::PerformanceAssessment(assessment) => New::PerformanceAssessment(assessment),
        Old::InstructionalIntervention(intervention) => {
            New::InstructionalIntervention(v3::dkf::InstructionalIntervention {
                strategy_handler: intervention.strategy_handler,
                feedback: intervention
                    .feedback
                    .into_iter()
                    .map(|feedback| v3::dkf::Feedback {
                        presentation: v3::dkf::FeedbackPresentation::Message(
                            v3::dkf::FeedbackMessage {
                                content: feedback.message,
                            },
                        ),
                    })
                    .collect(),
            })
        }
        Old::ScenarioAdaptation(adaptation) => New::ScenarioAdaptation(adaptation),
        Old::Unrecognized(element) => return Err(MappingError::unhandled::<Old>(&element)),
    };
    Ok(v3::dkf::Strategy {
        name: strategy.name,
        kind,
    })
}

fn convert_state_transition(
    transition: v2::dkf::StateTransition,
) -> Result<v3::dkf::StateTransition, MappingError> {
    Ok(v3::dkf::StateTransition {
        name: transition.name,
        logical_expression: v3::dkf::LogicalExpression {
            state_type: vec![recognized(transition.state_type)?],
        },
        strategy_choices: transition.strategy_choices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::schema::common::UnrecognizedElement;

    fn convert(document: v2::Document, context: &mut ConversionContext) -> v3::Document {
        match V2ToV3Converter.convert(SchemaTree::V2(document), context).unwrap() {
            SchemaTree::V3(document) => document,
            other => panic!("expected a 3.0 tree, got {:?}", other.generation()),
        }
    }

    #[test]
    fn test_guidance_message_becomes_message_choice() {
        let mut context = ConversionContext::new("intro.course.xml");
        let course = fixtures::v2_guidance_course("Read the briefing first");

        let v3::Document::Course(course) = convert(v2::Document::Course(course), &mut context)
        else {
            panic!("expected a course");
        };
        assert_eq!(course.transitions.transition.len(), 1);
        match &course.transitions.transition[0] {
            v3::course::Transition::Guidance(guidance) => {
                assert_eq!(guidance.transition_name, None);
                assert_eq!(
                    guidance.choice,
                    v3::course::GuidanceChoice::Message(v3::course::GuidanceMessage {
                        content: "Read the briefing first".to_string()
                    })
                );
            }
            other => panic!("unexpected transition {other:?}"),
        }
        assert!(context.issues().is_empty());
    }

    #[test]
    fn test_transition_order_is_preserved() {
        let mut context = ConversionContext::new("full.course.xml");
        let v3::Document::Course(course) =
            convert(v2::Document::Course(fixtures::v2_course()), &mut context)
        else {
            panic!("expected a course");
        };

        let kinds: Vec<&str> = course
            .transitions
            .transition
            .iter()
            .map(|transition| match transition {
                v3::course::Transition::Guidance(_) => "guidance",
                v3::course::Transition::PresentSurvey(_) => "survey",
                v3::course::Transition::Aar(_) => "aar",
                v3::course::Transition::TrainingApplication(_) => "training",
                v3::course::Transition::LessonMaterial(_) => "lesson",
                _ => "other",
            })
            .collect();
        assert_eq!(kinds, vec!["guidance", "survey", "aar", "training", "lesson"]);
    }

    #[test]
    fn test_metrics_are_flattened_in_order() {
        let mut context = ConversionContext::new("patrol.dkf.xml");
        let v3::Document::Scenario(scenario) =
            convert(v2::Document::Scenario(fixtures::v2_scenario()), &mut context)
        else {
            panic!("expected a scenario");
        };

        let task = &scenario.assessment.as_ref().unwrap().tasks.task[0];
        let concept = &task.concepts.as_ref().unwrap().concept[0];
        let v3::dkf::ConditionsOrConcepts::Conditions(conditions) = &concept.children else {
            panic!("expected conditions");
        };
        let impls: Vec<&str> = conditions
            .condition
            .iter()
            .map(|condition| condition.condition_impl.as_str())
            .collect();
        assert_eq!(impls, fixtures::V2_CONDITION_IMPLS.to_vec());

        // The fixture names one of its two metrics.
        assert_eq!(context.issues(), [METRIC_NAME_ISSUE.to_string()]);
    }

    #[test]
    fn test_learner_id_and_state_transition_are_wrapped() {
        let mut context = ConversionContext::new("patrol.dkf.xml");
        let v3::Document::Scenario(scenario) =
            convert(v2::Document::Scenario(fixtures::v2_scenario()), &mut context)
        else {
            panic!("expected a scenario");
        };

        assert!(matches!(
            scenario.learner_id.as_ref().unwrap().kind,
            v3::dkf::LearnerIdType::StartLocation(_)
        ));
        let transitions = &scenario.actions.as_ref().unwrap().state_transitions;
        let transition = &transitions.as_ref().unwrap().state_transition[0];
        assert_eq!(transition.logical_expression.state_type.len(), 1);
    }

    #[test]
    fn test_feedback_message_is_wrapped() {
        let mut context = ConversionContext::new("patrol.dkf.xml");
        let v3::Document::Scenario(scenario) =
            convert(v2::Document::Scenario(fixtures::v2_scenario()), &mut context)
        else {
            panic!("expected a scenario");
        };

        let strategies = scenario.actions.unwrap().instructional_strategies.unwrap();
        let feedback = strategies
            .strategy
            .iter()
            .find_map(|strategy| match &strategy.kind {
                v3::dkf::StrategyType::InstructionalIntervention(intervention) => {
                    Some(intervention.feedback.clone())
                }
                _ => None,
            })
            .unwrap();
        assert_eq!(
            feedback[0].presentation,
            v3::dkf::FeedbackPresentation::Message(v3::dkf::FeedbackMessage {
                content: "Check your corners".to_string()
            })
        );
    }

    #[test]
    fn test_unrecognized_transition_is_fatal() {
        let mut course = fixtures::v2_course();
        course
            .transitions
            .transition
            .push(v2::course::Transition::Unrecognized(UnrecognizedElement::new(
                "HologramBriefing",
            )));

        let mut context = ConversionContext::new("bad.course.xml");
        let err = V2ToV3Converter
            .convert(SchemaTree::V2(v2::Document::Course(course)), &mut context)
            .unwrap_err();
        assert_eq!(
            err,
            MappingError::UnhandledVariant {
                choice: "transition",
                element: "HologramBriefing".to_string(),
            }
        );
    }

    #[test]
    fn test_unrecognized_trigger_in_reused_shape_is_fatal() {
        let mut scenario = fixtures::v2_scenario();
        let tasks = &mut scenario.assessment.as_mut().unwrap().tasks.task;
        tasks[0].start_triggers = Some(v2::dkf::Triggers {
            trigger: vec![v2::dkf::Trigger::Unrecognized(UnrecognizedElement::new(
                "weatherChanged",
            ))],
        });

        let mut context = ConversionContext::new("bad.dkf.xml");
        let err = V2ToV3Converter
            .convert(SchemaTree::V2(v2::Document::Scenario(scenario)), &mut context)
            .unwrap_err();
        assert!(matches!(err, MappingError::UnhandledVariant { choice: "trigger", .. }));
    }

    #[test]
    fn test_rejects_other_generations() {
        let mut context = ConversionContext::new("x.course.xml");
        let tree = SchemaTree::V3(v3::Document::Course(v3::course::Course {
            version: None,
            name: "x".to_string(),
            description: None,
            survey_context: None,
            exclude: None,
            transitions: Default::default(),
        }));
        let err = V2ToV3Converter.convert(tree, &mut context).unwrap_err();
        assert!(matches!(err, MappingError::WrongTree { .. }));
    }
}
