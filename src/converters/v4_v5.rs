use crate::converters::{map_all, recognized, ConversionContext, MappingError, SchemaConverter};
use crate::schema::{v4, v5, SchemaTree};

pub const LOCAL_SKO_ISSUE: &str = "Auto Tutor Local Shared Knowledge File Element (ATLocalSKO)";

#[derive(Debug, Default, Clone, Copy)]
pub struct V4ToV5Converter;

impl SchemaConverter for V4ToV5Converter {
    fn name(&self) -> &'static str {
        "v4_to_v5"
    }

    fn convert(
        &self,
        tree: SchemaTree,
        context: &mut ConversionContext,
    ) -> Result<SchemaTree, MappingError> {
        let document = match tree {
            SchemaTree::V4(document) => document,
            other => return Err(MappingError::wrong_tree(self, &other)),
        };
        let converted = match document {
            v4::Document::Course(course) => v5::Document::Course(recognized(course)?),
            v4::Document::Scenario(scenario) => {
                v5::Document::Scenario(convert_scenario(scenario, context)?)
            }
            v4::Document::LearnerConfig(config) => v5::Document::LearnerConfig(recognized(config)?),
            v4::Document::PedagogyConfig(config) => {
                v5::Document::PedagogyConfig(recognized(config)?)
            }
        };
        Ok(SchemaTree::V5(converted))
    }
}

fn convert_scenario(
    scenario: v4::dkf::Scenario,
    context: &mut ConversionContext,
) -> Result<v5::dkf::Scenario, MappingError> {
    let assessment = match scenario.assessment {
        Some(assessment) => Some(v5::dkf::Assessment {
            objects: assessment.objects,
            tasks: v5::dkf::Tasks {
                task: map_all(assessment.tasks.task, context, convert_task)?,
            },
        }),
        None => None,
    };
    Ok(v5::dkf::Scenario {
        version: scenario.version,
        name: scenario.name,
        description: scenario.description,
        learner_id: scenario.learner_id,
        resources: scenario.resources,
        assessment,
        actions: scenario.actions,
    })
}

fn convert_task(
    task: v4::dkf::Task,
    context: &mut ConversionContext,
) -> Result<v5::dkf::Task, MappingError> {
    Ok(v5::dkf::Task {
        name: task.name,
        node_id: task.node_id,
        start_triggers: task.start_triggers,
        end_triggers: task.end_triggers,
        concepts: task
            .concepts
            .map(|concepts| convert_concepts(concepts, context))
            .transpose()?,
        assessments: task.assessments,
    })
}

fn convert_concepts(
    concepts: v4::dkf::Concepts,
    context: &mut ConversionContext,
) -> Result<v5::dkf::Concepts, MappingError> {
    Ok(v5::dkf::Concepts {
        concept: map_all(concepts.concept, context, convert_concept)?,
    })
}

fn convert_concept(
    concept: v4::dkf::Concept,
    context: &mut ConversionContext,
) -> Result<v5::dkf::Concept, MappingError> {
    use v4::dkf::ConditionsOrConcepts as Old;
    use v5::dkf::ConditionsOrConcepts as New;

    let children = match concept.children {
        Old::Conditions(conditions) => New::Conditions(v5::dkf::Conditions {
            condition: map_all(conditions.condition, context, convert_condition)?,
        }),
        Old::Concepts(concepts) => New::Concepts(convert_concepts(concepts, context)?),
        Old::Unrecognized(element) => return Err(MappingError::unhandled::<Old>(&element)),
    };
    Ok(v5::dkf::Concept {
        name: concept.name,
        node_id: concept.node_id,
        assessments: concept.assessments,
        children,
    })
}

fn convert_condition(
    condition: v4::dkf::Condition,
    context: &mut ConversionContext,
) -> Result<v5::dkf::Condition, MappingError> {
    let input = match condition.input {
        Some(input) => Some(v5::dkf::Input {
            kind: convert_input_type(input.kind, context)?,
        }),
        None => None,
    };
    Ok(v5::dkf::Condition {
        condition_impl: condition.condition_impl,
        default: condition.default,
        input,
        // A scoring element must have children from this generation.
        scoring: condition.scoring.filter(|scoring| !scoring.kind.is_empty()),
    })
}

fn convert_input_type(
    input: v4::dkf::InputType,
    context: &mut ConversionContext,
) -> Result<v5::dkf::InputType, MappingError> {
    use v4::dkf::InputType as Old;
    use v5::dkf::InputType as New;

    Ok(match input {
        Old::ApplicationCompleted(condition) => New::ApplicationCompleted(condition),
        Old::AutoTutor(auto_tutor) => New::AutoTutor(v5::dkf::AutoTutorConditionInput {
            script: convert_script(auto_tutor.script, context)?,
        }),
        Old::AvoidLocation(condition) => New::AvoidLocation(condition),
        Old::CheckpointPace(condition) => New::CheckpointPace(condition),
        Old::CheckpointProgress(condition) => New::CheckpointProgress(condition),
        Old::CorridorBoundary(condition) => New::CorridorBoundary(condition),
        Old::CorridorPosture(condition) => New::CorridorPosture(condition),
        Old::EliminateHostiles(condition) => New::EliminateHostiles(condition),
        Old::EnterArea(condition) => New::EnterArea(condition),
        Old::Generic(condition) => New::Generic(condition),
        Old::Simile(condition) => New::Simile(condition),
        Old::Unrecognized(element) => return Err(MappingError::unhandled::<Old>(&element)),
    })
}

fn convert_script(
    script: v4::dkf::AutoTutorScript,
    context: &mut ConversionContext,
) -> Result<Option<v5::dkf::AutoTutorScript>, MappingError> {
    use v4::dkf::AutoTutorScript as Old;
    use v5::dkf::AutoTutorScript as New;

    match script {
        Old::LocalSko(_) => {
            context.add_issue(LOCAL_SKO_ISSUE);
            Ok(None)
        }
        Old::RemoteSko(remote) => Ok(Some(New::RemoteSko(remote))),
        Old::Unrecognized(element) => Err(MappingError::unhandled::<Old>(&element)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn auto_tutor(script: v4::dkf::AutoTutorScript) -> v4::dkf::Condition {
        v4::dkf::Condition {
            condition_impl: "domain.knowledge.condition.AutoTutorWebServiceInterfaceCondition"
                .to_string(),
            default: None,
            input: Some(v4::dkf::Input {
                kind: v4::dkf::InputType::AutoTutor(v4::dkf::AutoTutorConditionInput { script }),
            }),
            scoring: None,
        }
    }

    fn conditions_of(scenario: &v5::dkf::Scenario) -> &[v5::dkf::Condition] {
        let task = &scenario.assessment.as_ref().unwrap().tasks.task[0];
        match &task.concepts.as_ref().unwrap().concept[0].children {
            v5::dkf::ConditionsOrConcepts::Conditions(conditions) => &conditions.condition,
            other => panic!("expected conditions, got {other:?}"),
        }
    }

    fn convert(
        scenario: v4::dkf::Scenario,
        context: &mut ConversionContext,
    ) -> v5::dkf::Scenario {
        let tree = SchemaTree::V4(v4::Document::Scenario(scenario));
        match V4ToV5Converter.convert(tree, context).unwrap() {
            SchemaTree::V5(v5::Document::Scenario(scenario)) => scenario,
            other => panic!("expected a 5.0 scenario, got {:?}", other.generation()),
        }
    }

    #[test]
    fn test_local_sko_is_dropped_and_recorded() {
        let local = auto_tutor(v4::dkf::AutoTutorScript::LocalSko(v4::dkf::LocalSko {
            file: "tutor.sko".to_string(),
        }));
        let remote = auto_tutor(v4::dkf::AutoTutorScript::RemoteSko(v4::dkf::RemoteSko {
            url: v4::dkf::SkoUrl {
                address: "http://tutor.example/sko".to_string(),
            },
        }));
        let mut context = ConversionContext::new("tutor.dkf.xml");
        let scenario = convert(fixtures::v4_scenario_with(vec![local, remote]), &mut context);

        let conditions = conditions_of(&scenario);
        let scripts: Vec<bool> = conditions
            .iter()
            .map(|condition| match &condition.input.as_ref().unwrap().kind {
                v5::dkf::InputType::AutoTutor(input) => input.script.is_some(),
                other => panic!("unexpected input {other:?}"),
            })
            .collect();
        assert_eq!(scripts, vec![false, true]);
        assert_eq!(context.issues(), [LOCAL_SKO_ISSUE.to_string()]);
    }

    #[test]
    fn test_empty_scoring_is_removed() {
        let mut empty = auto_tutor(v4::dkf::AutoTutorScript::RemoteSko(v4::dkf::RemoteSko {
            url: v4::dkf::SkoUrl {
                address: "http://tutor.example/sko".to_string(),
            },
        }));
        empty.scoring = Some(v4::dkf::Scoring { kind: Vec::new() });

        let mut context = ConversionContext::new("tutor.dkf.xml");
        let scenario = convert(fixtures::v4_scenario_with(vec![empty]), &mut context);
        assert_eq!(conditions_of(&scenario)[0].scoring, None);
        assert!(context.issues().is_empty());
    }

    #[test]
    fn test_other_kinds_pass_through() {
        let config = fixtures::v4_learner_config();
        let mut context = ConversionContext::new("a.learnerconfig.xml");
        let converted = V4ToV5Converter
            .convert(
                SchemaTree::V4(v4::Document::LearnerConfig(config.clone())),
                &mut context,
            )
            .unwrap();
        assert_eq!(
            converted,
            SchemaTree::V5(v5::Document::LearnerConfig(config))
        );
    }

    #[test]
    fn test_simile_input_is_mapped() {
        let simile = v4::dkf::SimileConditionInput {
            condition_key: None,
            configuration_file: Some("patrol.simile.ixs".to_string()),
        };
        let condition = v4::dkf::Condition {
            condition_impl: "domain.knowledge.condition.SIMILEInterfaceCondition".to_string(),
            default: None,
            input: Some(v4::dkf::Input {
                kind: v4::dkf::InputType::Simile(simile.clone()),
            }),
            scoring: None,
        };
        let mut context = ConversionContext::new("simile.dkf.xml");
        let scenario = convert(fixtures::v4_scenario_with(vec![condition]), &mut context);
        assert_eq!(
            conditions_of(&scenario)[0].input.as_ref().unwrap().kind,
            v5::dkf::InputType::Simile(simile)
        );
    }

    #[test]
    fn test_pass_through_course_is_checked() {
        let mut course = fixtures::v4_course();
        course.transitions.transition.insert(
            0,
            v4::course::Transition::Unrecognized(crate::schema::common::UnrecognizedElement::new(
                "Hologram",
            )),
        );
        let mut context = ConversionContext::new("intro.course.xml");
        let err = V4ToV5Converter
            .convert(SchemaTree::V4(v4::Document::Course(course)), &mut context)
            .unwrap_err();
        assert!(matches!(
            err,
            MappingError::UnhandledVariant { choice: "transition", .. }
        ));
    }
}
