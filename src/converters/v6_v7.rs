use crate::converters::{map_all, recognized, ConversionContext, MappingError, SchemaConverter};
use crate::schema::{v5, v6, v7, SchemaTree};

#[derive(Debug, Default, Clone, Copy)]
pub struct V6ToV7Converter;

impl SchemaConverter for V6ToV7Converter {
    fn name(&self) -> &'static str {
        "v6_to_v7"
    }

    fn convert(
        &self,
        tree: SchemaTree,
        context: &mut ConversionContext,
    ) -> Result<SchemaTree, MappingError> {
        let document = match tree {
            SchemaTree::V6(document) => document,
            other => return Err(MappingError::wrong_tree(self, &other)),
        };
        let converted = match document {
            v6::Document::Course(course) => v7::Document::Course(recognized(course)?),
            v6::Document::Scenario(scenario) => {
                v7::Document::Scenario(convert_scenario(scenario, context)?)
            }
            v6::Document::LearnerConfig(config) => v7::Document::LearnerConfig(recognized(config)?),
            v6::Document::PedagogyConfig(config) => {
                v7::Document::PedagogyConfig(recognized(config)?)
            }
            v6::Document::Metadata(metadata) => v7::Document::Metadata(recognized(metadata)?),
            v6::Document::TrainingAppRef(wrapper) => {
                v7::Document::TrainingAppRef(recognized(wrapper)?)
            }
            v6::Document::SensorConfig(config) => v7::Document::SensorConfig(recognized(config)?),
            v6::Document::LessonMaterialRef(list) => {
                v7::Document::LessonMaterialRef(recognized(list)?)
            }
        };
        Ok(SchemaTree::V7(converted))
    }
}

fn convert_scenario(
    scenario: v5::dkf::Scenario,
    context: &mut ConversionContext,
) -> Result<v7::dkf::Scenario, MappingError> {
    let assessment = match scenario.assessment {
        Some(assessment) => Some(v7::dkf::Assessment {
            objects: assessment.objects.map(convert_objects),
            tasks: v7::dkf::Tasks {
                task: map_all(assessment.tasks.task, context, convert_task)?,
            },
        }),
        None => None,
    };
    Ok(v7::dkf::Scenario {
        version: scenario.version,
        name: scenario.name,
        description: scenario.description,
        learner_id: scenario.learner_id,
        resources: scenario.resources,
        assessment,
        actions: scenario.actions,
    })
}

fn convert_objects(objects: v5::dkf::Objects) -> v7::dkf::Objects {
    v7::dkf::Objects {
        places_of_interest: objects.waypoints.map(|waypoints| v7::dkf::PlacesOfInterest {
            place: waypoints
                .waypoint
                .into_iter()
                .map(|waypoint| {
                    v7::dkf::PlaceOfInterest::Point(v7::dkf::Point {
                        name: waypoint.name,
                        coordinate: waypoint.coordinate,
                    })
                })
                .collect(),
        }),
    }
}

fn convert_task(
    task: v5::dkf::Task,
    context: &mut ConversionContext,
) -> Result<v7::dkf::Task, MappingError> {
    Ok(v7::dkf::Task {
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
    concepts: v5::dkf::Concepts,
    context: &mut ConversionContext,
) -> Result<v7::dkf::Concepts, MappingError> {
    Ok(v7::dkf::Concepts {
        concept: map_all(concepts.concept, context, convert_concept)?,
    })
}

fn convert_concept(
    concept: v5::dkf::Concept,
    context: &mut ConversionContext,
) -> Result<v7::dkf::Concept, MappingError> {
    use v5::dkf::ConditionsOrConcepts as Old;
    use v7::dkf::ConditionsOrConcepts as New;

    let children = match concept.children {
        Old::Conditions(conditions) => New::Conditions(v7::dkf::Conditions {
            condition: conditions
                .condition
                .into_iter()
                .map(convert_condition)
                .collect::<Result<_, _>>()?,
        }),
        Old::Concepts(concepts) => New::Concepts(convert_concepts(concepts, context)?),
        Old::Unrecognized(element) => return Err(MappingError::unhandled::<Old>(&element)),
    };
    Ok(v7::dkf::Concept {
        name: concept.name,
        node_id: concept.node_id,
        assessments: concept.assessments,
        children,
    })
}

fn convert_condition(condition: v5::dkf::Condition) -> Result<v7::dkf::Condition, MappingError> {
    let input = match condition.input {
        Some(input) => Some(v7::dkf::Input {
            kind: convert_input_type(input.kind)?,
        }),
        None => None,
    };
    Ok(v7::dkf::Condition {
        condition_impl: condition.condition_impl,
        default: condition.default,
        input,
        scoring: condition.scoring,
    })
}

fn convert_input_type(input: v5::dkf::InputType) -> Result<v7::dkf::InputType, MappingError> {
    use v5::dkf::InputType as Old;
    use v7::dkf::InputType as New;

    Ok(match input {
        Old::ApplicationCompleted(condition) => New::ApplicationCompleted(condition),
        Old::AutoTutor(condition) => New::AutoTutor(condition),
        Old::AvoidLocation(condition) => New::AvoidLocation(v7::dkf::AvoidLocationCondition {
            point_ref: condition.waypoint_ref.into_iter().map(point_ref).collect(),
        }),
        Old::CheckpointPace(condition) => New::CheckpointPace(checkpoints(condition)),
        Old::CheckpointProgress(condition) => New::CheckpointProgress(checkpoints(condition)),
        Old::CorridorBoundary(condition) => {
            New::CorridorBoundary(v7::dkf::CorridorBoundaryCondition {
                buffer_width_percent: condition.buffer_width_percent,
                path: point_path(condition.path),
            })
        }
        Old::CorridorPosture(condition) => {
            New::CorridorPosture(v7::dkf::CorridorPostureCondition {
                path: point_path(condition.path),
                postures: condition.postures,
            })
        }
        Old::EliminateHostiles(condition) => New::EliminateHostiles(condition),
        Old::EnterArea(condition) => New::EnterArea(v7::dkf::EnterAreaCondition {
            entrance: condition
                .entrance
                .into_iter()
                .map(|entrance| v7::dkf::Entrance {
                    name: entrance.name,
                    assessment: entrance.assessment,
                    outside: point_boundary(entrance.outside),
                    inside: point_boundary(entrance.inside),
                })
                .collect(),
        }),
        Old::Generic(condition) => New::Generic(condition),
        Old::Simile(condition) => New::Simile(condition),
        Old::Timer(condition) => New::Timer(condition),
        Old::Unrecognized(element) => return Err(MappingError::unhandled::<Old>(&element)),
    })
}

fn point_ref(waypoint: v5::dkf::WaypointRef) -> v7::dkf::PointRef {
    v7::dkf::PointRef {
        value: waypoint.value,
        distance: waypoint.distance,
    }
}

fn point_path(path: v5::dkf::WaypointPath) -> v7::dkf::PointPath {
    v7::dkf::PointPath {
        point_ref: path.waypoint_ref.into_iter().map(point_ref).collect(),
    }
}

fn point_boundary(boundary: v5::dkf::WaypointBoundary) -> v7::dkf::PointBoundary {
    v7::dkf::PointBoundary {
        point: boundary.waypoint,
        proximity: boundary.proximity,
    }
}

fn checkpoints(condition: v5::dkf::CheckpointCondition) -> v7::dkf::CheckpointCondition {
    v7::dkf::CheckpointCondition {
        checkpoint: condition
            .checkpoint
            .into_iter()
            .map(|checkpoint| v7::dkf::Checkpoint {
                point: checkpoint.waypoint,
                at_time: checkpoint.at_time,
                window_of_time: checkpoint.window_of_time,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::common::{AssessmentLevel, BooleanEnum, UnrecognizedElement};

    fn waypoint_ref(value: &str) -> v5::dkf::WaypointRef {
        v5::dkf::WaypointRef {
            value: value.to_string(),
            distance: None,
        }
    }

    fn convert(scenario: v5::dkf::Scenario) -> v7::dkf::Scenario {
        let mut context = ConversionContext::new("route.dkf.xml");
        let tree = SchemaTree::V6(v6::Document::Scenario(scenario));
        match V6ToV7Converter.convert(tree, &mut context).unwrap() {
            SchemaTree::V7(v7::Document::Scenario(scenario)) => scenario,
            other => panic!("expected a 7.0 scenario, got {:?}", other.generation()),
        }
    }

    #[test]
    fn test_waypoints_become_points() {
        let scenario = crate::fixtures::v5_route_scenario(vec![
            v5::dkf::InputType::AvoidLocation(v5::dkf::AvoidLocationCondition {
                waypoint_ref: vec![waypoint_ref("Bridge"), waypoint_ref("Market")],
            }),
            v5::dkf::InputType::CheckpointPace(v5::dkf::CheckpointCondition {
                checkpoint: vec![v5::dkf::Checkpoint {
                    waypoint: "Bridge".to_string(),
                    at_time: "00:05:00".to_string(),
                    window_of_time: 30.0,
                }],
            }),
            v5::dkf::InputType::EnterArea(v5::dkf::EnterAreaCondition {
                entrance: vec![v5::dkf::Entrance {
                    name: "Gate".to_string(),
                    assessment: AssessmentLevel::AtExpectation,
                    outside: v5::dkf::WaypointBoundary {
                        waypoint: "Market".to_string(),
                        proximity: 5.0,
                    },
                    inside: v5::dkf::WaypointBoundary {
                        waypoint: "Bridge".to_string(),
                        proximity: 2.5,
                    },
                }],
            }),
        ]);

        let converted = convert(scenario);
        let assessment = converted.assessment.as_ref().unwrap();
        let places = &assessment
            .objects
            .as_ref()
            .unwrap()
            .places_of_interest
            .as_ref()
            .unwrap()
            .place;
        let names: Vec<&str> = places
            .iter()
            .map(|place| match place {
                v7::dkf::PlaceOfInterest::Point(point) => point.name.as_str(),
                other => panic!("unexpected place {other:?}"),
            })
            .collect();
        assert_eq!(names, vec!["Bridge", "Market"]);

        let concept = &assessment.tasks.task[0].concepts.as_ref().unwrap().concept[0];
        let v7::dkf::ConditionsOrConcepts::Conditions(conditions) = &concept.children else {
            panic!("expected conditions");
        };
        let inputs: Vec<&v7::dkf::InputType> = conditions
            .condition
            .iter()
            .map(|condition| &condition.input.as_ref().unwrap().kind)
            .collect();

        match inputs[0] {
            v7::dkf::InputType::AvoidLocation(avoid) => {
                let refs: Vec<&str> = avoid.point_ref.iter().map(|r| r.value.as_str()).collect();
                assert_eq!(refs, vec!["Bridge", "Market"]);
            }
            other => panic!("unexpected input {other:?}"),
        }
        match inputs[1] {
            v7::dkf::InputType::CheckpointPace(pace) => {
                assert_eq!(pace.checkpoint[0].point, "Bridge");
            }
            other => panic!("unexpected input {other:?}"),
        }
        match inputs[2] {
            v7::dkf::InputType::EnterArea(area) => {
                assert_eq!(area.entrance[0].outside.point, "Market");
                assert_eq!(area.entrance[0].inside.point, "Bridge");
            }
            other => panic!("unexpected input {other:?}"),
        }
    }

    fn input_kinds(scenario: &v7::dkf::Scenario) -> Vec<&v7::dkf::InputType> {
        let task = &scenario.assessment.as_ref().unwrap().tasks.task[0];
        let concept = &task.concepts.as_ref().unwrap().concept[0];
        let v7::dkf::ConditionsOrConcepts::Conditions(conditions) = &concept.children else {
            panic!("expected conditions");
        };
        conditions
            .condition
            .iter()
            .map(|condition| &condition.input.as_ref().unwrap().kind)
            .collect()
    }

    #[test]
    fn test_timer_and_simile_inputs_keep_their_fields_and_order() {
        let simile = v5::dkf::SimileConditionInput {
            condition_key: Some("radio-check".to_string()),
            configuration_file: Some("patrol.simile.ixs".to_string()),
        };
        let scenario = crate::fixtures::v5_route_scenario(vec![
            v5::dkf::InputType::Timer(v5::dkf::TimerConditionInput {
                repeatable: BooleanEnum::True,
                interval: "30".to_string(),
            }),
            v5::dkf::InputType::Simile(simile.clone()),
            v5::dkf::InputType::Generic(v5::dkf::GenericConditionInput::default()),
            v5::dkf::InputType::Timer(v5::dkf::TimerConditionInput {
                repeatable: BooleanEnum::False,
                interval: "5".to_string(),
            }),
        ]);

        let converted = convert(scenario);
        let inputs = input_kinds(&converted);
        assert_eq!(inputs.len(), 4);
        match inputs[0] {
            v7::dkf::InputType::Timer(timer) => {
                assert_eq!(timer.repeatable, BooleanEnum::True);
                assert_eq!(timer.interval, "30");
            }
            other => panic!("unexpected input {other:?}"),
        }
        assert_eq!(inputs[1], &v7::dkf::InputType::Simile(simile));
        assert!(matches!(inputs[2], v7::dkf::InputType::Generic(_)));
        match inputs[3] {
            v7::dkf::InputType::Timer(timer) => assert_eq!(timer.interval, "5"),
            other => panic!("unexpected input {other:?}"),
        }
    }

    #[test]
    fn test_unrecognized_input_is_fatal() {
        let scenario = crate::fixtures::v5_route_scenario(vec![v5::dkf::InputType::Unrecognized(
            UnrecognizedElement::new("SonarCondition"),
        )]);
        let mut context = ConversionContext::new("route.dkf.xml");
        let tree = SchemaTree::V6(v6::Document::Scenario(scenario));
        let err = V6ToV7Converter.convert(tree, &mut context).unwrap_err();
        assert!(matches!(
            err,
            MappingError::UnhandledVariant { choice: "condition input", .. }
        ));
    }

    #[test]
    fn test_pass_through_kinds_are_checked() {
        let mut course = crate::fixtures::v6_course();
        course
            .transitions
            .transition
            .push(v6::course::Transition::Unrecognized(UnrecognizedElement::new("Hologram")));
        let mut context = ConversionContext::new("intro.course.xml");
        let err = V6ToV7Converter
            .convert(SchemaTree::V6(v6::Document::Course(course)), &mut context)
            .unwrap_err();
        assert_eq!(
            err,
            MappingError::UnhandledVariant {
                choice: "transition",
                element: "Hologram".to_string(),
            }
        );
    }

    #[test]
    fn test_scenario_without_objects() {
        let mut scenario = crate::fixtures::v5_route_scenario(Vec::new());
        scenario.assessment.as_mut().unwrap().objects = None;
        let converted = convert(scenario);
        assert_eq!(converted.assessment.unwrap().objects, None);
    }
}
