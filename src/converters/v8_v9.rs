use crate::converters::{map_all, recognized, ConversionContext, MappingError, SchemaConverter};
use crate::schema::{v6, v7, v8, v9, SchemaTree};

pub const SUB_MILLISECOND_ISSUE: &str = "Sub-millisecond Sensor Interval Precision";

#[derive(Debug, Default, Clone, Copy)]
pub struct V8ToV9Converter;

impl SchemaConverter for V8ToV9Converter {
    fn name(&self) -> &'static str {
        "v8_to_v9"
    }

    fn convert(
        &self,
        tree: SchemaTree,
        context: &mut ConversionContext,
    ) -> Result<SchemaTree, MappingError> {
        let document = match tree {
            SchemaTree::V8(document) => document,
            other => return Err(MappingError::wrong_tree(self, &other)),
        };
        let converted = match document {
            v8::Document::Course(course) => v9::Document::Course(recognized(course)?),
            v8::Document::Scenario(scenario) => {
                v9::Document::Scenario(convert_scenario(scenario, context)?)
            }
            v8::Document::LearnerConfig(config) => v9::Document::LearnerConfig(recognized(config)?),
            v8::Document::PedagogyConfig(config) => {
                v9::Document::PedagogyConfig(recognized(config)?)
            }
            v8::Document::Metadata(metadata) => v9::Document::Metadata(recognized(metadata)?),
            v8::Document::TrainingAppRef(wrapper) => {
                v9::Document::TrainingAppRef(recognized(wrapper)?)
            }
            v8::Document::SensorConfig(config) => {
                v9::Document::SensorConfig(convert_sensor_config(config, context)?)
            }
            v8::Document::LessonMaterialRef(list) => {
                v9::Document::LessonMaterialRef(recognized(list)?)
            }
            v8::Document::ConversationTree(tree) => {
                v9::Document::ConversationTree(recognized(tree)?)
            }
        };
        Ok(SchemaTree::V9(converted))
    }
}

fn convert_scenario(
    scenario: v7::dkf::Scenario,
    context: &mut ConversionContext,
) -> Result<v9::dkf::Scenario, MappingError> {
    let assessment = match scenario.assessment {
        Some(assessment) => Some(v9::dkf::Assessment {
            objects: assessment.objects,
            tasks: v9::dkf::Tasks {
                task: map_all(assessment.tasks.task, context, convert_task)?,
            },
        }),
        None => None,
    };
    Ok(v9::dkf::Scenario {
        version: scenario.version,
        name: scenario.name,
        description: scenario.description,
        learner_id: scenario.learner_id,
        resources: scenario.resources,
        assessment,
        actions: scenario.actions.map(convert_actions).transpose()?,
    })
}

fn convert_task(
    task: v7::dkf::Task,
    context: &mut ConversionContext,
) -> Result<v9::dkf::Task, MappingError> {
    Ok(v9::dkf::Task {
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
    concepts: v7::dkf::Concepts,
    context: &mut ConversionContext,
) -> Result<v9::dkf::Concepts, MappingError> {
    Ok(v9::dkf::Concepts {
        concept: map_all(concepts.concept, context, convert_concept)?,
    })
}

fn convert_concept(
    concept: v7::dkf::Concept,
    context: &mut ConversionContext,
) -> Result<v9::dkf::Concept, MappingError> {
    use v7::dkf::ConditionsOrConcepts as Old;
    use v9::dkf::ConditionsOrConcepts as New;

    let children = match concept.children {
        Old::Conditions(conditions) => New::Conditions(v9::dkf::Conditions {
            condition: conditions
                .condition
                .into_iter()
                .map(convert_condition)
                .collect::<Result<_, _>>()?,
        }),
        Old::Concepts(concepts) => New::Concepts(convert_concepts(concepts, context)?),
        Old::Unrecognized(element) => return Err(MappingError::unhandled::<Old>(&element)),
    };
    Ok(v9::dkf::Concept {
        name: concept.name,
        node_id: concept.node_id,
        assessments: concept.assessments,
        children,
    })
}

fn convert_condition(condition: v7::dkf::Condition) -> Result<v9::dkf::Condition, MappingError> {
    Ok(v9::dkf::Condition {
        condition_impl: condition.condition_impl,
        default: condition.default,
        input: condition.input.map(recognized).transpose()?,
        scoring: condition.scoring.map(convert_scoring).transpose()?,
    })
}

fn convert_scoring(scoring: v7::dkf::Scoring) -> Result<v9::dkf::Scoring, MappingError> {
    use v7::dkf::ScoringType as Old;
    use v9::dkf::ScoringType as New;

    let kind = scoring
        .kind
        .into_iter()
        .map(|kind| {
            Ok(match kind {
                Old::Count(measure) => New::Count(convert_measure(measure)?),
                Old::CompletionTime(measure) => New::CompletionTime(convert_measure(measure)?),
                Old::Unrecognized(element) => {
                    return Err(MappingError::unhandled::<Old>(&element))
                }
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(v9::dkf::Scoring { kind })
}

fn convert_measure(measure: v7::dkf::ScoreMeasure) -> Result<v9::dkf::ScoreMeasure, MappingError> {
    let evaluators = match measure.evaluators {
        Some(evaluators) => Some(v9::dkf::Evaluators {
            evaluator: evaluators
                .evaluator
                .into_iter()
                .map(|evaluator| {
                    Ok(v9::dkf::Evaluator {
                        assessment: evaluator.assessment,
                        value: evaluator.value,
                        operator: convert_operator(evaluator.operator)?,
                    })
                })
                .collect::<Result<_, MappingError>>()?,
        }),
        None => None,
    };
    Ok(v9::dkf::ScoreMeasure {
        name: measure.name,
        units: measure.units,
        evaluators,
    })
}

fn convert_operator(operator: v7::dkf::Operator) -> Result<v9::dkf::Operator, MappingError> {
    use v7::dkf::Operator as Old;
    use v9::dkf::Operator as New;

    match operator {
        Old::Equals => Ok(New::Equals),
        Old::LessThan => Ok(New::LessThan),
        Old::LessThanEquals => Ok(New::LessThanEquals),
        Old::GreaterThan => Ok(New::GreaterThan),
        Old::GreaterThanEquals => Ok(New::GreaterThanEquals),
        Old::NotEquals => Err(MappingError::UnmappedEnumValue {
            field: "evaluator operator",
            value: "ne".to_string(),
        }),
    }
}

fn convert_actions(actions: v7::dkf::Actions) -> Result<v9::dkf::Actions, MappingError> {
    use v7::dkf::StrategyType as Old;
    use v9::dkf::StrategyActivity as New;

    let instructional_strategies = match actions.instructional_strategies {
        Some(strategies) => Some(v9::dkf::InstructionalStrategies {
            strategy: strategies
                .strategy
                .into_iter()
                .map(|strategy| {
                    let activity = match strategy.kind {
                        Old::PerformanceAssessment(assessment) => {
                            New::PerformanceAssessment(assessment)
                        }
                        Old::InstructionalIntervention(intervention) => {
                            New::InstructionalIntervention(intervention)
                        }
                        Old::ScenarioAdaptation(adaptation) => New::ScenarioAdaptation(adaptation),
                        Old::Unrecognized(element) => {
                            return Err(MappingError::unhandled::<Old>(&element))
                        }
                    };
                    Ok(v9::dkf::Strategy {
                        name: strategy.name,
                        activities: vec![activity],
                    })
                })
                .collect::<Result<_, MappingError>>()?,
        }),
        None => None,
    };
    Ok(v9::dkf::Actions {
        instructional_strategies,
        state_transitions: actions.state_transitions,
    })
}

fn convert_sensor_config(
    config: v6::sensor::SensorsConfiguration,
    context: &mut ConversionContext,
) -> Result<v9::sensor::SensorsConfiguration, MappingError> {
    let sensor = config
        .sensors
        .sensor
        .into_iter()
        .map(|sensor| {
            Ok(v9::sensor::Sensor {
                id: sensor.id,
                name: sensor.name,
                sensor_impl: sensor.sensor_impl,
                interval_ms: sensor
                    .interval
                    .map(|seconds| interval_millis(seconds, context))
                    .transpose()?,
                distribute_externally: sensor.distribute_externally,
                filter_instance: sensor.filter_instance,
                properties: sensor.properties,
            })
        })
        .collect::<Result<Vec<_>, MappingError>>()?;

    Ok(v9::sensor::SensorsConfiguration {
        version: config.version,
        sensors: v9::sensor::Sensors { sensor },
        filters: config.filters,
        writers: config.writers,
    })
}

/// Converts a period in seconds to whole milliseconds, rounding to nearest.
fn interval_millis(seconds: f64, context: &mut ConversionContext) -> Result<u64, MappingError> {
    let invalid = |reason| MappingError::InvalidValue {
        field: "sensor interval",
        value: seconds.to_string(),
        reason,
    };
    if !seconds.is_finite() {
        return Err(invalid("not a finite number"));
    }
    if seconds < 0.0 {
        return Err(invalid("negative"));
    }
    let millis = seconds * 1000.0;
    // `u64::MAX as f64` rounds up to 2^64, which the cast below would saturate.
    if millis >= u64::MAX as f64 {
        return Err(invalid("too large"));
    }
    let rounded = millis.round();
    if (millis - rounded).abs() > 1e-6 {
        context.add_issue(SUB_MILLISECOND_ISSUE);
    }
    Ok(rounded as u64)
}
