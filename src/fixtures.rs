//! Small, hand-built documents shared by the converter and engine tests.

use crate::schema::common::{AssessmentLevel, BooleanEnum, Nvpair};
use crate::schema::{v2, v3, v4, v5, v6, v7, v9};

/// Condition implementations of [`v2_scenario`]'s first concept, in document order.
pub const V2_CONDITION_IMPLS: &[&str] = &[
    "domain.knowledge.condition.CheckpointPaceCondition",
    "domain.knowledge.condition.CheckpointProgressCondition",
    "domain.knowledge.condition.AvoidLocationCondition",
];

fn v2_guidance(message: &str) -> v2::course::Guidance {
    v2::course::Guidance {
        display_time: None,
        full_screen: Some(true),
        message: message.to_string(),
    }
}

fn dkf_ref() -> v2::course::DkfRef {
    v2::course::DkfRef {
        file: "convoy.dkf.xml".to_string(),
    }
}

fn vbs2_interops(interop_impl: &str) -> v2::course::Interops {
    v2::course::Interops {
        interop: vec![v2::course::Interop {
            interop_impl: interop_impl.to_string(),
            interop_inputs: v2::course::InteropInputs {
                input: v2::course::InteropInput::Vbs2(v2::course::Vbs2InteropInputs {
                    load_args: v2::course::ScenarioFileLoadArgs {
                        scenario_file: "Convoy.pbo".to_string(),
                    },
                }),
            },
        }],
    }
}

fn field_manual() -> v2::course::Media {
    v2::course::Media {
        name: "Field Manual".to_string(),
        uri: "fm3-21.pdf".to_string(),
        properties: v2::course::MediaTypeProperties::Pdf(v2::course::EmptyProperties {}),
    }
}

pub fn v2_guidance_course(message: &str) -> v2::course::Course {
    v2::course::Course {
        version: Some("2.0".to_string()),
        name: "Intro".to_string(),
        description: None,
        survey_context: None,
        transitions: v2::course::Transitions {
            transition: vec![v2::course::Transition::Guidance(v2_guidance(message))],
        },
    }
}

/// One transition of every 2.0 kind: guidance, survey, AAR, training application, lesson material.
pub fn v2_course() -> v2::course::Course {
    v2::course::Course {
        version: Some("2.0".to_string()),
        name: "Convoy Operations".to_string(),
        description: Some("Route clearance basics".to_string()),
        survey_context: Some(1),
        transitions: v2::course::Transitions {
            transition: vec![
                v2::course::Transition::Guidance(v2_guidance("Welcome to convoy training")),
                v2::course::Transition::PresentSurvey(v2::course::PresentSurvey {
                    full_screen: None,
                    gift_survey_key: "PreLesson".to_string(),
                }),
                v2::course::Transition::Aar(v2::course::Aar { full_screen: Some(false) }),
                v2::course::Transition::TrainingApplication(v2::course::TrainingApplication {
                    dkf_ref: dkf_ref(),
                    finished_when: v2::course::FinishedWhen::Stopped,
                    guidance: None,
                    options: None,
                    interops: vbs2_interops("gateway.interop.vbs2plugin.VBS2PluginInterface"),
                }),
                v2::course::Transition::LessonMaterial(v2::course::LessonMaterial {
                    list: Some(v2::course::LessonMaterialList {
                        media: vec![field_manual()],
                    }),
                    files: None,
                }),
            ],
        },
    }
}

fn gcc(x: f64, y: f64) -> v2::dkf::Coordinate {
    v2::dkf::Coordinate {
        kind: v2::dkf::CoordinateType::Gcc(v2::dkf::Gcc { x, y, z: 0.0 }),
    }
}

fn v2_condition(condition_impl: &str) -> v2::dkf::Condition {
    v2::dkf::Condition {
        condition_impl: condition_impl.to_string(),
        default: Some(v2::dkf::DefaultAssessment {
            assessment: AssessmentLevel::AtExpectation,
        }),
        input: Some(v2::dkf::Input {
            kind: v2::dkf::InputType::Generic(v2::dkf::GenericConditionInput {
                nvpair: vec![Nvpair::new("threshold", "3")],
            }),
        }),
        scoring: None,
    }
}

fn strategy_handler() -> v2::dkf::StrategyHandler {
    v2::dkf::StrategyHandler {
        handler_impl: "domain.knowledge.strategy.DefaultStrategyHandler".to_string(),
    }
}

/// A single task whose first concept holds two metrics, only the first of them named.
pub fn v2_scenario() -> v2::dkf::Scenario {
    let metrics = v2::dkf::Metrics {
        metric: vec![
            v2::dkf::Metric {
                name: Some("Pace".to_string()),
                conditions: v2::dkf::Conditions {
                    condition: V2_CONDITION_IMPLS[..2].iter().map(|c| v2_condition(c)).collect(),
                },
            },
            v2::dkf::Metric {
                name: None,
                conditions: v2::dkf::Conditions {
                    condition: vec![v2_condition(V2_CONDITION_IMPLS[2])],
                },
            },
        ],
    };

    v2::dkf::Scenario {
        version: Some("2.0".to_string()),
        name: "Patrol".to_string(),
        description: None,
        learner_id: Some(v2::dkf::LearnerId {
            location: v2::dkf::LearnerIdType {
                coordinate: gcc(10.0, 20.0),
            },
        }),
        resources: v2::dkf::Resources {
            survey_context: None,
            available_learner_actions: None,
        },
        assessment: Some(v2::dkf::Assessment {
            objects: None,
            tasks: v2::dkf::Tasks {
                task: vec![v2::dkf::Task {
                    name: "Move to the objective".to_string(),
                    node_id: 1,
                    start_triggers: None,
                    end_triggers: None,
                    concepts: Some(v2::dkf::Concepts {
                        concept: vec![v2::dkf::Concept {
                            name: "Movement".to_string(),
                            node_id: 2,
                            assessments: None,
                            children: v2::dkf::MetricsOrConcepts::Metrics(metrics),
                        }],
                    }),
                    assessments: None,
                }],
            },
        }),
        actions: Some(v2::dkf::Actions {
            instructional_strategies: Some(v2::dkf::InstructionalStrategies {
                strategy: vec![v2::dkf::Strategy {
                    name: "Remind".to_string(),
                    kind: v2::dkf::StrategyType::InstructionalIntervention(
                        v2::dkf::InstructionalIntervention {
                            strategy_handler: strategy_handler(),
                            feedback: vec![v2::dkf::Feedback {
                                message: "Check your corners".to_string(),
                            }],
                        },
                    ),
                }],
            }),
            state_transitions: Some(v2::dkf::StateTransitions {
                state_transition: vec![v2::dkf::StateTransition {
                    name: Some("Falling behind".to_string()),
                    state_type: v2::dkf::StateType::PerformanceNode(v2::dkf::PerformanceNode {
                        name: "Movement".to_string(),
                        node_id: 2,
                        previous: None,
                        current: AssessmentLevel::BelowExpectation,
                    }),
                    strategy_choices: v2::dkf::StrategyChoices {
                        strategy_ref: vec![v2::dkf::StrategyRef {
                            name: "Remind".to_string(),
                        }],
                    },
                }],
            }),
        }),
    }
}

fn v3_guidance(name: &str) -> v3::course::Guidance {
    v3::course::Guidance {
        transition_name: Some(name.to_string()),
        display_time: None,
        full_screen: Some(true),
        choice: v3::course::GuidanceChoice::Message(v3::course::GuidanceMessage {
            content: "Stay with the convoy".to_string(),
        }),
    }
}

/// Guidance, a training application and a branch point whose last quadrant holds transitions.
pub fn v3_course() -> v3::course::Course {
    use v3::course::{Quadrant, Transition};

    v3::course::Course {
        version: Some("3.0".to_string()),
        name: "Convoy Operations".to_string(),
        description: None,
        survey_context: None,
        exclude: Some(false),
        transitions: v3::course::Transitions {
            transition: vec![
                Transition::Guidance(v3_guidance("Welcome")),
                Transition::TrainingApplication(v3::course::TrainingApplication {
                    transition_name: Some("Convoy Training".to_string()),
                    dkf_ref: dkf_ref(),
                    finished_when: v3::course::FinishedWhen::Stopped,
                    guidance: Some(v3_guidance("Before you start")),
                    options: Some(v3::course::TrainingApplicationOptions {
                        disable_inst_inter_impl: Some(true),
                        show_avatar_initially: None,
                    }),
                    interops: vbs2_interops("gateway.interop.vbs2plugin.VBS2PluginInterface"),
                }),
                Transition::MerrillsBranchPoint(v3::course::MerrillsBranchPoint {
                    transition_name: Some("Adaptive".to_string()),
                    concepts: v3::course::BranchConcepts {
                        concept: vec!["Movement".to_string()],
                    },
                    quadrants: v3::course::Quadrants {
                        content: vec![
                            Quadrant::Rule(v3::course::EmptyProperties {}),
                            Quadrant::Example(v3::course::EmptyProperties {}),
                            Quadrant::Recall(v3::course::RecallQuadrant {
                                allowed_attempts: Some(2),
                            }),
                            Quadrant::Practice(v3::course::PracticeQuadrant {
                                allowed_attempts: None,
                            }),
                            Quadrant::Transitions(v3::course::Transitions {
                                transition: vec![Transition::Guidance(v3_guidance("Remedial"))],
                            }),
                        ],
                    },
                }),
            ],
        },
    }
}

/// One task, one concept with a single generic condition, and a `TUTOR_ME` learner action.
pub fn v3_scenario() -> v3::dkf::Scenario {
    v3::dkf::Scenario {
        version: Some("3.0".to_string()),
        name: "Patrol".to_string(),
        description: None,
        learner_id: Some(v3::dkf::LearnerId {
            kind: v3::dkf::LearnerIdType::StartLocation(v3::dkf::StartLocation {
                coordinate: gcc(10.0, 20.0),
            }),
        }),
        resources: v3::dkf::Resources {
            survey_context: None,
            available_learner_actions: Some(v3::dkf::AvailableLearnerActions {
                learner_actions_files: None,
                learner_actions_list: Some(v3::dkf::LearnerActionsList {
                    learner_action: vec![v3::dkf::LearnerAction {
                        display_name: "Ask for help".to_string(),
                        action_type: "TUTOR_ME".to_string(),
                    }],
                }),
            }),
        },
        assessment: Some(v3::dkf::Assessment {
            objects: None,
            tasks: v3::dkf::Tasks {
                task: vec![v3::dkf::Task {
                    name: "Move to the objective".to_string(),
                    node_id: 1,
                    start_triggers: None,
                    end_triggers: None,
                    concepts: Some(v3::dkf::Concepts {
                        concept: vec![v3::dkf::Concept {
                            name: "Movement".to_string(),
                            node_id: 2,
                            assessments: None,
                            children: v3::dkf::ConditionsOrConcepts::Conditions(
                                v3::dkf::Conditions {
                                    condition: vec![v3::dkf::Condition {
                                        condition_impl: V2_CONDITION_IMPLS[0].to_string(),
                                        default: None,
                                        input: Some(v3::dkf::Input {
                                            kind: v3::dkf::InputType::Generic(
                                                v3::dkf::GenericConditionInput {
                                                    nvpair: vec![Nvpair::new("threshold", "3")],
                                                },
                                            ),
                                        }),
                                        scoring: None,
                                    }],
                                },
                            ),
                        }],
                    }),
                    assessments: None,
                }],
            },
        }),
        actions: None,
    }
}

pub fn v3_learner_config() -> v3::learner::LearnerConfiguration {
    use v3::learner::SensorType;

    v3::learner::LearnerConfiguration {
        version: Some("3.0".to_string()),
        inputs: v3::learner::Inputs {
            input: vec![v3::learner::Input {
                classifier: v3::learner::Classifier {
                    classifier_impl: "learner.clusterer.EngagementClassifier".to_string(),
                    properties: None,
                },
                predictor: v3::learner::Predictor {
                    predictor_impl: "learner.predictor.EngagementPredictor".to_string(),
                },
                producers: Some(v3::learner::Producers {
                    producer: vec![
                        v3::learner::Producer {
                            sensor_type: SensorType::Emotiv,
                        },
                        v3::learner::Producer {
                            sensor_type: SensorType::Kinect,
                        },
                    ],
                }),
                translator: v3::learner::Translator {
                    translator_impl: "learner.translator.DefaultTranslator".to_string(),
                },
            }],
        },
    }
}

/// A learner configuration with one string-typed producer.
pub fn v4_learner_config() -> v4::learner::LearnerConfiguration {
    let v3 = v3_learner_config();
    v4::learner::LearnerConfiguration {
        version: Some("4.0".to_string()),
        inputs: v4::learner::Inputs {
            input: v3
                .inputs
                .input
                .into_iter()
                .map(|input| v4::learner::Input {
                    classifier: input.classifier,
                    predictor: input.predictor,
                    producers: Some(v4::learner::Producers {
                        producer: vec![v4::learner::Producer {
                            sensor_type: "SELF_ASSESSMENT".to_string(),
                        }],
                    }),
                    translator: input.translator,
                })
                .collect(),
        },
    }
}

/// One attribute whose metadata attributes carry the given quadrant-specific flags.
pub fn v3_quadrant(flags: &[Option<bool>]) -> v3::ped::QuadrantAttributes {
    v3::ped::QuadrantAttributes {
        attributes: v3::ped::Attributes {
            attribute: vec![v3::ped::Attribute {
                attribute_type: "Motivation".to_string(),
                value: "High".to_string(),
                metadata_attributes: v3::ped::MetadataAttributes {
                    metadata_attribute: flags
                        .iter()
                        .map(|flag| v3::ped::MetadataAttribute {
                            value: "Auditory".to_string(),
                            is_quadrant_specific: *flag,
                        })
                        .collect(),
                },
            }],
        },
    }
}

pub fn v3_pedagogy_config() -> v3::ped::Emap {
    v3::ped::Emap {
        version: Some("3.0".to_string()),
        example: v3_quadrant(&[None]),
        practice: v3_quadrant(&[None]),
        recall: v3_quadrant(&[]),
        rule: v3_quadrant(&[None, None]),
    }
}

pub fn v4_guidance(name: Option<&str>) -> v4::course::Guidance {
    v4::course::Guidance {
        transition_name: name.map(str::to_string),
        display_time: None,
        full_screen: Some(BooleanEnum::False),
        choice: v4::course::GuidanceChoice::Message(v4::course::GuidanceMessage {
            content: "Stay with the convoy".to_string(),
        }),
    }
}

/// Unnamed guidance followed by a training application named "Convoy Training"
/// whose unnamed guidance and retired VBS2 interop both need rewriting.
pub fn v4_course() -> v4::course::Course {
    let interop = v4::course::Interop {
        interop_impl: "gateway.interop.vbs2plugin.VBS2PluginInterface".to_string(),
        interop_inputs: v4::course::InteropInputs {
            input: v4::course::InteropInput::Vbs2(v4::course::Vbs2InteropInputs {
                load_args: v4::course::ScenarioFileLoadArgs {
                    scenario_file: "Convoy.pbo".to_string(),
                },
            }),
        },
    };

    v4::course::Course {
        version: Some("5.0".to_string()),
        name: "Convoy Operations".to_string(),
        description: None,
        survey_context: None,
        exclude: None,
        transitions: v4::course::Transitions {
            transition: vec![
                v4::course::Transition::Guidance(v4_guidance(None)),
                v4::course::Transition::TrainingApplication(v4::course::TrainingApplication {
                    transition_name: Some("Convoy Training".to_string()),
                    dkf_ref: dkf_ref(),
                    finished_when: "STOPPED".to_string(),
                    guidance: Some(v4_guidance(None)),
                    options: None,
                    interops: v4::course::Interops {
                        interop: vec![interop],
                    },
                }),
            ],
        },
    }
}

fn v4_resources() -> v4::dkf::Resources {
    v4::dkf::Resources {
        survey_context: None,
        available_learner_actions: None,
    }
}

fn v4_task(conditions: Vec<v4::dkf::Condition>) -> v4::dkf::Task {
    v4::dkf::Task {
        name: "Talk to the tutor".to_string(),
        node_id: 1,
        start_triggers: None,
        end_triggers: None,
        concepts: Some(v4::dkf::Concepts {
            concept: vec![v4::dkf::Concept {
                name: "Knowledge".to_string(),
                node_id: 2,
                assessments: None,
                children: v4::dkf::ConditionsOrConcepts::Conditions(v4::dkf::Conditions {
                    condition: conditions,
                }),
            }],
        }),
        assessments: None,
    }
}

/// A scenario whose single concept holds `conditions`.
pub fn v4_scenario_with(conditions: Vec<v4::dkf::Condition>) -> v4::dkf::Scenario {
    v4::dkf::Scenario {
        version: Some("4.0".to_string()),
        name: "Tutor".to_string(),
        description: None,
        learner_id: None,
        resources: v4_resources(),
        assessment: Some(v4::dkf::Assessment {
            objects: None,
            tasks: v4::dkf::Tasks {
                task: vec![v4_task(conditions)],
            },
        }),
        actions: None,
    }
}

/// Two of the three concept attributes carry a quadrant-specific flag.
pub fn v5_metadata() -> v5::metadata::Metadata {
    let attribute = |value: &str, flag| v5::metadata::Attribute {
        value: value.to_string(),
        is_quadrant_specific: flag,
    };
    v5::metadata::Metadata {
        version: Some("5.0".to_string()),
        merrill_quadrant: "Rule".to_string(),
        simple_ref: Some("cover.html".to_string()),
        training_app_ref: None,
        concepts: v5::metadata::Concepts {
            concept: vec![v5::metadata::Concept {
                name: "Cover".to_string(),
                attributes: Some(v5::metadata::Attributes {
                    attribute: vec![
                        attribute("Auditory", Some(true)),
                        attribute("Visual", Some(false)),
                        attribute("Text", None),
                    ],
                }),
            }],
        },
    }
}

/// Waypoints "Bridge" and "Market", and one condition per input.
pub fn v5_route_scenario(inputs: Vec<v5::dkf::InputType>) -> v5::dkf::Scenario {
    let waypoint = |name: &str, x| v5::dkf::Waypoint {
        name: name.to_string(),
        coordinate: gcc(x, 0.0),
    };
    let condition = v5::dkf::Conditions {
        condition: inputs
            .into_iter()
            .map(|kind| v5::dkf::Condition {
                condition_impl: "domain.knowledge.condition.RouteCondition".to_string(),
                default: None,
                input: Some(v5::dkf::Input { kind }),
                scoring: None,
            })
            .collect(),
    };

    v5::dkf::Scenario {
        version: Some("6.0".to_string()),
        name: "Route".to_string(),
        description: None,
        learner_id: None,
        resources: v4_resources(),
        assessment: Some(v5::dkf::Assessment {
            objects: Some(v5::dkf::Objects {
                waypoints: Some(v5::dkf::Waypoints {
                    waypoint: vec![waypoint("Bridge", 1.0), waypoint("Market", 2.0)],
                }),
            }),
            tasks: v5::dkf::Tasks {
                task: vec![v5::dkf::Task {
                    name: "Follow the route".to_string(),
                    node_id: 1,
                    start_triggers: None,
                    end_triggers: None,
                    concepts: Some(v5::dkf::Concepts {
                        concept: vec![v5::dkf::Concept {
                            name: "Navigation".to_string(),
                            node_id: 2,
                            assessments: None,
                            children: v5::dkf::ConditionsOrConcepts::Conditions(condition),
                        }],
                    }),
                    assessments: None,
                }],
            },
        }),
        actions: None,
    }
}

/// A training application with the avatar option set, followed by lesson material.
pub fn v6_course() -> v6::course::Course {
    v6::course::Course {
        version: Some("9.0".to_string()),
        name: "Convoy Operations".to_string(),
        description: None,
        survey_context: None,
        exclude: Some(BooleanEnum::False),
        transitions: v6::course::Transitions {
            transition: vec![
                v6::course::Transition::TrainingApplication(v6::course::TrainingApplication {
                    transition_name: Some("Convoy Training".to_string()),
                    dkf_ref: dkf_ref(),
                    finished_when: "STOPPED".to_string(),
                    guidance: None,
                    options: Some(v6::course::TrainingApplicationOptions {
                        disable_inst_inter_impl: Some(BooleanEnum::True),
                        show_avatar_initially: Some("true".to_string()),
                    }),
                    interops: v6::course::Interops::default(),
                }),
                v6::course::Transition::LessonMaterial(v6::course::LessonMaterial {
                    transition_name: Some("Reading".to_string()),
                    list: Some(v6::course::LessonMaterialList {
                        media: vec![v6::course::Media {
                            name: "Field Manual".to_string(),
                            uri: "fm3-21.pdf".to_string(),
                            properties: v6::course::MediaTypeProperties::Pdf(
                                v6::course::EmptyProperties {},
                            ),
                        }],
                    }),
                    files: None,
                }),
            ],
        },
    }
}

fn v7_condition(scoring: Option<v7::dkf::Scoring>) -> v7::dkf::Condition {
    v7::dkf::Condition {
        condition_impl: "domain.knowledge.condition.EliminateHostilesCondition".to_string(),
        default: None,
        input: Some(v7::dkf::Input {
            kind: v7::dkf::InputType::EliminateHostiles(v7::dkf::EliminateHostilesCondition {
                entities: None,
            }),
        }),
        scoring,
    }
}

/// A count score with one evaluator per operator, and one feedback strategy.
pub fn v7_scored_scenario(operators: &[v7::dkf::Operator]) -> v7::dkf::Scenario {
    let evaluator = operators
        .iter()
        .map(|operator| v7::dkf::Evaluator {
            assessment: AssessmentLevel::AtExpectation,
            value: "3".to_string(),
            operator: *operator,
        })
        .collect();
    let scoring = v7::dkf::Scoring {
        kind: vec![v7::dkf::ScoringType::Count(v7::dkf::ScoreMeasure {
            name: "Hostiles eliminated".to_string(),
            units: "count".to_string(),
            evaluators: Some(v7::dkf::Evaluators { evaluator }),
        })],
    };

    v7::dkf::Scenario {
        version: Some("8.0".to_string()),
        name: "Engagement".to_string(),
        description: None,
        learner_id: None,
        resources: v4_resources(),
        assessment: Some(v7::dkf::Assessment {
            objects: None,
            tasks: v7::dkf::Tasks {
                task: vec![v7::dkf::Task {
                    name: "Clear the building".to_string(),
                    node_id: 1,
                    start_triggers: None,
                    end_triggers: None,
                    concepts: Some(v7::dkf::Concepts {
                        concept: vec![v7::dkf::Concept {
                            name: "Engagement".to_string(),
                            node_id: 2,
                            assessments: None,
                            children: v7::dkf::ConditionsOrConcepts::Conditions(
                                v7::dkf::Conditions {
                                    condition: vec![v7_condition(Some(scoring))],
                                },
                            ),
                        }],
                    }),
                    assessments: None,
                }],
            },
        }),
        actions: Some(v7::dkf::Actions {
            instructional_strategies: Some(v7::dkf::InstructionalStrategies {
                strategy: vec![v7::dkf::Strategy {
                    name: "Remind".to_string(),
                    kind: v7::dkf::StrategyType::InstructionalIntervention(
                        v7::dkf::InstructionalIntervention {
                            strategy_handler: strategy_handler(),
                            feedback: vec![v7::dkf::Feedback {
                                presentation: v7::dkf::FeedbackPresentation::Message(
                                    v7::dkf::FeedbackMessage {
                                        content: "Watch your sectors".to_string(),
                                    },
                                ),
                            }],
                        },
                    ),
                }],
            }),
            state_transitions: None,
        }),
    }
}

/// Two conditions under one concept; `with_learner` sets the root learner id.
pub fn v9_scenario(with_learner: bool) -> v9::dkf::Scenario {
    let condition = |condition_impl: &str| v9::dkf::Condition {
        condition_impl: condition_impl.to_string(),
        default: None,
        input: None,
        scoring: None,
    };

    v9::dkf::Scenario {
        version: Some("9.0".to_string()),
        name: "Patrol".to_string(),
        description: None,
        learner_id: with_learner.then(|| v9::dkf::LearnerId {
            kind: v9::dkf::LearnerIdType::StartLocation(v9::dkf::StartLocation {
                coordinate: gcc(10.0, 20.0),
            }),
        }),
        resources: v4_resources(),
        assessment: Some(v9::dkf::Assessment {
            objects: None,
            tasks: v9::dkf::Tasks {
                task: vec![v9::dkf::Task {
                    name: "Move to the objective".to_string(),
                    node_id: 1,
                    start_triggers: None,
                    end_triggers: None,
                    concepts: Some(v9::dkf::Concepts {
                        concept: vec![v9::dkf::Concept {
                            name: "Movement".to_string(),
                            node_id: 2,
                            assessments: None,
                            children: v9::dkf::ConditionsOrConcepts::Conditions(
                                v9::dkf::Conditions {
                                    condition: vec![
                                        condition(V2_CONDITION_IMPLS[0]),
                                        condition(V2_CONDITION_IMPLS[1]),
                                    ],
                                },
                            ),
                        }],
                    }),
                    assessments: None,
                }],
            },
        }),
        actions: None,
    }
}
