use serde::{Deserialize, Serialize};

use crate::schema::common::UnrecognizedElement;

pub use crate::schema::v2::dkf::{
    Agl, ApplicationCompletedCondition, Assessments, AssessmentType, AvailableLearnerActions,
    AvoidLocationCondition, Checkpoint, CheckpointCondition, Coordinate,
    CoordinateType, CorridorBoundaryCondition, CorridorPostureCondition, DefaultAssessment,
    EliminateHostilesCondition, Entities, EntityLocation, EntityStartLocation, Entrance,
    EnterAreaCondition, EnvironmentAdaptation, Evaluator, Evaluators, Gcc, Gdc,
    GenericConditionInput, LearnerAction, LearnerActionsFiles,
    LearnerActionsList, LearnerStateTransitionEnum, NodeIdRef, Objects, Operator,
    PerformanceAssessment, PerformanceNode, Posture, Postures, Resources, ScenarioAdaptation,
    ScoreMeasure, Scoring, ScoringType, StateType, StrategyChoices, StrategyHandler, StrategyRef,
    SurveyAssessment, Trigger, Triggers, Waypoint, WaypointBoundary, WaypointPath, WaypointRef,
    Waypoints,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(rename = "@version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "learnerId", default, skip_serializing_if = "Option::is_none")]
    pub learner_id: Option<LearnerId>,
    pub resources: Resources,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment: Option<Assessment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Actions>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnerId {
    #[serde(rename = "$value")]
    pub kind: LearnerIdType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LearnerIdType {
    StartLocation(StartLocation),
    #[serde(skip)]
    Unrecognized(UnrecognizedElement),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartLocation {
    pub coordinate: Coordinate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objects: Option<Objects>,
    pub tasks: Tasks,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Tasks {
    #[serde(default)]
    pub task: Vec<Task>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@nodeId")]
    pub node_id: u32,
    #[serde(rename = "startTriggers", default, skip_serializing_if = "Option::is_none")]
    pub start_triggers: Option<Triggers>,
    #[serde(rename = "endTriggers", default, skip_serializing_if = "Option::is_none")]
    pub end_triggers: Option<Triggers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concepts: Option<Concepts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessments: Option<Assessments>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Concepts {
    #[serde(default)]
    pub concept: Vec<Concept>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@nodeId")]
    pub node_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessments: Option<Assessments>,
    #[serde(rename = "$value")]
    pub children: ConditionsOrConcepts,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConditionsOrConcepts {
    #[serde(rename = "conditions")]
    Conditions(Conditions),
    #[serde(rename = "concepts")]
    Concepts(Concepts),
    #[serde(skip)]
    Unrecognized(UnrecognizedElement),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Conditions {
    #[serde(default)]
    pub condition: Vec<Condition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(rename = "conditionImpl")]
    pub condition_impl: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultAssessment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<Input>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring: Option<Scoring>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Input {
    #[serde(rename = "$value")]
    pub kind: InputType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputType {
    #[serde(rename = "ApplicationCompletedCondition")]
    ApplicationCompleted(ApplicationCompletedCondition),
    #[serde(rename = "AvoidLocationCondition")]
    AvoidLocation(AvoidLocationCondition),
    #[serde(rename = "CheckpointPaceCondition")]
    CheckpointPace(CheckpointCondition),
    #[serde(rename = "CheckpointProgressCondition")]
    CheckpointProgress(CheckpointCondition),
    #[serde(rename = "CorridorBoundaryCondition")]
    CorridorBoundary(CorridorBoundaryCondition),
    #[serde(rename = "CorridorPostureCondition")]
    CorridorPosture(CorridorPostureCondition),
    #[serde(rename = "EliminateHostilesCondition")]
    EliminateHostiles(EliminateHostilesCondition),
    #[serde(rename = "EnterAreaCondition")]
    EnterArea(EnterAreaCondition),
    #[serde(rename = "GenericConditionInput")]
    Generic(GenericConditionInput),
    #[serde(rename = "SIMILEConditionInput")]
    Simile(SimileConditionInput),
    #[serde(skip)]
    Unrecognized(UnrecognizedElement),
}

/// Evaluates learner actions against a SIMILE rule set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimileConditionInput {
    #[serde(rename = "conditionKey", default, skip_serializing_if = "Option::is_none")]
    pub condition_key: Option<String>,
    #[serde(rename = "configurationFile", default, skip_serializing_if = "Option::is_none")]
    pub configuration_file: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Actions {
    #[serde(
        rename = "instructionalStrategies",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub instructional_strategies: Option<InstructionalStrategies>,
    #[serde(rename = "stateTransitions", default, skip_serializing_if = "Option::is_none")]
    pub state_transitions: Option<StateTransitions>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InstructionalStrategies {
    #[serde(default)]
    pub strategy: Vec<Strategy>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "$value")]
    pub kind: StrategyType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StrategyType {
    PerformanceAssessment(PerformanceAssessment),
    InstructionalIntervention(InstructionalIntervention),
    ScenarioAdaptation(ScenarioAdaptation),
    #[serde(skip)]
    Unrecognized(UnrecognizedElement),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructionalIntervention {
    #[serde(rename = "strategyHandler")]
    pub strategy_handler: StrategyHandler,
    #[serde(default)]
    pub feedback: Vec<Feedback>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(rename = "$value")]
    pub presentation: FeedbackPresentation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FeedbackPresentation {
    Message(FeedbackMessage),
    #[serde(skip)]
    Unrecognized(UnrecognizedElement),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackMessage {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StateTransitions {
    #[serde(rename = "stateTransition", default)]
    pub state_transition: Vec<StateTransition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    #[serde(rename = "@name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "LogicalExpression")]
    pub logical_expression: LogicalExpression,
    #[serde(rename = "strategyChoices")]
    pub strategy_choices: StrategyChoices,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LogicalExpression {
    #[serde(rename = "$value", default)]
    pub state_type: Vec<StateType>,
}

choice! {
    LearnerIdType => "learner id" { StartLocation },
    ConditionsOrConcepts => "concept children" { Conditions, Concepts },
    InputType => "condition input" { EliminateHostiles },
    StrategyType => "strategy" { InstructionalIntervention },
    FeedbackPresentation => "feedback",
}

recognizable! {
    Scenario { learner_id, assessment, actions },
    LearnerId { kind },
    StartLocation { coordinate },
    Assessment { objects, tasks },
    Tasks { task },
    Task { start_triggers, end_triggers, concepts, assessments },
    Concepts { concept },
    Concept { assessments, children },
    Conditions { condition },
    Condition { input, scoring },
    Input { kind },
    Actions { instructional_strategies, state_transitions },
    InstructionalStrategies { strategy },
    Strategy { kind },
    InstructionalIntervention { feedback },
    Feedback { presentation },
    StateTransitions { state_transition },
    StateTransition { logical_expression },
    LogicalExpression { state_type },
}
