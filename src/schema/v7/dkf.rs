use serde::{Deserialize, Serialize};

use crate::schema::common::{AssessmentLevel, UnrecognizedElement};

pub use crate::schema::v5::dkf::{
    Actions, Agl, ApplicationCompletedCondition, Assessments, AssessmentType,
    AutoTutorConditionInput, AutoTutorScript, AvailableLearnerActions, Coordinate,
    CoordinateType, DefaultAssessment, EliminateHostilesCondition, Entities, EntityLocation,
    EntityStartLocation, EnvironmentAdaptation, Evaluator, Evaluators, Feedback, FeedbackMessage,
    FeedbackPresentation, Gcc, Gdc, GenericConditionInput, InstructionalIntervention,
    InstructionalStrategies, LearnerAction, LearnerActionType, LearnerActionsFiles,
    LearnerActionsList, LearnerId, LearnerIdType, LearnerStateTransitionEnum, LogicalExpression,
    NodeIdRef, Operator, PerformanceAssessment, PerformanceNode, Posture, Postures, RemoteSko,
    Resources, ScenarioAdaptation, ScoreMeasure, Scoring, ScoringType, SimileConditionInput, SkoUrl,
    StartLocation, StateTransition, StateTransitions, StateType, Strategy, StrategyChoices,
    StrategyHandler, StrategyRef, StrategyType, SurveyAssessment, TimerConditionInput, Trigger,
    Triggers,
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
pub struct Assessment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objects: Option<Objects>,
    pub tasks: Tasks,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Objects {
    #[serde(rename = "placesOfInterest", default, skip_serializing_if = "Option::is_none")]
    pub places_of_interest: Option<PlacesOfInterest>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlacesOfInterest {
    #[serde(rename = "$value", default)]
    pub place: Vec<PlaceOfInterest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaceOfInterest {
    #[serde(rename = "point")]
    Point(Point),
    #[serde(skip)]
    Unrecognized(UnrecognizedElement),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    #[serde(rename = "@name")]
    pub name: String,
    pub coordinate: Coordinate,
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
    #[serde(rename = "AutoTutorConditionInput")]
    AutoTutor(AutoTutorConditionInput),
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
    #[serde(rename = "NoConditionInput")]
    NoCondition(NoConditionInput),
    #[serde(rename = "SIMILEConditionInput")]
    Simile(SimileConditionInput),
    #[serde(rename = "TimerConditionInput")]
    Timer(TimerConditionInput),
    #[serde(skip)]
    Unrecognized(UnrecognizedElement),
}

/// A condition that takes no authored input.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NoConditionInput {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvoidLocationCondition {
    #[serde(rename = "pointRef")]
    pub point_ref: Vec<PointRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointRef {
    #[serde(rename = "@value")]
    pub value: String,
    #[serde(rename = "@distance", default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckpointCondition {
    #[serde(default)]
    pub checkpoint: Vec<Checkpoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    #[serde(rename = "@point")]
    pub point: String,
    #[serde(rename = "@atTime")]
    pub at_time: String,
    #[serde(rename = "@windowOfTime")]
    pub window_of_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorridorBoundaryCondition {
    #[serde(rename = "bufferWidthPercent")]
    pub buffer_width_percent: f64,
    pub path: PointPath,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PointPath {
    #[serde(rename = "pointRef", default)]
    pub point_ref: Vec<PointRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorridorPostureCondition {
    pub path: PointPath,
    pub postures: Postures,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnterAreaCondition {
    #[serde(default)]
    pub entrance: Vec<Entrance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entrance {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@assessment")]
    pub assessment: AssessmentLevel,
    pub outside: PointBoundary,
    pub inside: PointBoundary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointBoundary {
    #[serde(rename = "@point")]
    pub point: String,
    #[serde(rename = "@proximity")]
    pub proximity: f64,
}

choice! {
    PlaceOfInterest => "place of interest" { Point },
    ConditionsOrConcepts => "concept children" { Conditions, Concepts },
    InputType => "condition input" { AutoTutor, EliminateHostiles },
}

recognizable! {
    Scenario { learner_id, assessment, actions },
    Assessment { objects, tasks },
    Objects { places_of_interest },
    PlacesOfInterest { place },
    Point { coordinate },
    Tasks { task },
    Task { start_triggers, end_triggers, concepts, assessments },
    Concepts { concept },
    Concept { assessments, children },
    Conditions { condition },
    Condition { input, scoring },
    Input { kind },
}
