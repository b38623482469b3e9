use serde::{Deserialize, Serialize};

use crate::schema::common::{AssessmentLevel, UnrecognizedElement};

pub use crate::schema::v7::dkf::{
    Agl, ApplicationCompletedCondition, Assessments, AssessmentType, AutoTutorConditionInput,
    AutoTutorScript, AvailableLearnerActions, AvoidLocationCondition, Checkpoint,
    CheckpointCondition, Coordinate, CoordinateType, CorridorBoundaryCondition,
    CorridorPostureCondition, DefaultAssessment, EliminateHostilesCondition, Entities,
    EntityLocation, EntityStartLocation, Entrance, EnterAreaCondition, EnvironmentAdaptation,
    Feedback, FeedbackMessage, FeedbackPresentation, Gcc, Gdc, GenericConditionInput, Input,
    InputType, InstructionalIntervention, LearnerAction, LearnerActionType, LearnerActionsFiles,
    LearnerActionsList, LearnerId, LearnerIdType, LearnerStateTransitionEnum, LogicalExpression,
    NoConditionInput, NodeIdRef, Objects, PerformanceAssessment, PerformanceNode,
    PlaceOfInterest, PlacesOfInterest, Point, PointBoundary, PointPath, PointRef, Posture,
    Postures, RemoteSko, Resources, ScenarioAdaptation, SimileConditionInput, SkoUrl,
    StartLocation, StateTransition, StateTransitions, StateType, StrategyChoices,
    StrategyHandler, StrategyRef, SurveyAssessment, TimerConditionInput, Trigger, Triggers,
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

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scoring {
    #[serde(rename = "$value", default)]
    pub kind: Vec<ScoringType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScoringType {
    #[serde(rename = "count")]
    Count(ScoreMeasure),
    #[serde(rename = "completionTime")]
    CompletionTime(ScoreMeasure),
    #[serde(skip)]
    Unrecognized(UnrecognizedElement),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreMeasure {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@units")]
    pub units: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluators: Option<Evaluators>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Evaluators {
    #[serde(default)]
    pub evaluator: Vec<Evaluator>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluator {
    #[serde(rename = "@assessment")]
    pub assessment: AssessmentLevel,
    #[serde(rename = "@value")]
    pub value: String,
    #[serde(rename = "@operator")]
    pub operator: Operator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Equals,
    LessThan,
    LessThanEquals,
    GreaterThan,
    GreaterThanEquals,
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

/// A strategy runs its activities in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "$value", default)]
    pub activities: Vec<StrategyActivity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StrategyActivity {
    PerformanceAssessment(PerformanceAssessment),
    InstructionalIntervention(InstructionalIntervention),
    ScenarioAdaptation(ScenarioAdaptation),
    #[serde(skip)]
    Unrecognized(UnrecognizedElement),
}

choice! {
    ConditionsOrConcepts => "concept children" { Conditions, Concepts },
    ScoringType => "scoring",
    StrategyActivity => "strategy activity" { InstructionalIntervention },
}

recognizable! {
    Scenario { learner_id, assessment, actions },
    Assessment { objects, tasks },
    Tasks { task },
    Task { start_triggers, end_triggers, concepts, assessments },
    Concepts { concept },
    Concept { assessments, children },
    Conditions { condition },
    Condition { input, scoring },
    Scoring { kind },
    Actions { instructional_strategies, state_transitions },
    InstructionalStrategies { strategy },
    Strategy { activities },
}
