use serde::{Deserialize, Serialize};

use crate::schema::common::{AssessmentLevel, Nvpair, UnrecognizedElement};

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
    #[serde(rename = "type")]
    pub location: LearnerIdType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnerIdType {
    pub coordinate: Coordinate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(rename = "$value")]
    pub kind: CoordinateType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CoordinateType {
    #[serde(rename = "GCC")]
    Gcc(Gcc),
    #[serde(rename = "GDC")]
    Gdc(Gdc),
    #[serde(rename = "AGL")]
    Agl(Agl),
    #[serde(skip)]
    Unrecognized(UnrecognizedElement),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gcc {
    #[serde(rename = "@x")]
    pub x: f64,
    #[serde(rename = "@y")]
    pub y: f64,
    #[serde(rename = "@z")]
    pub z: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gdc {
    #[serde(rename = "@latitude")]
    pub latitude: f64,
    #[serde(rename = "@longitude")]
    pub longitude: f64,
    #[serde(rename = "@elevation")]
    pub elevation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agl {
    #[serde(rename = "@x")]
    pub x: f64,
    #[serde(rename = "@y")]
    pub y: f64,
    #[serde(rename = "@elevation")]
    pub elevation: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Resources {
    #[serde(rename = "surveyContext", default, skip_serializing_if = "Option::is_none")]
    pub survey_context: Option<u32>,
    #[serde(
        rename = "availableLearnerActions",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub available_learner_actions: Option<AvailableLearnerActions>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AvailableLearnerActions {
    #[serde(rename = "learnerActionsFiles", default, skip_serializing_if = "Option::is_none")]
    pub learner_actions_files: Option<LearnerActionsFiles>,
    #[serde(rename = "learnerActionsList", default, skip_serializing_if = "Option::is_none")]
    pub learner_actions_list: Option<LearnerActionsList>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LearnerActionsFiles {
    #[serde(default)]
    pub file: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LearnerActionsList {
    #[serde(rename = "learnerAction", default)]
    pub learner_action: Vec<LearnerAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnerAction {
    #[serde(rename = "@displayName")]
    pub display_name: String,
    #[serde(rename = "@type")]
    pub action_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objects: Option<Objects>,
    pub tasks: Tasks,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Objects {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waypoints: Option<Waypoints>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Waypoints {
    #[serde(default)]
    pub waypoint: Vec<Waypoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
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
pub struct Triggers {
    #[serde(rename = "$value", default)]
    pub trigger: Vec<Trigger>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Trigger {
    #[serde(rename = "taskEnded")]
    TaskEnded(NodeIdRef),
    #[serde(rename = "conceptEnded")]
    ConceptEnded(NodeIdRef),
    #[serde(rename = "childConceptEnded")]
    ChildConceptEnded(NodeIdRef),
    #[serde(rename = "entityLocation")]
    EntityLocation(EntityLocation),
    #[serde(skip)]
    Unrecognized(UnrecognizedElement),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeIdRef {
    #[serde(rename = "@nodeId")]
    pub node_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityLocation {
    #[serde(rename = "@entityId")]
    pub entity_id: String,
    #[serde(rename = "triggerLocation")]
    pub trigger_location: Coordinate,
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
    pub children: MetricsOrConcepts,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MetricsOrConcepts {
    #[serde(rename = "metrics")]
    Metrics(Metrics),
    #[serde(rename = "concepts")]
    Concepts(Concepts),
    #[serde(skip)]
    Unrecognized(UnrecognizedElement),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(default)]
    pub metric: Vec<Metric>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    #[serde(rename = "@name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub conditions: Conditions,
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
pub struct DefaultAssessment {
    #[serde(rename = "@assessment")]
    pub assessment: AssessmentLevel,
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
    #[serde(skip)]
    Unrecognized(UnrecognizedElement),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApplicationCompletedCondition {
    #[serde(
        rename = "idealCompletionDuration",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ideal_completion_duration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvoidLocationCondition {
    #[serde(rename = "waypointRef")]
    pub waypoint_ref: Vec<WaypointRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaypointRef {
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
    #[serde(rename = "@waypoint")]
    pub waypoint: String,
    #[serde(rename = "@atTime")]
    pub at_time: String,
    #[serde(rename = "@windowOfTime")]
    pub window_of_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorridorBoundaryCondition {
    #[serde(rename = "bufferWidthPercent")]
    pub buffer_width_percent: f64,
    pub path: WaypointPath,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WaypointPath {
    #[serde(rename = "waypointRef", default)]
    pub waypoint_ref: Vec<WaypointRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorridorPostureCondition {
    pub path: WaypointPath,
    pub postures: Postures,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Postures {
    #[serde(default)]
    pub posture: Vec<Posture>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Posture {
    Unknown,
    Upright,
    Crouching,
    Kneeling,
    Prone,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EliminateHostilesCondition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Entities>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Entities {
    #[serde(rename = "startLocation", default)]
    pub start_location: Vec<EntityStartLocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityStartLocation {
    #[serde(rename = "@entityId")]
    pub entity_id: String,
    pub coordinate: Coordinate,
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
    pub outside: WaypointBoundary,
    pub inside: WaypointBoundary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaypointBoundary {
    #[serde(rename = "@waypoint")]
    pub waypoint: String,
    #[serde(rename = "@proximity")]
    pub proximity: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenericConditionInput {
    #[serde(default)]
    pub nvpair: Vec<Nvpair>,
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
    #[serde(rename = "eq")]
    Equals,
    #[serde(rename = "ne")]
    NotEquals,
    #[serde(rename = "lt")]
    LessThan,
    #[serde(rename = "le")]
    LessThanEquals,
    #[serde(rename = "gt")]
    GreaterThan,
    #[serde(rename = "ge")]
    GreaterThanEquals,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Assessments {
    #[serde(rename = "$value", default)]
    pub kind: Vec<AssessmentType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AssessmentType {
    Survey(SurveyAssessment),
    #[serde(skip)]
    Unrecognized(UnrecognizedElement),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyAssessment {
    #[serde(rename = "@GIFTSurveyKey")]
    pub gift_survey_key: String,
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
pub struct StrategyHandler {
    #[serde(rename = "@impl")]
    pub handler_impl: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceAssessment {
    #[serde(rename = "@nodeId")]
    pub node_id: u32,
    #[serde(rename = "strategyHandler")]
    pub strategy_handler: StrategyHandler,
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
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioAdaptation {
    #[serde(rename = "strategyHandler")]
    pub strategy_handler: StrategyHandler,
    #[serde(rename = "environmentAdaptation", default)]
    pub environment_adaptation: Vec<EnvironmentAdaptation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentAdaptation {
    #[serde(rename = "@type")]
    pub adaptation_type: String,
    #[serde(rename = "@value")]
    pub value: String,
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
    #[serde(rename = "$value")]
    pub state_type: StateType,
    #[serde(rename = "strategyChoices")]
    pub strategy_choices: StrategyChoices,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StateType {
    LearnerStateTransitionEnum(LearnerStateTransitionEnum),
    PerformanceNode(PerformanceNode),
    #[serde(skip)]
    Unrecognized(UnrecognizedElement),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnerStateTransitionEnum {
    #[serde(rename = "@attribute")]
    pub attribute: String,
    #[serde(rename = "@previous", default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    #[serde(rename = "@current")]
    pub current: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceNode {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@nodeId")]
    pub node_id: u32,
    #[serde(rename = "@previous", default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<AssessmentLevel>,
    #[serde(rename = "@current")]
    pub current: AssessmentLevel,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StrategyChoices {
    #[serde(rename = "strategyRef", default)]
    pub strategy_ref: Vec<StrategyRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyRef {
    #[serde(rename = "@name")]
    pub name: String,
}

choice! {
    CoordinateType => "coordinate",
    Trigger => "trigger" { EntityLocation },
    MetricsOrConcepts => "concept children" { Metrics, Concepts },
    InputType => "condition input" { EliminateHostiles },
    ScoringType => "scoring",
    AssessmentType => "assessment",
    StrategyType => "strategy",
    StateType => "state type",
}

recognizable! {
    Scenario { learner_id, assessment, actions },
    LearnerId { location },
    LearnerIdType { coordinate },
    Coordinate { kind },
    Assessment { objects, tasks },
    Objects { waypoints },
    Waypoints { waypoint },
    Waypoint { coordinate },
    Tasks { task },
    Task { start_triggers, end_triggers, concepts, assessments },
    Triggers { trigger },
    EntityLocation { trigger_location },
    Concepts { concept },
    Concept { assessments, children },
    Metrics { metric },
    Metric { conditions },
    Conditions { condition },
    Condition { input, scoring },
    Input { kind },
    EliminateHostilesCondition { entities },
    Entities { start_location },
    EntityStartLocation { coordinate },
    Scoring { kind },
    Assessments { kind },
    Actions { instructional_strategies, state_transitions },
    InstructionalStrategies { strategy },
    Strategy { kind },
    StateTransitions { state_transition },
    StateTransition { state_type },
}
