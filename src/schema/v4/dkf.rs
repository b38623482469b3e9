use serde::{Deserialize, Serialize};

use crate::schema::common::UnrecognizedElement;

pub use crate::schema::v3::dkf::{
    Actions, Agl, ApplicationCompletedCondition, Assessments, AssessmentType,
    AvoidLocationCondition, Checkpoint, CheckpointCondition, Coordinate, CoordinateType,
    CorridorBoundaryCondition, CorridorPostureCondition, DefaultAssessment,
    EliminateHostilesCondition, Entities, EntityLocation, EntityStartLocation, Entrance,
    EnterAreaCondition, EnvironmentAdaptation, Evaluator, Evaluators, Feedback,
    FeedbackMessage, FeedbackPresentation, Gcc, Gdc, GenericConditionInput,
    InstructionalIntervention, InstructionalStrategies, LearnerActionsFiles, LearnerId,
    LearnerIdType, LearnerStateTransitionEnum, LogicalExpression, NodeIdRef, Objects, Operator,
    PerformanceAssessment, PerformanceNode, Posture, Postures, ScenarioAdaptation, ScoreMeasure,
    Scoring, ScoringType, SimileConditionInput, StartLocation, StateTransition, StateTransitions,
    StateType, Strategy, StrategyChoices, StrategyHandler, StrategyRef, StrategyType,
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
pub struct LearnerActionsList {
    #[serde(rename = "learnerAction", default)]
    pub learner_action: Vec<LearnerAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnerAction {
    #[serde(rename = "@displayName")]
    pub display_name: String,
    #[serde(rename = "@type")]
    pub action_type: LearnerActionType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LearnerActionType {
    #[serde(rename = "EXPLOSIVE_HAZARD_SPOT_REPORT")]
    ExplosiveHazardSpotReport,
    #[serde(rename = "NINE_LINE_REPORT")]
    NineLineReport,
    #[serde(rename = "SPOT_REPORT")]
    SpotReport,
    #[serde(rename = "TUTOR_ME")]
    TutorMe,
    #[serde(rename = "ASSESS_MY_LOCATION")]
    AssessMyLocation,
}

impl LearnerActionType {
    /// Looks up the free-text action names older scenarios used.
    pub fn from_legacy_name(name: &str) -> Option<Self> {
        match name.trim() {
            "EXPLOSIVE_HAZARD_SPOT_REPORT" | "ExplosiveHazardSpotReport" => {
                Some(LearnerActionType::ExplosiveHazardSpotReport)
            }
            "NINE_LINE_REPORT" | "NineLineReport" => Some(LearnerActionType::NineLineReport),
            "SPOT_REPORT" | "SpotReport" => Some(LearnerActionType::SpotReport),
            "TUTOR_ME" | "TutorMe" => Some(LearnerActionType::TutorMe),
            "ASSESS_MY_LOCATION" | "AssessMyLocation" => Some(LearnerActionType::AssessMyLocation),
            _ => None,
        }
    }
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
    #[serde(rename = "SIMILEConditionInput")]
    Simile(SimileConditionInput),
    #[serde(skip)]
    Unrecognized(UnrecognizedElement),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoTutorConditionInput {
    #[serde(rename = "$value")]
    pub script: AutoTutorScript,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AutoTutorScript {
    #[serde(rename = "ATLocalSKO")]
    LocalSko(LocalSko),
    #[serde(rename = "ATRemoteSKO")]
    RemoteSko(RemoteSko),
    #[serde(skip)]
    Unrecognized(UnrecognizedElement),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalSko {
    pub file: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteSko {
    #[serde(rename = "URL")]
    pub url: SkoUrl,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkoUrl {
    pub address: String,
}

choice! {
    ConditionsOrConcepts => "concept children" { Conditions, Concepts },
    InputType => "condition input" { AutoTutor, EliminateHostiles },
    AutoTutorScript => "AutoTutor script",
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
    Input { kind },
    AutoTutorConditionInput { script },
}
