use serde::{Deserialize, Serialize};

use crate::schema::common::UnrecognizedElement;

pub use crate::schema::v9::dkf::{
    Actions, Agl, ApplicationCompletedCondition, Assessments, AssessmentType,
    AutoTutorConditionInput, AutoTutorScript, AvailableLearnerActions, AvoidLocationCondition,
    Checkpoint, CheckpointCondition, Coordinate, CoordinateType, CorridorBoundaryCondition,
    CorridorPostureCondition, DefaultAssessment, EliminateHostilesCondition, Entities,
    EntityLocation, EntityStartLocation, Entrance, EnterAreaCondition, EnvironmentAdaptation,
    Evaluator, Evaluators, Feedback, FeedbackMessage, FeedbackPresentation, Gcc, Gdc,
    GenericConditionInput, Input, InputType, InstructionalIntervention, InstructionalStrategies,
    LearnerAction, LearnerActionType, LearnerActionsFiles, LearnerActionsList, LearnerId,
    LearnerIdType, LearnerStateTransitionEnum, LogicalExpression, NoConditionInput, NodeIdRef,
    Objects, Operator, PerformanceAssessment, PerformanceNode, PlaceOfInterest, PlacesOfInterest,
    Point, PointBoundary, PointPath, PointRef, Posture, Postures, RemoteSko, Resources,
    ScenarioAdaptation, ScoreMeasure, Scoring, ScoringType, SimileConditionInput, SkoUrl,
    StartLocation, StateTransition, StateTransitions, StateType, Strategy, StrategyActivity,
    StrategyChoices, StrategyHandler, StrategyRef, SurveyAssessment, TimerConditionInput,
    Trigger, Triggers,
};

/// Name given to the single member created for legacy single-learner scenarios.
pub const DEFAULT_TEAM_MEMBER: &str = "Learner";

/// Name of the team holding [`DEFAULT_TEAM_MEMBER`].
pub const DEFAULT_TEAM: &str = "Team";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(rename = "@version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub resources: Resources,
    #[serde(rename = "teamOrganization", default, skip_serializing_if = "Option::is_none")]
    pub team_organization: Option<TeamOrganization>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment: Option<Assessment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Actions>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamOrganization {
    pub team: Team,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "$value", default)]
    pub members: Vec<TeamOrMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TeamOrMember {
    #[serde(rename = "team")]
    Team(Team),
    #[serde(rename = "teamMember")]
    TeamMember(TeamMember),
    #[serde(skip)]
    Unrecognized(UnrecognizedElement),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@playable", default, skip_serializing_if = "Option::is_none")]
    pub playable: Option<bool>,
    #[serde(rename = "learnerId")]
    pub learner_id: LearnerId,
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
    #[serde(rename = "teamMemberRefs", default, skip_serializing_if = "Option::is_none")]
    pub team_member_refs: Option<TeamMemberRefs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultAssessment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<Input>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring: Option<Scoring>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TeamMemberRefs {
    #[serde(rename = "teamMemberRef", default)]
    pub team_member_ref: Vec<String>,
}

choice! {
    TeamOrMember => "team organization" { Team, TeamMember },
    ConditionsOrConcepts => "concept children" { Conditions, Concepts },
}

recognizable! {
    Scenario { team_organization, assessment, actions },
    TeamOrganization { team },
    Team { members },
    TeamMember { learner_id },
    Assessment { objects, tasks },
    Tasks { task },
    Task { start_triggers, end_triggers, concepts, assessments },
    Concepts { concept },
    Concept { assessments, children },
    Conditions { condition },
    Condition { input, scoring },
}
