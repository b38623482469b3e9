use serde::{Deserialize, Serialize};

use crate::schema::common::UnrecognizedElement;

pub use crate::schema::v2::course::{
    CustomInteropInputs, CustomLoadArgs, DisInteropInputs, DkfRef, EmptyLoadArgs,
    EmptyProperties, FinishedWhen, InteropInput, InteropInputs, Interops, Interop,
    LessonMaterialFiles, LessonMaterialList, Media, MediaTypeProperties,
    PowerPointInteropInputs, PowerPointLoadArgs, ScenarioFileLoadArgs, TrainingApplicationOptions,
    Vbs2InteropInputs, VideoSize, YoutubeVideoProperties,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(rename = "@version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "surveyContext", default, skip_serializing_if = "Option::is_none")]
    pub survey_context: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<bool>,
    pub transitions: Transitions,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Transitions {
    #[serde(rename = "$value", default)]
    pub transition: Vec<Transition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Transition {
    Guidance(Guidance),
    PresentSurvey(PresentSurvey),
    #[serde(rename = "AAR")]
    Aar(Aar),
    TrainingApplication(TrainingApplication),
    LessonMaterial(LessonMaterial),
    MerrillsBranchPoint(MerrillsBranchPoint),
    #[serde(skip)]
    Unrecognized(UnrecognizedElement),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guidance {
    #[serde(rename = "@transitionName", default, skip_serializing_if = "Option::is_none")]
    pub transition_name: Option<String>,
    #[serde(rename = "@displayTime", default, skip_serializing_if = "Option::is_none")]
    pub display_time: Option<u32>,
    #[serde(rename = "@fullScreen", default, skip_serializing_if = "Option::is_none")]
    pub full_screen: Option<bool>,
    #[serde(rename = "$value")]
    pub choice: GuidanceChoice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GuidanceChoice {
    Message(GuidanceMessage),
    File(GuidanceFile),
    #[serde(rename = "URL")]
    Url(GuidanceUrl),
    #[serde(skip)]
    Unrecognized(UnrecognizedElement),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuidanceMessage {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuidanceFile {
    #[serde(rename = "HTML")]
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuidanceUrl {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentSurvey {
    #[serde(rename = "@transitionName", default, skip_serializing_if = "Option::is_none")]
    pub transition_name: Option<String>,
    #[serde(rename = "@fullScreen", default, skip_serializing_if = "Option::is_none")]
    pub full_screen: Option<bool>,
    #[serde(rename = "$value")]
    pub choice: SurveyChoice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SurveyChoice {
    #[serde(rename = "GIFTSurveyKey")]
    GiftSurveyKey(String),
    AutoTutorSession(AutoTutorSession),
    #[serde(skip)]
    Unrecognized(UnrecognizedElement),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoTutorSession {
    #[serde(rename = "dkfRef")]
    pub dkf_ref: DkfRef,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Aar {
    #[serde(rename = "@transitionName", default, skip_serializing_if = "Option::is_none")]
    pub transition_name: Option<String>,
    #[serde(rename = "@fullScreen", default, skip_serializing_if = "Option::is_none")]
    pub full_screen: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingApplication {
    #[serde(rename = "@transitionName", default, skip_serializing_if = "Option::is_none")]
    pub transition_name: Option<String>,
    #[serde(rename = "dkfRef")]
    pub dkf_ref: DkfRef,
    #[serde(rename = "finishedWhen")]
    pub finished_when: FinishedWhen,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guidance: Option<Guidance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<TrainingApplicationOptions>,
    pub interops: Interops,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LessonMaterial {
    #[serde(rename = "@transitionName", default, skip_serializing_if = "Option::is_none")]
    pub transition_name: Option<String>,
    #[serde(rename = "lessonMaterialList", default, skip_serializing_if = "Option::is_none")]
    pub list: Option<LessonMaterialList>,
    #[serde(rename = "lessonMaterialFiles", default, skip_serializing_if = "Option::is_none")]
    pub files: Option<LessonMaterialFiles>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerrillsBranchPoint {
    #[serde(rename = "@transitionName", default, skip_serializing_if = "Option::is_none")]
    pub transition_name: Option<String>,
    pub concepts: BranchConcepts,
    pub quadrants: Quadrants,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BranchConcepts {
    #[serde(default)]
    pub concept: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Quadrants {
    #[serde(rename = "$value", default)]
    pub content: Vec<Quadrant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Quadrant {
    Rule(EmptyProperties),
    Example(EmptyProperties),
    Recall(RecallQuadrant),
    Practice(PracticeQuadrant),
    Transitions(Transitions),
    #[serde(skip)]
    Unrecognized(UnrecognizedElement),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecallQuadrant {
    #[serde(rename = "@allowedAttempts", default, skip_serializing_if = "Option::is_none")]
    pub allowed_attempts: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PracticeQuadrant {
    #[serde(rename = "@allowedAttempts", default, skip_serializing_if = "Option::is_none")]
    pub allowed_attempts: Option<u32>,
}

choice! {
    Transition => "transition" {
        Guidance,
        PresentSurvey,
        TrainingApplication,
        LessonMaterial,
        MerrillsBranchPoint,
    },
    GuidanceChoice => "guidance",
    SurveyChoice => "present survey",
    Quadrant => "quadrant" { Transitions },
}

recognizable! {
    Course { transitions },
    Transitions { transition },
    Guidance { choice },
    PresentSurvey { choice },
    TrainingApplication { guidance, interops },
    LessonMaterial { list },
    MerrillsBranchPoint { quadrants },
    Quadrants { content },
}
