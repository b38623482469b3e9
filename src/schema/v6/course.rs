use serde::{Deserialize, Serialize};

use crate::schema::common::{BooleanEnum, UnrecognizedElement};

pub use crate::schema::v4::course::{
    Aar, AutoTutorSession, BranchConcepts, CustomInteropInputs, CustomLoadArgs, DisInteropInputs,
    DkfRef, EmptyLoadArgs, EmptyProperties, GuidanceChoice, GuidanceFile, GuidanceMessage,
    GuidanceUrl, LessonMaterial, LessonMaterialFiles, LessonMaterialList, Media,
    MediaTypeProperties, PowerPointInteropInputs, PowerPointLoadArgs, PracticeQuadrant,
    PresentSurvey, RecallQuadrant, ScenarioFileInteropInputs, ScenarioFileLoadArgs, SurveyChoice,
    TrainingApplicationOptions, VideoSize, YoutubeVideoProperties,
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
    pub exclude: Option<BooleanEnum>,
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

/// Guidance transitions are always named from this generation on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guidance {
    #[serde(rename = "@transitionName")]
    pub transition_name: String,
    #[serde(rename = "@displayTime", default, skip_serializing_if = "Option::is_none")]
    pub display_time: Option<u32>,
    #[serde(rename = "@fullScreen", default, skip_serializing_if = "Option::is_none")]
    pub full_screen: Option<BooleanEnum>,
    #[serde(rename = "$value")]
    pub choice: GuidanceChoice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingApplication {
    #[serde(rename = "@transitionName", default, skip_serializing_if = "Option::is_none")]
    pub transition_name: Option<String>,
    #[serde(rename = "dkfRef")]
    pub dkf_ref: DkfRef,
    #[serde(rename = "finishedWhen")]
    pub finished_when: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guidance: Option<Guidance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<TrainingApplicationOptions>,
    pub interops: Interops,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Interops {
    #[serde(default)]
    pub interop: Vec<Interop>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interop {
    #[serde(rename = "interopImpl")]
    pub interop_impl: String,
    #[serde(rename = "interopInputs")]
    pub interop_inputs: InteropInputs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteropInputs {
    #[serde(rename = "$value")]
    pub input: InteropInput,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InteropInput {
    #[serde(rename = "VBSInteropInputs")]
    Vbs(ScenarioFileInteropInputs),
    #[serde(rename = "DISInteropInputs")]
    Dis(DisInteropInputs),
    #[serde(rename = "PowerPointInteropInputs")]
    PowerPoint(PowerPointInteropInputs),
    #[serde(rename = "CustomInteropInputs")]
    Custom(CustomInteropInputs),
    #[serde(rename = "TC3InteropInputs")]
    Tc3(ScenarioFileInteropInputs),
    #[serde(rename = "SCATTInteropInputs")]
    Scatt(DisInteropInputs),
    #[serde(skip)]
    Unrecognized(UnrecognizedElement),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerrillsBranchPoint {
    #[serde(rename = "@transitionName", default, skip_serializing_if = "Option::is_none")]
    pub transition_name: Option<String>,
    pub concepts: BranchConcepts,
    pub quadrants: Quadrants,
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

choice! {
    Transition => "transition" {
        Guidance,
        PresentSurvey,
        TrainingApplication,
        LessonMaterial,
        MerrillsBranchPoint,
    },
    InteropInput => "interop input",
    Quadrant => "quadrant" { Transitions },
}

recognizable! {
    Course { transitions },
    Transitions { transition },
    Guidance { choice },
    TrainingApplication { guidance, interops },
    Interops { interop },
    Interop { interop_inputs },
    InteropInputs { input },
    MerrillsBranchPoint { quadrants },
    Quadrants { content },
}
