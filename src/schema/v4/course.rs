use serde::{Deserialize, Serialize};

use crate::schema::common::{BooleanEnum, UnrecognizedElement};

pub use crate::schema::v3::course::{
    Aar, AutoTutorSession, BranchConcepts, CustomInteropInputs, CustomLoadArgs, DisInteropInputs,
    DkfRef, EmptyLoadArgs, EmptyProperties, GuidanceChoice, GuidanceFile, GuidanceMessage,
    GuidanceUrl, LessonMaterialFiles, PowerPointInteropInputs, PowerPointLoadArgs,
    PracticeQuadrant, PresentSurvey, RecallQuadrant, ScenarioFileLoadArgs, SurveyChoice,
    Vbs2InteropInputs, VideoSize,
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guidance {
    #[serde(rename = "@transitionName", default, skip_serializing_if = "Option::is_none")]
    pub transition_name: Option<String>,
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
pub struct TrainingApplicationOptions {
    #[serde(rename = "disableInstInterImpl", default, skip_serializing_if = "Option::is_none")]
    pub disable_inst_inter_impl: Option<BooleanEnum>,
    #[serde(rename = "showAvatarInitially", default, skip_serializing_if = "Option::is_none")]
    pub show_avatar_initially: Option<String>,
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
    #[serde(rename = "VBS2InteropInputs")]
    Vbs2(Vbs2InteropInputs),
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
pub struct ScenarioFileInteropInputs {
    #[serde(rename = "loadArgs")]
    pub load_args: ScenarioFileLoadArgs,
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

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LessonMaterialList {
    #[serde(rename = "Media", default)]
    pub media: Vec<Media>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub name: String,
    pub uri: String,
    #[serde(rename = "$value")]
    pub properties: MediaTypeProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MediaTypeProperties {
    #[serde(rename = "PDFProperties")]
    Pdf(EmptyProperties),
    #[serde(rename = "WebpageProperties")]
    Webpage(EmptyProperties),
    #[serde(rename = "YoutubeVideoProperties")]
    YoutubeVideo(YoutubeVideoProperties),
    #[serde(rename = "ImageProperties")]
    Image(EmptyProperties),
    #[serde(skip)]
    Unrecognized(UnrecognizedElement),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct YoutubeVideoProperties {
    #[serde(rename = "allowFullScreen", default, skip_serializing_if = "Option::is_none")]
    pub allow_full_screen: Option<BooleanEnum>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<VideoSize>,
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
    MediaTypeProperties => "media properties",
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
    LessonMaterial { list },
    LessonMaterialList { media },
    Media { properties },
    MerrillsBranchPoint { quadrants },
    Quadrants { content },
}
