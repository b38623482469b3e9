use serde::{Deserialize, Serialize};

use crate::schema::common::{BooleanEnum, UnrecognizedElement};

pub use crate::schema::v6::course::{
    Aar, AutoTutorSession, BranchConcepts, CustomInteropInputs, CustomLoadArgs, DisInteropInputs,
    DkfRef, EmptyLoadArgs, EmptyProperties, Guidance, GuidanceChoice, GuidanceFile,
    GuidanceMessage, GuidanceUrl, Interop, InteropInput, InteropInputs, Interops,
    LessonMaterialFiles, PowerPointInteropInputs, PowerPointLoadArgs, PracticeQuadrant,
    PresentSurvey, RecallQuadrant, ScenarioFileInteropInputs, ScenarioFileLoadArgs, SurveyChoice,
    VideoSize, YoutubeVideoProperties,
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
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
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
    #[serde(rename = "displayName")]
    pub display_name: String,
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
    #[serde(rename = "SlideShowProperties")]
    SlideShow(SlideShowProperties),
    #[serde(skip)]
    Unrecognized(UnrecognizedElement),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SlideShowProperties {
    #[serde(rename = "slideRelativePath", default)]
    pub slide_relative_path: Vec<String>,
    #[serde(rename = "displaySlideShowNav", default, skip_serializing_if = "Option::is_none")]
    pub display_slide_show_nav: Option<BooleanEnum>,
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
    MediaTypeProperties => "media properties",
    Quadrant => "quadrant" { Transitions },
}

recognizable! {
    Course { transitions },
    Transitions { transition },
    TrainingApplication { guidance, interops },
    LessonMaterial { list },
    LessonMaterialList { media },
    Media { properties },
    MerrillsBranchPoint { quadrants },
    Quadrants { content },
}
