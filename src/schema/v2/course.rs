use serde::{Deserialize, Serialize};

use crate::schema::common::{Nvpair, UnrecognizedElement};

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
    #[serde(skip)]
    Unrecognized(UnrecognizedElement),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guidance {
    #[serde(rename = "@displayTime", default, skip_serializing_if = "Option::is_none")]
    pub display_time: Option<u32>,
    #[serde(rename = "@fullScreen", default, skip_serializing_if = "Option::is_none")]
    pub full_screen: Option<bool>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentSurvey {
    #[serde(rename = "@fullScreen", default, skip_serializing_if = "Option::is_none")]
    pub full_screen: Option<bool>,
    #[serde(rename = "GIFTSurveyKey")]
    pub gift_survey_key: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Aar {
    #[serde(rename = "@fullScreen", default, skip_serializing_if = "Option::is_none")]
    pub full_screen: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingApplication {
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DkfRef {
    pub file: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinishedWhen {
    #[serde(rename = "STOPPED")]
    Stopped,
    #[serde(rename = "LESSON_COMPLETE")]
    LessonComplete,
    #[serde(rename = "SCENARIO_ENDED")]
    ScenarioEnded,
}

impl FinishedWhen {
    pub fn xml_value(&self) -> &'static str {
        match self {
            FinishedWhen::Stopped => "STOPPED",
            FinishedWhen::LessonComplete => "LESSON_COMPLETE",
            FinishedWhen::ScenarioEnded => "SCENARIO_ENDED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrainingApplicationOptions {
    #[serde(rename = "disableInstInterImpl", default, skip_serializing_if = "Option::is_none")]
    pub disable_inst_inter_impl: Option<bool>,
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
    #[serde(skip)]
    Unrecognized(UnrecognizedElement),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vbs2InteropInputs {
    #[serde(rename = "loadArgs")]
    pub load_args: ScenarioFileLoadArgs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioFileLoadArgs {
    #[serde(rename = "scenarioFile")]
    pub scenario_file: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DisInteropInputs {
    #[serde(rename = "loadArgs", default)]
    pub load_args: EmptyLoadArgs,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmptyLoadArgs {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerPointInteropInputs {
    #[serde(rename = "loadArgs")]
    pub load_args: PowerPointLoadArgs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerPointLoadArgs {
    #[serde(rename = "showFile")]
    pub show_file: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CustomInteropInputs {
    #[serde(rename = "loadArgs", default)]
    pub load_args: CustomLoadArgs,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CustomLoadArgs {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nvpair: Vec<Nvpair>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LessonMaterial {
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
pub struct EmptyProperties {}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct YoutubeVideoProperties {
    #[serde(rename = "allowFullScreen", default, skip_serializing_if = "Option::is_none")]
    pub allow_full_screen: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<VideoSize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoSize {
    #[serde(rename = "@width")]
    pub width: String,
    #[serde(rename = "@height")]
    pub height: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LessonMaterialFiles {
    #[serde(default)]
    pub file: Vec<String>,
}

choice! {
    Transition => "transition" { TrainingApplication, LessonMaterial },
    InteropInput => "interop input",
    MediaTypeProperties => "media properties",
}

recognizable! {
    Course { transitions },
    Transitions { transition },
    TrainingApplication { interops },
    Interops { interop },
    Interop { interop_inputs },
    InteropInputs { input },
    LessonMaterial { list },
    LessonMaterialList { media },
    Media { properties },
}
