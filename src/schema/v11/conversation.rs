use serde::{Deserialize, Serialize};

use crate::schema::common::UnrecognizedElement;

pub use crate::schema::v7::conversation::{EndNode, MessageNode};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    #[serde(rename = "@version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(rename = "learnersObjective", default, skip_serializing_if = "Option::is_none")]
    pub learners_objective: Option<String>,
    #[serde(rename = "startNodeId")]
    pub start_node_id: u32,
    pub nodes: Nodes,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Nodes {
    #[serde(rename = "$value", default)]
    pub node: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    MessageNode(MessageNode),
    QuestionNode(QuestionNode),
    EndNode(EndNode),
    #[serde(skip)]
    Unrecognized(UnrecognizedElement),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionNode {
    #[serde(rename = "@id")]
    pub id: u32,
    pub text: String,
    pub choices: Choices,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Choices {
    #[serde(default)]
    pub choice: Vec<Choice>,
}

/// An unassessed choice simply omits the attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    #[serde(rename = "@id")]
    pub id: u32,
    #[serde(rename = "@assessment", default, skip_serializing_if = "Option::is_none")]
    pub assessment: Option<ChoiceAssessment>,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChoiceAssessment {
    BelowExpectation,
    AtExpectation,
    AboveExpectation,
}

choice! {
    Node => "conversation node",
}

recognizable! {
    Conversation { nodes },
    Nodes { node },
}
