use crate::converters::{recognized, ConversionContext, MappingError, SchemaConverter};
use crate::schema::{v6, v7, v8, SchemaTree};

pub const EXTRA_CONTENT_ISSUE: &str = "Additional Metadata Content Reference";

#[derive(Debug, Default, Clone, Copy)]
pub struct V7ToV8Converter;

impl SchemaConverter for V7ToV8Converter {
    fn name(&self) -> &'static str {
        "v7_to_v8"
    }

    fn convert(
        &self,
        tree: SchemaTree,
        context: &mut ConversionContext,
    ) -> Result<SchemaTree, MappingError> {
        let document = match tree {
            SchemaTree::V7(document) => document,
            other => return Err(MappingError::wrong_tree(self, &other)),
        };
        let converted = match document {
            v7::Document::Course(course) => v8::Document::Course(recognized(course)?),
            v7::Document::Scenario(scenario) => v8::Document::Scenario(recognized(scenario)?),
            v7::Document::LearnerConfig(config) => v8::Document::LearnerConfig(recognized(config)?),
            v7::Document::PedagogyConfig(config) => {
                v8::Document::PedagogyConfig(recognized(config)?)
            }
            v7::Document::Metadata(metadata) => {
                v8::Document::Metadata(convert_metadata(metadata, context)?)
            }
            v7::Document::TrainingAppRef(wrapper) => {
                v8::Document::TrainingAppRef(recognized(wrapper)?)
            }
            v7::Document::SensorConfig(config) => v8::Document::SensorConfig(recognized(config)?),
            v7::Document::LessonMaterialRef(list) => {
                v8::Document::LessonMaterialRef(recognized(list)?)
            }
            v7::Document::ConversationTree(tree) => {
                v8::Document::ConversationTree(recognized(tree)?)
            }
        };
        Ok(SchemaTree::V8(converted))
    }
}

fn convert_metadata(
    metadata: v6::metadata::Metadata,
    context: &mut ConversionContext,
) -> Result<v8::metadata::Metadata, MappingError> {
    use v8::metadata::{Content, ContentRef};

    // Checked in this order; the first populated reference wins.
    let candidates = [
        metadata.simple_ref.map(|value| Content::Simple(ContentRef { value })),
        metadata.training_app_ref.map(|value| Content::TrainingApp(ContentRef { value })),
        metadata.url.map(|value| Content::Url(ContentRef { value })),
        metadata
            .lesson_material_ref
            .map(|value| Content::LessonMaterial(ContentRef { value })),
    ];
    let mut populated = candidates.into_iter().flatten();
    let content = populated
        .next()
        .ok_or(MappingError::MissingRequired("metadata content reference"))?;
    for _ in populated {
        context.add_issue(EXTRA_CONTENT_ISSUE);
    }

    let concept = metadata
        .concepts
        .concept
        .into_iter()
        .map(|concept| v8::metadata::Concept {
            name: concept.name,
            activity_type: concept.attributes.map(|attributes| v8::metadata::ActivityType {
                kind: v8::metadata::ActivityKind::Passive(v8::metadata::Passive {
                    attributes: Some(attributes),
                }),
            }),
        })
        .collect();

    Ok(v8::metadata::Metadata {
        version: metadata.version,
        display_name: None,
        present_at: v8::metadata::PresentAt {
            merrill_quadrant: metadata.merrill_quadrant,
        },
        content,
        concepts: v8::metadata::Concepts { concept },
    })
}
