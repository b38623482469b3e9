use crate::converters::{map_all, recognized, ConversionContext, MappingError, SchemaConverter};
use crate::schema::{v10, v4, v6, v8, v9, SchemaTree};

pub const SHOW_AVATAR_ISSUE: &str = "Show Avatar Initially Option";

#[derive(Debug, Default, Clone, Copy)]
pub struct V9ToV10Converter;

impl SchemaConverter for V9ToV10Converter {
    fn name(&self) -> &'static str {
        "v9_to_v10"
    }

    fn convert(
        &self,
        tree: SchemaTree,
        context: &mut ConversionContext,
    ) -> Result<SchemaTree, MappingError> {
        let document = match tree {
            SchemaTree::V9(document) => document,
            other => return Err(MappingError::wrong_tree(self, &other)),
        };
        let converted = match document {
            v9::Document::Course(course) => {
                v10::Document::Course(convert_course(course, context)?)
            }
            v9::Document::Scenario(scenario) => {
                v10::Document::Scenario(convert_scenario(scenario, context)?)
            }
            v9::Document::LearnerConfig(config) => {
                v10::Document::LearnerConfig(recognized(config)?)
            }
            v9::Document::PedagogyConfig(config) => {
                v10::Document::PedagogyConfig(recognized(config)?)
            }
            v9::Document::Metadata(metadata) => {
                v10::Document::Metadata(convert_metadata(metadata)?)
            }
            v9::Document::TrainingAppRef(wrapper) => {
                v10::Document::TrainingAppRef(v10::training_app::TrainingApplicationWrapper {
                    version: wrapper.version,
                    description: wrapper.description,
                    training_application: convert_training_application(
                        wrapper.training_application,
                        context,
                    ),
                })
            }
            v9::Document::SensorConfig(config) => v10::Document::SensorConfig(recognized(config)?),
            v9::Document::LessonMaterialRef(list) => {
                v10::Document::LessonMaterialRef(v10::lesson_material::LessonMaterialList {
                    version: list.version,
                    is_collection: list.is_collection,
                    media: convert_media(list.media)?,
                })
            }
            v9::Document::ConversationTree(tree) => {
                v10::Document::ConversationTree(recognized(tree)?)
            }
        };
        Ok(SchemaTree::V10(converted))
    }
}

fn convert_course(
    course: v6::course::Course,
    context: &mut ConversionContext,
) -> Result<v10::course::Course, MappingError> {
    Ok(v10::course::Course {
        version: course.version,
        name: course.name,
        description: course.description,
        survey_context: course.survey_context,
        exclude: course.exclude,
        transitions: convert_transitions(course.transitions, context)?,
    })
}

fn convert_transitions(
    transitions: v6::course::Transitions,
    context: &mut ConversionContext,
) -> Result<v10::course::Transitions, MappingError> {
    Ok(v10::course::Transitions {
        transition: map_all(transitions.transition, context, convert_transition)?,
    })
}

fn convert_transition(
    transition: v6::course::Transition,
    context: &mut ConversionContext,
) -> Result<v10::course::Transition, MappingError> {
    use v10::course::Transition as New;
    use v6::course::Transition as Old;

    Ok(match transition {
        Old::Guidance(guidance) => New::Guidance(guidance),
        Old::PresentSurvey(survey) => New::PresentSurvey(survey),
        Old::Aar(aar) => New::Aar(aar),
        Old::TrainingApplication(app) => {
            New::TrainingApplication(convert_training_application(app, context))
        }
        Old::LessonMaterial(material) => New::LessonMaterial(v10::course::LessonMaterial {
            transition_name: material.transition_name,
            list: match material.list {
                Some(list) => Some(v10::course::LessonMaterialList {
                    media: convert_media(list.media)?,
                }),
                None => None,
            },
            files: material.files,
        }),
        Old::MerrillsBranchPoint(branch) => {
            New::MerrillsBranchPoint(convert_branch_point(branch, context)?)
        }
        Old::Unrecognized(element) => return Err(MappingError::unhandled::<Old>(&element)),
    })
}

fn convert_training_application(
    app: v6::course::TrainingApplication,
    context: &mut ConversionContext,
) -> v10::course::TrainingApplication {
    let options = app.options.map(|options| {
        if options.show_avatar_initially.is_some() {
            context.add_issue(SHOW_AVATAR_ISSUE);
        }
        v10::course::TrainingApplicationOptions {
            disable_inst_inter_impl: options.disable_inst_inter_impl,
        }
    });
    v10::course::TrainingApplication {
        transition_name: app.transition_name,
        dkf_ref: app.dkf_ref,
        finished_when: app.finished_when,
        guidance: app.guidance,
        options,
        interops: app.interops,
    }
}

fn convert_media(media: Vec<v4::course::Media>) -> Result<Vec<v10::course::Media>, MappingError> {
    use v10::course::MediaTypeProperties as New;
    use v4::course::MediaTypeProperties as Old;

    media
        .into_iter()
        .map(|media| {
            let properties = match media.properties {
                Old::Pdf(properties) => New::Pdf(properties),
                Old::Webpage(properties) => New::Webpage(properties),
                Old::YoutubeVideo(properties) => New::YoutubeVideo(properties),
                Old::Image(properties) => New::Image(properties),
                Old::Unrecognized(element) => {
                    return Err(MappingError::unhandled::<Old>(&element))
                }
            };
            Ok(v10::course::Media {
                display_name: media.name,
                uri: media.uri,
                properties,
            })
        })
        .collect()
}

fn convert_branch_point(
    branch: v6::course::MerrillsBranchPoint,
    context: &mut ConversionContext,
) -> Result<v10::course::MerrillsBranchPoint, MappingError> {
    use v10::course::Quadrant as New;
    use v6::course::Quadrant as Old;

    let content = map_all(branch.quadrants.content, context, |quadrant, context| {
        Ok(match quadrant {
            Old::Rule(rule) => New::Rule(rule),
            Old::Example(example) => New::Example(example),
            Old::Recall(recall) => New::Recall(recall),
            Old::Practice(practice) => New::Practice(practice),
            Old::Transitions(transitions) => {
                New::Transitions(convert_transitions(transitions, context)?)
            }
            Old::Unrecognized(element) => return Err(MappingError::unhandled::<Old>(&element)),
        })
    })?;
    Ok(v10::course::MerrillsBranchPoint {
        transition_name: branch.transition_name,
        concepts: branch.concepts,
        quadrants: v10::course::Quadrants { content },
    })
}

fn convert_scenario(
    scenario: v9::dkf::Scenario,
    context: &mut ConversionContext,
) -> Result<v10::dkf::Scenario, MappingError> {
    let team_organization = match scenario.learner_id {
        Some(learner_id) => Some(v10::dkf::TeamOrganization {
            team: v10::dkf::Team {
                name: v10::dkf::DEFAULT_TEAM.to_string(),
                members: vec![v10::dkf::TeamOrMember::TeamMember(v10::dkf::TeamMember {
                    name: v10::dkf::DEFAULT_TEAM_MEMBER.to_string(),
                    playable: Some(true),
                    learner_id: v10::dkf::LearnerId {
                        kind: recognized(learner_id.kind)?,
                    },
                })],
            },
        }),
        None => None,
    };
    let assign = team_organization.is_some();

    let assessment = match scenario.assessment {
        Some(assessment) => Some(v10::dkf::Assessment {
            objects: assessment.objects,
            tasks: v10::dkf::Tasks {
                task: map_all(assessment.tasks.task, context, |task, context| {
                    convert_task(task, assign, context)
                })?,
            },
        }),
        None => None,
    };

    Ok(v10::dkf::Scenario {
        version: scenario.version,
        name: scenario.name,
        description: scenario.description,
        resources: scenario.resources,
        team_organization,
        assessment,
        actions: scenario.actions,
    })
}

/// `assign` attaches every condition to the default team member.
fn convert_task(
    task: v9::dkf::Task,
    assign: bool,
    context: &mut ConversionContext,
) -> Result<v10::dkf::Task, MappingError> {
    Ok(v10::dkf::Task {
        name: task.name,
        node_id: task.node_id,
        start_triggers: task.start_triggers,
        end_triggers: task.end_triggers,
        concepts: task
            .concepts
            .map(|concepts| convert_concepts(concepts, assign, context))
            .transpose()?,
        assessments: task.assessments,
    })
}

fn convert_concepts(
    concepts: v9::dkf::Concepts,
    assign: bool,
    context: &mut ConversionContext,
) -> Result<v10::dkf::Concepts, MappingError> {
    use v10::dkf::ConditionsOrConcepts as New;
    use v9::dkf::ConditionsOrConcepts as Old;

    let concept = map_all(concepts.concept, context, |concept, context| {
        let children = match concept.children {
            Old::Conditions(conditions) => New::Conditions(v10::dkf::Conditions {
                condition: conditions
                    .condition
                    .into_iter()
                    .map(|condition| {
                        Ok(v10::dkf::Condition {
                            condition_impl: condition.condition_impl,
                            team_member_refs: assign.then(|| v10::dkf::TeamMemberRefs {
                                team_member_ref: vec![v10::dkf::DEFAULT_TEAM_MEMBER.to_string()],
                            }),
                            default: condition.default,
                            input: condition.input.map(recognized).transpose()?,
                            scoring: condition.scoring.map(recognized).transpose()?,
                        })
                    })
                    .collect::<Result<_, MappingError>>()?,
            }),
            Old::Concepts(concepts) => New::Concepts(convert_concepts(concepts, assign, context)?),
            Old::Unrecognized(element) => return Err(MappingError::unhandled::<Old>(&element)),
        };
        Ok(v10::dkf::Concept {
            name: concept.name,
            node_id: concept.node_id,
            assessments: concept.assessments,
            children,
        })
    })?;
    Ok(v10::dkf::Concepts { concept })
}

fn convert_metadata(metadata: v8::metadata::Metadata) -> Result<v10::metadata::Metadata, MappingError> {
    use v10::metadata::ActivityKind as New;
    use v8::metadata::ActivityKind as Old;

    let concept = metadata
        .concepts
        .concept
        .into_iter()
        .map(|concept| {
            let activity_type = match concept.activity_type {
                Some(activity) => Some(v10::metadata::ActivityType {
                    kind: match activity.kind {
                        Old::Passive(passive) => New::Passive(passive),
                        Old::Unrecognized(element) => {
                            return Err(MappingError::unhandled::<Old>(&element))
                        }
                    },
                }),
                None => None,
            };
            Ok(v10::metadata::Concept {
                name: concept.name,
                activity_type,
            })
        })
        .collect::<Result<Vec<_>, MappingError>>()?;

    Ok(v10::metadata::Metadata {
        version: metadata.version,
        display_name: metadata.display_name,
        present_at: v10::metadata::PresentAt {
            merrill_quadrant: metadata.present_at.merrill_quadrant,
            remediation_only: None,
        },
        content: recognized(metadata.content)?,
        concepts: v10::metadata::Concepts { concept },
    })
}
