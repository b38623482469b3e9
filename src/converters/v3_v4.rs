use crate::converters::{map_all, recognized, ConversionContext, MappingError, SchemaConverter};
use crate::schema::common::BooleanEnum;
use crate::schema::{v3, v4, SchemaTree};

#[derive(Debug, Default, Clone, Copy)]
pub struct V3ToV4Converter;

impl SchemaConverter for V3ToV4Converter {
    fn name(&self) -> &'static str {
        "v3_to_v4"
    }

    fn convert(
        &self,
        tree: SchemaTree,
        context: &mut ConversionContext,
    ) -> Result<SchemaTree, MappingError> {
        let document = match tree {
            SchemaTree::V3(document) => document,
            other => return Err(MappingError::wrong_tree(self, &other)),
        };
        let converted = match document {
            v3::Document::Course(course) => v4::Document::Course(convert_course(course, context)?),
            v3::Document::Scenario(scenario) => {
                v4::Document::Scenario(convert_scenario(scenario, context)?)
            }
            v3::Document::LearnerConfig(config) => {
                v4::Document::LearnerConfig(convert_learner_config(config))
            }
            v3::Document::PedagogyConfig(emap) => {
                v4::Document::PedagogyConfig(convert_pedagogy_config(emap))
            }
        };
        Ok(SchemaTree::V4(converted))
    }
}

fn flag(value: Option<bool>) -> Option<BooleanEnum> {
    value.map(BooleanEnum::from)
}

fn convert_course(
    course: v3::course::Course,
    context: &mut ConversionContext,
) -> Result<v4::course::Course, MappingError> {
    Ok(v4::course::Course {
        version: course.version,
        name: course.name,
        description: course.description,
        survey_context: course.survey_context,
        exclude: flag(course.exclude),
        transitions: convert_transitions(course.transitions, context)?,
    })
}

fn convert_transitions(
    transitions: v3::course::Transitions,
    context: &mut ConversionContext,
) -> Result<v4::course::Transitions, MappingError> {
    Ok(v4::course::Transitions {
        transition: map_all(transitions.transition, context, convert_transition)?,
    })
}

fn convert_transition(
    transition: v3::course::Transition,
    context: &mut ConversionContext,
) -> Result<v4::course::Transition, MappingError> {
    use v3::course::Transition as Old;
    use v4::course::Transition as New;

    Ok(match transition {
        Old::Guidance(guidance) => New::Guidance(convert_guidance(guidance)?),
        Old::PresentSurvey(survey) => New::PresentSurvey(v4::course::PresentSurvey {
            transition_name: survey.transition_name,
            full_screen: survey.full_screen,
            choice: recognized(survey.choice)?,
        }),
        Old::Aar(aar) => New::Aar(aar),
        Old::TrainingApplication(app) => {
            New::TrainingApplication(convert_training_application(app)?)
        }
        Old::LessonMaterial(material) => New::LessonMaterial(v4::course::LessonMaterial {
            transition_name: material.transition_name,
            list: material.list.map(convert_media_list).transpose()?,
            files: material.files,
        }),
        Old::MerrillsBranchPoint(branch) => {
            New::MerrillsBranchPoint(convert_branch_point(branch, context)?)
        }
        Old::Unrecognized(element) => return Err(MappingError::unhandled::<Old>(&element)),
    })
}

fn convert_guidance(guidance: v3::course::Guidance) -> Result<v4::course::Guidance, MappingError> {
    Ok(v4::course::Guidance {
        transition_name: guidance.transition_name,
        display_time: guidance.display_time,
        full_screen: flag(guidance.full_screen),
        choice: recognized(guidance.choice)?,
    })
}

fn convert_training_application(
    app: v3::course::TrainingApplication,
) -> Result<v4::course::TrainingApplication, MappingError> {
    let interop = app
        .interops
        .interop
        .into_iter()
        .map(|interop| {
            Ok(v4::course::Interop {
                interop_impl: interop.interop_impl,
                interop_inputs: v4::course::InteropInputs {
                    input: convert_interop_input(interop.interop_inputs.input)?,
                },
            })
        })
        .collect::<Result<Vec<_>, MappingError>>()?;

    Ok(v4::course::TrainingApplication {
        transition_name: app.transition_name,
        dkf_ref: app.dkf_ref,
        finished_when: app.finished_when.xml_value().to_string(),
        guidance: app.guidance.map(convert_guidance).transpose()?,
        options: app.options.map(|options| v4::course::TrainingApplicationOptions {
            disable_inst_inter_impl: flag(options.disable_inst_inter_impl),
            show_avatar_initially: options.show_avatar_initially,
        }),
        interops: v4::course::Interops { interop },
    })
}

fn convert_interop_input(
    input: v3::course::InteropInput,
) -> Result<v4::course::InteropInput, MappingError> {
    use v3::course::InteropInput as Old;
    use v4::course::InteropInput as New;

    Ok(match input {
        Old::Vbs2(inputs) => New::Vbs2(inputs),
        Old::Dis(inputs) => New::Dis(inputs),
        Old::PowerPoint(inputs) => New::PowerPoint(inputs),
        Old::Custom(inputs) => New::Custom(inputs),
        Old::Unrecognized(element) => return Err(MappingError::unhandled::<Old>(&element)),
    })
}

fn convert_media_list(
    list: v3::course::LessonMaterialList,
) -> Result<v4::course::LessonMaterialList, MappingError> {
    use v3::course::MediaTypeProperties as Old;
    use v4::course::MediaTypeProperties as New;

    let media = list
        .media
        .into_iter()
        .map(|media| {
            let properties = match media.properties {
                Old::Pdf(properties) => New::Pdf(properties),
                Old::Webpage(properties) => New::Webpage(properties),
                Old::YoutubeVideo(video) => {
                    New::YoutubeVideo(v4::course::YoutubeVideoProperties {
                        allow_full_screen: flag(video.allow_full_screen),
                        size: video.size,
                    })
                }
                Old::Image(properties) => New::Image(properties),
                Old::Unrecognized(element) => {
                    return Err(MappingError::unhandled::<Old>(&element))
                }
            };
            Ok(v4::course::Media {
                name: media.name,
                uri: media.uri,
                properties,
            })
        })
        .collect::<Result<Vec<_>, MappingError>>()?;
    Ok(v4::course::LessonMaterialList { media })
}

fn convert_branch_point(
    branch: v3::course::MerrillsBranchPoint,
    context: &mut ConversionContext,
) -> Result<v4::course::MerrillsBranchPoint, MappingError> {
    use v3::course::Quadrant as Old;
    use v4::course::Quadrant as New;

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

    Ok(v4::course::MerrillsBranchPoint {
        transition_name: branch.transition_name,
        concepts: branch.concepts,
        quadrants: v4::course::Quadrants { content },
    })
}

fn convert_scenario(
    scenario: v3::dkf::Scenario,
    context: &mut ConversionContext,
) -> Result<v4::dkf::Scenario, MappingError> {
    Ok(v4::dkf::Scenario {
        version: scenario.version,
        name: scenario.name,
        description: scenario.description,
        learner_id: scenario.learner_id,
        resources: convert_resources(scenario.resources)?,
        assessment: scenario
            .assessment
            .map(|assessment| convert_assessment(assessment, context))
            .transpose()?,
        actions: scenario.actions,
    })
}

fn convert_resources(resources: v3::dkf::Resources) -> Result<v4::dkf::Resources, MappingError> {
    let available_learner_actions = match resources.available_learner_actions {
        Some(actions) => Some(v4::dkf::AvailableLearnerActions {
            learner_actions_files: actions.learner_actions_files,
            learner_actions_list: actions
                .learner_actions_list
                .map(convert_learner_actions)
                .transpose()?,
        }),
        None => None,
    };
    Ok(v4::dkf::Resources {
        survey_context: resources.survey_context,
        available_learner_actions,
    })
}

fn convert_learner_actions(
    list: v3::dkf::LearnerActionsList,
) -> Result<v4::dkf::LearnerActionsList, MappingError> {
    let learner_action = list
        .learner_action
        .into_iter()
        .map(|action| {
            let action_type = v4::dkf::LearnerActionType::from_legacy_name(&action.action_type)
                .ok_or_else(|| MappingError::UnmappedEnumValue {
                    field: "learner action type",
                    value: action.action_type.clone(),
                })?;
            Ok(v4::dkf::LearnerAction {
                display_name: action.display_name,
                action_type,
            })
        })
        .collect::<Result<Vec<_>, MappingError>>()?;
    Ok(v4::dkf::LearnerActionsList { learner_action })
}

fn convert_assessment(
    assessment: v3::dkf::Assessment,
    context: &mut ConversionContext,
) -> Result<v4::dkf::Assessment, MappingError> {
    Ok(v4::dkf::Assessment {
        objects: assessment.objects,
        tasks: v4::dkf::Tasks {
            task: map_all(assessment.tasks.task, context, convert_task)?,
        },
    })
}

fn convert_task(
    task: v3::dkf::Task,
    context: &mut ConversionContext,
) -> Result<v4::dkf::Task, MappingError> {
    Ok(v4::dkf::Task {
        name: task.name,
        node_id: task.node_id,
        start_triggers: task.start_triggers,
        end_triggers: task.end_triggers,
        concepts: task
            .concepts
            .map(|concepts| convert_concepts(concepts, context))
            .transpose()?,
        assessments: task.assessments,
    })
}

fn convert_concepts(
    concepts: v3::dkf::Concepts,
    context: &mut ConversionContext,
) -> Result<v4::dkf::Concepts, MappingError> {
    Ok(v4::dkf::Concepts {
        concept: map_all(concepts.concept, context, convert_concept)?,
    })
}

fn convert_concept(
    concept: v3::dkf::Concept,
    context: &mut ConversionContext,
) -> Result<v4::dkf::Concept, MappingError> {
    use v3::dkf::ConditionsOrConcepts as Old;
    use v4::dkf::ConditionsOrConcepts as New;

    let children = match concept.children {
        Old::Conditions(conditions) => New::Conditions(v4::dkf::Conditions {
            condition: conditions
                .condition
                .into_iter()
                .map(convert_condition)
                .collect::<Result<_, _>>()?,
        }),
        Old::Concepts(concepts) => New::Concepts(convert_concepts(concepts, context)?),
        Old::Unrecognized(element) => return Err(MappingError::unhandled::<Old>(&element)),
    };
    Ok(v4::dkf::Concept {
        name: concept.name,
        node_id: concept.node_id,
        assessments: concept.assessments,
        children,
    })
}

fn convert_condition(condition: v3::dkf::Condition) -> Result<v4::dkf::Condition, MappingError> {
    Ok(v4::dkf::Condition {
        condition_impl: condition.condition_impl,
        default: condition.default,
        input: condition
            .input
            .map(|input| convert_input_type(input.kind).map(|kind| v4::dkf::Input { kind }))
            .transpose()?,
        scoring: condition.scoring,
    })
}

fn convert_input_type(input: v3::dkf::InputType) -> Result<v4::dkf::InputType, MappingError> {
    use v3::dkf::InputType as Old;
    use v4::dkf::InputType as New;

    Ok(match input {
        Old::ApplicationCompleted(condition) => New::ApplicationCompleted(condition),
        Old::AvoidLocation(condition) => New::AvoidLocation(condition),
        Old::CheckpointPace(condition) => New::CheckpointPace(condition),
        Old::CheckpointProgress(condition) => New::CheckpointProgress(condition),
        Old::CorridorBoundary(condition) => New::CorridorBoundary(condition),
        Old::CorridorPosture(condition) => New::CorridorPosture(condition),
        Old::EliminateHostiles(condition) => New::EliminateHostiles(condition),
        Old::EnterArea(condition) => New::EnterArea(condition),
        Old::Generic(condition) => New::Generic(condition),
        Old::Simile(condition) => New::Simile(condition),
        Old::Unrecognized(element) => return Err(MappingError::unhandled::<Old>(&element)),
    })
}

fn convert_learner_config(
    config: v3::learner::LearnerConfiguration,
) -> v4::learner::LearnerConfiguration {
    let input = config
        .inputs
        .input
        .into_iter()
        .map(|input| v4::learner::Input {
            classifier: input.classifier,
            predictor: input.predictor,
            producers: input.producers.map(|producers| v4::learner::Producers {
                producer: producers
                    .producer
                    .into_iter()
                    .map(|producer| v4::learner::Producer {
                        sensor_type: producer.sensor_type.xml_value().to_string(),
                    })
                    .collect(),
            }),
            translator: input.translator,
        })
        .collect();

    v4::learner::LearnerConfiguration {
        version: config.version,
        inputs: v4::learner::Inputs { input },
    }
}

fn convert_pedagogy_config(emap: v3::ped::Emap) -> v4::ped::Em2ap {
    v4::ped::Em2ap {
        version: emap.version,
        example: emap.example,
        practice: emap.practice,
        recall: emap.recall,
        rule: emap.rule,
    }
}
