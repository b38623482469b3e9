use crate::converters::{map_all, recognized, ConversionContext, MappingError, SchemaConverter};
use crate::schema::{v4, v5, v6, SchemaTree};

pub const QUADRANT_SPECIFIC_ISSUE: &str = "Quadrant Specific Element";

const RETIRED_VBS_INTEROP: &str = "gateway.interop.vbs2plugin.VBS2PluginInterface";
const VBS_INTEROP: &str = "gateway.interop.vbsplugin.VBSPluginInterface";

const DEFAULT_GUIDANCE_NAME: &str = "Guidance";
const DEFAULT_TRAINING_APP_NAME: &str = "Training Application";

/// Also serves documents stamped 5.1, which share the 5.0 tree.
#[derive(Debug, Default, Clone, Copy)]
pub struct V5ToV6Converter;

impl SchemaConverter for V5ToV6Converter {
    fn name(&self) -> &'static str {
        "v5_to_v6"
    }

    fn convert(
        &self,
        tree: SchemaTree,
        context: &mut ConversionContext,
    ) -> Result<SchemaTree, MappingError> {
        let document = match tree {
            SchemaTree::V5(document) => document,
            other => return Err(MappingError::wrong_tree(self, &other)),
        };
        let converted = match document {
            v5::Document::Course(course) => v6::Document::Course(convert_course(course, context)?),
            v5::Document::Scenario(scenario) => v6::Document::Scenario(recognized(scenario)?),
            v5::Document::LearnerConfig(config) => v6::Document::LearnerConfig(recognized(config)?),
            v5::Document::PedagogyConfig(config) => {
                v6::Document::PedagogyConfig(convert_pedagogy_config(config, context))
            }
            v5::Document::Metadata(metadata) => {
                v6::Document::Metadata(convert_metadata(metadata, context))
            }
            v5::Document::TrainingAppRef(wrapper) => {
                v6::Document::TrainingAppRef(v6::training_app::TrainingApplicationWrapper {
                    version: wrapper.version,
                    description: wrapper.description,
                    training_application: convert_training_application(
                        wrapper.training_application,
                    )?,
                })
            }
        };
        Ok(SchemaTree::V6(converted))
    }
}

fn convert_course(
    course: v4::course::Course,
    context: &mut ConversionContext,
) -> Result<v6::course::Course, MappingError> {
    Ok(v6::course::Course {
        version: course.version,
        name: course.name,
        description: course.description,
        survey_context: course.survey_context,
        exclude: course.exclude,
        transitions: convert_transitions(course.transitions, context)?,
    })
}

fn convert_transitions(
    transitions: v4::course::Transitions,
    context: &mut ConversionContext,
) -> Result<v6::course::Transitions, MappingError> {
    Ok(v6::course::Transitions {
        transition: map_all(transitions.transition, context, convert_transition)?,
    })
}

fn convert_transition(
    transition: v4::course::Transition,
    context: &mut ConversionContext,
) -> Result<v6::course::Transition, MappingError> {
    use v4::course::Transition as Old;
    use v6::course::Transition as New;

    Ok(match transition {
        Old::Guidance(guidance) => New::Guidance(convert_guidance(guidance, None)?),
        Old::PresentSurvey(survey) => New::PresentSurvey(recognized(survey)?),
        Old::Aar(aar) => New::Aar(aar),
        Old::TrainingApplication(app) => {
            New::TrainingApplication(convert_training_application(app)?)
        }
        Old::LessonMaterial(material) => New::LessonMaterial(recognized(material)?),
        Old::MerrillsBranchPoint(branch) => {
            New::MerrillsBranchPoint(convert_branch_point(branch, context)?)
        }
        Old::Unrecognized(element) => return Err(MappingError::unhandled::<Old>(&element)),
    })
}

/// `owner` is the name of the training application embedding the guidance, if any.
fn convert_guidance(
    guidance: v4::course::Guidance,
    owner: Option<&str>,
) -> Result<v6::course::Guidance, MappingError> {
    let transition_name = match guidance.transition_name {
        Some(name) => name,
        None => match owner {
            Some(owner) => format!("{owner} - {DEFAULT_GUIDANCE_NAME}"),
            None => DEFAULT_GUIDANCE_NAME.to_string(),
        },
    };
    Ok(v6::course::Guidance {
        transition_name,
        display_time: guidance.display_time,
        full_screen: guidance.full_screen,
        choice: recognized(guidance.choice)?,
    })
}

fn convert_training_application(
    app: v4::course::TrainingApplication,
) -> Result<v6::course::TrainingApplication, MappingError> {
    let owner = app
        .transition_name
        .clone()
        .unwrap_or_else(|| DEFAULT_TRAINING_APP_NAME.to_string());
    let guidance = app
        .guidance
        .map(|guidance| convert_guidance(guidance, Some(&owner)))
        .transpose()?;
    let interop = app
        .interops
        .interop
        .into_iter()
        .map(convert_interop)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(v6::course::TrainingApplication {
        transition_name: app.transition_name,
        dkf_ref: app.dkf_ref,
        finished_when: app.finished_when,
        guidance,
        options: app.options,
        interops: v6::course::Interops { interop },
    })
}

fn convert_interop(interop: v4::course::Interop) -> Result<v6::course::Interop, MappingError> {
    use v4::course::InteropInput as Old;
    use v6::course::InteropInput as New;

    let input = match interop.interop_inputs.input {
        Old::Vbs2(inputs) => New::Vbs(v6::course::ScenarioFileInteropInputs {
            load_args: inputs.load_args,
        }),
        Old::Dis(inputs) => New::Dis(inputs),
        Old::PowerPoint(inputs) => New::PowerPoint(inputs),
        Old::Custom(inputs) => New::Custom(inputs),
        Old::Tc3(inputs) => New::Tc3(inputs),
        Old::Scatt(inputs) => New::Scatt(inputs),
        Old::Unrecognized(element) => return Err(MappingError::unhandled::<Old>(&element)),
    };
    let interop_impl = if interop.interop_impl == RETIRED_VBS_INTEROP {
        VBS_INTEROP.to_string()
    } else {
        interop.interop_impl
    };
    Ok(v6::course::Interop {
        interop_impl,
        interop_inputs: v6::course::InteropInputs { input },
    })
}

fn convert_branch_point(
    branch: v4::course::MerrillsBranchPoint,
    context: &mut ConversionContext,
) -> Result<v6::course::MerrillsBranchPoint, MappingError> {
    use v4::course::Quadrant as Old;
    use v6::course::Quadrant as New;

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
    Ok(v6::course::MerrillsBranchPoint {
        transition_name: branch.transition_name,
        concepts: branch.concepts,
        quadrants: v6::course::Quadrants { content },
    })
}

fn convert_pedagogy_config(
    config: v4::ped::Em2ap,
    context: &mut ConversionContext,
) -> v6::ped::Em2ap {
    let mut quadrant = |quadrant: v4::ped::QuadrantAttributes| v6::ped::QuadrantAttributes {
        attributes: v6::ped::Attributes {
            attribute: quadrant
                .attributes
                .attribute
                .into_iter()
                .map(|attribute| v6::ped::Attribute {
                    attribute_type: attribute.attribute_type,
                    value: attribute.value,
                    metadata_attributes: v6::ped::MetadataAttributes {
                        metadata_attribute: attribute
                            .metadata_attributes
                            .metadata_attribute
                            .into_iter()
                            .map(|metadata| {
                                if metadata.is_quadrant_specific.is_some() {
                                    context.add_issue(QUADRANT_SPECIFIC_ISSUE);
                                }
                                v6::ped::MetadataAttribute {
                                    value: metadata.value,
                                }
                            })
                            .collect(),
                    },
                })
                .collect(),
        },
    };

    v6::ped::Em2ap {
        version: config.version,
        example: quadrant(config.example),
        practice: quadrant(config.practice),
        recall: quadrant(config.recall),
        rule: quadrant(config.rule),
    }
}

fn convert_metadata(
    metadata: v5::metadata::Metadata,
    context: &mut ConversionContext,
) -> v6::metadata::Metadata {
    let concept = metadata
        .concepts
        .concept
        .into_iter()
        .map(|concept| v6::metadata::Concept {
            name: concept.name,
            attributes: concept.attributes.map(|attributes| v6::metadata::Attributes {
                attribute: attributes
                    .attribute
                    .into_iter()
                    .map(|attribute| {
                        if attribute.is_quadrant_specific.is_some() {
                            context.add_issue(QUADRANT_SPECIFIC_ISSUE);
                        }
                        v6::metadata::Attribute {
                            value: attribute.value,
                        }
                    })
                    .collect(),
            }),
        })
        .collect();

    v6::metadata::Metadata {
        version: metadata.version,
        merrill_quadrant: metadata.merrill_quadrant,
        simple_ref: metadata.simple_ref,
        training_app_ref: metadata.training_app_ref,
        url: None,
        lesson_material_ref: None,
        concepts: v6::metadata::Concepts { concept },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::schema::common::UnrecognizedElement;

    fn convert(document: v5::Document, context: &mut ConversionContext) -> v6::Document {
        match V5ToV6Converter.convert(SchemaTree::V5(document), context).unwrap() {
            SchemaTree::V6(document) => document,
            other => panic!("expected a 6.0 tree, got {:?}", other.generation()),
        }
    }

    fn training_application(course: &v6::course::Course) -> &v6::course::TrainingApplication {
        course
            .transitions
            .transition
            .iter()
            .find_map(|transition| match transition {
                v6::course::Transition::TrainingApplication(app) => Some(app),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_guidance_names_are_generated() {
        let mut context = ConversionContext::new("a.course.xml");
        let v6::Document::Course(course) =
            convert(v5::Document::Course(fixtures::v4_course()), &mut context)
        else {
            panic!("expected a course");
        };

        let v6::course::Transition::Guidance(guidance) = &course.transitions.transition[0] else {
            panic!("expected guidance first");
        };
        assert_eq!(guidance.transition_name, "Guidance");

        let app = training_application(&course);
        assert_eq!(
            app.guidance.as_ref().unwrap().transition_name,
            "Convoy Training - Guidance"
        );
        assert!(context.issues().is_empty());
    }

    #[test]
    fn test_unnamed_training_application_guidance() {
        let mut course = fixtures::v4_course();
        for transition in &mut course.transitions.transition {
            if let v4::course::Transition::TrainingApplication(app) = transition {
                app.transition_name = None;
            }
        }
        let mut context = ConversionContext::new("a.course.xml");
        let v6::Document::Course(course) = convert(v5::Document::Course(course), &mut context)
        else {
            panic!("expected a course");
        };
        let app = training_application(&course);
        assert_eq!(
            app.guidance.as_ref().unwrap().transition_name,
            "Training Application - Guidance"
        );
    }

    #[test]
    fn test_vbs2_interop_is_renamed() {
        let mut context = ConversionContext::new("a.course.xml");
        let v6::Document::Course(course) =
            convert(v5::Document::Course(fixtures::v4_course()), &mut context)
        else {
            panic!("expected a course");
        };
        let interop = &training_application(&course).interops.interop[0];
        assert_eq!(interop.interop_impl, VBS_INTEROP);
        assert!(matches!(
            interop.interop_inputs.input,
            v6::course::InteropInput::Vbs(_)
        ));
    }

    #[test]
    fn test_training_app_ref_follows_course() {
        let app = fixtures::v4_course()
            .transitions
            .transition
            .into_iter()
            .find_map(|transition| match transition {
                v4::course::Transition::TrainingApplication(app) => Some(app),
                _ => None,
            })
            .unwrap();
        let wrapper = v5::training_app::TrainingApplicationWrapper {
            version: Some("5.0".to_string()),
            description: None,
            training_application: app,
        };

        let mut context = ConversionContext::new("convoy.trainingapp.xml");
        let v6::Document::TrainingAppRef(wrapper) =
            convert(v5::Document::TrainingAppRef(wrapper), &mut context)
        else {
            panic!("expected a training application reference");
        };
        assert_eq!(wrapper.version.as_deref(), Some("5.0"));
        assert_eq!(
            wrapper.training_application.interops.interop[0].interop_impl,
            VBS_INTEROP
        );
    }

    #[test]
    fn test_quadrant_specific_flags_are_recorded() {
        let mut context = ConversionContext::new("a.metadata.xml");
        let v6::Document::Metadata(metadata) =
            convert(v5::Document::Metadata(fixtures::v5_metadata()), &mut context)
        else {
            panic!("expected metadata");
        };
        assert_eq!(metadata.url, None);
        assert_eq!(metadata.lesson_material_ref, None);
        assert_eq!(
            context.issues(),
            [QUADRANT_SPECIFIC_ISSUE.to_string(), QUADRANT_SPECIFIC_ISSUE.to_string()]
        );

        let mut context = ConversionContext::new("ped.pedagogicalconfig.xml");
        let pedagogy = v4::ped::Em2ap {
            version: None,
            example: fixtures::v3_quadrant(&[Some(true), None]),
            practice: fixtures::v3_quadrant(&[]),
            recall: fixtures::v3_quadrant(&[Some(false)]),
            rule: fixtures::v3_quadrant(&[None]),
        };
        let v6::Document::PedagogyConfig(pedagogy) =
            convert(v5::Document::PedagogyConfig(pedagogy), &mut context)
        else {
            panic!("expected a pedagogy configuration");
        };
        assert_eq!(pedagogy.example.attributes.attribute.len(), 1);
        assert_eq!(context.issues().len(), 2);
    }

    fn transition_kind(transition: &v6::course::Transition) -> &'static str {
        match transition {
            v6::course::Transition::Guidance(_) => "guidance",
            v6::course::Transition::PresentSurvey(_) => "survey",
            v6::course::Transition::Aar(_) => "aar",
            v6::course::Transition::TrainingApplication(_) => "training application",
            v6::course::Transition::LessonMaterial(_) => "lesson material",
            v6::course::Transition::MerrillsBranchPoint(_) => "branch point",
            v6::course::Transition::Unrecognized(_) => "unrecognized",
        }
    }

    #[test]
    fn test_transition_order_is_kept() {
        let mut course = fixtures::v4_course();
        course.transitions.transition.insert(
            1,
            v4::course::Transition::Aar(v4::course::Aar {
                transition_name: None,
                full_screen: None,
            }),
        );
        course
            .transitions
            .transition
            .push(v4::course::Transition::LessonMaterial(v4::course::LessonMaterial {
                transition_name: Some("Reading".to_string()),
                list: None,
                files: None,
            }));
        course
            .transitions
            .transition
            .push(v4::course::Transition::Guidance(fixtures::v4_guidance(None)));

        let mut context = ConversionContext::new("a.course.xml");
        let v6::Document::Course(course) = convert(v5::Document::Course(course), &mut context)
        else {
            panic!("expected a course");
        };
        let kinds: Vec<&str> = course.transitions.transition.iter().map(transition_kind).collect();
        assert_eq!(
            kinds,
            vec!["guidance", "aar", "training application", "lesson material", "guidance"]
        );
    }

    #[test]
    fn test_moved_lesson_material_is_checked() {
        let mut course = fixtures::v4_course();
        course
            .transitions
            .transition
            .push(v4::course::Transition::LessonMaterial(v4::course::LessonMaterial {
                transition_name: None,
                list: Some(v4::course::LessonMaterialList {
                    media: vec![v4::course::Media {
                        name: "Briefing".to_string(),
                        uri: "briefing.holo".to_string(),
                        properties: v4::course::MediaTypeProperties::Unrecognized(
                            UnrecognizedElement::new("HologramProperties"),
                        ),
                    }],
                }),
                files: None,
            }));
        let mut context = ConversionContext::new("a.course.xml");
        let err = V5ToV6Converter
            .convert(SchemaTree::V5(v5::Document::Course(course)), &mut context)
            .unwrap_err();
        assert_eq!(
            err,
            MappingError::UnhandledVariant {
                choice: "media properties",
                element: "HologramProperties".to_string(),
            }
        );
    }

    #[test]
    fn test_pass_through_scenario_is_checked() {
        let scenario = fixtures::v5_route_scenario(vec![v5::dkf::InputType::Unrecognized(
            UnrecognizedElement::new("SonarCondition"),
        )]);
        let mut context = ConversionContext::new("route.dkf.xml");
        let err = V5ToV6Converter
            .convert(SchemaTree::V5(v5::Document::Scenario(scenario)), &mut context)
            .unwrap_err();
        assert!(matches!(
            err,
            MappingError::UnhandledVariant { choice: "condition input", .. }
        ));
    }
}
