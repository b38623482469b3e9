//! Typed document trees, one module per schema generation.
//!
//! A generation module only defines the types whose shape changed at that
//! version and re-exports everything else from the generation that last
//! changed it. `SchemaTree` wraps one document of one kind at one generation.

use thiserror::Error;

use crate::document_kind::DocumentKind;
use crate::schema_version::SchemaVersion;

/// Declares the `Document` enum of a generation: one variant per kind that
/// exists at that generation, named after its [`DocumentKind`].
macro_rules! document_enum {
    ($($variant:ident => $ty:ty),+ $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum Document {
            $($variant($ty),)+
        }

        impl Document {
            pub fn kind(&self) -> $crate::document_kind::DocumentKind {
                match self {
                    $(Document::$variant(_) => $crate::document_kind::DocumentKind::$variant,)+
                }
            }

            /// Deserializes `xml` as the given kind. `Ok(None)` means the kind
            /// has no schema at this generation.
            #[allow(unreachable_patterns)]
            pub(crate) fn from_xml(
                kind: $crate::document_kind::DocumentKind,
                xml: &str,
            ) -> Result<Option<Self>, ::quick_xml::de::DeError> {
                match kind {
                    $($crate::document_kind::DocumentKind::$variant => {
                        Ok(Some(Document::$variant(::quick_xml::de::from_str::<$ty>(xml)?)))
                    })+
                    _ => Ok(None),
                }
            }

            pub(crate) fn to_xml(&self, root: &str) -> Result<String, ::quick_xml::de::DeError> {
                match self {
                    $(Document::$variant(doc) => ::quick_xml::se::to_string_with_root(root, doc),)+
                }
            }

            pub fn version(&self) -> Option<&str> {
                match self {
                    $(Document::$variant(doc) => doc.version.as_deref(),)+
                }
            }

            pub(crate) fn set_version(&mut self, version: &str) {
                match self {
                    $(Document::$variant(doc) => doc.version = Some(version.to_string()),)+
                }
            }
        }

        impl $crate::schema::common::Recognizable for Document {
            fn find_unrecognized(
                &self,
            ) -> Option<(&'static str, &$crate::schema::common::UnrecognizedElement)> {
                match self {
                    $(Document::$variant(doc) => {
                        $crate::schema::common::Recognizable::find_unrecognized(doc)
                    })+
                }
            }
        }
    };
}

/// Implements [`common::Choice`] and [`common::Recognizable`] for enums with
/// an `Unrecognized` variant. Variants named in braces hold further choices.
macro_rules! choice {
    ($($ty:ty => $element:literal $({ $($nested:ident),+ $(,)? })?),+ $(,)?) => {
        $(impl $crate::schema::common::Choice for $ty {
            const ELEMENT: &'static str = $element;

            fn unrecognized(&self) -> Option<&$crate::schema::common::UnrecognizedElement> {
                match self {
                    Self::Unrecognized(element) => Some(element),
                    _ => None,
                }
            }
        }

        impl $crate::schema::common::Recognizable for $ty {
            fn find_unrecognized(
                &self,
            ) -> Option<(&'static str, &$crate::schema::common::UnrecognizedElement)> {
                match self {
                    Self::Unrecognized(element) => Some(($element, element)),
                    $($(Self::$nested(inner) => {
                        $crate::schema::common::Recognizable::find_unrecognized(inner)
                    })+)?
                    #[allow(unreachable_patterns)]
                    _ => None,
                }
            }
        })+
    };
}

/// Implements [`common::Recognizable`] for structs by walking the named fields
/// in document order. Empty braces mark a type with no choices inside.
macro_rules! recognizable {
    ($($ty:ty { $($field:ident),* $(,)? }),+ $(,)?) => {
        $(impl $crate::schema::common::Recognizable for $ty {
            fn find_unrecognized(
                &self,
            ) -> Option<(&'static str, &$crate::schema::common::UnrecognizedElement)> {
                None $(.or_else(|| {
                    $crate::schema::common::Recognizable::find_unrecognized(&self.$field)
                }))*
            }
        })+
    };
}

pub mod common;
pub mod v2;
pub mod v3;
pub mod v4;
pub mod v5;
pub mod v6;
pub mod v7;
pub mod v8;
pub mod v9;
pub mod v10;
pub mod v11;

/// Generations that have their own tree module, oldest first.
const TREE_GENERATIONS: [SchemaVersion; 10] = [
    SchemaVersion::new(2, 0, 0),
    SchemaVersion::new(3, 0, 0),
    SchemaVersion::new(4, 0, 0),
    SchemaVersion::new(5, 0, 0),
    SchemaVersion::new(6, 0, 0),
    SchemaVersion::new(7, 0, 0),
    SchemaVersion::new(8, 0, 0),
    SchemaVersion::new(9, 0, 0),
    SchemaVersion::new(10, 0, 0),
    SchemaVersion::new(11, 0, 0),
];

#[derive(Debug, Error)]
pub enum TreeError {
    #[error("No {kind} schema exists at version {version}")]
    KindNotAvailable {
        kind: DocumentKind,
        version: SchemaVersion,
    },

    #[error("No document tree is defined for version {0}")]
    UnknownGeneration(SchemaVersion),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::de::DeError),
}

/// One document at one schema generation.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaTree {
    V2(v2::Document),
    V3(v3::Document),
    V4(v4::Document),
    V5(v5::Document),
    V6(v6::Document),
    V7(v7::Document),
    V8(v8::Document),
    V9(v9::Document),
    V10(v10::Document),
    V11(v11::Document),
}

macro_rules! each_generation {
    ($tree:expr, $doc:ident => $body:expr) => {
        match $tree {
            SchemaTree::V2($doc) => $body,
            SchemaTree::V3($doc) => $body,
            SchemaTree::V4($doc) => $body,
            SchemaTree::V5($doc) => $body,
            SchemaTree::V6($doc) => $body,
            SchemaTree::V7($doc) => $body,
            SchemaTree::V8($doc) => $body,
            SchemaTree::V9($doc) => $body,
            SchemaTree::V10($doc) => $body,
            SchemaTree::V11($doc) => $body,
        }
    };
}

impl SchemaTree {
    /// The tree generation that describes documents stamped `version`.
    /// Versions without a schema change share their predecessor's tree.
    pub fn generation_for(version: SchemaVersion) -> Option<SchemaVersion> {
        let generation = version.generation();
        if generation < SchemaVersion::minimum() || generation > SchemaVersion::current() {
            return None;
        }
        TREE_GENERATIONS
            .iter()
            .rev()
            .find(|tree| **tree <= generation)
            .copied()
    }

    /// Deserializes `xml` into the tree of `kind` at the generation describing `version`.
    pub fn parse(version: SchemaVersion, kind: DocumentKind, xml: &str) -> Result<Self, TreeError> {
        let generation =
            Self::generation_for(version).ok_or(TreeError::UnknownGeneration(version))?;
        let missing = || TreeError::KindNotAvailable { kind, version };
        let tree = match (generation.major, generation.minor) {
            (2, 0) => v2::Document::from_xml(kind, xml)?.map(SchemaTree::V2),
            (3, 0) => v3::Document::from_xml(kind, xml)?.map(SchemaTree::V3),
            (4, 0) => v4::Document::from_xml(kind, xml)?.map(SchemaTree::V4),
            (5, 0) => v5::Document::from_xml(kind, xml)?.map(SchemaTree::V5),
            (6, 0) => v6::Document::from_xml(kind, xml)?.map(SchemaTree::V6),
            (7, 0) => v7::Document::from_xml(kind, xml)?.map(SchemaTree::V7),
            (8, 0) => v8::Document::from_xml(kind, xml)?.map(SchemaTree::V8),
            (9, 0) => v9::Document::from_xml(kind, xml)?.map(SchemaTree::V9),
            (10, 0) => v10::Document::from_xml(kind, xml)?.map(SchemaTree::V10),
            (11, 0) => v11::Document::from_xml(kind, xml)?.map(SchemaTree::V11),
            _ => return Err(TreeError::UnknownGeneration(version)),
        };
        tree.ok_or_else(missing)
    }

    pub fn generation(&self) -> SchemaVersion {
        match self {
            SchemaTree::V2(_) => TREE_GENERATIONS[0],
            SchemaTree::V3(_) => TREE_GENERATIONS[1],
            SchemaTree::V4(_) => TREE_GENERATIONS[2],
            SchemaTree::V5(_) => TREE_GENERATIONS[3],
            SchemaTree::V6(_) => TREE_GENERATIONS[4],
            SchemaTree::V7(_) => TREE_GENERATIONS[5],
            SchemaTree::V8(_) => TREE_GENERATIONS[6],
            SchemaTree::V9(_) => TREE_GENERATIONS[7],
            SchemaTree::V10(_) => TREE_GENERATIONS[8],
            SchemaTree::V11(_) => TREE_GENERATIONS[9],
        }
    }

    pub fn kind(&self) -> DocumentKind {
        each_generation!(self, doc => doc.kind())
    }

    /// The root `version` attribute as it currently stands in the tree.
    pub fn version_attribute(&self) -> Option<&str> {
        each_generation!(self, doc => doc.version())
    }

    pub(crate) fn stamp(&mut self, version: &str) {
        each_generation!(self, doc => doc.set_version(version))
    }

    pub fn root_element(&self) -> &'static str {
        self.kind().root_element(self.generation())
    }

    /// Serializes the tree under its generation's root element.
    pub fn to_xml(&self) -> Result<String, TreeError> {
        let root = self.root_element();
        Ok(each_generation!(self, doc => doc.to_xml(root))?)
    }
}

impl common::Recognizable for SchemaTree {
    fn find_unrecognized(&self) -> Option<(&'static str, &common::UnrecognizedElement)> {
        each_generation!(self, doc => common::Recognizable::find_unrecognized(doc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const V2_COURSE: &str = r#"<Course version="2.0" name="Intro">
        <transitions>
            <Guidance><message>Welcome aboard</message></Guidance>
            <AAR/>
        </transitions>
    </Course>"#;

    #[test]
    fn test_generation_for_versions_without_changes() {
        let v51 = SchemaVersion::new(5, 1, 0);
        assert_eq!(SchemaTree::generation_for(v51), Some(SchemaVersion::new(5, 0, 0)));
        assert_eq!(
            SchemaTree::generation_for(SchemaVersion::new(9, 0, 3)),
            Some(SchemaVersion::new(9, 0, 0))
        );
        assert_eq!(SchemaTree::generation_for(SchemaVersion::new(1, 9, 0)), None);
        assert_eq!(SchemaTree::generation_for(SchemaVersion::new(12, 0, 0)), None);
    }

    #[test]
    fn test_parse_v2_course() {
        let tree = SchemaTree::parse(SchemaVersion::new(2, 0, 0), DocumentKind::Course, V2_COURSE)
            .unwrap();
        assert_eq!(tree.kind(), DocumentKind::Course);
        assert_eq!(tree.generation(), SchemaVersion::new(2, 0, 0));
        assert_eq!(tree.version_attribute(), Some("2.0"));

        let SchemaTree::V2(v2::Document::Course(course)) = tree else {
            panic!("expected a 2.0 course");
        };
        assert_eq!(course.name, "Intro");
        assert_eq!(course.transitions.transition.len(), 2);
        assert!(matches!(
            &course.transitions.transition[0],
            v2::course::Transition::Guidance(g) if g.message == "Welcome aboard"
        ));
        assert!(matches!(course.transitions.transition[1], v2::course::Transition::Aar(_)));
    }

    #[test]
    fn test_parse_kind_missing_at_generation() {
        let err = SchemaTree::parse(
            SchemaVersion::new(3, 0, 0),
            DocumentKind::Metadata,
            "<Metadata/>",
        )
        .unwrap_err();
        assert!(matches!(err, TreeError::KindNotAvailable { kind: DocumentKind::Metadata, .. }));
    }

    #[test]
    fn test_find_unrecognized_reaches_nested_choices() {
        use crate::schema::common::{Recognizable, UnrecognizedElement};

        let tree = SchemaTree::parse(SchemaVersion::new(2, 0, 0), DocumentKind::Course, V2_COURSE)
            .unwrap();
        assert_eq!(tree.find_unrecognized(), None);

        let mut course = crate::fixtures::v2_course();
        let material = course
            .transitions
            .transition
            .iter_mut()
            .find_map(|transition| match transition {
                v2::course::Transition::LessonMaterial(material) => Some(material),
                _ => None,
            })
            .unwrap();
        material.list.as_mut().unwrap().media[0].properties =
            v2::course::MediaTypeProperties::Unrecognized(UnrecognizedElement::new(
                "HologramProperties",
            ));
        let tree = SchemaTree::V2(v2::Document::Course(course));
        let (choice, element) = tree.find_unrecognized().unwrap();
        assert_eq!(choice, "media properties");
        assert_eq!(element.element, "HologramProperties");
    }

    #[test]
    fn test_stamp_and_serialize() {
        let mut tree =
            SchemaTree::parse(SchemaVersion::new(2, 0, 0), DocumentKind::Course, V2_COURSE)
                .unwrap();
        tree.stamp("3.0");
        assert_eq!(tree.version_attribute(), Some("3.0"));

        let xml = tree.to_xml().unwrap();
        assert!(xml.starts_with("<Course"));
        assert!(xml.contains(r#"version="3.0""#));
        assert!(xml.contains("Welcome aboard"));
    }

    #[test]
    fn test_pedagogy_root_element_by_generation() {
        let xml = r#"<EMAP version="3.0">
            <Example><Attributes/></Example>
            <Practice><Attributes/></Practice>
            <Recall><Attributes/></Recall>
            <Rule><Attributes/></Rule>
        </EMAP>"#;
        let tree =
            SchemaTree::parse(SchemaVersion::new(3, 0, 0), DocumentKind::PedagogyConfig, xml)
                .unwrap();
        assert_eq!(tree.root_element(), "EMAP");
    }
}
