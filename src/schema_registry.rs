use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::converters::{
    SchemaConverter, V10ToV11Converter, V2ToV3Converter, V3ToV4Converter, V4ToV5Converter,
    V5ToV6Converter, V6ToV7Converter, V7ToV8Converter, V8ToV9Converter, V9ToV10Converter,
};
use crate::document_kind::{DocumentKind, SchemaDescriptor};
use crate::schema_version::SchemaVersion;

/// Registry of the per-version converters that make up the chain.
///
/// Each converter is registered under the version it reads. Lookups go
/// through [`SchemaVersion::generation`], so a patch component never matters.
#[derive(Debug, Default)]
pub struct ConverterRegistry {
    converters: HashMap<SchemaVersion, Arc<dyn SchemaConverter>>,
    names: HashMap<&'static str, SchemaVersion>,
    order: Vec<SchemaVersion>,
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("A converter is already registered for version {0}")]
    DuplicateVersion(SchemaVersion),

    #[error("Converter '{0}' is already registered under another version")]
    DuplicateName(&'static str),

    #[error("Cannot register a converter for unknown version {0}")]
    UnknownVersion(SchemaVersion),

    #[error("Cannot register a converter for the current version {0}")]
    CurrentVersion(SchemaVersion),

    #[error("Missing {kind} schema for version {version}: {}", .path.display())]
    MissingSchema {
        kind: DocumentKind,
        version: SchemaVersion,
        path: PathBuf,
    },
}

impl ConverterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the full chain from `2.0` to the current version.
    pub fn standard() -> Result<Self, RegistryError> {
        let steps: [(SchemaVersion, Arc<dyn SchemaConverter>); 9] = [
            (SchemaVersion::new(2, 0, 0), Arc::new(V2ToV3Converter)),
            (SchemaVersion::new(3, 0, 0), Arc::new(V3ToV4Converter)),
            (SchemaVersion::new(4, 0, 0), Arc::new(V4ToV5Converter)),
            (SchemaVersion::new(5, 0, 0), Arc::new(V5ToV6Converter)),
            (SchemaVersion::new(6, 0, 0), Arc::new(V6ToV7Converter)),
            (SchemaVersion::new(7, 0, 0), Arc::new(V7ToV8Converter)),
            (SchemaVersion::new(8, 0, 0), Arc::new(V8ToV9Converter)),
            (SchemaVersion::new(9, 0, 0), Arc::new(V9ToV10Converter)),
            (SchemaVersion::new(10, 0, 0), Arc::new(V10ToV11Converter)),
        ];

        let mut registry = Self::new();
        for (version, converter) in steps {
            registry.register(version, converter)?;
        }
        Ok(registry)
    }

    /// Builds the standard chain and checks that every converter can locate
    /// the schema of each kind it reads under `schema_root`.
    ///
    /// Any missing resource fails the whole construction.
    pub fn standard_with_schemas(schema_root: &Path) -> Result<Self, RegistryError> {
        let registry = Self::standard()?;
        registry.check_schema_resources(schema_root)?;
        Ok(registry)
    }

    /// Registers `converter` as the step that reads documents at `version`.
    pub fn register(
        &mut self,
        version: SchemaVersion,
        converter: Arc<dyn SchemaConverter>,
    ) -> Result<(), RegistryError> {
        let version = version.generation();
        if !version.is_known() {
            return Err(RegistryError::UnknownVersion(version));
        }
        if version.is_current() {
            return Err(RegistryError::CurrentVersion(version));
        }
        if self.converters.contains_key(&version) {
            return Err(RegistryError::DuplicateVersion(version));
        }
        if self.names.contains_key(converter.name()) {
            return Err(RegistryError::DuplicateName(converter.name()));
        }

        debug!(%version, converter = converter.name(), "Registering converter");
        self.names.insert(converter.name(), version);
        self.converters.insert(version, converter);
        self.order.push(version);
        self.order.sort();
        Ok(())
    }

    /// Forward lookup on the exact generation of `version`.
    pub fn get(&self, version: SchemaVersion) -> Option<Arc<dyn SchemaConverter>> {
        self.converters.get(&version.generation()).cloned()
    }

    /// Finds the converter for `version`, falling back to the nearest lower
    /// registered version when the exact generation has none.
    ///
    /// Returns `None` for the current version and for versions below every
    /// registered one.
    pub fn resolve(&self, version: SchemaVersion) -> Option<(SchemaVersion, Arc<dyn SchemaConverter>)> {
        let generation = version.generation();
        if generation >= SchemaVersion::current() {
            return None;
        }
        let resolved = self
            .order
            .iter()
            .rev()
            .find(|registered| **registered <= generation)
            .copied()?;
        if resolved != generation {
            warn!(
                requested = %version,
                resolved = %resolved,
                "No converter registered for version, using nearest lower version"
            );
        }
        let converter = self.converters.get(&resolved)?.clone();
        Some((resolved, converter))
    }

    /// Inverse lookup: the version `converter` was registered under.
    pub fn version_of(&self, converter: &dyn SchemaConverter) -> Option<SchemaVersion> {
        self.names.get(converter.name()).copied()
    }

    /// The next registered step after `version`, if any.
    pub fn next_after(&self, version: SchemaVersion) -> Option<(SchemaVersion, Arc<dyn SchemaConverter>)> {
        let generation = version.generation();
        let next = self
            .order
            .iter()
            .find(|registered| **registered > generation)
            .copied()?;
        let converter = self.converters.get(&next)?.clone();
        Some((next, converter))
    }

    /// Registered versions, oldest first.
    pub fn versions(&self) -> &[SchemaVersion] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn check_schema_resources(&self, schema_root: &Path) -> Result<(), RegistryError> {
        for version in &self.order {
            for kind in DocumentKind::ALL {
                let Some(descriptor) = SchemaDescriptor::new(kind, *version, schema_root) else {
                    continue;
                };
                if !descriptor.resource_path.is_file() {
                    return Err(RegistryError::MissingSchema {
                        kind,
                        version: *version,
                        path: descriptor.resource_path,
                    });
                }
            }
        }
        Ok(())
    }
}
