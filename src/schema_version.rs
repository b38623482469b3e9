use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// One generation of the authoring-tool document format.
///
/// Only `major.minor` identifies a generation. A patch component is kept for
/// display but ignored by [`SchemaVersion::generation`] and by every lookup
/// in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemaVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

/// Every version the format has shipped, oldest first.
pub const KNOWN_VERSIONS: [SchemaVersion; 11] = [
    SchemaVersion::new(2, 0, 0),
    SchemaVersion::new(3, 0, 0),
    SchemaVersion::new(4, 0, 0),
    SchemaVersion::new(5, 0, 0),
    SchemaVersion::new(5, 1, 0),
    SchemaVersion::new(6, 0, 0),
    SchemaVersion::new(7, 0, 0),
    SchemaVersion::new(8, 0, 0),
    SchemaVersion::new(9, 0, 0),
    SchemaVersion::new(10, 0, 0),
    SchemaVersion::new(11, 0, 0),
];

impl SchemaVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self { major, minor, patch }
    }

    /// The oldest version documents can still be converted from.
    pub const fn minimum() -> Self {
        KNOWN_VERSIONS[0]
    }

    /// The version every conversion chain ends at.
    pub const fn current() -> Self {
        KNOWN_VERSIONS[KNOWN_VERSIONS.len() - 1]
    }

    /// The same version with the patch component dropped.
    pub fn generation(&self) -> Self {
        Self::new(self.major, self.minor, 0)
    }

    pub fn is_current(&self) -> bool {
        self.generation() == Self::current()
    }

    pub fn is_known(&self) -> bool {
        KNOWN_VERSIONS.contains(&self.generation())
    }

    /// Next known version, or `None` at the current version and for
    /// versions outside the known list.
    pub fn successor(&self) -> Option<Self> {
        let generation = self.generation();
        let index = KNOWN_VERSIONS.iter().position(|v| *v == generation)?;
        KNOWN_VERSIONS.get(index + 1).copied()
    }

    /// Whether this version lies within `[minimum, current]`.
    pub fn is_supported(&self) -> bool {
        let generation = self.generation();
        generation >= Self::minimum() && generation <= Self::current()
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.patch == 0 {
            write!(f, "{}.{}", self.major, self.minor)
        } else {
            write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
        }
    }
}

fn version_pattern() -> Result<&'static Regex, SchemaVersionError> {
    static PATTERN: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^(\d+)\.(\d+)(?:\.(\d+))?$"))
        .as_ref()
        .map_err(|e| SchemaVersionError::Pattern(e.to_string()))
}

impl FromStr for SchemaVersion {
    type Err = SchemaVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let captures = version_pattern()?
            .captures(trimmed)
            .ok_or_else(|| SchemaVersionError::InvalidFormat(s.to_string()))?;

        let component = |index: usize| -> Result<u32, SchemaVersionError> {
            match captures.get(index) {
                Some(m) => m
                    .as_str()
                    .parse()
                    .map_err(|_| SchemaVersionError::InvalidFormat(s.to_string())),
                None => Ok(0),
            }
        };

        Ok(SchemaVersion::new(component(1)?, component(2)?, component(3)?))
    }
}

impl PartialOrd for SchemaVersion {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SchemaVersion {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
    }
}

#[derive(Debug, Error)]
pub enum SchemaVersionError {
    #[error("Invalid version format: {0}")]
    InvalidFormat(String),

    #[error("Version pattern failed to compile: {0}")]
    Pattern(String),
}
