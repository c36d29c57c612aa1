//! In-memory model of a `composer.json` file.
//!
//! The document keeps every key in its original order, including keys this
//! tool never touches, so a load/save cycle only changes what was edited.
//! The sections the tool mutates are exposed through typed accessors.

use crate::error::{Result, SwitchError};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub const MANIFEST_FILE_NAME: &str = "composer.json";

/// Version constraint telling Composer to take the package from a local source.
pub const DEV_CONSTRAINT: &str = "@dev";

pub const NAME_KEY: &str = "name";
pub const REQUIRE_KEY: &str = "require";
pub const REQUIRE_DEV_KEY: &str = "require-dev";
pub const REPOSITORIES_KEY: &str = "repositories";

const INDENT: &[u8] = b"    ";

/// State of a section after `ensure_*` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Section already had the expected shape.
    Present,
    /// Section was absent and has been created empty.
    Created,
    /// Section had the wrong shape and has been replaced by an empty one.
    Replaced,
}

/// A dependency section of the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequireSection {
    Require,
    RequireDev,
}

impl RequireSection {
    pub fn key(self) -> &'static str {
        match self {
            RequireSection::Require => REQUIRE_KEY,
            RequireSection::RequireDev => REQUIRE_DEV_KEY,
        }
    }
}

/// A `repositories` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceDescriptor {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

impl SourceDescriptor {
    pub const PATH_KIND: &'static str = "path";

    /// Descriptor for a local checkout at `url`.
    pub fn path(url: impl Into<String>) -> Self {
        Self {
            kind: Self::PATH_KIND.to_string(),
            url: url.into(),
        }
    }

    /// Returns true if a raw `repositories` entry is a path source for `url`.
    ///
    /// Entries of any other shape never match.
    pub fn matches_path(entry: &Value, url: &str) -> bool {
        entry.get("type").and_then(Value::as_str) == Some(Self::PATH_KIND)
            && entry.get("url").and_then(Value::as_str) == Some(url)
    }
}

/// A parsed `composer.json` document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: Map<String, Value>,
}

impl Manifest {
    /// Reads and parses the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        log::debug!("Loading manifest: {}", path.display());

        let content =
            fs::read_to_string(path).map_err(|e| SwitchError::invalid_manifest(path, e))?;
        content
            .parse()
            .map_err(|e: serde_json::Error| SwitchError::invalid_manifest(path, e))
    }

    /// Declared package name, if present and a string.
    pub fn name(&self) -> Option<&str> {
        self.entries.get(NAME_KEY).and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Dependency map of `section`, if present and an object.
    pub fn requirements(&self, section: RequireSection) -> Option<&Map<String, Value>> {
        self.entries.get(section.key()).and_then(Value::as_object)
    }

    /// Constraint recorded for `package` in `section`.
    pub fn constraint(&self, section: RequireSection, package: &str) -> Option<&str> {
        self.requirements(section)?
            .get(package)
            .and_then(Value::as_str)
    }

    pub fn contains_requirement(&self, section: RequireSection, package: &str) -> bool {
        self.requirements(section)
            .is_some_and(|deps| deps.contains_key(package))
    }

    /// Sets the constraint of `package` in `section`.
    ///
    /// Existing keys keep their position; new keys are appended. The
    /// section is created, or replaced if it is not an object.
    pub fn set_constraint(
        &mut self,
        section: RequireSection,
        package: &str,
        constraint: &str,
    ) -> Slot {
        let (slot, deps) = self.ensure_object(section.key());
        deps.insert(package.to_string(), Value::String(constraint.to_string()));
        slot
    }

    /// Raw `repositories` entries, if the section is a list.
    pub fn repositories(&self) -> Option<&Vec<Value>> {
        self.entries.get(REPOSITORIES_KEY).and_then(Value::as_array)
    }

    /// Returns the `repositories` list, creating or replacing it as needed.
    pub fn ensure_repositories(&mut self) -> (Slot, &mut Vec<Value>) {
        let slot = match self.entries.get(REPOSITORIES_KEY) {
            Some(Value::Array(_)) => Slot::Present,
            Some(_) => Slot::Replaced,
            None => Slot::Created,
        };

        let value = self
            .entries
            .entry(REPOSITORIES_KEY)
            .or_insert_with(|| Value::Array(Vec::new()));
        if slot == Slot::Replaced {
            *value = Value::Array(Vec::new());
        }

        match value {
            Value::Array(items) => (slot, items),
            _ => unreachable!("repositories was just set to a list"),
        }
    }

    fn ensure_object(&mut self, key: &str) -> (Slot, &mut Map<String, Value>) {
        let slot = match self.entries.get(key) {
            Some(Value::Object(_)) => Slot::Present,
            Some(_) => Slot::Replaced,
            None => Slot::Created,
        };

        let value = self
            .entries
            .entry(key)
            .or_insert_with(|| Value::Object(Map::new()));
        if slot == Slot::Replaced {
            *value = Value::Object(Map::new());
        }

        match value {
            Value::Object(map) => (slot, map),
            _ => unreachable!("{} was just set to an object", key),
        }
    }

    /// Serializes with 4-space indentation, insertion order and unescaped
    /// slashes, followed by a newline.
    pub fn to_pretty_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        self.serialize(&mut ser).map_err(anyhow::Error::from)?;

        let mut out = String::from_utf8(buf).map_err(anyhow::Error::from)?;
        out.push('\n');
        Ok(out)
    }
}

impl FromStr for Manifest {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}
