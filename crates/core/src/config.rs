//! Mapping configuration.
//!
//! Configuration is resolved once at process startup and then passed into the mapper. Mapping
//! never reads environment variables or files, which keeps it a pure function that can run on
//! many threads at once.

use crate::classification::ClassificationRules;
use crate::{MappingError, MappingResult};
use std::path::{Path, PathBuf};

/// Mapper configuration resolved at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MappingConfig {
    rules: ClassificationRules,
}

impl MappingConfig {
    /// Create a new `MappingConfig`, validating the classification rules.
    pub fn new(rules: ClassificationRules) -> MappingResult<Self> {
        rules.validate()?;
        Ok(Self { rules })
    }

    /// Load configuration from an optional YAML rules file.
    ///
    /// With no file the built-in rule table is used.
    pub fn load(rules_file: Option<&Path>) -> MappingResult<Self> {
        match rules_file {
            Some(path) => Self::new(read_rules_file(path)?),
            None => Ok(Self::default()),
        }
    }

    pub fn rules(&self) -> &ClassificationRules {
        &self.rules
    }
}

/// Resolve the rules file location from a command-line override or an environment value.
///
/// Blank values are treated as unset. The override wins over the environment value.
pub fn resolve_rules_file(
    override_path: Option<PathBuf>,
    env_value: Option<String>,
) -> Option<PathBuf> {
    override_path.or_else(|| {
        env_value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    })
}

/// Read a YAML classification rule table from disk.
///
/// # Errors
///
/// Returns `MappingError::RulesRead` if the file cannot be read and `MappingError::Rules` if its
/// content does not match the rule schema.
pub fn read_rules_file(path: &Path) -> MappingResult<ClassificationRules> {
    let yaml = std::fs::read_to_string(path).map_err(MappingError::RulesRead)?;
    parse_rules_yaml(&yaml)
}

/// Parse a YAML classification rule table.
///
/// Uses `serde_path_to_error` so a mismatch names the offending key (e.g. `flag_roots.typo`).
///
/// # Errors
///
/// Returns `MappingError::Rules` if the YAML does not match the rule schema.
pub fn parse_rules_yaml(yaml: &str) -> MappingResult<ClassificationRules> {
    let deserializer = serde_yaml::Deserializer::from_str(yaml);

    match serde_path_to_error::deserialize(deserializer) {
        Ok(parsed) => Ok(parsed),
        Err(err) => {
            let path = err.path().to_string();
            let source = err.into_inner();
            let path = if path.is_empty() || path == "." {
                "<root>"
            } else {
                path.as_str()
            };
            Err(MappingError::Rules(format!(
                "rules schema mismatch at {path}: {source}"
            )))
        }
    }
}
