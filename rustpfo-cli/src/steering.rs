//! TOML steering files: which processors run, with which parameters.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use rustpfo_core::{ParameterSet, ParameterValue};

/// A parsed steering file.
#[derive(Debug, Deserialize)]
pub struct SteeringFile {
    /// Job-level settings.
    pub job: JobSection,
    /// Per-processor parameter tables, keyed by processor name.
    #[serde(default)]
    pub processors: HashMap<String, HashMap<String, SteeringValue>>,
}

/// The `[job]` section.
#[derive(Debug, Deserialize)]
pub struct JobSection {
    /// Processors to run, in execution order.
    pub processors: Vec<String>,
}

/// A scalar value from a steering file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SteeringValue {
    /// A float parameter value.
    Float(f64),
    /// An integer, accepted where a float parameter is expected.
    Integer(i64),
    /// A string parameter value.
    String(String),
}

impl SteeringFile {
    /// Reads and parses a steering file from disk.
    pub fn from_path(path: &Path) -> crate::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::parse(&text)?)
    }

    /// Parses steering TOML.
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Applies this file's parameter table for `name` onto `params`.
    ///
    /// Processors without a table keep their defaults.
    #[allow(clippy::cast_precision_loss)]
    pub fn apply(&self, name: &str, params: &mut ParameterSet) -> rustpfo_core::Result<()> {
        let Some(table) = self.processors.get(name) else {
            return Ok(());
        };
        for (key, value) in table {
            let value = match value {
                SteeringValue::Float(value) => ParameterValue::Float(*value),
                SteeringValue::Integer(value) => ParameterValue::Float(*value as f64),
                SteeringValue::String(value) => ParameterValue::String(value.clone()),
            };
            params.set(key, value)?;
        }
        Ok(())
    }
}
