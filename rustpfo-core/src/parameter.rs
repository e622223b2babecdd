//! Processor parameter registration and steering values.

use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};

/// A scalar steering value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    /// A string parameter, e.g. a collection name.
    String(String),
    /// A floating point parameter, e.g. a cut value.
    Float(f64),
}

impl ParameterValue {
    /// Returns the name of the value's type, for diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Float(_) => "float",
        }
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for ParameterValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Registration record for one parameter: name, description, default.
#[derive(Debug, Clone)]
pub struct ParameterSpec {
    /// Parameter name as it appears in steering files.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Value used when the steering file does not set one.
    pub default: ParameterValue,
}

/// The parameters a processor accepts, plus values applied from steering.
///
/// Specs are kept in registration order. Values are applied once, before
/// the processor is initialized, and are immutable for the rest of the
/// job as far as consumers are concerned.
#[derive(Debug, Clone, Default)]
pub struct ParameterSet {
    specs: Vec<ParameterSpec>,
    overrides: HashMap<String, ParameterValue>,
}

impl ParameterSet {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a string parameter with its default value.
    pub fn register_string(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        default: impl Into<String>,
    ) {
        self.specs.push(ParameterSpec {
            name: name.into(),
            description: description.into(),
            default: ParameterValue::String(default.into()),
        });
    }

    /// Registers a float parameter with its default value.
    pub fn register_float(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        default: f64,
    ) {
        self.specs.push(ParameterSpec {
            name: name.into(),
            description: description.into(),
            default: ParameterValue::Float(default),
        });
    }

    /// Applies a steering value to a registered parameter.
    ///
    /// # Errors
    /// Returns [`Error::UnknownParameter`] for a name that was never
    /// registered, and [`Error::ParameterTypeMismatch`] when the value
    /// type differs from the registered default's type.
    pub fn set(&mut self, name: &str, value: impl Into<ParameterValue>) -> Result<()> {
        let value = value.into();
        let spec = self
            .specs
            .iter()
            .find(|spec| spec.name == name)
            .ok_or_else(|| Error::UnknownParameter {
                name: name.to_owned(),
            })?;
        if std::mem::discriminant(&spec.default) != std::mem::discriminant(&value) {
            return Err(Error::ParameterTypeMismatch {
                name: name.to_owned(),
                expected: spec.default.type_name(),
            });
        }
        self.overrides.insert(name.to_owned(), value);
        Ok(())
    }

    /// Returns the effective value of a string parameter.
    ///
    /// # Errors
    /// Returns [`Error::UnknownParameter`] for an unregistered name and
    /// [`Error::ParameterTypeMismatch`] if the parameter is not a string.
    pub fn get_string(&self, name: &str) -> Result<&str> {
        match self.effective(name)? {
            ParameterValue::String(value) => Ok(value),
            ParameterValue::Float(_) => Err(Error::ParameterTypeMismatch {
                name: name.to_owned(),
                expected: "string",
            }),
        }
    }

    /// Returns the effective value of a float parameter.
    ///
    /// # Errors
    /// Returns [`Error::UnknownParameter`] for an unregistered name and
    /// [`Error::ParameterTypeMismatch`] if the parameter is not a float.
    pub fn get_float(&self, name: &str) -> Result<f64> {
        match self.effective(name)? {
            ParameterValue::Float(value) => Ok(*value),
            ParameterValue::String(_) => Err(Error::ParameterTypeMismatch {
                name: name.to_owned(),
                expected: "float",
            }),
        }
    }

    /// Returns the registered specs, in registration order.
    #[must_use]
    pub fn specs(&self) -> &[ParameterSpec] {
        &self.specs
    }

    /// Iterates over (spec, effective value) pairs, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&ParameterSpec, &ParameterValue)> {
        self.specs
            .iter()
            .map(|spec| (spec, self.overrides.get(&spec.name).unwrap_or(&spec.default)))
    }

    fn effective(&self, name: &str) -> Result<&ParameterValue> {
        if let Some(value) = self.overrides.get(name) {
            return Ok(value);
        }
        self.specs
            .iter()
            .find(|spec| spec.name == name)
            .map(|spec| &spec.default)
            .ok_or_else(|| Error::UnknownParameter {
                name: name.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn filter_params() -> ParameterSet {
        let mut params = ParameterSet::new();
        params.register_string("PfoCollection", "Collection to read", "PandoraPFOs");
        params.register_float("PfoEnergyCut", "Energy cut in GeV", 0.0);
        params
    }

    #[test]
    fn test_defaults_apply_without_overrides() {
        let params = filter_params();
        assert_eq!(params.get_string("PfoCollection").unwrap(), "PandoraPFOs");
        assert_relative_eq!(params.get_float("PfoEnergyCut").unwrap(), 0.0);
    }

    #[test]
    fn test_overrides_replace_defaults() {
        let mut params = filter_params();
        params.set("PfoCollection", "LooseSelectedPandoraPFOs").unwrap();
        params.set("PfoEnergyCut", 5.0).unwrap();

        assert_eq!(
            params.get_string("PfoCollection").unwrap(),
            "LooseSelectedPandoraPFOs"
        );
        assert_relative_eq!(params.get_float("PfoEnergyCut").unwrap(), 5.0);
    }

    #[test]
    fn test_unknown_parameter_rejected() {
        let mut params = filter_params();
        let err = params.set("NoSuchParameter", 1.0).unwrap_err();
        assert!(matches!(err, Error::UnknownParameter { .. }));
        assert!(matches!(
            params.get_float("NoSuchParameter"),
            Err(Error::UnknownParameter { .. })
        ));
    }

    #[test]
    fn test_type_mismatch_rejected() {
        let mut params = filter_params();
        let err = params.set("PfoEnergyCut", "five").unwrap_err();
        assert!(matches!(
            err,
            Error::ParameterTypeMismatch { expected: "float", .. }
        ));
        assert!(matches!(
            params.get_float("PfoCollection"),
            Err(Error::ParameterTypeMismatch { .. })
        ));
    }

    #[test]
    fn test_iter_yields_effective_values_in_order() {
        let mut params = filter_params();
        params.set("PfoEnergyCut", 2.5).unwrap();

        let pairs: Vec<(String, String)> = params
            .iter()
            .map(|(spec, value)| (spec.name.clone(), value.to_string()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("PfoCollection".to_owned(), "PandoraPFOs".to_owned()),
                ("PfoEnergyCut".to_owned(), "2.5".to_owned()),
            ]
        );
    }
}
