//! Explicit processor registration.
//!
//! Processors are registered by name with a factory function, by an
//! ordinary call made at startup. Lookup failures are error values.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::processor::Processor;

/// Factory producing a fresh processor instance.
pub type ProcessorFactory = fn() -> Box<dyn Processor>;

/// Name-to-factory table for the processors a job can instantiate.
#[derive(Default)]
pub struct ProcessorRegistry {
    factories: HashMap<String, ProcessorFactory>,
}

impl ProcessorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a factory under `name`.
    ///
    /// Returns `true` if a previous factory was replaced.
    pub fn register(&mut self, name: impl Into<String>, factory: ProcessorFactory) -> bool {
        self.factories.insert(name.into(), factory).is_some()
    }

    /// Instantiates the processor registered under `name`.
    ///
    /// # Errors
    /// Returns [`Error::UnknownProcessor`] if no factory has this name.
    pub fn create(&self, name: &str) -> Result<Box<dyn Processor>> {
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| Error::UnknownProcessor {
                name: name.to_owned(),
            })
    }

    /// Returns true if a factory is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Returns the registered names, sorted for stable output.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
