//! Event and run header types.

use std::collections::HashMap;

use crate::collection::Collection;
use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Header describing one run of data taking.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunHeader {
    /// Run number.
    pub run_number: u32,
    /// Name of the detector model.
    pub detector_name: String,
    /// Free-form run description.
    pub description: String,
}

impl RunHeader {
    /// Creates a run header with an empty description.
    #[must_use]
    pub fn new(run_number: u32, detector_name: impl Into<String>) -> Self {
        Self {
            run_number,
            detector_name: detector_name.into(),
            description: String::new(),
        }
    }

    /// Sets the run description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Renders a multi-line dump of the header for diagnostics.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "run {}\n  detector:    {}\n  description: {}",
            self.run_number, self.detector_name, self.description
        )
    }
}

/// One unit of recorded data: named collections within a run.
///
/// Collection names are unique within an event. Collections are looked
/// up by name; a missing name is reported as an explicit error value,
/// left to the caller to treat as it sees fit.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Event {
    run_number: u32,
    event_number: u32,
    collections: HashMap<String, Collection>,
}

impl Event {
    /// Creates an empty event.
    #[must_use]
    pub fn new(run_number: u32, event_number: u32) -> Self {
        Self {
            run_number,
            event_number,
            collections: HashMap::new(),
        }
    }

    /// Returns the run number.
    #[inline]
    #[must_use]
    pub fn run_number(&self) -> u32 {
        self.run_number
    }

    /// Returns the event number.
    #[inline]
    #[must_use]
    pub fn event_number(&self) -> u32 {
        self.event_number
    }

    /// Adds a named collection.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateCollection`] if the name is already taken.
    pub fn add_collection(
        &mut self,
        name: impl Into<String>,
        collection: Collection,
    ) -> Result<()> {
        let name = name.into();
        if self.collections.contains_key(&name) {
            return Err(Error::DuplicateCollection { name });
        }
        self.collections.insert(name, collection);
        Ok(())
    }

    /// Looks up a collection by name.
    ///
    /// # Errors
    /// Returns [`Error::CollectionNotFound`] if no collection has this name.
    pub fn collection(&self, name: &str) -> Result<&Collection> {
        self.collections
            .get(name)
            .ok_or_else(|| Error::CollectionNotFound {
                name: name.to_owned(),
            })
    }

    /// Returns the collection names, sorted for stable output.
    #[must_use]
    pub fn collection_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.collections.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of collections in the event.
    #[inline]
    #[must_use]
    pub fn collection_count(&self) -> usize {
        self.collections.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{RecordKind, ReconstructedParticle};

    #[test]
    fn test_run_header_summary() {
        let run = RunHeader::new(42, "ILD_l5_o1_v02").with_description("test beam");
        let summary = run.summary();
        assert!(summary.contains("run 42"));
        assert!(summary.contains("ILD_l5_o1_v02"));
        assert!(summary.contains("test beam"));
    }

    #[test]
    fn test_collection_lookup() {
        let mut event = Event::new(1, 7);
        event
            .add_collection(
                "PandoraPFOs",
                Collection::from_particles([ReconstructedParticle::from_energy(5.0)]),
            )
            .unwrap();

        let collection = event.collection("PandoraPFOs").unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(event.collection_count(), 1);
    }

    #[test]
    fn test_missing_collection_is_an_error_value() {
        let event = Event::new(1, 7);
        let err = event.collection("PandoraPFOs").unwrap_err();
        assert!(matches!(
            err,
            Error::CollectionNotFound { ref name } if name == "PandoraPFOs"
        ));
    }

    #[test]
    fn test_duplicate_collection_rejected() {
        let mut event = Event::new(1, 7);
        event
            .add_collection("Tracks", Collection::new(RecordKind::Track))
            .unwrap();
        let err = event
            .add_collection("Tracks", Collection::new(RecordKind::Track))
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateCollection { .. }));
    }

    #[test]
    fn test_collection_names_sorted() {
        let mut event = Event::new(1, 1);
        for name in ["Tracks", "PandoraPFOs", "BuildUpVertices"] {
            event
                .add_collection(name, Collection::new(RecordKind::Track))
                .unwrap();
        }
        assert_eq!(
            event.collection_names(),
            vec!["BuildUpVertices", "PandoraPFOs", "Tracks"]
        );
    }
}
