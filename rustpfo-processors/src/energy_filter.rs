//! Energy filtering of reconstructed particle collections.

use tracing::{debug, error, info, warn};

use rustpfo_core::error::{Error, Result};
use rustpfo_core::event::{Event, RunHeader};
use rustpfo_core::parameter::ParameterSet;
use rustpfo_core::processor::Processor;
use rustpfo_core::record::Particle;

/// Steering parameter: name of the collection to read.
const PARAM_COLLECTION: &str = "PfoCollection";
/// Steering parameter: energy cut in GeV.
const PARAM_ENERGY_CUT: &str = "PfoEnergyCut";

/// Selects the particles at or above an energy cut.
///
/// Relative order is preserved and elements are selected, not copied:
/// calling this with references yields the same references back. A
/// particle is excluded exactly when its energy is below the cut, so
/// equality with the cut passes. NaN energies never pass.
pub fn filter_by_energy<P>(particles: impl IntoIterator<Item = P>, energy_cut: f64) -> Vec<P>
where
    P: Particle,
{
    particles
        .into_iter()
        .filter(|particle| particle.energy() >= energy_cut)
        .collect()
}

/// Configuration for the energy filter.
#[derive(Clone, Debug)]
pub struct EnergyFilterConfig {
    /// Name of the reconstructed particle collection to read.
    pub collection_name: String,
    /// Minimum energy (GeV) for a particle to pass.
    pub energy_cut: f64,
}

impl Default for EnergyFilterConfig {
    fn default() -> Self {
        Self {
            collection_name: "PandoraPFOs".to_owned(),
            energy_cut: 0.0,
        }
    }
}

impl EnergyFilterConfig {
    /// Set the collection name.
    #[must_use]
    pub fn with_collection_name(mut self, name: impl Into<String>) -> Self {
        self.collection_name = name.into();
        self
    }

    /// Set the energy cut.
    #[must_use]
    pub fn with_energy_cut(mut self, energy_cut: f64) -> Self {
        self.energy_cut = energy_cut;
        self
    }
}

/// Per-job counters accumulated by the energy filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterStatistics {
    /// Events handed to the processor.
    pub events_processed: u64,
    /// Events in which the configured collection was missing.
    pub events_missing_collection: u64,
    /// Records examined across all collections read.
    pub records_scanned: u64,
    /// Records skipped because they were not reconstructed particles.
    pub kind_mismatches: u64,
    /// Particles at or above the energy cut.
    pub particles_passed: u64,
    /// Particles below the energy cut.
    pub particles_rejected: u64,
}

/// Processor that reads a named particle collection and applies an
/// energy cut, logging the particles that pass.
///
/// Missing collections and stray records of the wrong kind are handled
/// per event and per element; neither aborts the job.
#[derive(Clone, Debug, Default)]
pub struct EnergyFilterProcessor {
    config: EnergyFilterConfig,
    stats: FilterStatistics,
}

impl EnergyFilterProcessor {
    /// Create with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom configuration.
    #[must_use]
    pub fn with_config(config: EnergyFilterConfig) -> Self {
        Self {
            config,
            stats: FilterStatistics::default(),
        }
    }

    /// Get current configuration.
    #[must_use]
    pub fn config(&self) -> &EnergyFilterConfig {
        &self.config
    }

    /// Counters accumulated so far.
    #[must_use]
    pub fn statistics(&self) -> FilterStatistics {
        self.stats
    }
}

impl Processor for EnergyFilterProcessor {
    fn name(&self) -> &str {
        "EnergyFilter"
    }

    fn description(&self) -> &str {
        "Selects reconstructed particles at or above an energy cut"
    }

    fn parameters(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        params.register_string(
            PARAM_COLLECTION,
            "The Pandora PFO collection name",
            self.config.collection_name.clone(),
        );
        params.register_float(
            PARAM_ENERGY_CUT,
            "A cut on pfo energy to apply",
            self.config.energy_cut,
        );
        params
    }

    fn configure(&mut self, params: &ParameterSet) -> Result<()> {
        self.config.collection_name = params.get_string(PARAM_COLLECTION)?.to_owned();
        self.config.energy_cut = params.get_float(PARAM_ENERGY_CUT)?;
        Ok(())
    }

    fn init(&mut self) -> Result<()> {
        info!(processor = self.name(), "parameters:");
        info!("  {PARAM_COLLECTION} = {}", self.config.collection_name);
        info!("  {PARAM_ENERGY_CUT} = {}", self.config.energy_cut);
        Ok(())
    }

    fn process_run_header(&mut self, run: &RunHeader) -> Result<()> {
        info!("starting run no {}", run.run_number);
        info!("{}", run.summary());
        Ok(())
    }

    fn process_event(&mut self, event: &Event) -> Result<()> {
        debug!(
            "processing event no {} - run {}",
            event.event_number(),
            event.run_number()
        );
        self.stats.events_processed += 1;

        let collection = match event.collection(&self.config.collection_name) {
            Ok(collection) => collection,
            Err(Error::CollectionNotFound { name }) => {
                warn!("pfo collection '{name}' is not available");
                self.stats.events_missing_collection += 1;
                return Ok(());
            }
            Err(err) => return Err(err),
        };
        debug!("number of reco particles: {}", collection.len());
        self.stats.records_scanned += collection.len() as u64;

        let mut particles = Vec::with_capacity(collection.len());
        for (index, record) in collection.iter().enumerate() {
            match record.as_particle() {
                Some(particle) => particles.push(particle),
                None => {
                    error!(
                        "wrong record kind in collection '{}' at index {index}: {}",
                        self.config.collection_name,
                        record.kind()
                    );
                    self.stats.kind_mismatches += 1;
                }
            }
        }

        let candidates = particles.len();
        let passing = filter_by_energy(particles, self.config.energy_cut);
        self.stats.particles_passed += passing.len() as u64;
        self.stats.particles_rejected += (candidates - passing.len()) as u64;

        for particle in &passing {
            debug!("particle passes the energy cut (E = {:.3} GeV)", particle.energy());
        }

        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        info!(
            "energy filter done: {} events ({} without '{}'), {} records, {} passed, {} rejected, {} wrong kind",
            self.stats.events_processed,
            self.stats.events_missing_collection,
            self.config.collection_name,
            self.stats.records_scanned,
            self.stats.particles_passed,
            self.stats.particles_rejected,
            self.stats.kind_mismatches
        );
        Ok(())
    }
}
