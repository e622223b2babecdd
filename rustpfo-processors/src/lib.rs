//! rustpfo-processors: Reference processors and job sequencing.
//!
//! This crate provides:
//! - **EnergyFilter** - selects reconstructed particles above an energy cut
//! - **Job driver** - sequences processor lifecycles over a run's events
//!
#![warn(missing_docs)]

mod energy_filter;
mod job;

pub use energy_filter::{
    filter_by_energy, EnergyFilterConfig, EnergyFilterProcessor, FilterStatistics,
};
pub use job::{run_job, JobSummary};

// Re-export the core lifecycle surface
pub use rustpfo_core::processor::Processor;
pub use rustpfo_core::registry::ProcessorRegistry;
