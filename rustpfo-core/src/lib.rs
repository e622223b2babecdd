//! rustpfo-core: Core types and traits for reconstructed-particle event processing.
//!
//! This crate provides the foundational abstractions for event data,
//! named collections, processor lifecycles, and parameter handling.
//!

pub mod collection;
pub mod error;
pub mod event;
pub mod parameter;
pub mod processor;
pub mod record;
pub mod registry;

pub use collection::Collection;
pub use error::{Error, Result};
pub use event::{Event, RunHeader};
pub use parameter::{ParameterSet, ParameterSpec, ParameterValue};
pub use processor::Processor;
pub use record::{Particle, Record, RecordKind, ReconstructedParticle, Track};
pub use registry::{ProcessorFactory, ProcessorRegistry};
