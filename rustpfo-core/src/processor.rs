//! Processor lifecycle trait.

use crate::error::Result;
use crate::event::{Event, RunHeader};
use crate::parameter::ParameterSet;

/// A unit of event processing driven by the job runner.
///
/// Implementors are plain value types; the runner owns them and calls
/// the lifecycle methods in a fixed order: `configure` once, `init`
/// once, `process_run_header` once per run, `process_event` once per
/// event in event order, and `end` once after the last event.
pub trait Processor {
    /// Processor type name, unique within a registry.
    fn name(&self) -> &str;

    /// One-line description of what the processor does.
    fn description(&self) -> &str {
        ""
    }

    /// Returns the parameters this processor accepts, with defaults.
    fn parameters(&self) -> ParameterSet;

    /// Applies steering values. Called once, before [`Processor::init`].
    ///
    /// # Errors
    /// Implementations reject steering values they cannot use.
    fn configure(&mut self, params: &ParameterSet) -> Result<()> {
        let _ = params;
        Ok(())
    }

    /// Called once before the first event.
    ///
    /// # Errors
    /// An error aborts the job before any event is processed.
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called once per run, before that run's events.
    ///
    /// # Errors
    /// An error aborts the job.
    fn process_run_header(&mut self, run: &RunHeader) -> Result<()> {
        let _ = run;
        Ok(())
    }

    /// Called once per event, in event order.
    ///
    /// # Errors
    /// An error aborts the job; recoverable conditions are expected to
    /// be handled internally and reported through logging.
    fn process_event(&mut self, event: &Event) -> Result<()>;

    /// Called once after the last event.
    ///
    /// # Errors
    /// An error is reported but cannot un-process events.
    fn end(&mut self) -> Result<()> {
        Ok(())
    }
}

impl std::fmt::Debug for dyn Processor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Processor").field("name", &self.name()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingProcessor {
        events_seen: usize,
        runs_seen: usize,
    }

    impl Processor for CountingProcessor {
        fn name(&self) -> &str {
            "CountingProcessor"
        }

        fn parameters(&self) -> ParameterSet {
            ParameterSet::new()
        }

        fn process_run_header(&mut self, _run: &RunHeader) -> Result<()> {
            self.runs_seen += 1;
            Ok(())
        }

        fn process_event(&mut self, _event: &Event) -> Result<()> {
            self.events_seen += 1;
            Ok(())
        }
    }

    #[test]
    fn test_default_lifecycle_methods() {
        let mut processor = CountingProcessor {
            events_seen: 0,
            runs_seen: 0,
        };
        assert!(processor.configure(&ParameterSet::new()).is_ok());
        assert!(processor.init().is_ok());
        processor
            .process_run_header(&RunHeader::new(1, "ILD"))
            .unwrap();
        processor.process_event(&Event::new(1, 1)).unwrap();
        processor.process_event(&Event::new(1, 2)).unwrap();
        assert!(processor.end().is_ok());

        assert_eq!(processor.runs_seen, 1);
        assert_eq!(processor.events_seen, 2);
        assert_eq!(processor.description(), "");
    }
}
