//! Job sequencing over a run's events.

use tracing::debug;

use rustpfo_core::error::Result;
use rustpfo_core::event::{Event, RunHeader};
use rustpfo_core::processor::Processor;

/// Summary of a completed job.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JobSummary {
    /// Number of events handed to each processor.
    pub events_processed: usize,
    /// Number of processors driven through the lifecycle.
    pub processors_run: usize,
}

/// Drives the processor lifecycle over one run.
///
/// Each processor sees `init` once, the run header once, then every
/// event in order, then `end`. Processors run sequentially in slice
/// order, one event at a time; there is no parallel dispatch.
///
/// # Errors
/// The first error returned by any lifecycle method aborts the job and
/// is passed back to the caller.
pub fn run_job(
    processors: &mut [Box<dyn Processor>],
    run: &RunHeader,
    events: &[Event],
) -> Result<JobSummary> {
    for processor in processors.iter_mut() {
        debug!("initializing processor '{}'", processor.name());
        processor.init()?;
    }

    for processor in processors.iter_mut() {
        processor.process_run_header(run)?;
    }

    for event in events {
        for processor in processors.iter_mut() {
            processor.process_event(event)?;
        }
    }

    for processor in processors.iter_mut() {
        debug!("finishing processor '{}'", processor.name());
        processor.end()?;
    }

    Ok(JobSummary {
        events_processed: events.len(),
        processors_run: processors.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use rustpfo_core::error::Error;
    use rustpfo_core::parameter::ParameterSet;

    type CallLog = Rc<RefCell<Vec<String>>>;

    #[derive(Default)]
    struct RecordingProcessor {
        log: CallLog,
        fail_on_event: Option<u32>,
    }

    impl Processor for RecordingProcessor {
        fn name(&self) -> &str {
            "RecordingProcessor"
        }

        fn parameters(&self) -> ParameterSet {
            ParameterSet::new()
        }

        fn init(&mut self) -> Result<()> {
            self.log.borrow_mut().push("init".to_owned());
            Ok(())
        }

        fn process_run_header(&mut self, run: &RunHeader) -> Result<()> {
            self.log.borrow_mut().push(format!("run:{}", run.run_number));
            Ok(())
        }

        fn process_event(&mut self, event: &Event) -> Result<()> {
            if self.fail_on_event == Some(event.event_number()) {
                return Err(Error::Config("forced failure".to_owned()));
            }
            self.log
                .borrow_mut()
                .push(format!("event:{}", event.event_number()));
            Ok(())
        }

        fn end(&mut self) -> Result<()> {
            self.log.borrow_mut().push("end".to_owned());
            Ok(())
        }
    }

    #[test]
    fn test_lifecycle_order() {
        let log = CallLog::default();
        let mut processors: Vec<Box<dyn Processor>> = vec![Box::new(RecordingProcessor {
            log: Rc::clone(&log),
            fail_on_event: None,
        })];
        let run = RunHeader::new(3, "ILD");
        let events = vec![Event::new(3, 1), Event::new(3, 2)];

        let summary = run_job(&mut processors, &run, &events).unwrap();
        assert_eq!(summary.events_processed, 2);
        assert_eq!(summary.processors_run, 1);
        assert_eq!(
            *log.borrow(),
            vec!["init", "run:3", "event:1", "event:2", "end"]
        );
    }

    #[test]
    fn test_empty_event_sequence() {
        let mut processors: Vec<Box<dyn Processor>> =
            vec![Box::new(RecordingProcessor::default())];
        let run = RunHeader::new(1, "ILD");

        let summary = run_job(&mut processors, &run, &[]).unwrap();
        assert_eq!(summary.events_processed, 0);
    }

    #[test]
    fn test_processor_error_aborts_job() {
        let mut processors: Vec<Box<dyn Processor>> = vec![Box::new(RecordingProcessor {
            fail_on_event: Some(2),
            ..RecordingProcessor::default()
        })];
        let run = RunHeader::new(1, "ILD");
        let events = vec![Event::new(1, 1), Event::new(1, 2), Event::new(1, 3)];

        assert!(run_job(&mut processors, &run, &events).is_err());
    }
}
