//! Simulation clock and timeline builder.

use log::{debug, trace};

use crate::models::{GanttEntry, ProcessDescriptor, ScheduledProcess, Timeline};

/// Simulated clock that records every dispatch on a timeline.
///
/// The clock only moves forward: by running a process to completion, or by
/// jumping over idle time to the next arrival.
#[derive(Debug, Clone, Default)]
pub struct SimulationClock {
    now: i64,
    timeline: Timeline,
    completed: Vec<ScheduledProcess>,
}

impl SimulationClock {
    /// Creates a clock at `start_time`.
    pub fn starting_at(start_time: i64) -> Self {
        Self {
            now: start_time,
            ..Default::default()
        }
    }

    /// Current simulated time.
    #[inline]
    pub fn now(&self) -> i64 {
        self.now
    }

    /// Number of processes run to completion.
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Advances an idle CPU to `time`. Never moves the clock backwards.
    pub fn fast_forward(&mut self, time: i64) {
        if time > self.now {
            trace!("idle: t={} -> t={}", self.now, time);
            self.now = time;
        }
    }

    /// Runs `process` to completion.
    ///
    /// The dispatch starts at `max(now, arrival_time)` and the clock ends at
    /// the process's completion time.
    pub fn dispatch(&mut self, process: ProcessDescriptor) -> GanttEntry {
        let start_time = self.now.max(process.arrival_time);
        let end_time = start_time + process.burst_time;
        let entry = GanttEntry::new(process.pid, start_time, end_time);

        debug!("dispatch P{} [{start_time}, {end_time})", process.pid);

        self.now = end_time;
        self.timeline.add_entry(entry);
        self.completed
            .push(ScheduledProcess::completed_at(process, end_time));
        entry
    }

    /// Consumes the clock, returning the timeline and completed processes
    /// in dispatch order.
    pub fn finish(self) -> (Timeline, Vec<ScheduledProcess>) {
        (self.timeline, self.completed)
    }
}
