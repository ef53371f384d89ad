//! Process model.
//!
//! A process descriptor is the immutable input record of a simulation:
//! identity, arrival instant, CPU demand and urgency. A scheduled process
//! is the run-scoped copy that carries the times derived by one policy run.
//!
//! # Time Representation
//! All times are logical units relative to the simulation epoch (t=0).
//! Nothing is tied to wall-clock time.

use serde::{Deserialize, Serialize};

/// Process identifier.
pub type Pid = u32;

/// An input process to be scheduled.
///
/// Created once from external input and never mutated by a run. Each
/// policy run copies the descriptors it receives into its own state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    /// Unique process identifier (positive).
    pub pid: Pid,
    /// Instant the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total uninterrupted CPU time required.
    pub burst_time: i64,
    /// Scheduling priority (higher = more urgent).
    pub priority: i32,
}

impl ProcessDescriptor {
    /// Creates a descriptor with priority 0.
    pub fn new(pid: Pid, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived at `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival_time <= time
    }
}

/// A process after one policy run, with its derived times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledProcess {
    /// The input record this run was given.
    pub descriptor: ProcessDescriptor,
    /// Instant the process finished its burst.
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
}

impl ScheduledProcess {
    /// Derives turnaround and waiting time from a completion instant.
    pub fn completed_at(descriptor: ProcessDescriptor, completion_time: i64) -> Self {
        let turnaround_time = completion_time - descriptor.arrival_time;
        Self {
            descriptor,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - descriptor.burst_time,
        }
    }

    /// Process identifier.
    #[inline]
    pub fn pid(&self) -> Pid {
        self.descriptor.pid
    }

    /// Instant the process started running (non-preemptive: one run).
    #[inline]
    pub fn start_time(&self) -> i64 {
        self.completion_time - self.descriptor.burst_time
    }
}
