//! Completed simulation result.

use serde::{Deserialize, Serialize};

use super::{Policy, ScheduleMetrics};
use crate::models::{Pid, ScheduledProcess, Timeline};

/// Outcome of one policy run.
///
/// Built once when the run finishes; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Policy that produced this result.
    pub policy: Policy,
    /// Dispatch-ordered Gantt timeline.
    pub timeline: Timeline,
    /// Scheduled processes in dispatch order.
    pub processes: Vec<ScheduledProcess>,
    /// Aggregate metrics.
    pub metrics: ScheduleMetrics,
}

impl ScheduleResult {
    /// Finds the scheduled record for a process.
    pub fn process(&self, pid: Pid) -> Option<&ScheduledProcess> {
        self.processes.iter().find(|p| p.pid() == pid)
    }

    /// Process identifiers in dispatch order.
    pub fn dispatch_order(&self) -> Vec<Pid> {
        self.timeline.dispatch_order()
    }

    /// Waiting times in dispatch order.
    pub fn waiting_times(&self) -> Vec<i64> {
        self.processes.iter().map(|p| p.waiting_time).collect()
    }

    /// Idle gaps on the timeline as `(start, end)` pairs.
    pub fn idle_intervals(&self) -> Vec<(i64, i64)> {
        self.timeline.idle_intervals()
    }

    /// Mean waiting time.
    pub fn avg_waiting_time(&self) -> f64 {
        self.metrics.avg_waiting_time
    }

    /// Mean turnaround time.
    pub fn avg_turnaround_time(&self) -> f64 {
        self.metrics.avg_turnaround_time
    }

    /// CPU utilization in percent.
    pub fn cpu_utilization_pct(&self) -> f64 {
        self.metrics.cpu_utilization_pct
    }

    /// End of the last dispatch.
    pub fn makespan(&self) -> i64 {
        self.metrics.makespan
    }
}
