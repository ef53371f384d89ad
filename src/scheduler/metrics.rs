//! Schedule performance metrics.
//!
//! Computes the standard single-CPU indicators from a completed timeline
//! and its scheduled processes.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | End of the last dispatch |
//! | Avg Waiting Time | Mean of (turnaround - burst) |
//! | Avg Turnaround Time | Mean of (completion - arrival) |
//! | CPU Utilization | 100 × busy / (makespan - first start) |

use serde::{Deserialize, Serialize};

use crate::models::{ScheduledProcess, Timeline};

/// Aggregate performance indicators of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Number of processes scheduled.
    pub process_count: usize,
    /// End of the last dispatch.
    pub makespan: i64,
    /// Sum of all burst times.
    pub total_burst_time: i64,
    /// Idle time between the first dispatch and the last completion.
    pub idle_time: i64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// CPU busy share of the dispatch span, in percent (0.0..=100.0).
    pub cpu_utilization_pct: f64,
}

impl ScheduleMetrics {
    /// Computes metrics from a timeline and its scheduled processes.
    ///
    /// An empty run yields all-zero metrics; simulation entry points reject
    /// empty input before this point.
    pub fn calculate(timeline: &Timeline, processes: &[ScheduledProcess]) -> Self {
        let process_count = processes.len();
        let total_burst_time: i64 = processes.iter().map(|p| p.descriptor.burst_time).sum();
        // Per-process times fit in i64; their sums may not
        let total_waiting: i128 = processes.iter().map(|p| i128::from(p.waiting_time)).sum();
        let total_turnaround: i128 = processes
            .iter()
            .map(|p| i128::from(p.turnaround_time))
            .sum();

        let (avg_waiting_time, avg_turnaround_time) = if process_count == 0 {
            (0.0, 0.0)
        } else {
            (
                total_waiting as f64 / process_count as f64,
                total_turnaround as f64 / process_count as f64,
            )
        };

        let makespan = timeline.makespan();
        let span = timeline
            .first_start()
            .map(|first| makespan - first)
            .unwrap_or(0);
        let cpu_utilization_pct = if span <= 0 {
            0.0
        } else {
            100.0 * total_burst_time as f64 / span as f64
        };

        Self {
            process_count,
            makespan,
            total_burst_time,
            idle_time: timeline.idle_time(),
            avg_waiting_time,
            avg_turnaround_time,
            cpu_utilization_pct,
        }
    }

    /// Throughput: processes completed per time unit over the dispatch span.
    pub fn throughput(&self) -> f64 {
        let span = self.total_burst_time + self.idle_time;
        if span <= 0 {
            0.0
        } else {
            self.process_count as f64 / span as f64
        }
    }
}
