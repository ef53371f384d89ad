//! Random workload generation for benchmarking policies.
//!
//! Produces valid process batches from a seeded RNG so that policy
//! comparisons are reproducible.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{Pid, ProcessDescriptor};

/// Random workload parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Number of processes (PIDs `1..=count`).
    pub count: u32,
    /// Latest arrival time (inclusive).
    pub max_arrival: i64,
    /// Longest burst time (inclusive, at least 1).
    pub max_burst: i64,
    /// Lowest priority (inclusive).
    pub min_priority: i32,
    /// Highest priority (inclusive).
    pub max_priority: i32,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            count: 10,
            max_arrival: 20,
            max_burst: 10,
            min_priority: 0,
            max_priority: 5,
        }
    }
}

impl WorkloadConfig {
    /// Creates a config for `count` processes with default ranges.
    pub fn new(count: u32) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    /// Sets the latest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the longest burst time.
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst;
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, min_priority: i32, max_priority: i32) -> Self {
        self.min_priority = min_priority;
        self.max_priority = max_priority;
        self
    }
}

/// Generates a process batch.
///
/// Out-of-range settings are clamped: arrivals are never negative, bursts
/// are at least 1, and an inverted priority range is swapped.
pub fn generate_workload<R: Rng>(config: &WorkloadConfig, rng: &mut R) -> Vec<ProcessDescriptor> {
    let max_arrival = config.max_arrival.max(0);
    let max_burst = config.max_burst.max(1);
    let (lo, hi) = if config.min_priority <= config.max_priority {
        (config.min_priority, config.max_priority)
    } else {
        (config.max_priority, config.min_priority)
    };

    (1..=config.count)
        .map(|pid: Pid| ProcessDescriptor {
            pid,
            arrival_time: rng.random_range(0..=max_arrival),
            burst_time: rng.random_range(1..=max_burst),
            priority: rng.random_range(lo..=hi),
        })
        .collect()
}
