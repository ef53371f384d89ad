//! Non-preemptive single-CPU simulation.
//!
//! # Algorithm
//!
//! - **FCFS**: dispatch in stable arrival order; the clock waits for each
//!   process to arrive. The ready set is never re-evaluated.
//! - **SJF / Priority**: at each decision point, admit every arrived
//!   process, then let the policy's rule engine pick one from the ready set.
//!   With an empty ready set the clock jumps straight to the next arrival.
//!
//! Every dispatch runs its process to completion:
//! `start = max(now, arrival)`, `end = start + burst`, `now = end`.
//!
//! # Complexity
//! FCFS O(n log n); SJF / Priority O(n²) for n processes.

use std::fmt;
use std::str::FromStr;

use log::info;
use serde::{Deserialize, Serialize};

use super::ready::arrival_order;
use super::{ReadySet, ScheduleMetrics, ScheduleResult, SimulationClock};
use crate::dispatching::{rules, DispatchContext, RuleEngine};
use crate::models::ProcessDescriptor;
use crate::validation::{validate_descriptors_from, ValidationError};

/// Non-preemptive scheduling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// First Come, First Served.
    Fcfs,
    /// Shortest Job First.
    Sjf,
    /// Highest priority first.
    Priority,
}

impl Policy {
    /// All policies, in reporting order.
    pub const ALL: [Policy; 3] = [Policy::Fcfs, Policy::Sjf, Policy::Priority];

    /// Short lowercase name (`fcfs`, `sjf`, `priority`).
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "fcfs",
            Policy::Sjf => "sjf",
            Policy::Priority => "priority",
        }
    }

    /// Human-readable title.
    pub fn title(&self) -> &'static str {
        match self {
            Policy::Fcfs => "First Come First Served",
            Policy::Sjf => "Shortest Job First",
            Policy::Priority => "Priority Scheduling",
        }
    }

    /// Rule engine used to pick from the ready set.
    ///
    /// `None` for FCFS, which dispatches in a fixed arrival order.
    pub fn rule_engine(&self) -> Option<RuleEngine> {
        match self {
            Policy::Fcfs => None,
            Policy::Sjf => Some(RuleEngine::new().with_rule(rules::ShortestBurst)),
            Policy::Priority => Some(RuleEngine::new().with_rule(rules::HighestPriority)),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a policy name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePolicyError(String);

impl fmt::Display for ParsePolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown policy '{}' (expected fcfs, sjf or priority)",
            self.0
        )
    }
}

impl std::error::Error for ParsePolicyError {}

impl FromStr for Policy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Policy::Fcfs),
            "sjf" => Ok(Policy::Sjf),
            "priority" | "prio" => Ok(Policy::Priority),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

/// Error raised before a simulation starts.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The descriptor batch failed validation.
    InvalidInput(Vec<ValidationError>),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidInput(errors) => {
                write!(f, "invalid input: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{e}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for SimulationError {}

/// Single-CPU, non-preemptive simulator for one policy.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::ProcessDescriptor;
/// use cpu_schedule::scheduler::{Policy, Simulator};
///
/// let processes = vec![
///     ProcessDescriptor::new(1, 0, 5).with_priority(2),
///     ProcessDescriptor::new(2, 1, 3).with_priority(1),
/// ];
/// let result = Simulator::new(Policy::Sjf).run(&processes).unwrap();
/// assert_eq!(result.dispatch_order(), vec![1, 2]);
/// assert_eq!(result.makespan(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    policy: Policy,
    start_time: i64,
}

impl Simulator {
    /// Creates a simulator for `policy` with the clock at t=0.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            start_time: 0,
        }
    }

    /// Sets the clock origin.
    pub fn with_start_time(mut self, start_time: i64) -> Self {
        self.start_time = start_time;
        self
    }

    /// Configured policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Simulates `descriptors` to completion.
    ///
    /// The run works on its own copy of the descriptors; the caller's slice
    /// is left untouched.
    ///
    /// # Errors
    /// [`SimulationError::InvalidInput`] if the batch is empty, any
    /// descriptor is invalid, or a completion time would overflow `i64`.
    pub fn run(
        &self,
        descriptors: &[ProcessDescriptor],
    ) -> Result<ScheduleResult, SimulationError> {
        validate_descriptors_from(descriptors, self.start_time)
            .map_err(SimulationError::InvalidInput)?;

        let mut clock = SimulationClock::starting_at(self.start_time);
        match self.policy.rule_engine() {
            None => Self::run_in_arrival_order(descriptors, &mut clock),
            Some(engine) => Self::run_with_ready_set(descriptors, &engine, &mut clock),
        }
        debug_assert_eq!(clock.completed_count(), descriptors.len());

        let (timeline, processes) = clock.finish();
        let metrics = ScheduleMetrics::calculate(&timeline, &processes);

        info!(
            "{}: {} processes, makespan {}, avg WT {:.2}, avg TAT {:.2}, CPU {:.2}%",
            self.policy,
            metrics.process_count,
            metrics.makespan,
            metrics.avg_waiting_time,
            metrics.avg_turnaround_time,
            metrics.cpu_utilization_pct
        );

        Ok(ScheduleResult {
            policy: self.policy,
            timeline,
            processes,
            metrics,
        })
    }

    fn run_in_arrival_order(descriptors: &[ProcessDescriptor], clock: &mut SimulationClock) {
        for process in arrival_order(descriptors) {
            clock.dispatch(process);
        }
    }

    fn run_with_ready_set(
        descriptors: &[ProcessDescriptor],
        engine: &RuleEngine,
        clock: &mut SimulationClock,
    ) {
        let mut ready = ReadySet::new(descriptors);

        while !ready.is_drained() {
            ready.admit(clock.now());

            let context = DispatchContext::at_time(clock.now());
            match ready.select(engine, &context) {
                Some(process) => {
                    clock.dispatch(process);
                }
                None => match ready.next_arrival() {
                    Some(arrival) => clock.fast_forward(arrival),
                    None => break,
                },
            }
        }
    }
}

/// Runs First Come, First Served over `descriptors`.
pub fn run_fcfs(descriptors: &[ProcessDescriptor]) -> Result<ScheduleResult, SimulationError> {
    Simulator::new(Policy::Fcfs).run(descriptors)
}

/// Runs Shortest Job First over `descriptors`.
pub fn run_sjf(descriptors: &[ProcessDescriptor]) -> Result<ScheduleResult, SimulationError> {
    Simulator::new(Policy::Sjf).run(descriptors)
}

/// Runs highest-priority-first over `descriptors`.
pub fn run_priority(
    descriptors: &[ProcessDescriptor],
) -> Result<ScheduleResult, SimulationError> {
    Simulator::new(Policy::Priority).run(descriptors)
}

/// Runs every policy over `descriptors`, each on its own copy.
///
/// Results are returned in [`Policy::ALL`] order.
pub fn compare_policies(
    descriptors: &[ProcessDescriptor],
) -> Result<Vec<(Policy, ScheduleResult)>, SimulationError> {
    Policy::ALL
        .iter()
        .map(|&policy| Simulator::new(policy).run(descriptors).map(|r| (policy, r)))
        .collect()
}
