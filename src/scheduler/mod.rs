//! Non-preemptive CPU scheduler simulation and metrics.
//!
//! Simulates one CPU running a fixed batch of processes under FCFS, SJF or
//! Priority dispatch, and derives the Gantt timeline and performance
//! metrics of the run.
//!
//! # Components
//!
//! - `ReadySet`: processes that have arrived but not yet run
//! - `SimulationClock`: simulated time plus the timeline being built
//! - `Simulator`: the dispatch loop for one `Policy`
//! - `ScheduleMetrics`: waiting/turnaround averages, makespan, utilization
//!
//! Every run validates its input and works on a private copy of the
//! descriptors, so runs of different policies never share state.

mod clock;
mod metrics;
mod ready;
mod result;
mod simulation;

pub use clock::SimulationClock;
pub use metrics::ScheduleMetrics;
pub use ready::ReadySet;
pub use result::ScheduleResult;
pub use simulation::{
    compare_policies, run_fcfs, run_priority, run_sjf, ParsePolicyError, Policy,
    SimulationError, Simulator,
};
