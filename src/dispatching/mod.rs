//! Dispatching rules and rule engine for CPU scheduling.
//!
//! Provides the selection rules used by the non-preemptive policies
//! (arrival order, shortest burst, highest priority) and a rule engine that
//! picks the next process from a ready set.
//!
//! # Tie-breaking
//!
//! When every rule scores two ready processes equally, the process that
//! entered the ready set first wins. The engine scans the ready set in
//! admission order and only replaces its current best on a strictly better
//! score.
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::dispatching::{DispatchContext, RuleEngine};
//! use cpu_schedule::dispatching::rules;
//! use cpu_schedule::models::ProcessDescriptor;
//!
//! let ready = vec![
//!     ProcessDescriptor::new(1, 0, 8),
//!     ProcessDescriptor::new(2, 1, 3),
//! ];
//! let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
//! let ctx = DispatchContext::at_time(1);
//! assert_eq!(engine.select_best(&ready, &ctx), Some(1));
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::DispatchContext;
pub use engine::RuleEngine;

use crate::models::ProcessDescriptor;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first). Scores are integral so
/// that ties are exact.
pub type RuleScore = i64;

/// A dispatching rule that evaluates how urgently a process should run.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for processes that should be dispatched first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Evaluates a ready process at the given decision point.
    fn evaluate(&self, process: &ProcessDescriptor, context: &DispatchContext) -> RuleScore;
}
