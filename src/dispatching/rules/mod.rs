//! Built-in dispatching rules.
//!
//! - **Time-based**: SHORTEST_BURST
//! - **Priority**: HIGHEST_PRIORITY
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{DispatchContext, DispatchingRule, RuleScore};
use crate::models::ProcessDescriptor;

/// Shortest Job First.
///
/// Prioritizes processes with the smallest burst time. Minimizes average
/// waiting time among non-preemptive policies for a fixed ready set.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &ProcessDescriptor, _context: &DispatchContext) -> RuleScore {
        process.burst_time
    }
}

/// Highest priority first.
///
/// Prioritizes processes with higher `priority` values.
/// (Negated because lower score = higher priority in convention.)
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl DispatchingRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &ProcessDescriptor, _context: &DispatchContext) -> RuleScore {
        -RuleScore::from(process.priority)
    }
}
