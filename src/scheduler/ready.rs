//! Ready-set management.
//!
//! Tracks which processes have arrived but not yet been dispatched. Pending
//! processes are held in stable arrival order, so admission always takes a
//! prefix of the pending list and the ready set stays in admission order.

use log::trace;

use crate::dispatching::{DispatchContext, RuleEngine};
use crate::models::ProcessDescriptor;

/// Sorts descriptors by arrival time, keeping input order on ties.
pub(crate) fn arrival_order(descriptors: &[ProcessDescriptor]) -> Vec<ProcessDescriptor> {
    let mut ordered = descriptors.to_vec();
    ordered.sort_by_key(|p| p.arrival_time);
    ordered
}

/// Run-scoped ready set.
#[derive(Debug, Clone)]
pub struct ReadySet {
    /// All processes of the run, in stable arrival order.
    pending: Vec<ProcessDescriptor>,
    /// Index of the first process not yet admitted.
    next: usize,
    /// Admitted, undispatched processes in admission order.
    ready: Vec<ProcessDescriptor>,
}

impl ReadySet {
    /// Creates a ready set over a private copy of `descriptors`.
    pub fn new(descriptors: &[ProcessDescriptor]) -> Self {
        Self {
            pending: arrival_order(descriptors),
            next: 0,
            ready: Vec::new(),
        }
    }

    /// Admits every pending process with `arrival_time <= current_time`.
    ///
    /// Returns the number of newly admitted processes. Completed and already
    /// ready processes are never admitted twice.
    pub fn admit(&mut self, current_time: i64) -> usize {
        let start = self.next;
        while let Some(p) = self.pending.get(self.next) {
            if !p.has_arrived(current_time) {
                break;
            }
            self.ready.push(*p);
            self.next += 1;
        }

        let admitted = self.next - start;
        if admitted > 0 {
            trace!(
                "t={current_time}: admitted {admitted} process(es), {} ready",
                self.ready.len()
            );
        }
        admitted
    }

    /// Removes and returns the process chosen by `engine`.
    ///
    /// Returns `None` when the ready set is empty.
    pub fn select(
        &mut self,
        engine: &RuleEngine,
        context: &DispatchContext,
    ) -> Option<ProcessDescriptor> {
        let idx = engine.select_best(&self.ready, context)?;
        Some(self.ready.remove(idx))
    }

    /// Arrival time of the earliest process not yet admitted.
    pub fn next_arrival(&self) -> Option<i64> {
        self.pending.get(self.next).map(|p| p.arrival_time)
    }

    /// Ready processes in admission order.
    pub fn as_slice(&self) -> &[ProcessDescriptor] {
        &self.ready
    }

    /// Number of ready processes.
    pub fn len(&self) -> usize {
        self.ready.len()
    }

    /// Whether no process is ready.
    pub fn is_empty(&self) -> bool {
        self.ready.is_empty()
    }

    /// Whether every process has been admitted and dispatched.
    pub fn is_drained(&self) -> bool {
        self.ready.is_empty() && self.next == self.pending.len()
    }
}
