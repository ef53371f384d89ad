//! Dispatch context for rule evaluation.

/// Runtime scheduling state passed to dispatching rules.
///
/// All times are logical units relative to the simulation epoch (t=0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchContext {
    /// Current simulation time (the decision point).
    pub current_time: i64,
}

impl DispatchContext {
    /// Creates a context at the given time.
    pub fn at_time(current_time: i64) -> Self {
        Self { current_time }
    }
}
