//! Rule engine for dispatch selection.
//!
//! Composes dispatching rules in sequence (primary rule, then secondary
//! rules) and selects the next process from a ready set.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchContext, DispatchingRule};
use crate::models::ProcessDescriptor;

/// A composable rule engine for process selection.
///
/// Rules are applied in sequence: a later rule is consulted only when every
/// earlier rule scores two processes equally. When every rule ties, the
/// process admitted to the ready set first wins.
///
/// # Example
/// ```
/// use cpu_schedule::dispatching::RuleEngine;
/// use cpu_schedule::dispatching::rules;
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::HighestPriority)
///     .with_rule(rules::ShortestBurst);
/// assert_eq!(engine.rule_names(), vec!["PRIORITY", "SJF"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule. The first rule added is the primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Names of the configured rules, primary first.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Returns the index of the process to dispatch next.
    ///
    /// `ready` must be in admission order. Scanning keeps the current best
    /// unless a later process compares strictly better, so exact ties go to
    /// the earlier entry.
    pub fn select_best(
        &self,
        ready: &[ProcessDescriptor],
        context: &DispatchContext,
    ) -> Option<usize> {
        let mut best: Option<usize> = None;

        for (idx, candidate) in ready.iter().enumerate() {
            let replace = match best {
                None => true,
                Some(b) => self.compare(candidate, &ready[b], context) == Ordering::Less,
            };
            if replace {
                best = Some(idx);
            }
        }

        best
    }

    fn compare(
        &self,
        a: &ProcessDescriptor,
        b: &ProcessDescriptor,
        context: &DispatchContext,
    ) -> Ordering {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(a, context).cmp(&rule.evaluate(b, context)))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
