//! Input validation for process batches.
//!
//! Checks structural integrity of process descriptors before a simulation
//! run. Detects:
//! - Empty batches
//! - Non-positive process IDs
//! - Duplicate process IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Batches whose last completion would not fit in `i64`
//!
//! Every problem is collected; validation does not stop at the first one.

use std::collections::HashSet;
use std::fmt;

use crate::models::ProcessDescriptor;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No descriptors were supplied.
    EmptyInput,
    /// A process ID is zero.
    InvalidPid,
    /// Two descriptors share the same process ID.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process requires no CPU time (or less).
    NonPositiveBurst,
    /// Completion times would exceed the representable time range.
    TimeOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a batch of process descriptors.
///
/// Checks:
/// 1. The batch is not empty
/// 2. Every PID is positive
/// 3. No duplicate PIDs
/// 4. No negative arrival times
/// 5. Every burst time is positive
/// 6. A run from t=0 cannot overflow the clock
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_descriptors(descriptors: &[ProcessDescriptor]) -> ValidationResult {
    validate_descriptors_from(descriptors, 0)
}

/// Validates a batch for a run whose clock starts at `start_time`.
///
/// Same checks as [`validate_descriptors`], with the overflow bound taken
/// from `start_time` instead of t=0.
pub fn validate_descriptors_from(
    descriptors: &[ProcessDescriptor],
    start_time: i64,
) -> ValidationResult {
    let mut errors = Vec::new();

    if descriptors.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "No processes to schedule",
        ));
    }

    let mut pids = HashSet::new();
    for p in descriptors {
        if p.pid == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidPid,
                "Process ID must be positive, got 0",
            ));
        }

        if !pids.insert(p.pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.pid),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process {} has negative arrival time {}",
                    p.pid, p.arrival_time
                ),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process {} has non-positive burst time {}",
                    p.pid, p.burst_time
                ),
            ));
        }
    }

    if !descriptors.is_empty() && time_horizon(descriptors, start_time).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            format!("Process completion times exceed the time limit {}", i64::MAX),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on every completion time: the latest of the clock origin and
/// all arrivals, plus the total burst. `None` if that overflows.
///
/// Each dispatch starts no later than this origin plus the bursts run before
/// it, so no end time exceeds the bound.
fn time_horizon(descriptors: &[ProcessDescriptor], start_time: i64) -> Option<i64> {
    let origin = descriptors
        .iter()
        .map(|p| p.arrival_time)
        .fold(start_time.max(0), i64::max);

    descriptors
        .iter()
        .filter(|p| p.burst_time > 0)
        .try_fold(origin, |acc, p| acc.checked_add(p.burst_time))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_descriptors() -> Vec<ProcessDescriptor> {
        vec![
            ProcessDescriptor::new(1, 0, 5).with_priority(2),
            ProcessDescriptor::new(2, 1, 3).with_priority(1),
            ProcessDescriptor::new(3, 2, 8).with_priority(4),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_descriptors(&sample_descriptors()).is_ok());
    }

    #[test]
    fn test_empty_input() {
        let errors = validate_descriptors(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyInput);
    }

    #[test]
    fn test_zero_pid() {
        let errors = validate_descriptors(&[ProcessDescriptor::new(0, 0, 1)]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidPid));
    }

    #[test]
    fn test_duplicate_pid() {
        let mut descriptors = sample_descriptors();
        descriptors.push(ProcessDescriptor::new(2, 9, 1));

        let errors = validate_descriptors(&descriptors).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains('2')));
    }

    #[test]
    fn test_negative_arrival() {
        let errors = validate_descriptors(&[ProcessDescriptor::new(1, -1, 4)]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeArrival));
    }

    #[test]
    fn test_non_positive_burst() {
        let descriptors = vec![
            ProcessDescriptor::new(1, 0, 0),
            ProcessDescriptor::new(2, 0, -3),
        ];
        let errors = validate_descriptors(&descriptors).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::NonPositiveBurst)
                .count(),
            2
        );
    }

    #[test]
    fn test_multiple_errors() {
        // Duplicate PID + negative arrival + zero burst on the same batch
        let descriptors = vec![
            ProcessDescriptor::new(1, 0, 5),
            ProcessDescriptor::new(1, -2, 0),
        ];
        let errors = validate_descriptors(&descriptors).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_late_arrival_overflow() {
        let errors =
            validate_descriptors(&[ProcessDescriptor::new(1, i64::MAX - 1, 5)]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
    }

    #[test]
    fn test_total_burst_overflow() {
        let descriptors = vec![
            ProcessDescriptor::new(1, 0, i64::MAX),
            ProcessDescriptor::new(2, 0, i64::MAX),
        ];
        let errors = validate_descriptors(&descriptors).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::TimeOverflow));
    }

    #[test]
    fn test_horizon_at_limit_is_valid() {
        // Completes exactly at i64::MAX
        let descriptors = vec![
            ProcessDescriptor::new(1, 0, 5),
            ProcessDescriptor::new(2, i64::MAX - 10, 5),
        ];
        assert!(validate_descriptors(&descriptors).is_ok());
    }

    #[test]
    fn test_start_time_overflow() {
        let descriptors = vec![ProcessDescriptor::new(1, 0, 5)];
        assert!(validate_descriptors_from(&descriptors, i64::MAX - 5).is_ok());

        let errors = validate_descriptors_from(&descriptors, i64::MAX - 4).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);

        // A negative origin still dispatches no earlier than the arrivals
        assert!(validate_descriptors_from(&descriptors, i64::MIN).is_ok());
    }

    #[test]
    fn test_error_display() {
        let errors = validate_descriptors(&[ProcessDescriptor::new(4, 0, 0)]).unwrap_err();
        assert_eq!(
            errors[0].to_string(),
            "Process 4 has non-positive burst time 0"
        );
    }
}
