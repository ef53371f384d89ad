//! Scheduling domain models.
//!
//! Provides the data types for CPU scheduling inputs and outputs.
//!
//! | Type | Role |
//! |------|------|
//! | `ProcessDescriptor` | Immutable input record |
//! | `ScheduledProcess` | Run-scoped copy with derived times |
//! | `GanttEntry` | One contiguous dispatch on the CPU |
//! | `Timeline` | Dispatch-ordered Gantt sequence |

mod process;
mod schedule;

pub use process::{Pid, ProcessDescriptor, ScheduledProcess};
pub use schedule::{GanttEntry, Timeline};
