//! Non-preemptive CPU scheduling simulator.
//!
//! Simulates a single CPU running a fixed batch of processes under
//! First-Come-First-Served, Shortest-Job-First and Priority dispatch, and
//! reports the dispatch timeline (Gantt chart) with waiting time,
//! turnaround time and CPU utilization. All time is logical.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessDescriptor`, `ScheduledProcess`,
//!   `GanttEntry`, `Timeline`
//! - **`validation`**: Input integrity checks (empty batch, duplicate PIDs,
//!   bad arrival/burst times)
//! - **`dispatching`**: Selection rules and the rule engine
//! - **`scheduler`**: Simulation loop, policies and metrics
//! - **`loader`**: Process table ingestion
//! - **`report`**: Text rendering of results
//! - **`workload`**: Seeded random process batches
//!
//! # Example
//!
//! ```
//! use cpu_schedule::models::ProcessDescriptor;
//! use cpu_schedule::scheduler::run_priority;
//!
//! let processes = vec![
//!     ProcessDescriptor::new(1, 0, 5).with_priority(2),
//!     ProcessDescriptor::new(2, 1, 3).with_priority(1),
//!     ProcessDescriptor::new(3, 2, 8).with_priority(4),
//!     ProcessDescriptor::new(4, 3, 6).with_priority(3),
//! ];
//! let result = run_priority(&processes).unwrap();
//! assert_eq!(result.dispatch_order(), vec![1, 3, 4, 2]);
//! assert!((result.avg_waiting_time() - 7.75).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

pub mod dispatching;
pub mod loader;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;
