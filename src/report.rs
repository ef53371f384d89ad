//! Plain-text rendering of schedule results.
//!
//! Formats a [`ScheduleResult`] as an ASCII Gantt chart and a per-process
//! table. Rendering never alters the result.

use std::fmt::Write;

use crate::scheduler::{Policy, ScheduleResult};

const CELL_WIDTH: usize = 6;

/// Renders the Gantt chart of a run.
///
/// ```text
/// +------+------+
/// | P1   | P2   |
/// +------+------+
/// 0     5     8
/// ```
pub fn render_gantt(result: &ScheduleResult) -> String {
    let entries = &result.timeline.entries;
    let mut out = String::new();
    if entries.is_empty() {
        return out;
    }

    let border: String = entries
        .iter()
        .map(|_| format!("+{}", "-".repeat(CELL_WIDTH)))
        .chain(std::iter::once("+".to_string()))
        .collect();

    out.push_str("Gantt Chart:\n");
    out.push_str(&border);
    out.push('\n');
    for entry in entries {
        let _ = write!(out, "| P{:<3}", entry.pid);
    }
    out.push_str("|\n");
    out.push_str(&border);
    out.push('\n');

    let _ = write!(out, "{}", entries[0].start_time);
    for entry in entries {
        let _ = write!(out, "{:>width$}", entry.end_time, width = CELL_WIDTH);
    }
    out.push('\n');

    let idle = result.idle_intervals();
    if !idle.is_empty() {
        let gaps: Vec<String> = idle.iter().map(|(s, e)| format!("[{s}, {e})")).collect();
        let _ = writeln!(out, "CPU idle: {}", gaps.join(", "));
    }

    out
}

/// Renders the per-process result table of a run, in dispatch order.
pub fn render_table(result: &ScheduleResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", result.policy.title());
    let _ = writeln!(
        out,
        "{:<5} {:<15} {:<15} {:<15} {:<10} {:<10}",
        "PID", "Arrival_Time", "Burst_Time", "Priority", "WT", "TAT"
    );
    for p in &result.processes {
        let d = &p.descriptor;
        let _ = writeln!(
            out,
            "{:<5} {:<15} {:<15} {:<15} {:<10} {:<10}",
            d.pid, d.arrival_time, d.burst_time, d.priority, p.waiting_time, p.turnaround_time
        );
    }

    let m = &result.metrics;
    let _ = writeln!(out, "Average waiting time:    {:.2}", m.avg_waiting_time);
    let _ = writeln!(out, "Average turnaround time: {:.2}", m.avg_turnaround_time);
    let _ = writeln!(out, "CPU utilization:         {:.2}%", m.cpu_utilization_pct);
    let _ = writeln!(out, "Makespan:                {}", m.makespan);

    out
}

/// Renders one summary row per policy.
pub fn render_comparison(results: &[(Policy, ScheduleResult)]) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:<10} {:>10} {:>10} {:>10} {:>10} {:>12}",
        "Policy", "Avg WT", "Avg TAT", "CPU %", "Makespan", "Throughput"
    );
    for (policy, result) in results {
        let m = &result.metrics;
        let _ = writeln!(
            out,
            "{:<10} {:>10.2} {:>10.2} {:>10.2} {:>10} {:>12.4}",
            policy.name(),
            m.avg_waiting_time,
            m.avg_turnaround_time,
            m.cpu_utilization_pct,
            m.makespan,
            m.throughput()
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessDescriptor;
    use crate::scheduler::{compare_policies, run_fcfs};

    fn textbook() -> Vec<ProcessDescriptor> {
        vec![
            ProcessDescriptor::new(1, 0, 5).with_priority(2),
            ProcessDescriptor::new(2, 1, 3).with_priority(1),
            ProcessDescriptor::new(3, 2, 8).with_priority(4),
            ProcessDescriptor::new(4, 3, 6).with_priority(3),
        ]
    }

    #[test]
    fn test_render_gantt() {
        let r = run_fcfs(&textbook()).unwrap();
        let chart = render_gantt(&r);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines[0], "Gantt Chart:");
        assert_eq!(lines[1], "+------+------+------+------+");
        assert_eq!(lines[2], "| P1   | P2   | P3   | P4   |");
        assert_eq!(lines[4], "0     5     8    16    22");
        assert!(!chart.contains("CPU idle"));
    }

    #[test]
    fn test_render_gantt_idle() {
        let r = run_fcfs(&[
            ProcessDescriptor::new(1, 0, 2),
            ProcessDescriptor::new(2, 5, 1),
        ])
        .unwrap();
        assert!(render_gantt(&r).contains("CPU idle: [2, 5)"));
    }

    #[test]
    fn test_render_table() {
        let r = run_fcfs(&textbook()).unwrap();
        let table = render_table(&r);
        assert!(table.starts_with("First Come First Served\n"));
        assert!(table.contains("Average waiting time:    5.75"));
        assert!(table.contains("CPU utilization:         100.00%"));
        // Header + 4 rows + title + 4 summary lines
        assert_eq!(table.lines().count(), 10);
    }

    #[test]
    fn test_render_comparison() {
        let all = compare_policies(&textbook()).unwrap();
        let text = render_comparison(&all);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("fcfs"));
        assert!(lines[2].contains("5.25"));
        assert!(lines[3].starts_with("priority"));
    }
}
