//! Timeline (Gantt) model.
//!
//! A timeline is the ordered record of CPU dispatches produced by one
//! simulation run. Entry order is dispatch order; consecutive entries never
//! overlap, and a gap between two entries is CPU idle time.

use serde::{Deserialize, Serialize};

use super::Pid;

/// A contiguous execution interval on the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttEntry {
    /// Process that ran.
    pub pid: Pid,
    /// Dispatch instant.
    pub start_time: i64,
    /// Completion instant (`start_time + burst_time`).
    pub end_time: i64,
}

impl GanttEntry {
    /// Creates a new entry.
    pub fn new(pid: Pid, start_time: i64, end_time: i64) -> Self {
        Self {
            pid,
            start_time,
            end_time,
        }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }
}

/// Ordered sequence of Gantt entries for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Entries in dispatch order.
    pub entries: Vec<GanttEntry>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    ///
    /// Callers must append in dispatch order; entries may not overlap.
    pub fn add_entry(&mut self, entry: GanttEntry) {
        debug_assert!(
            self.entries
                .last()
                .map_or(true, |last| entry.start_time >= last.end_time),
            "entry for P{} starts at {} before the CPU is free",
            entry.pid,
            entry.start_time
        );
        self.entries.push(entry);
    }

    /// End of the last dispatch, 0 when empty.
    pub fn makespan(&self) -> i64 {
        self.entries.last().map(|e| e.end_time).unwrap_or(0)
    }

    /// Start of the first dispatch, if any.
    pub fn first_start(&self) -> Option<i64> {
        self.entries.first().map(|e| e.start_time)
    }

    /// Total time the CPU spent running processes.
    pub fn busy_time(&self) -> i64 {
        self.entries.iter().map(GanttEntry::duration).sum()
    }

    /// Gaps between consecutive entries as `(start, end)` pairs.
    pub fn idle_intervals(&self) -> Vec<(i64, i64)> {
        self.entries
            .windows(2)
            .filter(|w| w[1].start_time > w[0].end_time)
            .map(|w| (w[0].end_time, w[1].start_time))
            .collect()
    }

    /// Total idle time between the first dispatch and the last completion.
    pub fn idle_time(&self) -> i64 {
        self.idle_intervals().iter().map(|(s, e)| e - s).sum()
    }

    /// Finds the entry for a process.
    pub fn entry_for(&self, pid: Pid) -> Option<&GanttEntry> {
        self.entries.iter().find(|e| e.pid == pid)
    }

    /// Process identifiers in dispatch order.
    pub fn dispatch_order(&self) -> Vec<Pid> {
        self.entries.iter().map(|e| e.pid).collect()
    }

    /// Number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been dispatched.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.add_entry(GanttEntry::new(1, 2, 5));
        t.add_entry(GanttEntry::new(2, 5, 9));
        t.add_entry(GanttEntry::new(3, 12, 14));
        t
    }

    #[test]
    fn test_entry_duration() {
        assert_eq!(GanttEntry::new(1, 3, 10).duration(), 7);
    }

    #[test]
    fn test_timeline_bounds() {
        let t = sample_timeline();
        assert_eq!(t.makespan(), 14);
        assert_eq!(t.first_start(), Some(2));
        assert_eq!(t.busy_time(), 9);
    }

    #[test]
    fn test_idle_intervals() {
        let t = sample_timeline();
        assert_eq!(t.idle_intervals(), vec![(9, 12)]);
        assert_eq!(t.idle_time(), 3);
    }

    #[test]
    fn test_entry_lookup_and_order() {
        let t = sample_timeline();
        assert_eq!(t.entry_for(2), Some(&GanttEntry::new(2, 5, 9)));
        assert!(t.entry_for(99).is_none());
        assert_eq!(t.dispatch_order(), vec![1, 2, 3]);
        assert_eq!(t.entry_count(), 3);
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new();
        assert!(t.is_empty());
        assert_eq!(t.makespan(), 0);
        assert_eq!(t.first_start(), None);
        assert!(t.idle_intervals().is_empty());
    }
}
