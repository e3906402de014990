//! # Task Model
//!
//! Defines the task roster for the executive. Each task has a stable name,
//! a fixed priority (lower = more critical), and an activation flag that
//! only the executive mutates.
//!
//! The roster is an indexed arena: names resolve to table indices once at
//! construction, and the priority ordering is captured once as an index
//! permutation. Nothing re-sorts per cycle, and no task is ever added or
//! removed after startup.

use serde::Serialize;

use crate::config::MAX_TASKS;
use crate::error::Error;

// ---------------------------------------------------------------------------
// Task
// ---------------------------------------------------------------------------

/// A single scheduled task.
///
/// Name and priority are fixed at construction. `active` is the only
/// mutable field, and it is only written by the executive's activation
/// policy; callers observe it through [`Task::is_active`] or a
/// [`TaskStatus`] snapshot.
#[derive(Debug, Clone)]
pub struct Task {
    name: String,
    priority: u8,
    active: bool,
}

impl Task {
    pub(crate) fn new(name: impl Into<String>, priority: u8) -> Self {
        Self {
            name: name.into(),
            priority,
            active: true,
        }
    }

    /// Stable task name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fixed priority, lower = more critical. Always >= 1.
    pub fn priority(&self) -> u8 {
        self.priority
    }

    /// Whether the task is currently running.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether this task survives overload at the given cutoff.
    #[inline]
    pub fn is_critical(&self, critical_priority: u8) -> bool {
        self.priority <= critical_priority
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Copy-out view of this task for a cycle report.
    pub fn status(&self) -> TaskStatus {
        TaskStatus {
            name: self.name.clone(),
            priority: self.priority,
            active: self.active,
        }
    }
}

/// Read-only snapshot of one task, safe to hand to a presentation sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskStatus {
    pub name: String,
    pub priority: u8,
    pub active: bool,
}

// ---------------------------------------------------------------------------
// Task table
// ---------------------------------------------------------------------------

/// Fixed-capacity indexed task arena.
///
/// Built once from a `(name, priority)` roster. The table validates the
/// roster (non-empty, within [`MAX_TASKS`], unique names, priorities
/// starting at 1) and precomputes a priority-order index permutation that
/// is reused for every ordered traversal.
#[derive(Debug)]
pub struct TaskTable {
    tasks: Vec<Task>,
    /// Indices into `tasks`, sorted by (priority, insertion order).
    by_priority: Vec<usize>,
}

impl TaskTable {
    /// Build the table from a roster. All tasks start active.
    pub fn from_roster(roster: &[(&str, u8)]) -> Result<Self, Error> {
        if roster.is_empty() {
            return Err(Error::EmptyRoster);
        }
        if roster.len() > MAX_TASKS {
            return Err(Error::RosterFull {
                capacity: MAX_TASKS,
            });
        }

        let mut tasks: Vec<Task> = Vec::with_capacity(roster.len());
        for &(name, priority) in roster {
            if priority == 0 {
                return Err(Error::InvalidPriority {
                    name: name.to_string(),
                });
            }
            if tasks.iter().any(|t| t.name() == name) {
                return Err(Error::DuplicateTask(name.to_string()));
            }
            tasks.push(Task::new(name, priority));
        }

        // Ties keep insertion order, so the permutation is deterministic.
        let mut by_priority: Vec<usize> = (0..tasks.len()).collect();
        by_priority.sort_by_key(|&i| (tasks[i].priority(), i));

        Ok(Self { tasks, by_priority })
    }

    /// Number of tasks in the roster.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Task at the given table index.
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Resolve a task name to its table index.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.name() == name)
    }

    /// Tasks in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Tasks in priority order (most critical first).
    pub fn iter_by_priority(&self) -> impl Iterator<Item = &Task> {
        self.by_priority.iter().map(|&i| &self.tasks[i])
    }

    /// Mutable access for the activation policy.
    pub(crate) fn tasks_mut(&mut self) -> &mut [Task] {
        &mut self.tasks
    }

    /// Priority-ordered copy-out of every task's status.
    pub fn snapshot_by_priority(&self) -> Vec<TaskStatus> {
        self.iter_by_priority().map(Task::status).collect()
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ROSTER;

    #[test]
    fn default_roster_builds() {
        let table = TaskTable::from_roster(&DEFAULT_ROSTER).unwrap();
        assert_eq!(table.len(), 4);
        assert!(!table.is_empty());
        assert!(table.iter().all(Task::is_active));
        assert_eq!(table.index_of("telemetry"), Some(2));
        assert_eq!(table.index_of("warp_drive"), None);
        assert_eq!(table.get(0).unwrap().name(), "landing_guidance");
        assert!(table.get(4).is_none());
    }

    #[test]
    fn priority_permutation_sorts_once() {
        let table =
            TaskTable::from_roster(&[("cleanup", 4), ("guidance", 1), ("radio", 2)]).unwrap();
        let ordered: Vec<&str> = table.iter_by_priority().map(Task::name).collect();
        assert_eq!(ordered, ["guidance", "radio", "cleanup"]);
        // Insertion order is untouched.
        let inserted: Vec<&str> = table.iter().map(Task::name).collect();
        assert_eq!(inserted, ["cleanup", "guidance", "radio"]);
    }

    #[test]
    fn priority_ties_keep_insertion_order() {
        let table = TaskTable::from_roster(&[("b", 3), ("a", 3), ("c", 1)]).unwrap();
        let ordered: Vec<&str> = table.iter_by_priority().map(Task::name).collect();
        assert_eq!(ordered, ["c", "b", "a"]);
    }

    #[test]
    fn empty_roster_rejected() {
        assert_eq!(TaskTable::from_roster(&[]).unwrap_err(), Error::EmptyRoster);
    }

    #[test]
    fn oversized_roster_rejected() {
        let names = [
            "t0", "t1", "t2", "t3", "t4", "t5", "t6", "t7", "t8",
        ];
        let roster: Vec<(&str, u8)> = names.iter().map(|&n| (n, 1)).collect();
        assert_eq!(
            TaskTable::from_roster(&roster).unwrap_err(),
            Error::RosterFull {
                capacity: MAX_TASKS
            }
        );
    }

    #[test]
    fn duplicate_name_rejected() {
        let err = TaskTable::from_roster(&[("telemetry", 3), ("telemetry", 4)]).unwrap_err();
        assert_eq!(err, Error::DuplicateTask("telemetry".to_string()));
    }

    #[test]
    fn zero_priority_rejected() {
        let err = TaskTable::from_roster(&[("guidance", 0)]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidPriority {
                name: "guidance".to_string()
            }
        );
    }

    #[test]
    fn criticality_cutoff_is_inclusive() {
        let table = TaskTable::from_roster(&DEFAULT_ROSTER).unwrap();
        let radar = table.get(table.index_of("radar_tracking").unwrap()).unwrap();
        let telemetry = table.get(table.index_of("telemetry").unwrap()).unwrap();
        assert!(radar.is_critical(2));
        assert!(!telemetry.is_critical(2));
    }

    #[test]
    fn snapshot_is_priority_ordered_copy() {
        let table = TaskTable::from_roster(&[("camera", 4), ("guidance", 1)]).unwrap();
        let snap = table.snapshot_by_priority();
        assert_eq!(snap.len(), 2);
        assert_eq!(snap[0].name, "guidance");
        assert_eq!(snap[0].priority, 1);
        assert!(snap[0].active);
        assert_eq!(snap[1].name, "camera");
    }
}
