//! Ordered task list with add, toggle and delete

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque task identifier, unique for the lifetime of a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

/// Tasks kept in insertion order
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store preloaded with the sample tasks shown on a fresh dashboard
    pub fn with_sample_tasks() -> Self {
        let mut store = Self::new();
        for (text, completed) in [
            ("Review project requirements", false),
            ("Email the design team", true),
            ("Setup React environment", true),
        ] {
            if let Some(id) = store.add(text) {
                if completed {
                    store.toggle(id);
                }
            }
        }
        store
    }

    /// Append a task. Blank text is ignored and yields `None`.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            tracing::debug!("Ignoring blank task text");
            return None;
        }

        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            text: text.to_string(),
            completed: false,
        });
        Some(id)
    }

    /// Flip the completed flag. Returns false if no task has this id.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Remove the task with this id. Returns false if no task has this id.
    pub fn delete(&mut self, id: TaskId) -> bool {
        match self.tasks.iter().position(|t| t.id == id) {
            Some(index) => {
                self.tasks.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn total(&self) -> usize {
        self.tasks.len()
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_rejected() {
        let mut store = TaskStore::new();
        assert_eq!(store.add(""), None);
        assert_eq!(store.add("   "), None);
        assert_eq!(store.add("\t\n"), None);
        assert_eq!(store.total(), 0);
    }

    #[test]
    fn add_trims_and_appends_in_order() {
        let mut store = TaskStore::new();
        let a = store.add("  first ").unwrap();
        let b = store.add("second").unwrap();

        let texts: Vec<&str> = store.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
        assert_ne!(a, b);
        assert!(store.tasks().iter().all(|t| !t.completed));
    }

    #[test]
    fn ids_are_never_reused() {
        let mut store = TaskStore::new();
        let a = store.add("a").unwrap();
        store.delete(a);
        let b = store.add("b").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn toggle_twice_restores_flag() {
        let mut store = TaskStore::new();
        let id = store.add("x").unwrap();
        assert!(store.toggle(id));
        assert!(store.get(id).unwrap().completed);
        assert!(store.toggle(id));
        assert!(!store.get(id).unwrap().completed);
    }

    #[test]
    fn unknown_ids_are_no_ops() {
        let mut store = TaskStore::new();
        store.add("x");
        let before = store.tasks().to_vec();

        assert!(!store.toggle(TaskId::new(999)));
        assert!(!store.delete(TaskId::new(999)));
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn add_then_delete_restores_total_and_leaves_others() {
        let mut store = TaskStore::new();
        let keep = store.add("keep").unwrap();
        store.toggle(keep);
        let total = store.total();

        let id = store.add("x").unwrap();
        assert!(store.delete(id));

        assert_eq!(store.total(), total);
        assert!(store.get(keep).unwrap().completed);
    }

    #[test]
    fn delete_keeps_survivor_order() {
        let mut store = TaskStore::new();
        store.add("a");
        let b = store.add("b").unwrap();
        store.add("c");
        store.delete(b);

        let texts: Vec<&str> = store.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "c"]);
    }

    #[test]
    fn completed_never_exceeds_total() {
        let mut store = TaskStore::new();
        let mut ids = Vec::new();
        // Deterministic mixed sequence of operations
        for step in 0u64..200 {
            match step % 5 {
                0 | 1 => {
                    if let Some(id) = store.add(&format!("task {step}")) {
                        ids.push(id);
                    }
                }
                2 | 3 => {
                    if let Some(id) = ids.get((step as usize * 7) % ids.len().max(1)) {
                        store.toggle(*id);
                    }
                }
                _ => {
                    if !ids.is_empty() {
                        let id = ids.remove((step as usize * 3) % ids.len());
                        store.delete(id);
                    }
                }
            }
            assert!(store.completed_count() <= store.total());
        }
    }

    #[test]
    fn write_report_scenario() {
        let mut store = TaskStore::new();
        let report = store.add("Write report").unwrap();
        let call = store.add("Call client").unwrap();
        assert_eq!(store.total(), 2);
        assert_eq!(store.completed_count(), 0);

        store.toggle(report);
        assert_eq!(store.completed_count(), 1);

        store.delete(call);
        assert_eq!(store.total(), 1);
        let remaining = &store.tasks()[0];
        assert_eq!(remaining.text, "Write report");
        assert!(remaining.completed);
    }

    #[test]
    fn sample_tasks_match_fresh_dashboard() {
        let store = TaskStore::with_sample_tasks();
        assert_eq!(store.total(), 3);
        assert_eq!(store.completed_count(), 2);
        assert!(!store.tasks()[0].completed);
    }
}
