//! Ordered task list.
//!
//! # Responsibility
//! - Hold tasks in insertion order.
//! - Offer append and remove-by-id as the only mutations.
//!
//! # Invariants
//! - No two tasks share an id.
//! - Surviving tasks keep their relative order; the list is never reordered.

use crate::model::task::{Task, TaskId};

/// Insertion-ordered list of tasks with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from restored tasks, keeping the first task for each id.
    ///
    /// Returns the list and the number of dropped duplicates.
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> (Self, usize) {
        let mut list = Self::new();
        let mut dropped = 0;
        for task in tasks {
            if list.contains(task.id()) {
                dropped += 1;
                continue;
            }
            list.tasks.push(task);
        }
        (list, dropped)
    }

    /// Appends a task at the end.
    ///
    /// Returns `false` and leaves the list untouched when the id is taken.
    pub fn push(&mut self, task: Task) -> bool {
        if self.contains(task.id()) {
            return false;
        }
        self.tasks.push(task);
        true
    }

    /// Removes the task with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id() != id);
        self.tasks.len() != before
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|task| task.id() == id)
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::TaskList;
    use crate::model::task::Task;

    #[test]
    fn push_rejects_duplicate_id() {
        let task = Task::new("once").unwrap();
        let mut list = TaskList::new();
        assert!(list.push(task.clone()));
        assert!(!list.push(task));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn from_tasks_keeps_first_occurrence() {
        let first = Task::new("first").unwrap();
        let clash = Task::with_id(first.id(), "clash").unwrap();
        let other = Task::new("other").unwrap();

        let (list, dropped) = TaskList::from_tasks(vec![first.clone(), clash, other.clone()]);
        assert_eq!(dropped, 1);
        assert_eq!(list.as_slice(), &[first, other]);
    }

    #[test]
    fn remove_preserves_order_of_survivors() {
        let tasks: Vec<Task> = ["a", "b", "c", "d"]
            .iter()
            .map(|title| Task::new(*title).unwrap())
            .collect();
        let (mut list, _) = TaskList::from_tasks(tasks.clone());

        assert!(list.remove(tasks[1].id()));
        assert!(!list.remove(tasks[1].id()));

        let titles: Vec<&str> = list.iter().map(Task::title).collect();
        assert_eq!(titles, vec!["a", "c", "d"]);
    }
}
