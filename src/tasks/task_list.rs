use log::debug;

use super::task::{RemovalKey, TaskId, TaskItem};

/// The ordered in-memory collection of current entries. Insertion order is
/// display order.
///
/// Every operation is synchronous and infallible: invalid input (blank
/// text, an unknown id, a non-qualifying key) is silently ignored rather
/// than reported.
#[derive(Debug, Default)]
pub struct TaskList {
    items: Vec<TaskItem>,
    next_id: u64,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[TaskItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a new entry with the trimmed text and returns its id.
    /// Blank input creates nothing and returns `None`.
    pub fn submit(&mut self, raw: &str) -> Option<TaskId> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.items.push(TaskItem {
            id,
            text: text.to_string(),
        });
        debug!("task {id:?} added, {} in list", self.items.len());
        Some(id)
    }

    /// Removes the identified entry. An unknown or already-removed id
    /// leaves the list unchanged.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let Some(pos) = self.items.iter().position(|item| item.id == id) else {
            return false;
        };
        self.items.remove(pos);
        debug!("task {id:?} removed, {} left", self.items.len());
        true
    }

    /// Removes the identified entry when `key` names a removal key, in any
    /// letter case. Returns whether the key was consumed so the caller can
    /// suppress its default action.
    pub fn handle_removal_key(&mut self, id: TaskId, key: &str) -> bool {
        match RemovalKey::parse(key) {
            Some(_) => self.remove(id),
            None => false,
        }
    }
}
