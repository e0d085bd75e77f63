//! Task List Model
//!
//! The canonical in-memory task list. Views render from it and persistence
//! serializes it; nothing is read back from the DOM.

use crate::config::TEXT_LIMIT;
use crate::error::Result;
use crate::format::{created_at_now, strip_truncation_marker, truncate};
use crate::models::TaskRecord;
use crate::repository::TaskRepository;
use crate::storage::KeyValueStore;

/// A task row. `id` only lives in memory and keys the rendered row.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: u32,
    /// Display text, already truncated
    pub text: String,
    pub completed: bool,
    pub created_at: String,
}

impl Task {
    /// Text offered in the edit dialog: the display text without the truncation marker
    pub fn editable_text(&self) -> &str {
        strip_truncation_marker(&self.text, TEXT_LIMIT)
    }

    pub fn to_record(&self) -> TaskRecord {
        TaskRecord {
            text: self.editable_text().to_string(),
            completed: self.completed,
            created_at: self.created_at.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u32,
}

impl TaskList {
    /// Rebuild from stored records, in stored order, keeping `createdAt` verbatim
    pub fn from_records(records: Vec<TaskRecord>) -> Self {
        let mut list = Self::default();
        for record in records {
            list.add(&record.text, record.completed, Some(record.created_at));
        }
        list
    }

    pub fn load_from<S: KeyValueStore>(store: &S) -> Self {
        Self::from_records(TaskRepository::tasks(store).load())
    }

    pub fn save_to<S: KeyValueStore>(&self, store: &S) -> Result<()> {
        TaskRepository::tasks(store).save(&self.to_records())
    }

    /// Append a task. `created_at` defaults to the current moment.
    /// Does not persist.
    pub fn add(&mut self, text: &str, completed: bool, created_at: Option<String>) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            text: truncate(text, TEXT_LIMIT),
            completed,
            created_at: created_at.unwrap_or_else(created_at_now),
        });
        id
    }

    /// Add from the input box. Blank input is ignored.
    pub fn submit_new(&mut self, input: &str) -> Option<u32> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }
        Some(self.add(text, false, None))
    }

    /// Replace a task's text. Returns false for blank input or an unknown id.
    pub fn edit(&mut self, id: u32, new_value: &str) -> bool {
        let value = new_value.trim();
        if value.is_empty() {
            return false;
        }
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.text = truncate(value, TEXT_LIMIT);
                true
            }
            None => false,
        }
    }

    pub fn set_completed(&mut self, id: u32, completed: bool) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = completed;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    pub fn get(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The empty placeholder is shown iff there are no tasks
    pub fn show_placeholder(&self) -> bool {
        self.is_empty()
    }

    pub fn to_records(&self) -> Vec<TaskRecord> {
        self.tasks.iter().map(Task::to_record).collect()
    }

    // ========================
    // Mutate, then persist
    // ========================
    //
    // Each rewrites the whole list when the model changed. On `Err` the
    // change is kept in memory; only the write failed.

    pub fn submit_and_save<S: KeyValueStore>(&mut self, store: &S, input: &str) -> Result<Option<u32>> {
        let added = self.submit_new(input);
        if added.is_some() {
            self.save_to(store)?;
        }
        Ok(added)
    }

    pub fn set_completed_and_save<S: KeyValueStore>(&mut self, store: &S, id: u32, completed: bool) -> Result<bool> {
        let changed = self.set_completed(id, completed);
        if changed {
            self.save_to(store)?;
        }
        Ok(changed)
    }

    pub fn edit_and_save<S: KeyValueStore>(&mut self, store: &S, id: u32, new_value: &str) -> Result<bool> {
        let edited = self.edit(id, new_value);
        if edited {
            self.save_to(store)?;
        }
        Ok(edited)
    }

    pub fn remove_and_save<S: KeyValueStore>(&mut self, store: &S, id: u32) -> Result<bool> {
        let removed = self.remove(id);
        if removed {
            self.save_to(store)?;
        }
        Ok(removed)
    }
}
