//! In-memory todo storage.
//!
//! # Design
//! `TodoStore` owns an ordered map from id to record plus the next id to
//! hand out. Ids are assigned monotonically starting at 1 and never reused,
//! so ascending key order is also insertion order. The store itself is not
//! synchronized; the HTTP layer wraps it in a single lock so each operation
//! runs as one atomic read-modify-write.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single todo record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

/// Request payload for both create and full-replacement update.
#[derive(Clone, Debug, Deserialize)]
pub struct TodoInput {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("todo {0} not found")]
    NotFound(u64),
}

#[derive(Debug)]
pub struct TodoStore {
    todos: BTreeMap<u64, Todo>,
    next_id: u64,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            todos: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// All records in insertion order.
    pub fn list(&self) -> Vec<Todo> {
        self.todos.values().cloned().collect()
    }

    pub fn create(&mut self, input: TodoInput) -> Todo {
        let id = self.next_id;
        self.next_id += 1;
        let todo = Todo {
            id,
            title: input.title,
            description: input.description,
            completed: input.completed,
        };
        self.todos.insert(id, todo.clone());
        debug!(id, "todo created");
        todo
    }

    pub fn get(&self, id: u64) -> Result<Todo, StoreError> {
        self.todos.get(&id).cloned().ok_or_else(|| {
            debug!(id, "todo lookup missed");
            StoreError::NotFound(id)
        })
    }

    /// Replaces every mutable field of the record. Fields omitted from
    /// `input` are reset to their defaults rather than kept.
    pub fn update(&mut self, id: u64, input: TodoInput) -> Result<Todo, StoreError> {
        let todo = self.todos.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        todo.title = input.title;
        todo.description = input.description;
        todo.completed = input.completed;
        debug!(id, "todo updated");
        Ok(todo.clone())
    }

    pub fn delete(&mut self, id: u64) -> Result<(), StoreError> {
        self.todos.remove(&id).ok_or(StoreError::NotFound(id))?;
        debug!(id, "todo deleted");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}
