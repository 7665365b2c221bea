//! Todo Store
//!
//! Authoritative todo list plus the state rows read from it: which ids
//! have a mutation in flight and which error the banner shows.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::ErrorMessage;
use crate::models::Todo;

#[derive(Clone, Debug, Default, Store)]
pub struct TodosState {
    pub todos: Vec<Todo>,
    /// Ids currently undergoing an async operation (busy overlay)
    pub selected_todo_ids: Vec<u32>,
    pub error_message: Option<ErrorMessage>,
    /// Bumped on every new error so an older hide timer can't clear a newer one
    pub error_version: u32,
}

pub type TodosStore = Store<TodosState>;

// ========================
// List Helpers
// ========================

/// Replace the todo with the same id. Returns false when it is gone.
pub fn replace_todo(todos: &mut [Todo], updated: Todo) -> bool {
    match todos.iter_mut().find(|t| t.id == updated.id) {
        Some(todo) => {
            *todo = updated;
            true
        }
        None => false,
    }
}

pub fn remove_todo(todos: &mut Vec<Todo>, id: u32) -> bool {
    let before = todos.len();
    todos.retain(|t| t.id != id);
    todos.len() != before
}

/// Versions are only compared for equality, so wrapping is fine
pub fn next_error_version(version: u32) -> u32 {
    version.wrapping_add(1)
}

pub fn mark_busy(ids: &mut Vec<u32>, id: u32) {
    if !ids.contains(&id) {
        ids.push(id);
    }
}

pub fn clear_busy(ids: &mut Vec<u32>, id: u32) {
    ids.retain(|&i| i != id);
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_todos(store: &TodosStore, todos: Vec<Todo>) {
    *store.todos().write() = todos;
}

pub fn store_update_todo(store: &TodosStore, updated: Todo) {
    replace_todo(&mut store.todos().write(), updated);
}

pub fn store_remove_todo(store: &TodosStore, id: u32) {
    remove_todo(&mut store.todos().write(), id);
}

pub fn store_mark_busy(store: &TodosStore, id: u32) {
    mark_busy(&mut store.selected_todo_ids().write(), id);
}

pub fn store_clear_busy(store: &TodosStore, id: u32) {
    clear_busy(&mut store.selected_todo_ids().write(), id);
}

pub fn store_is_busy(store: &TodosStore, id: u32) -> bool {
    store.selected_todo_ids().read().contains(&id)
}

/// Latest snapshot of one todo (tracked)
pub fn store_todo(store: &TodosStore, id: u32) -> Option<Todo> {
    store.todos().read().iter().find(|t| t.id == id).cloned()
}

/// Show an error; returns the version the hide timer must match
pub fn store_set_error(store: &TodosStore, message: ErrorMessage) -> u32 {
    store.error_message().set(Some(message));
    store.error_version().update(|v| *v = next_error_version(*v));
    store.error_version().get_untracked()
}

/// Hide the error if no newer one replaced it meanwhile
pub fn store_clear_error_if(store: &TodosStore, version: u32) {
    if store.error_version().get_untracked() == version {
        store.error_message().set(None);
    }
}

pub fn store_clear_error(store: &TodosStore) {
    store.error_message().set(None);
}
