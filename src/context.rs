//! Todos Context
//!
//! The store collaborator rows consume, provided via Leptos Context API.
//! Rows never touch the backend themselves; every mutation goes through here
//! so the busy set and the list stay consistent.

use leptos::prelude::*;

use crate::api::SharedApi;
use crate::config::AppConfig;
use crate::error::{ApiError, ErrorMessage, TodoError};
use crate::models::Todo;
use crate::store::*;

#[derive(Clone, Copy)]
pub struct TodosContext {
    store: TodosStore,
    api: StoredValue<SharedApi>,
    config: StoredValue<AppConfig>,
}

impl TodosContext {
    pub fn new(store: TodosStore, api: SharedApi, config: AppConfig) -> Self {
        Self {
            store,
            api: StoredValue::new(api),
            config: StoredValue::new(config),
        }
    }

    pub fn todos(&self) -> Vec<Todo> {
        self.store.todos().get()
    }

    /// Latest snapshot of one todo (tracked)
    pub fn todo(&self, id: u32) -> Option<Todo> {
        store_todo(&self.store, id)
    }

    /// Whether `id` has a mutation in flight (tracked)
    pub fn is_busy(&self, id: u32) -> bool {
        store_is_busy(&self.store, id)
    }

    pub fn error_message(&self) -> Option<ErrorMessage> {
        self.store.error_message().get()
    }

    /// Show `message` in the banner and schedule it to hide
    pub fn set_error_message(&self, message: ErrorMessage) {
        let version = store_set_error(&self.store, message);
        let delay_ms = self.config.with_value(|c| c.error_display_ms);
        let store = self.store;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(delay_ms).await;
            store_clear_error_if(&store, version);
        });
    }

    pub fn clear_error_message(&self) {
        store_clear_error(&self.store);
    }

    /// Fetch the whole list from the backend
    pub async fn load_todos(self) -> Result<(), ApiError> {
        let api = self.api.get_value();
        let todos = api.list_todos().await?;
        log::info!("loaded {} todos", todos.len());
        store_set_todos(&self.store, todos);
        Ok(())
    }

    pub async fn update_todo(self, todo: Todo) -> Result<Todo, TodoError> {
        let id = todo.id;
        let api = self.api.get_value();
        store_mark_busy(&self.store, id);

        let result = api.update_todo(&todo).await;
        store_clear_busy(&self.store, id);

        match result {
            Ok(stored) => {
                log::debug!("todo {} updated", id);
                store_update_todo(&self.store, stored.clone());
                Ok(stored)
            }
            Err(e) => {
                log::warn!("todo {} update failed: {}", id, e);
                Err(TodoError::UpdateFailed(e))
            }
        }
    }

    pub async fn delete_todo(self, id: u32) -> Result<(), TodoError> {
        let api = self.api.get_value();
        store_mark_busy(&self.store, id);

        let result = api.delete_todo(id).await;
        store_clear_busy(&self.store, id);

        match result {
            Ok(()) => {
                log::debug!("todo {} deleted", id);
                store_remove_todo(&self.store, id);
                Ok(())
            }
            Err(e) => {
                log::warn!("todo {} delete failed: {}", id, e);
                Err(TodoError::DeleteFailed(e))
            }
        }
    }
}

/// Get the todos context
pub fn use_todos() -> TodosContext {
    expect_context::<TodosContext>()
}
