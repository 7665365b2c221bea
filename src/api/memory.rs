//! In-memory todo backend, used outside a Tauri host and in tests.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use super::TodoApi;
use crate::error::{ApiError, ApiResult};
use crate::models::Todo;

#[derive(Clone, Default)]
pub struct MemoryApi {
    todos: Arc<Mutex<Vec<Todo>>>,
    latency_ms: u32,
}

impl MemoryApi {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self {
            todos: Arc::new(Mutex::new(todos)),
            latency_ms: 0,
        }
    }

    /// Delay every call, so the busy overlay can be seen
    pub fn with_latency(mut self, latency_ms: u32) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    pub fn snapshot(&self) -> ApiResult<Vec<Todo>> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> ApiResult<MutexGuard<'_, Vec<Todo>>> {
        self.todos
            .lock()
            .map_err(|e| ApiError::Unavailable(e.to_string()))
    }

    async fn delay(&self) {
        if self.latency_ms > 0 {
            gloo_timers::future::TimeoutFuture::new(self.latency_ms).await;
        }
    }
}

#[async_trait(?Send)]
impl TodoApi for MemoryApi {
    async fn list_todos(&self) -> ApiResult<Vec<Todo>> {
        self.delay().await;
        self.snapshot()
    }

    async fn update_todo(&self, todo: &Todo) -> ApiResult<Todo> {
        self.delay().await;
        let mut todos = self.lock()?;
        let stored = todos
            .iter_mut()
            .find(|t| t.id == todo.id)
            .ok_or(ApiError::NotFound(todo.id))?;
        *stored = todo.clone();
        Ok(stored.clone())
    }

    async fn delete_todo(&self, id: u32) -> ApiResult<()> {
        self.delay().await;
        let mut todos = self.lock()?;
        let before = todos.len();
        todos.retain(|t| t.id != id);
        if todos.len() == before {
            return Err(ApiError::NotFound(id));
        }
        Ok(())
    }
}

/// Seed list for the standalone (non-Tauri) build
pub fn demo_todos() -> Vec<Todo> {
    vec![
        Todo::new(1, "Buy milk"),
        Todo { id: 2, title: "Water the plants".into(), completed: true },
        Todo::new(3, "Call the dentist"),
    ]
}
