//! Todo Backend Seam
//!
//! The store never talks to a backend directly; it goes through
//! [`TodoApi`]. The Tauri host and the in-memory list both implement it.

mod memory;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{AppConfig, BackendKind};
use crate::error::ApiResult;
use crate::models::Todo;

pub use memory::{demo_todos, MemoryApi};

/// Async CRUD surface consumed by the todo store
///
/// Futures are not `Send`: in the browser everything runs on one thread.
#[async_trait(?Send)]
pub trait TodoApi: Send + Sync {
    async fn list_todos(&self) -> ApiResult<Vec<Todo>>;

    /// Replace the stored record with `todo`, returning what was stored
    async fn update_todo(&self, todo: &Todo) -> ApiResult<Todo>;

    async fn delete_todo(&self, id: u32) -> ApiResult<()>;
}

pub type SharedApi = Arc<dyn TodoApi>;

/// Build the backend chosen by the config
pub fn create_api(kind: BackendKind, config: &AppConfig) -> SharedApi {
    match kind {
        BackendKind::Tauri => Arc::new(crate::commands::TauriApi),
        BackendKind::Memory => Arc::new(MemoryApi::new(demo_todos()).with_latency(config.memory_latency_ms)),
    }
}
