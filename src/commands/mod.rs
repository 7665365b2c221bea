//! Tauri Command Wrappers
//!
//! Frontend bindings to the host's todo commands, plus [`TauriApi`] which
//! exposes them through the [`TodoApi`] seam.

mod todo;

use async_trait::async_trait;
use wasm_bindgen::prelude::*;

use crate::api::TodoApi;
use crate::error::{ApiError, ApiResult};
use crate::models::Todo;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Invoke a host command, turning a rejected promise into an [`ApiError`]
async fn call(command: &'static str, args: JsValue) -> ApiResult<JsValue> {
    invoke(command, args).await.map_err(|e| ApiError::Command {
        command,
        message: e.as_string().unwrap_or_else(|| format!("{:?}", e)),
    })
}

pub use todo::*;

/// Backend living in the Tauri host process
#[derive(Debug, Clone, Copy, Default)]
pub struct TauriApi;

#[async_trait(?Send)]
impl TodoApi for TauriApi {
    async fn list_todos(&self) -> ApiResult<Vec<Todo>> {
        list_todos().await
    }

    async fn update_todo(&self, todo: &Todo) -> ApiResult<Todo> {
        update_todo(todo).await
    }

    async fn delete_todo(&self, id: u32) -> ApiResult<()> {
        delete_todo(id).await
    }
}
