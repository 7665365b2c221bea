//! Todo Commands
//!
//! Frontend bindings for todo-related host commands.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::call;
use crate::error::ApiResult;
use crate::models::Todo;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

#[derive(Serialize)]
struct TodoArgs<'a> {
    todo: &'a Todo,
}

// ========================
// Commands
// ========================

pub async fn list_todos() -> ApiResult<Vec<Todo>> {
    let result = call("list_todos", JsValue::NULL).await?;
    Ok(serde_wasm_bindgen::from_value(result)?)
}

pub async fn update_todo(todo: &Todo) -> ApiResult<Todo> {
    let js_args = serde_wasm_bindgen::to_value(&TodoArgs { todo })?;
    let result = call("update_todo", js_args).await?;
    Ok(serde_wasm_bindgen::from_value(result)?)
}

pub async fn delete_todo(id: u32) -> ApiResult<()> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id })?;
    call("delete_todo", js_args).await?;
    Ok(())
}
