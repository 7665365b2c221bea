//! Error Notification Component
//!
//! Shared banner rows forward their failures to. Hides itself after the
//! configured delay, or when closed.

use leptos::prelude::*;

use crate::context::use_todos;

const BASE_CLASS: &str = "notification is-danger is-light has-text-weight-normal";

#[component]
pub fn ErrorNotification() -> impl IntoView {
    let ctx = use_todos();

    view! {
        <div
            data-cy="ErrorNotification"
            class=move || {
                if ctx.error_message().is_some() {
                    BASE_CLASS.to_string()
                } else {
                    format!("{} hidden", BASE_CLASS)
                }
            }
        >
            <button
                data-cy="HideErrorButton"
                type="button"
                class="delete"
                on:click=move |_| ctx.clear_error_message()
            ></button>
            {move || ctx.error_message().map(|m| m.to_string()).unwrap_or_default()}
        </div>
    }
}
