//! Todos Frontend App
//!
//! Builds the store and backend, provides the context, loads the list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::create_api;
use crate::components::{ErrorNotification, TodoList};
use crate::config::{tauri_available, AppConfig};
use crate::context::TodosContext;
use crate::error::ErrorMessage;
use crate::store::TodosState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let backend = config.resolve_backend(tauri_available());
    log::info!("using {:?} backend", backend);

    let api = create_api(backend, &config);
    let ctx = TodosContext::new(Store::new(TodosState::default()), api, config);

    // Provide context to all children
    provide_context(ctx);

    // Load todos on mount
    Effect::new(move |_| {
        spawn_local(async move {
            if let Err(e) = ctx.load_todos().await {
                log::error!("loading todos failed: {}", e);
                ctx.set_error_message(ErrorMessage::UnableToLoad);
            }
        });
    });

    view! {
        <div class="todoapp">
            <h1 class="todoapp__title">"todos"</h1>

            <div class="todoapp__content">
                <TodoList />
            </div>

            <ErrorNotification />
        </div>
    }
}
