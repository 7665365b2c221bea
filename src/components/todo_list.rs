//! Todo List Component
//!
//! Renders one [`TodoItem`] per todo, keyed by id.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::context::use_todos;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_todos();

    view! {
        <section class="todoapp__main" data-cy="TodoList">
            // Key on id only: title/completed changes flow through the row's
            // own memo, so its edit state survives store updates
            <For
                each=move || ctx.todos()
                key=|todo| todo.id
                children=move |todo| view! { <TodoItem todo=todo /> }
            />
        </section>
    }
}
