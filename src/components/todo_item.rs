//! Todo Item Component
//!
//! One todo row: status checkbox, title (or title field while editing),
//! delete button and busy overlay. Interaction logic lives in
//! [`crate::row_state`]; this file only wires DOM events to it.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_todos, TodosContext};
use crate::models::Todo;
use crate::row_state::{RowEffect, RowEvent, RowState};

/// Feed one event through the row state and run the resulting effect
fn dispatch(ctx: TodosContext, row: RwSignal<RowState>, todo: Memo<Todo>, event: RowEvent) {
    // Row already unmounted (e.g. deleted while the call was in flight)
    let Some(current) = todo.try_get_untracked() else {
        return;
    };
    let effect = row.try_update(|state| state.handle(&current, event)).flatten();
    if let Some(effect) = effect {
        perform(ctx, row, todo, effect);
    }
}

fn perform(ctx: TodosContext, row: RwSignal<RowState>, todo: Memo<Todo>, effect: RowEffect) {
    match effect {
        RowEffect::Notify(message) => ctx.set_error_message(message),
        RowEffect::Update(updated) => spawn_local(async move {
            let result = ctx.update_todo(updated).await.map(|_| ());
            dispatch(ctx, row, todo, RowEvent::Settled(result));
        }),
        RowEffect::Delete(id) => spawn_local(async move {
            let result = ctx.delete_todo(id).await;
            dispatch(ctx, row, todo, RowEvent::Settled(result));
        }),
    }
}

/// A single todo row
///
/// Rendered keyed by `todo.id`, so the local row state resets whenever the
/// row is remounted for another todo.
#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let ctx = use_todos();
    let id = todo.id;

    // Follow the store's copy; keep the last one seen if it disappears
    let todo = Memo::new(move |_| ctx.todo(id).unwrap_or_else(|| todo.clone()));
    let row = RwSignal::new(RowState::default());
    let send = move |event: RowEvent| dispatch(ctx, row, todo, event);

    let is_editing = Memo::new(move |_| row.with(RowState::is_editing));
    let wants_focus = Memo::new(move |_| row.with(RowState::wants_focus));
    let draft = Memo::new(move |_| row.with(|r| r.draft().unwrap_or_default().to_string()));
    let input_ref = NodeRef::<html::Input>::new();

    Effect::new(move |_| {
        if wants_focus.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    view! {
        <div
            data-cy="Todo"
            class=move || if todo.get().completed { "todo completed" } else { "todo" }
            on:dblclick=move |_| send(RowEvent::DoubleClick)
        >
            <label class="todo__status-label">
                <input
                    data-cy="TodoStatus"
                    type="checkbox"
                    class="todo__status"
                    aria-label="Todo status"
                    prop:checked=move || todo.get().completed
                    on:change=move |ev| {
                        // Only a successful store update may flip the box
                        let input = event_target::<web_sys::HtmlInputElement>(&ev);
                        input.set_checked(todo.get_untracked().completed);
                        send(RowEvent::ToggleStatus);
                    }
                />
            </label>

            <Show
                when=move || is_editing.get()
                fallback=move || view! {
                    <span data-cy="TodoTitle" class="todo__title">
                        {move || todo.get().title}
                    </span>
                    <button
                        type="button"
                        class="todo__remove"
                        data-cy="TodoDelete"
                        on:click=move |_| send(RowEvent::DeleteClicked)
                    >
                        "×"
                    </button>
                }
            >
                <form on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    send(RowEvent::Submit);
                }>
                    <input
                        node_ref=input_ref
                        data-cy="TodoTitleField"
                        type="text"
                        class="todo__title-field"
                        placeholder="Empty todo will be deleted"
                        prop:value=move || draft.get()
                        on:input=move |ev| send(RowEvent::TitleInput(event_target_value(&ev)))
                        on:keyup=move |ev: web_sys::KeyboardEvent| {
                            match ev.key().as_str() {
                                "Enter" => {
                                    ev.prevent_default();
                                    send(RowEvent::Enter);
                                }
                                "Escape" => send(RowEvent::Escape),
                                _ => {}
                            }
                        }
                        on:focus=move |_| send(RowEvent::Focus)
                        on:blur=move |_| send(RowEvent::Blur)
                    />
                </form>
            </Show>

            <div
                data-cy="TodoLoader"
                class=move || if ctx.is_busy(id) { "modal overlay is-active" } else { "modal overlay" }
            >
                <div class="modal-background has-background-white-ter"></div>
                <div class="loader"></div>
            </div>
        </div>
    }
}
