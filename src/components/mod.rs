//! UI Components
//!
//! Leptos components of the todo app.

mod todo_item;
mod todo_list;
mod error_notification;

pub use todo_item::TodoItem;
pub use todo_list::TodoList;
pub use error_notification::ErrorNotification;
