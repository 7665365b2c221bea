//! Todo Row State Machine
//!
//! Framework-independent interaction logic of a single todo row.
//! The component feeds DOM events in as [`RowEvent`]s and runs whatever
//! [`RowEffect`] comes back; store results are fed back as
//! [`RowEvent::Settled`].
//!
//! At most one store mutation is in flight per row. Triggers arriving while
//! one is pending (blur right after Enter, keyup after submit, a second
//! checkbox click) are dropped, never queued. Cancelling an unchanged edit
//! needs no store call and is never dropped.

use crate::error::{ErrorMessage, TodoError};
use crate::models::Todo;

/// What the row currently shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RowMode {
    #[default]
    Viewing,
    /// Title field is rendered but must not grab focus
    EditingUnfocused { draft: String },
    /// Title field is rendered and owns focus
    EditingFocused { draft: String },
}

/// The store mutation a row is waiting on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingOp {
    Toggle,
    Rename,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowEvent {
    DoubleClick,
    ToggleStatus,
    TitleInput(String),
    Enter,
    Escape,
    Submit,
    Blur,
    Focus,
    DeleteClicked,
    /// The pending store call finished
    Settled(Result<(), TodoError>),
}

/// Work the component must do on the row's behalf
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowEffect {
    Update(Todo),
    Delete(u32),
    Notify(ErrorMessage),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowState {
    mode: RowMode,
    pending: Option<PendingOp>,
}

impl RowState {
    pub fn mode(&self) -> &RowMode {
        &self.mode
    }

    pub fn pending(&self) -> Option<PendingOp> {
        self.pending
    }

    pub fn is_editing(&self) -> bool {
        !matches!(self.mode, RowMode::Viewing)
    }

    /// Working copy of the title, only while editing
    pub fn draft(&self) -> Option<&str> {
        match &self.mode {
            RowMode::Viewing => None,
            RowMode::EditingUnfocused { draft } | RowMode::EditingFocused { draft } => Some(draft),
        }
    }

    pub fn wants_focus(&self) -> bool {
        matches!(self.mode, RowMode::EditingFocused { .. })
    }

    /// Apply one event. `todo` is the latest snapshot from the store.
    pub fn handle(&mut self, todo: &Todo, event: RowEvent) -> Option<RowEffect> {
        match event {
            RowEvent::DoubleClick => {
                if !self.is_editing() {
                    self.mode = RowMode::EditingFocused { draft: todo.title.clone() };
                }
                None
            }
            // Clicking the checkbox while editing a changed title blurs the
            // field first; that starts the rename and this toggle is dropped.
            RowEvent::ToggleStatus => self.start(PendingOp::Toggle, RowEffect::Update(todo.toggled())),
            RowEvent::TitleInput(value) => {
                if let RowMode::EditingUnfocused { draft } | RowMode::EditingFocused { draft } = &mut self.mode {
                    *draft = value;
                }
                None
            }
            RowEvent::Enter | RowEvent::Submit => self.finish_editing(todo),
            RowEvent::Escape => {
                self.mode = RowMode::Viewing;
                None
            }
            RowEvent::Blur => {
                if let RowMode::EditingFocused { draft } = &mut self.mode {
                    let draft = std::mem::take(draft);
                    self.mode = RowMode::EditingUnfocused { draft };
                }
                self.finish_editing(todo)
            }
            RowEvent::Focus => {
                if let RowMode::EditingUnfocused { draft } = &mut self.mode {
                    let draft = std::mem::take(draft);
                    self.mode = RowMode::EditingFocused { draft };
                }
                None
            }
            RowEvent::DeleteClicked => {
                if self.pending.is_some() {
                    return None;
                }
                self.mode = RowMode::Viewing;
                self.start(PendingOp::Delete, RowEffect::Delete(todo.id))
            }
            RowEvent::Settled(result) => self.settle(result),
        }
    }

    fn start(&mut self, op: PendingOp, effect: RowEffect) -> Option<RowEffect> {
        if self.pending.is_some() {
            return None;
        }
        self.pending = Some(op);
        Some(effect)
    }

    /// Decide what a finished edit means: cancel, rename, or delete
    fn finish_editing(&mut self, todo: &Todo) -> Option<RowEffect> {
        let title = self.draft()?.trim().to_string();

        if title == todo.title {
            self.mode = RowMode::Viewing;
            None
        } else if self.pending.is_some() {
            None
        } else if title.is_empty() {
            self.start(PendingOp::Delete, RowEffect::Delete(todo.id))
        } else {
            self.start(PendingOp::Rename, RowEffect::Update(todo.renamed(title)))
        }
    }

    fn settle(&mut self, result: Result<(), TodoError>) -> Option<RowEffect> {
        let op = self.pending.take()?;
        match result {
            Ok(()) => {
                if op != PendingOp::Toggle {
                    self.mode = RowMode::Viewing;
                }
                None
            }
            // Editing is left as is so the user's input survives a failure
            Err(e) => Some(RowEffect::Notify(e.message())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use proptest::prelude::*;

    fn ok() -> RowEvent {
        RowEvent::Settled(Ok(()))
    }

    fn update_failed() -> RowEvent {
        RowEvent::Settled(Err(TodoError::UpdateFailed(ApiError::Unavailable("offline".into()))))
    }

    fn delete_failed() -> RowEvent {
        RowEvent::Settled(Err(TodoError::DeleteFailed(ApiError::Unavailable("offline".into()))))
    }

    fn buy_milk() -> Todo {
        Todo { id: 1, title: "Buy milk".into(), completed: false }
    }

    fn editing(todo: &Todo) -> RowState {
        let mut row = RowState::default();
        assert_eq!(row.handle(todo, RowEvent::DoubleClick), None);
        row
    }

    /// Run a list of events, collecting every effect
    fn run(row: &mut RowState, todo: &Todo, events: Vec<RowEvent>) -> Vec<RowEffect> {
        events.into_iter().filter_map(|e| row.handle(todo, e)).collect()
    }

    #[test]
    fn test_starts_viewing() {
        let row = RowState::default();
        assert_eq!(row.mode(), &RowMode::Viewing);
        assert_eq!(row.draft(), None);
        assert_eq!(row.pending(), None);
    }

    #[test]
    fn test_double_click_seeds_draft_and_focuses() {
        let todo = buy_milk();
        let row = editing(&todo);
        assert_eq!(row.mode(), &RowMode::EditingFocused { draft: "Buy milk".into() });
        assert!(row.wants_focus());
    }

    #[test]
    fn test_double_click_while_editing_keeps_draft() {
        let todo = buy_milk();
        let mut row = editing(&todo);
        row.handle(&todo, RowEvent::TitleInput("Buy bread".into()));
        row.handle(&todo, RowEvent::DoubleClick);
        assert_eq!(row.draft(), Some("Buy bread"));
    }

    #[test]
    fn test_title_input_is_local_only() {
        let todo = buy_milk();
        let mut row = editing(&todo);
        assert_eq!(row.handle(&todo, RowEvent::TitleInput("Buy oat".into())), None);
        assert_eq!(row.draft(), Some("Buy oat"));
        assert_eq!(row.pending(), None);
    }

    #[test]
    fn test_title_input_ignored_when_viewing() {
        let todo = buy_milk();
        let mut row = RowState::default();
        row.handle(&todo, RowEvent::TitleInput("stray".into()));
        assert_eq!(row.mode(), &RowMode::Viewing);
    }

    #[test]
    fn test_clear_and_enter_deletes() {
        let todo = buy_milk();
        let mut row = editing(&todo);
        let effects = run(&mut row, &todo, vec![RowEvent::TitleInput(String::new()), RowEvent::Enter]);
        assert_eq!(effects, vec![RowEffect::Delete(1)]);
        assert_eq!(row.pending(), Some(PendingOp::Delete));
    }

    #[test]
    fn test_rename_and_enter_updates_with_trimmed_title() {
        let todo = buy_milk();
        let mut row = editing(&todo);
        let effects = run(&mut row, &todo, vec![RowEvent::TitleInput("  Buy oat milk ".into()), RowEvent::Enter]);
        assert_eq!(
            effects,
            vec![RowEffect::Update(Todo { id: 1, title: "Buy oat milk".into(), completed: false })]
        );

        assert_eq!(row.handle(&todo, ok()), None);
        assert_eq!(row.mode(), &RowMode::Viewing);
        assert_eq!(row.pending(), None);
    }

    #[test]
    fn test_unchanged_title_cancels_without_store_call() {
        let todo = buy_milk();
        let mut row = editing(&todo);
        let effects = run(&mut row, &todo, vec![RowEvent::TitleInput(" Buy milk  ".into()), RowEvent::Submit]);
        assert!(effects.is_empty());
        assert_eq!(row.mode(), &RowMode::Viewing);
    }

    #[test]
    fn test_escape_discards_draft() {
        let todo = buy_milk();
        let mut row = editing(&todo);
        let effects = run(&mut row, &todo, vec![RowEvent::TitleInput("nope".into()), RowEvent::Escape]);
        assert!(effects.is_empty());
        assert_eq!(row.mode(), &RowMode::Viewing);

        // Next edit starts again from the store's title
        row.handle(&todo, RowEvent::DoubleClick);
        assert_eq!(row.draft(), Some("Buy milk"));
    }

    #[test]
    fn test_update_failure_stays_editing_and_notifies() {
        let todo = buy_milk();
        let mut row = editing(&todo);
        run(&mut row, &todo, vec![RowEvent::TitleInput("Buy oat milk".into()), RowEvent::Enter]);

        let effect = row.handle(&todo, update_failed());
        assert_eq!(effect, Some(RowEffect::Notify(ErrorMessage::UnableToUpdate)));
        assert_eq!(row.draft(), Some("Buy oat milk"));
        assert_eq!(row.pending(), None);

        // And the user can retry
        let retry = row.handle(&todo, RowEvent::Enter);
        assert_eq!(retry, Some(RowEffect::Update(todo.renamed("Buy oat milk"))));
    }

    #[test]
    fn test_delete_from_edit_failure_stays_editing() {
        let todo = buy_milk();
        let mut row = editing(&todo);
        run(&mut row, &todo, vec![RowEvent::TitleInput("   ".into()), RowEvent::Submit]);

        let effect = row.handle(&todo, delete_failed());
        assert_eq!(effect, Some(RowEffect::Notify(ErrorMessage::UnableToDelete)));
        assert!(row.is_editing());
    }

    #[test]
    fn test_enter_then_blur_issues_one_call() {
        let todo = buy_milk();
        let mut row = editing(&todo);
        let effects = run(
            &mut row,
            &todo,
            vec![
                RowEvent::TitleInput("Buy oat milk".into()),
                RowEvent::Submit,
                RowEvent::Enter,
                RowEvent::Blur,
            ],
        );
        assert_eq!(effects.len(), 1);
        assert_eq!(row.pending(), Some(PendingOp::Rename));
    }

    #[test]
    fn test_blur_commits() {
        let todo = buy_milk();
        let mut row = editing(&todo);
        let effects = run(&mut row, &todo, vec![RowEvent::TitleInput("Buy bread".into()), RowEvent::Blur]);
        assert_eq!(effects, vec![RowEffect::Update(todo.renamed("Buy bread"))]);
        assert_eq!(row.mode(), &RowMode::EditingUnfocused { draft: "Buy bread".into() });
        assert!(!row.wants_focus());
    }

    #[test]
    fn test_blur_failure_does_not_steal_focus() {
        let todo = buy_milk();
        let mut row = editing(&todo);
        run(&mut row, &todo, vec![RowEvent::TitleInput("Buy bread".into()), RowEvent::Blur]);
        row.handle(&todo, update_failed());

        assert_eq!(row.mode(), &RowMode::EditingUnfocused { draft: "Buy bread".into() });

        row.handle(&todo, RowEvent::Focus);
        assert_eq!(row.mode(), &RowMode::EditingFocused { draft: "Buy bread".into() });
    }

    #[test]
    fn test_blur_after_cancel_is_ignored() {
        let todo = buy_milk();
        let mut row = editing(&todo);
        let effects = run(&mut row, &todo, vec![RowEvent::Escape, RowEvent::Blur]);
        assert!(effects.is_empty());
        assert_eq!(row.mode(), &RowMode::Viewing);
    }

    #[test]
    fn test_toggle_keeps_mode() {
        let todo = buy_milk();
        let mut row = editing(&todo);
        let effect = row.handle(&todo, RowEvent::ToggleStatus);
        assert_eq!(effect, Some(RowEffect::Update(todo.toggled())));
        assert!(row.is_editing());

        assert_eq!(row.handle(&todo, ok()), None);
        assert!(row.is_editing());
    }

    #[test]
    fn test_toggle_failure_notifies_update() {
        let todo = buy_milk();
        let mut row = RowState::default();
        row.handle(&todo, RowEvent::ToggleStatus);
        let effect = row.handle(&todo, update_failed());
        assert_eq!(effect, Some(RowEffect::Notify(ErrorMessage::UnableToUpdate)));
        assert_eq!(row.mode(), &RowMode::Viewing);
    }

    #[test]
    fn test_double_toggle_is_dropped_while_pending() {
        let todo = buy_milk();
        let mut row = RowState::default();
        let effects = run(&mut row, &todo, vec![RowEvent::ToggleStatus, RowEvent::ToggleStatus]);
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn test_delete_button() {
        let todo = buy_milk();
        let mut row = RowState::default();
        assert_eq!(row.handle(&todo, RowEvent::DeleteClicked), Some(RowEffect::Delete(1)));
        assert_eq!(row.handle(&todo, RowEvent::DeleteClicked), None);

        let effect = row.handle(&todo, delete_failed());
        assert_eq!(effect, Some(RowEffect::Notify(ErrorMessage::UnableToDelete)));
        assert_eq!(row.mode(), &RowMode::Viewing);
    }

    #[test]
    fn test_escape_during_rename_keeps_viewing_on_failure() {
        let todo = buy_milk();
        let mut row = editing(&todo);
        run(&mut row, &todo, vec![RowEvent::TitleInput("Buy bread".into()), RowEvent::Enter, RowEvent::Escape]);
        assert_eq!(row.mode(), &RowMode::Viewing);

        let effect = row.handle(&todo, update_failed());
        assert_eq!(effect, Some(RowEffect::Notify(ErrorMessage::UnableToUpdate)));
        assert_eq!(row.mode(), &RowMode::Viewing);
    }

    #[test]
    fn test_unchanged_enter_cancels_while_toggle_pending() {
        let todo = buy_milk();
        let mut row = RowState::default();
        let effects = run(&mut row, &todo, vec![RowEvent::ToggleStatus, RowEvent::DoubleClick, RowEvent::Enter]);
        assert_eq!(effects, vec![RowEffect::Update(todo.toggled())]);
        assert_eq!(row.mode(), &RowMode::Viewing);
        assert_eq!(row.pending(), Some(PendingOp::Toggle));
    }

    #[test]
    fn test_changed_enter_is_dropped_while_toggle_pending() {
        let todo = buy_milk();
        let mut row = RowState::default();
        let effects = run(
            &mut row,
            &todo,
            vec![
                RowEvent::ToggleStatus,
                RowEvent::DoubleClick,
                RowEvent::TitleInput("Buy bread".into()),
                RowEvent::Enter,
            ],
        );
        assert_eq!(effects.len(), 1);
        assert_eq!(row.draft(), Some("Buy bread"));
    }

    #[test]
    fn test_checkbox_after_edit_blur_only_renames() {
        let todo = buy_milk();
        let mut row = editing(&todo);
        let effects = run(
            &mut row,
            &todo,
            vec![RowEvent::TitleInput("Buy bread".into()), RowEvent::Blur, RowEvent::ToggleStatus],
        );
        assert_eq!(effects, vec![RowEffect::Update(todo.renamed("Buy bread"))]);
        assert_eq!(row.pending(), Some(PendingOp::Rename));

        // Once the rename lands the checkbox works again
        row.handle(&todo, ok());
        assert_eq!(row.handle(&todo, RowEvent::ToggleStatus), Some(RowEffect::Update(todo.toggled())));
    }

    #[test]
    fn test_stray_settle_is_ignored() {
        let todo = buy_milk();
        let mut row = RowState::default();
        assert_eq!(row.handle(&todo, update_failed()), None);
    }

    fn todo_strategy() -> impl Strategy<Value = Todo> {
        (any::<u32>(), "[a-zA-Z0-9 ]{0,24}", any::<bool>())
            .prop_map(|(id, title, completed)| Todo { id, title, completed })
    }

    proptest! {
        #[test]
        fn toggle_negates_only_completed(todo in todo_strategy()) {
            let mut row = RowState::default();
            let effect = row.handle(&todo, RowEvent::ToggleStatus);
            prop_assert_eq!(
                effect,
                Some(RowEffect::Update(Todo { completed: !todo.completed, ..todo.clone() }))
            );
        }

        #[test]
        fn commit_decision_tree(todo in todo_strategy(), typed in "[a-zA-Z ]{0,24}", key in 0..3u8) {
            let mut row = editing(&todo);
            let finish = match key {
                0 => RowEvent::Enter,
                1 => RowEvent::Submit,
                _ => RowEvent::Blur,
            };
            let effects = run(&mut row, &todo, vec![RowEvent::TitleInput(typed.clone()), finish]);
            let trimmed = typed.trim();

            if trimmed == todo.title {
                prop_assert!(effects.is_empty());
                prop_assert_eq!(row.mode(), &RowMode::Viewing);
            } else if trimmed.is_empty() {
                prop_assert_eq!(effects, vec![RowEffect::Delete(todo.id)]);
            } else {
                prop_assert_eq!(effects, vec![RowEffect::Update(todo.renamed(trimmed))]);
            }
        }

        #[test]
        fn escape_never_calls_store(todo in todo_strategy(), typed in "[a-zA-Z ]{0,24}") {
            let mut row = editing(&todo);
            let effects = run(&mut row, &todo, vec![RowEvent::TitleInput(typed), RowEvent::Escape]);
            prop_assert!(effects.is_empty());
            prop_assert_eq!(row.mode(), &RowMode::Viewing);
            prop_assert_eq!(row.draft(), None);
        }
    }
}
