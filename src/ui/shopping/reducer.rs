//! Reducer for the shopping list screen.

use crate::store::StoreError;
use crate::ui::mvi::Reducer;

use super::intent::ShoppingIntent;
use super::state::{AddDialogState, EditDraft, InputField, ScreenMode, ShoppingListState};

/// Pure state transitions for the list, the add dialog and the inline editor.
///
/// Intents that do not fit the current [`ScreenMode`] are dropped, so a
/// stray key can never e.g. delete a row while the dialog is open.
pub struct ShoppingReducer;

impl Reducer for ShoppingReducer {
    type State = ShoppingListState;
    type Intent = ShoppingIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        let mode = state.mode();
        match intent {
            ShoppingIntent::OpenAddDialog => {
                if mode == ScreenMode::Browsing {
                    state.dialog = AddDialogState::opened();
                }
                state
            }

            ShoppingIntent::CancelAddDialog => {
                state.dialog = AddDialogState::Hidden;
                state
            }

            ShoppingIntent::ConfirmAdd => {
                let AddDialogState::Visible {
                    name,
                    quantity,
                    focus,
                    ..
                } = std::mem::take(&mut state.dialog)
                else {
                    return state;
                };
                match state.store.add(&name, &quantity) {
                    Ok(_) => {
                        state.cursor = state.store.len().saturating_sub(1);
                    }
                    Err(StoreError::BlankName) => {
                        state.dialog = AddDialogState::Visible {
                            name,
                            quantity,
                            focus,
                            error: None,
                        };
                    }
                    Err(err @ StoreError::InvalidQuantity { .. }) => {
                        state.dialog = AddDialogState::Visible {
                            name,
                            quantity,
                            focus,
                            error: Some(err.to_string()),
                        };
                    }
                }
                state
            }

            ShoppingIntent::DialogInput(ch) => {
                if let AddDialogState::Visible {
                    name,
                    quantity,
                    focus,
                    error,
                } = &mut state.dialog
                {
                    match focus {
                        InputField::Name => name.push(ch),
                        InputField::Quantity => quantity.push(ch),
                    }
                    *error = None;
                }
                state
            }

            ShoppingIntent::DialogBackspace => {
                if let AddDialogState::Visible {
                    name,
                    quantity,
                    focus,
                    error,
                } = &mut state.dialog
                {
                    match focus {
                        InputField::Name => name.pop(),
                        InputField::Quantity => quantity.pop(),
                    };
                    *error = None;
                }
                state
            }

            ShoppingIntent::DialogToggleField => {
                if let AddDialogState::Visible { focus, .. } = &mut state.dialog {
                    *focus = focus.toggle();
                }
                state
            }

            ShoppingIntent::CursorUp => {
                if mode == ScreenMode::Browsing {
                    state.cursor = state.cursor.saturating_sub(1);
                }
                state
            }

            ShoppingIntent::CursorDown => {
                if mode == ScreenMode::Browsing && state.cursor + 1 < state.store.len() {
                    state.cursor += 1;
                }
                state
            }

            ShoppingIntent::BeginEdit { id } => {
                if mode == ScreenMode::AddDialog {
                    return state;
                }
                let Some(position) = state.store.items().iter().position(|item| item.id == id)
                else {
                    return state;
                };
                state.draft = EditDraft::from_item(&state.store.items()[position]);
                state.store.begin_edit(id);
                state.cursor = position;
                state
            }

            ShoppingIntent::CommitEdit => {
                if let Some(id) = state.store.editing() {
                    let draft = std::mem::take(&mut state.draft);
                    state.store.commit_edit(id, &draft.name, &draft.quantity);
                }
                state
            }

            ShoppingIntent::CancelEdit => {
                state.store.cancel_edit();
                state.draft = EditDraft::default();
                state
            }

            ShoppingIntent::EditorInput(ch) => {
                if mode == ScreenMode::Editing {
                    state.draft.focused_mut().push(ch);
                }
                state
            }

            ShoppingIntent::EditorBackspace => {
                if mode == ScreenMode::Editing {
                    state.draft.focused_mut().pop();
                }
                state
            }

            ShoppingIntent::EditorToggleField => {
                if mode == ScreenMode::Editing {
                    state.draft.focus = state.draft.focus.toggle();
                }
                state
            }

            ShoppingIntent::Delete { id } => {
                if mode == ScreenMode::AddDialog {
                    return state;
                }
                let was_editing = state.store.is_editing(id);
                if state.store.delete(id).is_some() {
                    if was_editing {
                        state.draft = EditDraft::default();
                    }
                    state.clamp_cursor();
                }
                state
            }
        }
    }
}
