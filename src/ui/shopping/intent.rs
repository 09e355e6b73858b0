//! Intents for the shopping list screen.

use crate::store::ItemId;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShoppingIntent {
    /// "Add Item" pressed.
    OpenAddDialog,
    CancelAddDialog,
    /// "Add" pressed inside the dialog.
    ConfirmAdd,
    DialogInput(char),
    DialogBackspace,
    DialogToggleField,

    CursorUp,
    CursorDown,

    /// Edit icon pressed on a display row.
    BeginEdit { id: ItemId },
    /// "Save" pressed on the editor row.
    CommitEdit,
    CancelEdit,
    EditorInput(char),
    EditorBackspace,
    EditorToggleField,

    /// Delete icon pressed on a display row.
    Delete { id: ItemId },
}

impl Intent for ShoppingIntent {}
