//! State of the shopping list screen.

use crate::store::{ItemStore, ShoppingItem};
use crate::ui::mvi::UiState;

/// Which of the two text inputs receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputField {
    #[default]
    Name,
    Quantity,
}

impl InputField {
    pub fn toggle(self) -> Self {
        match self {
            Self::Name => Self::Quantity,
            Self::Quantity => Self::Name,
        }
    }
}

/// The "Add Shopping Item" modal.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AddDialogState {
    #[default]
    Hidden,
    Visible {
        name: String,
        quantity: String,
        focus: InputField,
        /// Validation message from the last rejected confirm.
        error: Option<String>,
    },
}

impl AddDialogState {
    pub fn opened() -> Self {
        Self::Visible {
            name: String::new(),
            quantity: String::new(),
            focus: InputField::Name,
            error: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Visible { error, .. } => error.as_deref(),
            Self::Hidden => None,
        }
    }
}

/// Text buffers behind the inline editor row.
///
/// Only meaningful while the store has an item open for editing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditDraft {
    pub name: String,
    pub quantity: String,
    pub focus: InputField,
}

impl EditDraft {
    pub fn from_item(item: &ShoppingItem) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity.to_string(),
            focus: InputField::Name,
        }
    }

    pub fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            InputField::Name => &mut self.name,
            InputField::Quantity => &mut self.quantity,
        }
    }
}

/// Interaction mode, derived from state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenMode {
    Browsing,
    Editing,
    AddDialog,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShoppingListState {
    pub store: ItemStore,
    /// Highlighted row. Always a valid index, or 0 for an empty list.
    pub cursor: usize,
    pub dialog: AddDialogState,
    pub draft: EditDraft,
}

impl UiState for ShoppingListState {}

impl ShoppingListState {
    pub fn mode(&self) -> ScreenMode {
        if self.dialog.is_visible() {
            ScreenMode::AddDialog
        } else if self.store.editing().is_some() {
            ScreenMode::Editing
        } else {
            ScreenMode::Browsing
        }
    }

    pub fn selected_item(&self) -> Option<&ShoppingItem> {
        self.store.items().get(self.cursor)
    }

    pub(crate) fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.store.len().saturating_sub(1));
    }
}
