use crate::ui::mvi::Reducer;
use crate::ui::shopping::{ShoppingIntent, ShoppingListState, ShoppingReducer};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Screen controller. Owns the list state for as long as the screen is up.
pub struct App {
    should_quit: bool,
    title: String,
    /// Shopping list state (MVI pattern).
    shopping: ShoppingListState,
}

impl App {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            title: title.into(),
            shopping: ShoppingListState::default(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn state(&self) -> &ShoppingListState {
        &self.shopping
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn dispatch(&mut self, intent: ShoppingIntent) {
        tracing::trace!(?intent, "dispatch");
        let before = self.shopping.store.len();
        let confirming = intent == ShoppingIntent::ConfirmAdd;

        dispatch_mvi!(self, shopping, ShoppingReducer, intent);

        let after = self.shopping.store.len();
        if after > before {
            if let Some(item) = self.shopping.store.items().last() {
                tracing::info!(id = item.id.0, name = %item.name, quantity = item.quantity, "item added");
            }
        } else if after < before {
            tracing::info!(remaining = after, "item deleted");
        } else if confirming {
            match self.shopping.dialog.error_message() {
                Some(error) => tracing::debug!(%error, "add rejected"),
                None => tracing::debug!("add rejected: blank name"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ItemId;

    #[test]
    fn new_app_starts_empty() {
        let app = App::new("List");
        assert_eq!(app.title(), "List");
        assert!(app.state().store.is_empty());
        assert!(!app.should_quit());
    }

    #[test]
    fn dispatch_runs_reducer() {
        let mut app = App::new("List");
        app.dispatch(ShoppingIntent::OpenAddDialog);
        for ch in "Milk".chars() {
            app.dispatch(ShoppingIntent::DialogInput(ch));
        }
        app.dispatch(ShoppingIntent::DialogToggleField);
        app.dispatch(ShoppingIntent::DialogInput('2'));
        app.dispatch(ShoppingIntent::ConfirmAdd);
        assert_eq!(app.state().store.len(), 1);

        app.dispatch(ShoppingIntent::Delete { id: ItemId(1) });
        assert!(app.state().store.is_empty());
    }

    #[test]
    fn request_quit_sets_flag() {
        let mut app = App::new("List");
        app.request_quit();
        assert!(app.should_quit());
    }
}
