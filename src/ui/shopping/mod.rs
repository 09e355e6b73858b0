mod intent;
mod reducer;
mod state;

pub use intent::ShoppingIntent;
pub use reducer::ShoppingReducer;
pub use state::{AddDialogState, EditDraft, InputField, ScreenMode, ShoppingListState};
