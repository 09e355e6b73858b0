//! Model-View-Intent primitives for the shopping list screen.
//!
//! ```text
//! key ──→ Intent ──→ Reducer ──→ State ──→ render
//!  ↑                                         │
//!  └─────────────────────────────────────────┘
//! ```
//!
//! - **State**: everything the frame is drawn from
//! - **Intent**: a user action, already translated from a key press
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
