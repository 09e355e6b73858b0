use thiserror::Error;

/// Reasons an item can be rejected by the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Item name must not be blank")]
    BlankName,

    #[error("Quantity '{input}' is not a whole number")]
    InvalidQuantity { input: String },
}
