use thiserror::Error;

/// Client-side validation failures, raised before any request is sent
/// (or, for `AlreadyReviewed`, recognised in a backend reply).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),
    #[error("Cart is empty")]
    EmptyCart,
    #[error("No shipping address on profile")]
    MissingAddress,
    #[error("This order has already been reviewed")]
    AlreadyReviewed,
}
