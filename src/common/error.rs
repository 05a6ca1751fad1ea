// Rejection taxonomy for mutation operations

use thiserror::Error;

/// Outcome of a refused mutation.
///
/// Every variant is an expected-input problem, fully handled inside the
/// engine: the service logs exactly one diagnostic line to its audit sink and
/// returns the variant to the caller. Nothing here ever panics or propagates
/// as a fault. `StorageRefused` is the one exception to the logging rule: the
/// storage collaborator's `false` is passed through without classification.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// No candidate entity was supplied.
    #[error("missing input")]
    MissingInput,
    /// The entity or one of its required sub-entities failed shape validation.
    #[error("structurally invalid entity")]
    InvalidEntity,
    /// A uniqueness constraint already holds for this entity on add.
    #[error("entity already exists")]
    AlreadyExists,
    /// The entity is absent by id on update or delete.
    #[error("entity does not exist")]
    DoesNotExist,
    /// The product's auction has not ended yet.
    #[error("auction is still active")]
    AuctionActive,
    /// The rating user already rated this product.
    #[error("rating already given")]
    DuplicateRating,
    /// The (rating user, rated user) pair is not seller/winning bidder.
    #[error("user is not eligible to rate")]
    IneligibleUser,
    /// The storage collaborator reported a failed write.
    #[error("storage refused the write")]
    StorageRefused,
}
