//! Typed errors for card construction and completion.

use thiserror::Error;

/// Error type for the fallible card operations.
///
/// Every operation in this crate is total over its documented
/// preconditions and fails fast otherwise; there are no retries and no
/// partial results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// A numeric count outside the valid `1..=3` domain.
    #[error("invalid count {0}: must be 1, 2, or 3")]
    InvalidAttribute(u8),

    /// Two equal cards were given where a distinct pair is required.
    ///
    /// A card and its copy admit no third card: completion would return
    /// the same card again, and a triple with two equal cards is never a
    /// valid set.
    #[error("equal cards do not determine a third card")]
    InvalidPair,
}
