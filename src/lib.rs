//! # rust-set
//!
//! Rules core for the card game Set.
//!
//! A card combines four attributes (count, fill, color, shape), each drawn
//! from a closed 3-value domain. Three cards form a set when every
//! attribute is all-same or all-different across them, and any two
//! distinct cards determine exactly one completing third card. This crate
//! models the domains, the 81-card deck, the validity predicate, and the
//! closed-form completion rule.
//!
//! ## Example
//!
//! ```
//! use rust_set::{is_set, make_deck, third_card, DeckRng};
//!
//! let mut rng = DeckRng::new(42);
//! let deck = make_deck(&mut rng);
//!
//! // Any two deck cards are distinct, so completion cannot fail.
//! let completed = third_card(&deck[0], &deck[1]).unwrap();
//! assert!(is_set(&deck[0], &deck[1], &completed));
//! ```
//!
//! ## Modules
//!
//! - `cards`: attribute domains, the `SetCard` value type, deck generation
//! - `rules`: set validity and third-card completion
//! - `core`: deterministic, seedable RNG for shuffling
//! - `error`: typed errors for construction and completion

pub mod cards;
pub mod core;
pub mod error;
pub mod rules;

// Re-export commonly used types
pub use crate::cards::{
    full_deck, make_deck, Attribute, Color, Count, Fill, SetCard, Shape, DECK_SIZE,
};
pub use crate::core::{DeckRng, DeckRngState};
pub use crate::error::CardError;
pub use crate::rules::{is_set, third_card};
