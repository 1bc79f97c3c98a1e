//! Card system: attribute domains, the card value type, and deck
//! generation.
//!
//! ## Key Types
//!
//! - `Count`, `Fill`, `Color`, `Shape`: the four closed 3-value domains
//! - `Attribute`: common trait over the domains, including the per-attribute
//!   completion rule
//! - `SetCard`: immutable four-attribute card value
//! - `full_deck` / `make_deck`: the 81-card universe, ordered or shuffled

pub mod attributes;
pub mod card;
pub mod deck;

pub use attributes::{Attribute, Color, Count, Fill, Shape};
pub use card::SetCard;
pub use deck::{full_deck, make_deck, DECK_SIZE};
