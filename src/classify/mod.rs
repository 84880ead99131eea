//! Inclusion rules: the sushi classifier and the optional locality filter.

mod locality;
mod sushi;

pub use locality::{matches_locality, LocalityFilter, LocalityTable, ADDRESS_KEYS};
pub use sushi::{is_target, SUSHI_KEYWORDS};
