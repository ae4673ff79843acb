//! Allocator errors.
//!
//! Every variant is an invariant violation: the seed repertoire is corrupt
//! or the reserved ranges are used up. They abort the run; per-line input
//! problems are reported through `RunReport` instead.

use crate::ranges::Family;
use chai_repertoire::Codepoint;
use thiserror::Error;

/// Allocator result type
pub type Result<T> = std::result::Result<T, AllocatorError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocatorError {
    #[error("no unused variant of name {name:?} after {tried} disambiguators")]
    NamesExhausted { name: String, tried: usize },

    #[error("name {name:?} emitted for both {first} and {second}")]
    DuplicateName {
        name: String,
        first: Codepoint,
        second: Codepoint,
    },

    #[error("dedup key {key} claimed by both {first} and {second} in the existing repertoire")]
    KeyCollision {
        key: String,
        first: Codepoint,
        second: Codepoint,
    },

    #[error("{family} range exhausted at {next}")]
    RangeExhausted { family: Family, next: Codepoint },
}
