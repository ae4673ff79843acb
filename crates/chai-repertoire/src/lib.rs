// Allow unwrap in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Character repertoire model.
//!
//! Records exchanged with the storage layer: characters, their glyph forms,
//! codepoint references, and the Unicode block table that decides which
//! characters already have a codepoint and which are private use.

mod block;
mod character;
mod codepoint;
pub mod glyph;

pub use block::{block_of, is_private_use, is_valid_character, Block, BLOCKS};
pub use character::{Character, CharacterModel, ModelError, Reading};
pub use codepoint::Codepoint;
pub use glyph::{
    BasicComponent, Compound, CompoundParameters, DerivedComponent, Glyph, Identity, StrokeBlock,
};
