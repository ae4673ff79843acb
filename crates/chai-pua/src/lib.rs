// Allow unwrap in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Private use codepoint allocation for IDS decompositions.
//!
//! Parsed IDS trees refer to parts by alias (`{yao}`) and nest anonymous
//! sub-structures (`⿰木⿱日一`). This crate gives each such part a stable
//! private use codepoint and a readable name, substitutes the codepoints
//! into the tree, and emits the resulting character records.
//!
//! - `allocator`: `PuaAllocator`, the seeded dedup table and counters
//! - `suffix`: positional labels used in generated names
//! - `transform`: resolved nodes to output glyphs
//! - `ids_file`: `U+XXXX<TAB>char<TAB>desc…` line reader
//! - `run`: a full batch with per-line error reporting

pub mod allocator;
pub mod error;
pub mod ids_file;
pub mod ranges;
pub mod run;
pub mod suffix;
pub mod transform;

pub use allocator::{check_unique_names, DedupKey, PuaAllocator, DISAMBIGUATORS};
pub use error::{AllocatorError, Result};
pub use ids_file::{read_line, IdsLine, LineError};
pub use ranges::{Family, COMPONENT_RANGE, COMPOUND_RANGE};
pub use run::{run, Failure, RunOptions, RunOutput, RunReport};
pub use suffix::suffix;
pub use transform::Resolved;
