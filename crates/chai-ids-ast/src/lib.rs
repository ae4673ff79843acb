// Allow unwrap in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! IDS tree types.
//!
//! This crate contains the parse result of an IDS expression, the operator
//! set, and the tag-free `Shape` projection used as a structural
//! deduplication key. `Display` on every type writes IDS text that the
//! parser reads back into the same tree.

mod operator;
mod tree;

pub use operator::Operator;
pub use tree::{Ids, IdsComponent, IdsCompound, Shape};
