//! Reserved private use sub-ranges.

use chai_repertoire::Codepoint;
use std::fmt;
use std::ops::RangeInclusive;

/// Codepoints minted for components without an encoding.
pub const COMPONENT_RANGE: RangeInclusive<u32> = 0xE200..=0xE3FF;

/// Codepoints minted for compound sub-structures.
pub const COMPOUND_RANGE: RangeInclusive<u32> = 0xF0000..=0xFFFFD;

/// Which reserved sub-range a synthetic character comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Component,
    Compound,
}

impl Family {
    pub fn range(self) -> RangeInclusive<u32> {
        match self {
            Family::Component => COMPONENT_RANGE,
            Family::Compound => COMPOUND_RANGE,
        }
    }

    /// The family whose reserved range contains `codepoint`.
    pub fn of(codepoint: Codepoint) -> Option<Family> {
        [Family::Component, Family::Compound]
            .into_iter()
            .find(|family| family.range().contains(&codepoint.value()))
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Component => write!(f, "component"),
            Family::Compound => write!(f, "compound"),
        }
    }
}
