//! Structural operators (Ideographic Description Characters).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ideographic Description Character.
///
/// The first twelve are the Unicode 3.0 IDCs (U+2FF0..=U+2FFB); the last four
/// were added in Unicode 15.1. Only `⿲` and `⿳` take three operands.
///
/// Serialized as the character itself, e.g. `"⿰"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Operator {
    /// `⿰` left to right
    #[serde(rename = "⿰")]
    LeftToRight,
    /// `⿱` above to below
    #[serde(rename = "⿱")]
    AboveToBelow,
    /// `⿲` left to middle and right
    #[serde(rename = "⿲")]
    LeftToMiddleAndRight,
    /// `⿳` above to middle and below
    #[serde(rename = "⿳")]
    AboveToMiddleAndBelow,
    /// `⿴` full surround
    #[serde(rename = "⿴")]
    FullSurround,
    /// `⿵` surround from above
    #[serde(rename = "⿵")]
    SurroundFromAbove,
    /// `⿶` surround from below
    #[serde(rename = "⿶")]
    SurroundFromBelow,
    /// `⿷` surround from left
    #[serde(rename = "⿷")]
    SurroundFromLeft,
    /// `⿸` surround from upper left
    #[serde(rename = "⿸")]
    SurroundFromUpperLeft,
    /// `⿹` surround from upper right
    #[serde(rename = "⿹")]
    SurroundFromUpperRight,
    /// `⿺` surround from lower left
    #[serde(rename = "⿺")]
    SurroundFromLowerLeft,
    /// `⿻` overlaid
    #[serde(rename = "⿻")]
    Overlaid,
    /// `⿼` surround from right
    #[serde(rename = "⿼")]
    SurroundFromRight,
    /// `⿽` surround from lower right
    #[serde(rename = "⿽")]
    SurroundFromLowerRight,
    /// `⿾` horizontal reflection
    #[serde(rename = "⿾")]
    HorizontalReflection,
    /// `⿿` rotation
    #[serde(rename = "⿿")]
    Rotation,
}

impl Operator {
    /// All operators in codepoint order.
    pub const ALL: [Operator; 16] = [
        Operator::LeftToRight,
        Operator::AboveToBelow,
        Operator::LeftToMiddleAndRight,
        Operator::AboveToMiddleAndBelow,
        Operator::FullSurround,
        Operator::SurroundFromAbove,
        Operator::SurroundFromBelow,
        Operator::SurroundFromLeft,
        Operator::SurroundFromUpperLeft,
        Operator::SurroundFromUpperRight,
        Operator::SurroundFromLowerLeft,
        Operator::Overlaid,
        Operator::SurroundFromRight,
        Operator::SurroundFromLowerRight,
        Operator::HorizontalReflection,
        Operator::Rotation,
    ];

    /// The Ideographic Description Character for this operator.
    pub fn as_char(self) -> char {
        // ALL is in codepoint order starting at U+2FF0
        match char::from_u32(0x2FF0 + self as u32) {
            Some(c) => c,
            None => unreachable!("operator discriminants stay below 16"),
        }
    }

    /// Look up the operator for an Ideographic Description Character.
    pub fn from_char(c: char) -> Option<Operator> {
        let index = (c as u32).checked_sub(0x2FF0)?;
        Operator::ALL.get(index as usize).copied()
    }

    /// Number of operands this operator takes.
    pub fn arity(self) -> usize {
        if self.is_ternary() {
            3
        } else {
            2
        }
    }

    /// `⿲` and `⿳` are the only three-operand operators.
    pub fn is_ternary(self) -> bool {
        matches!(
            self,
            Operator::LeftToMiddleAndRight | Operator::AboveToMiddleAndBelow
        )
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_round_trip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_char(op.as_char()), Some(op));
        }
        assert_eq!(Operator::LeftToRight.as_char(), '⿰');
        assert_eq!(Operator::Rotation.as_char(), '⿿');
    }

    #[test]
    fn test_every_lexed_operator_is_known() {
        for c in '\u{2FF0}'..='\u{2FFF}' {
            let source = c.to_string();
            let tokens = chai_ids_lexer::tokenize(&source).unwrap();
            assert_eq!(tokens[0].0, chai_ids_lexer::Token::Operator(c));
            assert!(Operator::from_char(c).is_some(), "{:?}", c);
        }
    }

    #[test]
    fn test_non_operator_chars() {
        assert_eq!(Operator::from_char('木'), None);
        assert_eq!(Operator::from_char('\u{2FEF}'), None);
        assert_eq!(Operator::from_char('\u{3000}'), None);
    }

    #[test]
    fn test_arity() {
        assert_eq!(Operator::LeftToMiddleAndRight.arity(), 3);
        assert_eq!(Operator::AboveToMiddleAndBelow.arity(), 3);
        let binary = Operator::ALL.iter().filter(|op| op.arity() == 2).count();
        assert_eq!(binary, 14);
    }

    #[test]
    fn test_serde_uses_the_character() {
        let json = serde_json::to_string(&Operator::AboveToBelow).unwrap();
        assert_eq!(json, "\"⿱\"");
        let op: Operator = serde_json::from_str("\"⿺\"").unwrap();
        assert_eq!(op, Operator::SurroundFromLowerLeft);
    }
}
