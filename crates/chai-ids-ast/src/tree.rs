//! IDS trees and their tag-free structural shape.

use crate::Operator;
use chai_ids_lexer::VARIANT_MARKER;
use std::fmt;

/// Parsed IDS expression.
///
/// A leaf is a single character or an alias naming a part with no codepoint
/// of its own; an interior node is an operator over its operands.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Ids {
    Component(IdsComponent),
    Compound(IdsCompound),
}

/// IDS leaf.
///
/// `content` is one character for a plain component, or several characters
/// for an alias (`{yao}`, or `木变` from `{木}`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdsComponent {
    pub content: String,
    pub tags: Vec<char>,
}

/// IDS interior node.
///
/// `operands.len()` always equals `operator.arity()`; the parser reads
/// exactly that many operands.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdsCompound {
    pub operator: Operator,
    pub operands: Vec<Ids>,
    pub tags: Vec<char>,
}

impl IdsComponent {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_tags(mut self, tags: Vec<char>) -> Self {
        self.tags = tags;
        self
    }

    /// The single character of a plain leaf, `None` for aliases.
    pub fn as_char(&self) -> Option<char> {
        let mut chars = self.content.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }

    /// For a `X变` alias produced by `{X}`, the base character `X`.
    pub fn variant_base(&self) -> Option<char> {
        let mut chars = self.content.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(base), Some(VARIANT_MARKER), None) => Some(base),
            _ => None,
        }
    }
}

impl IdsCompound {
    pub fn new(operator: Operator, operands: Vec<Ids>) -> Self {
        Self {
            operator,
            operands,
            tags: Vec::new(),
        }
    }

    pub fn with_tags(mut self, tags: Vec<char>) -> Self {
        self.tags = tags;
        self
    }

    /// Tag-free structural shape of this compound.
    pub fn shape(&self) -> Shape {
        Shape::Compound {
            operator: self.operator,
            operands: self.operands.iter().map(Ids::shape).collect(),
        }
    }
}

impl Ids {
    /// Shorthand for an untagged leaf.
    pub fn leaf(content: impl Into<String>) -> Self {
        Ids::Component(IdsComponent::new(content))
    }

    /// Shorthand for an untagged compound.
    pub fn compound(operator: Operator, operands: Vec<Ids>) -> Self {
        Ids::Compound(IdsCompound::new(operator, operands))
    }

    pub fn tags(&self) -> &[char] {
        match self {
            Ids::Component(component) => &component.tags,
            Ids::Compound(compound) => &compound.tags,
        }
    }

    /// Tag-free structural shape, used as a deduplication key.
    pub fn shape(&self) -> Shape {
        match self {
            Ids::Component(component) => Shape::Leaf(component.content.clone()),
            Ids::Compound(compound) => compound.shape(),
        }
    }
}

/// Structural projection of an IDS tree with every tag removed.
///
/// Two sub-trees share a shape only if they are written identically; no
/// normalization of aliases or resolved codepoints takes place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Shape {
    Leaf(String),
    Compound {
        operator: Operator,
        operands: Vec<Shape>,
    },
}

/// Write a leaf the way the lexer reads it back.
fn write_content(f: &mut fmt::Formatter<'_>, content: &str) -> fmt::Result {
    let mut chars = content.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(c), None, _) => write!(f, "{}", c),
        (Some(base), Some(VARIANT_MARKER), None) => write!(f, "{{{}}}", base),
        _ => write!(f, "{{{}}}", content),
    }
}

fn write_tags(f: &mut fmt::Formatter<'_>, tags: &[char]) -> fmt::Result {
    if tags.is_empty() {
        return Ok(());
    }
    write!(f, "[")?;
    for tag in tags {
        write!(f, "{}", tag)?;
    }
    write!(f, "]")
}

impl fmt::Display for IdsComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_content(f, &self.content)?;
        write_tags(f, &self.tags)
    }
}

impl fmt::Display for IdsCompound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.operator)?;
        for operand in &self.operands {
            match operand {
                // Operand leaves carry no tags in the grammar
                Ids::Component(component) => write_content(f, &component.content)?,
                Ids::Compound(compound) => write!(f, "{}", compound)?,
            }
        }
        write_tags(f, &self.tags)
    }
}

impl fmt::Display for Ids {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ids::Component(component) => write!(f, "{}", component),
            Ids::Compound(compound) => write!(f, "{}", compound),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Leaf(content) => write_content(f, content),
            Shape::Compound { operator, operands } => {
                write!(f, "{}", operator)?;
                for operand in operands {
                    write!(f, "{}", operand)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_plain_compound() {
        let ids = Ids::compound(Operator::LeftToRight, vec![Ids::leaf("木"), Ids::leaf("子")]);
        assert_eq!(ids.to_string(), "⿰木子");
    }

    #[test]
    fn test_display_aliases_and_tags() {
        let ids = Ids::Compound(
            IdsCompound::new(
                Operator::AboveToBelow,
                vec![Ids::leaf("yao"), Ids::leaf("木变")],
            )
            .with_tags(vec!['G', 'T']),
        );
        assert_eq!(ids.to_string(), "⿱{yao}{木}[GT]");
    }

    #[test]
    fn test_display_tagged_leaf() {
        let leaf = Ids::Component(IdsComponent::new("木").with_tags(vec!['J']));
        assert_eq!(leaf.to_string(), "木[J]");
    }

    #[test]
    fn test_shape_ignores_tags() {
        let inner = IdsCompound::new(Operator::LeftToRight, vec![Ids::leaf("木"), Ids::leaf("子")]);
        let tagged = Ids::Compound(inner.clone().with_tags(vec!['G']));
        assert_eq!(Ids::Compound(inner).shape(), tagged.shape());
    }

    #[test]
    fn test_shape_of_nested_compound() {
        let ids = Ids::compound(
            Operator::LeftToRight,
            vec![
                Ids::leaf("木"),
                Ids::compound(Operator::AboveToBelow, vec![Ids::leaf("yao"), Ids::leaf("心")]),
            ],
        );
        let shape = ids.shape();
        assert_eq!(
            shape,
            Shape::Compound {
                operator: Operator::LeftToRight,
                operands: vec![
                    Shape::Leaf("木".to_string()),
                    Shape::Compound {
                        operator: Operator::AboveToBelow,
                        operands: vec![Shape::Leaf("yao".to_string()), Shape::Leaf("心".to_string())],
                    },
                ],
            }
        );
        assert_eq!(shape.to_string(), "⿰木⿱{yao}心");
    }

    #[test]
    fn test_variant_base() {
        assert_eq!(IdsComponent::new("木变").variant_base(), Some('木'));
        assert_eq!(IdsComponent::new("变").variant_base(), None);
        assert_eq!(IdsComponent::new("yao").variant_base(), None);
        assert_eq!(IdsComponent::new("木").as_char(), Some('木'));
        assert_eq!(IdsComponent::new("yao").as_char(), None);
    }
}
