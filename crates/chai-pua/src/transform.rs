//! Conversion of resolved IDS nodes into output glyphs.

use chai_ids_ast::Operator;
use chai_repertoire::{BasicComponent, Codepoint, Compound, DerivedComponent, Glyph, Identity};

/// An IDS node after every operand has a codepoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// The character is its own irreducible shape.
    Basic { tags: Vec<char> },
    /// Variant form of `source`.
    Derived { source: Codepoint, tags: Vec<char> },
    /// Same shape as `source`.
    Identity { source: Codepoint, tags: Vec<char> },
    Compound {
        operator: Operator,
        operands: Vec<Codepoint>,
        tags: Vec<char>,
    },
}

fn render_tags(tags: Vec<char>) -> Vec<String> {
    tags.into_iter().map(String::from).collect()
}

impl From<Resolved> for Glyph {
    fn from(resolved: Resolved) -> Self {
        match resolved {
            Resolved::Basic { tags } => Glyph::BasicComponent(BasicComponent {
                tags: render_tags(tags),
                strokes: Vec::new(),
            }),
            Resolved::Derived { source, tags } => Glyph::DerivedComponent(DerivedComponent {
                tags: render_tags(tags),
                source,
                strokes: Vec::new(),
            }),
            Resolved::Identity { source, tags } => Glyph::Identity(Identity {
                tags: render_tags(tags),
                source,
            }),
            Resolved::Compound {
                operator,
                operands,
                tags,
            } => {
                let mut compound = Compound::new(operator, operands);
                compound.tags = render_tags(tags);
                Glyph::Compound(compound)
            }
        }
    }
}
