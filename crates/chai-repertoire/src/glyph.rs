//! Glyph representations.
//!
//! A glyph describes one attested form of a character. Serialized with a
//! `type` discriminator:
//!
//! ```json
//! { "type": "compound", "operator": "⿰", "operandList": [26408, 23376] }
//! ```

use crate::Codepoint;
use chai_ids_ast::Operator;
use serde::{Deserialize, Serialize};

/// One form of a character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Glyph {
    /// Irreducible shape described only by its strokes.
    BasicComponent(BasicComponent),
    /// Shape derived from another component.
    DerivedComponent(DerivedComponent),
    /// Component assembled from other characters like a compound.
    SplicedComponent(Compound),
    /// Same shape as another character.
    Identity(Identity),
    /// Operator over positioned operand characters.
    Compound(Compound),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicComponent {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Stroke data, carried through unchanged.
    #[serde(default)]
    pub strokes: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedComponent {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    pub source: Codepoint,
    #[serde(default)]
    pub strokes: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    pub source: Codepoint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compound {
    pub operator: Operator,
    #[serde(rename = "operandList")]
    pub operand_list: Vec<Codepoint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Explicit stacking order, e.g. an enclosing operand drawn after its content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Vec<StrokeBlock>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<CompoundParameters>,
}

/// One entry of a compound's drawing order: `strokes` strokes of operand `index`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeBlock {
    pub index: u32,
    pub strokes: u32,
}

/// Geometry hints for compound layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CompoundParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap3: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale3: Option<f64>,
}

impl Compound {
    pub fn new(operator: Operator, operand_list: Vec<Codepoint>) -> Self {
        Self {
            operator,
            operand_list,
            tags: Vec::new(),
            order: None,
            parameters: None,
        }
    }
}

impl Glyph {
    /// The compound structure, for `compound` glyphs only.
    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Glyph::Compound(compound) => Some(compound),
            _ => None,
        }
    }

    pub fn tags(&self) -> &[String] {
        match self {
            Glyph::BasicComponent(g) => &g.tags,
            Glyph::DerivedComponent(g) => &g.tags,
            Glyph::SplicedComponent(g) | Glyph::Compound(g) => &g.tags,
            Glyph::Identity(g) => &g.tags,
        }
    }

    /// Every character this glyph refers to.
    pub fn references(&self) -> Vec<Codepoint> {
        match self {
            Glyph::BasicComponent(_) => Vec::new(),
            Glyph::DerivedComponent(g) => vec![g.source],
            Glyph::Identity(g) => vec![g.source],
            Glyph::SplicedComponent(g) | Glyph::Compound(g) => g.operand_list.clone(),
        }
    }
}
