//! Character records.

use crate::{Codepoint, Glyph};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One pronunciation of a character with its relative importance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub pinyin: String,
    pub importance: f64,
}

/// A character of the repertoire, real or private use.
///
/// Private use characters must carry a name, unique across the repertoire.
/// Fields missing from input take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub unicode: Codepoint,
    /// 通用规范汉字表 level, 0 when absent
    #[serde(default)]
    pub tygf: u8,
    /// GB2312 level, 0 when absent
    #[serde(default)]
    pub gb2312: u8,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub gf0014_id: Option<u32>,
    #[serde(default)]
    pub gf3001_id: Option<u32>,
    #[serde(default)]
    pub readings: Vec<Reading>,
    #[serde(default)]
    pub glyphs: Vec<Glyph>,
    #[serde(default)]
    pub ambiguous: bool,
}

impl Character {
    /// A record with no name, flags, readings or glyphs.
    pub fn new(unicode: Codepoint) -> Self {
        Self {
            unicode,
            tygf: 0,
            gb2312: 0,
            name: None,
            gf0014_id: None,
            gf3001_id: None,
            readings: Vec::new(),
            glyphs: Vec::new(),
            ambiguous: false,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_glyphs(mut self, glyphs: Vec<Glyph>) -> Self {
        self.glyphs = glyphs;
        self
    }
}

/// Storage row for a character: readings and glyphs are JSON text and
/// `ambiguous` is 0 or 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterModel {
    pub unicode: u32,
    pub tygf: u8,
    pub gb2312: u8,
    pub readings: String,
    pub glyphs: String,
    pub name: Option<String>,
    pub gf0014_id: Option<u32>,
    pub gf3001_id: Option<u32>,
    pub ambiguous: u8,
}

#[derive(Debug, Error)]
#[error("failed to encode {field} of {unicode}: {source}")]
pub struct ModelError {
    pub unicode: Codepoint,
    pub field: &'static str,
    #[source]
    pub source: serde_json::Error,
}

impl TryFrom<&Character> for CharacterModel {
    type Error = ModelError;

    fn try_from(character: &Character) -> Result<Self, Self::Error> {
        let encode = |field: &'static str, result: serde_json::Result<String>| {
            result.map_err(|source| ModelError {
                unicode: character.unicode,
                field,
                source,
            })
        };
        Ok(Self {
            unicode: character.unicode.value(),
            tygf: character.tygf,
            gb2312: character.gb2312,
            readings: encode("readings", serde_json::to_string(&character.readings))?,
            glyphs: encode("glyphs", serde_json::to_string(&character.glyphs))?,
            name: character.name.clone(),
            gf0014_id: character.gf0014_id,
            gf3001_id: character.gf3001_id,
            ambiguous: u8::from(character.ambiguous),
        })
    }
}
