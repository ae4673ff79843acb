//! Reader for IDS text lines.
//!
//! ```text
//! U+674E	李	^⿰木子$(GHJKTV)
//! ```
//!
//! Fields are tab separated: codepoint, character, then one or more
//! descriptions. A description may carry a leading `^` and a trailing
//! `$...` source tag, both stripped. Fields starting with `*` are notes.

use chai_repertoire::{block_of, Codepoint};
use thiserror::Error;

/// One character and the raw text of its descriptions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdsLine {
    pub unicode: Codepoint,
    pub character: char,
    pub descriptions: Vec<String>,
}

/// Consistency error for a whole line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("expected codepoint, character and descriptions separated by tabs")]
    Malformed,

    #[error("codepoint {0:?} does not start with U+")]
    BadPrefix(String),

    #[error("codepoint {0:?} is not hexadecimal")]
    BadHex(String),

    #[error("{0} is outside the known character blocks")]
    UnknownCodepoint(Codepoint),

    #[error("{declared} does not decode to {found:?}")]
    Mismatch { declared: Codepoint, found: String },

    #[error("{0} has no description")]
    NoDescription(Codepoint),
}

/// Strip the `^` start marker and the `$` source tag.
fn strip_description(field: &str) -> &str {
    let field = field.trim();
    let field = field.strip_prefix('^').unwrap_or(field);
    match field.find('$') {
        Some(end) => &field[..end],
        None => field,
    }
}

/// Read one line. Blank lines and `#` comments yield `Ok(None)`.
pub fn read_line(line: &str) -> Result<Option<IdsLine>, LineError> {
    let line = line.trim_end_matches(&['\r', '\n'][..]);
    if line.trim().is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut fields = line.split('\t');
    let code_field = fields.next().unwrap_or_default().trim();
    let char_field = fields.next().ok_or(LineError::Malformed)?.trim();

    let hex = code_field
        .strip_prefix("U+")
        .ok_or_else(|| LineError::BadPrefix(code_field.to_string()))?;
    if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(LineError::BadHex(code_field.to_string()));
    }
    let value =
        u32::from_str_radix(hex, 16).map_err(|_| LineError::BadHex(code_field.to_string()))?;
    let unicode = Codepoint(value);

    let character = unicode
        .as_char()
        .filter(|_| block_of(unicode).is_some())
        .ok_or(LineError::UnknownCodepoint(unicode))?;

    let mut chars = char_field.chars();
    if (chars.next(), chars.next()) != (Some(character), None) {
        return Err(LineError::Mismatch {
            declared: unicode,
            found: char_field.to_string(),
        });
    }

    let descriptions: Vec<String> = fields
        .filter(|field| !field.starts_with('*'))
        .map(strip_description)
        .filter(|description| !description.is_empty())
        .map(str::to_string)
        .collect();
    if descriptions.is_empty() {
        return Err(LineError::NoDescription(unicode));
    }

    Ok(Some(IdsLine {
        unicode,
        character,
        descriptions,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_line() {
        let line = read_line("U+674E\t李\t⿰木子").unwrap().unwrap();
        assert_eq!(
            line,
            IdsLine {
                unicode: Codepoint(0x674E),
                character: '李',
                descriptions: vec!["⿰木子".to_string()],
            }
        );
    }

    #[test]
    fn test_markers_and_source_tags_are_stripped() {
        let line = read_line("U+674E\t李\t^⿰木子$(GHJKTV)\t^⿱木子$(X)\r\n")
            .unwrap()
            .unwrap();
        assert_eq!(line.descriptions, vec!["⿰木子", "⿱木子"]);
    }

    #[test]
    fn test_notes_are_ignored() {
        let line = read_line("U+674E\t李\t⿰木子\t*note").unwrap().unwrap();
        assert_eq!(line.descriptions.len(), 1);
    }

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!(read_line(""), Ok(None));
        assert_eq!(read_line("   "), Ok(None));
        assert_eq!(read_line("# IDS.TXT"), Ok(None));
    }

    #[test]
    fn test_consistency_errors() {
        assert_eq!(read_line("U+674E"), Err(LineError::Malformed));
        assert_eq!(
            read_line("674E\t李\t⿰木子"),
            Err(LineError::BadPrefix("674E".to_string()))
        );
        assert_eq!(
            read_line("U+67G4\t李\t⿰木子"),
            Err(LineError::BadHex("U+67G4".to_string()))
        );
        assert_eq!(
            read_line("U+0041\tA\tA"),
            Err(LineError::UnknownCodepoint(Codepoint(0x41)))
        );
        assert_eq!(
            read_line("U+674E\t木\t⿰木子"),
            Err(LineError::Mismatch {
                declared: Codepoint(0x674E),
                found: "木".to_string()
            })
        );
        assert_eq!(
            read_line("U+674E\t李\t$(G)"),
            Err(LineError::NoDescription(Codepoint(0x674E)))
        );
    }
}
