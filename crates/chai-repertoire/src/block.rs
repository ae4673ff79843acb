//! Unicode block table for the character universe the repertoire covers.

use crate::Codepoint;

/// A named, inclusive codepoint range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub name: &'static str,
    pub start: u32,
    pub end: u32,
}

impl Block {
    const fn new(name: &'static str, start: u32, end: u32) -> Self {
        Self { name, start, end }
    }

    pub fn contains(&self, codepoint: u32) -> bool {
        (self.start..=self.end).contains(&codepoint)
    }

    /// Private use blocks hold synthetic characters.
    pub fn is_private_use(&self) -> bool {
        self.name.contains("PUA")
    }
}

/// Blocks in lookup order; the first containing block wins.
///
/// `兼容文字` precedes `PUA` so the compatibility ideographs inside
/// U+E000..=U+FFFF are not classified as private use.
pub const BLOCKS: &[Block] = &[
    Block::new("基本", 0x4E00, 0x9FFF),
    Block::new("扩展A", 0x3400, 0x4DBF),
    Block::new("扩展B", 0x20000, 0x2A6DF),
    Block::new("扩展C", 0x2A700, 0x2B73F),
    Block::new("扩展D", 0x2B740, 0x2B81F),
    Block::new("扩展E", 0x2B820, 0x2CEAF),
    Block::new("扩展F", 0x2CEB0, 0x2EBEF),
    Block::new("扩展G", 0x30000, 0x3134F),
    Block::new("扩展H", 0x31350, 0x323AF),
    Block::new("扩展I", 0x2EBF0, 0x2EE5F),
    Block::new("扩展J", 0x323B0, 0x3347F),
    Block::new("部首补充", 0x2E80, 0x2EFF),
    Block::new("康熙部首", 0x2F00, 0x2FDF),
    Block::new("符号标点", 0x3000, 0x303F),
    Block::new("笔画", 0x31C0, 0x31EF),
    Block::new("兼容文字", 0xF900, 0xFAFF),
    Block::new("西夏文", 0x17000, 0x187FF),
    Block::new("西夏文部首", 0x18800, 0x18AFF),
    Block::new("契丹小字", 0x18B00, 0x18CFF),
    Block::new("西夏文补充", 0x18D00, 0x18D7F),
    Block::new("西夏文部件补充", 0x18D80, 0x18DFF),
    Block::new("PUA", 0xE000, 0xFFFF),
    Block::new("SPUA_A", 0xF0000, 0xFFFFD),
    Block::new("SPUA_B", 0x100000, 0x10FFFD),
];

/// The block containing `codepoint`, if any.
pub fn block_of(codepoint: Codepoint) -> Option<&'static Block> {
    BLOCKS.iter().find(|block| block.contains(codepoint.value()))
}

/// Whether `c` belongs to the known character universe.
///
/// A single character in this universe already has a codepoint and never
/// needs a synthetic one.
pub fn is_valid_character(c: char) -> bool {
    block_of(Codepoint::from(c)).is_some()
}

/// Whether `codepoint` lies in a private use block.
pub fn is_private_use(codepoint: Codepoint) -> bool {
    block_of(codepoint).is_some_and(Block::is_private_use)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_lookup() {
        assert_eq!(block_of(Codepoint::from('李')).map(|b| b.name), Some("基本"));
        assert_eq!(block_of(Codepoint(0x3400)).map(|b| b.name), Some("扩展A"));
        assert_eq!(block_of(Codepoint(0x2EBF0)).map(|b| b.name), Some("扩展I"));
        assert_eq!(block_of(Codepoint::from('A')), None);
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(block_of(Codepoint(0xF900)).map(|b| b.name), Some("兼容文字"));
        assert!(!is_private_use(Codepoint(0xF900)));
        assert!(is_private_use(Codepoint(0xE200)));
    }

    #[test]
    fn test_private_use() {
        assert!(is_private_use(Codepoint(0xF0000)));
        assert!(is_private_use(Codepoint(0x10FFFD)));
        assert!(!is_private_use(Codepoint::from('木')));
        assert!(!is_private_use(Codepoint(0x41)));
    }

    #[test]
    fn test_valid_characters() {
        assert!(is_valid_character('木'));
        assert!(is_valid_character('⺮'));
        assert!(is_valid_character('㇒'));
        assert!(is_valid_character('\u{E201}'));
        assert!(!is_valid_character('y'));
        assert!(is_valid_character('变'));
    }
}
