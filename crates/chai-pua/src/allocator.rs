//! Private use codepoint allocation.
//!
//! The allocator walks parsed IDS trees, gives every alias and every nested
//! sub-structure without a codepoint a synthetic one, and records the new
//! characters it minted.
//!
//! # Deduplication
//!
//! - Aliases key by their text: `{yao}` in two characters is one component.
//! - Nested compounds key by their tag-free *pre-resolution* shape. Two
//!   occurrences share a codepoint only when written identically; a
//!   structure spelled with different aliases gets its own codepoint even if
//!   it would resolve to the same operands.
//!
//! The table is seeded from the existing repertoire, so re-running over
//! already processed input mints nothing.
//!
//! # Determinism
//!
//! Operands are resolved left to right and children before their parent,
//! so identical input over an identical seed yields identical codepoints.

use crate::error::{AllocatorError, Result};
use crate::ranges::{Family, COMPONENT_RANGE, COMPOUND_RANGE};
use crate::suffix::suffix;
use crate::transform::Resolved;
use chai_ids_ast::{Ids, IdsComponent, IdsCompound, Shape};
use chai_repertoire::{
    is_private_use, is_valid_character, BasicComponent, Character, Codepoint, Glyph,
};
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::{debug, info};

/// Characters appended, in order, to a taken name: `名之一`, `名之二`, …
pub const DISAMBIGUATORS: [char; 10] = ['一', '二', '三', '四', '五', '六', '七', '八', '九', '十'];

/// Key under which an allocated character is remembered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DedupKey {
    /// Component alias text, e.g. `yao` or `木变`.
    Alias(String),
    /// Tag-free shape of a compound sub-structure.
    Shape(Shape),
}

impl fmt::Display for DedupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DedupKey::Alias(alias) => write!(f, "alias {:?}", alias),
            DedupKey::Shape(shape) => write!(f, "shape {}", shape),
        }
    }
}

/// Allocation state for one run.
///
/// Owns the counters, the dedup table and the set of used names; nothing
/// else mutates them.
#[derive(Debug)]
pub struct PuaAllocator {
    component_counter: u32,
    compound_counter: u32,
    dedup: IndexMap<DedupKey, Codepoint>,
    used_names: HashSet<String>,
    minted: IndexMap<Codepoint, Character>,
}

/// Shape an existing character was written as before resolution.
///
/// A private use operand stands for what minted it: a component for its
/// alias name, a compound for its own shape. Any other operand is itself.
fn seed_shape(
    unicode: Codepoint,
    known: &HashMap<Codepoint, &Character>,
    visiting: &mut HashSet<Codepoint>,
) -> Option<Shape> {
    let Some(character) = known.get(&unicode).filter(|_| is_private_use(unicode)) else {
        return unicode.as_char().map(|c| Shape::Leaf(c.to_string()));
    };
    // Cyclic references
    if !visiting.insert(unicode) {
        return None;
    }
    let shape = match character.glyphs.first()? {
        Glyph::Compound(compound) => {
            let operands = compound
                .operand_list
                .iter()
                .map(|&operand| seed_shape(operand, known, visiting))
                .collect::<Option<Vec<Shape>>>()?;
            Some(Shape::Compound {
                operator: compound.operator,
                operands,
            })
        }
        _ => character.name.clone().map(Shape::Leaf),
    };
    visiting.remove(&unicode);
    shape
}

/// Dedup key an existing private use character is known by.
///
/// Compounds key by their shape; anything else by its name.
fn seed_key(character: &Character, known: &HashMap<Codepoint, &Character>) -> Option<DedupKey> {
    match character.glyphs.first()? {
        Glyph::Compound(_) => {
            seed_shape(character.unicode, known, &mut HashSet::new()).map(DedupKey::Shape)
        }
        _ => character.name.clone().map(DedupKey::Alias),
    }
}

impl PuaAllocator {
    /// Seed an allocator from the existing repertoire.
    ///
    /// - every existing name is marked used
    /// - each counter starts past the highest codepoint already taken in its
    ///   reserved range
    /// - every existing private use character with a usable key is entered in
    ///   the dedup table
    ///
    /// Two records may share a key when at most one of them lies in a
    /// reserved range; the reserved one, else the first, keeps the key.
    ///
    /// # Errors
    ///
    /// `KeyCollision` if two existing characters in the reserved ranges
    /// claim the same dedup key.
    pub fn new(repertoire: &[Character]) -> Result<Self> {
        let mut component_counter = *COMPONENT_RANGE.start();
        let mut compound_counter = *COMPOUND_RANGE.start();
        let mut dedup: IndexMap<DedupKey, Codepoint> = IndexMap::new();
        let mut used_names = HashSet::new();
        let known: HashMap<Codepoint, &Character> =
            repertoire.iter().map(|c| (c.unicode, c)).collect();

        for character in repertoire {
            if let Some(name) = &character.name {
                used_names.insert(name.clone());
            }

            let value = character.unicode.value();
            match Family::of(character.unicode) {
                Some(Family::Component) => component_counter = component_counter.max(value + 1),
                Some(Family::Compound) => compound_counter = compound_counter.max(value + 1),
                None => {}
            }

            if !is_private_use(character.unicode) {
                continue;
            }
            let Some(key) = seed_key(character, &known) else {
                debug!("{} has no usable dedup key, not seeded", character.unicode);
                continue;
            };
            let second = character.unicode;
            match dedup.get(&key).copied() {
                None => {
                    dedup.insert(key, second);
                }
                Some(first) => match (Family::of(first), Family::of(second)) {
                    (Some(_), Some(_)) => {
                        return Err(AllocatorError::KeyCollision {
                            key: key.to_string(),
                            first,
                            second,
                        });
                    }
                    // A minted record wins over an input character of the same shape
                    (None, Some(_)) => {
                        debug!("{} keyed by {} instead of {}", key, second, first);
                        dedup.insert(key, second);
                    }
                    _ => debug!("{} keyed by {}, {} not seeded", key, first, second),
                },
            }
        }

        info!("Starting component PUA: {:X}", component_counter);
        info!("Starting compound PUA: {:X}", compound_counter);

        Ok(Self {
            component_counter,
            compound_counter,
            dedup,
            used_names,
            minted: IndexMap::new(),
        })
    }

    /// Codepoint the next minted component will get.
    pub fn next_component(&self) -> Codepoint {
        Codepoint(self.component_counter)
    }

    /// Codepoint the next minted compound will get.
    pub fn next_compound(&self) -> Codepoint {
        Codepoint(self.compound_counter)
    }

    pub fn components_minted(&self) -> u32 {
        self.count_minted(Family::Component)
    }

    pub fn compounds_minted(&self) -> u32 {
        self.count_minted(Family::Compound)
    }

    fn count_minted(&self, family: Family) -> u32 {
        let count = self
            .minted
            .keys()
            .filter(|&&unicode| Family::of(unicode) == Some(family))
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    /// Keep a reserved codepoint that is about to be emitted from being
    /// minted again.
    ///
    /// Codepoints outside the reserved ranges are ignored.
    pub fn reserve(&mut self, unicode: Codepoint) {
        let counter = match Family::of(unicode) {
            Some(Family::Component) => &mut self.component_counter,
            Some(Family::Compound) => &mut self.compound_counter,
            None => return,
        };
        if unicode.value() >= *counter {
            *counter = unicode.value() + 1;
            debug!("{} reserved by input, next codepoint {:X}", unicode, *counter);
        }
    }

    /// Characters minted so far, in allocation order.
    pub fn minted(&self) -> impl Iterator<Item = &Character> {
        self.minted.values()
    }

    /// Resolve one description of `character` into its output glyph.
    pub fn resolve(&mut self, ids: &Ids, character: char) -> Result<Glyph> {
        let resolved = match ids {
            Ids::Component(component) => self.resolve_leaf(component, character)?,
            Ids::Compound(compound) => self.resolve_compound(compound, &character.to_string())?,
        };
        Ok(Glyph::from(resolved))
    }

    /// Resolve a description that is a single leaf.
    ///
    /// - the character itself → its own basic component
    /// - a `X变` variant alias → derived from the variant's component
    /// - anything else → identical to the (possibly new) component it names
    ///
    /// Aliases resolve through `get_or_create_component` exactly as they do
    /// in operand position, so one alias always names one codepoint.
    pub fn resolve_leaf(&mut self, component: &IdsComponent, character: char) -> Result<Resolved> {
        let tags = component.tags.clone();
        if component.as_char() == Some(character) {
            return Ok(Resolved::Basic { tags });
        }
        let source = self.get_or_create_component(&component.content)?;
        if component.variant_base().is_some() {
            Ok(Resolved::Derived { source, tags })
        } else {
            Ok(Resolved::Identity { source, tags })
        }
    }

    /// Codepoint for a component alias, minting one if needed.
    ///
    /// An encoded single character is its own codepoint. Any other alias is
    /// looked up by its text and, when new, gets the next component
    /// codepoint and a name derived from the alias.
    pub fn get_or_create_component(&mut self, alias: &str) -> Result<Codepoint> {
        let mut chars = alias.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if is_valid_character(c) {
                return Ok(Codepoint::from(c));
            }
        }

        let key = DedupKey::Alias(alias.to_string());
        if let Some(&existing) = self.dedup.get(&key) {
            return Ok(existing);
        }

        let unicode = self.take(Family::Component)?;
        let name = self.uniquify(alias)?;
        debug!("{} component {:?} for alias {:?}", unicode, name, alias);

        let character = Character::new(unicode)
            .with_name(name)
            .with_glyphs(vec![Glyph::BasicComponent(BasicComponent::default())]);
        self.dedup.insert(key, unicode);
        self.minted.insert(unicode, character);
        Ok(unicode)
    }

    /// Resolve a compound: every operand becomes a codepoint.
    ///
    /// Nested compounds not seen before are named `<name_hint>字<suffix>`,
    /// resolved recursively under that name, then minted.
    pub fn resolve_compound(&mut self, compound: &IdsCompound, name_hint: &str) -> Result<Resolved> {
        let operands = self.resolve_operands(compound, name_hint)?;
        Ok(Resolved::Compound {
            operator: compound.operator,
            operands,
            tags: compound.tags.clone(),
        })
    }

    fn resolve_operands(&mut self, compound: &IdsCompound, name_hint: &str) -> Result<Vec<Codepoint>> {
        let mut operands = Vec::with_capacity(compound.operands.len());
        for (position, operand) in compound.operands.iter().enumerate() {
            let codepoint = match operand {
                Ids::Component(component) => self.get_or_create_component(&component.content)?,
                Ids::Compound(nested) => {
                    let raw_name = format!("{}字{}", name_hint, suffix(compound.operator, position));
                    self.get_or_create_compound(nested, &raw_name)?
                }
            };
            operands.push(codepoint);
        }
        Ok(operands)
    }

    fn get_or_create_compound(&mut self, nested: &IdsCompound, raw_name: &str) -> Result<Codepoint> {
        let key = DedupKey::Shape(nested.shape());
        if let Some(&existing) = self.dedup.get(&key) {
            return Ok(existing);
        }

        let resolved = self.resolve_compound(nested, raw_name)?;
        let unicode = self.take(Family::Compound)?;
        let name = self.uniquify(raw_name)?;
        debug!("{} compound {:?} for {}", unicode, name, nested);

        let character = Character::new(unicode)
            .with_name(name)
            .with_glyphs(vec![Glyph::from(resolved)]);
        self.dedup.insert(key, unicode);
        self.minted.insert(unicode, character);
        Ok(unicode)
    }

    /// Claim the next codepoint of `family`.
    fn take(&mut self, family: Family) -> Result<Codepoint> {
        let counter = match family {
            Family::Component => &mut self.component_counter,
            Family::Compound => &mut self.compound_counter,
        };
        let current = *counter;
        let next = Codepoint(current);
        if !family.range().contains(&current) {
            return Err(AllocatorError::RangeExhausted { family, next });
        }
        *counter += 1;
        Ok(next)
    }

    /// Register and return an unused variant of `raw`.
    ///
    /// `raw` itself if free, else the first free of `raw之一` … `raw之十`.
    pub fn uniquify(&mut self, raw: &str) -> Result<String> {
        let candidates = std::iter::once(raw.to_string())
            .chain(DISAMBIGUATORS.iter().map(|d| format!("{}之{}", raw, d)));
        for candidate in candidates {
            if !self.used_names.contains(&candidate) {
                self.used_names.insert(candidate.clone());
                return Ok(candidate);
            }
        }
        Err(AllocatorError::NamesExhausted {
            name: raw.to_string(),
            tried: DISAMBIGUATORS.len(),
        })
    }

    /// Consume the allocator, returning the minted characters in allocation
    /// order.
    pub fn finish(self) -> Result<Vec<Character>> {
        info!("Component PUA: {}", self.components_minted());
        info!("Compound PUA: {}", self.compounds_minted());
        let minted: Vec<Character> = self.minted.into_values().collect();
        check_unique_names(&minted)?;
        Ok(minted)
    }
}

/// Fail if two records carry the same name.
pub fn check_unique_names(characters: &[Character]) -> Result<()> {
    let mut seen: HashMap<&str, Codepoint> = HashMap::new();
    for character in characters {
        let Some(name) = character.name.as_deref() else {
            continue;
        };
        if let Some(&first) = seen.get(name) {
            return Err(AllocatorError::DuplicateName {
                name: name.to_string(),
                first,
                second: character.unicode,
            });
        }
        seen.insert(name, character.unicode);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniquify_free_name() {
        let mut allocator = PuaAllocator::new(&[]).unwrap();
        assert_eq!(allocator.uniquify("李字头").unwrap(), "李字头");
    }

    #[test]
    fn test_uniquify_appends_disambiguators_in_order() {
        let mut allocator = PuaAllocator::new(&[]).unwrap();
        assert_eq!(allocator.uniquify("名").unwrap(), "名");
        assert_eq!(allocator.uniquify("名").unwrap(), "名之一");
        assert_eq!(allocator.uniquify("名").unwrap(), "名之二");
    }

    #[test]
    fn test_uniquify_respects_existing_names() {
        let repertoire = vec![
            Character::new(Codepoint::from('李')).with_name("名"),
            Character::new(Codepoint::from('木')).with_name("名之一"),
        ];
        let mut allocator = PuaAllocator::new(&repertoire).unwrap();
        assert_eq!(allocator.uniquify("名").unwrap(), "名之二");
    }

    #[test]
    fn test_uniquify_exhaustion_is_fatal() {
        let mut allocator = PuaAllocator::new(&[]).unwrap();
        for _ in 0..=DISAMBIGUATORS.len() {
            allocator.uniquify("名").unwrap();
        }
        assert_eq!(
            allocator.uniquify("名"),
            Err(AllocatorError::NamesExhausted {
                name: "名".to_string(),
                tried: 10
            })
        );
    }

    #[test]
    fn test_take_refuses_past_range_end() {
        let repertoire = vec![Character::new(Codepoint(*COMPONENT_RANGE.end())).with_name("last")];
        let mut allocator = PuaAllocator::new(&repertoire).unwrap();
        assert_eq!(allocator.next_component(), Codepoint(0xE400));
        assert!(matches!(
            allocator.get_or_create_component("yao"),
            Err(AllocatorError::RangeExhausted {
                family: Family::Component,
                ..
            })
        ));
    }

    #[test]
    fn test_check_unique_names() {
        let ok = vec![
            Character::new(Codepoint(0xE200)).with_name("a"),
            Character::new(Codepoint(0xE201)).with_name("b"),
            Character::new(Codepoint::from('李')),
        ];
        assert!(check_unique_names(&ok).is_ok());

        let clash = vec![
            Character::new(Codepoint(0xE200)).with_name("a"),
            Character::new(Codepoint(0xE201)).with_name("a"),
        ];
        assert_eq!(
            check_unique_names(&clash),
            Err(AllocatorError::DuplicateName {
                name: "a".to_string(),
                first: Codepoint(0xE200),
                second: Codepoint(0xE201),
            })
        );
    }
}
