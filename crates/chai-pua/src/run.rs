//! One allocation run over a batch of IDS lines.

use crate::allocator::{check_unique_names, PuaAllocator};
use crate::error::Result;
use crate::ids_file::read_line;
use chai_ids_parser::parse_ids;
use chai_repertoire::{Character, Codepoint};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::{info, warn};

/// Options for a run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Re-derive glyphs for characters already in the repertoire and emit
    /// them as updates instead of skipping them.
    pub update_existing: bool,
}

/// A line or description that was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    /// 1-based line number in the input
    pub line: usize,
    pub character: Option<char>,
    /// Description text, absent when the whole line was rejected
    pub description: Option<String>,
    pub reason: String,
}

/// Counts of everything a run read, produced, or skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub lines: usize,
    pub characters: usize,
    pub skipped_existing: usize,
    pub emitted: usize,
    pub descriptions: usize,
    pub resolved: usize,
    pub failed_descriptions: usize,
    pub failed_lines: usize,
    pub components_minted: u32,
    pub compounds_minted: u32,
    pub failures: Vec<Failure>,
}

impl RunReport {
    fn line_failure(&mut self, line: usize, character: Option<char>, reason: String) {
        warn!("line {}: {}", line, reason);
        self.failed_lines += 1;
        self.failures.push(Failure {
            line,
            character,
            description: None,
            reason,
        });
    }

    fn description_failure(&mut self, line: usize, character: char, description: &str, reason: String) {
        warn!("line {} {} {:?}: {}", line, character, description, reason);
        self.failed_descriptions += 1;
        self.failures.push(Failure {
            line,
            character: Some(character),
            description: Some(description.to_string()),
            reason,
        });
    }
}

/// Records to persist plus the report.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Input characters in input order, then minted characters in
    /// allocation order.
    pub characters: Vec<Character>,
    pub report: RunReport,
}

/// Allocate codepoints for every description in `lines`.
///
/// Bad lines and descriptions are reported and skipped. A character whose
/// descriptions all fail is not emitted. Reserved range codepoints named by
/// input lines are never minted.
///
/// # Errors
///
/// Any allocator invariant violation aborts the run.
pub fn run<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    repertoire: &[Character],
    options: &RunOptions,
) -> Result<RunOutput> {
    let lines: Vec<&str> = lines.into_iter().collect();
    let mut allocator = PuaAllocator::new(repertoire)?;
    // Input characters in the reserved ranges are emitted as they are
    for line in lines.iter().filter_map(|text| read_line(text).ok().flatten()) {
        allocator.reserve(line.unicode);
    }
    let existing: HashMap<Codepoint, &Character> =
        repertoire.iter().map(|c| (c.unicode, c)).collect();
    let mut seen: HashSet<Codepoint> = HashSet::new();
    let mut report = RunReport::default();
    let mut characters = Vec::new();

    for (index, text) in lines.into_iter().enumerate() {
        let number = index + 1;
        report.lines += 1;

        let line = match read_line(text) {
            Ok(Some(line)) => line,
            Ok(None) => continue,
            Err(err) => {
                report.line_failure(number, None, err.to_string());
                continue;
            }
        };
        report.characters += 1;

        if !seen.insert(line.unicode) {
            report.line_failure(
                number,
                Some(line.character),
                format!("{} already described on an earlier line", line.unicode),
            );
            continue;
        }

        let previous = existing.get(&line.unicode).copied();
        if previous.is_some() && !options.update_existing {
            report.skipped_existing += 1;
            continue;
        }

        let mut glyphs = Vec::with_capacity(line.descriptions.len());
        for description in &line.descriptions {
            report.descriptions += 1;
            let ids = match parse_ids(description) {
                Ok(ids) => ids,
                Err(err) => {
                    report.description_failure(number, line.character, description, err.to_string());
                    continue;
                }
            };
            glyphs.push(allocator.resolve(&ids, line.character)?);
            report.resolved += 1;
        }

        if glyphs.is_empty() {
            continue;
        }
        let record = match previous {
            Some(previous) => previous.clone().with_glyphs(glyphs),
            None => Character::new(line.unicode).with_glyphs(glyphs),
        };
        characters.push(record);
    }

    report.components_minted = allocator.components_minted();
    report.compounds_minted = allocator.compounds_minted();
    characters.extend(allocator.finish()?);
    check_unique_names(&characters)?;
    report.emitted = characters.len();

    info!(
        "Resolved {}/{} descriptions, {} failed lines",
        report.resolved, report.descriptions, report.failed_lines
    );
    info!("Total new characters: {}", report.emitted);

    Ok(RunOutput { characters, report })
}
