// src/domain/region/audit.rs
use std::{collections::HashSet, fmt};

use super::entity::RegionEntry;

const MAX_PRIORITY: u8 = 5;
const MAX_PREFECTURE_CODE: u8 = 47;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionProblem {
    EmptyRomaji,
    /// Characters outside `[a-z0-9-]`.
    InvalidRomaji,
    PriorityOutOfRange,
    UnknownPrefecture,
    /// Romaji already used by an earlier row; area slugs must be unique.
    DuplicateRomaji,
}

impl RegionProblem {
    /// Problems a romaji backfill can repair.
    pub fn is_romaji(self) -> bool {
        matches!(self, RegionProblem::EmptyRomaji | RegionProblem::InvalidRomaji)
    }
}

impl fmt::Display for RegionProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RegionProblem::EmptyRomaji => "empty romaji",
            RegionProblem::InvalidRomaji => "romaji outside [a-z0-9-]",
            RegionProblem::PriorityOutOfRange => "priority outside 1-5",
            RegionProblem::UnknownPrefecture => "prefecture code outside 1-47",
            RegionProblem::DuplicateRomaji => "romaji used by an earlier row",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionIssue {
    pub index: usize,
    pub name: String,
    pub romaji: String,
    pub problem: RegionProblem,
}

/// Every problem found in the table, in table order.
pub fn audit_entries(entries: &[RegionEntry]) -> Vec<RegionIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();
    for (index, entry) in entries.iter().enumerate() {
        let mut push = |problem| {
            issues.push(RegionIssue {
                index,
                name: entry.name.clone(),
                romaji: entry.romaji.clone(),
                problem,
            });
        };

        if entry.romaji.is_empty() {
            push(RegionProblem::EmptyRomaji);
        } else if !entry.has_valid_romaji() {
            push(RegionProblem::InvalidRomaji);
        } else if !seen.insert(entry.romaji.as_str()) {
            push(RegionProblem::DuplicateRomaji);
        }
        if entry.priority == 0 || entry.priority > MAX_PRIORITY {
            push(RegionProblem::PriorityOutOfRange);
        }
        if entry
            .prefecture_code
            .is_some_and(|code| code == 0 || code > MAX_PREFECTURE_CODE)
        {
            push(RegionProblem::UnknownPrefecture);
        }
    }
    issues
}
