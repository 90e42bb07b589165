//! Typed containers for a categorized comparison.

use crate::core::PerformanceResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Agreement category for one result key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Results agree: equal error strings, or averages within tolerance
    Matching,
    /// Both sides failed, with different error strings
    Erroneous,
    /// The key exists on only one card
    Missing,
    /// Averages differ by more than the reference's own jitter range
    Mismatch,
    /// Reserved for overhead-dominated operations; currently always empty
    Skipped,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Matching,
        Category::Erroneous,
        Category::Missing,
        Category::Mismatch,
        Category::Skipped,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Matching => "matching",
            Category::Erroneous => "erroneous",
            Category::Missing => "missing",
            Category::Mismatch => "mismatch",
            Category::Skipped => "skipped",
        }
    }
}

/// Two-sided pairing of a result across the reference and profiled cards.
///
/// One side may be absent, both may not: a key only enters a comparison
/// because at least one card reported it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Pairing<T> {
    Both { reference: T, profiled: T },
    ReferenceOnly(T),
    ProfiledOnly(T),
}

impl<T> Pairing<T> {
    pub fn reference(&self) -> Option<&T> {
        match self {
            Pairing::Both { reference, .. } | Pairing::ReferenceOnly(reference) => Some(reference),
            Pairing::ProfiledOnly(_) => None,
        }
    }

    pub fn profiled(&self) -> Option<&T> {
        match self {
            Pairing::Both { profiled, .. } | Pairing::ProfiledOnly(profiled) => Some(profiled),
            Pairing::ReferenceOnly(_) => None,
        }
    }
}

pub type ResultPairing = Pairing<PerformanceResult>;

/// Categorized diff of two result stores.
///
/// The five maps partition the union of both stores' key sets: every key
/// appears in exactly one category. Ordered maps keep projection output
/// stable.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonOutcome {
    pub matching: BTreeMap<String, ResultPairing>,
    pub erroneous: BTreeMap<String, ResultPairing>,
    pub missing: BTreeMap<String, ResultPairing>,
    pub mismatch: BTreeMap<String, ResultPairing>,
    pub skipped: BTreeMap<String, ResultPairing>,
}

impl ComparisonOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, category: Category, key: String, pairing: ResultPairing) {
        self.category_mut(category).insert(key, pairing);
    }

    pub fn category(&self, category: Category) -> &BTreeMap<String, ResultPairing> {
        match category {
            Category::Matching => &self.matching,
            Category::Erroneous => &self.erroneous,
            Category::Missing => &self.missing,
            Category::Mismatch => &self.mismatch,
            Category::Skipped => &self.skipped,
        }
    }

    fn category_mut(&mut self, category: Category) -> &mut BTreeMap<String, ResultPairing> {
        match category {
            Category::Matching => &mut self.matching,
            Category::Erroneous => &mut self.erroneous,
            Category::Missing => &mut self.missing,
            Category::Mismatch => &mut self.mismatch,
            Category::Skipped => &mut self.skipped,
        }
    }

    pub fn count(&self, category: Category) -> usize {
        self.category(category).len()
    }

    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|c| self.count(*c)).sum()
    }
}
