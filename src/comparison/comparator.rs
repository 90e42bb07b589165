//! Classification of two result stores into agreement categories.

use crate::comparison::types::{Category, ComparisonOutcome, Pairing};
use crate::core::{Comparable, PerformanceResult, ResultStore};

/// Compare a reference store against a profiled store.
///
/// Total: every key present in either store lands in exactly one
/// category. Two measurements are equivalent when their averages differ
/// by no more than the reference's own min-max spread, a self-calibrating
/// tolerance band that absorbs per-card timing jitter.
///
/// The `skipped` category is reserved for operations dominated by fixed
/// overhead (reference average within 2x of its own baseline average).
/// The activation condition is deliberately not evaluated, pending a
/// product decision, so the category stays empty.
pub fn compare(reference: &ResultStore, profiled: &ResultStore) -> ComparisonOutcome {
    let mut outcome = ComparisonOutcome::new();

    for (key, ref_result) in reference.iter() {
        let (category, pairing) = match profiled.get(key) {
            None => (
                Category::Missing,
                Pairing::ReferenceOnly(ref_result.clone()),
            ),
            Some(prof_result) => (
                classify_pair(ref_result, prof_result),
                Pairing::Both {
                    reference: ref_result.clone(),
                    profiled: prof_result.clone(),
                },
            ),
        };
        outcome.insert(category, key.to_string(), pairing);
    }

    for (key, prof_result) in profiled.iter() {
        if !reference.contains_key(key) {
            outcome.insert(
                Category::Missing,
                key.to_string(),
                Pairing::ProfiledOnly(prof_result.clone()),
            );
        }
    }

    outcome
}

fn classify_pair(reference: &PerformanceResult, profiled: &PerformanceResult) -> Category {
    if let Some(ref_error) = reference.error() {
        return match profiled.error() {
            Some(prof_error) if prof_error != ref_error => Category::Erroneous,
            _ => Category::Matching,
        };
    }

    let avg_diff = (reference.operation_avg() - profiled.operation_avg()).abs();
    if avg_diff > reference.operation_spread() {
        Category::Mismatch
    } else {
        Category::Matching
    }
}

impl Comparable for ResultStore {
    type Contrast = ComparisonOutcome;

    fn contrast(&self, other: &Self) -> ComparisonOutcome {
        compare(self, other)
    }
}
