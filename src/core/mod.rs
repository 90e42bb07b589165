//! Typed in-memory model for characterization reports.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One measured operation on one card.
///
/// Immutable once constructed: a failed result carries its error string
/// and no samples, a measured result carries its samples and no error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerformanceResult {
    key: String,
    samples: Vec<f64>,
    baseline_samples: Vec<f64>,
    error: Option<String>,
}

impl PerformanceResult {
    pub fn measured(
        key: impl Into<String>,
        samples: Vec<f64>,
        baseline_samples: Vec<f64>,
    ) -> Self {
        Self {
            key: key.into(),
            samples,
            baseline_samples,
            error: None,
        }
    }

    pub fn failed(key: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            samples: Vec::new(),
            baseline_samples: Vec::new(),
            error: Some(error.into()),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn baseline_samples(&self) -> &[f64] {
        &self.baseline_samples
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Average of the operation samples, 0.0 for a failed or empty result.
    pub fn operation_avg(&self) -> f64 {
        mean(&self.samples)
    }

    pub fn operation_min(&self) -> f64 {
        self.samples.iter().copied().reduce(f64::min).unwrap_or(0.0)
    }

    pub fn operation_max(&self) -> f64 {
        self.samples.iter().copied().reduce(f64::max).unwrap_or(0.0)
    }

    /// Observed jitter of the operation samples (max - min).
    pub fn operation_spread(&self) -> f64 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.operation_max() - self.operation_min()
        }
    }

    pub fn baseline_avg(&self) -> f64 {
        mean(&self.baseline_samples)
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// A single feature-support entry: reported status plus optional detail
/// (key length, variant notes and the like).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportEntry {
    pub status: String,
    pub detail: Option<String>,
}

/// Parsed capability report for a single card.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportRecord {
    /// Free-text metadata (reader, date, card ATR, protocol, ...)
    pub test_info: HashMap<String, String>,
    /// Platform capability keys and reported values
    pub jcsystem: HashMap<String, String>,
    /// Card production life-cycle keys and reported values
    pub cplc: HashMap<String, String>,
    /// Feature key -> support entry
    pub support: HashMap<String, SupportEntry>,
}

impl SupportRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn card_name(&self) -> Option<&str> {
        self.test_info.get("Card name").map(String::as_str)
    }
}

/// Mapping from result key to its parsed performance result, one per card.
/// Built once per parse pass and never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultStore {
    results: HashMap<String, PerformanceResult>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Duplicate keys replace the previous record (last wins).
    pub fn insert(&mut self, result: PerformanceResult) {
        self.results.insert(result.key().to_string(), result);
    }

    pub fn get(&self, key: &str) -> Option<&PerformanceResult> {
        self.results.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.results.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.results.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PerformanceResult)> {
        self.results.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl FromIterator<PerformanceResult> for ResultStore {
    fn from_iter<I: IntoIterator<Item = PerformanceResult>>(iter: I) -> Self {
        let mut store = Self::new();
        for result in iter {
            store.insert(result);
        }
        store
    }
}

/// A testable module whose state can be contrasted against another card's.
pub trait Comparable {
    type Contrast;

    fn contrast(&self, other: &Self) -> Self::Contrast;
}

/// A contrast that can be reshaped into a renderer-agnostic report model.
pub trait Presentable {
    fn summarize(&self, reference_card: &str, profiled_card: &str) -> crate::output::ReportModel;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measured_result_derives_stats() {
        let r = PerformanceResult::measured("SHA-256 hash", vec![8.0, 12.0, 10.0], vec![1.0, 3.0]);
        assert_eq!(r.operation_avg(), 10.0);
        assert_eq!(r.operation_min(), 8.0);
        assert_eq!(r.operation_max(), 12.0);
        assert_eq!(r.operation_spread(), 4.0);
        assert_eq!(r.baseline_avg(), 2.0);
        assert!(!r.is_failed());
    }

    #[test]
    fn failed_result_has_zero_stats() {
        let r = PerformanceResult::failed("AESKey setKey", "CryptoException");
        assert!(r.is_failed());
        assert_eq!(r.error(), Some("CryptoException"));
        assert!(r.samples().is_empty());
        assert_eq!(r.operation_avg(), 0.0);
        assert_eq!(r.operation_min(), 0.0);
        assert_eq!(r.operation_max(), 0.0);
        assert_eq!(r.operation_spread(), 0.0);
    }

    #[test]
    fn store_last_insert_wins() {
        let mut store = ResultStore::new();
        store.insert(PerformanceResult::measured("k", vec![1.0], vec![]));
        store.insert(PerformanceResult::measured("k", vec![2.0], vec![]));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("k").unwrap().operation_avg(), 2.0);
    }
}
