//! Contrast of two capability reports.
//!
//! Aligns the feature-support entries of two cards the same way the
//! performance comparator aligns result keys: equal entries match,
//! unequal entries differ, one-sided entries are missing.

use crate::comparison::types::Pairing;
use crate::core::{Comparable, SupportEntry, SupportRecord};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportContrast {
    pub matching: BTreeSet<String>,
    pub differing: BTreeMap<String, Pairing<SupportEntry>>,
    pub missing: BTreeMap<String, Pairing<SupportEntry>>,
}

impl SupportContrast {
    pub fn total(&self) -> usize {
        self.matching.len() + self.differing.len() + self.missing.len()
    }
}

impl Comparable for SupportRecord {
    type Contrast = SupportContrast;

    fn contrast(&self, other: &Self) -> SupportContrast {
        let mut contrast = SupportContrast::default();

        for (key, ref_entry) in &self.support {
            match other.support.get(key) {
                None => {
                    contrast
                        .missing
                        .insert(key.clone(), Pairing::ReferenceOnly(ref_entry.clone()));
                }
                Some(prof_entry) if prof_entry == ref_entry => {
                    contrast.matching.insert(key.clone());
                }
                Some(prof_entry) => {
                    contrast.differing.insert(
                        key.clone(),
                        Pairing::Both {
                            reference: ref_entry.clone(),
                            profiled: prof_entry.clone(),
                        },
                    );
                }
            }
        }

        for (key, prof_entry) in &other.support {
            if !self.support.contains_key(key) {
                contrast
                    .missing
                    .insert(key.clone(), Pairing::ProfiledOnly(prof_entry.clone()));
            }
        }

        contrast
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(entries: &[(&str, &str, Option<&str>)]) -> SupportRecord {
        let mut record = SupportRecord::new();
        for (key, status, detail) in entries {
            record.support.insert(
                key.to_string(),
                SupportEntry {
                    status: status.to_string(),
                    detail: detail.map(String::from),
                },
            );
        }
        record
    }

    #[test]
    fn equal_entries_match() {
        let a = record(&[("ALG_SHA", "yes", None)]);
        let b = record(&[("ALG_SHA", "yes", None)]);
        let contrast = a.contrast(&b);
        assert!(contrast.matching.contains("ALG_SHA"));
        assert!(contrast.differing.is_empty());
    }

    #[test]
    fn status_or_detail_changes_differ() {
        let a = record(&[("ALG_SHA", "yes", None), ("ALG_AES", "yes", Some("128"))]);
        let b = record(&[("ALG_SHA", "no", None), ("ALG_AES", "yes", Some("256"))]);
        let contrast = a.contrast(&b);
        assert_eq!(contrast.differing.len(), 2);
        assert!(contrast.matching.is_empty());
    }

    #[test]
    fn one_sided_entries_are_missing_with_side() {
        let a = record(&[("ALG_DES", "yes", None)]);
        let b = record(&[("ALG_EC", "yes", None)]);
        let contrast = a.contrast(&b);
        assert_eq!(contrast.missing.len(), 2);
        assert!(contrast.missing["ALG_DES"].reference().is_some());
        assert!(contrast.missing["ALG_EC"].profiled().is_some());
        assert_eq!(contrast.total(), 2);
    }
}
