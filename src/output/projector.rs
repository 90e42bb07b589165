//! Reshaping of a categorized diff into a renderer-agnostic report model.
//!
//! The projector does no comparison logic. It counts categories and lays
//! rows out as string tables; concrete rendering (JSON, markdown,
//! terminal, HTML) is the consumer's business.

use crate::comparison::{Category, ComparisonOutcome, ResultPairing, SupportContrast};
use crate::core::{PerformanceResult, Presentable, SupportEntry};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DISPLAY_RESULT_MISSING: &str = "Result missing";
pub const DISPLAY_FAILED: &str = "Failed";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// One presentable table: a title, column headers, and string cells.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportTable {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Structured, format-agnostic summary of one comparison.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportModel {
    pub reference_card: String,
    pub profiled_card: String,
    pub generated_at: DateTime<Utc>,
    pub counts: Vec<CategoryCount>,
    pub total: usize,
    pub tables: Vec<ReportTable>,
}

/// Project a performance comparison for the two named cards.
pub fn project(
    outcome: &ComparisonOutcome,
    reference_card: &str,
    profiled_card: &str,
) -> ReportModel {
    let counts = Category::ALL
        .iter()
        .map(|c| CategoryCount {
            label: c.label().to_string(),
            count: outcome.count(*c),
        })
        .collect();

    let mut tables = Vec::new();

    tables.push(ReportTable {
        title: "Missing results".to_string(),
        columns: vec![
            "Key".to_string(),
            reference_card.to_string(),
            profiled_card.to_string(),
        ],
        rows: outcome
            .missing
            .iter()
            .map(|(key, pairing)| {
                vec![
                    key.clone(),
                    display_side(pairing.reference()),
                    display_side(pairing.profiled()),
                ]
            })
            .collect(),
    });

    tables.push(ReportTable {
        title: "Matching results".to_string(),
        columns: vec!["Key".to_string()],
        rows: outcome
            .matching
            .keys()
            .map(|key| vec![key.clone()])
            .collect(),
    });

    tables.push(ReportTable {
        title: "Mismatched averages".to_string(),
        columns: vec![
            "Key".to_string(),
            format!("{reference_card} avg"),
            format!("{profiled_card} avg"),
            "Tolerance".to_string(),
        ],
        rows: outcome
            .mismatch
            .iter()
            .map(|(key, pairing)| mismatch_row(key, pairing))
            .collect(),
    });

    tables.push(ReportTable {
        title: "Differing errors".to_string(),
        columns: vec![
            "Key".to_string(),
            format!("{reference_card} error"),
            format!("{profiled_card} error"),
        ],
        rows: outcome
            .erroneous
            .iter()
            .map(|(key, pairing)| {
                vec![
                    key.clone(),
                    display_error(pairing.reference()),
                    display_error(pairing.profiled()),
                ]
            })
            .collect(),
    });

    ReportModel {
        reference_card: reference_card.to_string(),
        profiled_card: profiled_card.to_string(),
        generated_at: Utc::now(),
        counts,
        total: outcome.total(),
        tables,
    }
}

fn display_side(result: Option<&PerformanceResult>) -> String {
    match result {
        None => DISPLAY_RESULT_MISSING.to_string(),
        Some(r) if r.is_failed() => DISPLAY_FAILED.to_string(),
        Some(r) => format_millis(r.operation_avg()),
    }
}

fn display_error(result: Option<&PerformanceResult>) -> String {
    result
        .and_then(|r| r.error())
        .unwrap_or(DISPLAY_RESULT_MISSING)
        .to_string()
}

fn mismatch_row(key: &str, pairing: &ResultPairing) -> Vec<String> {
    let reference = pairing.reference();
    vec![
        key.to_string(),
        display_side(reference),
        display_side(pairing.profiled()),
        format_millis(reference.map(PerformanceResult::operation_spread).unwrap_or(0.0)),
    ]
}

fn format_millis(value: f64) -> String {
    format!("{value:.2} ms")
}

impl Presentable for ComparisonOutcome {
    fn summarize(&self, reference_card: &str, profiled_card: &str) -> ReportModel {
        project(self, reference_card, profiled_card)
    }
}

impl Presentable for SupportContrast {
    fn summarize(&self, reference_card: &str, profiled_card: &str) -> ReportModel {
        let counts = vec![
            CategoryCount {
                label: "matching".to_string(),
                count: self.matching.len(),
            },
            CategoryCount {
                label: "differing".to_string(),
                count: self.differing.len(),
            },
            CategoryCount {
                label: "missing".to_string(),
                count: self.missing.len(),
            },
        ];

        let tables = vec![
            ReportTable {
                title: "Differing support".to_string(),
                columns: vec![
                    "Feature".to_string(),
                    reference_card.to_string(),
                    profiled_card.to_string(),
                ],
                rows: self
                    .differing
                    .iter()
                    .map(|(key, pairing)| {
                        vec![
                            key.clone(),
                            display_entry(pairing.reference()),
                            display_entry(pairing.profiled()),
                        ]
                    })
                    .collect(),
            },
            ReportTable {
                title: "Missing support entries".to_string(),
                columns: vec![
                    "Feature".to_string(),
                    reference_card.to_string(),
                    profiled_card.to_string(),
                ],
                rows: self
                    .missing
                    .iter()
                    .map(|(key, pairing)| {
                        vec![
                            key.clone(),
                            display_entry(pairing.reference()),
                            display_entry(pairing.profiled()),
                        ]
                    })
                    .collect(),
            },
            ReportTable {
                title: "Matching support".to_string(),
                columns: vec!["Feature".to_string()],
                rows: self.matching.iter().map(|key| vec![key.clone()]).collect(),
            },
        ];

        ReportModel {
            reference_card: reference_card.to_string(),
            profiled_card: profiled_card.to_string(),
            generated_at: Utc::now(),
            counts,
            total: self.total(),
            tables,
        }
    }
}

fn display_entry(entry: Option<&SupportEntry>) -> String {
    match entry {
        None => DISPLAY_RESULT_MISSING.to_string(),
        Some(SupportEntry {
            status,
            detail: Some(detail),
        }) => format!("{status} ({detail})"),
        Some(SupportEntry { status, .. }) => status.clone(),
    }
}
