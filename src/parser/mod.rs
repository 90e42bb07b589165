//! Line tokenization and classification shared by both report passes.
//!
//! The characterization tool emits semicolon-delimited records with a
//! handful of boilerplate markers and fixed metadata labels. Those label
//! sets are data, not logic: classification walks an ordered rule table
//! and the first matching rule wins, with feature-support as the fallback.

pub mod performance;
pub mod support;

pub use performance::parse_performance;
pub use support::parse_support;

/// Lines containing any of these markers are boilerplate and dropped.
const DISCARD_MARKERS: &[&str] = &[
    "This file was generated by AlgTest utility",
    "This is very specific feature",
];

/// Metadata labels the tool prints at the top of every report.
const TEST_INFO_LABELS: &[&str] = &[
    "Tested and provided by",
    "Execution date",
    "AlgTest",
    "Used reader",
    "Card ATR",
    "Card name",
    "Used protocol",
    "JavaCard support version",
    "Total test time",
];

const JCSYSTEM_PREFIX: &str = "JCSystem";
const CPLC_PREFIX: &str = "CPLC";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineClass {
    TestInfo,
    JcSystem,
    Cplc,
    Support,
}

enum Matcher {
    /// Line starts with any of the given labels
    AnyPrefix(&'static [&'static str]),
    /// Line starts with the given prefix
    Prefix(&'static str),
}

impl Matcher {
    fn matches(&self, line: &str) -> bool {
        match self {
            Matcher::AnyPrefix(labels) => labels.iter().any(|l| line.starts_with(l)),
            Matcher::Prefix(prefix) => line.starts_with(prefix),
        }
    }
}

struct ClassifierRule {
    matcher: Matcher,
    class: LineClass,
}

/// Ordered classification rules; evaluated top to bottom, first match wins.
/// Lines matching no rule are feature-support entries.
const RULES: &[ClassifierRule] = &[
    ClassifierRule {
        matcher: Matcher::AnyPrefix(TEST_INFO_LABELS),
        class: LineClass::TestInfo,
    },
    ClassifierRule {
        matcher: Matcher::Prefix(JCSYSTEM_PREFIX),
        class: LineClass::JcSystem,
    },
    ClassifierRule {
        matcher: Matcher::Prefix(CPLC_PREFIX),
        class: LineClass::Cplc,
    },
];

pub fn classify(line: &str) -> LineClass {
    RULES
        .iter()
        .find(|rule| rule.matcher.matches(line))
        .map(|rule| rule.class)
        .unwrap_or(LineClass::Support)
}

/// Split a raw line into fields, or `None` if the line is discarded:
/// empty after trimming, without a field separator, or boilerplate.
pub fn tokenize(raw: &str) -> Option<(&str, Vec<&str>)> {
    let line = raw.trim();
    if line.is_empty() || !line.contains(';') {
        return None;
    }
    if DISCARD_MARKERS.iter().any(|m| line.contains(m)) {
        return None;
    }
    let mut fields: Vec<&str> = line.split(';').map(str::trim).collect();
    // a trailing separator produces an empty last field, not a real field
    while fields.last() == Some(&"") {
        fields.pop();
    }
    if fields.is_empty() {
        return None;
    }
    Some((line, fields))
}
