pub mod comparator;
pub mod support;
pub mod types;

pub use comparator::compare;
pub use support::SupportContrast;
pub use types::{Category, ComparisonOutcome, Pairing, ResultPairing};
