// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod comparison;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod output;
pub mod parser;

// Re-export commonly used types
pub use crate::comparison::{compare, Category, ComparisonOutcome, Pairing, SupportContrast};
pub use crate::core::{
    Comparable, PerformanceResult, Presentable, ResultStore, SupportEntry, SupportRecord,
};
pub use crate::errors::Error;
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::output::{project, ReportModel, ReportTable};
pub use crate::parser::{parse_performance, parse_support};
