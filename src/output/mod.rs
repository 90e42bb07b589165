pub mod projector;

pub use projector::{project, CategoryCount, ReportModel, ReportTable};
