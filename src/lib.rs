pub mod args;
pub mod domain;
pub mod ingest;
pub mod report;
pub mod stats;
pub mod utils;

pub use args::{Args, USAGE};
pub use ingest::{ingest_file, IngestError};
pub use report::analyze_logs;
pub use stats::{AggregateState, AnalysisResult, LineTotals};
