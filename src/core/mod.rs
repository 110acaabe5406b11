//! Core module - norms, parsing, classification, and report building

pub mod age;
pub mod assessment;
pub mod classify;
pub mod norms;
pub mod report;

pub use age::{format_age, parse_age, UNKNOWN_AGE};
pub use assessment::{Assessment, ChildContext};
pub use classify::{classify, ClassificationResult, ClassifyError, Observation, Verdict};
pub use norms::{Country, MasteryTable, NormCatalog, Position, PositionTable, Sound};
pub use report::{goals_filename, goals_payload, smart_goals, summary_lines, ReportBuckets};
