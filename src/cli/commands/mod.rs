//! CLI command implementations

pub mod assess;
pub mod completions;
pub mod norms;
pub mod sheet;
