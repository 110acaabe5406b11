//! Entity types stored as plain text files

pub mod worksheet;

pub use worksheet::{Worksheet, WorksheetError, WorksheetRow};
