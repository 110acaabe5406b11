//! Starticulation: articulation assessment toolkit
//!
//! A Unix-style toolkit for assessing a child's speech-sound articulation
//! against country-specific developmental norms, producing a clinical
//! summary and SMART therapy goals from plain text worksheet files.

pub mod cli;
pub mod core;
pub mod entities;
pub mod yaml;
