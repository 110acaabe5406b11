//! YAML loading with span diagnostics for worksheet files

pub mod diagnostics;

pub use diagnostics::YamlSyntaxError;
