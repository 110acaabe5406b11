//! Worksheet entity - the editable observation document
//!
//! A worksheet is the plain-text handoff between the catalog and the
//! clinician: seeded with every sound/position pair, edited by hand (the
//! `produced` column only), then fed back in for assessment. YAML is the
//! primary format; CSV is supported for spreadsheet-based editing.

use chrono::{DateTime, Utc};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use thiserror::Error;

use crate::core::classify::Observation;
use crate::core::norms::{Country, NormCatalog, Position, Sound};
use crate::yaml::YamlSyntaxError;

/// One editable row of the worksheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorksheetRow {
    pub sound: Sound,
    pub position: Position,
    pub produced: String,
}

/// The full worksheet document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worksheet {
    /// Child's first name; empty disables assessment
    pub child_name: String,

    /// Age text in "years;months" form, parsed at assessment time
    pub age: String,

    /// Country label as entered; unrecognized values fall back to base ages
    pub country: String,

    pub created: DateTime<Utc>,

    pub rows: Vec<WorksheetRow>,
}

/// Worksheet load/save failures
#[derive(Debug, Error, Diagnostic)]
pub enum WorksheetError {
    #[error("failed to access worksheet {path}")]
    #[diagnostic(code(artic::worksheet::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Yaml(#[from] YamlSyntaxError),

    #[error("failed to serialize worksheet")]
    #[diagnostic(code(artic::worksheet::serialize))]
    Serialize(#[source] serde_yml::Error),

    #[error("worksheet CSV error")]
    #[diagnostic(
        code(artic::worksheet::csv),
        help("the CSV needs a header row: sound,position,produced")
    )]
    Csv(#[from] csv::Error),
}

impl Worksheet {
    /// Seed a fresh worksheet from the catalog: the exhaustive cross
    /// product of sounds and valid positions, produced = sound.
    pub fn seeded(catalog: &NormCatalog, country: &str, child_name: &str, age: &str) -> Self {
        let rows = catalog
            .seed_observations()
            .into_iter()
            .map(|obs| WorksheetRow {
                sound: obs.sound,
                position: obs.position,
                produced: obs.produced,
            })
            .collect();

        Worksheet {
            child_name: child_name.to_string(),
            age: age.to_string(),
            country: country.to_string(),
            created: Utc::now(),
            rows,
        }
    }

    /// The country selection, if the stored label is recognized
    pub fn country(&self) -> Option<Country> {
        Country::parse(&self.country)
    }

    /// The observation list for classification, rows in file order
    pub fn observations(&self) -> Vec<Observation> {
        self.rows
            .iter()
            .map(|row| Observation {
                sound: row.sound.clone(),
                position: row.position,
                produced: row.produced.clone(),
            })
            .collect()
    }

    pub fn to_yaml(&self) -> Result<String, WorksheetError> {
        serde_yml::to_string(self).map_err(WorksheetError::Serialize)
    }

    pub fn from_yaml(source: &str, filename: &str) -> Result<Self, WorksheetError> {
        serde_yml::from_str(source)
            .map_err(|e| YamlSyntaxError::from_serde_error(&e, source, filename).into())
    }

    pub fn load(path: &Path) -> Result<Self, WorksheetError> {
        let source = fs::read_to_string(path).map_err(|source| WorksheetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&source, &path.display().to_string())
    }

    pub fn save(&self, path: &Path) -> Result<(), WorksheetError> {
        let yaml = self.to_yaml()?;
        fs::write(path, yaml).map_err(|source| WorksheetError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    /// Write the rows as CSV (sound,position,produced) for spreadsheet edits
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), WorksheetError> {
        let mut wtr = csv::Writer::from_writer(writer);
        for row in &self.rows {
            wtr.serialize(row)?;
        }
        wtr.flush().map_err(|source| WorksheetError::Io {
            path: "<csv>".to_string(),
            source,
        })
    }

    /// Read rows back from CSV, replacing this worksheet's rows.
    ///
    /// Header metadata (child, age, country) stays as-is; only the row set
    /// comes from the CSV.
    pub fn read_csv<R: Read>(&mut self, reader: R) -> Result<(), WorksheetError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        for record in rdr.deserialize::<WorksheetRow>() {
            rows.push(record?);
        }
        self.rows = rows;
        Ok(())
    }
}
