//! Assessment orchestration - one child, one observation set, one report

use serde::Serialize;

use crate::core::age::{parse_age, UNKNOWN_AGE};
use crate::core::classify::{classify, ClassificationResult, ClassifyError, Observation};
use crate::core::norms::{Country, NormCatalog};
use crate::core::report::{smart_goals, ReportBuckets};

/// The child being assessed, derived once per run from raw input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChildContext {
    pub name: String,
    pub age_months: u32,
}

impl ChildContext {
    /// Build the context from raw name and age text.
    ///
    /// Returns `None` when the name is empty/whitespace or the age text
    /// does not parse; assessment is suppressed in that case rather than
    /// presented as a valid empty result.
    pub fn from_input(name: &str, age_text: &str) -> Option<ChildContext> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let age_months = parse_age(age_text);
        if age_months == UNKNOWN_AGE {
            return None;
        }
        Some(ChildContext {
            name: name.to_string(),
            age_months,
        })
    }
}

/// A completed assessment run
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub child: ChildContext,
    pub country: Option<Country>,
    pub results: Vec<ClassificationResult>,
    pub buckets: ReportBuckets,
    pub goals: Vec<String>,
}

impl Assessment {
    /// Classify the observation set and assemble the report buckets and
    /// SMART goals. Each invocation is independent: the catalog is built
    /// fresh by the caller and never mutated here.
    pub fn run(
        catalog: &NormCatalog,
        country: Option<Country>,
        child: ChildContext,
        observations: &[Observation],
    ) -> Result<Assessment, ClassifyError> {
        let results = classify(&catalog.mastery, child.age_months, observations)?;
        let buckets = ReportBuckets::from_results(&results);
        let goals = smart_goals(&child.name, &buckets);
        Ok(Assessment {
            child,
            country,
            results,
            buckets,
            goals,
        })
    }

    /// Whether there is anything to export as therapy goals
    pub fn has_goals(&self) -> bool {
        !self.goals.is_empty()
    }
}
