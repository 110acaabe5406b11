//! Report building - summary buckets and SMART goal generation

use serde::Serialize;

use crate::core::classify::{ClassificationResult, Verdict};
use crate::core::norms::{Position, Sound};

/// One bucketed result, carrying what the summary formatter needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketEntry {
    pub sound: Sound,
    pub position: Position,
    pub mastery_months: u32,
}

impl From<&ClassificationResult> for BucketEntry {
    fn from(result: &ClassificationResult) -> Self {
        BucketEntry {
            sound: result.sound.clone(),
            position: result.position,
            mastery_months: result.mastery_months,
        }
    }
}

/// Classified results partitioned by verdict, in classification order.
///
/// `correct` is tracked for completeness only; goals are generated from
/// the delayed bucket alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportBuckets {
    pub delayed: Vec<BucketEntry>,
    pub incorrect_but_age_appropriate: Vec<BucketEntry>,
    pub correct: Vec<BucketEntry>,
}

impl ReportBuckets {
    pub fn from_results(results: &[ClassificationResult]) -> Self {
        let mut buckets = ReportBuckets::default();
        for result in results {
            match result.verdict {
                Verdict::Delayed => buckets.delayed.push(result.into()),
                Verdict::IncorrectButAgeAppropriate => {
                    buckets.incorrect_but_age_appropriate.push(result.into())
                }
                Verdict::AgeAppropriate => buckets.correct.push(result.into()),
            }
        }
        buckets
    }
}

/// Summary line for one bucket entry, mastery age floored to whole years
pub fn summary_line(entry: &BucketEntry) -> String {
    format!(
        "/{}/ ({}) – expected by {} yrs",
        entry.sound,
        entry.position,
        entry.mastery_months / 12
    )
}

/// Summary lines for a bucket; an empty bucket renders a single "None"
pub fn summary_lines(entries: &[BucketEntry]) -> Vec<String> {
    if entries.is_empty() {
        vec!["None".to_string()]
    } else {
        entries.iter().map(summary_line).collect()
    }
}

/// The fixed SMART goal sentence for one delayed sound
pub fn smart_goal(child_name: &str, entry: &BucketEntry) -> String {
    format!(
        "{} will accurately produce the /{}/ sound in the {} position of single words \
         with 80% accuracy across 3 consecutive sessions, following auditory discrimination \
         and isolation practice, after 3 weeks of traditional articulation therapy.",
        child_name, entry.sound, entry.position
    )
}

/// One goal per delayed entry; empty when nothing is delayed
pub fn smart_goals(child_name: &str, buckets: &ReportBuckets) -> Vec<String> {
    buckets
        .delayed
        .iter()
        .map(|entry| smart_goal(child_name, entry))
        .collect()
}

/// Newline-joined goal sentences, the plain-text export payload
pub fn goals_payload(goals: &[String]) -> String {
    goals.join("\n")
}

/// Export filename for the goals payload.
///
/// Path separators in the name are replaced so the file always lands in
/// the chosen export directory.
pub fn goals_filename(child_name: &str) -> String {
    let safe: String = child_name
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    format!("{}_goals.txt", safe)
}
