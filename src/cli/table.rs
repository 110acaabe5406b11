//! Table formatting for classified assessment results
//!
//! One row per sound/position pair, verdict last. The terminal format
//! colors verdicts with the standard mapping: green for age appropriate,
//! yellow for incorrect but age appropriate, red for delayed.

use console::style;
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{escape_csv, pad_cell};
use crate::core::{ClassificationResult, Verdict};

const SOUND_WIDTH: usize = 8;
const POSITION_WIDTH: usize = 10;

/// Verdict label styled for terminal display
pub fn styled_verdict(verdict: Verdict) -> String {
    let label = verdict.as_str();
    match verdict {
        Verdict::AgeAppropriate => style(label).green().to_string(),
        Verdict::IncorrectButAgeAppropriate => style(label).yellow().to_string(),
        Verdict::Delayed => style(label).red().to_string(),
    }
}

fn cells(result: &ClassificationResult) -> [String; 3] {
    [
        format!("/{}/", result.sound),
        result.position.to_string(),
        result.verdict.as_str().to_string(),
    ]
}

/// Aligned, colored table for interactive terminals
pub fn results_terminal(results: &[ClassificationResult]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {} {}\n",
        style(pad_cell("SOUND", SOUND_WIDTH)).bold(),
        style(pad_cell("POSITION", POSITION_WIDTH)).bold(),
        style("RESULT").bold()
    ));
    for result in results {
        let [sound, position, _] = cells(result);
        out.push_str(&format!(
            "{} {} {}\n",
            pad_cell(&sound, SOUND_WIDTH),
            pad_cell(&position, POSITION_WIDTH),
            styled_verdict(result.verdict)
        ));
    }
    out.push_str(&format!(
        "\n{} sound-position pair(s) assessed\n",
        results.len()
    ));
    out
}

/// Markdown table for reports
pub fn results_markdown(results: &[ClassificationResult]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Sound", "Position", "Result"]);
    for result in results {
        builder.push_record(cells(result));
    }
    builder.build().with(Style::markdown()).to_string()
}

/// Tab-separated rows for piping, no header
pub fn results_tsv(results: &[ClassificationResult]) -> String {
    results
        .iter()
        .map(|r| cells(r).join("\t"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// CSV with header row
pub fn results_csv(results: &[ClassificationResult]) -> String {
    let mut out = String::from("sound,position,result\n");
    for result in results {
        let row = cells(result)
            .iter()
            .map(|c| escape_csv(c))
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&row);
        out.push('\n');
    }
    out
}
