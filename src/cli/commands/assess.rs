//! `artic assess` - classify a worksheet and print the clinical report

use chrono::Local;
use console::style;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::cli::table::{results_csv, results_markdown, results_terminal, results_tsv};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::age::format_age;
use crate::core::assessment::{Assessment, ChildContext};
use crate::core::norms::NormCatalog;
use crate::core::report::{goals_filename, goals_payload, summary_lines};
use crate::entities::worksheet::Worksheet;

#[derive(clap::Args, Debug)]
pub struct AssessArgs {
    /// Worksheet file (YAML)
    pub file: PathBuf,

    /// Write the markdown report to a file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Directory to export "{child}_goals.txt" into (skipped when no delays)
    #[arg(long)]
    pub export_goals: Option<PathBuf>,
}

pub fn run(args: AssessArgs, global: &GlobalOpts) -> Result<()> {
    let sheet = Worksheet::load(&args.file)?;

    let country = sheet.country();
    if country.is_none() && global.verbose {
        eprintln!(
            "{}",
            style(format!(
                "country '{}' not recognized; using base mastery ages",
                sheet.country
            ))
            .dim()
        );
    }

    // Missing name or unparsable age suppresses assessment entirely; this
    // is a recovered condition, not an error exit.
    let Some(child) = ChildContext::from_input(&sheet.child_name, &sheet.age) else {
        if !global.quiet {
            println!(
                "{} No assessment: worksheet needs a child name and a valid age (years;months)",
                style("!").yellow()
            );
        }
        return Ok(());
    };

    let catalog = NormCatalog::build(country);
    let assessment = Assessment::run(&catalog, country, child, &sheet.observations())?;

    if args.output.is_some() || global.format == OutputFormat::Md {
        let report = markdown_report(&assessment, &sheet);
        write_output(&report, args.output.clone())?;
    } else {
        match global.format {
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&assessment).into_diagnostic()?
                );
            }
            OutputFormat::Yaml => {
                print!("{}", serde_yml::to_string(&assessment).into_diagnostic()?);
            }
            OutputFormat::Tsv => println!("{}", results_tsv(&assessment.results)),
            OutputFormat::Csv => print!("{}", results_csv(&assessment.results)),
            _ => print_terminal(&assessment, &sheet),
        }
    }

    if let Some(dir) = &args.export_goals {
        if assessment.has_goals() {
            let path = dir.join(goals_filename(&assessment.child.name));
            std::fs::write(&path, goals_payload(&assessment.goals)).into_diagnostic()?;
            if !global.quiet {
                println!("{} Goals written to {}", style("✓").green(), path.display());
            }
        } else if !global.quiet {
            println!("No delayed sounds; goals export skipped");
        }
    }

    Ok(())
}

fn print_terminal(assessment: &Assessment, sheet: &Worksheet) {
    let norms = assessment
        .country
        .map(|c| c.to_string())
        .unwrap_or_else(|| "base".to_string());
    println!(
        "{}",
        style(format!(
            "Assessment Results for {} (age {}, {} norms)",
            assessment.child.name,
            format_age(assessment.child.age_months),
            norms
        ))
        .bold()
    );
    println!();
    print!("{}", results_terminal(&assessment.results));
    println!();

    println!("{}", style("Summary Report").bold());
    println!("  {}", style("Delayed:").red());
    for line in summary_lines(&assessment.buckets.delayed) {
        println!("    - {}", line);
    }
    println!("  {}", style("Age Appropriate but Incorrect:").yellow());
    for line in summary_lines(&assessment.buckets.incorrect_but_age_appropriate) {
        println!("    - {}", line);
    }
    println!();

    if assessment.has_goals() {
        println!("{}", style("Recommended SMART Goals").bold());
        for goal in &assessment.goals {
            println!("  - {}", goal);
        }
    } else {
        println!(
            "No SMART goals recommended; nothing is delayed for {}'s age.",
            sheet.child_name
        );
    }
}

fn markdown_report(assessment: &Assessment, sheet: &Worksheet) -> String {
    let mut out = String::new();
    out.push_str("# Articulation Assessment Report\n\n");
    out.push_str(&format!("- **Child:** {}\n", assessment.child.name));
    out.push_str(&format!(
        "- **Age:** {} ({} months)\n",
        sheet.age, assessment.child.age_months
    ));
    let norms = assessment
        .country
        .map(|c| c.to_string())
        .unwrap_or_else(|| format!("base (country '{}' not recognized)", sheet.country));
    out.push_str(&format!("- **Norms:** {}\n", norms));
    out.push_str(&format!(
        "- **Generated:** {}\n\n",
        Local::now().format("%Y-%m-%d")
    ));

    out.push_str("## Results\n\n");
    out.push_str(&results_markdown(&assessment.results));
    out.push('\n');

    out.push_str("\n## Summary\n\n");
    out.push_str("**Delayed:**\n\n");
    for line in summary_lines(&assessment.buckets.delayed) {
        out.push_str(&format!("- {}\n", line));
    }
    out.push_str("\n**Age Appropriate but Incorrect:**\n\n");
    for line in summary_lines(&assessment.buckets.incorrect_but_age_appropriate) {
        out.push_str(&format!("- {}\n", line));
    }

    if assessment.has_goals() {
        out.push_str("\n## Recommended SMART Goals\n\n");
        for goal in &assessment.goals {
            out.push_str(&format!("- {}\n", goal));
        }
    }

    out
}

fn write_output(content: &str, output_path: Option<PathBuf>) -> Result<()> {
    match output_path {
        Some(path) => {
            let file = File::create(&path).into_diagnostic()?;
            let mut writer = BufWriter::new(file);
            writer.write_all(content.as_bytes()).into_diagnostic()?;
            println!("Report written to: {}", path.display());
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
