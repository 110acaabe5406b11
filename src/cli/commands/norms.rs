//! `artic norms` - show the developmental norm tables

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{escape_csv, pad_cell};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::norms::{Country, MasteryTable, NormCatalog};

#[derive(Subcommand, Debug)]
pub enum NormsCommands {
    /// Mastery ages per sound, in months
    Ages(AgesArgs),

    /// Valid word positions per sound
    Positions(PositionsArgs),
}

#[derive(clap::Args, Debug)]
pub struct AgesArgs {
    /// Country overrides to apply (omit for base ages)
    #[arg(long, value_enum)]
    pub country: Option<Country>,
}

#[derive(clap::Args, Debug)]
pub struct PositionsArgs {}

pub fn run(cmd: NormsCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        NormsCommands::Ages(args) => ages(args, global),
        NormsCommands::Positions(args) => positions(args, global),
    }
}

#[derive(Debug, Serialize)]
struct AgeRow {
    sound: String,
    mastery_months: u32,
}

fn ages(args: AgesArgs, global: &GlobalOpts) -> Result<()> {
    let mastery = MasteryTable::build(args.country);
    let rows: Vec<AgeRow> = mastery
        .iter()
        .map(|(sound, months)| AgeRow {
            sound: sound.to_string(),
            mastery_months: months,
        })
        .collect();

    match global.format {
        OutputFormat::Auto => {
            let label = args
                .country
                .map(|c| c.to_string())
                .unwrap_or_else(|| "base".to_string());
            println!("{}", style(format!("Mastery ages ({} norms)", label)).bold());
            println!(
                "{} {}",
                style(pad_cell("SOUND", 8)).bold(),
                style("MONTHS").bold()
            );
            for row in &rows {
                println!("{} {}", pad_cell(&row.sound, 8), row.mastery_months);
            }
        }
        OutputFormat::Tsv => {
            for row in &rows {
                println!("{}\t{}", row.sound, row.mastery_months);
            }
        }
        OutputFormat::Csv => {
            println!("sound,mastery_months");
            for row in &rows {
                println!("{},{}", escape_csv(&row.sound), row.mastery_months);
            }
        }
        OutputFormat::Md => {
            let mut builder = Builder::default();
            builder.push_record(["Sound", "Mastery (months)"]);
            for row in &rows {
                builder.push_record([row.sound.clone(), row.mastery_months.to_string()]);
            }
            println!("{}", builder.build().with(Style::markdown()));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows).into_diagnostic()?)
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&rows).into_diagnostic()?)
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct PositionRow {
    sound: String,
    positions: Vec<String>,
}

fn positions(_args: PositionsArgs, global: &GlobalOpts) -> Result<()> {
    // Positions are country-invariant; any catalog build works here
    let catalog = NormCatalog::build(None);
    let rows: Vec<PositionRow> = catalog
        .positions
        .iter()
        .map(|(sound, positions)| PositionRow {
            sound: sound.to_string(),
            positions: positions.iter().map(|p| p.to_string()).collect(),
        })
        .collect();

    match global.format {
        OutputFormat::Auto => {
            println!("{}", style("Valid word positions").bold());
            println!(
                "{} {}",
                style(pad_cell("SOUND", 8)).bold(),
                style("POSITIONS").bold()
            );
            for row in &rows {
                println!("{} {}", pad_cell(&row.sound, 8), row.positions.join(", "));
            }
        }
        OutputFormat::Tsv => {
            for row in &rows {
                println!("{}\t{}", row.sound, row.positions.join(","));
            }
        }
        OutputFormat::Csv => {
            println!("sound,positions");
            for row in &rows {
                println!(
                    "{},{}",
                    escape_csv(&row.sound),
                    escape_csv(&row.positions.join(", "))
                );
            }
        }
        OutputFormat::Md => {
            let mut builder = Builder::default();
            builder.push_record(["Sound", "Positions"]);
            for row in &rows {
                builder.push_record([row.sound.clone(), row.positions.join(", ")]);
            }
            println!("{}", builder.build().with(Style::markdown()));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows).into_diagnostic()?)
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&rows).into_diagnostic()?)
        }
    }
    Ok(())
}
