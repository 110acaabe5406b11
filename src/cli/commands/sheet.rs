//! `artic sheet` - worksheet management
//!
//! Worksheets are seeded from the norm catalog, edited (only the
//! `produced` column), then assessed with `artic assess`.

use clap::Subcommand;
use console::style;
use dialoguer::Input;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tabled::{builder::Builder, settings::Style};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::norms::{Country, NormCatalog};
use crate::entities::worksheet::Worksheet;

#[derive(Subcommand, Debug)]
pub enum SheetCommands {
    /// Seed a worksheet with every sound/position pair for a country
    New(NewArgs),

    /// Edit produced sounds row by row (Enter keeps the current value)
    Edit(EditArgs),

    /// Merge spreadsheet-edited CSV rows back into a worksheet
    Import(ImportArgs),

    /// Print a worksheet
    Show(ShowArgs),
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Country whose norms the assessment will use
    #[arg(long, value_enum)]
    pub country: Country,

    /// Child's first name
    #[arg(long)]
    pub child: String,

    /// Child's age as years;months, e.g. 4;6
    #[arg(long)]
    pub age: String,

    /// Output file
    #[arg(long, short = 'o', default_value = "worksheet.yaml")]
    pub output: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Worksheet file to edit in place
    pub file: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct ImportArgs {
    /// CSV file with sound,position,produced rows
    pub csv: PathBuf,

    /// Worksheet to update in place
    #[arg(long)]
    pub into: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Worksheet file
    pub file: PathBuf,
}

pub fn run(cmd: SheetCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        SheetCommands::New(args) => new(args, global),
        SheetCommands::Edit(args) => edit(args, global),
        SheetCommands::Import(args) => import(args, global),
        SheetCommands::Show(args) => show(args, global),
    }
}

fn new(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    let catalog = NormCatalog::build(Some(args.country));
    let sheet = Worksheet::seeded(
        &catalog,
        &args.country.to_string(),
        &args.child,
        &args.age,
    );

    // CSV carries rows only (for spreadsheets); YAML is the full document
    let csv = global.format == OutputFormat::Csv;
    if csv {
        let file = File::create(&args.output).into_diagnostic()?;
        sheet.write_csv(file)?;
    } else {
        sheet.save(&args.output)?;
    }

    if !global.quiet {
        println!(
            "{} Created worksheet {} ({} rows, {} norms)",
            style("✓").green(),
            args.output.display(),
            sheet.rows.len(),
            args.country
        );
        let next = if csv {
            format!(
                "artic sheet import {} --into <SHEET.yaml>",
                args.output.display()
            )
        } else {
            format!("artic assess {}", args.output.display())
        };
        println!("Edit the produced column, then run: {}", style(next).yellow());
    }
    Ok(())
}

fn import(args: ImportArgs, global: &GlobalOpts) -> Result<()> {
    let mut sheet = Worksheet::load(&args.into)?;

    let file = File::open(&args.csv).into_diagnostic()?;
    sheet.read_csv(BufReader::new(file))?;
    sheet.save(&args.into)?;

    if !global.quiet {
        println!(
            "{} Imported {} row(s) from {} into {}",
            style("✓").green(),
            sheet.rows.len(),
            args.csv.display(),
            args.into.display()
        );
    }
    Ok(())
}

fn edit(args: EditArgs, global: &GlobalOpts) -> Result<()> {
    let mut sheet = Worksheet::load(&args.file)?;

    let mut changed = 0usize;
    for row in &mut sheet.rows {
        let prompt = format!("/{}/ ({})", row.sound, row.position);
        let value: String = Input::new()
            .with_prompt(prompt)
            .default(row.produced.clone())
            .interact_text()
            .into_diagnostic()?;
        if value != row.produced {
            row.produced = value;
            changed += 1;
        }
    }

    sheet.save(&args.file)?;
    if !global.quiet {
        println!(
            "{} Saved {} ({} row(s) changed)",
            style("✓").green(),
            args.file.display(),
            changed
        );
    }
    Ok(())
}

fn show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let sheet = Worksheet::load(&args.file)?;

    match global.format {
        OutputFormat::Auto | OutputFormat::Yaml => print!("{}", sheet.to_yaml()?),
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&sheet).into_diagnostic()?
            );
        }
        OutputFormat::Csv => sheet.write_csv(io::stdout())?,
        OutputFormat::Tsv => {
            for row in &sheet.rows {
                println!("{}\t{}\t{}", row.sound, row.position, row.produced);
            }
        }
        OutputFormat::Md => {
            let mut builder = Builder::default();
            builder.push_record(["Sound", "Position", "Produced"]);
            for row in &sheet.rows {
                builder.push_record([
                    row.sound.as_str(),
                    row.position.as_str(),
                    row.produced.as_str(),
                ]);
            }
            println!("{}", builder.build().with(Style::markdown()));
        }
    }
    Ok(())
}
