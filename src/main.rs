//! CLI entry point for control-rows
//!
//! Provides command-line interface for checking control tables,
//! listing compiled controls, and building JSON output.

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::*;
use control_rows::config::{render_json, OutputWriter};
use control_rows::core::{
    build_descriptor, compile,
    parser::{parse_table_file, ControlTable},
    validator::LintLevel,
    BuildConfig, BuildError, DuplicateDetector, lint_container,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "control-rows")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a table for invalid rows, duplicate ids and suspicious options
    Check {
        /// Path to the control table
        #[arg(short, long)]
        table: PathBuf,
    },

    /// List the compiled controls
    List {
        /// Path to the control table
        #[arg(short, long)]
        table: PathBuf,
    },

    /// Compile a table to JSON
    Build {
        /// Path to the control table
        #[arg(short, long)]
        table: PathBuf,

        /// Write to this file (atomically, with backup) instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override the container name
        #[arg(long)]
        container: Option<String>,

        /// Accept a table without rows
        #[arg(long)]
        allow_empty: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Check { table } => check_table(&table)?,
        Commands::List { table } => list_controls(&table)?,
        Commands::Build {
            table,
            output,
            container,
            allow_empty,
        } => build_output(&table, output, container, allow_empty)?,
    }

    Ok(())
}

/// Installs the tracing subscriber (stderr, so JSON on stdout stays clean)
fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(match verbosity {
            0 => "warn",
            1 => "control_rows=debug",
            _ => "control_rows=trace",
        })?,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false).compact())
        .try_init()
        .context("Failed to initialise logging")?;

    Ok(())
}

/// Expands `~` and parses the table at `table_path`
fn load_table(table_path: &Path) -> anyhow::Result<(PathBuf, ControlTable)> {
    let expanded_path = shellexpand::tilde(
        table_path
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?,
    );
    let path = PathBuf::from(expanded_path.as_ref());

    let table = parse_table_file(&path)
        .with_context(|| format!("Failed to parse table {}", path.display()))?;

    Ok((path, table))
}

/// Check a table, reporting every problem rather than stopping at the first
fn check_table(table_path: &Path) -> anyhow::Result<()> {
    let (path, table) = load_table(table_path)?;
    println!("{} Checking table: {}", "→".cyan(), path.display());
    println!("{} Found {} rows\n", "✓".green(), table.rows.len());

    let config = BuildConfig::from_settings(&table.settings);
    let mut problems = 0;

    // Invalid rows and duplicate ids, all of them
    let mut detector = DuplicateDetector::new();
    for (index, row) in table.rows.iter().enumerate() {
        match build_descriptor(row, &config.defaults) {
            Ok(descriptor) => {
                detector.add_id(&descriptor.id, index);
            }
            Err(e) => {
                problems += 1;
                println!(
                    "{} line {}: {}",
                    "✗".red().bold(),
                    table.row_lines[index],
                    e
                );
            }
        }
    }

    for duplicate in detector.find_duplicates() {
        problems += 1;
        let lines = duplicate
            .indices
            .iter()
            .map(|&i| table.row_lines[i].to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{} duplicate id {} on lines {}",
            "✗".red().bold(),
            duplicate.id.cyan(),
            lines
        );
    }

    if table.rows.is_empty() && !config.container.allow_empty {
        problems += 1;
        println!("{} table has no rows (set @allow_empty = true to permit)", "✗".red().bold());
    }

    // Option lint only makes sense once the table compiles
    if problems == 0 {
        let container = compile(&table.rows, &config)?;
        let report = lint_container(&container);

        for issue in &report.issues {
            let marker = match issue.level {
                LintLevel::Error => "✗".red().bold(),
                LintLevel::Warning => "⚠".yellow().bold(),
            };
            println!(
                "{} line {} ({}): {}",
                marker,
                table.row_lines[issue.control_index],
                issue.control_id.cyan(),
                issue.message
            );
            if let Some(suggestion) = &issue.suggestion {
                println!("   {} {}", "Suggestion:".dimmed(), suggestion);
            }
        }

        problems += report.count(LintLevel::Error);
    }

    if problems == 0 {
        println!("{} {}", "✓".green().bold(), "No problems detected!".bold());
    } else {
        println!(
            "\n{} {} problem{} found",
            "✗".red().bold(),
            problems,
            if problems == 1 { "" } else { "s" }
        );
        std::process::exit(1);
    }

    Ok(())
}

/// List every compiled control
fn list_controls(table_path: &Path) -> anyhow::Result<()> {
    let (path, table) = load_table(table_path)?;
    let config = BuildConfig::from_settings(&table.settings);
    let container = compile(&table.rows, &config).map_err(|e| located(e, &table))?;

    println!(
        "{}",
        format!("Container '{}' from: {}\n", container.name(), path.display()).bold()
    );

    for descriptor in &container {
        let options = descriptor
            .options
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(" ");

        println!(
            "{} {} {}",
            descriptor.id.cyan().bold(),
            format!("\"{}\"", descriptor.label).green(),
            options.dimmed()
        );
    }

    println!("\n{} Total: {} controls", "✓".green(), container.len());

    Ok(())
}

/// Compile and emit JSON
fn build_output(
    table_path: &Path,
    output: Option<PathBuf>,
    container_name: Option<String>,
    allow_empty: bool,
) -> anyhow::Result<()> {
    let (_, table) = load_table(table_path)?;

    // Later source wins: built-in defaults, table directives, CLI flags
    let mut config = BuildConfig::from_settings(&table.settings);
    if let Some(name) = container_name {
        config.container_name = name;
    }
    if allow_empty {
        config.container.allow_empty = true;
    }

    let container = compile(&table.rows, &config).map_err(|e| located(e, &table))?;
    let json = render_json(&container)?;

    match output {
        Some(output_path) => {
            let writer = OutputWriter::new(output_path)?;
            if let Some(backup) = writer.write(&json)? {
                eprintln!("{} Backed up previous output to {}", "→".cyan(), backup.display());
            }
            eprintln!(
                "{} Wrote {} controls to {}",
                "✓".green(),
                container.len(),
                writer.target().display()
            );
        }
        None => print!("{}", json),
    }

    Ok(())
}

/// Attaches the source line to a build error
fn located(error: BuildError, table: &ControlTable) -> anyhow::Error {
    let line = match &error {
        BuildError::InvalidSpec { index, .. } => table.row_lines.get(*index),
        BuildError::DuplicateId { second, .. } => table.row_lines.get(*second),
        BuildError::EmptyContainer { .. } => None,
    };

    match line {
        Some(line) => anyhow::Error::new(error).context(format!("Table line {}", line)),
        None => anyhow::Error::new(error),
    }
}
