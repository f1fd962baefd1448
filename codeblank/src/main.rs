//! codeblank - fill-in-the-blank source code tool
//!
//! A CLI for previewing, validating and filling in source files whose blanks
//! are marked with `/*` … `*/`.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, PreviewFormat};
use codeblank::config::CONFIG_FILE_NAME;
use codeblank::pipeline::{self, CheckError};
use codeblank::{tokenizer, CodeblankConfig, Document};
use std::path::{Path, PathBuf};

/// Main entry point for the codeblank CLI application
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Run the CLI application
fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging if verbose
    if cli.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let mut config = CodeblankConfig::discover(cli.config.as_deref(), &cwd)
        .context("Failed to load configuration")?;
    if let Some(line_ending) = cli.line_ending {
        config.line_ending = line_ending;
    }

    match cli.command {
        Commands::Preview {
            file,
            language,
            format,
            output,
        } => {
            handle_preview_command(&config, &file, language, format, output)?;
        }

        Commands::Reconstruct {
            file,
            blanks,
            blanks_file,
            language,
            output,
        } => {
            handle_reconstruct_command(&config, &file, blanks, blanks_file, language, output)?;
        }

        Commands::Check { path } => {
            handle_check_command(&config, &path)?;
        }

        Commands::Init { path, force } => {
            handle_init_command(path, force)?;
        }
    }

    Ok(())
}

/// Handle the preview command
fn handle_preview_command(
    config: &CodeblankConfig,
    file: &Path,
    language: Option<String>,
    format: PreviewFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let document = parse_file(config, file, language)?;

    let rendered = match format {
        PreviewFormat::Raw => codeblank::to_raw_text(&document, config.line_ending),
        PreviewFormat::Json => serde_json::to_string_pretty(&document)
            .context("Failed to serialize document to JSON")?,
    };

    write_output(output.as_deref(), &rendered)
}

/// Handle the reconstruct command
fn handle_reconstruct_command(
    config: &CodeblankConfig,
    file: &Path,
    mut blanks: Vec<String>,
    blanks_file: Option<PathBuf>,
    language: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    if let Some(blanks_path) = blanks_file {
        blanks.extend(read_blanks_file(&blanks_path)?);
    }

    let document = parse_file(config, file, language)?;
    log::info!(
        "Filling {} blanks with {} values",
        document.hole_count(),
        blanks.len()
    );

    let source = codeblank::reconstruct(&document, blanks.as_slice(), config.line_ending)
        .with_context(|| format!("Failed to reconstruct {}", file.display()))?;

    write_output(output.as_deref(), &source)
}

/// Handle the check command
fn handle_check_command(config: &CodeblankConfig, path: &Path) -> Result<()> {
    println!("Checking blanks under {}...", path.display());

    let reports = pipeline::check_tree(path, config);
    let mut failures = 0;
    let mut blanks = 0;

    for report in &reports {
        match &report.result {
            Ok(count) => {
                blanks += *count;
                log::info!("{}: {} blanks", report.path.display(), count);
            }
            Err(CheckError::Io(e)) => {
                // Binary files and the like are not source
                log::warn!("Skipping {}: {}", report.path.display(), e);
            }
            Err(e) => {
                failures += 1;
                println!("✗ {}: {}", report.path.display(), e);
            }
        }
    }

    println!(
        "\nChecked {} files, {} blanks, {} with errors",
        reports.len(),
        blanks,
        failures
    );

    if failures > 0 {
        anyhow::bail!("{} files have malformed blanks", failures);
    }
    println!("✓ All blanks are well formed");

    Ok(())
}

/// Handle the init command
fn handle_init_command(path: Option<PathBuf>, force: bool) -> Result<()> {
    let target_path = path.unwrap_or_else(|| PathBuf::from("."));

    // Create the target directory if it doesn't exist
    if !target_path.exists() {
        std::fs::create_dir_all(&target_path)
            .with_context(|| format!("Failed to create directory {}", target_path.display()))?;
    }

    let config_path = target_path.join(CONFIG_FILE_NAME);
    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it",
            config_path.display()
        );
    }

    CodeblankConfig::default()
        .save(&config_path)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("✓ Created {}", config_path.display());

    Ok(())
}

/// Read and parse an annotated source file
fn parse_file(
    config: &CodeblankConfig,
    file: &Path,
    language: Option<String>,
) -> Result<Document> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let language = language
        .or_else(|| tokenizer::language_for_path(file).map(str::to_string))
        .unwrap_or_else(|| config.language.clone());
    log::info!("Parsing {} as {}", file.display(), language);

    let tokenizer = tokenizer::from_config(config);
    let document = codeblank::parse(&raw, &language, &*tokenizer)
        .with_context(|| format!("Failed to parse blanks in {}", file.display()))?;

    Ok(document)
}

/// Read a JSON array of blank values
fn read_blanks_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read blank values from {}", path.display()))?;
    let values: Vec<String> = serde_json::from_str(&content).with_context(|| {
        format!(
            "Blank values in {} must be a JSON array of strings",
            path.display()
        )
    })?;
    Ok(values)
}

/// Write to `output` if given, else to stdout
fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
