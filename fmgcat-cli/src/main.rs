//! fmgcat CLI
//!
//! Command-line interface for surveying and cataloging FMG text resources
//! across FromSoftware game installations.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

use fmgcat_bnd::DcxBndReader;
use fmgcat_core::{FmgRecord, Game};
use fmgcat_data::{CatalogEmitter, KeyTable, LanguageTable, Tables, build_catalogs};
use fmgcat_scan::{resolve_roots, scan_all};

mod emit;
mod error;

use emit::{TextEmitter, keyed_summary};
use error::CliError;

#[derive(Parser)]
#[command(name = "fmgcat")]
#[command(about = "Survey and catalog FMG text resources in game installations", long_about = None)]
struct Cli {
    /// Key table file to use instead of the bundled one
    #[arg(long, global = true, value_name = "FILE")]
    keys: Option<PathBuf>,

    /// Language table file to use instead of the bundled one
    #[arg(long, global = true, value_name = "FILE")]
    languages: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Survey every (slot, name) key observed across the given roots
    Keys {
        /// Directories to search for game installations
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Build the per-game catalogs and print them
    Data {
        /// Directories to search for game installations
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Write the catalog here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List all supported games
    List,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Keys { ref paths } => run_keys(&cli, paths),
        Commands::Data {
            ref paths,
            ref output,
        } => run_data(&cli, paths, output.as_deref()),
        Commands::List => {
            run_list();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!(
            "{} {e}",
            "error:".if_supports_color(Stderr, |t| t.bright_red())
        );
        std::process::exit(1);
    }
}

/// Load the curated tables, honoring the per-run override files.
fn load_tables(cli: &Cli) -> Result<Tables, CliError> {
    let keys = match &cli.keys {
        Some(path) => KeyTable::from_path(path)?,
        None => KeyTable::builtin()?,
    };
    let languages = match &cli.languages {
        Some(path) => LanguageTable::from_path(path)?,
        None => LanguageTable::builtin()?,
    };
    Ok(Tables { keys, languages })
}

/// Locate every game under the candidate roots and scan them all.
fn scan_records(paths: &[PathBuf]) -> Result<Vec<FmgRecord>, CliError> {
    let roots = resolve_roots(paths)?;
    let reader = DcxBndReader::new();
    let records = scan_all(&roots, &reader)?;
    log::info!(
        "collected {} FMG records across {} games",
        records.len(),
        roots.len()
    );
    Ok(records)
}

fn run_keys(cli: &Cli, paths: &[PathBuf]) -> Result<(), CliError> {
    let tables = load_tables(cli)?;
    let records = scan_records(paths)?;
    print!("{}", keyed_summary(&tables, &records)?);
    Ok(())
}

fn run_data(cli: &Cli, paths: &[PathBuf], output: Option<&Path>) -> Result<(), CliError> {
    let tables = load_tables(cli)?;
    let records = scan_records(paths)?;
    let set = build_catalogs(&tables, &records)?;

    match output {
        Some(path) => {
            let file = fs::File::create(path)?;
            let mut emitter = TextEmitter::new(BufWriter::new(file));
            emitter.emit(&tables, &set)?;
            println!(
                "{} catalog written to {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut emitter = TextEmitter::new(stdout.lock());
            emitter.emit(&tables, &set)?;
        }
    }
    Ok(())
}

fn run_list() {
    println!("Supported games:");
    println!();

    for &game in Game::all() {
        println!(
            "  {} [{}]",
            game.short_name().if_supports_color(Stdout, |t| t.bold()),
            game.display_name().if_supports_color(Stdout, |t| t.cyan()),
        );
        println!("    Install folder: {}", game.path_part());
        println!("    Aliases: {}", game.aliases().join(", "));
    }
    let _ = io::stdout().flush();
}
