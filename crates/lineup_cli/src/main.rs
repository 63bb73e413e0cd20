//! Lineup CLI
//!
//! Drives the lineup engine from JSON command scripts and prints the result.

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "lineup")]
#[command(about = "Softball lineup manager: replay command scripts, print lineups", long_about = None)]
struct Cli {
    /// Config file (overrides LINEUP_CONFIG_PATH)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Print every lineup and the roster panel
    Show {
        /// Only print this lineup
        #[arg(long)]
        lineup: Option<String>,
    },

    /// Apply a JSON array of commands in order
    Replay {
        /// Script file path
        #[arg(long)]
        script: PathBuf,

        /// Write every command response as JSON here
        #[arg(long)]
        out: Option<PathBuf>,

        /// Skip printing the final state
        #[arg(long, default_value = "false")]
        quiet: bool,
    },

    /// Print the JSON schema of the command format
    Schema {
        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[cfg(feature = "cli")]
fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder.target(env_logger::Target::Stderr);
    builder.filter_level(if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn });
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    builder.init();
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut state = lineup_cli::load_state(cli.config.as_deref())?;

    match cli.command {
        Commands::Show { lineup } => match lineup {
            Some(key) => {
                let key = lineup_core::LineupKey::new(key);
                let Some(found) = state.lineups().get(&key) else {
                    anyhow::bail!("Unknown lineup: {key}");
                };
                let selected = state.selected_key() == Some(&key);
                print!("{}", lineup_cli::render_lineup(&key, found, selected));
            }
            None => print!("{}", lineup_cli::render_state(&state)),
        },

        Commands::Replay { script, out, quiet } => {
            println!("Replaying {}", script.display());
            let commands = lineup_cli::load_script(&script)?;
            let responses = lineup_cli::run_script(&mut state, commands);

            for (step, response) in responses.iter().enumerate() {
                println!("{}", lineup_cli::summarize(step, response));
            }

            if let Some(out_path) = out {
                let json = serde_json::to_string_pretty(&responses)?;
                std::fs::write(&out_path, json)
                    .with_context(|| format!("Failed to write {}", out_path.display()))?;
                println!("Responses saved to: {}", out_path.display());
            }

            if !quiet {
                println!();
                print!("{}", lineup_cli::render_state(&state));
            }
        }

        Commands::Schema { out } => {
            let schema = serde_json::to_string_pretty(&lineup_core::Command::json_schema())?;
            match out {
                Some(path) => {
                    std::fs::write(&path, schema)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Schema saved to: {}", path.display());
                }
                None => println!("{schema}"),
            }
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("lineup CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
