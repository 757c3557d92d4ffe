//! Sorts and checks Stylus stylesheets from the command line.
//!
//! Usage:
//!   smart-stylus-linter sort [PATHS]... [--check | --stdout]
//!   smart-stylus-linter lint [PATHS]...
//!
//! Without PATHS the `include` patterns from the config are used, or the
//! current directory is scanned for files with a configured extension.

mod commands;
mod report;
mod targets;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use smart_stylus_linter_config::Config;

#[derive(Parser, Debug)]
#[command(name = "smart-stylus-linter", version)]
#[command(about = "Keeps declarations in Stylus blocks sorted and free of colons and semicolons")]
struct Args {
    /// Config file to use instead of the project or user config
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sort the declarations inside every block
    Sort {
        paths: Vec<PathBuf>,

        /// Report files that would change without writing them; exits 1 if any would
        #[arg(long)]
        check: bool,

        /// Print sorted text instead of writing files
        #[arg(long, conflicts_with = "check")]
        stdout: bool,
    },
    /// Report unsorted declarations and stray punctuation
    Lint { paths: Vec<PathBuf> },
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return match Config::load_from_path(path)? {
            Some(config) => Ok(config),
            None => bail!("config file {} does not exist", path.display()),
        };
    }

    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    match Config::discover(&cwd)? {
        Some(config) => Ok(config),
        None => {
            log::debug!("no config found, using defaults");
            Ok(Config::default())
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(args.config.as_deref())?;
    let mut out = std::io::stdout().lock();

    match args.command {
        Command::Sort {
            paths,
            check,
            stdout,
        } => {
            let targets = targets::collect(&paths, &config)?;
            let sorted = commands::sort(&targets, &config)?;

            if stdout {
                for result in &sorted {
                    write!(out, "{}", result.text)?;
                }
                return Ok(ExitCode::SUCCESS);
            }

            let changed: Vec<&str> = sorted
                .iter()
                .filter(|result| result.changed)
                .map(|result| result.path.as_str())
                .collect();
            if !check {
                commands::write_back(&targets, &sorted)?;
            }
            report::print_sorted(&mut out, &changed, check)?;

            if check && !changed.is_empty() {
                return Ok(ExitCode::FAILURE);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Lint { paths } => {
            let targets = targets::collect(&paths, &config)?;
            let checked = commands::lint(&targets, &config)?;
            report::print_diagnostics(&mut out, &checked)?;

            if checked.iter().any(commands::Checked::has_errors) {
                return Ok(ExitCode::FAILURE);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    match run(Args::parse()) {
        Ok(code) => code,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::from(2)
        }
    }
}
