mod check;
mod completions;
mod generate;

use std::path::PathBuf;

use barrel_catalog::{BarrelToml, GenerationConfig, ModuleFormat};
use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;

use crate::reports::{Report, TerminalOutput};

/// Extension trait for exiting on catalog errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for barrel_catalog::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "barrel")]
#[command(version)]
#[command(about = "Generate one module that re-exports every file in a directory")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write the catalog file
    Generate(GenerateCommand),

    /// Build the catalog and list its modules without writing
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Options shared by commands that build a catalog.
#[derive(Args)]
pub(crate) struct CatalogArgs {
    /// Directory to scan
    #[arg(required_unless_present = "config")]
    pub path: Option<PathBuf>,

    /// Module format: commonJS, amd, es6, deepCommonJS or deepAMD
    #[arg(short, long, required_unless_present = "config")]
    pub format: Option<ModuleFormat>,

    /// Catalog file name, written into the scanned directory
    #[arg(short, long, default_value = GenerationConfig::DEFAULT_OUTPUT)]
    pub output: String,

    /// Glob for files or directories to leave out (repeatable)
    #[arg(short, long = "ignore", value_name = "GLOB")]
    pub ignore: Vec<String>,

    /// Do not apply the default ignore patterns (*.txt)
    #[arg(long)]
    pub no_default_ignores: bool,

    /// Read catalogs from a barrel.toml instead of the flags above
    #[arg(short, long, conflicts_with_all = ["path", "format"])]
    pub config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl CatalogArgs {
    /// Resolve the generation configs requested on the command line.
    pub fn configs(&self) -> Vec<GenerationConfig> {
        if let Some(file) = &self.config {
            return BarrelToml::open(file).unwrap_or_exit().configs();
        }

        let (Some(path), Some(format)) = (&self.path, self.format) else {
            // clap enforces both unless --config is given
            return Vec::new();
        };

        let mut config = GenerationConfig::new(path, format).output(&self.output);
        if self.no_default_ignores {
            config = config.without_default_ignores();
        }
        vec![
            self.ignore
                .iter()
                .fold(config, |config, pattern| config.ignore(pattern)),
        ]
    }

    /// Print `report` to stdout as JSON or for the terminal.
    pub fn print(&self, report: &(impl Report + serde::Serialize)) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(report)?);
        } else {
            report.render(&mut TerminalOutput::new());
        }
        Ok(())
    }
}
