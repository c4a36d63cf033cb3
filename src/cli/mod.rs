// src/cli/mod.rs
//! CLI definitions for levain
//!
//! This module contains the command-line interface definitions using clap.
//! The command implementations are in the `commands` module.
//!
//! - `mix` - Calculate ingredient masses for a dough
//! - `list` - List available recipes
//! - `show` - Show one recipe's ratios
//! - `completions` - Generate shell completion scripts

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "levain")]
#[command(author = "Levain Contributors")]
#[command(version)]
#[command(about = "Calculate ingredient masses for starter-leavened dough", long_about = None)]
pub struct Cli {
    /// Directory holding recipes.toml and units.toml
    #[arg(long, global = true, env = "LEVAIN_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Recipe book file (.toml or .json), overrides --config-dir
    #[arg(long, global = true)]
    pub recipes: Option<PathBuf>,

    /// Unit conversion file (.toml or .json), overrides --config-dir
    #[arg(long, global = true)]
    pub units: Option<PathBuf>,

    /// More log output (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate the mass of each ingredient for a dough
    Mix {
        /// Mass of the finished dough in grams
        #[arg(allow_negative_numbers = true)]
        total_mass: f64,

        /// Starter hydration as a baker's ratio (water / flour), usually about 1.0
        #[arg(allow_negative_numbers = true)]
        starter_hydration: f64,

        /// Name of the dough to make (see `levain list`)
        recipe: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List available recipes
    List,

    /// Show the ratios of a recipe
    Show {
        /// Recipe name
        recipe: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// How `mix` prints its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per ingredient with kitchen units
    Text,
    /// Pretty-printed JSON report
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_mix() {
        let cli = Cli::try_parse_from(["levain", "mix", "1000", "1.0", "overnight"]).unwrap();
        match cli.command {
            Some(Commands::Mix {
                total_mass,
                starter_hydration,
                recipe,
                format,
            }) => {
                assert_eq!(total_mass, 1000.0);
                assert_eq!(starter_hydration, 1.0);
                assert_eq!(recipe, "overnight");
                assert_eq!(format, OutputFormat::Text);
            }
            _ => panic!("expected mix command"),
        }
    }

    #[test]
    fn test_parse_negative_mass() {
        let cli = Cli::try_parse_from(["levain", "mix", "-5", "1", "sour"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Mix { total_mass, .. }) if total_mass == -5.0));
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from([
            "levain",
            "list",
            "--config-dir",
            "/opt/bakery",
            "--units",
            "converter.json",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.config_dir, Some(PathBuf::from("/opt/bakery")));
        assert_eq!(cli.units, Some(PathBuf::from("converter.json")));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Some(Commands::List)));
    }

    #[test]
    fn test_parse_json_format() {
        let cli = Cli::try_parse_from(["levain", "mix", "900", "1", "bagel", "--format", "json"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Mix { format: OutputFormat::Json, .. })
        ));
    }

    #[test]
    fn test_mass_must_be_a_number() {
        assert!(Cli::try_parse_from(["levain", "mix", "lots", "1", "sour"]).is_err());
    }
}
