// src/main.rs

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

/// Default log filter for a given number of `-v` flags
fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_dir = cli.config_dir.as_deref();
    let recipes = cli.recipes.as_deref();
    let units = cli.units.as_deref();

    match cli.command {
        Some(Commands::Mix {
            total_mass,
            starter_hydration,
            recipe,
            format,
        }) => {
            let pantry = commands::open_pantry(config_dir, recipes, units)?;
            commands::cmd_mix(&pantry, total_mass, starter_hydration, &recipe, format)
        }
        Some(Commands::List) => {
            let pantry = commands::open_pantry(config_dir, recipes, units)?;
            commands::cmd_list(&pantry)
        }
        Some(Commands::Show { recipe }) => {
            let pantry = commands::open_pantry(config_dir, recipes, units)?;
            commands::cmd_show(&pantry, &recipe)
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "levain", &mut std::io::stdout());
            Ok(())
        }
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(0), "warn");
        assert_eq!(default_filter(1), "info");
        assert_eq!(default_filter(5), "debug");
    }
}
