// build.rs

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: configuration directory
fn config_dir_arg() -> Arg {
    Arg::new("config_dir")
        .long("config-dir")
        .value_name("DIR")
        .env("LEVAIN_CONFIG_DIR")
        .help("Directory holding recipes.toml and units.toml")
}

/// Common argument: recipe book file
fn recipes_arg() -> Arg {
    Arg::new("recipes")
        .long("recipes")
        .value_name("FILE")
        .help("Recipe book file (.toml or .json)")
}

/// Common argument: unit conversion file
fn units_arg() -> Arg {
    Arg::new("units")
        .long("units")
        .value_name("FILE")
        .help("Unit conversion file (.toml or .json)")
}

fn build_cli() -> Command {
    Command::new("levain")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Levain Contributors")
        .about("Calculate ingredient masses for starter-leavened dough")
        .subcommand_required(false)
        .arg(config_dir_arg())
        .arg(recipes_arg())
        .arg(units_arg())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("More log output (-v info, -vv debug)"),
        )
        .subcommand(
            Command::new("mix")
                .about("Calculate the mass of each ingredient for a dough")
                .arg(Arg::new("total_mass").required(true).help("Mass of the finished dough in grams"))
                .arg(
                    Arg::new("starter_hydration")
                        .required(true)
                        .help("Starter hydration as a baker's ratio (water / flour), usually about 1.0"),
                )
                .arg(Arg::new("recipe").required(true).help("Name of the dough to make"))
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .value_parser(["text", "json"])
                        .default_value("text")
                        .help("Output format"),
                ),
        )
        .subcommand(Command::new("list").about("List available recipes"))
        .subcommand(
            Command::new("show")
                .about("Show the ratios of a recipe")
                .arg(Arg::new("recipe").required(true).help("Recipe name")),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(["bash", "zsh", "fish", "powershell", "elvish"])
                        .help("Shell type"),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("levain.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
