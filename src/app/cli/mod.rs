//! CLI Adapter.

mod deploy;
mod files;
mod prompt;
mod verify;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::config::{ConfigFile, ScaffoldSettings};
use crate::domain::{AppError, ProfileLayout};

#[derive(Parser)]
#[command(name = "mpvcfg")]
#[command(version)]
#[command(
    about = "Deploy a fixed mpv configuration into an existing user profile",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct GlobalArgs {
    /// User profile name (prompted for when omitted)
    #[arg(short, long, global = true)]
    user: Option<String>,
    /// Directory holding one folder per user profile
    #[arg(short = 'r', long, global = true, env = "MPVCFG_USERS_ROOT")]
    users_root: Option<PathBuf>,
    /// Profile layout: windows (AppData/Roaming) or xdg (.config)
    #[arg(short, long, global = true, env = "MPVCFG_LAYOUT", value_parser = parse_layout)]
    layout: Option<ProfileLayout>,
    /// Optional TOML file providing users_root and layout
    #[arg(short, long, global = true, env = "MPVCFG_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the mpv configuration into a user profile (default)
    #[clap(visible_alias = "d")]
    Deploy {
        /// Show planned writes without touching the disk
        #[arg(long)]
        dry_run: bool,
    },
    /// Compare deployed files with the embedded payloads
    #[clap(visible_alias = "v")]
    Verify {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the files that deploy writes
    #[clap(visible_alias = "f")]
    Files {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_layout(value: &str) -> Result<ProfileLayout, String> {
    value.parse::<ProfileLayout>().map_err(|err| err.to_string())
}

impl GlobalArgs {
    fn settings(&self) -> Result<ScaffoldSettings, AppError> {
        let file = self.config.as_deref().map(ConfigFile::load).transpose()?;
        Ok(ScaffoldSettings::resolve(self.users_root.clone(), self.layout, file.as_ref()))
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        None => deploy::run_deploy(&cli.global, false).map(|_| 0),
        Some(Commands::Deploy { dry_run }) => deploy::run_deploy(&cli.global, dry_run).map(|_| 0),
        Some(Commands::Verify { json }) => verify::run_verify(&cli.global, json),
        Some(Commands::Files { json }) => files::run_files(json).map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
