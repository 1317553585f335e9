//! Main CLI parser and global arguments.

use clap::Parser;
use std::path::PathBuf;

use crate::commands::Commands;

/// Manage Minecraft server instances: profiles, sessions and backups.
#[derive(Parser)]
#[command(name = "mcm")]
#[command(version)]
#[command(about = "Manage Minecraft server instances: profiles, sessions and backups")]
pub struct Cli {
    /// Use this profiles directory instead of ~/minecraft-manager/profiles
    #[arg(long = "profiles-dir", global = true, value_name = "DIR")]
    pub profiles_dir: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
