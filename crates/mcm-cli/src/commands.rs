//! Subcommand definitions for the `mcm` binary.

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Manage server profiles
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
    /// Control server instances on this host
    Server {
        #[command(subcommand)]
        command: ServerCommand,
    },
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Create a new profile; prompts for anything not given as a flag
    Create {
        /// Profile name
        #[arg(long)]
        name: Option<String>,

        /// Directory the server lives in
        #[arg(long = "server-dir", value_name = "DIR")]
        server_dir: Option<String>,

        /// Minecraft version, e.g. "1.20.4/fabric"
        #[arg(long = "mc-version", value_name = "VERSION")]
        mc_version: Option<String>,

        /// Directory backups are written to
        #[arg(long = "backup-dir", value_name = "DIR")]
        backup_dir: Option<String>,

        /// Command line that launches the server
        #[arg(long, default_value = "java -jar server.jar")]
        entrypoint: String,
    },
    /// List all profiles
    List {
        /// Show the full properties of each profile
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Subcommand)]
pub enum ServerCommand {
    /// Start a server inside a detached session
    Start {
        /// Profile name
        name: String,
    },
    /// Gracefully stop a running server
    Stop {
        /// Profile name
        name: String,
    },
    /// Send a console command to a running server
    Run {
        /// Profile name
        name: String,
        /// The console command, e.g. "say hello"
        #[arg(required = true, num_args = 1..)]
        command: Vec<String>,
    },
    /// List servers currently running on this host
    List,
    /// Archive a server directory as a .tar.gz backup
    Backup {
        /// Profile name
        name: String,
        /// Only archive the server's world directory
        #[arg(long)]
        world: bool,
        /// Show a progress bar while archiving
        #[arg(long)]
        progress: bool,
    },
}
