//! CLI adapter for the Minecraft server manager.
//!
//! Parsing, prompting, printing and exit codes happen here and nowhere
//! else. Handlers receive the composed [`bootstrap::CliContext`] and
//! delegate the actual work to `mcm-core` services.

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod input;
pub mod names;
pub mod parser;

pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{Commands, ProfileCommand, ServerCommand};
pub use error::CliError;
pub use parser::Cli;
