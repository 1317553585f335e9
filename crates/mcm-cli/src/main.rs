//! `mcm` entry point.
//!
//! Parses arguments, composes the application via the bootstrap module
//! and dispatches to the matching handler. This is the only layer that
//! prints errors and decides the process exit code.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use mcm_cli::error::CliError;
use mcm_cli::{
    Cli, CliConfig, Commands, ProfileCommand, ServerCommand, bootstrap, handlers,
};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        if let CliError::Host(host_err) = &err
            && let Some(diagnostics) = host_err.diagnostics()
        {
            eprintln!("  {diagnostics}");
        }
        std::process::exit(err.exit_code());
    }
}

/// `RUST_LOG` wins when set; otherwise `--verbose` raises the default
/// filter from warnings to debug.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig::resolve(cli.profiles_dir)?;
    let ctx = bootstrap(&config)?;

    match command {
        Commands::Profile { command } => match command {
            ProfileCommand::Create {
                name,
                server_dir,
                mc_version,
                backup_dir,
                entrypoint,
            } => handlers::profile::create(
                ctx.profiles.as_ref(),
                handlers::profile::CreateArgs {
                    name,
                    server_dir,
                    mc_version,
                    backup_dir,
                    entrypoint,
                },
            ),
            ProfileCommand::List { verbose } => {
                handlers::profile::list(ctx.profiles.as_ref(), verbose)
            }
        },
        Commands::Server { command } => match command {
            ServerCommand::Start { name } => handlers::server::start(&ctx, &name),
            ServerCommand::Stop { name } => handlers::server::stop(&ctx, &name),
            ServerCommand::Run { name, command } => {
                handlers::server::run(&ctx, &name, &command.join(" "))
            }
            ServerCommand::List => handlers::server::list(&ctx),
            ServerCommand::Backup {
                name,
                world,
                progress,
            } => handlers::backup::execute(&ctx, &name, world, progress),
        },
    }
}
