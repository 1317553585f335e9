//! Server lifecycle command handlers.

use mcm_core::OperationError;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute `mcm server start`.
pub fn start(ctx: &CliContext, name: &str) -> Result<(), CliError> {
    let profile = ctx.profiles.load(name)?;

    if ctx.host.is_server_running(&profile.name)? {
        return Err(OperationError::InvalidState(format!(
            "server '{}' is already running",
            profile.name
        ))
        .into());
    }

    ctx.host
        .start_server(&profile.name, &profile.server_location, &profile.entrypoint)?;
    println!("Started '{}' ({}).", profile.name, profile.server_version);
    Ok(())
}

/// Execute `mcm server stop`.
pub fn stop(ctx: &CliContext, name: &str) -> Result<(), CliError> {
    let profile = ctx.profiles.load(name)?;

    if !ctx.host.is_server_running(&profile.name)? {
        println!("Server '{}' is not running.", profile.name);
        return Ok(());
    }

    ctx.host.stop_server(&profile.name)?;
    println!("Stopped '{}'.", profile.name);
    Ok(())
}

/// Execute `mcm server run`.
pub fn run(ctx: &CliContext, name: &str, command: &str) -> Result<(), CliError> {
    let profile = ctx.profiles.load(name)?;

    if !ctx.host.is_server_running(&profile.name)? {
        return Err(OperationError::InvalidState(format!(
            "server '{}' is not running",
            profile.name
        ))
        .into());
    }

    ctx.host.run_in_server(&profile.name, command)?;
    println!("Sent command to '{}'.", profile.name);
    Ok(())
}

/// Execute `mcm server list`.
pub fn list(ctx: &CliContext) -> Result<(), CliError> {
    let running = ctx.host.list_running()?;

    if running.is_empty() {
        println!("No servers are running.");
        return Ok(());
    }

    println!("Found {} running server(s):\n", running.len());
    println!("{:<24} Location", "Name");
    println!("{}", "-".repeat(48));
    for descriptor in running {
        println!("{:<24} {}", descriptor.name, descriptor.host_location);
    }
    Ok(())
}
