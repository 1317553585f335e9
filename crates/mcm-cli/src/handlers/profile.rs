//! Profile command handlers: create and list.

use std::path::PathBuf;

use mcm_core::{Profile, ProfileRepository};

use crate::error::CliError;
use crate::input;
use crate::names::random_craft_name;

/// Flags collected by `mcm profile create`; anything `None` is prompted
/// for interactively.
pub struct CreateArgs {
    pub name: Option<String>,
    pub server_dir: Option<String>,
    pub mc_version: Option<String>,
    pub backup_dir: Option<String>,
    pub entrypoint: String,
}

/// Execute `mcm profile create`.
pub fn create(profiles: &dyn ProfileRepository, args: CreateArgs) -> Result<(), CliError> {
    let name = resolve_name(profiles, args.name)?;
    let server_location = resolve_dir("server directory", args.server_dir)?;
    let server_version = resolve_value("Minecraft version (e.g. 1.20.4/fabric)", args.mc_version)?;
    let backup_location = resolve_dir("backup directory", args.backup_dir)?;

    let profile = Profile {
        name,
        server_location,
        backup_location,
        server_version,
        entrypoint: args.entrypoint,
    };

    println!("Creating the following profile:");
    println!("* {}", profile.name);
    print_properties(&profile);
    if !input::prompt_confirmation("Is this OK?")? {
        return Err(CliError::Aborted);
    }

    let location = profiles.save(&profile)?;
    println!("Saved new profile to {}", location.display());
    Ok(())
}

/// Execute `mcm profile list`.
pub fn list(profiles: &dyn ProfileRepository, verbose: bool) -> Result<(), CliError> {
    let infos = profiles.list()?;
    println!("Found {} profile(s):", infos.len());

    for info in infos {
        match &info.profile {
            Some(profile) => {
                println!("* {} [{}]", profile.name, info.location.display());
                if verbose {
                    print_properties(profile);
                }
            }
            None => println!("* <unreadable> [{}]", info.location.display()),
        }
    }
    Ok(())
}

fn print_properties(profile: &Profile) {
    println!("    version:    {}", profile.server_version);
    println!("    server:     {}", profile.server_location.display());
    println!("    backups:    {}", profile.backup_location.display());
    println!("    entrypoint: {}", profile.entrypoint);
}

fn resolve_name(
    profiles: &dyn ProfileRepository,
    name: Option<String>,
) -> Result<String, CliError> {
    let name = match name {
        Some(name) => name,
        None => {
            let suggestion = random_craft_name();
            input::prompt_string_with_default("Profile name", &suggestion)?
        }
    };
    if name.trim().is_empty() {
        return Err(CliError::Arguments("profile name cannot be empty".to_string()));
    }

    if profiles.exists(&name)?
        && !input::prompt_confirmation(&format!(
            "A profile named '{name}' already exists. Overwrite it?"
        ))?
    {
        return Err(CliError::Aborted);
    }
    Ok(name)
}

fn resolve_value(prompt: &str, value: Option<String>) -> Result<String, CliError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Ok(input::prompt_string(prompt)?),
    }
}

/// Resolve a directory path, re-prompting until it exists or the user
/// explicitly accepts a nonexistent one.
fn resolve_dir(label: &str, value: Option<String>) -> Result<PathBuf, CliError> {
    let mut value = value.filter(|v| !v.trim().is_empty());
    loop {
        let raw = match value.take() {
            Some(raw) => raw,
            None => input::prompt_string(&format!("Please enter the {label}"))?,
        };
        let path = expand_user(raw.trim());
        if path.is_dir()
            || input::prompt_confirmation(&format!(
                "The directory {} does not exist. Use it anyway?",
                path.display()
            ))?
        {
            return Ok(path);
        }
    }
}

/// Expand a leading `~/` to the user's home directory.
fn expand_user(raw: &str) -> PathBuf {
    if let Some(rest) = raw.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_user_rewrites_tilde_prefix() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_user("~/servers/alpha"), home.join("servers/alpha"));
        }
    }

    #[test]
    fn test_expand_user_leaves_plain_paths_alone() {
        assert_eq!(expand_user("/srv/alpha"), PathBuf::from("/srv/alpha"));
        assert_eq!(expand_user("relative/dir"), PathBuf::from("relative/dir"));
    }
}
