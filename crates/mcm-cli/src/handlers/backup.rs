//! Backup command handler.

use indicatif::{ProgressBar, ProgressStyle};
use mcm_runtime::{BackupRequest, collect_files, create_backup};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute `mcm server backup`.
pub fn execute(ctx: &CliContext, name: &str, world: bool, progress: bool) -> Result<(), CliError> {
    let profile = ctx.profiles.load(name)?;

    let request = BackupRequest {
        profile_name: profile.name.clone(),
        server_dir: profile.server_location.clone(),
        backup_dir: profile.backup_location.clone(),
        world_only: world,
    };

    let archive = if progress {
        // Pre-count so the bar has a length; a source error here will be
        // reported properly by create_backup below.
        let total = collect_files(&request.source_dir())
            .map(|files| files.len() as u64)
            .unwrap_or(0);

        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::with_template("{msg} [{bar:40}] {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar.set_message("Archiving");

        let archive = create_backup(&request, |_| bar.inc(1))?;
        bar.finish_and_clear();
        archive
    } else {
        create_backup(&request, |_| {})?
    };

    println!(
        "Successfully backed up '{}' to {}",
        profile.name,
        archive.display()
    );
    Ok(())
}
