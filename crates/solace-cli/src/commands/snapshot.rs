use std::io::IsTerminal;
use std::path::Path;

use solace_core::Snapshot;

use crate::app;
use crate::cli::{BackupArgs, Cli, RestoreArgs};

pub fn handle_backup(cli: &Cli, args: &BackupArgs) -> anyhow::Result<()> {
    let journal = app::unlock_journal(cli)?;

    if !args.yes && std::io::stdin().is_terminal() {
        let proceed = dialoguer::Confirm::new()
            .with_prompt(format!(
                "Write an UNENCRYPTED snapshot to {}?",
                args.destination
            ))
            .default(false)
            .interact()?;
        if !proceed {
            return Err(anyhow::anyhow!("Backup cancelled"));
        }
    }

    let snapshot = journal.backup()?;
    let destination = Path::new(&args.destination);
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                anyhow::anyhow!(
                    "Failed to create backup directory {}: {}",
                    parent.display(),
                    e
                )
            })?;
        }
    }
    std::fs::write(destination, snapshot.to_json()?)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", destination.display(), e))?;

    if !cli.quiet {
        println!("Backed up journal to {}", args.destination);
        println!("Warning: the snapshot is plaintext. Anyone holding it can read every entry.");
    }
    Ok(())
}

pub fn handle_restore(cli: &Cli, args: &RestoreArgs) -> anyhow::Result<()> {
    let mut journal = app::unlock_journal(cli)?;

    let raw = std::fs::read_to_string(&args.source)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", args.source, e))?;
    let snapshot = Snapshot::from_json(&raw)?;
    journal.restore(snapshot)?;

    if !cli.quiet {
        println!("Restore complete: {} entries", journal.entries().len());
    }
    Ok(())
}
