use std::io::IsTerminal;
use std::path::PathBuf;

use solace_core::{FileSlotStore, Journal};

use crate::app;
use crate::cli::{Cli, InitArgs};
use crate::config::{self, SolaceConfig};

pub fn handle_init(cli: &Cli, args: &InitArgs) -> anyhow::Result<()> {
    let path = match &args.path {
        Some(path) => PathBuf::from(path),
        None => app::resolve_journal_path(cli)?,
    };

    let store = FileSlotStore::open(&path)?;
    let mut journal = Journal::new(store);
    if journal.is_initialized()? {
        return Err(anyhow::anyhow!(
            "A journal already exists at {}",
            path.display()
        ));
    }

    let pin = app::prompt_new_pin("New PIN")?;
    let hint = match &args.hint {
        Some(hint) => Some(hint.clone()),
        None => prompt_optional_hint()?,
    };
    journal.initialize(&pin, hint.as_deref())?;

    // Remember the chosen path so later commands find it without flags.
    let config_path = config::default_config_path()?;
    if !config_path.exists() {
        config::write_config(&config_path, &SolaceConfig::new(path.clone()))?;
    }

    if !cli.quiet {
        println!("Initialized journal at {}", path.display());
        println!("The PIN cannot be recovered. The hint, if set, is stored in the clear.");
    }
    Ok(())
}

fn prompt_optional_hint() -> anyhow::Result<Option<String>> {
    if !std::io::stdin().is_terminal() {
        return Ok(None);
    }
    let hint: String = dialoguer::Input::new()
        .with_prompt("PIN hint (optional, stored in the clear)")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read hint: {}", e))?;
    if hint.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(hint))
    }
}
