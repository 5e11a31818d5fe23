//! Application-level utilities for the Solace CLI.
//!
//! This module provides:
//! - Journal path resolution (flag/env, then config, then XDG default)
//! - PIN prompting with environment fallback for scripting
//! - The unlock flow shared by every gated command

use std::path::PathBuf;

use dialoguer::Password;
use zeroize::Zeroizing;

use solace_core::{FileSlotStore, Journal};

use crate::cli::Cli;
use crate::config;

/// Environment fallback for the PIN prompt.
pub const PIN_ENV: &str = "SOLACE_PIN";

/// Environment fallback for the new PIN on rotation.
pub const NEW_PIN_ENV: &str = "SOLACE_NEW_PIN";

const MAX_ATTEMPTS: usize = 3;

/// Resolve the journal file path: `--journal`/`SOLACE_PATH` first, then
/// the config file, then the XDG default.
pub fn resolve_journal_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(ref path) = cli.journal {
        return Ok(PathBuf::from(path));
    }
    let config_path = config::default_config_path()?;
    if config_path.exists() {
        let cfg = config::read_config(&config_path)?;
        return Ok(PathBuf::from(cfg.journal.path));
    }
    config::default_journal_path()
}

/// Open the slot store backing the journal, still locked.
pub fn open_journal(cli: &Cli) -> anyhow::Result<Journal<FileSlotStore>> {
    let path = resolve_journal_path(cli)?;
    let store = FileSlotStore::open(&path)?;
    Ok(Journal::new(store))
}

/// Open and unlock, prompting for the PIN with retry. Callers get an
/// unlocked journal or an error; routing to `init` is explicit.
pub fn unlock_journal(cli: &Cli) -> anyhow::Result<Journal<FileSlotStore>> {
    let mut journal = open_journal(cli)?;
    if !journal.is_initialized()? {
        return Err(anyhow::anyhow!(
            "No journal is set up yet. Run `solace init` first."
        ));
    }
    for attempt in 1..=MAX_ATTEMPTS {
        let pin = prompt_pin("PIN")?;
        if journal.unlock(&pin) {
            return Ok(journal);
        }
        if attempt < MAX_ATTEMPTS && !cli.quiet {
            if journal.hint().is_some() {
                eprintln!("Wrong PIN. (A hint is stored: `solace pin hint`.)");
            } else {
                eprintln!("Wrong PIN.");
            }
        }
    }
    Err(anyhow::anyhow!("Too many failed PIN attempts"))
}

/// Read a PIN, preferring the environment for non-interactive use.
pub fn prompt_pin(prompt: &str) -> anyhow::Result<Zeroizing<String>> {
    if let Ok(value) = std::env::var(PIN_ENV) {
        if !value.trim().is_empty() {
            return Ok(Zeroizing::new(value));
        }
    }
    let pin = Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read PIN: {}", e))?;
    Ok(Zeroizing::new(pin))
}

/// Read a new PIN with confirmation. `SOLACE_NEW_PIN` wins over
/// `SOLACE_PIN` so rotation can be scripted with both set.
pub fn prompt_new_pin(prompt: &str) -> anyhow::Result<Zeroizing<String>> {
    for env in [NEW_PIN_ENV, PIN_ENV] {
        if let Ok(value) = std::env::var(env) {
            if !value.trim().is_empty() {
                return Ok(Zeroizing::new(value));
            }
        }
    }
    let pin = Password::new()
        .with_prompt(prompt)
        .with_confirmation("Confirm PIN", "PINs do not match")
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read PIN: {}", e))?;
    if pin.is_empty() {
        return Err(anyhow::anyhow!("PIN cannot be empty"));
    }
    Ok(Zeroizing::new(pin))
}
