//! Interactive session with idle auto-lock.
//!
//! The shell keeps one unlocked journal alive behind a mutex and runs
//! the idle watcher next to it. Prompts never hold the lock, so the
//! watcher can force a lock mid-prompt; every action re-checks the
//! session before touching the store.

use std::sync::{Arc, Mutex, MutexGuard};

use dialoguer::{Confirm, Input, Select};
use owo_colors::OwoColorize;

use solace_core::entry;
use solace_core::{EntryFilter, FileSlotStore, IdleWatcher, Journal, IDLE_POLL_INTERVAL};

use crate::app;
use crate::cli::Cli;
use crate::output;

type SharedJournal = Arc<Mutex<Journal<FileSlotStore>>>;

const RECENT_LIMIT: usize = 10;

pub fn handle_shell(cli: &Cli) -> anyhow::Result<()> {
    let journal = app::unlock_journal(cli)?;
    let shared: SharedJournal = Arc::new(Mutex::new(journal));
    let watcher = IdleWatcher::spawn(Arc::clone(&shared), IDLE_POLL_INTERVAL);

    if !cli.quiet {
        println!("Unlocked. Sessions auto-lock after 15 minutes of inactivity.");
    }

    let actions = [
        "Quick entry",
        "Full entry",
        "List recent",
        "Search",
        "Backup",
        "Change PIN",
        "Lock & exit",
    ];

    loop {
        let choice = Select::new()
            .with_prompt("solace")
            .items(&actions)
            .default(0)
            .interact()?;

        let mut guard = lock(&shared)?;
        if !guard.is_unlocked() {
            println!("{}", "Locked after inactivity.".yellow());
            break;
        }
        guard.record_activity();

        let result = match choice {
            0 => shell_quick(&mut guard),
            1 => shell_full_entry(&mut guard),
            2 => {
                let mut entries = guard.filter(&EntryFilter::new());
                entries.truncate(RECENT_LIMIT);
                output::print_entries_table(&entries);
                Ok(())
            }
            3 => shell_search(&guard),
            4 => shell_backup(&guard),
            5 => shell_change_pin(&mut guard),
            _ => {
                guard.lock();
                println!("Locked.");
                break;
            }
        };
        drop(guard);

        if let Err(err) = result {
            eprintln!("{}", err.to_string().red());
        }
    }

    watcher.stop();
    Ok(())
}

fn lock(shared: &SharedJournal) -> anyhow::Result<MutexGuard<'_, Journal<FileSlotStore>>> {
    shared
        .lock()
        .map_err(|_| anyhow::anyhow!("Journal state poisoned"))
}

fn shell_quick(journal: &mut Journal<FileSlotStore>) -> anyhow::Result<()> {
    let primary: String = Input::new().with_prompt("Primary emotion").interact_text()?;
    let secondary: String = Input::new()
        .with_prompt("Secondary (optional)")
        .allow_empty(true)
        .interact_text()?;
    let deeper: String = Input::new()
        .with_prompt("Deeper feelings, comma-separated (optional)")
        .allow_empty(true)
        .interact_text()?;

    let deeper: Vec<String> = deeper
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect();
    let secondary = if secondary.trim().is_empty() {
        None
    } else {
        Some(secondary.trim().to_string())
    };

    let label = entry::emotion_label(&primary, secondary.as_deref(), &deeper);
    let id = journal.quick_entry(label)?;
    println!("Saved quick entry {}", id);
    Ok(())
}

fn shell_full_entry(journal: &mut Journal<FileSlotStore>) -> anyhow::Result<()> {
    let emotion: String = Input::new()
        .with_prompt("Emotion & trigger")
        .allow_empty(true)
        .interact_text()?;
    let behavior: String = Input::new()
        .with_prompt("Behavior & patterns")
        .allow_empty(true)
        .interact_text()?;
    let wins: String = Input::new()
        .with_prompt("Wins & challenges")
        .allow_empty(true)
        .interact_text()?;
    let notes: String = Input::new()
        .with_prompt("Therapy prep / notes")
        .allow_empty(true)
        .interact_text()?;
    let tags: String = Input::new()
        .with_prompt(format!(
            "Tags, comma-separated (e.g. {})",
            journal
                .common_suggestions()
                .iter()
                .take(3)
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        ))
        .allow_empty(true)
        .interact_text()?;

    let mut draft = solace_core::Entry::now()
        .with_emotion(emotion)
        .with_behavior(behavior)
        .with_wins(wins)
        .with_therapy_prep(notes);
    for tag in tags.split(',') {
        draft.other_tags.insert(tag);
    }
    draft
        .time_tags
        .insert(solace_core::tags::time_of_day_tag(entry::current_hour()));

    let id = journal.create(draft)?;
    println!("Saved entry {}", id);
    Ok(())
}

fn shell_search(journal: &Journal<FileSlotStore>) -> anyhow::Result<()> {
    let keyword: String = Input::new().with_prompt("Keyword").interact_text()?;
    let entries = journal.filter(&EntryFilter::new().keyword(keyword));
    output::print_entries_table(&entries);
    Ok(())
}

fn shell_backup(journal: &Journal<FileSlotStore>) -> anyhow::Result<()> {
    let destination: String = Input::new()
        .with_prompt("Snapshot path")
        .interact_text()?;
    let proceed = Confirm::new()
        .with_prompt("The snapshot is UNENCRYPTED. Continue?")
        .default(false)
        .interact()?;
    if !proceed {
        return Err(anyhow::anyhow!("Backup cancelled"));
    }
    let snapshot = journal.backup()?;
    std::fs::write(&destination, snapshot.to_json()?)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", destination, e))?;
    println!("Backed up journal to {}", destination);
    Ok(())
}

fn shell_change_pin(journal: &mut Journal<FileSlotStore>) -> anyhow::Result<()> {
    let old_pin = dialoguer::Password::new()
        .with_prompt("Current PIN")
        .interact()?;
    let new_pin = dialoguer::Password::new()
        .with_prompt("New PIN")
        .with_confirmation("Confirm PIN", "PINs do not match")
        .interact()?;
    let hint: String = Input::new()
        .with_prompt("New hint (optional, empty clears)")
        .allow_empty(true)
        .interact_text()?;

    journal.rotate_pin(&old_pin, &new_pin, Some(hint.as_str()))?;
    println!("PIN changed.");
    Ok(())
}
