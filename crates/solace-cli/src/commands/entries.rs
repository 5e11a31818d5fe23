use solace_core::entry::{self, Entry};
use solace_core::location::LocationProvider;
use solace_core::tags;
use solace_core::{EntryFilter, FileSlotStore, Journal};

use crate::app;
use crate::cli::{AddArgs, Cli, DuplicateArgs, EditArgs, ListArgs, QuickArgs, ShowArgs};
use crate::helpers;
use crate::location::EnvLocationProvider;
use crate::output;

pub fn handle_add(cli: &Cli, args: &AddArgs) -> anyhow::Result<()> {
    let mut journal = app::unlock_journal(cli)?;

    let date = match &args.date {
        Some(value) => {
            helpers::ensure_stamp(value)?;
            value.clone()
        }
        None => entry::current_stamp(),
    };

    let mut draft = Entry::new(date)
        .with_emotion(args.emotion.clone().unwrap_or_default())
        .with_behavior(args.behavior.clone().unwrap_or_default())
        .with_wins(args.wins.clone().unwrap_or_default())
        .with_therapy_prep(args.notes.clone().unwrap_or_default());

    for tag in &args.location_tags {
        draft.location_tags.insert(tag);
    }
    for tag in &args.time_tags {
        draft.time_tags.insert(tag);
    }
    for tag in &args.tags {
        draft.other_tags.insert(tag);
    }
    draft
        .time_tags
        .insert(tags::time_of_day_tag(entry::current_hour()));

    if args.locate {
        match EnvLocationProvider.request_position() {
            Ok(position) => {
                draft.lat = Some(position.lat);
                draft.lng = Some(position.lng);
                draft.location_tags.insert(tags::location_tag(position.lat));
            }
            Err(err) => {
                if !cli.quiet {
                    eprintln!("Could not capture location: {}", err);
                }
            }
        }
    }

    let id = journal.create(draft)?;
    if !cli.quiet {
        println!("Added entry {}", id);
    }
    Ok(())
}

pub fn handle_quick(cli: &Cli, args: &QuickArgs) -> anyhow::Result<()> {
    if !args.deeper.is_empty() && args.secondary.is_none() {
        return Err(anyhow::anyhow!("--deeper requires --secondary"));
    }
    let mut journal = app::unlock_journal(cli)?;

    if args.locate {
        let ticket = journal.begin_quick_capture();
        match EnvLocationProvider.request_position() {
            Ok(position) => {
                journal.deliver_quick_capture(ticket, position);
            }
            Err(err) => {
                if !cli.quiet {
                    eprintln!("Could not capture location: {}", err);
                }
            }
        }
    }

    let label = entry::emotion_label(&args.primary, args.secondary.as_deref(), &args.deeper);
    let id = journal.quick_entry(label)?;
    if !cli.quiet {
        println!("Added quick entry {}", id);
    }
    Ok(())
}

pub fn handle_list(cli: &Cli, args: &ListArgs) -> anyhow::Result<()> {
    let journal = app::unlock_journal(cli)?;

    let mut filter = EntryFilter::new();
    if let Some(ref from) = args.from {
        helpers::ensure_date(from)?;
        filter = filter.date_from(from.clone());
    }
    if let Some(ref to) = args.to {
        helpers::ensure_date(to)?;
        filter = filter.date_to(to.clone());
    }
    if let Some(ref keyword) = args.keyword {
        filter = filter.keyword(keyword.clone());
    }
    if let Some(ref tags) = args.tags {
        filter = filter.tags_from_list(tags);
    }

    let mut entries = journal.filter(&filter);
    if let Some(limit) = args.limit {
        entries.truncate(limit);
    }

    let format = output::parse_output_format(args.format.as_deref())?;
    if args.json {
        if format.is_some() {
            return Err(anyhow::anyhow!("--format cannot be used with --json"));
        }
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }
    match format.unwrap_or(output::OutputFormat::Table) {
        output::OutputFormat::Table => output::print_entries_table(&entries),
        output::OutputFormat::Plain => output::print_entries_plain(&entries),
    }
    Ok(())
}

pub fn handle_show(cli: &Cli, args: &ShowArgs) -> anyhow::Result<()> {
    let journal = app::unlock_journal(cli)?;
    let entry = resolve_entry(&journal, &args.id)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
    } else {
        output::print_entry(&entry);
    }
    Ok(())
}

pub fn handle_edit(cli: &Cli, args: &EditArgs) -> anyhow::Result<()> {
    let mut journal = app::unlock_journal(cli)?;
    let mut entry = resolve_entry(&journal, &args.id)?;

    if let Some(ref value) = args.date {
        helpers::ensure_stamp(value)?;
        entry.date = value.clone();
    }
    if let Some(ref value) = args.emotion {
        entry.emotion = value.clone();
    }
    if let Some(ref value) = args.behavior {
        entry.behavior = value.clone();
    }
    if let Some(ref value) = args.wins {
        entry.wins = value.clone();
    }
    if let Some(ref value) = args.notes {
        entry.therapy_prep = value.clone();
    }
    for tag in &args.tags {
        entry.other_tags.insert(tag);
    }
    for tag in &args.remove_tags {
        entry.location_tags.remove(tag);
        entry.time_tags.remove(tag);
        entry.other_tags.remove(tag);
    }
    if args.clear_location {
        entry.lat = None;
        entry.lng = None;
        entry.location_tags.remove_prefixed(tags::LOCATION_TAG_PREFIX);
    }

    let id = entry.id.clone();
    journal.replace(&id, entry)?;
    if !cli.quiet {
        println!("Updated entry {}", id);
    }
    Ok(())
}

pub fn handle_duplicate(cli: &Cli, args: &DuplicateArgs) -> anyhow::Result<()> {
    let mut journal = app::unlock_journal(cli)?;
    let source = resolve_entry(&journal, &args.id)?;
    let new_id = journal
        .duplicate(&source.id)?
        .ok_or_else(|| anyhow::anyhow!("Entry not found"))?;
    if !cli.quiet {
        println!("Duplicated {} as {}", helpers::short_id(&source.id), new_id);
    }
    Ok(())
}

/// Find one entry by full id or unique prefix.
fn resolve_entry(journal: &Journal<FileSlotStore>, id: &str) -> anyhow::Result<Entry> {
    if id.is_empty() {
        return Err(anyhow::anyhow!("Entry ID cannot be empty"));
    }
    let matches: Vec<&Entry> = journal
        .entries()
        .iter()
        .filter(|entry| entry.id.starts_with(id))
        .collect();
    match matches.as_slice() {
        [] => Err(anyhow::anyhow!("Entry not found: {}", id)),
        [one] => Ok((*one).clone()),
        many => Err(anyhow::anyhow!(
            "Entry ID prefix {} is ambiguous ({} matches)",
            id,
            many.len()
        )),
    }
}
