use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use solace_core::VERSION;

/// Solace - a PIN-gated, encrypted, offline personal journal
#[derive(Parser)]
#[command(name = "solace")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the journal file
    #[arg(short, long, global = true, env = "SOLACE_PATH")]
    pub journal: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the journal will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// PIN hint, stored in the clear alongside the journal
    #[arg(long)]
    pub hint: Option<String>,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Emotion & trigger text
    #[arg(long)]
    pub emotion: Option<String>,

    /// Behavior & patterns text
    #[arg(long)]
    pub behavior: Option<String>,

    /// Wins & challenges text
    #[arg(long)]
    pub wins: Option<String>,

    /// Therapy prep / notes text
    #[arg(long)]
    pub notes: Option<String>,

    /// Override the timestamp (YYYY-MM-DDTHH:MM)
    #[arg(long)]
    pub date: Option<String>,

    /// Location tags
    #[arg(long = "location-tag", value_name = "TAG")]
    pub location_tags: Vec<String>,

    /// Time tags
    #[arg(long = "time-tag", value_name = "TAG")]
    pub time_tags: Vec<String>,

    /// Other tags
    #[arg(short, long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Capture coordinates from the configured provider
    #[arg(long)]
    pub locate: bool,
}

/// Arguments for the `quick` command
#[derive(Args)]
pub struct QuickArgs {
    /// Primary emotion
    #[arg(value_name = "PRIMARY")]
    pub primary: String,

    /// Secondary emotion
    #[arg(long)]
    pub secondary: Option<String>,

    /// Deeper feelings (repeatable; requires --secondary)
    #[arg(long = "deeper", value_name = "FEELING")]
    pub deeper: Vec<String>,

    /// Capture coordinates from the configured provider
    #[arg(long)]
    pub locate: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Start date (inclusive, YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// End date (inclusive, YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Keyword over emotion and narrative fields
    #[arg(long)]
    pub keyword: Option<String>,

    /// Comma-separated tags (an entry matches on any)
    #[arg(long)]
    pub tags: Option<String>,

    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Entry ID (full or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Entry ID (full or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Replace the emotion text
    #[arg(long)]
    pub emotion: Option<String>,

    /// Replace the behavior text
    #[arg(long)]
    pub behavior: Option<String>,

    /// Replace the wins text
    #[arg(long)]
    pub wins: Option<String>,

    /// Replace the notes text
    #[arg(long)]
    pub notes: Option<String>,

    /// Replace the timestamp (YYYY-MM-DDTHH:MM)
    #[arg(long)]
    pub date: Option<String>,

    /// Add an other-tag
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Remove a tag from any of the three sets
    #[arg(long = "remove-tag", value_name = "TAG")]
    pub remove_tags: Vec<String>,

    /// Clear captured coordinates and derived location tags
    #[arg(long)]
    pub clear_location: bool,
}

/// Arguments for the `duplicate` command
#[derive(Args)]
pub struct DuplicateArgs {
    /// Entry ID (full or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Start date (inclusive, YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// End date (inclusive, YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Output format (json, csv)
    #[arg(long, default_value = "json")]
    pub format: String,

    /// Write to a file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub out: Option<String>,
}

/// Arguments for the `backup` command
#[derive(Args)]
pub struct BackupArgs {
    /// Destination path for the plaintext snapshot
    #[arg(value_name = "DEST")]
    pub destination: String,

    /// Skip the plaintext warning prompt
    #[arg(long)]
    pub yes: bool,
}

/// Arguments for the `restore` command
#[derive(Args)]
pub struct RestoreArgs {
    /// Snapshot file to restore from
    #[arg(value_name = "SRC")]
    pub source: String,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum PinCommands {
    /// Rotate the PIN (re-encrypts the journal)
    Change,

    /// Show the stored hint
    Hint,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up a new journal (PIN + optional hint)
    Init(InitArgs),

    /// Add a full entry
    Add(AddArgs),

    /// Add a quick mood entry
    Quick(QuickArgs),

    /// List entries with optional filters
    List(ListArgs),

    /// Show a specific entry by ID
    Show(ShowArgs),

    /// Edit an entry (whole-entry replacement)
    Edit(EditArgs),

    /// Duplicate an entry as a new one
    Duplicate(DuplicateArgs),

    /// Export entries by date range (portable formats, you own your data)
    Export(ExportArgs),

    /// Write a plaintext snapshot (NOT encrypted)
    Backup(BackupArgs),

    /// Restore a snapshot (replaces entries and suggestions)
    Restore(RestoreArgs),

    /// PIN management
    #[command(subcommand)]
    Pin(PinCommands),

    /// Interactive session with idle auto-lock
    Shell,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
