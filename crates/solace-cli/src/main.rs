//! Solace CLI - a PIN-gated, encrypted, offline personal journal
//!
//! This is the command-line interface for Solace. It provides a
//! user-friendly surface over the core library: setup, entries, search,
//! export, plaintext snapshots, and PIN management.

mod app;
mod cli;
mod commands;
mod config;
mod helpers;
mod location;
mod output;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use solace_core::VERSION;

use crate::cli::{Cli, Commands, PinCommands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Init(args)) => commands::init::handle_init(&cli, args),
        Some(Commands::Add(args)) => commands::entries::handle_add(&cli, args),
        Some(Commands::Quick(args)) => commands::entries::handle_quick(&cli, args),
        Some(Commands::List(args)) => commands::entries::handle_list(&cli, args),
        Some(Commands::Show(args)) => commands::entries::handle_show(&cli, args),
        Some(Commands::Edit(args)) => commands::entries::handle_edit(&cli, args),
        Some(Commands::Duplicate(args)) => commands::entries::handle_duplicate(&cli, args),
        Some(Commands::Export(args)) => commands::export::handle_export(&cli, args),
        Some(Commands::Backup(args)) => commands::snapshot::handle_backup(&cli, args),
        Some(Commands::Restore(args)) => commands::snapshot::handle_restore(&cli, args),
        Some(Commands::Pin(PinCommands::Change)) => commands::pin::handle_change(&cli),
        Some(Commands::Pin(PinCommands::Hint)) => commands::pin::handle_hint(&cli),
        Some(Commands::Shell) => commands::shell::handle_shell(&cli),
        Some(Commands::Completions(args)) => {
            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "solace", &mut std::io::stdout());
            Ok(())
        }
        None => {
            println!("Solace v{}", VERSION);
            println!("\nRun `solace --help` for usage information.");
            Ok(())
        }
    }
}
