use crate::app;
use crate::cli::Cli;

pub fn handle_change(cli: &Cli) -> anyhow::Result<()> {
    let mut journal = app::open_journal(cli)?;
    if !journal.is_initialized()? {
        return Err(anyhow::anyhow!(
            "No journal is set up yet. Run `solace init` first."
        ));
    }

    let old_pin = app::prompt_pin("Current PIN")?;
    if !journal.unlock(&old_pin) {
        return Err(anyhow::anyhow!("Wrong current PIN"));
    }

    let new_pin = app::prompt_new_pin("New PIN")?;
    let hint = prompt_new_hint()?;
    journal.rotate_pin(&old_pin, &new_pin, hint.as_deref())?;

    if !cli.quiet {
        println!("PIN changed. The journal was re-encrypted under the new PIN.");
    }
    Ok(())
}

pub fn handle_hint(cli: &Cli) -> anyhow::Result<()> {
    // Hints are readable while locked; no PIN prompt here.
    let journal = app::open_journal(cli)?;
    match journal.hint() {
        Some(hint) => println!("Hint: {}", hint),
        None => println!("No hint set"),
    }
    Ok(())
}

fn prompt_new_hint() -> anyhow::Result<Option<String>> {
    use std::io::IsTerminal;

    if !std::io::stdin().is_terminal() {
        return Ok(None);
    }
    let hint: String = dialoguer::Input::new()
        .with_prompt("New hint (optional, empty clears)")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read hint: {}", e))?;
    Ok(Some(hint))
}
