use solace_core::ExportFormat;

use crate::app;
use crate::cli::{Cli, ExportArgs};
use crate::helpers;

pub fn handle_export(cli: &Cli, args: &ExportArgs) -> anyhow::Result<()> {
    let journal = app::unlock_journal(cli)?;

    if let Some(ref from) = args.from {
        helpers::ensure_date(from)?;
    }
    if let Some(ref to) = args.to {
        helpers::ensure_date(to)?;
    }
    let format: ExportFormat = args.format.parse()?;

    let rendered = journal.export(args.from.as_deref(), args.to.as_deref(), format)?;
    match &args.out {
        Some(path) => {
            std::fs::write(path, &rendered)
                .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path, e))?;
            if !cli.quiet {
                println!("Exported to {}", path);
            }
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
