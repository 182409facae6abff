use anyhow::Context;
use colored::Colorize;
use leadmerge_io::{assemble, read_leads, write_artifacts};
use leadmerge_resolve::{reconcile, resolve};

use crate::cli::Cli;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = cli.io_config();

    let leads = read_leads(&cli.input)?;
    let resolution = resolve(&leads);
    let reconciliation =
        reconcile(&leads, &resolution).context("reconciling leads against canonical set")?;

    if cli.dry_run {
        let stats = resolution.stats();
        println!(
            "{} leads read, {} canonical, {} duplicates removed, {} records changed",
            stats.input.to_string().bold(),
            stats.canonical.to_string().bold(),
            stats.duplicates_removed().to_string().yellow(),
            reconciliation.changed_count().to_string().yellow(),
        );
        return Ok(());
    }

    let document = assemble(&reconciliation.resolved);
    write_artifacts(&config, &reconciliation.changes, &document)?;
    println!("wrote log file to {}", config.log_path.display().to_string().bold());
    println!(
        "wrote deduplicated data to {}",
        config.output_path.display().to_string().bold()
    );
    Ok(())
}
