use std::{io, time::Instant};

use anyhow::anyhow;
use clap::Parser;

use autorename::{
    cli::{rename_paths, run_rename, write_summary, Args, Commands, ConfigArgs},
    config::RenamerConfig,
    renamer::Renamer,
    utils::{humanize, init_tracing},
};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.cmd {
        Commands::Rename { paths, config, summary, json } => {
            let mut renamer = Renamer::with_config(effective_config(&config)?);
            let start = Instant::now();

            let stdout = io::stdout().lock();
            let outcomes = if paths.is_empty() {
                run_rename(&mut renamer, io::stdin().lock(), stdout)
            } else {
                rename_paths(&mut renamer, &paths, stdout)
            }
            .map_err(|e| anyhow!(humanize(&e)))?;

            write_summary(&outcomes, start, summary, json, io::stderr().lock())
                .map_err(|e| anyhow!(humanize(&e)))?;
        }
        Commands::Config { config } => {
            println!("{}", effective_config(&config)?.to_json()?);
        }
    }

    Ok(())
}

fn effective_config(args: &ConfigArgs) -> anyhow::Result<RenamerConfig> {
    args.resolve().map_err(|e| anyhow!(humanize(&e)))
}
