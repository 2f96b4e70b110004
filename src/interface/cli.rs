use std::{
    io::{BufRead, Write},
    path::PathBuf,
    time::Instant,
};

use clap::{Parser, Subcommand};
use tracing::info;

use crate::{
    affix::Placement,
    config::RenamerConfig,
    errors::Result,
    renamer::Renamer,
    stats::{RenameOutcome, Summary},
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print a collision-free name for every path, in order
    Rename {
        /// Paths to rename; read one per line from stdin when omitted
        paths: Vec<String>,

        #[command(flatten)]
        config: ConfigArgs,

        /// Print a summary to stderr when done
        #[arg(short, long)]
        summary: bool,

        /// Print the summary as JSON (implies --summary)
        #[arg(long)]
        json: bool,
    },
    /// Show the effective configuration as JSON
    Config {
        #[command(flatten)]
        config: ConfigArgs,
    },
}

/// Overrides layered on top of the config file.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Config file (defaults to <config dir>/autorename/config.json if present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Kind and position of the addition
    #[arg(short, long, value_enum)]
    pub placement: Option<Placement>,

    /// Text repeated once per conflict (string placements)
    #[arg(long)]
    pub affix: Option<String>,

    /// Joins repeated affixes
    #[arg(long)]
    pub separator: Option<String>,

    /// Joins the file stem and the addition
    #[arg(long)]
    pub connector: Option<String>,

    /// Template for numeric placements, e.g. "(%d)" or "_%03d"
    #[arg(long = "format", value_name = "TEMPLATE")]
    pub numeric_format: Option<String>,
}

impl ConfigArgs {
    /// Defaults, then the config file, then flags. Validated before returning.
    pub fn resolve(&self) -> Result<RenamerConfig> {
        let mut config = match &self.config {
            Some(path) => RenamerConfig::load_from_file(path)?,
            None => RenamerConfig::load_default()?.unwrap_or_default(),
        };

        if let Some(placement) = self.placement {
            config.placement = placement;
        }
        if let Some(affix) = &self.affix {
            config.string_affix = affix.clone();
        }
        if let Some(separator) = &self.separator {
            config.separator = separator.clone();
        }
        if let Some(connector) = &self.connector {
            config.connector = connector.clone();
        }
        if let Some(format) = &self.numeric_format {
            config.numeric_format = format.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

/// Resolves `paths` in order, writing one unique name per line to `out`.
pub fn rename_paths<I, S, W>(renamer: &mut Renamer, paths: I, mut out: W) -> Result<Vec<RenameOutcome>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write,
{
    let mut outcomes = Vec::new();
    for path in paths {
        outcomes.push(emit(renamer, path.as_ref(), &mut out)?);
    }
    out.flush()?;
    Ok(outcomes)
}

/// Streams paths from `input`, one per line, printing each name as soon as
/// its line arrives. Blank lines are skipped; `\r\n` endings are accepted.
pub fn run_rename<R, W>(renamer: &mut Renamer, input: R, mut out: W) -> Result<Vec<RenameOutcome>>
where
    R: BufRead,
    W: Write,
{
    let mut outcomes = Vec::new();
    for line in input.lines() {
        let line = line?;
        let path = line.trim_end_matches('\r');
        if path.is_empty() {
            continue;
        }
        outcomes.push(emit(renamer, path, &mut out)?);
        out.flush()?;
    }
    Ok(outcomes)
}

/// Writes the run summary to `out`: JSON when `json`, the colored report when
/// `summary`, nothing otherwise.
pub fn write_summary<W: Write>(
    outcomes: &[RenameOutcome],
    start: Instant,
    summary: bool,
    json: bool,
    mut out: W,
) -> Result<()> {
    if !summary && !json {
        return Ok(());
    }

    let report = Summary::from_outcomes(outcomes, start);
    if json {
        writeln!(out, "{}", report.to_json()?)?;
    } else {
        writeln!(out, "{report}")?;
    }
    Ok(())
}

fn emit<W: Write>(renamer: &mut Renamer, path: &str, out: &mut W) -> Result<RenameOutcome> {
    let outcome = renamer.resolve(path);
    writeln!(out, "{}", outcome.path())?;
    info!("{outcome}");
    Ok(outcome)
}
