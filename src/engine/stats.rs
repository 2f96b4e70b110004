use std::time::{Duration, Instant};

use colored::*;
use serde::{Serialize, Serializer};

/// Result of submitting one path to a `Renamer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// First occurrence, returned lowercased but otherwise untouched
    Unchanged { path: String },

    /// Repeat occurrence, renamed with the `conflict_count`-th addition
    Renamed {
        original: String,
        unique: String,
        conflict_count: u64,
    },
}

impl RenameOutcome {
    /// The name handed back to the caller.
    pub fn path(&self) -> &str {
        match self {
            RenameOutcome::Unchanged { path } => path,
            RenameOutcome::Renamed { unique, .. } => unique,
        }
    }

    pub fn into_path(self) -> String {
        match self {
            RenameOutcome::Unchanged { path } => path,
            RenameOutcome::Renamed { unique, .. } => unique,
        }
    }

    pub fn is_renamed(&self) -> bool {
        matches!(self, RenameOutcome::Renamed { .. })
    }
}

#[derive(Debug, Default, Serialize)]
pub struct Summary {
    pub submitted: usize,
    pub unchanged: usize,
    pub renamed: usize,
    pub max_conflicts: u64,

    #[serde(serialize_with = "serialize_duration")]
    pub duration: Duration,
}

impl Summary {
    pub fn from_outcomes(outcomes: &[RenameOutcome], start: Instant) -> Self {
        let mut summary = Summary {
            submitted: outcomes.len(),
            ..Default::default()
        };

        for outcome in outcomes {
            match outcome {
                RenameOutcome::Unchanged { .. } => summary.unchanged += 1,
                RenameOutcome::Renamed { conflict_count, .. } => {
                    summary.renamed += 1;
                    summary.max_conflicts = summary.max_conflicts.max(*conflict_count);
                }
            }
        }

        summary.duration = start.elapsed();
        summary
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl std::fmt::Display for RenameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenameOutcome::Unchanged { path } => {
                write!(f, "{} {}", "✔ Kept".green().bold(), path)
            }
            RenameOutcome::Renamed {
                original,
                unique,
                conflict_count,
            } => write!(
                f,
                "{} {} → {} (conflict #{})",
                "✎ Renamed".cyan().bold(),
                original,
                unique,
                conflict_count
            ),
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", "Summary".bold().blue())?;

        let pct = if self.submitted > 0 {
            (self.renamed as f64 / self.submitted as f64) * 100.0
        } else {
            0.0
        };

        writeln!(f, "  Submitted:   {} paths", self.submitted.to_string().yellow())?;
        writeln!(f, "  Unchanged:   {} paths", self.unchanged.to_string().green())?;
        writeln!(
            f,
            "  Renamed:     {} paths ({:.1}%)",
            self.renamed.to_string().cyan(),
            pct
        )?;
        writeln!(f, "  Max repeats: {}", self.max_conflicts.to_string().magenta())?;
        write!(f, "  Took:        {}", format_duration(self.duration).magenta())
    }
}

// --- Helpers ---
fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 1.0 {
        format!("{:.2} ms", secs * 1000.0)
    } else {
        format!("{:.2} s", secs)
    }
}

fn serialize_duration<S>(d: &Duration, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_f64(d.as_secs_f64())
}
