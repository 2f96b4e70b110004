use std::fmt;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::config::RenamerConfig;

/// Where the addition goes and what it is made of.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    #[default]
    NumericSuffix,
    NumericPrefix,
    StringPrefix,
    StringSuffix,
}

impl Placement {
    #[inline]
    pub fn is_numeric(self) -> bool {
        matches!(self, Placement::NumericSuffix | Placement::NumericPrefix)
    }

    #[inline]
    pub fn is_prefix(self) -> bool {
        matches!(self, Placement::NumericPrefix | Placement::StringPrefix)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Placement::NumericSuffix => "numeric-suffix",
            Placement::NumericPrefix => "numeric-prefix",
            Placement::StringPrefix => "string-prefix",
            Placement::StringSuffix => "string-suffix",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// `%%` is matched too so an escaped percent is never read as a placeholder.
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"%%|%(0?)(\d*)d").expect("placeholder pattern is valid"));

/// Widest padding honoured; wider placeholders stay literal.
pub const MAX_WIDTH: usize = 1024;

/// Computes the text inserted for the `conflict_count`-th repeat of a path.
pub fn addition(config: &RenamerConfig, conflict_count: u64) -> String {
    if config.placement.is_numeric() {
        format_numeric(&config.numeric_format, conflict_count)
    } else {
        repeat_affix(&config.string_affix, &config.separator, conflict_count)
    }
}

/// `affix` repeated `count` times, joined by `separator`.
pub fn repeat_affix(affix: &str, separator: &str, count: u64) -> String {
    let count = usize::try_from(count).unwrap_or(usize::MAX);
    vec![affix; count].join(separator)
}

/// Renders a printf-style template, substituting the first `%d` (optionally
/// zero-padded, e.g. `%03d`) with `n`. Later placeholders, and ones wider
/// than [`MAX_WIDTH`], are left as-is; a template without one comes back
/// literally.
pub fn format_numeric(template: &str, n: u64) -> String {
    let mut out = String::with_capacity(template.len() + 4);
    let mut last = 0;
    let mut substituted = false;

    for caps in PLACEHOLDER.captures_iter(template) {
        let Some(m) = caps.get(0) else { continue };
        out.push_str(&template[last..m.start()]);
        last = m.end();

        if m.as_str() == "%%" {
            out.push('%');
            continue;
        }
        let width = match placeholder_width(&caps) {
            Some(width) if !substituted => width,
            _ => {
                out.push_str(m.as_str());
                continue;
            }
        };
        substituted = true;

        let zero_pad = caps.get(1).is_some_and(|g| !g.as_str().is_empty());
        let rendered = if zero_pad {
            format!("{n:0width$}")
        } else {
            format!("{n:width$}")
        };
        out.push_str(&rendered);
    }

    out.push_str(&template[last..]);
    out
}

/// Whether `template` carries an integer placeholder `format_numeric` would fill.
pub fn has_placeholder(template: &str) -> bool {
    PLACEHOLDER
        .captures_iter(template)
        .any(|caps| placeholder_width(&caps).is_some())
}

// None for `%%` and for widths that overflow or exceed MAX_WIDTH.
fn placeholder_width(caps: &Captures<'_>) -> Option<usize> {
    let digits = caps.get(2)?.as_str();
    if digits.is_empty() {
        return Some(0);
    }
    digits.parse::<usize>().ok().filter(|w| *w <= MAX_WIDTH)
}
