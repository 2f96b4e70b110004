use tracing::{debug, trace};

use crate::{
    affix::{addition, Placement},
    config::RenamerConfig,
    path_parts::PathParts,
    stats::RenameOutcome,
};

/// A path seen by a [`Renamer`], stored case-folded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    path: String,
    conflict_count: u64,
}

impl HistoryEntry {
    fn new(path: String) -> Self {
        Self { path, conflict_count: 0 }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Number of repeat submissions since the path was first seen.
    pub fn conflict_count(&self) -> u64 {
        self.conflict_count
    }
}

/// Hands out collision-free names for paths, remembering every path it has
/// seen until [`Renamer::reset`].
///
/// Lookups are case-insensitive and the returned names are always built from
/// the lowercased input. Not internally synchronised; wrap it in a `Mutex`
/// to share it across threads.
///
/// ```
/// use autorename::Renamer;
///
/// let mut renamer = Renamer::new();
/// assert_eq!(renamer.get("/test1/1.txt"), "/test1/1.txt");
/// assert_eq!(renamer.get("/test2/1.txt"), "/test2/1.txt");
/// assert_eq!(renamer.get("/test1/1.txt"), "/test1/1(1).txt");
///
/// renamer.reset();
/// assert_eq!(renamer.get("/test1/1.txt"), "/test1/1.txt");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Renamer {
    config: RenamerConfig,
    history: Vec<HistoryEntry>,
}

impl Renamer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RenamerConfig) -> Self {
        Self {
            config,
            history: Vec::new(),
        }
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.config.placement = placement;
        self
    }

    pub fn string_affix(mut self, affix: impl Into<String>) -> Self {
        self.config.string_affix = affix.into();
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    pub fn connector(mut self, connector: impl Into<String>) -> Self {
        self.config.connector = connector.into();
        self
    }

    pub fn numeric_format(mut self, format: impl Into<String>) -> Self {
        self.config.numeric_format = format.into();
        self
    }

    pub fn config(&self) -> &RenamerConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut RenamerConfig {
        &mut self.config
    }

    /// Returns a unique name for `path`: the lowercased path itself the first
    /// time, a renamed variant on every repeat.
    pub fn get(&mut self, path: &str) -> String {
        self.resolve(path).into_path()
    }

    /// Same as [`Renamer::get`], reporting whether a rename happened.
    pub fn resolve(&mut self, path: &str) -> RenameOutcome {
        let normalized = path.to_lowercase();

        match self.history.iter().position(|e| e.path == normalized) {
            Some(idx) => self.rename_conflict(idx, normalized),
            None => {
                trace!(path = %normalized, "First occurrence");
                self.history.push(HistoryEntry::new(normalized.clone()));
                RenameOutcome::Unchanged { path: normalized }
            }
        }
    }

    pub fn resolve_all<I, S>(&mut self, paths: I) -> Vec<RenameOutcome>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        paths
            .into_iter()
            .map(|p| self.resolve(p.as_ref()))
            .collect()
    }

    fn rename_conflict(&mut self, idx: usize, original: String) -> RenameOutcome {
        let entry = &mut self.history[idx];
        entry.conflict_count += 1;
        let conflict_count = entry.conflict_count;

        let addition = addition(&self.config, conflict_count);
        let unique = PathParts::new(&original).splice(
            &addition,
            &self.config.connector,
            self.config.placement,
        );

        debug!(%original, %unique, conflict_count, "Resolved name conflict");
        RenameOutcome::Renamed {
            original,
            unique,
            conflict_count,
        }
    }

    /// Forgets every path seen so far. Configuration is kept.
    pub fn reset(&mut self) {
        let dropped = self.history.len();
        self.history.clear();
        debug!(dropped, "Cleared rename history");
    }

    /// Conflict count for `path` (case-insensitive), if it has been seen.
    pub fn conflict_count(&self, path: &str) -> Option<u64> {
        let normalized = path.to_lowercase();
        self.history
            .iter()
            .find(|e| e.path == normalized)
            .map(HistoryEntry::conflict_count)
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
