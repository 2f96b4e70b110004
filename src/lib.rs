//! Collision-free renaming of paths by remembering every path already handed
//! out and decorating repeats with a numeric or textual affix.

mod engine;
mod interface;
mod naming;

pub mod errors;

pub use engine::{config, renamer, stats, utils};
pub use interface::cli;
pub use naming::{affix, path_parts};

pub use affix::Placement;
pub use config::RenamerConfig;
pub use renamer::{HistoryEntry, Renamer};
