pub mod config;
pub mod renamer;
pub mod stats;
pub mod utils;
