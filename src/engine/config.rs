use serde::{Deserialize, Serialize};
use std::{fs, io, path::Path};
use tracing::debug;

use crate::{
    affix::{has_placeholder, Placement},
    errors::{RenamerError, Result},
    utils::default_config_path,
};

pub const DEFAULT_NUMERIC_FORMAT: &str = "(%d)";

/// How conflicting paths get renamed.
///
/// Every field may be changed between calls to `Renamer::get`. Values are
/// not checked on use: a numeric format with no placeholder is rendered
/// literally and an empty affix produces only separators. Call
/// [`RenamerConfig::validate`] to reject those up front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenamerConfig {
    pub placement: Placement,

    /// Text repeated once per conflict (String* placements only).
    pub string_affix: String,

    /// Joins repeated copies of `string_affix`.
    pub separator: String,

    /// Joins the stem and the addition.
    pub connector: String,

    /// printf-style template with one integer placeholder (Numeric* placements only).
    /// Supported: `%d`, zero-padded or width-padded `%03d`/`%3d` up to
    /// `affix::MAX_WIDTH`, and `%%`. Other verbs (`%v`, `%x`, `%-3d`) are literal text.
    pub numeric_format: String,
}

impl Default for RenamerConfig {
    fn default() -> Self {
        Self {
            placement: Placement::default(),
            string_affix: String::new(),
            separator: String::new(),
            connector: String::new(),
            numeric_format: DEFAULT_NUMERIC_FORMAT.to_string(),
        }
    }
}

impl RenamerConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => RenamerError::MissingConfig(path.to_path_buf()),
            _ => RenamerError::Io(e),
        })?;

        let config: RenamerConfig =
            serde_json::from_str(&data).map_err(|e| RenamerError::Json {
                path: path.to_path_buf(),
                source: e,
            })?;

        debug!(path = %path.display(), placement = %config.placement, "Loaded renamer config");
        Ok(config)
    }

    /// Loads the per-user config file if one exists.
    pub fn load_default() -> Result<Option<Self>> {
        let path = default_config_path();
        if !path.is_file() {
            return Ok(None);
        }
        Self::load_from_file(path).map(Some)
    }

    /// Checks the fields the current placement actually uses.
    pub fn validate(&self) -> Result<()> {
        if self.placement.is_numeric() {
            if !has_placeholder(&self.numeric_format) {
                return Err(RenamerError::InvalidFormat(self.numeric_format.clone()));
            }
        } else if self.string_affix.is_empty() {
            return Err(RenamerError::Config(format!(
                "placement '{}' requires a non-empty string affix",
                self.placement
            )));
        }
        Ok(())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
