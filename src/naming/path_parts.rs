use std::path::is_separator;

use crate::affix::Placement;

/// Borrowed view of a path split into directory prefix, stem and extension.
///
/// `dir_prefix` keeps everything up to and including the last separator
/// verbatim, so rooted paths stay rooted and bare file names get no
/// separator. `extension` starts at the last `.` of the final segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathParts<'a> {
    dir_prefix: &'a str,
    stem: &'a str,
    extension: &'a str,
}

impl<'a> PathParts<'a> {
    pub fn new(path: &'a str) -> Self {
        let split = path.rfind(is_separator).map_or(0, |idx| idx + 1);
        let (dir_prefix, file_name) = path.split_at(split);

        let dot = file_name.rfind('.').unwrap_or(file_name.len());
        let (stem, extension) = file_name.split_at(dot);

        Self { dir_prefix, stem, extension }
    }

    pub fn dir_prefix(&self) -> &'a str {
        self.dir_prefix
    }

    pub fn stem(&self) -> &'a str {
        self.stem
    }

    pub fn extension(&self) -> &'a str {
        self.extension
    }

    /// Rebuilds the path with `addition` attached to the stem on the side
    /// chosen by `placement`, joined by `connector`.
    pub fn splice(&self, addition: &str, connector: &str, placement: Placement) -> String {
        let mut out = String::with_capacity(
            self.dir_prefix.len()
                + self.stem.len()
                + self.extension.len()
                + addition.len()
                + connector.len(),
        );

        out.push_str(self.dir_prefix);
        if placement.is_prefix() {
            out.push_str(addition);
            out.push_str(connector);
            out.push_str(self.stem);
        } else {
            out.push_str(self.stem);
            out.push_str(connector);
            out.push_str(addition);
        }
        out.push_str(self.extension);

        out
    }
}
