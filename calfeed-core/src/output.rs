//! Output directory for generated .ics files.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::calendar::CalendarFeed;
use crate::error::CalFeedResult;

/// Directory that generated calendars are written into. Each file is
/// overwritten wholesale.
#[derive(Debug, Clone)]
pub struct OutputDir {
    root: PathBuf,
}

impl OutputDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        OutputDir { root: root.into() }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Create the directory (and parents) if missing.
    pub fn ensure(&self) -> CalFeedResult<()> {
        std::fs::create_dir_all(&self.root)?;
        Ok(())
    }

    /// Serialize `feed` and write it to `file_name`, returning the full path.
    pub fn write(&self, file_name: &str, feed: &CalendarFeed) -> CalFeedResult<PathBuf> {
        let path = self.root.join(file_name);
        let bytes = feed.serialize()?;

        std::fs::write(&path, &bytes)?;
        debug!(path = %path.display(), events = feed.len(), bytes = bytes.len(), "Wrote calendar");

        Ok(path)
    }
}
