//! Where generated calendars go.

use std::io::Write;
use std::path::{Path, PathBuf};

use rozpis_core::{FeedConfig, RozpisResult};

/// Output sink for generated documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Write `{filename}.ics` files into this directory
    Directory(PathBuf),
    /// Print documents to stdout
    Stdout,
}

impl Output {
    pub fn new(output_dir: Option<PathBuf>) -> Self {
        match output_dir {
            Some(dir) => Output::Directory(dir),
            None => Output::Stdout,
        }
    }

    /// Write a feed's document. Returns the written path, if any.
    pub fn write(&self, feed: &FeedConfig, content: &str) -> RozpisResult<Option<PathBuf>> {
        match self {
            Output::Directory(dir) => {
                std::fs::create_dir_all(dir)?;
                let path = dir.join(feed.output_name());
                write_atomic(&path, content)?;
                Ok(Some(path))
            }
            Output::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(content.as_bytes())?;
                stdout.flush()?;
                Ok(None)
            }
        }
    }
}

/// Write a file so readers see either the old or the complete new content.
///
/// The content goes to a temporary file in the same directory, which is
/// then renamed over the target.
pub fn write_atomic(path: &Path, content: &str) -> RozpisResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(content.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;

    Ok(())
}
