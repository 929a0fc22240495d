//! Location of Workflows property files.
//!
//! Every Workflows installation (the shared program directory and each
//! user's profile directory) keeps its client settings in a `Property`
//! folder. The same change is applied to the copy in every installation.

use std::collections::BTreeSet;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::{ConfigurationError, ConfigurationResult};

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;

/// Folder holding the property files inside a Workflows directory.
pub const PROPERTY_DIR: &str = "Property";

/// Name of the main preference file.
pub const PREFERENCE_FILE: &str = "preference";

/// Name of the client font file.
pub const FONT_FILE: &str = "font";

/// Maps a property file name to the files it should be written to.
pub trait PropertyFileProvider {
    fn property_files(&self, name: &str) -> ConfigurationResult<BTreeSet<PathBuf>>;
}

/// Property files found in a fixed set of Workflows directories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyDirectories {
    directories: BTreeSet<PathBuf>,
    create_missing: bool,
}

impl PropertyDirectories {
    pub fn new(directories: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            directories: directories.into_iter().collect(),
            create_missing: false,
        }
    }

    /// Creates missing `Property` folders and empty property files instead
    /// of skipping the directory.
    pub fn create_missing(mut self, create_missing: bool) -> Self {
        self.create_missing = create_missing;
        self
    }

    pub fn directories(&self) -> &BTreeSet<PathBuf> {
        &self.directories
    }

    fn ensure_file(path: &Path) -> ConfigurationResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigurationError::file_access(parent, e))?;
        }
        if !path.exists() {
            debug!(message = "Creating empty property file", path = ?path);
            OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(false)
                .open(path)
                .map_err(|e| ConfigurationError::file_access(path, e))?;
        }
        Ok(())
    }
}

impl PropertyFileProvider for PropertyDirectories {
    /// Returns `<dir>/Property/<name>` for every directory where that path
    /// is a regular file.
    fn property_files(&self, name: &str) -> ConfigurationResult<BTreeSet<PathBuf>> {
        let mut files = BTreeSet::new();
        for dir in &self.directories {
            let path = dir.join(PROPERTY_DIR).join(name);
            if self.create_missing {
                Self::ensure_file(&path)?;
            }
            if path.is_file() {
                files.insert(path);
            } else {
                debug!(message = "No property file", path = ?path);
            }
        }
        Ok(files)
    }
}
