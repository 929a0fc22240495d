//! Staged updates and deletions over a set of property files.
//!
//! A [`Configurator`] records changes in memory and applies all of them to
//! every target file in one [`Configurator::run`]. Each file is read, parsed
//! with the configurator's [`LineFormat`], patched and rewritten in full under
//! an advisory [`LockedFile`].

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::{ConfigurationError, ConfigurationResult};
use crate::line_format::{KeyValueFormat, LineFormat};
use crate::lock::{LockPolicy, LockedFile};

#[cfg(test)]
#[path = "configurator_tests.rs"]
mod tests;

/// The new content computed for one target file during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub content: String,
}

/// Staged update/delete engine over files sharing one line format.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::PathBuf;
/// use wfcfg_core::Configurator;
///
/// let mut cfg = Configurator::new([PathBuf::from("C:/Sirsi/JWF/Property/preference")]);
/// cfg.update("desktop.tabbed_windows", "Y");
/// cfg.delete("desktop.multiple_windows");
/// cfg.run(false)?;
/// # Ok::<(), wfcfg_core::ConfigurationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Configurator<F: LineFormat = KeyValueFormat> {
    format: F,
    config_files: BTreeSet<PathBuf>,
    update_items: BTreeMap<String, String>,
    delete_items: BTreeSet<String>,
    changes_staged: bool,
    lock_policy: LockPolicy,
}

impl Configurator<KeyValueFormat> {
    /// Creates a configurator for `key=value` files.
    pub fn new(config_files: impl IntoIterator<Item = PathBuf>) -> Self {
        Self::with_format(config_files, KeyValueFormat)
    }
}

impl<F: LineFormat> Configurator<F> {
    /// Creates a configurator for files in the given line format.
    pub fn with_format(config_files: impl IntoIterator<Item = PathBuf>, format: F) -> Self {
        Self {
            format,
            config_files: config_files.into_iter().collect(),
            update_items: BTreeMap::new(),
            delete_items: BTreeSet::new(),
            changes_staged: false,
            lock_policy: LockPolicy::default(),
        }
    }

    /// Replaces the timing parameters used when locking files.
    pub fn with_lock_policy(mut self, lock_policy: LockPolicy) -> Self {
        self.lock_policy = lock_policy;
        self
    }

    /// The files affected by this configurator.
    pub fn config_files(&self) -> &BTreeSet<PathBuf> {
        &self.config_files
    }

    /// True once an update or delete has been staged and not yet run.
    pub fn changes_staged(&self) -> bool {
        self.changes_staged
    }

    /// Stages `key=value`, replacing any value already staged for `key`.
    ///
    /// A key missing from a file is appended to it on run.
    pub fn update(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.update_items.insert(key.into(), value.into());
        self.changes_staged = true;
    }

    /// Stages every pair with [`Configurator::update`], in order.
    pub fn batch_update<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            self.update(key, value);
        }
    }

    /// Stages the removal of `key`. A deletion wins over an update of the
    /// same key.
    pub fn delete(&mut self, key: impl Into<String>) {
        self.delete_items.insert(key.into());
        self.changes_staged = true;
    }

    /// Computes the new content of `path` with the staged changes applied.
    ///
    /// Blank lines are dropped and surrounding whitespace is trimmed. Keys not
    /// present in the file are appended in sorted order.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::FileAccess`] if the file cannot be read.
    /// - [`ConfigurationError::MalformedLine`] if any line lacks a separator.
    pub fn render(&self, path: &Path) -> ConfigurationResult<String> {
        let content =
            fs::read_to_string(path).map_err(|e| ConfigurationError::file_access(path, e))?;

        let mut records = Vec::new();
        for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let record = self.format.parse(line).map_err(|e| match e {
                ConfigurationError::MalformedLine { line, .. } => {
                    ConfigurationError::MalformedLine {
                        path: path.display().to_string(),
                        line,
                    }
                }
                other => other,
            })?;
            records.push(record);
        }

        let mut pending: BTreeSet<&str> = self.update_items.keys().map(String::as_str).collect();
        for (key, value) in records.iter_mut() {
            if pending.remove(key.as_str()) {
                *value = self.update_items[key.as_str()].clone();
            }
        }
        records.retain(|(key, _)| !self.delete_items.contains(key));
        for key in pending {
            if !self.delete_items.contains(key) {
                records.push((key.to_string(), self.update_items[key].clone()));
            }
        }

        Ok(records
            .iter()
            .map(|(key, value)| self.format.format(key, value))
            .collect::<Vec<_>>()
            .join("\n"))
    }

    /// Applies the staged changes to every target file and clears them.
    ///
    /// With `test_run` the new contents are computed and returned but nothing
    /// is written. Without staged changes this is a no-op returning no files.
    ///
    /// A run is all-or-nothing per file but not across files: an error on one
    /// file leaves the files processed before it updated, and keeps the staged
    /// changes.
    pub fn run(&mut self, test_run: bool) -> ConfigurationResult<Vec<RenderedFile>> {
        if !self.changes_staged {
            info!(message = "No changes staged. Not executing run.");
            return Ok(Vec::new());
        }

        for (key, value) in &self.update_items {
            info!(message = "Updating item", key = %key, value = %value);
        }
        for key in &self.delete_items {
            info!(message = "Deleting item", key = %key);
        }

        let mut rendered = Vec::with_capacity(self.config_files.len());
        for path in &self.config_files {
            let content = self.render(path)?;
            info!(message = "Updating file", path = ?path, test_run = test_run);
            if test_run {
                debug!(message = "Test run, not writing file", path = ?path);
            } else {
                let mut lock = LockedFile::new(path, self.lock_policy)?;
                lock.overwrite(&content)?;
            }
            rendered.push(RenderedFile {
                path: path.clone(),
                content,
            });
        }

        self.update_items.clear();
        self.delete_items.clear();
        self.changes_staged = false;
        Ok(rendered)
    }
}
