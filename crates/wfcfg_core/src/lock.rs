//! Advisory locking of property files.
//!
//! Workflows installations are often shared by several user profiles, so two
//! `wfcfg` processes may try to rewrite the same file. A [`LockedFile`]
//! coordinates them with a sentinel file created beside the target
//! (`<target>.wfcfg_lock~`): whoever creates the sentinel exclusively holds
//! the lock, and everybody else polls with a randomized backoff.
//!
//! A sentinel older than [`LockPolicy::stale_after`] is treated as abandoned
//! by a crashed process and removed, both when the lock object is created and
//! on every poll while waiting.
//!
//! The lock is not released on drop. A failed write leaves the sentinel in
//! place so that other processes do not silently overwrite a half-written
//! file.

use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::{debug, warn};

use crate::errors::{ConfigurationError, ConfigurationResult};

#[cfg(test)]
#[path = "lock_tests.rs"]
mod tests;

/// Suffix appended to a target path to form its lock file path.
pub const LOCK_SUFFIX: &str = ".wfcfg_lock~";

/// Age after which an existing lock file is considered abandoned.
pub const DEFAULT_STALE_AFTER: Duration = Duration::from_secs(15 * 60);

/// Upper bound of the random sleep between two lock attempts.
pub const DEFAULT_MAX_BACKOFF: Duration = Duration::from_secs(3);

/// Timing parameters of the advisory lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockPolicy {
    /// Lock files older than this are removed as stale.
    pub stale_after: Duration,

    /// Each failed attempt sleeps for a random duration in `0..=max_backoff`.
    pub max_backoff: Duration,
}

impl Default for LockPolicy {
    fn default() -> Self {
        Self {
            stale_after: DEFAULT_STALE_AFTER,
            max_backoff: DEFAULT_MAX_BACKOFF,
        }
    }
}

/// Exclusive advisory lock on a single property file.
#[derive(Debug)]
pub struct LockedFile {
    path: PathBuf,
    lock_path: PathBuf,
    policy: LockPolicy,
    has_lock: bool,
}

impl LockedFile {
    /// Prepares a lock for `path`, removing a stale lock file if present.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::NotAFile`] if `path` is not a regular file.
    /// - [`ConfigurationError::FileAccess`] if a stale lock cannot be removed.
    pub fn new(path: &Path, policy: LockPolicy) -> ConfigurationResult<Self> {
        if !path.is_file() {
            return Err(ConfigurationError::NotAFile {
                path: path.display().to_string(),
            });
        }

        let lock = Self {
            path: path.to_path_buf(),
            lock_path: Self::lock_path_for(path),
            policy,
            has_lock: false,
        };
        lock.remove_if_stale()?;
        Ok(lock)
    }

    /// Returns the sentinel path used to lock `path`.
    pub fn lock_path_for(path: &Path) -> PathBuf {
        let mut lock_path = OsString::from(path.as_os_str());
        lock_path.push(LOCK_SUFFIX);
        PathBuf::from(lock_path)
    }

    pub fn lock_path(&self) -> &Path {
        &self.lock_path
    }

    /// True if any process currently holds the lock.
    pub fn is_locked(&self) -> bool {
        self.lock_path.exists()
    }

    /// True if this object holds the lock.
    pub fn has_lock(&self) -> bool {
        self.has_lock
    }

    /// Blocks until the lock is acquired.
    ///
    /// There is no timeout: the only way out of a lock held by another party
    /// is that party releasing it or the lock file going stale.
    pub fn acquire(&mut self) -> ConfigurationResult<()> {
        loop {
            match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&self.lock_path)
            {
                Ok(_) => {
                    self.has_lock = true;
                    debug!(message = "Lock acquired", path = ?self.path);
                    return Ok(());
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    if self.remove_if_stale()? {
                        continue;
                    }
                    let delay = self.backoff();
                    debug!(message = "Waiting for lock", path = ?self.path, delay = ?delay);
                    thread::sleep(delay);
                }
                Err(e) => return Err(ConfigurationError::file_access(&self.lock_path, e)),
            }
        }
    }

    /// Releases a lock acquired with [`LockedFile::acquire`].
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::ForeignLock`] if this object does not hold the lock.
    pub fn release(&mut self) -> ConfigurationResult<()> {
        if !self.has_lock {
            return Err(ConfigurationError::ForeignLock {
                path: self.path.display().to_string(),
            });
        }
        fs::remove_file(&self.lock_path)
            .map_err(|e| ConfigurationError::file_access(&self.lock_path, e))?;
        self.has_lock = false;
        debug!(message = "Lock released", path = ?self.path);
        Ok(())
    }

    /// Replaces the whole content of the file while holding the lock.
    ///
    /// If writing fails the error is returned and the lock stays held.
    pub fn overwrite(&mut self, content: &str) -> ConfigurationResult<()> {
        self.acquire()?;
        fs::write(&self.path, content).map_err(|e| ConfigurationError::file_access(&self.path, e))?;
        self.release()
    }

    fn backoff(&self) -> Duration {
        let max = u64::try_from(self.policy.max_backoff.as_millis()).unwrap_or(u64::MAX);
        Duration::from_millis(rand::thread_rng().gen_range(0..=max))
    }

    /// Removes the lock file if it is older than the stale threshold.
    /// Returns true if a stale lock was removed.
    fn remove_if_stale(&self) -> ConfigurationResult<bool> {
        let metadata = match fs::metadata(&self.lock_path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(ConfigurationError::file_access(&self.lock_path, e)),
        };
        let modified = metadata
            .modified()
            .map_err(|e| ConfigurationError::file_access(&self.lock_path, e))?;

        let age = Utc::now().signed_duration_since(DateTime::<Utc>::from(modified));
        let is_stale = chrono::Duration::from_std(self.policy.stale_after)
            .map(|limit| age >= limit)
            .unwrap_or(false);
        if !is_stale {
            return Ok(false);
        }

        warn!(
            message = "Removing stale lock",
            lock = ?self.lock_path,
            age_secs = age.num_seconds()
        );
        match fs::remove_file(&self.lock_path) {
            Ok(()) => Ok(true),
            // another process cleaned it up first
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(true),
            Err(e) => Err(ConfigurationError::file_access(&self.lock_path, e)),
        }
    }
}
