//! Platform lookups: installed printers and Workflows directories.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use wfcfg_core::PrinterDiscovery;

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;

/// Registry key (under `HKEY_LOCAL_MACHINE`) listing the installed printers.
pub const PRINTERS_KEY: &str = r"SYSTEM\CurrentControlSet\Control\Print\Printers";

/// Shared Workflows program directory.
pub const MAIN_WORKFLOWS_DIR: &str = r"C:\Program Files (x86)\Sirsi\JWF\";

/// Root of the Windows user profiles.
pub const USERS_DIR: &str = r"C:\Users";

/// Installed printers of this machine.
///
/// On Windows the printers are read from the registry. Elsewhere there is no
/// registry and the configured list is used instead.
#[derive(Debug, Clone, Default)]
pub struct SystemPrinters {
    configured: Vec<String>,
}

impl SystemPrinters {
    pub fn new(configured: Vec<String>) -> Self {
        Self { configured }
    }
}

impl PrinterDiscovery for SystemPrinters {
    fn installed(&self) -> Vec<String> {
        #[cfg(windows)]
        {
            let mut printers = registry_printers();
            printers.extend(self.configured.iter().cloned());
            printers
        }

        #[cfg(not(windows))]
        {
            self.configured.clone()
        }
    }
}

#[cfg(windows)]
fn registry_printers() -> Vec<String> {
    use windows_sys::Win32::Foundation::{ERROR_NO_MORE_ITEMS, ERROR_SUCCESS};
    use windows_sys::Win32::System::Registry::{
        RegCloseKey, RegEnumKeyExW, RegOpenKeyExW, HKEY, HKEY_LOCAL_MACHINE, KEY_READ,
    };

    let subkey: Vec<u16> = PRINTERS_KEY
        .encode_utf16()
        .chain(std::iter::once(0))
        .collect();
    let mut printers = Vec::new();

    unsafe {
        let mut key: HKEY = std::mem::zeroed();
        let status = RegOpenKeyExW(HKEY_LOCAL_MACHINE, subkey.as_ptr(), 0, KEY_READ, &mut key);
        if status != ERROR_SUCCESS {
            tracing::warn!(message = "Cannot open printer registry key", status = status);
            return printers;
        }

        let mut index = 0;
        loop {
            // registry key names are at most 255 characters
            let mut name = [0u16; 256];
            let mut len = name.len() as u32;
            let status = RegEnumKeyExW(
                key,
                index,
                name.as_mut_ptr(),
                &mut len,
                std::ptr::null(),
                std::ptr::null_mut(),
                std::ptr::null_mut(),
                std::ptr::null_mut(),
            );
            if status == ERROR_NO_MORE_ITEMS {
                break;
            }
            if status != ERROR_SUCCESS {
                tracing::warn!(message = "Failed to enumerate printers", status = status);
                break;
            }
            printers.push(String::from_utf16_lossy(&name[..len as usize]));
            index += 1;
        }

        RegCloseKey(key);
    }

    debug!(message = "Printers found in registry", printers = ?printers);
    printers
}

/// Workflows directories used when none are configured.
///
/// On Windows these are the shared program directory plus every user
/// profile's `Sirsi\Workflows` folder. Elsewhere it is `/tmp`, which only
/// makes sense together with creating missing property files.
pub fn default_workflows_dirs() -> Vec<PathBuf> {
    if cfg!(windows) {
        let mut dirs = vec![PathBuf::from(MAIN_WORKFLOWS_DIR)];
        dirs.extend(user_workflows_dirs(Path::new(USERS_DIR)));
        dirs
    } else {
        vec![PathBuf::from("/tmp")]
    }
}

/// Every `<users_root>/<user>/Sirsi/Workflows` directory that exists.
pub fn user_workflows_dirs(users_root: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(users_root) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(message = "Cannot list user profiles", path = ?users_root, error = %e);
            return Vec::new();
        }
    };

    let mut dirs: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path().join("Sirsi").join("Workflows"))
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();
    dirs
}
