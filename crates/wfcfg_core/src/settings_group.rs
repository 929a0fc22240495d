//! Named collections of settings sharing a key path.
//!
//! A [`SettingsGroup`] exposes one corner of the flat Workflows key space
//! (for example `peripherals.receipt.`) as a set of typed settings. Only the
//! settings a caller actually modified are turned into `(key, value)` pairs,
//! so flushing a group never rewrites values the caller did not touch.

use std::collections::HashMap;

use crate::errors::{ConfigurationError, ConfigurationResult};
use crate::setting::{Setting, SettingOptions, SettingType, SettingValue, TypedSetting};

#[cfg(test)]
#[path = "settings_group_tests.rs"]
mod tests;

/// A collection of settings under a common key prefix.
#[derive(Debug)]
pub struct SettingsGroup {
    keypath: String,
    settings: Vec<(String, Box<dyn Setting>)>,
    overrides: HashMap<String, String>,
}

impl SettingsGroup {
    /// Creates an empty group. `keypath` is prepended verbatim to every key,
    /// so it normally ends with a dot.
    pub fn new(keypath: impl Into<String>) -> Self {
        Self {
            keypath: keypath.into(),
            settings: Vec::new(),
            overrides: HashMap::new(),
        }
    }

    pub fn keypath(&self) -> &str {
        &self.keypath
    }

    /// Registers a new [`TypedSetting`] under `name`.
    ///
    /// Does nothing if `name` is already registered.
    pub fn add_setting(
        &mut self,
        name: &str,
        kind: SettingType,
        options: SettingOptions,
    ) -> ConfigurationResult<()> {
        if self.position(name).is_some() {
            return Ok(());
        }
        let setting = TypedSetting::with_options(kind, options)?;
        self.settings.push((name.to_string(), Box::new(setting)));
        Ok(())
    }

    /// Writes `new_name` instead of `old_name` as the key suffix on flush.
    pub fn override_key(&mut self, old_name: &str, new_name: &str) -> ConfigurationResult<()> {
        if self.position(old_name).is_none() {
            return Err(ConfigurationError::KeyNotFound {
                key: old_name.to_string(),
            });
        }
        self.overrides
            .insert(old_name.to_string(), new_name.to_string());
        Ok(())
    }

    /// Binds `setting` to `name`, replacing any setting already registered
    /// there while keeping its position.
    pub fn override_setting(&mut self, name: &str, setting: impl Setting) {
        let setting: Box<dyn Setting> = Box::new(setting);
        match self.position(name) {
            Some(index) => self.settings[index].1 = setting,
            None => self.settings.push((name.to_string(), setting)),
        }
    }

    /// Removes a setting and any key override registered for it.
    pub fn delete_setting(&mut self, name: &str) -> ConfigurationResult<()> {
        let index = self.position(name).ok_or_else(|| ConfigurationError::KeyNotFound {
            key: name.to_string(),
        })?;
        self.settings.remove(index);
        self.overrides.remove(name);
        Ok(())
    }

    /// Returns the setting registered under `name`.
    pub fn get_setting(&self, name: &str) -> ConfigurationResult<&dyn Setting> {
        self.position(name)
            .map(|index| self.settings[index].1.as_ref())
            .ok_or_else(|| ConfigurationError::KeyNotFound {
                key: name.to_string(),
            })
    }

    /// Returns the setting registered under `name` as a concrete type.
    ///
    /// A setting of another type is reported as [`ConfigurationError::KeyNotFound`].
    pub fn setting<T: Setting>(&self, name: &str) -> ConfigurationResult<&T> {
        self.get_setting(name)?
            .as_any()
            .downcast_ref::<T>()
            .ok_or_else(|| ConfigurationError::KeyNotFound {
                key: name.to_string(),
            })
    }

    /// Mutable counterpart of [`SettingsGroup::setting`].
    pub fn setting_mut<T: Setting>(&mut self, name: &str) -> ConfigurationResult<&mut T> {
        let not_found = || ConfigurationError::KeyNotFound {
            key: name.to_string(),
        };
        let index = self.position(name).ok_or_else(not_found)?;
        self.settings[index]
            .1
            .as_any_mut()
            .downcast_mut::<T>()
            .ok_or_else(not_found)
    }

    /// Assigns a value to the [`TypedSetting`] registered under `name`.
    pub fn set_value(
        &mut self,
        name: &str,
        value: impl Into<SettingValue>,
    ) -> ConfigurationResult<()> {
        self.setting_mut::<TypedSetting>(name)?.set_value(value)
    }

    /// Reads the (display transformed) value of the [`TypedSetting`]
    /// registered under `name`.
    pub fn get_value(&self, name: &str) -> ConfigurationResult<Option<SettingValue>> {
        Ok(self.setting::<TypedSetting>(name)?.value())
    }

    /// Returns `(full key, value)` pairs for every modified setting, in
    /// registration order.
    pub fn settings(&self) -> Vec<(String, String)> {
        self.settings
            .iter()
            .filter(|(_, setting)| setting.is_modified())
            .filter_map(|(name, setting)| {
                let suffix = self.overrides.get(name).unwrap_or(name);
                setting
                    .file_value()
                    .map(|value| (format!("{}{}", self.keypath, suffix), value))
            })
            .collect()
    }

    /// True iff at least one setting would be written on flush.
    pub fn modified(&self) -> bool {
        !self.settings().is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.settings.iter().position(|(n, _)| n == name)
    }
}
