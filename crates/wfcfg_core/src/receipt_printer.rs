//! Receipt printer configuration.
//!
//! The receipt printer lives in the shared `preference` files under
//! `peripherals.receipt.`. A [`ReceiptPrinter`] keeps the printer settings in
//! a [`SettingsGroup`] and its page setup in a receipt [`Paper`]; on
//! [`ReceiptPrinter::run`] every modified setting is staged into the wrapped
//! [`Configurator`] and written.

use std::any::Any;
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::info;

use crate::configurator::{Configurator, RenderedFile};
use crate::errors::{ConfigurationError, ConfigurationResult};
use crate::lock::LockPolicy;
use crate::paper::Paper;
use crate::printer::PrinterDiscovery;
use crate::setting::{Setting, SettingOptions, SettingType};
use crate::settings_group::SettingsGroup;

#[cfg(test)]
#[path = "receipt_printer_tests.rs"]
mod tests;

pub const RECEIPT_KEYPATH: &str = "peripherals.receipt.";

const NAME: &str = "name";
const DOT_MATRIX: &str = "dot_matrix";
const ENABLED: &str = "enabled";
const FONT: &str = "font";
const YES_NO: &[&str] = &["y", "n"];

/// Style of the receipt font, stored as a numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReceiptFontStyle {
    Regular,
    Bold,
    Italic,
}

impl ReceiptFontStyle {
    pub const ALL: [ReceiptFontStyle; 3] = [
        ReceiptFontStyle::Regular,
        ReceiptFontStyle::Bold,
        ReceiptFontStyle::Italic,
    ];

    /// Code written to the preference file.
    pub fn code(&self) -> u8 {
        match self {
            ReceiptFontStyle::Regular => 0,
            ReceiptFontStyle::Bold => 1,
            ReceiptFontStyle::Italic => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReceiptFontStyle::Regular => "regular",
            ReceiptFontStyle::Bold => "bold",
            ReceiptFontStyle::Italic => "italic",
        }
    }
}

impl FromStr for ReceiptFontStyle {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReceiptFontStyle::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigurationError::InvalidValue {
                value: s.to_string(),
                valid: "bold, italic, regular".to_string(),
            })
    }
}

/// Font used on printed receipts. Defaults to 11pt Verdana bold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptFont {
    name: String,
    style: ReceiptFontStyle,
    size: u32,
    modified: bool,
}

impl Default for ReceiptFont {
    fn default() -> Self {
        Self {
            name: "Verdana".to_string(),
            style: ReceiptFontStyle::Bold,
            size: 11,
            modified: false,
        }
    }
}

impl ReceiptFont {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.modified = true;
    }

    /// Size in points.
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn set_size(&mut self, size: u32) {
        self.size = size;
        self.modified = true;
    }

    pub fn style(&self) -> ReceiptFontStyle {
        self.style
    }

    /// Sets the style by name: `regular`, `bold` or `italic`.
    pub fn set_style(&mut self, style: &str) -> ConfigurationResult<()> {
        self.style = style.parse()?;
        self.modified = true;
        Ok(())
    }

    pub fn make_regular(&mut self) {
        self.style = ReceiptFontStyle::Regular;
        self.modified = true;
    }

    pub fn make_bold(&mut self) {
        self.style = ReceiptFontStyle::Bold;
        self.modified = true;
    }

    pub fn make_italic(&mut self) {
        self.style = ReceiptFontStyle::Italic;
        self.modified = true;
    }
}

/// Preference file form: `name|style code|size`.
impl fmt::Display for ReceiptFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.name, self.style.code(), self.size)
    }
}

impl Setting for ReceiptFont {
    fn is_modified(&self) -> bool {
        self.modified
    }

    fn file_value(&self) -> Option<String> {
        Some(self.to_string())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Configurator for the Workflows receipt printer.
///
/// Printer, font and paper settings are held until [`ReceiptPrinter::run`];
/// raw key changes made through [`ReceiptPrinter::update`] and
/// [`ReceiptPrinter::delete`] are staged right away.
#[derive(Debug)]
pub struct ReceiptPrinter {
    configurator: Configurator,
    group: SettingsGroup,
    paper: Paper,
}

impl ReceiptPrinter {
    /// Creates a receipt printer configurator over the given preference files.
    pub fn new(config_files: impl IntoIterator<Item = PathBuf>) -> ConfigurationResult<Self> {
        let mut group = SettingsGroup::new(RECEIPT_KEYPATH);
        group.add_setting(NAME, SettingType::Str, SettingOptions::default())?;
        group.add_setting(DOT_MATRIX, SettingType::Str, SettingOptions::one_of(YES_NO))?;
        group.add_setting(ENABLED, SettingType::Str, SettingOptions::one_of(YES_NO))?;
        group.override_setting(FONT, ReceiptFont::default());

        Ok(Self {
            configurator: Configurator::new(config_files),
            group,
            paper: Paper::receipt()?,
        })
    }

    pub fn with_lock_policy(mut self, lock_policy: LockPolicy) -> Self {
        self.configurator = self.configurator.with_lock_policy(lock_policy);
        self
    }

    pub fn keypath(&self) -> &str {
        self.group.keypath()
    }

    pub fn config_files(&self) -> &BTreeSet<PathBuf> {
        self.configurator.config_files()
    }

    /// Makes `printer_name` the receipt printer and enables it.
    pub fn add(&mut self, printer_name: &str) -> ConfigurationResult<()> {
        info!(message = "Setting receipt printer", printer = %printer_name);
        self.group.set_value(NAME, printer_name)?;
        self.group.set_value(DOT_MATRIX, "N")?;
        self.group.set_value(ENABLED, "Y")
    }

    /// Adds the first installed printer among `printer_names`, or disables
    /// the receipt printer when none of them is installed.
    ///
    /// Returns the printer that was added.
    pub fn add_from(
        &mut self,
        discovery: &dyn PrinterDiscovery,
        printer_names: &[String],
    ) -> ConfigurationResult<Option<String>> {
        info!(message = "Looking for receipt printer", candidates = ?printer_names);
        match discovery.find(printer_names).into_iter().next() {
            Some(printer) => {
                self.add(&printer)?;
                Ok(Some(printer))
            }
            None => {
                info!(message = "No receipt printer installed");
                self.disable()?;
                Ok(None)
            }
        }
    }

    pub fn enable(&mut self) -> ConfigurationResult<()> {
        self.group.set_value(ENABLED, "Y")
    }

    pub fn disable(&mut self) -> ConfigurationResult<()> {
        self.group.set_value(ENABLED, "N")
    }

    /// Same as [`ReceiptPrinter::disable`]; the printer name is kept.
    pub fn remove(&mut self) -> ConfigurationResult<()> {
        self.disable()
    }

    pub fn font(&self) -> ConfigurationResult<&ReceiptFont> {
        self.group.setting::<ReceiptFont>(FONT)
    }

    pub fn font_mut(&mut self) -> ConfigurationResult<&mut ReceiptFont> {
        self.group.setting_mut::<ReceiptFont>(FONT)
    }

    pub fn paper(&self) -> &Paper {
        &self.paper
    }

    pub fn paper_mut(&mut self) -> &mut Paper {
        &mut self.paper
    }

    /// Pending `(key, value)` pairs: printer settings first, then paper.
    pub fn settings(&self) -> Vec<(String, String)> {
        let mut settings = self.group.settings();
        settings.extend(self.paper.settings());
        settings
    }

    /// True if any printer, font or paper setting was modified.
    pub fn modified(&self) -> bool {
        self.group.modified() || self.paper.modified()
    }

    /// True if [`ReceiptPrinter::run`] would change anything.
    pub fn changes_staged(&self) -> bool {
        self.configurator.changes_staged() || self.modified()
    }

    pub fn update(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.configurator.update(key, value);
    }

    pub fn batch_update<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.configurator.batch_update(pairs);
    }

    pub fn delete(&mut self, key: impl Into<String>) {
        self.configurator.delete(key);
    }

    /// Stages every modified setting and writes the preference files.
    ///
    /// Settings stay modified afterwards, so a later run writes them again.
    pub fn run(&mut self, test_run: bool) -> ConfigurationResult<Vec<RenderedFile>> {
        let settings = self.settings();
        self.configurator.batch_update(settings);
        self.configurator.run(test_run)
    }
}
