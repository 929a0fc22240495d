//! Printer paper settings.
//!
//! Workflows stores the screen printer's page setup under
//! `peripherals.page.` and the receipt printer's under
//! `peripherals.receipt.page.`. The receipt variant names its keys
//! differently and has a page width instead of an orientation and size.

use crate::errors::{ConfigurationError, ConfigurationResult};
use crate::setting::{DisplayTransform, SettingOptions, SettingType, SettingValue};
use crate::settings_group::SettingsGroup;

#[cfg(test)]
#[path = "paper_tests.rs"]
mod tests;

pub const PAPER_UNITS: &[&str] = &["centi", "inch"];
pub const PAPER_SIZES: &[&str] = &["a4", "legal", "letter", "receipt", "custom"];
pub const PAPER_ORIENTATIONS: &[&str] = &["landscape", "portrait"];

pub const SCREEN_PAPER_KEYPATH: &str = "peripherals.page.";
pub const RECEIPT_PAPER_KEYPATH: &str = "peripherals.receipt.page.";

const MARGIN_TOP: &str = "margin_top";
const MARGIN_RIGHT: &str = "margin_right";
const MARGIN_BOTTOM: &str = "margin_bottom";
const MARGIN_LEFT: &str = "margin_left";
const UNITS: &str = "margin_unit";
const ORIENTATION: &str = "orientation";
const SIZE: &str = "paper_size";
const WIDTH: &str = "width";

/// Margin setting names in clockwise order, starting at the top.
const MARGINS: [&str; 4] = [MARGIN_TOP, MARGIN_RIGHT, MARGIN_BOTTOM, MARGIN_LEFT];

/// Page setup of a printer.
///
/// Enumerated values (units, orientation, size) are accepted in any case and
/// stored upper-cased, which is how Workflows itself writes them.
#[derive(Debug)]
pub struct Paper {
    group: SettingsGroup,
}

impl Paper {
    /// Paper settings of the screen printer.
    pub fn new() -> ConfigurationResult<Self> {
        Self::with_keypath(SCREEN_PAPER_KEYPATH)
    }

    /// Screen printer style paper settings under an arbitrary key path.
    pub fn with_keypath(keypath: impl Into<String>) -> ConfigurationResult<Self> {
        let mut group = SettingsGroup::new(keypath);
        for margin in MARGINS {
            group.add_setting(margin, SettingType::Float, SettingOptions::default())?;
        }
        let enumerated = [
            (UNITS, PAPER_UNITS),
            (ORIENTATION, PAPER_ORIENTATIONS),
            (SIZE, PAPER_SIZES),
        ];
        for (name, valid) in enumerated {
            group.add_setting(
                name,
                SettingType::Str,
                SettingOptions::one_of(valid).with_transform(DisplayTransform::Uppercase),
            )?;
        }
        Ok(Self { group })
    }

    /// Paper settings of the receipt printer.
    ///
    /// Margins are written as `margin.<side>`, the units as `unit`, and there
    /// is a `width` instead of an orientation and a size.
    pub fn receipt() -> ConfigurationResult<Self> {
        let mut paper = Self::with_keypath(RECEIPT_PAPER_KEYPATH)?;
        let group = &mut paper.group;
        group.delete_setting(ORIENTATION)?;
        group.delete_setting(SIZE)?;
        group.add_setting(WIDTH, SettingType::Float, SettingOptions::default())?;
        for margin in MARGINS {
            let side = margin.trim_start_matches("margin_");
            group.override_key(margin, &format!("margin.{}", side))?;
        }
        group.override_key(UNITS, "unit")?;
        Ok(paper)
    }

    pub fn keypath(&self) -> &str {
        self.group.keypath()
    }

    pub fn margin_top(&self) -> Option<f64> {
        self.float(MARGIN_TOP)
    }

    pub fn set_margin_top(&mut self, margin: f64) -> ConfigurationResult<()> {
        self.group.set_value(MARGIN_TOP, margin)
    }

    pub fn margin_right(&self) -> Option<f64> {
        self.float(MARGIN_RIGHT)
    }

    pub fn set_margin_right(&mut self, margin: f64) -> ConfigurationResult<()> {
        self.group.set_value(MARGIN_RIGHT, margin)
    }

    pub fn margin_bottom(&self) -> Option<f64> {
        self.float(MARGIN_BOTTOM)
    }

    pub fn set_margin_bottom(&mut self, margin: f64) -> ConfigurationResult<()> {
        self.group.set_value(MARGIN_BOTTOM, margin)
    }

    pub fn margin_left(&self) -> Option<f64> {
        self.float(MARGIN_LEFT)
    }

    pub fn set_margin_left(&mut self, margin: f64) -> ConfigurationResult<()> {
        self.group.set_value(MARGIN_LEFT, margin)
    }

    /// The four margins in clockwise order, starting at the top.
    pub fn margins(&self) -> [Option<f64>; 4] {
        MARGINS.map(|name| self.float(name))
    }

    /// Sets all margins from one value, or each margin from four values
    /// given clockwise starting at the top.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::ValueCount`] for any other number of values;
    /// no margin is changed in that case.
    pub fn set_margins(&mut self, margins: &[f64]) -> ConfigurationResult<()> {
        let values = match *margins {
            [all] => [all; 4],
            [top, right, bottom, left] => [top, right, bottom, left],
            _ => {
                return Err(ConfigurationError::ValueCount {
                    count: margins.len(),
                })
            }
        };
        for (name, value) in MARGINS.into_iter().zip(values) {
            self.group.set_value(name, value)?;
        }
        Ok(())
    }

    /// Margin units, upper-cased.
    pub fn units(&self) -> Option<String> {
        self.string(UNITS)
    }

    /// Sets the margin units: `centi` or `inch`, in any case.
    pub fn set_units(&mut self, units: &str) -> ConfigurationResult<()> {
        self.set_enumerated(UNITS, units)
    }

    /// Page orientation, upper-cased. Always `None` for receipt paper.
    pub fn orientation(&self) -> Option<String> {
        self.string(ORIENTATION)
    }

    /// Sets the orientation: `landscape` or `portrait`, in any case.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::KeyNotFound`] on receipt paper.
    pub fn set_orientation(&mut self, orientation: &str) -> ConfigurationResult<()> {
        self.set_enumerated(ORIENTATION, orientation)
    }

    /// Paper size, upper-cased. Always `None` for receipt paper.
    pub fn size(&self) -> Option<String> {
        self.string(SIZE)
    }

    /// Sets the paper size: `a4`, `legal`, `letter`, `receipt` or `custom`.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::KeyNotFound`] on receipt paper.
    pub fn set_size(&mut self, size: &str) -> ConfigurationResult<()> {
        self.set_enumerated(SIZE, size)
    }

    /// Page width. Only receipt paper has one.
    pub fn width(&self) -> Option<f64> {
        self.float(WIDTH)
    }

    /// # Errors
    ///
    /// [`ConfigurationError::KeyNotFound`] on screen printer paper.
    pub fn set_width(&mut self, width: f64) -> ConfigurationResult<()> {
        self.group.set_value(WIDTH, width)
    }

    /// `(key, value)` pairs of every modified setting.
    pub fn settings(&self) -> Vec<(String, String)> {
        self.group.settings()
    }

    pub fn modified(&self) -> bool {
        self.group.modified()
    }

    fn set_enumerated(&mut self, name: &str, value: &str) -> ConfigurationResult<()> {
        self.group
            .set_value(name, value.to_uppercase())
            .map_err(|e| match e {
                ConfigurationError::InvalidValue { valid, .. } => {
                    ConfigurationError::InvalidValue {
                        value: value.to_string(),
                        valid,
                    }
                }
                other => other,
            })
    }

    fn float(&self, name: &str) -> Option<f64> {
        self.value(name).and_then(|v| v.as_f64())
    }

    fn string(&self, name: &str) -> Option<String> {
        self.value(name).and_then(|v| v.as_str().map(str::to_string))
    }

    fn value(&self, name: &str) -> Option<SettingValue> {
        self.group.get_value(name).ok().flatten()
    }
}
