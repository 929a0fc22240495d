//! Client display fonts.
//!
//! The Workflows `font` property file holds one line per UI component:
//! `ComponentName|Typeface|Style|Size|`.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::configurator::{Configurator, RenderedFile};
use crate::errors::{ConfigurationError, ConfigurationResult};
use crate::line_format::DelimitedFormat;
use crate::lock::LockPolicy;

#[cfg(test)]
#[path = "font_tests.rs"]
mod tests;

/// Component name that addresses every entry of [`GUI_COMPONENTS`] at once.
pub const ALL_COMPONENTS: &str = "ALL";

/// UI components whose font can be configured.
pub const GUI_COMPONENTS: &[&str] = &[
    "VerifyfieldFont",
    "NextstepFont",
    "WritefieldFont",
    "RadiobuttonFont",
    "StatusFont",
    "MenubarFont",
    "ReadfieldFont",
    "NavigationFont",
    "ListboxFont",
    "CheckboxFont",
    "LabelFont",
    "ButtonFont",
];

/// Style of a UI component font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Plain,
    Bold,
    Italic,
}

impl FontStyle {
    pub const ALL: [FontStyle; 3] = [FontStyle::Plain, FontStyle::Bold, FontStyle::Italic];

    pub fn as_str(&self) -> &'static str {
        match self {
            FontStyle::Plain => "plain",
            FontStyle::Bold => "bold",
            FontStyle::Italic => "italic",
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontStyle {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FontStyle::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigurationError::InvalidValue {
                value: s.to_string(),
                valid: "bold, italic, plain".to_string(),
            })
    }
}

/// Typeface, style and size of a UI component font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontDescriptor {
    pub typeface: String,
    pub style: FontStyle,
    pub size: u32,
}

impl FontDescriptor {
    pub fn new(typeface: impl Into<String>, style: FontStyle, size: u32) -> Self {
        Self {
            typeface: typeface.into(),
            style,
            size,
        }
    }
}

/// Value form of the descriptor in the font file: `Typeface|style|size`.
impl fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.typeface, self.style, self.size)
    }
}

/// Configurator for the `font` property files.
///
/// Fonts can only be set; removing a component's font or batching raw
/// values is rejected with [`ConfigurationError::UnsupportedOperation`].
#[derive(Debug, Clone)]
pub struct FontConfigurator {
    inner: Configurator<DelimitedFormat>,
}

impl FontConfigurator {
    pub fn new(config_files: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            inner: Configurator::with_format(config_files, DelimitedFormat::default()),
        }
    }

    pub fn with_lock_policy(self, lock_policy: LockPolicy) -> Self {
        Self {
            inner: self.inner.with_lock_policy(lock_policy),
        }
    }

    pub fn changes_staged(&self) -> bool {
        self.inner.changes_staged()
    }

    /// Stages `font` for `component`. The component name [`ALL_COMPONENTS`]
    /// (in any case) stages it for every entry of [`GUI_COMPONENTS`].
    pub fn update(&mut self, component: &str, font: &FontDescriptor) {
        let value = font.to_string();
        if component.eq_ignore_ascii_case(ALL_COMPONENTS) {
            self.inner
                .batch_update(GUI_COMPONENTS.iter().map(|c| (*c, value.as_str())));
        } else {
            self.inner.update(component, value);
        }
    }

    pub fn batch_update<I, K, V>(&mut self, _pairs: I) -> ConfigurationResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Err(Self::unsupported("batch_update"))
    }

    pub fn delete(&mut self, _key: &str) -> ConfigurationResult<()> {
        Err(Self::unsupported("delete"))
    }

    pub fn run(&mut self, test_run: bool) -> ConfigurationResult<Vec<RenderedFile>> {
        self.inner.run(test_run)
    }

    fn unsupported(operation: &str) -> ConfigurationError {
        ConfigurationError::UnsupportedOperation {
            operation: operation.to_string(),
            configurator: "font".to_string(),
        }
    }
}
