//! Staged editing of Sirsi Workflows client property files.
//!
//! Changes are collected in memory by a [`Configurator`] and written to every
//! copy of a property file in one run. Settings objects ([`Paper`],
//! [`ReceiptPrinter`]) validate typed values and turn them into keys under
//! their namespace; [`FontConfigurator`] edits the delimited `font` file.

// Staged change engine
pub mod configurator;
pub mod line_format;
pub mod lock;

// Typed settings
pub mod setting;
pub mod settings_group;

// Workflows schemas
pub mod font;
pub mod paper;
pub mod receipt_printer;

// Environment
pub mod paths;
pub mod printer;

pub mod errors;

pub use configurator::{Configurator, RenderedFile};
pub use errors::{ConfigurationError, ConfigurationResult};
pub use font::{FontConfigurator, FontDescriptor, FontStyle, ALL_COMPONENTS, GUI_COMPONENTS};
pub use line_format::{DelimitedFormat, KeyValueFormat, LineFormat};
pub use lock::{LockPolicy, LockedFile};
pub use paper::{Paper, PAPER_ORIENTATIONS, PAPER_SIZES, PAPER_UNITS};
pub use paths::{PropertyDirectories, PropertyFileProvider, FONT_FILE, PREFERENCE_FILE};
pub use printer::{PrinterDiscovery, StaticPrinters};
pub use receipt_printer::{ReceiptFont, ReceiptFontStyle, ReceiptPrinter};
pub use setting::{
    DisplayTransform, Setting, SettingOptions, SettingType, SettingValue, TypedSetting,
};
pub use settings_group::SettingsGroup;
