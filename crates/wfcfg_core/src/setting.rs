//! Typed, validated setting values.
//!
//! A [`TypedSetting`] is a single scalar cell with a declared [`SettingType`],
//! an optional set of valid values and an optional [`DisplayTransform`]. It
//! remembers whether a value was ever assigned so that a
//! [`SettingsGroup`](crate::SettingsGroup) only writes what the caller touched.

use std::any::Any;
use std::fmt;

use crate::errors::{ConfigurationError, ConfigurationResult};

#[cfg(test)]
#[path = "setting_tests.rs"]
mod tests;

/// The declared type of a setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingType {
    Bool,
    Int,
    Float,
    Str,
}

impl fmt::Display for SettingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SettingType::Bool => "bool",
            SettingType::Int => "integer",
            SettingType::Float => "float",
            SettingType::Str => "string",
        };
        f.write_str(name)
    }
}

/// A scalar value held by a setting.
///
/// The `Display` form is what gets written to a property file. Floats keep
/// one decimal place when they are whole numbers (`3.0`), which is the form
/// the Workflows client writes itself.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl SettingValue {
    /// Returns the type tag of this value.
    pub fn kind(&self) -> SettingType {
        match self {
            SettingValue::Bool(_) => SettingType::Bool,
            SettingValue::Int(_) => SettingType::Int,
            SettingValue::Float(_) => SettingType::Float,
            SettingValue::Str(_) => SettingType::Str,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SettingValue::Float(v) => Some(*v),
            SettingValue::Int(v) => Some(*v as f64),
            _ => None,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Bool(v) => write!(f, "{}", v),
            SettingValue::Int(v) => write!(f, "{}", v),
            SettingValue::Float(v) => {
                if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e16 {
                    write!(f, "{:.1}", v)
                } else {
                    write!(f, "{}", v)
                }
            }
            SettingValue::Str(v) => f.write_str(v),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<i32> for SettingValue {
    fn from(value: i32) -> Self {
        SettingValue::Int(i64::from(value))
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        SettingValue::Int(value)
    }
}

impl From<u32> for SettingValue {
    fn from(value: u32) -> Self {
        SettingValue::Int(i64::from(value))
    }
}

impl From<f64> for SettingValue {
    fn from(value: f64) -> Self {
        SettingValue::Float(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Str(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::Str(value)
    }
}

/// Transform applied to a value when it is read back with
/// [`TypedSetting::value`]. It never changes what is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayTransform {
    Uppercase,
    Lowercase,
}

impl DisplayTransform {
    /// Applies the transform. Non-string values pass through unchanged.
    pub fn apply(&self, value: &SettingValue) -> SettingValue {
        match (self, value) {
            (DisplayTransform::Uppercase, SettingValue::Str(s)) => {
                SettingValue::Str(s.to_uppercase())
            }
            (DisplayTransform::Lowercase, SettingValue::Str(s)) => {
                SettingValue::Str(s.to_lowercase())
            }
            (_, other) => other.clone(),
        }
    }
}

/// Optional construction parameters for a [`TypedSetting`].
#[derive(Debug, Clone, Default)]
pub struct SettingOptions {
    /// Values the setting accepts. Every entry must have the declared type.
    pub valid_values: Option<Vec<SettingValue>>,

    /// Transform applied when reading the value back.
    pub transform: Option<DisplayTransform>,

    /// Initial value, validated like [`TypedSetting::set_value`].
    pub value: Option<SettingValue>,
}

impl SettingOptions {
    /// Options restricting a string setting to the given (lower case) members.
    pub fn one_of(valid: &[&str]) -> Self {
        Self {
            valid_values: Some(valid.iter().map(|v| SettingValue::from(*v)).collect()),
            ..Self::default()
        }
    }

    /// Adds a display transform to these options.
    pub fn with_transform(mut self, transform: DisplayTransform) -> Self {
        self.transform = Some(transform);
        self
    }
}

/// Anything a [`SettingsGroup`](crate::SettingsGroup) can hold.
///
/// Composite settings such as [`ReceiptFont`](crate::ReceiptFont) implement
/// this trait so they can be substituted for a plain [`TypedSetting`] with
/// [`SettingsGroup::override_setting`](crate::SettingsGroup::override_setting).
pub trait Setting: fmt::Debug + Any {
    /// True once a value has been assigned.
    fn is_modified(&self) -> bool;

    /// The string written to the property file, if a value is present.
    fn file_value(&self) -> Option<String>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A single validated scalar value with a "modified" flag.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedSetting {
    kind: SettingType,
    valid_values: Option<Vec<SettingValue>>,
    transform: Option<DisplayTransform>,
    value: Option<SettingValue>,
    modified: bool,
}

impl TypedSetting {
    /// Creates an unconstrained, unset setting of the given type.
    pub fn new(kind: SettingType) -> Self {
        Self {
            kind,
            valid_values: None,
            transform: None,
            value: None,
            modified: false,
        }
    }

    /// Creates a setting from construction options.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::TypeMismatch`] if a valid value or the initial
    ///   value does not have the declared type.
    /// - [`ConfigurationError::InvalidValue`] if the initial value is not one
    ///   of the valid values.
    pub fn with_options(kind: SettingType, options: SettingOptions) -> ConfigurationResult<Self> {
        let mut setting = Self::new(kind);

        if let Some(valid_values) = options.valid_values {
            if let Some(bad) = valid_values.iter().find(|v| v.kind() != kind) {
                return Err(ConfigurationError::TypeMismatch {
                    expected: kind,
                    received: bad.kind(),
                });
            }
            setting.valid_values = Some(valid_values);
        }

        setting.transform = options.transform;

        if let Some(value) = options.value {
            setting.set_value(value)?;
        }

        Ok(setting)
    }

    /// Validates and stores a value, marking the setting modified.
    ///
    /// An integer assigned to a float setting is promoted to a float. String
    /// values pass validation when either the value or its lower case form is
    /// a valid value; the value is stored as supplied.
    pub fn set_value(&mut self, value: impl Into<SettingValue>) -> ConfigurationResult<()> {
        let value = match (self.kind, value.into()) {
            (SettingType::Float, SettingValue::Int(v)) => SettingValue::Float(v as f64),
            (_, v) => v,
        };

        if value.kind() != self.kind {
            return Err(ConfigurationError::TypeMismatch {
                expected: self.kind,
                received: value.kind(),
            });
        }

        if let Some(valid_values) = &self.valid_values {
            if !Self::is_member(valid_values, &value) {
                return Err(ConfigurationError::InvalidValue {
                    value: value.to_string(),
                    valid: Self::describe(valid_values),
                });
            }
        }

        self.value = Some(value);
        self.modified = true;
        Ok(())
    }

    /// Returns the current value passed through the display transform, or
    /// `None` if no value was ever set.
    pub fn value(&self) -> Option<SettingValue> {
        let value = self.value.as_ref()?;
        Some(match &self.transform {
            Some(transform) => transform.apply(value),
            None => value.clone(),
        })
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    fn is_member(valid_values: &[SettingValue], value: &SettingValue) -> bool {
        if valid_values.contains(value) {
            return true;
        }
        match value {
            SettingValue::Str(s) => valid_values.contains(&SettingValue::Str(s.to_lowercase())),
            _ => false,
        }
    }

    fn describe(valid_values: &[SettingValue]) -> String {
        let mut names: Vec<String> = valid_values.iter().map(ToString::to_string).collect();
        names.sort();
        names.join(", ")
    }
}

impl Setting for TypedSetting {
    fn is_modified(&self) -> bool {
        self.modified
    }

    fn file_value(&self) -> Option<String> {
        self.value.as_ref().map(ToString::to_string)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
