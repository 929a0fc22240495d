//! Line formats for Workflows property files.
//!
//! A [`Configurator`](crate::Configurator) is generic over the format used to
//! split each line into a key and a value and to join them back together.

use crate::errors::{ConfigurationError, ConfigurationResult};

#[cfg(test)]
#[path = "line_format_tests.rs"]
mod tests;

/// Converts between a property file line and a `(key, value)` record.
pub trait LineFormat {
    /// Splits a trimmed, non-blank line into a key and a value.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::MalformedLine`] if the separator is missing. The
    /// `path` field is left empty for the caller to fill in.
    fn parse(&self, line: &str) -> ConfigurationResult<(String, String)>;

    /// Joins a key and a value into a line, without a line terminator.
    fn format(&self, key: &str, value: &str) -> String;
}

/// `key=value` lines as used by the `preference` files.
///
/// Keys never contain `=`, so the first `=` separates key from value.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyValueFormat;

impl LineFormat for KeyValueFormat {
    fn parse(&self, line: &str) -> ConfigurationResult<(String, String)> {
        line.split_once('=')
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .ok_or_else(|| malformed(line))
    }

    fn format(&self, key: &str, value: &str) -> String {
        format!("{}={}", key, value)
    }
}

/// `key|field|field|...|` lines as used by the `font` files.
///
/// The value of a record is every field after the key, rejoined with the
/// delimiter; the trailing delimiter is not part of the value.
#[derive(Debug, Clone, Copy)]
pub struct DelimitedFormat {
    delimiter: char,
}

impl DelimitedFormat {
    pub const fn new(delimiter: char) -> Self {
        Self { delimiter }
    }
}

impl Default for DelimitedFormat {
    fn default() -> Self {
        Self::new('|')
    }
}

impl LineFormat for DelimitedFormat {
    fn parse(&self, line: &str) -> ConfigurationResult<(String, String)> {
        let line = line.strip_suffix(self.delimiter).unwrap_or(line);
        line.split_once(self.delimiter)
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .ok_or_else(|| malformed(line))
    }

    fn format(&self, key: &str, value: &str) -> String {
        format!("{key}{d}{value}{d}", d = self.delimiter)
    }
}

fn malformed(line: &str) -> ConfigurationError {
    ConfigurationError::MalformedLine {
        path: String::new(),
        line: line.to_string(),
    }
}
