//! Lookup of locally installed printers.

use std::collections::BTreeSet;

#[cfg(test)]
#[path = "printer_tests.rs"]
mod tests;

/// Source of the names of the printers installed on this machine.
pub trait PrinterDiscovery {
    /// Names of all installed printers.
    ///
    /// A source that cannot be read reports no printers.
    fn installed(&self) -> Vec<String>;

    /// Installed printers matching any of `wanted`, ignoring case.
    ///
    /// Names are returned as installed, not as requested.
    fn find(&self, wanted: &[String]) -> BTreeSet<String> {
        let wanted: BTreeSet<String> = wanted.iter().map(|w| w.to_lowercase()).collect();
        self.installed()
            .into_iter()
            .filter(|printer| wanted.contains(&printer.to_lowercase()))
            .collect()
    }
}

/// A fixed list of installed printers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticPrinters {
    printers: Vec<String>,
}

impl StaticPrinters {
    pub fn new<I, S>(printers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            printers: printers.into_iter().map(Into::into).collect(),
        }
    }
}

impl PrinterDiscovery for StaticPrinters {
    fn installed(&self) -> Vec<String> {
        self.printers.clone()
    }
}
