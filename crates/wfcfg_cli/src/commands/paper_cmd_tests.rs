//! Tests for the paper command.

use super::*;
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wfcfg_core::{ConfigurationError, LockPolicy, StaticPrinters};

const KEYPATH: &str = "peripherals.page.";

fn preference_file(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("preference");
    fs::write(&path, "").expect("Failed to write preference");
    path
}

fn run(file: &Path, args: &PaperArgs) -> Result<Vec<RenderedFile>, Error> {
    let printers = StaticPrinters::default();
    let ctx = CommandContext {
        preference_files: BTreeSet::from([file.to_path_buf()]),
        font_files: BTreeSet::new(),
        printers: &printers,
        lock_policy: LockPolicy::default(),
        test_run: false,
    };
    execute(args, &ctx)
}

fn read(path: &Path) -> HashMap<String, String> {
    fs::read_to_string(path)
        .expect("Failed to read preference")
        .lines()
        .filter_map(|l| l.split_once('='))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_units() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let file = preference_file(&dir);
    for units in ["centi", "inch"] {
        let args = PaperArgs {
            units: Some(units.to_string()),
            ..PaperArgs::default()
        };
        run(&file, &args).expect("execute");
        assert_eq!(
            read(&file).get(&format!("{}margin_unit", KEYPATH)),
            Some(&units.to_uppercase())
        );
    }
}

#[test]
fn test_size_and_orientation() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let file = preference_file(&dir);
    let args = PaperArgs {
        size: Some("legal".to_string()),
        orientation: Some("landscape".to_string()),
        ..PaperArgs::default()
    };
    run(&file, &args).expect("execute");

    let prefs = read(&file);
    assert_eq!(
        prefs.get(&format!("{}paper_size", KEYPATH)).map(String::as_str),
        Some("LEGAL")
    );
    assert_eq!(
        prefs.get(&format!("{}orientation", KEYPATH)).map(String::as_str),
        Some("LANDSCAPE")
    );
}

#[test]
fn test_margins() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let file = preference_file(&dir);
    let sides = ["top", "right", "bottom", "left"];

    let args = PaperArgs {
        margins: vec![0.25],
        ..PaperArgs::default()
    };
    run(&file, &args).expect("execute");
    let prefs = read(&file);
    for side in sides {
        assert_eq!(
            prefs.get(&format!("{}margin_{}", KEYPATH, side)).map(String::as_str),
            Some("0.25")
        );
    }

    let args = PaperArgs {
        margins: vec![0.35, 0.45, 0.55, 0.65],
        ..PaperArgs::default()
    };
    run(&file, &args).expect("execute");
    let prefs = read(&file);
    for (side, value) in sides.into_iter().zip(["0.35", "0.45", "0.55", "0.65"]) {
        assert_eq!(
            prefs.get(&format!("{}margin_{}", KEYPATH, side)).map(String::as_str),
            Some(value)
        );
    }
}

#[test]
fn test_wrong_margin_count_fails_without_writing() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let file = preference_file(&dir);
    for margins in [vec![0.1, 0.2], vec![0.1, 0.2, 0.3], vec![0.1; 5]] {
        let count = margins.len();
        let args = PaperArgs {
            margins,
            ..PaperArgs::default()
        };
        let result = run(&file, &args);
        assert!(matches!(
            result,
            Err(Error::Configuration(ConfigurationError::ValueCount { count: c })) if c == count
        ));
    }
    assert_eq!(fs::read_to_string(&file).expect("read"), "");
}
