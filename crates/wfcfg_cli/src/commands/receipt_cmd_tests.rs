//! Tests for the receipt-printer command.

use super::*;
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wfcfg_core::{ConfigurationError, LockPolicy, StaticPrinters};

const KEYPATH: &str = "peripherals.receipt.";

fn preference_file(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("preference");
    fs::write(&path, "peripherals.receipt.enabled=Y\n").expect("Failed to write preference");
    path
}

fn run(file: &Path, printers: &StaticPrinters, args: &ReceiptArgs) -> Result<Vec<RenderedFile>, Error> {
    let ctx = CommandContext {
        preference_files: BTreeSet::from([file.to_path_buf()]),
        font_files: BTreeSet::new(),
        printers,
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

fn get<'a>(prefs: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    prefs.get(&format!("{}{}", KEYPATH, key)).map(String::as_str)
}

#[test]
fn test_add() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let file = preference_file(&dir);
    let args = ReceiptArgs {
        add: Some("Front Desk Receipt".to_string()),
        ..ReceiptArgs::default()
    };
    run(&file, &StaticPrinters::default(), &args).expect("execute");

    let prefs = read(&file);
    assert_eq!(get(&prefs, "name"), Some("Front Desk Receipt"));
    assert_eq!(get(&prefs, "dot_matrix"), Some("N"));
    assert_eq!(get(&prefs, "enabled"), Some("Y"));
}

#[test]
fn test_remove() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let file = preference_file(&dir);
    let args = ReceiptArgs {
        remove: true,
        ..ReceiptArgs::default()
    };
    run(&file, &StaticPrinters::default(), &args).expect("execute");
    assert_eq!(get(&read(&file), "enabled"), Some("N"));
}

#[test]
fn test_find_installed() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let file = preference_file(&dir);
    let printers = StaticPrinters::new(["EPSON TM-T20"]);
    let args = ReceiptArgs {
        find: vec!["Star TSP100".to_string(), "epson tm-t20".to_string()],
        ..ReceiptArgs::default()
    };
    run(&file, &printers, &args).expect("execute");

    let prefs = read(&file);
    assert_eq!(get(&prefs, "name"), Some("EPSON TM-T20"));
    assert_eq!(get(&prefs, "enabled"), Some("Y"));
}

#[test]
fn test_find_none_installed_disables() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let file = preference_file(&dir);
    let args = ReceiptArgs {
        find: vec!["Star TSP100".to_string()],
        ..ReceiptArgs::default()
    };
    run(&file, &StaticPrinters::default(), &args).expect("execute");

    let prefs = read(&file);
    assert_eq!(get(&prefs, "name"), None);
    assert_eq!(get(&prefs, "enabled"), Some("N"));
}

#[test]
fn test_font() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let file = preference_file(&dir);
    let args = ReceiptArgs {
        font_size: Some(18),
        font_type: Some("Arbitrary Sans".to_string()),
        font_style: Some("regular".to_string()),
        ..ReceiptArgs::default()
    };
    run(&file, &StaticPrinters::default(), &args).expect("execute");
    assert_eq!(get(&read(&file), "font"), Some("Arbitrary Sans|0|18"));
}

#[test]
fn test_font_size_only_keeps_default_face() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let file = preference_file(&dir);
    let args = ReceiptArgs {
        font_size: Some(9),
        ..ReceiptArgs::default()
    };
    run(&file, &StaticPrinters::default(), &args).expect("execute");
    assert_eq!(get(&read(&file), "font"), Some("Verdana|1|9"));
}

#[test]
fn test_paper() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let file = preference_file(&dir);
    let args = ReceiptArgs {
        paper_margins: vec![0.35, 0.45, 0.55, 0.65],
        paper_units: Some("inch".to_string()),
        paper_width: Some(3.0),
        ..ReceiptArgs::default()
    };
    run(&file, &StaticPrinters::default(), &args).expect("execute");

    let prefs = read(&file);
    for (side, value) in ["top", "right", "bottom", "left"]
        .into_iter()
        .zip(["0.35", "0.45", "0.55", "0.65"])
    {
        assert_eq!(get(&prefs, &format!("page.margin.{}", side)), Some(value));
    }
    assert_eq!(get(&prefs, "page.unit"), Some("INCH"));
    assert_eq!(get(&prefs, "page.width"), Some("3.0"));
}

#[test]
fn test_paper_wrong_margin_count() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let file = preference_file(&dir);
    let args = ReceiptArgs {
        paper_margins: vec![0.1, 0.2, 0.3],
        ..ReceiptArgs::default()
    };
    let result = run(&file, &StaticPrinters::default(), &args);
    assert!(matches!(
        result,
        Err(Error::Configuration(ConfigurationError::ValueCount { count: 3 }))
    ));
}
