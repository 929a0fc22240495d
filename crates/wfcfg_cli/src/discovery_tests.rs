use super::*;
use tempfile::TempDir;

#[test]
fn test_user_workflows_dirs() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let users = temp_dir.path();
    for user in ["alice", "bob"] {
        fs::create_dir_all(users.join(user).join("Sirsi").join("Workflows"))
            .expect("Failed to create profile");
    }
    fs::create_dir_all(users.join("Public")).expect("Failed to create profile");

    assert_eq!(
        user_workflows_dirs(users),
        vec![
            users.join("alice").join("Sirsi").join("Workflows"),
            users.join("bob").join("Sirsi").join("Workflows"),
        ]
    );
}

#[test]
fn test_user_workflows_dirs_missing_root() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    assert!(user_workflows_dirs(&temp_dir.path().join("missing")).is_empty());
}

#[cfg(not(windows))]
#[test]
fn test_default_dirs_off_windows() {
    assert_eq!(default_workflows_dirs(), vec![PathBuf::from("/tmp")]);
}

#[cfg(not(windows))]
#[test]
fn test_configured_printers_are_installed() {
    let printers = SystemPrinters::new(vec!["EPSON TM-T20".to_string()]);
    assert_eq!(printers.installed(), vec!["EPSON TM-T20".to_string()]);
    assert_eq!(printers.find(&["epson tm-t20".to_string()]).len(), 1);
}
