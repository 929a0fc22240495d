//! Tests for screen and receipt paper settings

use super::*;

fn screen() -> Paper {
    Paper::new().expect("Failed to create screen paper")
}

fn receipt() -> Paper {
    Paper::receipt().expect("Failed to create receipt paper")
}

fn has(paper: &Paper, key: &str, value: &str) -> bool {
    paper
        .settings()
        .contains(&(key.to_string(), value.to_string()))
}

#[test]
fn test_individual_margins() {
    let mut paper = screen();
    assert_eq!(paper.margin_top(), None);

    paper.set_margin_top(1.0).expect("top");
    paper.set_margin_right(0.75).expect("right");
    paper.set_margin_bottom(2.0).expect("bottom");
    paper.set_margin_left(0.5).expect("left");

    assert_eq!(paper.margin_top(), Some(1.0));
    assert_eq!(paper.margin_right(), Some(0.75));
    assert_eq!(paper.margin_bottom(), Some(2.0));
    assert_eq!(paper.margin_left(), Some(0.5));
}

#[test]
fn test_four_margins_set_clockwise() {
    let mut paper = screen();
    paper.set_margins(&[1.0, 2.0, 3.0, 4.0]).expect("margins");
    assert_eq!(paper.margins(), [Some(1.0), Some(2.0), Some(3.0), Some(4.0)]);
}

#[test]
fn test_single_margin_broadcasts() {
    let mut paper = screen();
    paper.set_margins(&[0.75]).expect("margins");
    assert_eq!(paper.margins(), [Some(0.75); 4]);
}

#[test]
fn test_wrong_margin_count_is_rejected() {
    let mut paper = screen();
    for count in [0, 2, 3, 5] {
        let values = vec![0.5; count];
        assert_eq!(
            paper.set_margins(&values),
            Err(ConfigurationError::ValueCount { count })
        );
    }
    assert!(!paper.modified());
}

#[test]
fn test_units_read_back_upper_case() {
    let mut paper = screen();
    paper.set_units("inch").expect("units");
    assert_eq!(paper.units().as_deref(), Some("INCH"));
    paper.set_units("CeNTi").expect("units");
    assert_eq!(paper.units().as_deref(), Some("CENTI"));
}

#[test]
fn test_size_and_orientation() {
    let mut paper = screen();
    paper.set_size("lEGaL").expect("size");
    assert_eq!(paper.size().as_deref(), Some("LEGAL"));
    paper.set_orientation("LaNdSCapE").expect("orientation");
    assert_eq!(paper.orientation().as_deref(), Some("LANDSCAPE"));
}

#[test]
fn test_invalid_enumerated_value_reports_input() {
    let mut paper = screen();
    assert_eq!(
        paper.set_size("fail"),
        Err(ConfigurationError::InvalidValue {
            value: "fail".to_string(),
            valid: "a4, custom, legal, letter, receipt".to_string(),
        })
    );
    assert_eq!(paper.size(), None);
}

#[test]
fn test_screen_paper_has_no_width() {
    let mut paper = screen();
    assert!(matches!(
        paper.set_width(3.0),
        Err(ConfigurationError::KeyNotFound { .. })
    ));
}

#[test]
fn test_screen_settings() {
    let mut paper = screen();
    paper.set_margins(&[0.5]).expect("margins");
    paper.set_units("inch").expect("units");
    paper.set_size("letter").expect("size");
    paper.set_orientation("portrait").expect("orientation");

    let kp = paper.keypath().to_string();
    assert_eq!(kp, SCREEN_PAPER_KEYPATH);
    for side in ["top", "right", "bottom", "left"] {
        assert!(has(&paper, &format!("{}margin_{}", kp, side), "0.5"));
    }
    assert!(has(&paper, &format!("{}margin_unit", kp), "INCH"));
    assert!(has(&paper, &format!("{}orientation", kp), "PORTRAIT"));
    assert!(has(&paper, &format!("{}paper_size", kp), "LETTER"));
    assert_eq!(paper.settings().len(), 7);
}

#[test]
fn test_untouched_paper_is_not_modified() {
    let paper = screen();
    assert!(!paper.modified());
    assert!(paper.settings().is_empty());
}

#[test]
fn test_receipt_width() {
    let mut paper = receipt();
    paper.set_width(1.0).expect("width");
    assert_eq!(paper.width(), Some(1.0));
    paper.set_width(0.75).expect("width");
    assert_eq!(paper.width(), Some(0.75));
}

#[test]
fn test_receipt_has_no_orientation_or_size() {
    let mut paper = receipt();
    assert!(matches!(
        paper.set_orientation("portrait"),
        Err(ConfigurationError::KeyNotFound { .. })
    ));
    assert!(matches!(
        paper.set_size("a4"),
        Err(ConfigurationError::KeyNotFound { .. })
    ));
    assert_eq!(paper.orientation(), None);
    assert_eq!(paper.size(), None);
}

#[test]
fn test_receipt_settings_use_renamed_keys() {
    let mut paper = receipt();
    paper.set_margins(&[0.25]).expect("margins");
    paper.set_units("inch").expect("units");
    paper.set_width(3.0).expect("width");

    assert_eq!(paper.margin_top(), Some(0.25));
    assert_eq!(paper.units().as_deref(), Some("INCH"));
    assert_eq!(paper.width(), Some(3.0));

    let kp = paper.keypath().to_string();
    assert_eq!(kp, RECEIPT_PAPER_KEYPATH);
    for side in ["top", "right", "bottom", "left"] {
        assert!(has(&paper, &format!("{}margin.{}", kp, side), "0.25"));
    }
    assert!(has(&paper, &format!("{}unit", kp), "INCH"));
    assert!(has(&paper, &format!("{}width", kp), "3.0"));
    assert_eq!(paper.settings().len(), 6);
}
