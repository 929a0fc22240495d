//! Tests for TypedSetting and SettingValue

use super::*;

fn greetings() -> SettingOptions {
    SettingOptions::one_of(&["hello", "goodbye"])
}

#[test]
fn test_value_is_none_until_set() {
    let setting = TypedSetting::new(SettingType::Int);
    assert_eq!(setting.value(), None);
    assert!(!setting.is_modified());
}

#[test]
fn test_modified_stays_true_across_repeat_sets() {
    let mut setting = TypedSetting::new(SettingType::Int);
    setting.set_value(1).expect("set");
    assert!(setting.is_modified());
    setting.set_value(1).expect("set again");
    assert!(setting.is_modified());
    assert_eq!(setting.value(), Some(SettingValue::Int(1)));
}

#[test]
fn test_integer_promoted_to_float() {
    let mut setting = TypedSetting::new(SettingType::Float);
    setting.set_value(1).expect("set");
    assert_eq!(setting.value(), Some(SettingValue::Float(1.0)));
    setting.set_value(0.75).expect("set");
    assert_eq!(setting.value(), Some(SettingValue::Float(0.75)));
}

#[test]
fn test_type_mismatch_rejected() {
    let mut setting = TypedSetting::new(SettingType::Float);
    let result = setting.set_value("fail");
    assert_eq!(
        result,
        Err(ConfigurationError::TypeMismatch {
            expected: SettingType::Float,
            received: SettingType::Str,
        })
    );
    assert!(!setting.is_modified());
}

#[test]
fn test_float_not_demoted_to_integer() {
    let mut setting = TypedSetting::new(SettingType::Int);
    assert!(matches!(
        setting.set_value(8.5),
        Err(ConfigurationError::TypeMismatch { .. })
    ));
}

#[test]
fn test_mixed_case_value_passes_lower_case_valid_set() {
    let mut setting =
        TypedSetting::with_options(SettingType::Str, greetings()).expect("valid options");
    setting.set_value("Hello").expect("mixed case accepted");
    assert_eq!(setting.value(), Some(SettingValue::from("Hello")));
    setting.set_value("GoodBye").expect("mixed case accepted");
    assert_eq!(setting.value(), Some(SettingValue::from("GoodBye")));
}

#[test]
fn test_value_outside_valid_set_rejected() {
    let mut setting =
        TypedSetting::with_options(SettingType::Str, greetings()).expect("valid options");
    let err = setting.set_value("fail").unwrap_err();
    assert_eq!(
        err,
        ConfigurationError::InvalidValue {
            value: "fail".to_string(),
            valid: "goodbye, hello".to_string(),
        }
    );
}

#[test]
fn test_numeric_valid_set() {
    let options = SettingOptions {
        valid_values: Some(vec![SettingValue::Int(1), SettingValue::Int(2)]),
        ..SettingOptions::default()
    };
    let mut setting = TypedSetting::with_options(SettingType::Int, options).expect("valid");
    setting.set_value(2).expect("member");
    assert!(matches!(
        setting.set_value(3),
        Err(ConfigurationError::InvalidValue { .. })
    ));
}

#[test]
fn test_valid_values_must_match_declared_type() {
    let options = SettingOptions {
        valid_values: Some(vec![SettingValue::from("one"), SettingValue::Int(2)]),
        ..SettingOptions::default()
    };
    let result = TypedSetting::with_options(SettingType::Str, options);
    assert_eq!(
        result,
        Err(ConfigurationError::TypeMismatch {
            expected: SettingType::Str,
            received: SettingType::Int,
        })
    );
}

#[test]
fn test_initial_value_is_validated_and_marks_modified() {
    let options = SettingOptions {
        value: Some(SettingValue::from("Hello")),
        ..greetings()
    };
    let setting = TypedSetting::with_options(SettingType::Str, options).expect("valid");
    assert!(setting.is_modified());

    let options = SettingOptions {
        value: Some(SettingValue::from("nope")),
        ..greetings()
    };
    assert!(TypedSetting::with_options(SettingType::Str, options).is_err());
}

#[test]
fn test_uppercase_transform_affects_reads_only() {
    let options = SettingOptions::one_of(&["centi", "inch"]).with_transform(DisplayTransform::Uppercase);
    let mut setting = TypedSetting::with_options(SettingType::Str, options).expect("valid");
    setting.set_value("CeNTi").expect("set");

    assert_eq!(setting.value(), Some(SettingValue::from("CENTI")));
    assert_eq!(setting.file_value(), Some("CeNTi".to_string()));
}

#[test]
fn test_lowercase_transform_ignores_non_strings() {
    let value = DisplayTransform::Lowercase.apply(&SettingValue::Float(2.5));
    assert_eq!(value, SettingValue::Float(2.5));
}

#[test]
fn test_float_display_keeps_one_decimal_for_whole_numbers() {
    assert_eq!(SettingValue::Float(3.0).to_string(), "3.0");
    assert_eq!(SettingValue::Float(0.25).to_string(), "0.25");
    assert_eq!(SettingValue::Float(5.5).to_string(), "5.5");
    assert_eq!(SettingValue::Int(18).to_string(), "18");
}

#[test]
fn test_setting_value_accessors() {
    assert_eq!(SettingValue::from("x").as_str(), Some("x"));
    assert_eq!(SettingValue::Int(2).as_f64(), Some(2.0));
    assert_eq!(SettingValue::Bool(true).as_str(), None);
}
