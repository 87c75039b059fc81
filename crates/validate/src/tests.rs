use super::*;

// -------------------- validate_integer --------------------

#[test]
fn integer_accepts_digits_empty_and_sentinel() {
    assert_eq!(validate_integer("0"), Ok("0"));
    assert_eq!(validate_integer("123"), Ok("123"));
    assert_eq!(validate_integer(""), Ok(""));
    assert_eq!(validate_integer("N/A"), Ok("N/A"));
}

#[test]
fn integer_rejects_non_digits() {
    for bad in ["-1", "1.5", "abc", " 12", "12 ", "n/a"] {
        assert_eq!(
            validate_integer(bad),
            Err(ValidationError::InvalidRecord(bad.to_string())),
            "{bad:?} should be rejected"
        );
    }
}

// -------------------- validate_name --------------------

#[test]
fn name_accepts_ordinary_names() {
    for ok in ["USA", "Los Angeles", "A", "Ab ", "São Paulo", "N/A"] {
        assert_eq!(validate_name(ok), Ok(ok), "{ok:?} should pass");
    }
}

#[test]
fn name_rejects_blank_and_letter_then_whitespace() {
    for bad in ["", "   ", "\t", "a ", "Z   "] {
        assert!(
            matches!(validate_name(bad), Err(ValidationError::InvalidRecord(_))),
            "{bad:?} should be rejected"
        );
    }
}

// -------------------- validate_aqi_value --------------------

#[test]
fn aqi_value_sentinel_always_passes() {
    assert_eq!(validate_aqi_value("N/A"), Ok(true));
}

#[test]
fn aqi_value_rejects_negative_and_empty() {
    assert_eq!(
        validate_aqi_value("-1"),
        Err(ValidationError::InvalidAqiValue("-1".to_string()))
    );
    assert_eq!(
        validate_aqi_value(""),
        Err(ValidationError::InvalidAqiValue(String::new()))
    );
}

#[test]
fn aqi_value_accepts_zero_and_large() {
    assert_eq!(validate_aqi_value("0"), Ok(true));
    assert_eq!(validate_aqi_value("500"), Ok(true));
    assert_eq!(validate_aqi_value("007"), Ok(true));
}

#[test]
fn aqi_value_rejects_overflow() {
    assert!(validate_aqi_value("99999999999999999999").is_err());
}

// -------------------- validate_aqi_category --------------------

#[test]
fn aqi_category_accepts_all_labels_any_case() {
    for cat in AqiCategory::ALL {
        assert_eq!(validate_aqi_category(cat.label()), Ok(true));
        assert_eq!(validate_aqi_category(&cat.label().to_lowercase()), Ok(true));
        assert_eq!(validate_aqi_category(&cat.label().to_uppercase()), Ok(true));
    }
    assert_eq!(validate_aqi_category("N/A"), Ok(true));
}

#[test]
fn aqi_category_error_lists_allowed_set() {
    let err = validate_aqi_category("Terrible").unwrap_err();
    let msg = err.to_string();
    for cat in AqiCategory::ALL {
        assert!(msg.contains(cat.label()), "message should mention {}", cat.label());
    }
    assert!(msg.contains("Terrible"));
}

// -------------------- validate_air_quality --------------------

#[test]
fn air_quality_all_good_passes() {
    let aq = AirQuality::from_fields([
        "50", "Good", "10", "Good", "20", "Good", "5", "Good", "15", "Good",
    ]);
    assert_eq!(validate_air_quality(&aq), Ok(true));
}

#[test]
fn air_quality_deleted_passes() {
    assert_eq!(validate_air_quality(&AirQuality::deleted()), Ok(true));
}

#[test]
fn air_quality_sentinel_value_with_real_category_passes() {
    let aq = AirQuality::from_fields([
        "N/A", "Hazardous", "10", "Good", "20", "Good", "5", "Good", "15", "Good",
    ]);
    assert_eq!(validate_air_quality(&aq), Ok(true));
}

#[test]
fn air_quality_reports_first_failure() {
    let aq = AirQuality::from_fields([
        "50", "Good", "-1", "Bogus", "20", "Good", "5", "Good", "15", "Good",
    ]);
    assert_eq!(
        validate_air_quality(&aq),
        Err(ValidationError::InvalidAqiValue("-1".to_string()))
    );

    let aq = AirQuality::from_fields([
        "50", "Good", "10", "Good", "20", "Good", "5", "Good", "15", "Bogus",
    ]);
    assert_eq!(
        validate_air_quality(&aq),
        Err(ValidationError::InvalidAqiCategory("Bogus".to_string()))
    );
}
