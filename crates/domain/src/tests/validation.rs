// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, parse_day, validate_hours, validate_project, validate_week, validate_year,
};
use time::Weekday;

#[test]
fn test_validate_week_bounds() {
    assert!(validate_week(1).is_ok());
    assert!(validate_week(53).is_ok());
    assert_eq!(validate_week(0), Err(DomainError::InvalidWeek(0)));
    assert_eq!(validate_week(54), Err(DomainError::InvalidWeek(54)));
}

#[test]
fn test_validate_year_bounds() {
    assert!(validate_year(2000).is_ok());
    assert!(validate_year(2200).is_ok());
    assert_eq!(validate_year(1999), Err(DomainError::InvalidYear(1999)));
    assert_eq!(validate_year(2201), Err(DomainError::InvalidYear(2201)));
}

#[test]
fn test_validate_hours_accepts_full_day() {
    assert!(validate_hours(24.0).is_ok());
    assert!(validate_hours(0.25).is_ok());
}

#[test]
fn test_validate_hours_rejects_zero() {
    let err = validate_hours(0.0).unwrap_err();
    assert!(matches!(err, DomainError::InvalidHours(_)));
}

#[test]
fn test_validate_hours_rejects_nan() {
    let err = validate_hours(f32::NAN).unwrap_err();
    assert_eq!(
        err,
        DomainError::InvalidHours(String::from("Hours must be a finite number"))
    );
}

#[test]
fn test_validate_project_rejects_whitespace() {
    assert!(validate_project("ALPHA").is_ok());
    assert!(matches!(
        validate_project(" \t"),
        Err(DomainError::InvalidProject(_))
    ));
}

#[test]
fn test_parse_day_accepts_names_and_abbreviations() {
    assert_eq!(parse_day("Monday"), Ok(Weekday::Monday));
    assert_eq!(parse_day("tue"), Ok(Weekday::Tuesday));
    assert_eq!(parse_day(" SUNDAY "), Ok(Weekday::Sunday));
}

#[test]
fn test_parse_day_rejects_unknown() {
    assert_eq!(
        parse_day("Funday"),
        Err(DomainError::InvalidDay(String::from("Funday")))
    );
}
