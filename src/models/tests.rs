#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn limit(amount: Decimal) -> SpendingLimit {
    SpendingLimit {
        amount,
        period: Period::Monthly,
        start_date: None,
    }
}

// ── Period ────────────────────────────────────────────────────

#[test]
fn test_period_parse() {
    assert_eq!(Period::parse("daily"), Some(Period::Daily));
    assert_eq!(Period::parse("WEEKLY"), Some(Period::Weekly));
    assert_eq!(Period::parse("Monthly"), Some(Period::Monthly));
    assert_eq!(Period::parse("yearly"), None);
    assert_eq!(Period::parse(""), None);
}

#[test]
fn test_period_roundtrip() {
    for p in Period::all() {
        assert_eq!(Period::parse(p.as_str()), Some(*p), "Roundtrip failed for {p}");
    }
}

#[test]
fn test_period_display() {
    assert_eq!(format!("{}", Period::Daily), "Daily");
    assert_eq!(Period::Weekly.as_str(), "weekly");
}

#[test]
fn test_period_all() {
    assert_eq!(Period::all().len(), 3);
}

#[test]
fn test_period_wire_format() {
    assert_eq!(
        serde_json::to_value(Period::Monthly).unwrap(),
        serde_json::json!("monthly")
    );
    let parsed: Period = serde_json::from_str("\"weekly\"").unwrap();
    assert_eq!(parsed, Period::Weekly);
}

// ── validate_submission ───────────────────────────────────────

#[test]
fn test_validate_accepts_amount_and_period() {
    let (amount, period) = validate_submission("50.00", Some(Period::Weekly)).unwrap();
    assert_eq!(amount, dec!(50.00));
    assert_eq!(period, Period::Weekly);
}

#[test]
fn test_validate_trims_whitespace() {
    let (amount, _) = validate_submission(" 25 ", Some(Period::Daily)).unwrap();
    assert_eq!(amount, dec!(25));
}

#[test]
fn test_validate_rejects_unparseable_amounts() {
    for text in ["", "abc", "12..5", "1,000", "$50"] {
        assert_eq!(
            validate_submission(text, Some(Period::Daily)),
            Err(ValidationError::InvalidAmount),
            "expected {text:?} to be rejected"
        );
    }
}

#[test]
fn test_validate_rejects_non_positive_amounts() {
    assert_eq!(
        validate_submission("0", Some(Period::Daily)),
        Err(ValidationError::InvalidAmount)
    );
    assert_eq!(
        validate_submission("-5.00", Some(Period::Daily)),
        Err(ValidationError::InvalidAmount)
    );
}

#[test]
fn test_validate_requires_period() {
    assert_eq!(
        validate_submission("50.00", None),
        Err(ValidationError::MissingPeriod)
    );
}

#[test]
fn test_validate_checks_amount_before_period() {
    assert_eq!(
        validate_submission("abc", None),
        Err(ValidationError::InvalidAmount)
    );
}

// ── LimitProgress ─────────────────────────────────────────────

#[test]
fn test_progress_normal_band() {
    // 150 of 200 is 75%
    let progress = LimitProgress::derive(&limit(dec!(200)), dec!(150));
    assert_eq!(progress.percentage, dec!(75));
    assert_eq!(progress.band, ColorBand::Normal);
}

#[test]
fn test_progress_warning_band_is_inclusive() {
    let progress = LimitProgress::derive(&limit(dec!(100)), dec!(80));
    assert_eq!(progress.percentage, dec!(80));
    assert_eq!(progress.band, ColorBand::Warning);

    // just below the threshold stays normal
    let progress = LimitProgress::derive(&limit(dec!(100)), dec!(79.99));
    assert_eq!(progress.band, ColorBand::Normal);
}

#[test]
fn test_progress_danger_at_exactly_the_limit() {
    let progress = LimitProgress::derive(&limit(dec!(100)), dec!(100));
    assert_eq!(progress.percentage, dec!(100));
    assert_eq!(progress.band, ColorBand::Danger);
}

#[test]
fn test_progress_clamps_overspend_to_one_hundred() {
    let progress = LimitProgress::derive(&limit(dec!(100)), dec!(150));
    assert_eq!(progress.percentage, dec!(100));
    assert_eq!(progress.band, ColorBand::Danger);
}

#[test]
fn test_progress_zero_spending() {
    let progress = LimitProgress::derive(&limit(dec!(100)), Decimal::ZERO);
    assert_eq!(progress.percentage, Decimal::ZERO);
    assert_eq!(progress.band, ColorBand::Normal);
}

#[test]
fn test_progress_is_deterministic() {
    let l = limit(dec!(300));
    let first = LimitProgress::derive(&l, dec!(123.45));
    let second = LimitProgress::derive(&l, dec!(123.45));
    assert_eq!(first, second);
}

#[test]
fn test_progress_guards_zero_amount() {
    let progress = LimitProgress::derive(&limit(Decimal::ZERO), dec!(50));
    assert_eq!(progress.percentage, Decimal::ZERO);
    assert_eq!(progress.band, ColorBand::Normal);
}

#[test]
fn test_progress_fractional_ratio() {
    let progress = LimitProgress::derive(&limit(dec!(3)), dec!(1));
    assert_eq!(progress.band, ColorBand::Normal);
    assert!(progress.percentage > dec!(33));
    assert!(progress.percentage < dec!(34));
}

// ── wire models ───────────────────────────────────────────────

#[test]
fn test_spending_limit_deserializes_with_extra_fields() {
    let parsed: SpendingLimit = serde_json::from_str(
        r#"{"id": "sl_1", "amount": 200, "period": "monthly", "startDate": "2024-01-01T00:00:00.000Z", "userId": "u_1"}"#,
    )
    .unwrap();
    assert_eq!(parsed.amount, dec!(200));
    assert_eq!(parsed.period, Period::Monthly);
    assert_eq!(parsed.start_date.as_deref(), Some("2024-01-01T00:00:00.000Z"));
}

#[test]
fn test_spending_limit_start_date_optional() {
    let parsed: SpendingLimit =
        serde_json::from_str(r#"{"amount": 10.5, "period": "daily"}"#).unwrap();
    assert_eq!(parsed.amount, dec!(10.5));
    assert!(parsed.start_date.is_none());
}

#[test]
fn test_current_spending_deserializes() {
    let parsed: CurrentSpending =
        serde_json::from_str(r#"{"totalSpending": 123.45}"#).unwrap();
    assert_eq!(parsed.total_spending, dec!(123.45));
}

#[test]
fn test_current_spending_defaults_to_zero() {
    assert_eq!(CurrentSpending::default().total_spending, Decimal::ZERO);
}
