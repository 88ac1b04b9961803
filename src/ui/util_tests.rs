#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::util::*;

// ── format_amount ──────────────────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(dec!(1234.56)), "$1,234.56");
}

#[test]
fn test_format_amount_no_commas() {
    assert_eq!(format_amount(dec!(999.99)), "$999.99");
}

#[test]
fn test_format_amount_zero() {
    assert_eq!(format_amount(dec!(0)), "$0.00");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-42.50)), "-$42.50");
}

#[test]
fn test_format_amount_large() {
    assert_eq!(format_amount(dec!(1234567.89)), "$1,234,567.89");
}

#[test]
fn test_format_amount_rounds_to_two_decimals() {
    assert_eq!(format_amount(dec!(1.5)), "$1.50");
}

#[test]
fn test_format_amount_single_digit() {
    assert_eq!(format_amount(dec!(5)), "$5.00");
}

// ── progress_bar ───────────────────────────────────────────

#[test]
fn test_progress_bar_empty() {
    assert_eq!(progress_bar(0.0, 10), "[░░░░░░░░░░]");
}

#[test]
fn test_progress_bar_full() {
    assert_eq!(progress_bar(1.0, 10), "[██████████]");
}

#[test]
fn test_progress_bar_half() {
    assert_eq!(progress_bar(0.5, 10), "[█████░░░░░]");
}

#[test]
fn test_progress_bar_clamps_overflow() {
    assert_eq!(progress_bar(1.5, 10), "[██████████]");
}

#[test]
fn test_progress_bar_clamps_negative() {
    assert_eq!(progress_bar(-0.5, 10), "[░░░░░░░░░░]");
}

#[test]
fn test_progress_bar_zero_width() {
    assert_eq!(progress_bar(0.7, 0), "[]");
}
