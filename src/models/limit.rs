use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Accounting period a spending limit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    /// Wire identifier, as the services spell it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            _ => None,
        }
    }

    pub fn all() -> &'static [Period] {
        &[Self::Daily, Self::Weekly, Self::Monthly]
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The active spending limit as reported by the limit service. Extra body
/// fields are tolerated and ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingLimit {
    pub amount: Decimal,
    pub period: Period,
    #[serde(default)]
    pub start_date: Option<String>,
}

/// Local precondition failures of the limit editor, raised before any
/// network call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid amount")]
    InvalidAmount,
    #[error("Please select a period")]
    MissingPeriod,
}

/// Validate editor input in submission order: the amount is checked first,
/// then the period, each short-circuiting.
pub fn validate_submission(
    amount_text: &str,
    period: Option<Period>,
) -> Result<(Decimal, Period), ValidationError> {
    let amount =
        Decimal::from_str(amount_text.trim()).map_err(|_| ValidationError::InvalidAmount)?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::InvalidAmount);
    }
    let period = period.ok_or(ValidationError::MissingPeriod)?;
    Ok((amount, period))
}
