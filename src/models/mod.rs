mod limit;
mod progress;
mod spending;

pub use limit::{validate_submission, Period, SpendingLimit, ValidationError};
pub use progress::{ColorBand, LimitProgress};
pub use spending::CurrentSpending;

#[cfg(test)]
mod tests;
