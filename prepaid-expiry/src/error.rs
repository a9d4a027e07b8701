//! Error types for expiry date calculation.
//!
//! All errors implement the standard [`std::error::Error`] trait via [`thiserror::Error`].
//!
//! # Error Categories
//!
//! - **Input Errors** ([`ExpiryError::InvalidAmount`]): the paid amount cannot be priced
//!   under the active billing policy
//! - **Calendar Errors** ([`ExpiryError::DateOutOfRange`]): the expiry date is not representable
//! - **Configuration Errors** ([`ExpiryError::InvalidConfig`]): the billing policy is unusable
//!
//! # Examples
//!
//! ```
//! use prepaid_expiry::error::{ExpiryError, Result};
//!
//! fn require_payment(amount: u64) -> Result<u64> {
//!     if amount == 0 {
//!         return Err(ExpiryError::InvalidAmount("pay_amount must be positive".to_owned()));
//!     }
//!     Ok(amount)
//! }
//!
//! assert!(require_payment(0).is_err());
//! ```

use thiserror::Error;

/// Result type alias for expiry operations.
///
/// All fallible functions in this crate return this type.
pub type Result<T> = std::result::Result<T, ExpiryError>;

/// Errors that can occur while computing an expiry date or loading a billing policy.
///
/// The error messages are user-facing and name the offending value.
#[must_use = "errors should be handled, propagated, or explicitly panicked"]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpiryError {
    /// Payment amount is not accepted by the billing policy.
    ///
    /// Under the default strict policy an amount must be a positive multiple of the unit
    /// price or exactly the annual plan amount. Under the floor policy it must cover at
    /// least one unit. Zero is never accepted.
    ///
    /// # Recovery
    ///
    /// Reject the payment upstream, or switch the policy to
    /// [`AmountPolicy::Floor`](crate::AmountPolicy::Floor) if partial units should be
    /// ignored rather than refused.
    ///
    /// # Examples
    ///
    /// ```
    /// use prepaid_expiry::error::ExpiryError;
    ///
    /// let err = ExpiryError::InvalidAmount("15000 is not a multiple of 10000".to_owned());
    /// assert!(err.to_string().contains("Invalid payment amount"));
    /// ```
    #[error("Invalid payment amount: {0}")]
    InvalidAmount(String),

    /// Expiry date cannot be represented by the calendar type.
    ///
    /// Only reachable with billing dates near the end of the supported calendar range
    /// or with very large purchased durations.
    #[error("Expiry date out of range: {0}")]
    DateOutOfRange(String),

    /// Billing policy could not be read, parsed, or validated.
    ///
    /// # Recovery
    ///
    /// Fix the TOML document. `unit_price` must be positive, and an `[annual_plan]`
    /// table needs a positive `amount` and `months`.
    #[error("Invalid billing policy: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_amount_display() {
        let error = ExpiryError::InvalidAmount("15000".into());
        assert_eq!(error.to_string(), "Invalid payment amount: 15000");
    }

    #[test]
    fn test_date_out_of_range_display() {
        let error = ExpiryError::DateOutOfRange("+262143-12".to_owned());
        assert_eq!(error.to_string(), "Expiry date out of range: +262143-12");
    }

    #[test]
    fn test_invalid_config_display() {
        let error = ExpiryError::InvalidConfig("unit_price must be positive".to_owned());
        assert!(error.to_string().contains("Invalid billing policy"));
    }
}
