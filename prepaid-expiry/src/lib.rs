//! Prepaid Expiry: expiry dates for prepaid subscriptions
//!
//! Computes the date a prepaid subscription runs out, given the payment that was just
//! received. Customers prepay a unit price per month, any multiple of it for several
//! months, or a flat annual amount for a full year.
//!
//! # Calendar Rules
//!
//! - **Anchor day**: every expiry tries to land on the day of month of the customer's
//!   first payment, not the day of the latest payment.
//! - **Clamping**: when the anchor day does not exist in the target month (the 31st in
//!   June, the 30th in February) the month's last day is used instead.
//! - **Restoration**: a payment made on a clamped day (February 28th) does not move the
//!   anchor; the next long-enough month gets the original day back.
//!
//! ```text
//!  first payment     renewal           renewal
//!  2021-01-31  ───▶  2021-02-28  ───▶  2021-03-31  ───▶  2021-04-30
//!   anchor 31         clamped           restored          clamped
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use prepaid_expiry::{PaymentRecord, calculate_expiry_date};
//!
//! # fn example() -> prepaid_expiry::Result<()> {
//! let first = NaiveDate::from_ymd_opt(2021, 1, 31).unwrap();
//! let billed = NaiveDate::from_ymd_opt(2021, 2, 28).unwrap();
//!
//! let record = PaymentRecord::new(billed, 10_000).with_first_billing_date(first);
//! let expiry = calculate_expiry_date(&record)?;
//!
//! assert_eq!(expiry, NaiveDate::from_ymd_opt(2021, 3, 31).unwrap());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Custom Pricing
//!
//! [`BillingPolicy`] carries the unit price, the annual plan, and whether partial units
//! are refused or ignored. It deserializes from TOML:
//!
//! ```rust
//! use chrono::NaiveDate;
//! use prepaid_expiry::{BillingPolicy, ExpiryDateCalculator, PaymentRecord};
//!
//! # fn example() -> prepaid_expiry::Result<()> {
//! let policy = BillingPolicy::from_toml(
//!     r#"
//!     unit_price = 10000
//!     amount_policy = "floor"
//!     "#,
//! )?;
//! let calculator = ExpiryDateCalculator::new(policy);
//!
//! let record = PaymentRecord::new(NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(), 25_000);
//! assert_eq!(
//!     calculator.calculate_expiry_date(&record)?,
//!     NaiveDate::from_ymd_opt(2021, 5, 1).unwrap()
//! );
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Module Organization
//!
//! - [`calculator`]: the expiry date calculation
//! - [`record`]: the payment record value type
//! - [`policy`]: pricing configuration
//! - [`error`]: error types
//!
//! # Logging
//!
//! Calculations emit `tracing` events: a `debug` span per calculation and a `warn`
//! event for every rejected record. Installing a subscriber is left to the application.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod calculator;
pub mod error;
pub mod policy;
pub mod record;

pub use calculator::{ExpiryDateCalculator, calculate_expiry_date};
pub use error::{ExpiryError, Result};
pub use policy::{AmountPolicy, AnnualPlan, BillingPolicy};
pub use record::PaymentRecord;
