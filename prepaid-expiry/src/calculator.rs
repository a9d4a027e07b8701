//! Expiry date calculation.
//!
//! Turns a [`PaymentRecord`] into the date its prepaid period ends. The expiry lands on
//! the anchor day of month (the day of the customer's first payment) in the month reached
//! by adding the purchased months to the billing month, clamped to that month's length.

use chrono::{Datelike, Months, NaiveDate};
use tracing::{debug, instrument, warn};

use crate::{
    error::{ExpiryError, Result},
    policy::BillingPolicy,
    record::PaymentRecord,
};

/// Calculates expiry dates under a fixed [`BillingPolicy`].
///
/// The calculator holds no mutable state; one instance can be shared freely across
/// threads.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use prepaid_expiry::{ExpiryDateCalculator, PaymentRecord};
///
/// # fn example() -> prepaid_expiry::Result<()> {
/// let calculator = ExpiryDateCalculator::default();
/// let record = PaymentRecord::new(NaiveDate::from_ymd_opt(2021, 1, 31).unwrap(), 10_000);
///
/// let expiry = calculator.calculate_expiry_date(&record)?;
/// assert_eq!(expiry, NaiveDate::from_ymd_opt(2021, 2, 28).unwrap());
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpiryDateCalculator {
    policy: BillingPolicy,
}

impl ExpiryDateCalculator {
    /// Creates a calculator for the given policy.
    #[must_use]
    pub fn new(policy: BillingPolicy) -> Self {
        Self { policy }
    }

    /// Returns the active billing policy.
    #[must_use]
    pub fn policy(&self) -> &BillingPolicy {
        &self.policy
    }

    /// Computes the date the prepaid period of `record` ends.
    ///
    /// # Errors
    ///
    /// - [`ExpiryError::InvalidAmount`] if the policy does not accept the paid amount
    /// - [`ExpiryError::DateOutOfRange`] if the expiry is beyond the supported calendar
    #[instrument(
        level = "debug",
        skip(self, record),
        fields(
            billing_date = %record.billing_date(),
            first_billing_date = ?record.first_billing_date(),
            pay_amount = record.pay_amount(),
        )
    )]
    pub fn calculate_expiry_date(&self, record: &PaymentRecord) -> Result<NaiveDate> {
        let billing_date = record.billing_date();
        let months = self.policy.months_for_amount(record.pay_amount()).inspect_err(|e| {
            warn!(error = %e, "Rejected payment amount");
        })?;
        let anchor_day = record.anchor_day();

        let expiry = expiry_in_month(billing_date, months, anchor_day).ok_or_else(|| {
            ExpiryError::DateOutOfRange(format!("{billing_date} plus {months} months"))
        })?;

        debug!(months, anchor_day, %expiry, "Calculated expiry date");
        Ok(expiry)
    }
}

/// Computes the expiry date of `record` under the default [`BillingPolicy`].
///
/// # Errors
///
/// See [`ExpiryDateCalculator::calculate_expiry_date`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use prepaid_expiry::{PaymentRecord, calculate_expiry_date};
///
/// let record = PaymentRecord::new(NaiveDate::from_ymd_opt(2021, 2, 28).unwrap(), 10_000)
///     .with_first_billing_date(NaiveDate::from_ymd_opt(2021, 1, 31).unwrap());
///
/// assert_eq!(
///     calculate_expiry_date(&record).unwrap(),
///     NaiveDate::from_ymd_opt(2021, 3, 31).unwrap()
/// );
/// ```
pub fn calculate_expiry_date(record: &PaymentRecord) -> Result<NaiveDate> {
    ExpiryDateCalculator::default().calculate_expiry_date(record)
}

/// Anchor day in the month `months` after the month of `billing_date`, clamped to that
/// month's last day. `None` when the month is outside chrono's range.
fn expiry_in_month(billing_date: NaiveDate, months: u32, anchor_day: u32) -> Option<NaiveDate> {
    let target_start = billing_date.with_day(1)?.checked_add_months(Months::new(months))?;
    let target_end = last_day_of_month(target_start)?;
    target_start.with_day(anchor_day.min(target_end.day()))
}

fn last_day_of_month(month_start: NaiveDate) -> Option<NaiveDate> {
    month_start.checked_add_months(Months::new(1))?.pred_opt()
}
