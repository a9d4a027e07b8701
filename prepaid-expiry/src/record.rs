//! Payment record data model.
//!
//! A [`PaymentRecord`] describes one prepaid payment: when it was received, how much was
//! paid, and optionally when the customer paid for the very first time.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single prepaid payment.
///
/// Immutable once built. The optional first billing date is set with
/// [`with_first_billing_date`](Self::with_first_billing_date).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use prepaid_expiry::PaymentRecord;
///
/// let first = NaiveDate::from_ymd_opt(2021, 1, 31).unwrap();
/// let billed = NaiveDate::from_ymd_opt(2021, 2, 28).unwrap();
///
/// let record = PaymentRecord::new(billed, 10_000).with_first_billing_date(first);
/// assert_eq!(record.anchor_day(), 31);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaymentRecord {
    billing_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    first_billing_date: Option<NaiveDate>,
    pay_amount: u64,
}

impl PaymentRecord {
    /// Creates a record for a payment of `pay_amount` received on `billing_date`.
    #[must_use]
    pub fn new(billing_date: NaiveDate, pay_amount: u64) -> Self {
        Self { billing_date, first_billing_date: None, pay_amount }
    }

    /// Sets the date of the customer's very first payment.
    #[must_use]
    pub fn with_first_billing_date(self, first_billing_date: NaiveDate) -> Self {
        Self { first_billing_date: Some(first_billing_date), ..self }
    }

    /// Date the payment was received.
    #[must_use]
    pub fn billing_date(&self) -> NaiveDate {
        self.billing_date
    }

    /// Date of the customer's first payment, if known.
    #[must_use]
    pub fn first_billing_date(&self) -> Option<NaiveDate> {
        self.first_billing_date
    }

    /// Amount paid, in monetary units.
    #[must_use]
    pub fn pay_amount(&self) -> u64 {
        self.pay_amount
    }

    /// Date whose day of month every expiry tries to reproduce.
    ///
    /// Falls back to the billing date when no first billing date is recorded.
    #[must_use]
    pub fn anchor_date(&self) -> NaiveDate {
        self.first_billing_date.unwrap_or(self.billing_date)
    }

    /// Day of month (1-31) that expiry dates align to.
    #[must_use]
    pub fn anchor_day(&self) -> u32 {
        self.anchor_date().day()
    }

    /// Builds the next payment of the same subscription.
    ///
    /// The returned record keeps this record's anchor date as its first billing date,
    /// so a chain of renewals never loses the original day of month even after a
    /// payment lands on a clamped day such as February 28th.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use prepaid_expiry::PaymentRecord;
    ///
    /// let jan = PaymentRecord::new(NaiveDate::from_ymd_opt(2021, 1, 31).unwrap(), 10_000);
    /// let feb = jan.renewal(NaiveDate::from_ymd_opt(2021, 2, 28).unwrap(), 10_000);
    ///
    /// assert_eq!(feb.first_billing_date(), NaiveDate::from_ymd_opt(2021, 1, 31));
    /// ```
    #[must_use]
    pub fn renewal(&self, billing_date: NaiveDate, pay_amount: u64) -> Self {
        Self::new(billing_date, pay_amount).with_first_billing_date(self.anchor_date())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_anchor_defaults_to_billing_date() {
        let record = PaymentRecord::new(date(2021, 5, 5), 10_000);
        assert_eq!(record.first_billing_date(), None);
        assert_eq!(record.anchor_date(), date(2021, 5, 5));
        assert_eq!(record.anchor_day(), 5);
    }

    #[test]
    fn test_anchor_uses_first_billing_date() {
        let record =
            PaymentRecord::new(date(2021, 2, 28), 10_000).with_first_billing_date(date(2021, 1, 31));
        assert_eq!(record.billing_date(), date(2021, 2, 28));
        assert_eq!(record.anchor_day(), 31);
    }

    #[test]
    fn test_renewal_chain_keeps_original_anchor() {
        let first = PaymentRecord::new(date(2021, 1, 31), 10_000);
        let second = first.renewal(date(2021, 2, 28), 10_000);
        let third = second.renewal(date(2021, 3, 31), 20_000);

        assert_eq!(second.first_billing_date(), Some(date(2021, 1, 31)));
        assert_eq!(third.first_billing_date(), Some(date(2021, 1, 31)));
        assert_eq!(third.pay_amount(), 20_000);
    }

    #[test]
    fn test_deserialize_without_first_billing_date() {
        let json = r#"{"billing_date":"2021-03-01","pay_amount":10000}"#;
        let record: PaymentRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record, PaymentRecord::new(date(2021, 3, 1), 10_000));
    }

    #[test]
    fn test_serialize_omits_missing_first_billing_date() {
        let record = PaymentRecord::new(date(2021, 3, 1), 10_000);
        let json = serde_json::to_string(&record).unwrap();

        assert!(!json.contains("first_billing_date"));
        assert!(json.contains("\"2021-03-01\""));
    }
}
