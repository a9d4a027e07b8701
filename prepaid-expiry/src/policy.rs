//! Billing policy configuration.
//!
//! TOML-deserializable pricing rules that turn a paid amount into a number of months.
//! Every field has a default, so an empty document yields [`BillingPolicy::default`].
//! Unknown keys are rejected.
//!
//! ```toml
//! unit_price = 10000
//! amount_policy = "strict"
//!
//! [annual_plan]
//! amount = 100000
//! months = 12
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ExpiryError, Result};

/// Amount that buys one month under the default policy.
pub const DEFAULT_UNIT_PRICE: u64 = 10_000;

/// Flat amount of the default annual plan.
pub const DEFAULT_ANNUAL_AMOUNT: u64 = 100_000;

/// Months granted by the default annual plan.
pub const DEFAULT_ANNUAL_MONTHS: u32 = 12;

/// How amounts that are not an exact number of units are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountPolicy {
    /// Amount must be a positive multiple of the unit price (or the annual plan amount).
    #[default]
    Strict,
    /// Amount is floor-divided by the unit price; the remainder buys nothing.
    Floor,
}

/// Flat-rate plan: paying exactly `amount` buys `months`, regardless of the unit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnnualPlan {
    /// Exact amount that selects this plan.
    pub amount: u64,
    /// Months granted.
    pub months: u32,
}

impl Default for AnnualPlan {
    fn default() -> Self {
        Self { amount: DEFAULT_ANNUAL_AMOUNT, months: DEFAULT_ANNUAL_MONTHS }
    }
}

/// Pricing rules used by [`ExpiryDateCalculator`](crate::ExpiryDateCalculator).
///
/// # Examples
///
/// ```
/// use prepaid_expiry::{AmountPolicy, BillingPolicy};
///
/// let policy = BillingPolicy::from_toml(
///     r#"
///     unit_price = 5000
///     amount_policy = "floor"
///     "#,
/// )
/// .unwrap();
///
/// assert_eq!(policy.amount_policy, AmountPolicy::Floor);
/// assert_eq!(policy.months_for_amount(12_000).unwrap(), 2);
/// // annual plan keeps its defaults
/// assert_eq!(policy.months_for_amount(100_000).unwrap(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BillingPolicy {
    /// Amount that buys one month.
    pub unit_price: u64,
    /// Treatment of partial units.
    pub amount_policy: AmountPolicy,
    /// Flat-rate plan checked before proportional pricing.
    pub annual_plan: AnnualPlan,
}

impl Default for BillingPolicy {
    fn default() -> Self {
        Self {
            unit_price: DEFAULT_UNIT_PRICE,
            amount_policy: AmountPolicy::default(),
            annual_plan: AnnualPlan::default(),
        }
    }
}

impl BillingPolicy {
    /// Parses and validates a policy from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ExpiryError::InvalidConfig`] if the document is malformed or fails
    /// [`validate`](Self::validate).
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let policy: Self = toml::from_str(toml_str)
            .map_err(|e| ExpiryError::InvalidConfig(format!("invalid TOML policy: {e}")))?;
        policy.validate()?;
        Ok(policy)
    }

    /// Reads a policy from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ExpiryError::InvalidConfig`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ExpiryError::InvalidConfig(format!(
                "cannot read policy file {}: {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_toml(&content)
    }

    /// Checks that the policy can price at least one month.
    ///
    /// # Errors
    ///
    /// Returns [`ExpiryError::InvalidConfig`] if `unit_price`, `annual_plan.amount`, or
    /// `annual_plan.months` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.unit_price == 0 {
            return Err(ExpiryError::InvalidConfig("unit_price must be positive".to_owned()));
        }
        if self.annual_plan.amount == 0 {
            return Err(ExpiryError::InvalidConfig(
                "annual_plan.amount must be positive".to_owned(),
            ));
        }
        if self.annual_plan.months == 0 {
            return Err(ExpiryError::InvalidConfig(
                "annual_plan.months must be positive".to_owned(),
            ));
        }
        Ok(())
    }

    /// Number of months bought by `amount`.
    ///
    /// The annual plan amount is matched first and always buys `annual_plan.months`.
    /// Any other amount buys `amount / unit_price` months.
    ///
    /// # Errors
    ///
    /// Returns [`ExpiryError::InvalidAmount`] if the amount buys no time, leaves a
    /// remainder under [`AmountPolicy::Strict`], or buys more months than fit in a `u32`.
    /// Returns [`ExpiryError::InvalidConfig`] if `unit_price` is zero.
    pub fn months_for_amount(&self, amount: u64) -> Result<u32> {
        if amount == 0 {
            return Err(ExpiryError::InvalidAmount("pay_amount must be positive".to_owned()));
        }
        if amount == self.annual_plan.amount {
            return Ok(self.annual_plan.months);
        }

        let unit_price = self.unit_price;
        let (Some(units), Some(remainder)) =
            (amount.checked_div(unit_price), amount.checked_rem(unit_price))
        else {
            return Err(ExpiryError::InvalidConfig("unit_price must be positive".to_owned()));
        };

        if self.amount_policy == AmountPolicy::Strict && remainder != 0 {
            return Err(ExpiryError::InvalidAmount(format!(
                "{amount} is not a multiple of the unit price {unit_price}"
            )));
        }
        if units == 0 {
            return Err(ExpiryError::InvalidAmount(format!(
                "{amount} is less than the unit price {unit_price}"
            )));
        }

        u32::try_from(units).map_err(|_| {
            ExpiryError::InvalidAmount(format!("{amount} buys more months than supported"))
        })
    }
}
