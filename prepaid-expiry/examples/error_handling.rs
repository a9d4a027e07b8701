//! Error handling example showing how to handle each error type.
//!
//! Covers amounts rejected by the billing policy, switching to the floor policy,
//! unusable policy documents, and dates at the edge of the calendar.
//!
//! # Running this example
//!
//! ```bash
//! cargo run --example error_handling
//! ```

#![allow(
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::uninlined_format_args,
    reason = "examples are allowed to use println and simple formatting"
)]

use chrono::NaiveDate;
use prepaid_expiry::{
    AmountPolicy, BillingPolicy, ExpiryDateCalculator, ExpiryError, PaymentRecord,
    calculate_expiry_date,
};

fn report(label: &str, result: Result<NaiveDate, ExpiryError>) {
    match result {
        Ok(expiry) => println!("   {label}: expires {expiry}"),
        Err(ExpiryError::InvalidAmount(msg)) => {
            eprintln!("   {label}: rejected amount: {msg}");
            // Refuse the payment, or price it with AmountPolicy::Floor
        }
        Err(ExpiryError::DateOutOfRange(msg)) => {
            eprintln!("   {label}: date out of range: {msg}");
        }
        Err(ExpiryError::InvalidConfig(msg)) => {
            eprintln!("   {label}: invalid policy: {msg}");
            // Fix the policy document and reload
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Prepaid Expiry: Error Handling Example\n");

    let billed = NaiveDate::from_ymd_opt(2021, 3, 1).ok_or("invalid billing date")?;

    // Example 1: partial unit under the default strict policy
    println!("Example 1: 15,000 with the strict policy (should fail)");
    report("15,000", calculate_expiry_date(&PaymentRecord::new(billed, 15_000)));

    // Example 2: same amount under the floor policy
    println!("\nExample 2: 15,000 with the floor policy");
    let floor = ExpiryDateCalculator::new(BillingPolicy {
        amount_policy: AmountPolicy::Floor,
        ..BillingPolicy::default()
    });
    report("15,000", floor.calculate_expiry_date(&PaymentRecord::new(billed, 15_000)));

    // Example 3: nothing paid
    println!("\nExample 3: zero amount (should fail under any policy)");
    report("0", floor.calculate_expiry_date(&PaymentRecord::new(billed, 0)));

    // Example 4: misspelled policy key
    println!("\nExample 4: policy with a misspelled key (should fail)");
    match BillingPolicy::from_toml("unit_prce = 5000") {
        Ok(policy) => println!("   Unexpected success: {policy:?}"),
        Err(e) => eprintln!("   {e}"),
    }

    // Example 5: last representable date
    println!("\nExample 5: billing on the last supported date (should fail)");
    report("max date", calculate_expiry_date(&PaymentRecord::new(NaiveDate::MAX, 10_000)));

    Ok(())
}
