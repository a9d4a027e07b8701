//! Renewal chain example showing how the anchor day survives short months.
//!
//! A customer first pays on January 31st and renews on every expiry date. The expiry
//! falls back to the 28th/29th/30th in short months and returns to the 31st whenever
//! the month allows it.
//!
//! # Running this example
//!
//! ```bash
//! RUST_LOG=prepaid_expiry=debug cargo run --example renewal_chain
//! ```

#![allow(
    clippy::print_stdout,
    clippy::uninlined_format_args,
    reason = "examples are allowed to use println and simple formatting"
)]

use chrono::NaiveDate;
use prepaid_expiry::{ExpiryDateCalculator, PaymentRecord};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    println!("Prepaid Expiry: Renewal Chain Example\n");

    let calculator = ExpiryDateCalculator::default();
    let first_payment = NaiveDate::from_ymd_opt(2024, 1, 31).ok_or("invalid start date")?;
    let mut record = PaymentRecord::new(first_payment, 10_000);

    println!("Monthly renewals, anchor day {}:", record.anchor_day());
    for _ in 0..6 {
        let expiry = calculator.calculate_expiry_date(&record)?;
        println!("  paid {} -> expires {}", record.billing_date(), expiry);
        record = record.renewal(expiry, 10_000);
    }

    // Prepaying three months at once keeps the same anchor
    let expiry = calculator.calculate_expiry_date(&record.renewal(record.billing_date(), 30_000))?;
    println!("\nThree months from {}: expires {}", record.billing_date(), expiry);

    // The flat annual plan buys twelve months
    let expiry = calculator.calculate_expiry_date(&record.renewal(record.billing_date(), 100_000))?;
    println!("Annual plan from {}: expires {}", record.billing_date(), expiry);

    Ok(())
}
