// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_matcher::prelude::*;

fn report(matcher: &DecimalMatcher, value: Option<&str>) {
    let outcome = matcher.validate(value);
    println!("  {:<16} -> {}", format!("{value:?}"), outcome);
}

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Decimal Matcher Example ===\n");

    // Default configuration: at most 11 significant digits
    let default = DecimalMatcher::default();
    println!("Default ({} digits):", DEFAULT_MAX_DIGITS);
    for value in [Some("12345678901"), Some("123456789012"), Some("abc"), None] {
        report(&default, value);
    }

    // Positional form: 5 digits, 2 decimal places
    let money = DecimalMatcher::from_thresholds(&[5, 2]).expect("two thresholds");
    println!("\nMoney (5 digits, 2 places):");
    for value in ["123.45", "12345.6", "1.234", "1.50", "-9.99"] {
        report(&money, Some(value));
    }

    // Values past fixed-precision range still get digit checks
    let long = "1234567890123456789012345678901";
    println!("\nLong literal ({} chars):", long.len());
    report(&default, Some(long));
    if let Ok(number) = ParsedNumber::parse(long) {
        println!(
            "  digits = {}, as rust_decimal = {:?}",
            number.significant_digits(),
            number.value()
        );
    }

    // Builder form: both checks tripped on one value
    let tight = DecimalMatcherBuilder::new()
        .max_digits(3)
        .max_decimal_places(1)
        .build();
    println!("\nTight (3 digits, 1 place):");
    report(&tight, Some("12.34"));

    println!("\n=== Example Complete ===");
}
