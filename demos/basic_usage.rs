// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_matcher::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    decimal_matcher::utils::init_logging();

    println!("=== Decimal Matcher Example ===\n");

    let matchers = [
        ("default", DecimalNumberMatcher::default()),
        (
            "max 5 digits",
            DecimalNumberMatcher::from_params(&[5]).unwrap(),
        ),
        (
            "max 5 digits, 2 decimals",
            DecimalMatcherBuilder::new()
                .field("price")
                .max_digits(5)
                .max_decimal_places(2)
                .build()
                .unwrap(),
        ),
    ];

    let inputs = [
        None,
        Some("123.45"),
        Some("123456"),
        Some("123.456"),
        Some("123456.789"),
        Some("123456789012"),
        Some("1.2.3"),
    ];

    for (name, matcher) in &matchers {
        println!("Policy: {} ({})", name, matcher.constraints());
        for input in inputs {
            let result = matcher.match_input(input);
            if result.is_valid() {
                println!("  {:<14} ok", format!("{:?}", input));
            } else {
                for error in &result {
                    println!("  {:<14} {}", format!("{:?}", input), error);
                }
            }
        }
        println!();
    }

    // Parameter counts other than 0..=2 are rejected up front
    match DecimalNumberMatcher::from_params(&[5, 2, 1]) {
        Ok(_) => println!("unexpected: three parameters accepted"),
        Err(e) => println!("Configuration error: {}", e),
    }

    let parsed = ParsedDecimal::parse("-0012.3400").unwrap();
    println!(
        "\n{} -> precision {}, decimal places {}",
        parsed,
        parsed.precision(),
        parsed.decimal_places()
    );
}
