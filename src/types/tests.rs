use super::errors::DiscountError;
use super::DiscountPercent;
use anyhow::Result;
use rust_decimal::Decimal;
use std::str::FromStr;

#[test]
fn test_discount_successfully_parses_valid_strings() -> Result<()> {
    let test_cases = vec![
        ("0", "0"),
        ("5", "5"),
        ("  15  ", "15"),
        ("10%", "10"),
        ("100", "100"),
        ("007", "7"),
    ];

    for (input_string, expected_output) in test_cases {
        assert_eq!(DiscountPercent::from_str(input_string)?.to_string(), expected_output);
    }

    Ok(())
}

#[test]
fn test_discount_fails_to_parse_invalid_strings() {
    assert!(DiscountPercent::from_str("").is_err());
    assert!(DiscountPercent::from_str("%").is_err());
    assert!(DiscountPercent::from_str("abc").is_err());
    assert!(DiscountPercent::from_str("-5").is_err());
    assert!(DiscountPercent::from_str("12.5").is_err());
    assert!(matches!(DiscountPercent::from_str("101"), Err(DiscountError::OutOfRange(101))));
    assert!(matches!(DiscountPercent::from_str("300"), Err(DiscountError::ParseInt(_))));
}

#[test]
fn test_discount_factor_is_exact() -> Result<()> {
    assert_eq!(DiscountPercent::NONE.factor(), Decimal::ONE);
    assert_eq!(DiscountPercent::new(15)?.factor(), Decimal::from_str("0.85")?);
    assert_eq!(DiscountPercent::new(100)?.factor(), Decimal::ZERO);

    Ok(())
}

#[test]
fn test_discount_rejects_out_of_range_construction() {
    assert!(DiscountPercent::new(100).is_ok());
    assert!(matches!(DiscountPercent::new(101), Err(DiscountError::OutOfRange(101))));
    assert!(DiscountPercent::try_from(250u8).is_err());
}

#[test]
fn test_discount_literal_matches_validated_value() -> Result<()> {
    assert_eq!(DiscountPercent::of::<15>(), DiscountPercent::new(15)?);
    assert_eq!(DiscountPercent::of::<0>(), DiscountPercent::NONE);
    assert_eq!(DiscountPercent::of::<100>().factor(), Decimal::ZERO);

    Ok(())
}
