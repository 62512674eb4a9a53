//! Value resolvers used by the mapping profiles
//!
//! Rates travel as percentages on the contracts (`4.5`) and as fractions in
//! the use cases (`0.045`). Scaling uses `rust_decimal` so the conversion is
//! exact before the result is written back as a JSON number.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{Number, Value};

use domain_mapping::{MappingError, ValueResolver};

use crate::config::ProductSettings;

/// Service name of [`PolicyProductResolver`]
pub const POLICY_PRODUCT_SERVICE: &str = "policy-product";

/// Multiplier from a percentage to a fraction
pub const PERCENT_TO_FRACTION: Decimal = dec!(0.01);

/// Multiplier from a fraction to a percentage
pub const FRACTION_TO_PERCENT: Decimal = dec!(100);

/// Reads a JSON number or numeric string as a decimal
pub fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(number) => {
            let text = number.to_string();
            Decimal::from_str(&text)
                .or_else(|_| Decimal::from_scientific(&text))
                .ok()
        }
        Value::String(text) => Decimal::from_str(text.trim()).ok(),
        _ => None,
    }
}

/// Writes a decimal as a JSON number
pub fn decimal_to_value(amount: Decimal) -> Value {
    let amount = amount.normalize();
    if amount.scale() == 0 {
        if let Some(integer) = amount.to_i64() {
            return Value::Number(integer.into());
        }
    }
    amount
        .to_f64()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// Multiplies a numeric value by `factor`; anything else maps to null
pub fn scale_decimal(value: &Value, factor: Decimal) -> Value {
    decimal_from_value(value)
        .map(|amount| decimal_to_value(amount * factor))
        .unwrap_or(Value::Null)
}

/// Resolver that scales the named source member by `factor`
pub fn scaled(member: &'static str, factor: Decimal) -> impl Fn(&Value) -> Value + Send + Sync + 'static {
    move |source| scale_decimal(&source[member], factor)
}

/// Resolver that copies the named source member only when `flag` is true
pub fn when_flag_set(flag: &'static str, member: &'static str) -> impl Fn(&Value) -> Value + Send + Sync + 'static {
    move |source| {
        if source[flag].as_bool().unwrap_or(false) {
            source[member].clone()
        } else {
            Value::Null
        }
    }
}

/// Resolves the product code of a policy from its policy number
#[derive(Debug, Clone)]
pub struct PolicyProductResolver {
    products: ProductSettings,
}

impl PolicyProductResolver {
    pub fn new(products: ProductSettings) -> Self {
        Self { products }
    }
}

impl ValueResolver for PolicyProductResolver {
    fn resolve(&self, source: &Value, member: &str) -> Result<Value, MappingError> {
        match &source["PolicyNumber"] {
            Value::Null => Ok(Value::Null),
            Value::String(policy_number) => Ok(self
                .products
                .product_for_policy(policy_number)
                .map(|code| Value::String(code.to_string()))
                .unwrap_or(Value::Null)),
            other => Err(MappingError::resolver(
                member,
                format!("policy number must be a string, found {other}"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_percentage_to_fraction() {
        let value = scale_decimal(&json!(4.5), PERCENT_TO_FRACTION);
        assert_eq!(value.as_f64(), Some(0.045));
    }

    #[test]
    fn test_fraction_to_percentage_is_integral() {
        assert_eq!(scale_decimal(&json!(0.25), FRACTION_TO_PERCENT), json!(25));
        assert_eq!(scale_decimal(&json!("0.015"), FRACTION_TO_PERCENT).as_f64(), Some(1.5));
    }

    #[test]
    fn test_non_numeric_scales_to_null() {
        assert_eq!(scale_decimal(&Value::Null, FRACTION_TO_PERCENT), Value::Null);
        assert_eq!(scale_decimal(&json!("n/a"), FRACTION_TO_PERCENT), Value::Null);
    }

    #[test]
    fn test_when_flag_set() {
        let resolver = when_flag_set("EditAllFields", "IdType");

        assert_eq!(resolver(&json!({ "EditAllFields": true, "IdType": "NRIC" })), json!("NRIC"));
        assert_eq!(resolver(&json!({ "EditAllFields": false, "IdType": "NRIC" })), Value::Null);
    }

    #[test]
    fn test_policy_product_resolver() {
        let resolver = PolicyProductResolver::new(ProductSettings::default());

        assert_eq!(
            resolver.resolve(&json!({ "PolicyNumber": "ULPB-77" }), "Product").unwrap(),
            json!("ULPB")
        );
        assert!(matches!(
            resolver.resolve(&json!({ "PolicyNumber": 77 }), "Product"),
            Err(MappingError::Resolver { .. })
        ));
    }

    proptest! {
        #[test]
        fn test_percentage_round_trip(mantissa in -1_000_000i64..1_000_000, scale in 0u32..4) {
            let percentage = decimal_to_value(Decimal::new(mantissa, scale));
            let fraction = scale_decimal(&percentage, PERCENT_TO_FRACTION);

            prop_assert_eq!(scale_decimal(&fraction, FRACTION_TO_PERCENT), percentage);
        }
    }
}
