//! Application configuration

use serde::Deserialize;

/// Product codes known to the policy administration system
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProductSettings {
    pub ul: String,
    pub ua: String,
    pub vul: String,
    pub vul_enhanced: String,
    pub ulpb: String,
    pub ppli: String,
}

impl Default for ProductSettings {
    fn default() -> Self {
        Self {
            ul: "UL".to_string(),
            ua: "UA".to_string(),
            vul: "VUL".to_string(),
            vul_enhanced: "VULEnhanced".to_string(),
            ulpb: "ULPB".to_string(),
            ppli: "PPLI".to_string(),
        }
    }
}

impl ProductSettings {
    /// All configured product codes
    pub fn codes(&self) -> [&str; 6] {
        [
            &self.ul,
            &self.ua,
            &self.vul,
            &self.vul_enhanced,
            &self.ulpb,
            &self.ppli,
        ]
    }

    /// Finds the product whose code is the longest prefix of a policy number
    pub fn product_for_policy(&self, policy_number: &str) -> Option<&str> {
        self.codes()
            .into_iter()
            .filter(|code| !code.is_empty() && policy_number.starts_with(code))
            .max_by_key(|code| code.len())
    }
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApplicationSettings {
    /// Product codes
    pub product: ProductSettings,
    /// Log level
    pub log_level: String,
}

impl Default for ApplicationSettings {
    fn default() -> Self {
        Self {
            product: ProductSettings::default(),
            log_level: "info".to_string(),
        }
    }
}

impl ApplicationSettings {
    /// Loads settings from `APP_` environment variables
    ///
    /// Nested keys use a double underscore, e.g. `APP_PRODUCT__VUL_ENHANCED`.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_source(Self::environment())
    }

    /// Loads settings from an explicit environment source
    pub fn from_source(source: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()
    }

    /// The environment source used by [`from_env`](Self::from_env)
    pub fn environment() -> config::Environment {
        config::Environment::with_prefix("APP")
            .prefix_separator("_")
            .separator("__")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_product_for_policy_prefers_longest_code() {
        let products = ProductSettings::default();

        assert_eq!(products.product_for_policy("VULEnhanced-0001"), Some("VULEnhanced"));
        assert_eq!(products.product_for_policy("VUL-0001"), Some("VUL"));
        assert_eq!(products.product_for_policy("ULPB-0001"), Some("ULPB"));
        assert_eq!(products.product_for_policy("TERM-0001"), None);
    }

    #[test]
    fn test_settings_from_source() {
        let source = ApplicationSettings::environment().source(Some(
            [
                ("APP_PRODUCT__VUL".to_string(), "VUL2".to_string()),
                ("APP_LOG_LEVEL".to_string(), "debug".to_string()),
            ]
            .into_iter()
            .collect(),
        ));

        let settings = ApplicationSettings::from_source(source).unwrap();
        assert_eq!(settings.product.vul, "VUL2");
        assert_eq!(settings.product.ul, "UL");
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let source = ApplicationSettings::environment().source(Some(Default::default()));
        let settings = ApplicationSettings::from_source(source).unwrap();
        assert_eq!(settings, ApplicationSettings::default());
    }

    proptest! {
        #[test]
        fn test_enhanced_prefix_always_wins(suffix in "[A-Z0-9-]{0,12}") {
            let products = ProductSettings::default();
            let policy_number = format!("VULEnhanced{suffix}");

            prop_assert_eq!(products.product_for_policy(&policy_number), Some("VULEnhanced"));
        }
    }
}
