use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use validator::Validate;

use crate::error::AppError;

const DEFAULT_CONFIG: &str = include_str!("../../resources/config/default.toml");
const DEFAULT_CONFIG_PREFIX: &str = "APP";
const LIST_SEPARATOR: &str = ",";

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Stock,
    Mail,
    All,
}

impl Scenario {
    pub fn runs_stock(&self) -> bool {
        matches!(self, Scenario::Stock | Scenario::All)
    }

    pub fn runs_mail(&self) -> bool {
        matches!(self, Scenario::Mail | Scenario::All)
    }
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct AppConfig {
    pub scenario: Scenario,
    pub log_level: String,
    #[validate(length(min = 1))]
    pub stock_symbol: String,
    #[validate(range(min = 0.0))]
    pub opening_price: f64,
    pub price_moves: Vec<f64>,
    #[validate(length(min = 1))]
    pub mail_site: String,
}

impl AppConfig {
    pub fn new() -> Result<Self, AppError> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(
                Environment::with_prefix(DEFAULT_CONFIG_PREFIX)
                    .try_parsing(true)
                    .list_separator(LIST_SEPARATOR)
                    .with_list_parse_key("price_moves"),
            )
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::AppError;

    use super::{AppConfig, Scenario};

    #[test]
    fn test_new() {
        let result = AppConfig::new();
        assert!(
            matches!(&result, Ok(x) if x.scenario == Scenario::All && x.stock_symbol == "IBM"),
            "By default, it should return a valid config"
        );
        assert_eq!(
            vec![120.10, 121.00, 120.50, 120.75],
            result.unwrap().price_moves,
            "Should load the default price moves"
        );

        temp_env::with_var("APP_SCENARIO", Some("mail"), || {
            let result = AppConfig::new();
            assert!(
                matches!(result, Ok(x) if x.scenario == Scenario::Mail),
                "Should take into account env vars"
            )
        });

        temp_env::with_var("APP_OPENING_PRICE", Some("invalid"), || {
            let result = AppConfig::new();
            assert!(
                matches!(result, Err(AppError::Config(_))),
                "Should return error when config cannot be deserialized"
            )
        });

        temp_env::with_var("APP_STOCK_SYMBOL", Some(""), || {
            let result = AppConfig::new();
            assert!(
                matches!(result, Err(AppError::InvalidConfig(_))),
                "Should return error when config is not valid"
            )
        });
    }

    #[test]
    fn test_scenario() {
        assert!(Scenario::All.runs_stock() && Scenario::All.runs_mail());
        assert!(Scenario::Stock.runs_stock() && !Scenario::Stock.runs_mail());
        assert!(!Scenario::Mail.runs_stock() && Scenario::Mail.runs_mail());
    }
}
