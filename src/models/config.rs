//! Configuration model loaded from external sources.

use serde::Deserialize;
use validator::Validate;

use crate::domain::bounds::{Bounds, DEFAULT_MAX_PAGE, DEFAULT_MAX_PAGE_SIZE};

pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Window for request handling. Code building [`crate::WebPaging`] directly
/// gets [`crate::paging::CONSTRUCTOR_WINDOW_SIZE`].
pub const DEFAULT_WINDOW_SIZE: usize = 5;

#[derive(Clone, Debug, Deserialize, Validate, PartialEq, Eq)]
#[serde(default)]
/// Paging defaults and the limits enforced on inbound tokens.
pub struct PagingConfig {
    /// Highest page number a token may request.
    pub max_page: usize,
    /// Largest page size a token may request.
    pub max_page_size: usize,
    /// Page size used on a first visit without a token.
    pub default_page_size: usize,
    /// Page links rendered on either side of the current page.
    #[validate(range(min = 2))]
    pub window_size: usize,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            max_page: DEFAULT_MAX_PAGE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            default_page_size: DEFAULT_PAGE_SIZE,
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl PagingConfig {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.max_page, self.max_page_size)
    }
}

#[cfg(feature = "server")]
impl PagingConfig {
    /// Reads `config/default`, the `config/{app_env}` profile when present,
    /// and `APP_`-prefixed environment variables.
    pub fn load(app_env: &str) -> Result<Self, config::ConfigError> {
        let paging_config: Self = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()?;

        paging_config
            .validate()
            .map_err(|err| config::ConfigError::Message(err.to_string()))?;

        Ok(paging_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_use_defaults() {
        let config: PagingConfig = serde_json::from_str(r#"{"max_page": 20}"#).unwrap();

        assert_eq!(config.max_page, 20);
        assert_eq!(config.max_page_size, DEFAULT_MAX_PAGE_SIZE);
        assert_eq!(config.bounds(), Bounds::new(20, DEFAULT_MAX_PAGE_SIZE));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn window_of_one_is_invalid() {
        let config = PagingConfig {
            window_size: 1,
            ..PagingConfig::default()
        };

        assert!(config.validate().is_err());
    }
}
