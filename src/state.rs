use std::sync::Arc;

use crate::client::{ApiClient, ClientError};
use crate::config::Config;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Records API client (cheap to clone, shares one connection pool)
    pub client: ApiClient,
    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config) -> Result<Self, ClientError> {
        let client = ApiClient::new(&config.upstream)?;
        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_default_config() {
        let state = AppState::new(Config::default()).unwrap();
        assert_eq!(state.client.base_url().as_str(), "http://localhost:3000/");
        assert_eq!(state.config.ui.page_size, 10);
    }

    #[test]
    fn test_state_rejects_bad_upstream() {
        let mut config = Config::default();
        config.upstream.base_url = "::".to_string();
        assert!(AppState::new(config).is_err());
    }
}
