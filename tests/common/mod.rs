//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use opsconsole::api::ApiClient;
use opsconsole::config::ApiConfig;
use opsconsole::session::AuthSession;

/// API client pointed at a mock server, with short test timeouts.
pub fn client_for(base_url: &str, session: AuthSession) -> ApiClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    };
    ApiClient::new(&config, session)
}
