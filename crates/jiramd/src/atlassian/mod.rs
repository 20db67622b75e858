pub mod issue;
pub mod ping;

use std::time::Duration;

use crate::config::JiraConfig;
use crate::prelude::*;

/// Per-request timeout for Jira API calls
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(2);

/// Create an authenticated HTTP client with Basic Auth headers
pub fn create_jira_client(config: &JiraConfig) -> Result<reqwest::Client> {
    use base64::Engine;
    use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

    let auth_string = format!("{}:{}", config.email, config.api_token);
    let auth_encoded = base64::engine::general_purpose::STANDARD.encode(&auth_string);

    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Basic {auth_encoded}"))
            .map_err(|e| eyre!("Invalid header value: {}", e))?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    reqwest::Client::builder()
        .default_headers(headers)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| eyre!("Failed to build HTTP client: {}", e))
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::config::JiraConfig;

    /// Base64 of `bot@example.com:secret-token`
    pub const EXPECTED_AUTH: &str = "Basic Ym90QGV4YW1wbGUuY29tOnNlY3JldC10b2tlbg==";

    pub fn config_for(base_url: String, fail_when_not_found: bool) -> JiraConfig {
        JiraConfig {
            base_url,
            email: "bot@example.com".to_string(),
            api_token: "secret-token".to_string(),
            fail_when_not_found,
        }
    }
}
