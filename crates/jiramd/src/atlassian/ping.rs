use jiramd_core::atlassian::jira::JiraMyself;

use crate::atlassian::create_jira_client;
use crate::config::JiraConfig;
use crate::prelude::{println, *};

/// Options for checking Jira credentials
#[derive(Debug, clap::Args, Clone)]
pub struct PingOptions {}

/// Fetch the display name of the authenticated Jira user
pub async fn ping_data(config: &JiraConfig) -> Result<String> {
    let client = create_jira_client(config)?;
    let url = format!("{}/rest/api/2/myself", config.base_url);
    log::debug!("GET {url}");

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(eyre!("Failed to reach Jira [{}]: {}", status, body));
    }

    let me = response
        .json::<JiraMyself>()
        .await
        .map_err(|e| Error::InvalidResponse(e.to_string()))?;

    me.display_name
        .ok_or_else(|| Error::InvalidResponse("\"displayName\" is not defined".to_string()).into())
}

/// Handle the ping command
pub async fn handler(_options: PingOptions) -> Result<()> {
    let config = JiraConfig::from_env()?;
    let name = ping_data(&config).await?;

    println!("Jira user: {}", name);

    Ok(())
}
