use jiramd_core::config::{parse_flag, resolve_base_url};
use jiramd_core::limit::DescriptionLimit;
use jiramd_core::markup::{MarkupConverter, MissingDescription};

use crate::prelude::*;

/// Jira connection settings, loaded once per run and passed to every request
#[derive(Debug, Clone)]
pub struct JiraConfig {
    pub base_url: String,
    pub email: String,
    pub api_token: String,
    pub fail_when_not_found: bool,
}

impl JiraConfig {
    /// Load configuration from environment variables
    ///
    /// `ATLASSIAN_BASE_URL` takes precedence over `ATLASSIAN_ORG_NAME`.
    pub fn from_env() -> Result<Self> {
        let base_url = resolve_base_url(
            std::env::var("ATLASSIAN_BASE_URL").ok().as_deref(),
            std::env::var("ATLASSIAN_ORG_NAME").ok().as_deref(),
        )
        .ok_or_else(|| {
            Error::Config(
                "Neither ATLASSIAN_BASE_URL nor ATLASSIAN_ORG_NAME environment variable is set"
                    .to_string(),
            )
        })?;

        Ok(Self {
            base_url,
            email: required_var("ATLASSIAN_EMAIL")?,
            api_token: required_var("ATLASSIAN_API_TOKEN")?,
            fail_when_not_found: std::env::var("JIRA_FAIL_WHEN_ISSUE_NOT_FOUND")
                .map(|raw| parse_flag(&raw))
                .unwrap_or(false),
        })
    }

    /// Apply CLI overrides to the configuration
    pub fn with_overrides(mut self, fail_when_not_found: bool) -> Self {
        if fail_when_not_found {
            self.fail_when_not_found = true;
        }
        self
    }
}

fn required_var(name: &str) -> Result<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| Error::Config(f!("{name} environment variable not set")).into())
}

/// How descriptions are rendered: converter policy plus length limit
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    pub converter: MarkupConverter,
    pub limit: DescriptionLimit,
}

impl RenderConfig {
    /// Build from raw flag values; both are optional and normalized, never rejected
    pub fn new(limit: Option<&str>, missing_description: Option<&str>) -> Self {
        let missing = missing_description
            .map(MissingDescription::from_text)
            .unwrap_or_default();

        Self {
            converter: MarkupConverter::new(missing),
            limit: limit.map(DescriptionLimit::parse).unwrap_or_default(),
        }
    }

    pub fn render(&self, description: Option<&str>) -> String {
        jiramd_core::atlassian::jira::render_description(description, &self.converter, self.limit)
    }
}
