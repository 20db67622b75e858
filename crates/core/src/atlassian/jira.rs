//! Transformation functions for Jira API responses

use serde::{Deserialize, Serialize};

use crate::limit::DescriptionLimit;
use crate::markup::MarkupConverter;

/// Fields requested when fetching a single issue
pub const ISSUE_FIELDS: &str = "summary,description,issuetype";

/// Jira issue response from the REST v2 API
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct JiraIssueResponse {
    pub key: String,
    pub fields: JiraIssueFields,
}

/// Fields from Jira issue
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct JiraIssueFields {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: Option<serde_json::Value>, // Wiki markup string on v2, null when unset
    #[serde(default)]
    pub issuetype: Option<JiraIssueType>,
}

/// Jira issue type field
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct JiraIssueType {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "iconUrl", default)]
    pub icon_url: Option<String>,
}

/// Response from the `/myself` endpoint
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct JiraMyself {
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(rename = "emailAddress", default)]
    pub email_address: Option<String>,
}

/// Output structure for a single issue
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct IssueOutput {
    pub key: String,
    pub summary: String,
    pub description: String,
    #[serde(rename = "issuetype")]
    pub issue_type: Option<String>,
    #[serde(rename = "issuetypeicon")]
    pub issue_type_icon: Option<String>,
    pub url: String,
}

/// Extract the wiki markup from a description field
///
/// # Returns
/// * `Option<String>` - The markup, or None when the field is absent, null, or not a string
pub fn extract_markup(value: Option<serde_json::Value>) -> Option<String> {
    match value {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    }
}

/// Build the browse URL for an issue
pub fn issue_browse_url(base_url: &str, key: &str) -> String {
    format!("{}/browse/{}", base_url.trim_end_matches('/'), key)
}

/// Build the REST URL used to fetch a single issue
///
/// The key is expected to be URL-encoded by the caller.
pub fn issue_api_url(base_url: &str, encoded_key: &str) -> String {
    format!(
        "{}/rest/api/2/issue/{}?fields={}&expand=renderedFields",
        base_url.trim_end_matches('/'),
        encoded_key,
        ISSUE_FIELDS
    )
}

/// Convert a description to Markdown and cap it
///
/// The limit is applied once, after the whole conversion, and also applies to
/// the missing-description placeholder.
pub fn render_description(
    description: Option<&str>,
    converter: &MarkupConverter,
    limit: DescriptionLimit,
) -> String {
    limit.apply(converter.convert_description(description))
}

/// Convert a Jira issue response to the output record
///
/// Only the description is transformed; key, summary, and issue type pass through.
///
/// # Arguments
/// * `issue` - The raw issue response from Jira API
/// * `base_url` - Site base URL used for the browse link
/// * `converter` - Markup converter with the missing-description policy
/// * `limit` - Description length limit
pub fn transform_issue_response(
    issue: JiraIssueResponse,
    base_url: &str,
    converter: &MarkupConverter,
    limit: DescriptionLimit,
) -> IssueOutput {
    let markup = extract_markup(issue.fields.description);
    let description = render_description(markup.as_deref(), converter, limit);
    let url = issue_browse_url(base_url, &issue.key);

    let (issue_type, issue_type_icon) = match issue.fields.issuetype {
        Some(t) => (t.name, t.icon_url),
        None => (None, None),
    };

    IssueOutput {
        key: issue.key,
        summary: issue.fields.summary,
        description,
        issue_type,
        issue_type_icon,
        url,
    }
}
