//! Pure resolution of configuration values
//!
//! Reading the environment happens in the shell; these functions only
//! normalize what was read.

/// Resolve the Jira site base URL
///
/// An explicit base URL wins; otherwise an organization name expands to
/// `https://{org}.atlassian.net`. Blank values count as missing. The result
/// never ends in `/`.
pub fn resolve_base_url(base_url: Option<&str>, org_name: Option<&str>) -> Option<String> {
    let base_url = base_url.map(str::trim).filter(|s| !s.is_empty());
    let org_name = org_name.map(str::trim).filter(|s| !s.is_empty());

    match (base_url, org_name) {
        (Some(url), _) => Some(url.trim_end_matches('/').to_string()),
        (None, Some(org)) => Some(format!("https://{org}.atlassian.net")),
        (None, None) => None,
    }
}

/// Parse an optional boolean input; only `true` (surrounding whitespace ignored) is true
pub fn parse_flag(raw: &str) -> bool {
    raw.trim() == "true"
}
