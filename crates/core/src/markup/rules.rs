//! Text-rewrite rules for Jira wiki markup
//!
//! Each rule is a pure, total `&str -> String` transformation applied to the
//! whole document at once. Rules are plain values so the converter can hold
//! them in an explicit, ordered list.

use std::sync::OnceLock;

use regex::Regex;

/// A single named rewrite over an entire document
#[derive(Clone, Copy)]
pub struct MarkupRule {
    pub name: &'static str,
    apply: fn(&str) -> String,
}

impl std::fmt::Debug for MarkupRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkupRule").field("name", &self.name).finish()
    }
}

impl MarkupRule {
    pub const fn new(name: &'static str, apply: fn(&str) -> String) -> Self {
        Self { name, apply }
    }

    /// Run the rule over `text`, returning a new string
    pub fn apply(&self, text: &str) -> String {
        (self.apply)(text)
    }
}

pub const STATUS: MarkupRule = MarkupRule::new("status", md_status);
pub const STRIP_LINKS: MarkupRule = MarkupRule::new("strip-links", md_strip_links);
pub const QUOTES: MarkupRule = MarkupRule::new("quotes", md_quotes);
pub const PANEL: MarkupRule = MarkupRule::new("panel", md_panel);
pub const CODE: MarkupRule = MarkupRule::new("code", md_code);
pub const NUMBERED_LISTS: MarkupRule = MarkupRule::new("numbered-lists", md_numbered_lists);
pub const HEADING: MarkupRule = MarkupRule::new("heading", md_heading);

/// Convert `{color}` spans into bold text
///
/// Accepts `{color}`, `{color:#RRGGBB}` and `{color:#RGB}`, optionally wrapped
/// in single `*` emphasis markers. Both opening and closing markers become `**`;
/// the color value itself is dropped.
pub fn md_status(text: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"(?i)\*?\{color(?::#(?:[0-9a-f]{6}|[0-9a-f]{3}))?\}\*?").unwrap()
    });
    re.replace_all(text, "**").into_owned()
}

/// Remove `[display|target]` links and `[~accountid:...]` mentions
///
/// Matches never cross a closing bracket or a line break, so prose between two
/// links on the same line survives.
pub fn md_strip_links(text: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"\[[^\]|\n]+\|[^\]\n]+\]|\[~accountid[^\]\n]*\]").unwrap()
    });
    re.replace_all(text, "").into_owned()
}

/// Turn `{quote}` markers into a single-paragraph blockquote
///
/// A line-leading marker becomes `> `; a line-trailing marker is removed.
pub fn md_quotes(text: &str) -> String {
    static RE_OPEN: OnceLock<Regex> = OnceLock::new();
    static RE_CLOSE: OnceLock<Regex> = OnceLock::new();
    let re_open = RE_OPEN.get_or_init(|| Regex::new(r"(?mR)^\{quote\}").unwrap());
    let re_close = RE_CLOSE.get_or_init(|| Regex::new(r"(?mR)\{quote\}$").unwrap());

    let next = re_open.replace_all(text, "> ");
    re_close.replace_all(&next, "").into_owned()
}

/// Turn a single-line `{panel}` body into a `> [!NOTE]` callout
///
/// Only `{panel:bgColor=#RRGGBB}` openers are recognized, and only the one line
/// directly above the closing `{panel}` is carried into the callout, whatever it
/// starts with. Multi-line panel bodies keep their earlier lines as plain text.
pub fn md_panel(text: &str) -> String {
    static RE_OPEN: OnceLock<Regex> = OnceLock::new();
    static RE_CLOSE: OnceLock<Regex> = OnceLock::new();
    let re_open =
        RE_OPEN.get_or_init(|| Regex::new(r"(?i)\{panel:bgColor=#[0-9a-f]{6}\}").unwrap());
    let re_close =
        RE_CLOSE.get_or_init(|| Regex::new(r"(?m)^([^\r\n]+)(\r?\n)\{panel\}").unwrap());

    let next = re_open.replace_all(text, "");
    re_close
        .replace_all(&next, "> [!NOTE]${2}> ${1}")
        .into_owned()
}

/// Convert `{{...}}` spans into single-backtick inline code
///
/// Single line only. Embedded backticks are not escaped.
pub fn md_code(text: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\{\{([^\n]+?)\}\}").unwrap());
    re.replace_all(text, "`$1`").into_owned()
}

/// Convert top-level `# ` list items into `1. ` items
///
/// Must run before [`md_heading`], which also emits `#` characters.
pub fn md_numbered_lists(text: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"(?m)^# ").unwrap());
    re.replace_all(text, "1. ").into_owned()
}

/// Convert `h1.` through `h6.` line prefixes into Markdown headings
pub fn md_heading(text: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"(?m)^h([1-6])\.[ \t]*").unwrap());
    re.replace_all(text, |caps: &regex::Captures| {
        let depth = caps[1].parse::<usize>().unwrap_or(1);
        format!("{} ", "#".repeat(depth))
    })
    .into_owned()
}
