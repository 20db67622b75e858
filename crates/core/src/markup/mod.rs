//! Jira wiki markup to Markdown conversion
//!
//! Conversion is a fixed, ordered list of [`MarkupRule`]s threaded over one
//! string. The order is part of the contract: `# ` list markers must be
//! rewritten before `hN.` headings produce their own `#` characters.

pub mod rules;

pub use rules::MarkupRule;

/// Text rendered for an issue that has no description, unless configured otherwise
pub const DEFAULT_PLACEHOLDER: &str = "null";

/// The rule order used for every conversion
pub const STANDARD_RULES: [MarkupRule; 7] = [
    rules::STATUS,
    rules::STRIP_LINKS,
    rules::QUOTES,
    rules::PANEL,
    rules::CODE,
    // `# ` list markers before headings, which emit `#`
    rules::NUMBERED_LISTS,
    rules::HEADING,
];

/// What to render when an issue has no description
///
/// An empty description string is treated the same as an absent one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingDescription {
    /// Render a fixed sentinel string
    Placeholder(String),
    /// Render an empty string
    Empty,
}

impl Default for MissingDescription {
    fn default() -> Self {
        Self::Placeholder(DEFAULT_PLACEHOLDER.to_string())
    }
}

impl MissingDescription {
    /// Build the policy from a user-supplied value; an empty value means [`MissingDescription::Empty`]
    pub fn from_text(text: &str) -> Self {
        if text.is_empty() {
            Self::Empty
        } else {
            Self::Placeholder(text.to_string())
        }
    }

    pub fn render(&self) -> String {
        match self {
            Self::Placeholder(text) => text.clone(),
            Self::Empty => String::new(),
        }
    }
}

/// An ordered sequence of rules; the output of rule `i` feeds rule `i + 1`
#[derive(Debug, Clone)]
pub struct ConversionPipeline {
    rules: Vec<MarkupRule>,
}

impl Default for ConversionPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

impl ConversionPipeline {
    /// The pipeline in [`STANDARD_RULES`] order
    pub fn standard() -> Self {
        Self {
            rules: STANDARD_RULES.to_vec(),
        }
    }

    pub fn rules(&self) -> &[MarkupRule] {
        &self.rules
    }

    /// Rule names in application order
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name).collect()
    }

    /// Apply every rule in order to `text`
    pub fn run(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |next, rule| rule.apply(&next))
    }
}

/// Converts issue descriptions from wiki markup to Markdown
#[derive(Debug, Clone, Default)]
pub struct MarkupConverter {
    pipeline: ConversionPipeline,
    missing: MissingDescription,
}

impl MarkupConverter {
    pub fn new(missing: MissingDescription) -> Self {
        Self {
            pipeline: ConversionPipeline::standard(),
            missing,
        }
    }

    pub fn pipeline(&self) -> &ConversionPipeline {
        &self.pipeline
    }

    pub fn missing_description(&self) -> &MissingDescription {
        &self.missing
    }

    /// Convert a markup string; never fails, including on empty input
    pub fn convert(&self, markup: &str) -> String {
        self.pipeline.run(markup)
    }

    /// Convert an optional description, falling back to the missing-description policy
    pub fn convert_description(&self, description: Option<&str>) -> String {
        match description {
            Some(markup) if !markup.is_empty() => self.convert(markup),
            _ => self.missing.render(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_order() {
        assert_eq!(
            ConversionPipeline::standard().names(),
            vec![
                "status",
                "strip-links",
                "quotes",
                "panel",
                "code",
                "numbered-lists",
                "heading"
            ]
        );
    }

    #[test]
    fn test_run_applies_rules_in_sequence() {
        let pipeline = ConversionPipeline::standard();
        let markup = "h2. Plan\n# Ship {{v2}}";

        let by_hand = pipeline
            .rules()
            .iter()
            .fold(markup.to_string(), |next, rule| rule.apply(&next));

        assert_eq!(pipeline.rules().len(), STANDARD_RULES.len());
        assert_eq!(pipeline.run(markup), by_hand);
        assert_eq!(by_hand, "## Plan\n1. Ship `v2`");
    }

    #[test]
    fn test_lists_before_headings() {
        let converter = MarkupConverter::default();
        assert_eq!(
            converter.convert("h2. Overview\n# First\n# Second"),
            "## Overview\n1. First\n1. Second"
        );
    }

    #[test]
    fn test_headings_before_lists_changes_output() {
        let reordered = ConversionPipeline {
            rules: vec![rules::HEADING, rules::NUMBERED_LISTS],
        };
        assert_eq!(reordered.run("h1. Title\n# item"), "1. Title\n1. item");
        assert_eq!(
            ConversionPipeline::standard().run("h1. Title\n# item"),
            "# Title\n1. item"
        );
    }

    #[test]
    fn test_color_span() {
        let converter = MarkupConverter::default();
        assert_eq!(converter.convert("{color:#ff0000}Alert{color}"), "**Alert**");
    }

    #[test]
    fn test_links_elided() {
        let converter = MarkupConverter::default();
        assert_eq!(
            converter.convert("See [Docs|http://example.com] for info [~accountid:123]"),
            "See  for info "
        );
    }

    #[test]
    fn test_inline_code() {
        let converter = MarkupConverter::default();
        assert_eq!(converter.convert("{{inline}}"), "`inline`");
    }

    #[test]
    fn test_plain_text_is_unchanged() {
        let converter = MarkupConverter::default();
        let text = "Just a sentence.\n\n- a bullet\n2. second";
        assert_eq!(converter.convert(text), text);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(MarkupConverter::default().convert(""), "");
    }

    #[test]
    fn test_absent_description_uses_placeholder() {
        let converter = MarkupConverter::default();
        assert_eq!(converter.convert_description(None), "null");
        assert_eq!(converter.convert_description(Some("")), "null");
    }

    #[test]
    fn test_absent_description_custom_policy() {
        let converter = MarkupConverter::new(MissingDescription::from_text("_No description_"));
        assert_eq!(converter.convert_description(None), "_No description_");

        let converter = MarkupConverter::new(MissingDescription::from_text(""));
        assert_eq!(converter.missing_description(), &MissingDescription::Empty);
        assert_eq!(converter.convert_description(None), "");
    }

    #[test]
    fn test_present_description_is_converted() {
        let converter = MarkupConverter::default();
        assert_eq!(converter.convert_description(Some("h3. Notes")), "### Notes");
    }

    #[test]
    fn test_full_document() {
        let markup = "h1. Release\n\
                      Status: *{color:#00875a}READY{color}*\n\
                      {quote}Ship it on Friday{quote}\n\
                      {panel:bgColor=#deebff}\n\
                      Owner is [~accountid:5b10a2844c20165700ede21g]\n\
                      {panel}\n\
                      # Run {{cargo xtask release}}\n\
                      # Tag the [commit|https://example.com/c/1]";

        let expected = "# Release\n\
                        Status: **READY**\n\
                        > Ship it on Friday\n\
                        \n\
                        > [!NOTE]\n\
                        > Owner is \n\
                        1. Run `cargo xtask release`\n\
                        1. Tag the ";

        assert_eq!(MarkupConverter::default().convert(markup), expected);
    }

    #[test]
    fn test_panel_with_status_span() {
        let converter = MarkupConverter::default();
        assert_eq!(
            converter.convert(
                "{panel:bgColor=#deebff}\n{color:#ff0000}Blocked{color} until Friday\n{panel}"
            ),
            "\n> [!NOTE]\n> **Blocked** until Friday"
        );
    }

    #[test]
    fn test_panel_with_quote() {
        let converter = MarkupConverter::default();
        assert_eq!(
            converter.convert("{panel:bgColor=#deebff}\n{quote}careful{quote}\n{panel}"),
            "\n> [!NOTE]\n> > careful"
        );
    }

    #[test]
    fn test_panel_with_leading_link() {
        let converter = MarkupConverter::default();
        assert_eq!(
            converter.convert("{panel:bgColor=#deebff}\n[Runbook|https://example.com/rb] first\n{panel}"),
            "\n> [!NOTE]\n>  first"
        );
    }

    #[test]
    fn test_idempotent_without_h1() {
        let converter = MarkupConverter::default();
        let markup = "h2. Plan\n{quote}quoted{quote}\n# step {{one}}\n{color}bold{color}";
        let once = converter.convert(markup);
        assert_eq!(converter.convert(&once), once);
    }
}
