//! Length capping for rendered descriptions

use std::num::NonZeroUsize;

/// Suffix appended to a truncated description
pub const ELLIPSIS: &str = "...";

/// Maximum number of characters kept from a rendered description
///
/// The default is unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DescriptionLimit(Option<NonZeroUsize>);

impl DescriptionLimit {
    pub const UNLIMITED: Self = Self(None);

    /// A limit of `chars` characters; zero means unlimited
    pub fn new(chars: usize) -> Self {
        Self(NonZeroUsize::new(chars))
    }

    /// Normalize a raw configuration value
    ///
    /// Anything that is not a finite number of at least one character
    /// (empty, non-numeric, zero, negative) becomes [`DescriptionLimit::UNLIMITED`].
    /// Fractional values are floored.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 1.0 => Self::new(value.floor() as usize),
            _ => Self::UNLIMITED,
        }
    }

    pub fn get(&self) -> Option<usize> {
        self.0.map(NonZeroUsize::get)
    }

    pub fn is_unlimited(&self) -> bool {
        self.0.is_none()
    }

    /// Cap `rendered` at the limit, appending [`ELLIPSIS`] when anything was cut
    ///
    /// Counts characters, not bytes. Truncation may land inside a Markdown
    /// construct; no attempt is made to close it.
    pub fn apply(&self, rendered: String) -> String {
        let Some(limit) = self.get() else {
            return rendered;
        };

        match rendered.char_indices().nth(limit) {
            Some((cut, _)) => format!("{}{ELLIPSIS}", &rendered[..cut]),
            None => rendered,
        }
    }
}

impl std::str::FromStr for DescriptionLimit {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl std::fmt::Display for DescriptionLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.get() {
            Some(limit) => write!(f, "{limit}"),
            None => write!(f, "unlimited"),
        }
    }
}
