//! Search query-type tags.
//!
//! The tag set is closed: `CONTENT` and `LABEL` select dedicated search
//! strategies; every other tag — including a literal `DEFAULT` — resolves
//! to the default strategy, which returns all notes owned by the user.
//! Parsing a tag is therefore total and never fails.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// The type of a search query, selecting a search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryType {
    /// Substring match against note content.
    Content,
    /// Exact match against a single note label.
    Label,
    /// Fallback: return every note owned by the user, ignoring the query
    /// text. Unrecognized wire tags deserialize to this variant.
    Default,
}

// Deserialization goes through `from_tag` so unknown wire tags fall back
// to Default instead of being rejected.
impl<'de> Deserialize<'de> for QueryType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

impl QueryType {
    /// Parses a wire tag into a query type.
    ///
    /// Matching is exact and case-sensitive; any tag outside
    /// `{"CONTENT", "LABEL"}` degrades to [`QueryType::Default`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "CONTENT" => Self::Content,
            "LABEL" => Self::Label,
            _ => Self::Default,
        }
    }

    /// Returns the wire tag for this query type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Content => "CONTENT",
            Self::Label => "LABEL",
            Self::Default => "DEFAULT",
        }
    }
}

impl From<&str> for QueryType {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags() {
        assert_eq!(QueryType::from_tag("CONTENT"), QueryType::Content);
        assert_eq!(QueryType::from_tag("LABEL"), QueryType::Label);
    }

    #[test]
    fn test_unknown_tags_degrade_to_default() {
        assert_eq!(QueryType::from_tag("DEFAULT"), QueryType::Default);
        assert_eq!(QueryType::from_tag("content"), QueryType::Default);
        assert_eq!(QueryType::from_tag("GARBAGE"), QueryType::Default);
        assert_eq!(QueryType::from_tag(""), QueryType::Default);
    }

    #[test]
    fn test_display_round_trip() {
        for kind in [QueryType::Content, QueryType::Label, QueryType::Default] {
            assert_eq!(QueryType::from_tag(kind.as_str()), kind);
        }
    }

    #[test]
    fn test_serde_unknown_variant_falls_back() {
        let kind: QueryType = serde_json::from_str("\"SOMETHING_ELSE\"").unwrap();
        assert_eq!(kind, QueryType::Default);

        let kind: QueryType = serde_json::from_str("\"LABEL\"").unwrap();
        assert_eq!(kind, QueryType::Label);
    }
}
