//! Outline data types.
//!
//! These types define the data model for article outlines. They're designed
//! to be:
//!
//! - **Serializable** - Easy JSON import/export via serde
//! - **Clone-friendly** - Components can hold entries without borrowing issues
//! - **Order-preserving** - An [`Outline`] reads in document order, always

use serde::{Deserialize, Serialize};

/// Heading rank that qualifies for the outline.
///
/// Only section (`h2`) and subsection (`h3`) headings are collected; the
/// article title itself (`h1`) and anything deeper than `h3` never appear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// A top-level section heading (`h2`).
    Section,
    /// A nested subsection heading (`h3`), rendered indented in the panel.
    Subsection,
}

impl HeadingLevel {
    /// Map an element tag name (`"h2"`, `"H3"`, ...) to a level.
    ///
    /// Returns `None` for any tag outside the qualifying ranks.
    pub fn from_tag(tag: &str) -> Option<Self> {
        if tag.eq_ignore_ascii_case("h2") {
            Some(Self::Section)
        } else if tag.eq_ignore_ascii_case("h3") {
            Some(Self::Subsection)
        } else {
            None
        }
    }
}

/// One heading element as found in the rendered content region.
///
/// This is the extractor's input: what the DOM scan saw, before anchor
/// identifiers are resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedHeading {
    /// Rank of the heading element.
    pub level: HeadingLevel,
    /// Visible text of the heading.
    pub text: String,
    /// Anchor identifier already carried by the element, if any.
    /// Reused verbatim; never rewritten.
    pub existing_id: Option<String>,
}

impl ScannedHeading {
    /// A scanned heading with no pre-assigned identifier.
    pub fn new(level: HeadingLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            existing_id: None,
        }
    }

    /// Attach the identifier the element already carried.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.existing_id = Some(id.into());
        self
    }
}

/// One navigable entry of the outline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingEntry {
    /// Visible heading text, as displayed in the panel.
    pub text: String,
    /// Anchor identifier, unique within the outline. Linking to `#<id>`
    /// resolves to exactly one heading in the rendered document.
    pub id: String,
    /// Section or subsection.
    pub level: HeadingLevel,
}

/// Ordered, anchor-resolved outline of one document.
///
/// Owned by the rendering surface for a single document and rebuilt whenever
/// that document changes. Empty exactly when the document has no qualifying
/// headings - the panel renders nothing in that case.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    pub(crate) entries: Vec<HeadingEntry>,
}

impl Outline {
    /// Entries in document order.
    pub fn entries(&self) -> &[HeadingEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the document had no qualifying headings.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn level_from_tag_accepts_both_cases() {
        assert_eq!(HeadingLevel::from_tag("h2"), Some(HeadingLevel::Section));
        assert_eq!(HeadingLevel::from_tag("H2"), Some(HeadingLevel::Section));
        assert_eq!(HeadingLevel::from_tag("h3"), Some(HeadingLevel::Subsection));
        assert_eq!(HeadingLevel::from_tag("H3"), Some(HeadingLevel::Subsection));
    }

    #[test]
    fn level_from_tag_rejects_other_ranks() {
        assert_eq!(HeadingLevel::from_tag("h1"), None);
        assert_eq!(HeadingLevel::from_tag("h4"), None);
        assert_eq!(HeadingLevel::from_tag("p"), None);
    }

    #[test]
    fn empty_outline_is_empty() {
        let outline = Outline::default();
        assert!(outline.is_empty());
        assert_eq!(outline.len(), 0);
    }
}
