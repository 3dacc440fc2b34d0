//! # tidemark-outline
//!
//! Heading outline extraction for rendered article content.
//!
//! Given the headings found in a rendered article (in document order), this
//! crate resolves a stable anchor identifier for each one and assembles the
//! ordered outline the "on this page" panel renders. The DOM walking itself
//! lives with the site; everything here is pure and host-testable.
//!
//! ## Quick Start
//!
//! ```rust
//! use tidemark_outline::{build_outline, HeadingLevel, ScannedHeading};
//!
//! let outline = build_outline([
//!     ScannedHeading::new(HeadingLevel::Section, "Introduction"),
//!     ScannedHeading::new(HeadingLevel::Subsection, "Key Features"),
//! ]);
//!
//! assert_eq!(outline.entries()[0].id, "introduction");
//! assert_eq!(outline.entries()[1].id, "key-features");
//! ```
//!
//! ## Identifier resolution
//!
//! - A heading that already carries an identifier keeps it, verbatim.
//! - Anything else gets one derived from its text ([`slugify`]); duplicate
//!   derivations are disambiguated with a numeric suffix (`faq`, `faq-2`, ...).
//! - Carried identifiers are reserved before any derivation happens, so a
//!   derived anchor can never shadow one the author pinned - regardless of
//!   where in the document the pinned heading sits.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use std::collections::HashSet;

pub mod slug;
pub mod types;

pub use slug::slugify;
pub use types::{HeadingEntry, HeadingLevel, Outline, ScannedHeading};

/// Identifier used when heading text derives an empty slug
/// (punctuation-only headings).
const FALLBACK_ID: &str = "section";

/// Assemble an [`Outline`] from headings scanned in document order.
///
/// Entry order mirrors input order. Every entry ends up with an identifier
/// unique within the outline (see the crate docs for the resolution rules),
/// except that identifiers already carried by the input are reused as-is and
/// are the author's to keep unique.
///
/// Re-running on headings that already carry their resolved identifiers
/// reproduces the same outline, so repeated scans of an unchanged document
/// are stable.
pub fn build_outline<I>(headings: I) -> Outline
where
    I: IntoIterator<Item = ScannedHeading>,
{
    let headings: Vec<ScannedHeading> = headings.into_iter().collect();

    // Reserve author-assigned anchors first; derivation must not steal one
    // that appears later in the document.
    let mut taken: HashSet<String> = headings
        .iter()
        .filter_map(|h| h.existing_id.clone())
        .collect();

    let mut entries = Vec::with_capacity(headings.len());
    for heading in headings {
        let id = match heading.existing_id {
            Some(id) => id,
            None => claim(&mut taken, slugify(&heading.text)),
        };
        entries.push(HeadingEntry {
            text: heading.text,
            id,
            level: heading.level,
        });
    }

    Outline { entries }
}

/// Take `base` if free, otherwise the first free `base-N` (N >= 2).
fn claim(taken: &mut HashSet<String>, base: String) -> String {
    let base = if base.is_empty() {
        FALLBACK_ID.to_string()
    } else {
        base
    };
    if taken.insert(base.clone()) {
        return base;
    }
    let mut n = 2u32;
    loop {
        let candidate = format!("{base}-{n}");
        if taken.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn section(text: &str) -> ScannedHeading {
        ScannedHeading::new(HeadingLevel::Section, text)
    }

    fn subsection(text: &str) -> ScannedHeading {
        ScannedHeading::new(HeadingLevel::Subsection, text)
    }

    #[test]
    fn empty_document_yields_empty_outline() {
        let outline = build_outline([]);
        assert!(outline.is_empty());
    }

    #[test]
    fn entry_count_and_order_match_the_document() {
        let outline = build_outline([
            section("Introduction"),
            section("What is Tailwind CSS?"),
            subsection("Key Features"),
        ]);

        assert_eq!(
            outline.entries(),
            &[
                HeadingEntry {
                    text: "Introduction".into(),
                    id: "introduction".into(),
                    level: HeadingLevel::Section,
                },
                HeadingEntry {
                    text: "What is Tailwind CSS?".into(),
                    id: "what-is-tailwind-css".into(),
                    level: HeadingLevel::Section,
                },
                HeadingEntry {
                    text: "Key Features".into(),
                    id: "key-features".into(),
                    level: HeadingLevel::Subsection,
                },
            ]
        );
    }

    #[test]
    fn derivation_is_deterministic() {
        let outline = build_outline([section("Getting Started with Next.js")]);
        assert_eq!(outline.entries()[0].id, "getting-started-with-next-js");
    }

    #[test]
    fn carried_identifiers_are_reused_verbatim() {
        let outline = build_outline([
            section("Deriving Identifiers").with_id("deriving"),
            section("Pinning Your Own").with_id("Pinned_Anchor"),
        ]);
        assert_eq!(outline.entries()[0].id, "deriving");
        assert_eq!(outline.entries()[1].id, "Pinned_Anchor");
    }

    #[test]
    fn rescan_of_resolved_headings_is_idempotent() {
        let first = build_outline([
            section("Introduction"),
            section("FAQ"),
            subsection("FAQ"),
        ]);

        // Simulate a second scan: every heading now carries the identifier
        // the first pass assigned.
        let rescanned = first
            .entries()
            .iter()
            .map(|e| ScannedHeading::new(e.level, e.text.clone()).with_id(e.id.clone()))
            .collect::<Vec<_>>();
        let second = build_outline(rescanned);

        assert_eq!(first, second);
    }

    #[test]
    fn duplicate_text_gets_numeric_suffixes() {
        let outline = build_outline([section("FAQ"), section("FAQ"), section("FAQ")]);
        let ids: Vec<&str> = outline.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["faq", "faq-2", "faq-3"]);
    }

    #[test]
    fn derivation_never_shadows_a_later_pinned_anchor() {
        // The pinned "intro" comes *after* the heading that would derive it.
        let outline = build_outline([
            section("Intro"),
            section("The Real Intro").with_id("intro"),
        ]);
        let ids: Vec<&str> = outline.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["intro-2", "intro"]);
    }

    #[test]
    fn suffixing_skips_taken_candidates() {
        let outline = build_outline([
            section("FAQ").with_id("faq-2"),
            section("FAQ"),
            section("FAQ"),
        ]);
        let ids: Vec<&str> = outline.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["faq-2", "faq", "faq-3"]);
    }

    #[test]
    fn punctuation_only_headings_fall_back() {
        let outline = build_outline([section("???"), section("!!!")]);
        let ids: Vec<&str> = outline.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["section", "section-2"]);
    }

    #[test]
    fn mixed_ranks_keep_their_levels() {
        let outline = build_outline([
            section("Setup"),
            subsection("Requirements"),
            subsection("Install"),
            section("Usage"),
        ]);
        let levels: Vec<HeadingLevel> = outline.entries().iter().map(|e| e.level).collect();
        assert_eq!(
            levels,
            vec![
                HeadingLevel::Section,
                HeadingLevel::Subsection,
                HeadingLevel::Subsection,
                HeadingLevel::Section,
            ]
        );
    }
}
