//! Anchor identifier derivation.

/// Derive a URL-fragment-safe identifier from heading text.
///
/// Lower-cases the text, replaces every run of non-alphanumeric characters
/// with a single hyphen, and trims leading and trailing hyphens:
///
/// ```rust
/// use tidemark_outline::slugify;
///
/// assert_eq!(slugify("Getting Started with Next.js"), "getting-started-with-next-js");
/// assert_eq!(slugify("What is Tailwind CSS?"), "what-is-tailwind-css");
/// ```
///
/// Text with no alphanumeric characters at all derives the empty string;
/// callers are expected to substitute a fallback before using it as an
/// anchor (see [`crate::build_outline`]).
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut gap = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if gap && !slug.is_empty() {
                slug.push('-');
            }
            gap = false;
            slug.extend(c.to_lowercase());
        } else {
            gap = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(slugify("Getting Started with Next.js"), "getting-started-with-next-js");
    }

    #[test]
    fn collapses_runs_of_punctuation() {
        assert_eq!(slugify("Breaking -- Changes!!"), "breaking-changes");
        assert_eq!(slugify("a   b"), "a-b");
    }

    #[test]
    fn trims_leading_and_trailing_separators() {
        assert_eq!(slugify("  Hello, World!  "), "hello-world");
        assert_eq!(slugify("...dots..."), "dots");
    }

    #[test]
    fn keeps_non_ascii_letters() {
        assert_eq!(slugify("Déjà Vu"), "déjà-vu");
    }

    #[test]
    fn punctuation_only_text_derives_empty() {
        assert_eq!(slugify("!?!"), "");
        assert_eq!(slugify(""), "");
    }
}
