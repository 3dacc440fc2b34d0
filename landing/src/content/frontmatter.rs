//! Front matter parsing.
//!
//! Every post file opens with a `---` fenced block of `key: value` lines.
//! All values are plain scalar strings; `date` is free text and is displayed
//! exactly as authored. `title` and `slug` are required, everything else
//! defaults to empty. Unknown keys are ignored so content files can carry
//! extra metadata without breaking the site.

use thiserror::Error;

/// Errors raised while splitting a post into front matter and body.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    /// The file does not open with a `---` fence.
    #[error("post has no front matter block")]
    MissingFrontMatter,
    /// The opening fence is never closed.
    #[error("front matter block is never closed")]
    UnterminatedFrontMatter,
    /// A required field is absent or empty.
    #[error("front matter is missing required field `{0}`")]
    MissingField(&'static str),
}

/// Front matter of one post.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub date: String,
    pub author: String,
    pub image: String,
}

/// Split a raw post file into its front matter and markdown body.
pub fn parse_front_matter(raw: &str) -> Result<(FrontMatter, &str), ContentError> {
    let after_open = raw
        .strip_prefix("---\n")
        .ok_or(ContentError::MissingFrontMatter)?;
    let close = after_open
        .find("\n---")
        .ok_or(ContentError::UnterminatedFrontMatter)?;

    let block = &after_open[..close];
    let body = after_open[close + "\n---".len()..].trim_start_matches('\n');

    let mut fm = FrontMatter::default();
    for line in block.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim().to_string();
        match key.trim() {
            "title" => fm.title = value,
            "slug" => fm.slug = value,
            "description" => fm.description = value,
            "date" => fm.date = value,
            "author" => fm.author = value,
            "image" => fm.image = value,
            _ => {}
        }
    }

    if fm.title.is_empty() {
        return Err(ContentError::MissingField("title"));
    }
    if fm.slug.is_empty() {
        return Err(ContentError::MissingField("slug"));
    }
    Ok((fm, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const POST: &str = "---\n\
        title: Introducing Tidemark\n\
        slug: introducing-tidemark\n\
        description: Why we built it\n\
        date: 2026-05-12\n\
        author: Mara Jensen\n\
        image: assets/blog/intro.png\n\
        ---\n\
        \n\
        ## Why\n\nBody text.\n";

    #[test]
    fn parses_all_fields() {
        let (fm, body) = parse_front_matter(POST).unwrap();
        assert_eq!(fm.title, "Introducing Tidemark");
        assert_eq!(fm.slug, "introducing-tidemark");
        assert_eq!(fm.description, "Why we built it");
        assert_eq!(fm.date, "2026-05-12");
        assert_eq!(fm.author, "Mara Jensen");
        assert_eq!(fm.image, "assets/blog/intro.png");
        assert_eq!(body, "## Why\n\nBody text.\n");
    }

    #[test]
    fn optional_fields_default_to_empty() {
        let raw = "---\ntitle: T\nslug: t\n---\nbody";
        let (fm, body) = parse_front_matter(raw).unwrap();
        assert_eq!(fm.description, "");
        assert_eq!(fm.date, "");
        assert_eq!(fm.author, "");
        assert_eq!(fm.image, "");
        assert_eq!(body, "body");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let raw = "---\ntitle: T\nslug: t\ndraft: true\n---\nbody";
        let (fm, _) = parse_front_matter(raw).unwrap();
        assert_eq!(fm.title, "T");
    }

    #[test]
    fn value_may_contain_colons() {
        let raw = "---\ntitle: Anchors: A Field Guide\nslug: anchors\n---\n";
        let (fm, _) = parse_front_matter(raw).unwrap();
        assert_eq!(fm.title, "Anchors: A Field Guide");
    }

    #[test]
    fn missing_fence_is_an_error() {
        assert_eq!(
            parse_front_matter("## Just a heading\n"),
            Err(ContentError::MissingFrontMatter)
        );
    }

    #[test]
    fn unterminated_fence_is_an_error() {
        assert_eq!(
            parse_front_matter("---\ntitle: T\nslug: t\n"),
            Err(ContentError::UnterminatedFrontMatter)
        );
    }

    #[test]
    fn missing_required_fields_are_errors() {
        assert_eq!(
            parse_front_matter("---\nslug: t\n---\n"),
            Err(ContentError::MissingField("title"))
        );
        assert_eq!(
            parse_front_matter("---\ntitle: T\n---\n"),
            Err(ContentError::MissingField("slug"))
        );
    }
}
