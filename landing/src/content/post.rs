use super::frontmatter::{ContentError, FrontMatter, parse_front_matter};

/// One blog post: parsed front matter plus the raw markdown body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Post {
    pub meta: FrontMatter,
    pub body: &'static str,
}

impl Post {
    /// Parse an embedded post file.
    pub fn parse(raw: &'static str) -> Result<Self, ContentError> {
        let (meta, body) = parse_front_matter(raw)?;
        Ok(Self { meta, body })
    }
}
