//! Markdown to HTML rendering.

use pulldown_cmark::{Options, Parser, html};

/// Renders post bodies to HTML fragments.
///
/// Heading attributes are enabled so an author can pin an explicit anchor
/// (`## Deriving Identifiers {#deriving}`); the outline extractor reuses a
/// pinned anchor instead of deriving one. Headings without attributes are
/// emitted bare - anchors for those are assigned after render, by the scan.
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_HEADING_ATTRIBUTES);
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        Self { options }
    }

    /// Render a markdown body to an HTML fragment (no surrounding document).
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_section_and_subsection_headings() {
        let html = MarkdownRenderer::new().render("## Intro\n\n### Details\n");
        assert!(html.contains("<h2>Intro</h2>"));
        assert!(html.contains("<h3>Details</h3>"));
    }

    #[test]
    fn plain_headings_carry_no_identifier() {
        let html = MarkdownRenderer::new().render("## Intro\n");
        assert!(!html.contains("id="));
    }

    #[test]
    fn pinned_anchors_pass_through() {
        let html = MarkdownRenderer::new().render("## Deriving Identifiers {#deriving}\n");
        assert!(html.contains(r#"<h2 id="deriving">Deriving Identifiers</h2>"#));
    }

    #[test]
    fn renders_inline_markup_and_code() {
        let html = MarkdownRenderer::new().render("Some `code` and **bold**.\n");
        assert!(html.contains("<code>code</code>"));
        assert!(html.contains("<strong>bold</strong>"));
    }
}
