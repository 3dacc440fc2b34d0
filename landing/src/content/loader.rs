//! Embedded post registry.
//!
//! Posts are Markdown files compiled into the binary; there is no CMS and no
//! fetch. The registry parses them once, lazily. A post with malformed front
//! matter is dropped with a console error rather than taking the site down.

use std::sync::LazyLock;

use wasm_bindgen::JsValue;

use super::post::Post;

// Newest first - the blog index renders in array order.
const RAW_POSTS: &[&str] = &[
    include_str!("posts/release-notes-people-read.md"),
    include_str!("posts/anchors-that-hold.md"),
    include_str!("posts/introducing-tidemark.md"),
];

static POSTS: LazyLock<Vec<Post>> = LazyLock::new(|| {
    RAW_POSTS
        .iter()
        .filter_map(|raw| match Post::parse(raw) {
            Ok(post) => Some(post),
            Err(err) => {
                web_sys::console::error_1(&JsValue::from_str(&format!(
                    "tidemark: dropping post with bad front matter: {err}"
                )));
                None
            }
        })
        .collect()
});

/// All posts, newest first.
pub fn all_posts() -> &'static [Post] {
    &POSTS
}

/// Look up a post by its front matter slug.
pub fn find_post(slug: &str) -> Option<&'static Post> {
    POSTS.iter().find(|post| post.meta.slug == slug)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_embedded_post_parses() {
        for raw in RAW_POSTS {
            Post::parse(raw).unwrap_or_else(|err| panic!("bad post file: {err}"));
        }
    }

    #[test]
    fn slugs_are_unique() {
        let slugs: HashSet<&str> = all_posts().iter().map(|p| p.meta.slug.as_str()).collect();
        assert_eq!(slugs.len(), all_posts().len());
    }

    #[test]
    fn find_post_matches_exact_slug() {
        assert!(find_post("introducing-tidemark").is_some());
        assert!(find_post("introducing").is_none());
        assert!(find_post("").is_none());
    }

    #[test]
    fn registry_keeps_file_order() {
        let titles: Vec<&str> = all_posts().iter().map(|p| p.meta.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Writing Release Notes People Actually Read",
                "Anchors That Hold",
                "Introducing Tidemark",
            ]
        );
    }

    #[test]
    fn post_bodies_use_qualifying_heading_ranks() {
        // Articles drive the outline panel; each ships at least one section
        // heading and nothing shallower than h2 in the body.
        for post in all_posts() {
            assert!(post.body.contains("\n## ") || post.body.starts_with("## "));
            assert!(!post.body.contains("\n# "));
        }
    }
}
