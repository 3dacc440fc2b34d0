use leptos::prelude::*;
use leptos_router::components::A;

use crate::content::{Post, all_posts};

#[component]
pub fn Blog() -> impl IntoView {
    view! {
        <section id="blog" class="blog">
            <div class="container">
                <div class="blog-grid">
                    {all_posts()
                        .iter()
                        .map(|post| view! { <PostCard post=post /> })
                        .collect::<Vec<_>>()}
                </div>
                <div class="blog-footer">
                    <p class="blog-note">
                        "Posts are Markdown files in the repo - no CMS involved. "
                        "Spotted a mistake? "
                        <a href="https://github.com/tidemark/tidemark/issues" target="_blank">"Open an issue"</a>
                        " or send a PR."
                    </p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn PostCard(post: &'static Post) -> impl IntoView {
    let href = format!("/blog/{}", post.meta.slug);
    let meta_line = if post.meta.author.is_empty() {
        post.meta.date.clone()
    } else {
        format!("{} · {}", post.meta.date, post.meta.author)
    };

    view! {
        <A href=href attr:class="blog-card">
            <span class="blog-meta">{meta_line}</span>
            <h3 class="blog-title">{post.meta.title.clone()}</h3>
            <p class="blog-subtitle">{post.meta.description.clone()}</p>
            <span class="blog-cta">
                "Read post"
                <span class="arrow">"→"</span>
            </span>
        </A>
    }
}
