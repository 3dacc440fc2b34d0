// Article page - rendered markdown body + on-page outline
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::content::{MarkdownRenderer, Post, find_post};
use crate::sections::OnThisPage;

#[component]
pub fn PostPage() -> impl IntoView {
    let params = use_params_map();
    // Content identity: changes exactly when the displayed article changes.
    let slug = Memo::new(move |_| params.with(|p| p.get("slug")).unwrap_or_default());

    view! {
        <article class="article">
            <div class="container article-grid">
                <div class="article-main">
                    {move || match find_post(&slug.get()) {
                        Some(post) => article_body(post),
                        None => missing_post(),
                    }}
                </div>
                <aside class="article-aside">
                    <OnThisPage content_key=slug />
                </aside>
            </div>
        </article>
    }
}

fn article_body(post: &'static Post) -> AnyView {
    let html = MarkdownRenderer::new().render(post.body);
    let meta_line = if post.meta.author.is_empty() {
        post.meta.date.clone()
    } else {
        format!("{} · {}", post.meta.date, post.meta.author)
    };

    view! {
        <header class="article-header">
            {(!post.meta.image.is_empty()).then(|| view! {
                <img class="article-cover" src=post.meta.image.clone() alt="" />
            })}
            <p class="article-meta">{meta_line}</p>
            <h1 class="article-title">{post.meta.title.clone()}</h1>
            <p class="article-lede">{post.meta.description.clone()}</p>
        </header>
        <div class="article-content" inner_html=html></div>
        <p class="article-back"><A href="/blog">"← All posts"</A></p>
    }
    .into_any()
}

fn missing_post() -> AnyView {
    view! {
        <header class="article-header">
            <p class="article-meta">"404"</p>
            <h1 class="article-title">"Post not found"</h1>
            <p class="article-lede">"This post does not exist or has moved."</p>
        </header>
        <p class="article-back"><A href="/blog">"← All posts"</A></p>
    }
    .into_any()
}
