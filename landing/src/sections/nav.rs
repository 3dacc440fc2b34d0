use leptos::prelude::*;
use leptos_router::components::A;

use super::VERSION;
use crate::theme::{Theme, use_theme};

#[component]
pub fn Nav(
    /// Theme switching is owned here; everything else only reads the theme.
    on_toggle_theme: Callback<()>,
) -> impl IntoView {
    let theme = use_theme();

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <A href="/" attr:class="nav-brand">
                    <span class="nav-logo">"~"</span>
                    <span class="nav-title">"tidemark"</span>
                    <span class="nav-version">{VERSION}</span>
                </A>
                <div class="nav-links">
                    <A href="/" attr:class="nav-link">"Home"</A>
                    <A href="/blog" attr:class="nav-link">"Blog"</A>
                    <a href="/#features" class="nav-link">"Features"</a>
                    <a href="https://github.com/tidemark/tidemark" target="_blank" class="nav-link">"GitHub"</a>
                    <button
                        class="nav-theme-toggle"
                        title="Toggle light/dark mode"
                        on:click=move |_| on_toggle_theme.run(())
                    >
                        {move || match theme.get() {
                            Theme::Dark => "light",
                            Theme::Light => "dark",
                        }}
                    </button>
                </div>
            </div>
        </nav>
    }
}
