use leptos::prelude::*;

use super::VERSION;

const INSTALL_COMMAND: &str = "cargo install tidemark";

#[component]
pub fn Hero() -> impl IntoView {
    let (copied, set_copied) = signal(false);
    let badge_text = format!("{} — Rust 2024 Edition", VERSION);

    let copy_install = move |_| {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            let _ = clipboard.write_text(INSTALL_COMMAND);
            set_copied.set(true);
            set_timeout(
                move || set_copied.set(false),
                std::time::Duration::from_millis(2000),
            );
        }
    };

    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <div class="hero-badge">
                            <span class="hero-badge-dot"></span>
                            {badge_text}
                        </div>
                        <h1 class="hero-title">
                            <span class="hero-title-accent">"Release notes"</span>
                            <br />
                            "your users actually read."
                        </h1>
                        <p class="hero-description">
                            "Write release notes as plain Markdown. Tidemark turns them into "
                            "articles with scannable sections, a navigable outline, and deep links "
                            "that keep working. No CMS, no backend, no editor lock-in."
                        </p>
                        <div class="hero-actions">
                            <a href="/blog" class="btn btn-primary">
                                "Read the Blog"
                            </a>
                            <a href="https://github.com/tidemark/tidemark" target="_blank" class="btn btn-secondary">
                                "View on GitHub →"
                            </a>
                        </div>
                        <div class="code-block-with-copy">
                            <code class="code-block-content">{INSTALL_COMMAND}</code>
                            <button class="code-copy-btn" on:click=copy_install>
                                {move || if copied.get() { "copied" } else { "copy" }}
                            </button>
                        </div>
                    </div>
                    <Terminal />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Terminal() -> impl IntoView {
    view! {
        <div class="hero-terminal">
            <div class="terminal-header">
                <div class="terminal-dot red"></div>
                <div class="terminal-dot yellow"></div>
                <div class="terminal-dot green"></div>
                <span class="terminal-title">"~/acme-api"</span>
            </div>
            <div class="terminal-body">
                <div class="terminal-line">
                    <span class="terminal-prompt">"$"</span>
                    <span class="terminal-command">"tidemark new 2.14"</span>
                </div>
                <div class="terminal-output muted">"Created notes/2.14.md"</div>

                <div class="terminal-line" style="margin-top: 16px;">
                    <span class="terminal-prompt">"$"</span>
                    <span class="terminal-command">"tidemark publish"</span>
                </div>
                <div class="terminal-output muted">"[tidemark] 3 sections, 2 subsections"</div>
                <div class="terminal-output muted">"[tidemark] anchors: webhooks-retry, breaking-changes, fixes"</div>
                <div class="terminal-output success">"✓ Published blog/2-14 (4.1 kB)"</div>

                <div class="terminal-output highlight" style="margin-top: 8px;">
                    "Every section linkable. Every link stable."
                </div>
            </div>
        </div>
    }
}
