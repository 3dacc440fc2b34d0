use leptos::prelude::*;

use super::VERSION;

#[component]
pub fn Features() -> impl IntoView {
    let eyebrow = format!("{} Features", VERSION);
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">{eyebrow}</p>
                    <h2 class="section-title">"Changelogs, promoted to articles."</h2>
                    <p class="section-description">
                        "Everything here is built from plain Markdown files checked into your "
                        "repo. The site adds the structure readers need and nothing else."
                    </p>
                </div>
                <div class="features-grid">
                    <FeatureCard
                        icon="[1]"
                        title="Markdown In, Articles Out"
                        description="One file per release with a small front matter block. Headings become sections, sections become structure readers can scan."
                        code=Some("tidemark new 2.14")
                    />
                    <FeatureCard
                        icon="[2]"
                        title="On-Page Outlines"
                        description="Every article gets an auto-generated outline of its sections and subsections, built from the rendered page itself. Zero headings, zero panel."
                        code=None
                    />
                    <FeatureCard
                        icon="[3]"
                        title="Anchors That Hold"
                        description="Section anchors are derived from heading text with rules you can predict by eye. Duplicates get numeric suffixes instead of silently colliding."
                        code=Some("#getting-started-with-next-js")
                    />
                    <FeatureCard
                        icon="[4]"
                        title="Pin What Must Not Break"
                        description="An anchor already on a heading is reused verbatim and reserved first, so a derived anchor can never steal it."
                        code=Some("## Deriving Identifiers {#deriving}")
                    />
                    <FeatureCard
                        icon="[5]"
                        title="Dark and Light"
                        description="One toggle, persisted locally. Components read the theme from a read-only context - nothing mutates global state behind your back."
                        code=None
                    />
                    <FeatureCard
                        icon="[6]"
                        title="No Backend"
                        description="No CMS, no database, no auth. Content compiles into the site; publishing is a static deploy."
                        code=None
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    code: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class="feature-icon">{icon}</div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
            {code.map(|snippet| view! {
                <code class="feature-code">{snippet}</code>
            })}
        </div>
    }
}
