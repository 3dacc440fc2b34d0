// Blog page
use crate::sections::Blog;
use leptos::prelude::*;

#[component]
pub fn BlogPage() -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"Blog"</h1>
                <p class="page-description">
                    "Updates, field notes, and write-ups from the Tidemark team"
                </p>
            </div>
        </section>
        <Blog />
    }
}
