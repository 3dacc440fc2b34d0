// Fallback route
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"404"</h1>
                <p class="page-description">
                    "Nothing lives at this address. "
                    <A href="/">"Back to the shore."</A>
                </p>
            </div>
        </section>
    }
}
