use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-logo">"~"</span>
                    <span class="footer-title">"tidemark"</span>
                </div>
                <div class="footer-links">
                    <a href="https://github.com/tidemark/tidemark" target="_blank" class="footer-link">"GitHub"</a>
                    <a href="https://crates.io/crates/tidemark" target="_blank" class="footer-link">"crates.io"</a>
                    <a href="https://github.com/tidemark/tidemark/blob/main/LICENSE" target="_blank" class="footer-link">"MIT License"</a>
                </div>
                <p class="footer-copyright">
                    {format!("(c){year} The Tidemark Team")}
                </p>
            </div>
        </footer>
    }
}
