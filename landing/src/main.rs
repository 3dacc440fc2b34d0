// Tidemark Landing Page + Blog — Leptos 0.8 Edition

mod content;
mod pages;
mod sections;
mod styles;
mod theme;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use wasm_bindgen::JsValue;

use pages::{BlogPage, HomePage, NotFoundPage, PostPage};
use sections::{Footer, Nav};

fn main() {
    console_error_panic_hook::set_once();
    print_console_banner();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let toggle_theme = theme::provide_theme();

    view! {
        <style>{styles::SITE_CSS}</style>
        <Router>
            <Nav on_toggle_theme=toggle_theme />
            <main>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/blog") view=BlogPage />
                    <Route path=path!("/blog/:slug") view=PostPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

/// ASCII wordmark for the browser console
fn console_wordmark() -> String {
    format!(
        r#"
  _   _     _                           _
 | |_(_) __| | ___ _ __ ___   __ _ _ __| | __
 | __| |/ _` |/ _ \ '_ ` _ \ / _` | '__| |/ /
 | |_| | (_| |  __/ | | | | | (_| | |  |   <
  \__|_|\__,_|\___|_| |_| |_|\__,_|_|  |_|\_\

  Release notes your users actually read.
  {} | tidemark.dev
"#,
        sections::VERSION
    )
}

/// Print the boot banner to the browser console
fn print_console_banner() {
    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c{}", console_wordmark())),
        &JsValue::from_str("color: #5eead4; font-family: monospace; font-size: 11px;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%cBuilt with Rust + Leptos. Source: github.com/tidemark/tidemark"),
        &JsValue::from_str("color: #888;"),
    );
}
