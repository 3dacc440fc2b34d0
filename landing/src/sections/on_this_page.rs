//! "On this page" panel - the outline of the currently displayed article.
//!
//! The panel owns one deferred DOM scan per content-identity change. The
//! scan finds the rendered article container, collects its section and
//! subsection headings, resolves an anchor for each one through
//! `tidemark-outline`, and writes derived anchors back onto the elements so
//! the panel's `#fragment` links resolve.

use std::time::Duration;

use leptos::prelude::*;
use tidemark_outline::{HeadingLevel, Outline, ScannedHeading, build_outline};
use wasm_bindgen::JsCast;

/// Structural marker of the article body. Must match the article markup.
const CONTENT_REGION: &str = ".article-content";

/// Time between a content-identity change and the scan. The article body is
/// rendered by a separate component; this gives it time to land in the DOM.
const SCAN_DELAY: Duration = Duration::from_millis(300);

#[component]
pub fn OnThisPage(
    /// Changes exactly when the displayed article changes. Each change
    /// schedules one scan, cancelling any scan still pending - two rapid
    /// article switches run only the later scan.
    content_key: Memo<String>,
) -> impl IntoView {
    let (outline, set_outline) = signal(Outline::default());
    let pending = StoredValue::new_local(None::<TimeoutHandle>);

    Effect::new(move || {
        content_key.track();

        // The old article's outline must never show against the new article.
        set_outline.set(Outline::default());

        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
        if let Ok(handle) = set_timeout_with_handle(
            move || set_outline.set(scan_content_region()),
            SCAN_DELAY,
        ) {
            pending.set_value(Some(handle));
        }
    });

    on_cleanup(move || {
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
    });

    view! {
        <Show when=move || !outline.with(Outline::is_empty)>
            <nav class="on-this-page" aria-label="On this page">
                <p class="otp-heading">"On this page"</p>
                <ul class="otp-list">
                    {move || {
                        outline.with(|outline| {
                            outline
                                .entries()
                                .iter()
                                .map(|entry| {
                                    let class = match entry.level {
                                        HeadingLevel::Section => "otp-item",
                                        HeadingLevel::Subsection => "otp-item otp-item-sub",
                                    };
                                    let href = format!("#{}", entry.id);
                                    view! {
                                        <li class=class>
                                            <a class="otp-link" href=href>{entry.text.clone()}</a>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        })
                    }}
                </ul>
            </nav>
        </Show>
    }
}

/// One scan of the content region.
///
/// A missing region and a region with no h2/h3 headings both yield an empty
/// outline - the panel renders nothing, there is no error state.
fn scan_content_region() -> Outline {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Outline::default();
    };
    let Ok(Some(region)) = document.query_selector(CONTENT_REGION) else {
        return Outline::default();
    };
    let Ok(nodes) = region.query_selector_all("h2, h3") else {
        return Outline::default();
    };

    let mut elements = Vec::with_capacity(nodes.length() as usize);
    let mut scanned = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        let Some(element) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        let Some(level) = HeadingLevel::from_tag(&element.tag_name()) else {
            continue;
        };

        let text = element.text_content().unwrap_or_default().trim().to_string();
        let mut heading = ScannedHeading::new(level, text);
        let existing = element.id();
        if !existing.is_empty() {
            heading = heading.with_id(existing);
        }

        scanned.push(heading);
        elements.push(element);
    }

    let outline = build_outline(scanned);

    // Write resolved anchors back so `#fragment` links have a target.
    for (element, entry) in elements.iter().zip(outline.entries()) {
        if element.id() != entry.id {
            element.set_id(&entry.id);
        }
    }

    outline
}
