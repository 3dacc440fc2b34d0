// Home page - landing hero + highlights
use crate::sections::{Features, Hero};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <Features />
    }
}
