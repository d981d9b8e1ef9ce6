//! Fallback Page

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! { <p class="not-found">"Page not found!"</p> }
}
