//! About Page

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about">
            <h1>"About TaskFlow"</h1>
            <p>
                "TaskFlow keeps your work in one place: group tasks into your own "
                "categories, flag the important ones, track status from pending to "
                "completed, and attach files where the work lives."
            </p>
            <p>
                "Sign up, add a few categories, and start capturing tasks from the "
                "dashboard."
            </p>
        </div>
    }
}
