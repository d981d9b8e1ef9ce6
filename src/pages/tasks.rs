//! Tasks Page
//!
//! Full task listing with the category panel, without the dashboard
//! widgets. Fetches its own copy of the collection on mount.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::Api;
use crate::components::{CategoryPanel, TaskList};
use crate::context::SessionContext;
use crate::models::{Paged, Task};

#[component]
pub fn TasksPage() -> impl IntoView {
    let session = use_context::<SessionContext>().expect("SessionContext should be provided");
    let api = use_context::<Api>().expect("Api should be provided");

    let tasks = RwSignal::new(Paged::<Task>::default());
    let (selected_name, set_selected_name) = signal("All".to_string());
    let (selected_id, set_selected_id) = signal(None::<u32>);

    Effect::new(move |_| {
        if !session.is_signed_in() {
            return;
        }
        spawn_local(async move {
            match api.list_tasks().await {
                Ok(page) => tasks.set(page),
                Err(err) => {
                    web_sys::console::log_1(&format!("failed to load tasks: {err}").into());
                }
            }
        });
    });

    let on_select = Callback::new(move |(name, id): (String, Option<u32>)| {
        set_selected_name.set(name);
        set_selected_id.set(id);
    });

    view! {
        <Show
            when=move || session.is_signed_in()
            fallback=|| view! { <p class="signin-hint">"Please sign in to view"</p> }
        >
            <div class="dashboard-columns">
                <CategoryPanel selected_name=selected_name on_select=on_select />
                <TaskList tasks=tasks selected_category=selected_id />
            </div>
        </Show>
    }
}
