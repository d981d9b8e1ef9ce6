//! Dashboard Page
//!
//! Signed-in landing view: the two task widgets, the category panel, and
//! the main task list. The list is fetched on mount and one continuation
//! page is chased immediately so the first screen is well filled.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::Api;
use crate::components::{CategoryPanel, TaskList, TaskWidget};
use crate::context::SessionContext;
use crate::models::{Paged, Task};
use crate::pagination;
use crate::utils::WidgetFilter;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_context::<SessionContext>().expect("SessionContext should be provided");
    let api = use_context::<Api>().expect("Api should be provided");

    let tasks = RwSignal::new(Paged::<Task>::default());
    let loading_more = RwSignal::new(false);
    let (selected_name, set_selected_name) = signal("All".to_string());
    let (selected_id, set_selected_id) = signal(None::<u32>);

    Effect::new(move |_| {
        if !session.is_signed_in() {
            return;
        }
        spawn_local(async move {
            match api.list_tasks().await {
                Ok(page) => {
                    let chase = page.has_more();
                    tasks.set(page);
                    if chase {
                        pagination::fetch_more(&api, tasks, loading_more).await;
                    }
                }
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
            <div class="widget-row-container">
                <TaskWidget title="Important" filter=WidgetFilter::Important />
                <TaskWidget title="Due Soon" filter=WidgetFilter::DueSoon />
            </div>

            <div class="dashboard-columns">
                <CategoryPanel selected_name=selected_name on_select=on_select />
                <TaskList tasks=tasks selected_category=selected_id />
            </div>
        </Show>
    }
}
