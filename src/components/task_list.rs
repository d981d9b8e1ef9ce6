//! Task List Component
//!
//! Paged task rows with category filtering, per-row delete behind a
//! confirmation, and a load-more affordance for the continuation page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api::Api;
use crate::components::{ConfirmContext, ToastContext};
use crate::models::{Paged, Task};
use crate::pagination;
use crate::utils::{capitalize_first_letter, filter_by_category, status_class};

#[component]
pub fn TaskList(
    /// The owning view's task collection
    tasks: RwSignal<Paged<Task>>,
    /// Selected category id; `None` shows everything
    #[prop(into)] selected_category: Signal<Option<u32>>,
) -> impl IntoView {
    let api = use_context::<Api>().expect("Api should be provided");
    let toasts = use_context::<ToastContext>().expect("ToastContext should be provided");
    let confirm = use_context::<ConfirmContext>().expect("ConfirmContext should be provided");

    let loading_more = RwSignal::new(false);

    let delete_task = move |task_id: u32| {
        spawn_local(async move {
            let confirmed = confirm
                .confirm("Are you sure you want to delete this task?")
                .await
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            match api.delete_task(task_id).await {
                Ok(()) => {
                    tasks.update(|t| t.remove(task_id));
                    toasts.success("Task deleted successfully!");
                }
                Err(err) if err.is_unauthorized() => {}
                Err(err) => {
                    web_sys::console::log_1(&format!("failed to delete task: {err}").into());
                    toasts.error("Failed to delete task");
                }
            }
        });
    };

    let load_more = move |_| {
        spawn_local(async move {
            pagination::fetch_more(&api, tasks, loading_more).await;
        });
    };

    view! {
        <div class="task-list">
            <div class="task-list-header">
                <span class="task-col-title">"Title"</span>
                <span class="task-col-status">"Status"</span>
                <span class="task-col-qty">
                    {move || format!("Qty: {}", tasks.with(|t| t.results.len()))}
                </span>
            </div>

            {move || {
                let visible =
                    tasks.with(|t| filter_by_category(&t.results, selected_category.get()));
                visible
                    .into_iter()
                    .map(|task| {
                        let id = task.id;
                        view! {
                            <div class="task-row">
                                <A href=format!("/task-detail/{id}")>
                                    <span class="task-title">
                                        {capitalize_first_letter(&task.title)}
                                    </span>
                                </A>
                                <span class=format!("task-status {}", status_class(task.status))>
                                    {task.status.label()}
                                </span>
                                <button
                                    class="task-delete"
                                    on:click=move |_| delete_task(id)
                                >
                                    "Delete"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}

            <Show when=move || tasks.with(|t| t.has_more())>
                <button
                    class="load-more"
                    disabled=move || loading_more.get()
                    on:click=load_more
                >
                    {move || if loading_more.get() { "Loading..." } else { "Load more" }}
                </button>
            </Show>
        </div>
    }
}
