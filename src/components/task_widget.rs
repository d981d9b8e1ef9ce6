//! Task Widget Component
//!
//! Dashboard widget showing a filtered slice of tasks (important or due
//! soon). Each widget fetches its own collection independently and chases
//! one continuation page right away when the listing is longer than a page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api::Api;
use crate::models::{Paged, Task};
use crate::pagination;
use crate::utils::{widget_tasks, WidgetFilter};

#[component]
pub fn TaskWidget(#[prop(into)] title: String, filter: WidgetFilter) -> impl IntoView {
    let api = use_context::<Api>().expect("Api should be provided");

    let tasks = RwSignal::new(Paged::<Task>::default());
    let loading_more = RwSignal::new(false);

    Effect::new(move |_| {
        spawn_local(async move {
            let fetched = match filter {
                WidgetFilter::DueSoon => api.due_soon_tasks().await,
                WidgetFilter::Important => api.list_tasks().await,
            };
            match fetched {
                Ok(page) => {
                    let chase = page.has_more();
                    tasks.set(page);
                    if chase {
                        pagination::fetch_more(&api, tasks, loading_more).await;
                    }
                }
                Err(err) => {
                    web_sys::console::log_1(&format!("failed to load widget tasks: {err}").into());
                }
            }
        });
    });

    let load_more = move |_| {
        spawn_local(async move {
            pagination::fetch_more(&api, tasks, loading_more).await;
        });
    };

    let show_days_left = filter == WidgetFilter::DueSoon;

    view! {
        <div class="task-widget">
            <p class="widget-title">{title}</p>

            {move || {
                let visible = tasks.with(|t| widget_tasks(&t.results, filter));
                if visible.is_empty() {
                    view! { <p class="widget-empty">"Nothing here"</p> }.into_any()
                } else {
                    visible
                        .into_iter()
                        .map(|task| {
                            let id = task.id;
                            let title = task.title.clone();
                            let days_class = if task.is_overdue {
                                "widget-days overdue"
                            } else {
                                "widget-days"
                            };
                            let days_left = view_days_left(&task);
                            view! {
                                <A href=format!("/task-detail/{id}")>
                                    <div class="widget-row">
                                        <span class="widget-task-title">{title}</span>
                                        <Show when=move || show_days_left>
                                            <span class=days_class>{days_left.clone()}</span>
                                        </Show>
                                    </div>
                                </A>
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }}

            <Show when=move || tasks.with(|t| t.has_more())>
                <button
                    class="load-more small"
                    disabled=move || loading_more.get()
                    on:click=load_more
                >
                    "Load more"
                </button>
            </Show>
        </div>
    }
}

/// Overdue/days-left annotation for the due-soon widget
fn view_days_left(task: &Task) -> String {
    if task.is_overdue {
        "Overdue".to_string()
    } else {
        match task.days_left {
            Some(days) => format!("{days} days"),
            None => String::new(),
        }
    }
}
