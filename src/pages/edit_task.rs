//! Edit Task Page
//!
//! Pre-fills the form from a detail fetch and submits a full update.
//! Anonymous visitors are bounced to sign-in by the redirect gate.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use wasm_bindgen::JsCast;

use crate::api::{Api, TaskDraft};
use crate::components::{field_alerts, ToastContext};
use crate::context::CategoriesContext;
use crate::error::{ApiError, FieldErrors};
use crate::hooks::{use_auth_redirect, RedirectWhen};
use crate::models::TaskPriority;

#[component]
pub fn EditTaskPage() -> impl IntoView {
    use_auth_redirect(RedirectWhen::SignedOut);

    let api = use_context::<Api>().expect("Api should be provided");
    let categories = use_context::<CategoriesContext>().expect("CategoriesContext should be provided");
    let toasts = use_context::<ToastContext>().expect("ToastContext should be provided");
    let navigate = use_navigate();

    let params = use_params_map();
    let task_id = Memo::new(move |_| {
        params.with(|p| p.get("id").and_then(|raw| raw.parse::<u32>().ok()))
    });

    let (title, set_title) = signal(String::new());
    let (category, set_category) = signal(None::<u32>);
    let (description, set_description) = signal(String::new());
    let (priority, set_priority) = signal(TaskPriority::None);
    let (due_date, set_due_date) = signal(String::new());
    let errors = RwSignal::new(FieldErrors::new());

    // Pre-fill from the current server copy
    Effect::new(move |_| {
        let Some(id) = task_id.get() else {
            return;
        };
        spawn_local(async move {
            match api.get_task(id).await {
                Ok(task) => {
                    set_title.set(task.title);
                    set_category.set(task.category);
                    set_description.set(task.description);
                    set_priority.set(task.priority);
                    // keep only the date part of a datetime value
                    set_due_date.set(
                        task.due_date
                            .as_deref()
                            .and_then(|d| d.split('T').next())
                            .unwrap_or_default()
                            .to_string(),
                    );
                }
                Err(err) => {
                    web_sys::console::log_1(&format!("failed to load task: {err}").into());
                }
            }
        });
    });

    let done = UnsyncCallback::new(move |id: u32| {
        navigate(&format!("/task-detail/{id}"), Default::default());
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = task_id.get_untracked() else {
            return;
        };
        let draft = TaskDraft {
            title: title.get(),
            category: category.get(),
            description: description.get(),
            priority: priority.get(),
            due_date: Some(due_date.get()).filter(|d| !d.is_empty()),
        };
        spawn_local(async move {
            match api.update_task(id, &draft).await {
                Ok(_) => {
                    toasts.success("Task updated!");
                    done.run(id);
                }
                Err(ApiError::Unauthorized) => {}
                Err(ApiError::Validation(field_errors)) => {
                    errors.set(field_errors);
                    toasts.error("Failed to update Task!");
                }
                Err(err) => {
                    web_sys::console::log_1(&format!("failed to update task: {err}").into());
                    toasts.error("Failed to update Task!");
                }
            }
        });
    };

    let category_list = categories.list();

    view! {
        <form class="task-form" on:submit=submit>
            <input
                type="text"
                placeholder="Title"
                prop:value=move || title.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_title.set(input.value());
                }
            />
            {field_alerts(errors, "title")}

            <select
                prop:value=move || {
                    category.get().map(|id| id.to_string()).unwrap_or_default()
                }
                on:change=move |ev| {
                    set_category.set(event_target_value(&ev).parse::<u32>().ok());
                }
            >
                <option value="" disabled>
                    "Category"
                </option>
                {move || {
                    category_list.with(|page| {
                        page.results
                            .iter()
                            .map(|category| {
                                view! {
                                    <option value=category.id.to_string()>
                                        {category.title.clone()}
                                    </option>
                                }
                            })
                            .collect_view()
                    })
                }}
            </select>
            {field_alerts(errors, "category")}

            <textarea
                placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                    set_description.set(area.value());
                }
            ></textarea>

            <div class="priority-row">
                <span>"Priority:"</span>
                <label>
                    <input
                        type="radio"
                        name="priority"
                        checked=move || priority.get() == TaskPriority::None
                        on:change=move |_| set_priority.set(TaskPriority::None)
                    />
                    "None"
                </label>
                <label>
                    <input
                        type="radio"
                        name="priority"
                        checked=move || priority.get() == TaskPriority::Important
                        on:change=move |_| set_priority.set(TaskPriority::Important)
                    />
                    "Important"
                </label>
            </div>

            <div class="due-date-row">
                <span>"Due date:"</span>
                <input
                    type="date"
                    prop:value=move || due_date.get()
                    on:input=move |ev| set_due_date.set(event_target_value(&ev))
                />
            </div>
            {field_alerts(errors, "due_date")}

            <button type="submit" class="form-submit" aria-label="save task">
                "Save"
            </button>
        </form>
    }
}
