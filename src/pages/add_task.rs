//! Add Task Page
//!
//! Creation form: title, category, description, priority, due date.
//! Validation failures render inline; success redirects to the dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;

use crate::api::{Api, TaskDraft};
use crate::components::{field_alerts, ToastContext};
use crate::context::{CategoriesContext, SessionContext};
use crate::error::{ApiError, FieldErrors};
use crate::models::TaskPriority;

#[component]
pub fn AddTaskPage() -> impl IntoView {
    let session = use_context::<SessionContext>().expect("SessionContext should be provided");
    let api = use_context::<Api>().expect("Api should be provided");
    let categories = use_context::<CategoriesContext>().expect("CategoriesContext should be provided");
    let toasts = use_context::<ToastContext>().expect("ToastContext should be provided");
    let navigate = use_navigate();

    let (title, set_title) = signal(String::new());
    let (category, set_category) = signal(None::<u32>);
    let (description, set_description) = signal(String::new());
    let (priority, set_priority) = signal(TaskPriority::None);
    let (due_date, set_due_date) = signal(String::new());
    let errors = RwSignal::new(FieldErrors::new());

    let done = UnsyncCallback::new(move |_: ()| navigate("/", Default::default()));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = TaskDraft {
            title: title.get(),
            category: category.get(),
            description: description.get(),
            priority: priority.get(),
            due_date: Some(due_date.get()).filter(|d| !d.is_empty()),
        };
        spawn_local(async move {
            match api.create_task(&draft).await {
                Ok(_) => {
                    toasts.success("Task added successfully");
                    done.run(());
                }
                Err(ApiError::Unauthorized) => {}
                Err(ApiError::Validation(field_errors)) => {
                    errors.set(field_errors);
                    toasts.error("Failed to submit task!");
                }
                Err(err) => {
                    web_sys::console::log_1(&format!("failed to add task: {err}").into());
                    toasts.error("Failed to submit task!");
                }
            }
        });
    };

    let category_list = categories.list();

    view! {
        <Show
            when=move || session.is_signed_in()
            fallback=|| view! { <p class="signin-hint">"Please sign in to add task!"</p> }
        >
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

                <select on:change=move |ev| {
                    set_category.set(event_target_value(&ev).parse::<u32>().ok());
                }>
                    <option value="" disabled selected>
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

                <button type="submit" class="form-submit" aria-label="add task">
                    "Add"
                </button>
            </form>
        </Show>
    }
}
