//! Task Detail Page
//!
//! Full view of one task: status dropdown (PATCH + refetch), category name
//! resolved from the shared slot, and the attachment list with multipart
//! upload, edit-mode delete, and load-more.

use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::api::Api;
use crate::components::ToastContext;
use crate::context::CategoriesContext;
use crate::models::{Paged, Task, TaskFile, TaskStatus};
use crate::pagination;
use crate::utils::file_name_from_url;

#[component]
pub fn TaskDetailPage() -> impl IntoView {
    let api = use_context::<Api>().expect("Api should be provided");
    let categories = use_context::<CategoriesContext>().expect("CategoriesContext should be provided");
    let toasts = use_context::<ToastContext>().expect("ToastContext should be provided");
    let navigate = use_navigate();

    let params = use_params_map();
    let task_id = Memo::new(move |_| {
        params.with(|p| p.get("id").and_then(|raw| raw.parse::<u32>().ok()))
    });

    let task = RwSignal::new(None::<Task>);
    let files = RwSignal::new(Paged::<TaskFile>::default());
    let loading_more = RwSignal::new(false);
    let (edit_mode, set_edit_mode) = signal(false);
    let file_input: NodeRef<Input> = NodeRef::new();

    let load_task = move || {
        let Some(id) = task_id.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api.get_task(id).await {
                Ok(fetched) => task.set(Some(fetched)),
                Err(err) => {
                    web_sys::console::log_1(&format!("failed to load task: {err}").into());
                }
            }
        });
    };

    let load_files = move || {
        let Some(id) = task_id.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api.list_task_files(id).await {
                Ok(page) => files.set(page),
                Err(err) => {
                    web_sys::console::log_1(&format!("failed to load task files: {err}").into());
                }
            }
        });
    };

    Effect::new(move |_| {
        let _ = task_id.get();
        load_task();
        load_files();
    });

    let set_status = move |status: TaskStatus| {
        let Some(id) = task_id.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api.set_task_status(id, status).await {
                Ok(_) => load_task(),
                Err(err) if err.is_unauthorized() => {}
                Err(err) => {
                    web_sys::console::log_1(&format!("failed to update status: {err}").into());
                    toasts.error("Failed to update status");
                }
            }
        });
    };

    let upload_file = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = task_id.get_untracked() else {
            return;
        };
        let Some(input) = file_input.get() else {
            return;
        };
        let Some(file) = input.files().and_then(|list| list.get(0)) else {
            toasts.error("Choose a file first");
            return;
        };
        spawn_local(async move {
            match api.upload_task_file(id, file).await {
                Ok(_) => {
                    input.set_value("");
                    load_files();
                    toasts.success("File added");
                }
                Err(err) if err.is_unauthorized() => {}
                Err(err) => {
                    web_sys::console::log_1(&format!("failed to upload file: {err}").into());
                    toasts.error("Failed to upload file");
                }
            }
        });
    };

    let delete_file = move |file_id: u32| {
        spawn_local(async move {
            match api.delete_task_file(file_id).await {
                Ok(()) => load_files(),
                Err(err) if err.is_unauthorized() => {}
                Err(err) => {
                    web_sys::console::log_1(&format!("failed to delete file: {err}").into());
                    toasts.error("Failed to delete file");
                }
            }
        });
    };

    let load_more_files = move |_| {
        spawn_local(async move {
            pagination::fetch_more(&api, files, loading_more).await;
        });
    };

    let edit_task = UnsyncCallback::new(move |id: u32| {
        navigate(&format!("/tasks/{id}/edit"), Default::default());
    });

    let category_name = move || {
        task.with(|t| t.as_ref().and_then(|t| categories.title_of(t.category)))
            .unwrap_or_else(|| "Unknown Category".to_string())
    };

    view! {
        {move || match task.get() {
            None => view! { <p class="task-loader">"Loading task detail..."</p> }.into_any(),
            Some(task) => {
                let id = task.id;
                let priority = task.priority.label();
                let status = task.status;
                view! {
                    <div class="task-detail">
                        <button class="task-edit" on:click=move |_| edit_task.run(id)>
                            "Edit"
                        </button>

                        <div class="task-card">
                            <div class="task-card-head">
                                <h5 class="task-priority">"Priority: " {priority}</h5>
                                <span class="task-category">{category_name.clone()}</span>
                            </div>
                            <h2 class="task-title">{task.title.clone()}</h2>
                            <p class="task-due">
                                <strong>"Due: "</strong>
                                {task.due_date.clone().unwrap_or_else(|| "—".to_string())}
                            </p>

                            <div class="task-status-picker">
                                <span>{status.label()}</span>
                                <select on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    if let Some(chosen) = TaskStatus::ALL
                                        .iter()
                                        .find(|s| s.as_str() == value)
                                    {
                                        set_status(*chosen);
                                    }
                                }>
                                    {TaskStatus::ALL
                                        .iter()
                                        .map(|s| {
                                            view! {
                                                <option
                                                    value=s.as_str()
                                                    selected=*s == status
                                                >
                                                    {s.label()}
                                                </option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                            </div>

                            <p class="task-description">{task.description.clone()}</p>
                        </div>
                    </div>
                }
                .into_any()
            }
        }}

        <div class="task-files">
            <form on:submit=upload_file>
                <input type="file" name="file" node_ref=file_input />
                <button type="submit" class="add-file">"+ Add file"</button>
            </form>

            <Show
                when=move || files.with(|f| !f.results.is_empty())
                fallback=|| view! { <p>"Add files to task"</p> }
            >
                <button
                    class="task-edit"
                    on:click=move |_| set_edit_mode.update(|v| *v = !*v)
                >
                    {move || if edit_mode.get() { "Done" } else { "Edit files" }}
                </button>
            </Show>

            {move || {
                let current = task_id.get();
                files.with(|page| {
                    page.results
                        .iter()
                        .filter(|file| Some(file.task) == current)
                        .map(|file| {
                            let file_id = file.id;
                            let name = file_name_from_url(&file.file);
                            let href = file.file.clone();
                            view! {
                                <div class="task-file">
                                    <a href=href target="_blank" rel="noopener noreferrer">
                                        {name}
                                    </a>
                                    <Show when=move || edit_mode.get()>
                                        <button
                                            class="file-delete"
                                            on:click=move |_| delete_file(file_id)
                                        >
                                            "Delete"
                                        </button>
                                    </Show>
                                </div>
                            }
                        })
                        .collect_view()
                })
            }}

            <Show when=move || files.with(|f| f.has_more())>
                <button
                    class="load-more small"
                    disabled=move || loading_more.get()
                    on:click=load_more_files
                >
                    "Load more files"
                </button>
            </Show>
        </div>
    }
}
