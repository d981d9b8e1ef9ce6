//! Category Panel Component
//!
//! Sidebar for selecting, adding, and deleting categories. The list itself
//! lives in the shared categories slot; mutations ask the provider to
//! refetch instead of patching locally.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::Api;
use crate::components::{ConfirmContext, ToastContext};
use crate::context::CategoriesContext;
use crate::error::{ApiError, FieldErrors};
use crate::utils::capitalize_first_letter;

#[component]
pub fn CategoryPanel(
    /// Heading text, usually the selected category name
    #[prop(into)] selected_name: Signal<String>,
    /// Called with (name, id) on selection; `None` id means "All"
    #[prop(into)] on_select: Callback<(String, Option<u32>)>,
) -> impl IntoView {
    let api = use_context::<Api>().expect("Api should be provided");
    let categories = use_context::<CategoriesContext>().expect("CategoriesContext should be provided");
    let toasts = use_context::<ToastContext>().expect("ToastContext should be provided");
    let confirm = use_context::<ConfirmContext>().expect("ConfirmContext should be provided");

    let (new_title, set_new_title) = signal(String::new());
    let errors = RwSignal::new(FieldErrors::new());

    let submit_category = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get();
        if title.is_empty() {
            return;
        }
        spawn_local(async move {
            match api.create_category(&title).await {
                Ok(_) => {
                    set_new_title.set(String::new());
                    errors.set(FieldErrors::new());
                    categories.reload();
                    toasts.success("Category added successfully");
                }
                Err(ApiError::Unauthorized) => {}
                Err(ApiError::Validation(field_errors)) => {
                    errors.set(field_errors);
                    toasts.error("Failed to add Category");
                }
                Err(err) => {
                    web_sys::console::log_1(&format!("failed to add category: {err}").into());
                    toasts.error("Failed to add Category");
                }
            }
        });
    };

    let delete_category = move |category_id: u32| {
        spawn_local(async move {
            let confirmed = confirm
                .confirm("Are you sure you want to delete this category?")
                .await
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            match api.delete_category(category_id).await {
                Ok(()) => {
                    categories.reload();
                    toasts.success("Category deleted!");
                }
                Err(err) if err.is_unauthorized() => {}
                Err(err) => {
                    web_sys::console::log_1(&format!("failed to delete category: {err}").into());
                    toasts.error("Failed to delete category");
                }
            }
        });
    };

    let load_more = move |_| {
        spawn_local(async move {
            categories.load_more(api).await;
        });
    };

    let list = categories.list();

    view! {
        <div class="category-panel">
            <h2 class="category-heading">{move || selected_name.get()}</h2>

            <form class="category-add-form" on:submit=submit_category>
                <input
                    type="text"
                    placeholder="Category"
                    prop:value=move || new_title.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_new_title.set(input.value());
                    }
                    on:focus=move |_| errors.set(FieldErrors::new())
                />
                <button type="submit">"+"</button>
            </form>
            {crate::components::field_alerts(errors, "title")}

            <div
                class="category-row all"
                on:click=move |_| on_select.run(("All".to_string(), None))
            >
                "All"
            </div>

            {move || {
                list.with(|page| {
                    page.results
                        .iter()
                        .map(|category| {
                            let id = category.id;
                            let title = category.title.clone();
                            let select_title = title.clone();
                            view! {
                                <div
                                    class="category-row"
                                    on:click=move |_| {
                                        on_select.run((select_title.clone(), Some(id)))
                                    }
                                >
                                    <span class="category-title">
                                        {capitalize_first_letter(&title)}
                                    </span>
                                    <button
                                        class="category-delete"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            delete_category(id);
                                        }
                                    >
                                        "Delete"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                })
            }}

            <Show when=move || list.with(|page| page.has_more())>
                <button class="load-more small" on:click=load_more>
                    "Load more"
                </button>
            </Show>
        </div>
    }
}
