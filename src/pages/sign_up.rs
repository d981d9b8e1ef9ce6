//! Sign Up Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;

use crate::api::Api;
use crate::components::{field_alerts, ToastContext};
use crate::error::{ApiError, FieldErrors, NON_FIELD_ERRORS};
use crate::hooks::{use_auth_redirect, RedirectWhen};

#[component]
pub fn SignUpPage() -> impl IntoView {
    use_auth_redirect(RedirectWhen::SignedIn);

    let api = use_context::<Api>().expect("Api should be provided");
    let toasts = use_context::<ToastContext>().expect("ToastContext should be provided");
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password1, set_password1) = signal(String::new());
    let (password2, set_password2) = signal(String::new());
    let errors = RwSignal::new(FieldErrors::new());

    let done = UnsyncCallback::new(move |_: ()| navigate("/signin", Default::default()));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = username.get();
        let password1 = password1.get();
        let password2 = password2.get();
        spawn_local(async move {
            match api.register(&username, &password1, &password2).await {
                Ok(()) => {
                    toasts.success("Account created, please sign in");
                    done.run(());
                }
                Err(ApiError::Validation(field_errors)) => {
                    errors.set(field_errors);
                }
                Err(err) => {
                    web_sys::console::log_1(&format!("sign up failed: {err}").into());
                    toasts.error("Sign up failed");
                }
            }
        });
    };

    view! {
        <div class="auth-form-container">
            <form class="auth-form" on:submit=submit>
                <h1>"Sign Up"</h1>

                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_username.set(input.value());
                    }
                />
                {field_alerts(errors, "username")}

                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password1.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_password1.set(input.value());
                    }
                />
                {field_alerts(errors, "password1")}

                <input
                    type="password"
                    placeholder="Re-enter Password"
                    prop:value=move || password2.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_password2.set(input.value());
                    }
                />
                {field_alerts(errors, "password2")}
                {field_alerts(errors, NON_FIELD_ERRORS)}

                <p class="auth-switch">
                    "Already have an account?" <A href="/signin">" Sign in"</A>
                </p>

                <button type="submit" class="form-submit">
                    "Submit"
                </button>
            </form>
        </div>
    }
}
