//! Sign In Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;

use crate::api::Api;
use crate::components::{field_alerts, ToastContext};
use crate::context::SessionContext;
use crate::error::{ApiError, FieldErrors, NON_FIELD_ERRORS};
use crate::hooks::{use_auth_redirect, RedirectWhen};

#[component]
pub fn SignInPage() -> impl IntoView {
    use_auth_redirect(RedirectWhen::SignedIn);

    let api = use_context::<Api>().expect("Api should be provided");
    let session = use_context::<SessionContext>().expect("SessionContext should be provided");
    let toasts = use_context::<ToastContext>().expect("ToastContext should be provided");
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let errors = RwSignal::new(FieldErrors::new());

    let done = UnsyncCallback::new(move |_: ()| navigate("/", Default::default()));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = username.get();
        let password = password.get();
        spawn_local(async move {
            match api.login(&username, &password).await {
                Ok(response) => {
                    session.set_user(response.user);
                    toasts.success("Signed in");
                    done.run(());
                }
                Err(ApiError::Validation(field_errors)) => {
                    errors.set(field_errors);
                }
                Err(err) => {
                    web_sys::console::log_1(&format!("sign in failed: {err}").into());
                    toasts.error("Sign in failed");
                }
            }
        });
    };

    view! {
        <div class="auth-form-container">
            <form class="auth-form" on:submit=submit>
                <h1>"Sign In"</h1>

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
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_password.set(input.value());
                    }
                />
                {field_alerts(errors, "password")}
                {field_alerts(errors, NON_FIELD_ERRORS)}

                <p class="auth-switch">
                    "Don't have an account?" <A href="/signup">" Sign up"</A>
                </p>

                <button type="submit" class="form-submit">
                    "Log in"
                </button>
            </form>
        </div>
    }
}
