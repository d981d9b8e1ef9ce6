//! Navigation Bar
//!
//! Brand, route links, and the session controls: sign in/up when anonymous,
//! greeting plus log out when authenticated.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::api::Api;
use crate::components::ToastContext;
use crate::context::SessionContext;
use crate::error::ApiError;

/// Toast copy for the sign-out outcome: `Ok` is a success toast, `Err` an
/// error toast.
fn logout_notice(result: &Result<(), ApiError>) -> Result<&'static str, &'static str> {
    match result {
        Ok(()) => Ok("Signed out"),
        Err(_) => Err("Sign out failed"),
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let session = use_context::<SessionContext>().expect("SessionContext should be provided");
    let api = use_context::<Api>().expect("Api should be provided");
    let toasts = use_context::<ToastContext>().expect("ToastContext should be provided");
    let navigate = use_navigate();

    let on_logout = UnsyncCallback::new(move |_: ()| {
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api.logout().await;
            if let Err(err) = &result {
                web_sys::console::log_1(&format!("logout request failed: {err}").into());
            }
            match logout_notice(&result) {
                Ok(message) => toasts.success(message),
                Err(message) => toasts.error(message),
            }
            // local session state is cleared either way
            navigate("/signin", Default::default());
        });
    });

    view! {
        <nav class="nav-bar">
            <A href="/">
                <span class="nav-brand">"TaskFlow"</span>
            </A>

            <div class="nav-links">
                <A href="/">"Dashboard"</A>
                <A href="/tasks">"Tasks"</A>
                <A href="/add-task">"Add Task"</A>
                <A href="/about">"About"</A>
            </div>

            <div class="nav-session">
                <Show
                    when=move || session.is_signed_in()
                    fallback=|| {
                        view! {
                            <A href="/signin">"Sign in"</A>
                            <A href="/signup">"Sign up"</A>
                        }
                    }
                >
                    <span class="nav-user">
                        {move || session.username().unwrap_or_default()}
                    </span>
                    <button class="nav-logout" on:click=move |_| on_logout.run(())>
                        "Log out"
                    </button>
                </Show>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_logout_is_not_reported_as_success() {
        assert_eq!(logout_notice(&Ok(())), Ok("Signed out"));
        assert_eq!(
            logout_notice(&Err(ApiError::Status(500))),
            Err("Sign out failed")
        );
        assert!(logout_notice(&Err(ApiError::Unauthorized)).is_err());
    }
}
