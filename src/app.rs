//! TaskFlow Frontend App
//!
//! Root component: router, the broadcast slots (current user, categories),
//! the shared API handle, and the startup effects that populate them.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::path;

use crate::api::Api;
use crate::components::{ConfirmContext, ConfirmDialog, NavBar, ToastContext, ToastHost};
use crate::context::{CategoriesContext, SessionContext};
use crate::models::User;
use crate::pages::{
    AboutPage, AddTaskPage, DashboardPage, EditTaskPage, NotFoundPage, SignInPage, SignUpPage,
    TaskDetailPage, TasksPage,
};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <AppShell />
        </Router>
    }
}

/// Everything that needs router context: the slots, the API handle with its
/// sign-in redirect, and the route table.
#[component]
fn AppShell() -> impl IntoView {
    let (current_user, set_current_user) = signal(None::<User>);
    let session = SessionContext::new((current_user, set_current_user));
    provide_context(session);

    let navigate = use_navigate();
    let on_session_expired =
        UnsyncCallback::new(move |_: ()| navigate("/signin", Default::default()));
    let api = Api::new(session, on_session_expired);
    provide_context(api);

    let categories = CategoriesContext::new();
    provide_context(categories);
    provide_context(ToastContext::new());
    provide_context(ConfirmContext::new());

    // Restore the user slot when a cookie session survived the reload
    Effect::new(move |_| {
        spawn_local(async move {
            match api.current_user().await {
                Ok(user) => session.set_user(user),
                Err(err) => {
                    web_sys::console::log_1(&format!("no active session: {err}").into());
                }
            }
        });
    });

    // Categories follow the user slot: fetched on the empty -> populated
    // transition (login), and again whenever a mutation bumps the reload
    // version. Other user-slot changes leave the slot alone.
    Effect::new(move |prev: Option<(bool, u32)>| {
        let version = categories.reload_version.get();
        let signed_in = current_user.with(|user| user.is_some());
        let login_transition = signed_in && !matches!(prev, Some((true, _)));
        let reload_requested = matches!(prev, Some((_, v)) if v != version);
        if login_transition || reload_requested {
            spawn_local(async move {
                match api.list_categories().await {
                    Ok(page) => categories.set(page),
                    Err(err) => {
                        web_sys::console::log_1(
                            &format!("failed to load categories: {err}").into(),
                        );
                    }
                }
            });
        }
        (signed_in, version)
    });

    view! {
        <NavBar />
        <main class="main-container">
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=DashboardPage />
                <Route path=path!("/tasks") view=TasksPage />
                <Route path=path!("/signin") view=SignInPage />
                <Route path=path!("/signup") view=SignUpPage />
                <Route path=path!("/about") view=AboutPage />
                <Route path=path!("/add-task") view=AddTaskPage />
                <Route path=path!("/task-detail/:id") view=TaskDetailPage />
                <Route path=path!("/tasks/:id/edit") view=EditTaskPage />
            </Routes>
        </main>
        <ToastHost />
        <ConfirmDialog />
    }
}
