//! Auth Redirect Gate
//!
//! Pages that only make sense for one authentication state probe the
//! session on mount and navigate away otherwise: the auth forms bounce
//! signed-in users to the dashboard, and protected forms bounce anonymous
//! visitors to sign-in.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::Api;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectWhen {
    /// Redirect to the dashboard when a session is alive
    SignedIn,
    /// Redirect to sign-in when no session survives a refresh probe
    SignedOut,
}

pub fn use_auth_redirect(gate: RedirectWhen) {
    let api = use_context::<Api>().expect("Api should be provided");
    let navigate = use_navigate();

    Effect::new(move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            let authenticated = api.probe_session().await;
            match gate {
                RedirectWhen::SignedIn if authenticated => {
                    navigate("/", Default::default());
                }
                RedirectWhen::SignedOut if !authenticated => {
                    navigate("/signin", Default::default());
                }
                _ => {}
            }
        });
    });
}
