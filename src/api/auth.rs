//! Auth Endpoints
//!
//! dj-rest-auth session management: login, logout, registration, the silent
//! refresh probe, and the current-user fetch.

use serde::Serialize;

use crate::error::ApiError;
use crate::models::{LoginResponse, User};
use crate::session;

use super::Api;

#[derive(Serialize)]
struct LoginArgs<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegistrationArgs<'a> {
    username: &'a str,
    password1: &'a str,
    password2: &'a str,
}

impl Api {
    /// Log in and mark the session as refresh-capable. The caller is
    /// responsible for populating the current-user slot from the response.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self
            .post_json("/dj-rest-auth/login/", &LoginArgs { username, password })
            .await?;
        session::mark_session();
        Ok(response)
    }

    /// Log out server-side, then drop all local session state
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self.post_empty("/dj-rest-auth/logout/").await;
        self.session().clear();
        session::clear_marker();
        result
    }

    pub async fn register(
        &self,
        username: &str,
        password1: &str,
        password2: &str,
    ) -> Result<(), ApiError> {
        let _ack: serde_json::Value = self
            .post_json(
                "/dj-rest-auth/registration/",
                &RegistrationArgs {
                    username,
                    password1,
                    password2,
                },
            )
            .await?;
        Ok(())
    }

    /// Identity of the signed-in user, fetched once at startup
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get_json("/dj-rest-auth/user/").await
    }

    /// Whether a silent refresh currently succeeds. Used by the redirect
    /// gates on the auth pages; skips the network round trip entirely when
    /// no session was ever established here.
    pub async fn probe_session(&self) -> bool {
        if !session::has_refresh_marker() {
            return false;
        }
        self.refresh().await.is_ok()
    }
}
