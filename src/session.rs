//! Session Marker Bookkeeping
//!
//! The only state persisted across reloads: a localStorage key recording
//! that a refresh-capable session was established. Its presence is a cheap
//! local pre-check before attempting a silent token refresh; the token
//! itself is never stored client-side.

use gloo_storage::{LocalStorage, Storage};

const REFRESH_MARKER_KEY: &str = "refreshTokenTimestamp";

/// Record that a refresh-capable session exists. Called on successful login.
pub fn mark_session() {
    let _ = LocalStorage::set(REFRESH_MARKER_KEY, js_sys::Date::now());
}

/// Whether a silent refresh is worth attempting at all
pub fn has_refresh_marker() -> bool {
    LocalStorage::get::<f64>(REFRESH_MARKER_KEY).is_ok()
}

/// Drop the marker. Called on logout and on failed refresh.
pub fn clear_marker() {
    LocalStorage::delete(REFRESH_MARKER_KEY);
}
