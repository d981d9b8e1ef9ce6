//! Form Helpers

use leptos::prelude::*;

use crate::error::FieldErrors;

/// Inline alerts for one field's validation messages
pub fn field_alerts(errors: RwSignal<FieldErrors>, field: &'static str) -> impl IntoView {
    move || {
        errors
            .with(|e| e.get(field).cloned().unwrap_or_default())
            .into_iter()
            .map(|message| view! { <p class="form-alert">{message}</p> })
            .collect_view()
    }
}
