//! Toast Notifications
//!
//! Transient success/error messages. The slot lives in context so any view
//! can push; the host renders the stack and each toast dismisses itself
//! after a few seconds.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.with_value(|v| *v);
        self.next_id.update_value(|v| *v += 1);

        self.toasts.update(|toasts| {
            toasts.push(Toast { id, kind, message });
        });

        let toasts = self.toasts;
        Timeout::new(DISMISS_AFTER_MS, move || {
            toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
        })
        .forget();
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
    }

    fn list(&self) -> ReadSignal<Vec<Toast>> {
        self.toasts.read_only()
    }
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the toast stack in a fixed corner
#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_context::<ToastContext>().expect("ToastContext should be provided");
    let toasts = ctx.list();

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let class = match toast.kind {
                            ToastKind::Success => "toast toast-success",
                            ToastKind::Error => "toast toast-error",
                        };
                        view! {
                            <div class=class on:click=move |_| ctx.dismiss(id)>
                                {toast.message}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
