//! Confirmation Dialog
//!
//! Modal confirmation decoupled from the toast subsystem. Callers await the
//! returned future, which resolves with the user's choice; dropping the
//! dialog without a choice resolves as a cancel.

use futures::channel::oneshot;
use leptos::prelude::*;

struct PendingConfirm {
    message: String,
    respond: Option<oneshot::Sender<bool>>,
}

#[derive(Clone, Copy)]
pub struct ConfirmContext {
    pending: RwSignal<Option<PendingConfirm>>,
}

impl ConfirmContext {
    pub fn new() -> Self {
        Self {
            pending: RwSignal::new(None),
        }
    }

    /// Open the dialog. Resolves `true` on confirm, `false` on cancel;
    /// a dropped sender (dialog replaced) reads as cancel via `Canceled`.
    pub fn confirm(&self, message: impl Into<String>) -> oneshot::Receiver<bool> {
        let (tx, rx) = oneshot::channel();
        self.pending.set(Some(PendingConfirm {
            message: message.into(),
            respond: Some(tx),
        }));
        rx
    }

    fn message(&self) -> Option<String> {
        self.pending
            .with(|pending| pending.as_ref().map(|p| p.message.clone()))
    }

    fn resolve(&self, choice: bool) {
        self.pending.update(|slot| {
            if let Some(pending) = slot.as_mut() {
                if let Some(tx) = pending.respond.take() {
                    let _ = tx.send(choice);
                }
            }
            *slot = None;
        });
    }
}

impl Default for ConfirmContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the pending confirmation, if any
#[component]
pub fn ConfirmDialog() -> impl IntoView {
    let ctx = use_context::<ConfirmContext>().expect("ConfirmContext should be provided");

    view! {
        {move || {
            ctx.message().map(|message| {
                view! {
                    <div class="confirm-backdrop">
                        <div class="confirm-dialog">
                            <p class="confirm-message">{message}</p>
                            <div class="confirm-actions">
                                <button class="confirm-yes" on:click=move |_| ctx.resolve(true)>
                                    "Yes, Delete"
                                </button>
                                <button class="confirm-cancel" on:click=move |_| ctx.resolve(false)>
                                    "Cancel"
                                </button>
                            </div>
                        </div>
                    </div>
                }
            })
        }}
    }
}
