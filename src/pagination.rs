//! Pagination Accumulator
//!
//! Grows a paged collection as the consumer asks for more, preserving the
//! dedup and ordering invariants of `Paged::merge_page`. A per-collection
//! busy flag serializes calls so a double trigger cannot fetch the same
//! continuation twice.

use leptos::prelude::*;
use serde::de::DeserializeOwned;

use crate::api::Api;
use crate::models::{HasId, Paged};

/// Fetch the collection's continuation page and fold it in.
///
/// No-op when the collection is exhausted or a fetch is already in flight.
/// Failures are logged and leave the collection untouched, so the caller
/// sees this as fail-safe and idempotent.
pub async fn fetch_more<T>(api: &Api, collection: RwSignal<Paged<T>>, busy: RwSignal<bool>)
where
    T: HasId + DeserializeOwned + Clone + PartialEq + Send + Sync + 'static,
{
    if busy.get_untracked() {
        return;
    }
    let Some(next) = collection.with_untracked(|c| c.next.clone()) else {
        return;
    };

    busy.set(true);
    match api.get_absolute::<Paged<T>>(&next).await {
        Ok(page) => collection.update(|c| c.merge_page(page)),
        Err(err) => {
            web_sys::console::log_1(&format!("failed to load next page: {err}").into());
        }
    }
    busy.set(false);
}
