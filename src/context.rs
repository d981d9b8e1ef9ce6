//! Application Context
//!
//! The two broadcast slots shared across otherwise independent views:
//! the current user and the category list. Each slot has a single writer
//! (the app shell) and hands consumers read-only signals; writers stay
//! private behind the methods below.

use leptos::prelude::*;

use crate::models::{Category, Paged, User};

/// Current-user slot. Populated once at startup (if a session exists),
/// replaced on login, cleared on logout or session teardown.
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Authenticated user, `None` until the startup fetch resolves - read
    pub current_user: ReadSignal<Option<User>>,
    set_current_user: WriteSignal<Option<User>>,
}

impl SessionContext {
    pub fn new(slot: (ReadSignal<Option<User>>, WriteSignal<Option<User>>)) -> Self {
        Self {
            current_user: slot.0,
            set_current_user: slot.1,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.current_user.with(|user| user.is_some())
    }

    pub fn username(&self) -> Option<String> {
        self.current_user
            .with(|user| user.as_ref().map(|u| u.username.clone()))
    }

    /// Replace the slot after login or the startup fetch
    pub fn set_user(&self, user: User) {
        self.set_current_user.set(Some(user));
    }

    /// Empty the slot. Reserved for sign-out and session teardown.
    pub fn clear(&self) {
        self.set_current_user.set(None);
    }
}

/// Category slot. Fetched by the app shell when the user slot transitions
/// into an authenticated state; mutating views call `reload()` after a
/// create or delete instead of patching in place.
#[derive(Clone, Copy)]
pub struct CategoriesContext {
    categories: RwSignal<Paged<Category>>,
    loading_more: RwSignal<bool>,
    /// Bumped to request a refetch - read
    pub reload_version: ReadSignal<u32>,
    set_reload_version: WriteSignal<u32>,
}

impl CategoriesContext {
    pub fn new() -> Self {
        let (reload_version, set_reload_version) = signal(0u32);
        Self {
            categories: RwSignal::new(Paged::default()),
            loading_more: RwSignal::new(false),
            reload_version,
            set_reload_version,
        }
    }

    /// Read-only handle for consumers
    pub fn list(&self) -> ReadSignal<Paged<Category>> {
        self.categories.read_only()
    }

    /// Resolve a category title by id, for task views
    pub fn title_of(&self, id: Option<u32>) -> Option<String> {
        let id = id?;
        self.categories.with(|page| {
            page.results
                .iter()
                .find(|category| category.id == id)
                .map(|category| category.title.clone())
        })
    }

    /// Replace the whole slot with a freshly fetched first page
    pub fn set(&self, page: Paged<Category>) {
        self.categories.set(page);
    }

    /// Ask the owning provider to refetch the visible collection
    pub fn reload(&self) {
        self.set_reload_version.update(|v| *v += 1);
    }

    /// Grow the slot by one continuation page
    pub async fn load_more(&self, api: crate::api::Api) {
        crate::pagination::fetch_more(&api, self.categories, self.loading_more).await;
    }
}

impl Default for CategoriesContext {
    fn default() -> Self {
        Self::new()
    }
}
