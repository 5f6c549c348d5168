//! # localStorage session record — browser-side persistence
//!
//! [`LocalStore`] is the [`SessionStore`] implementation used on the **web
//! platform**. It keeps the serialized identity in the browser's
//! `localStorage` under the fixed [`SESSION_KEY`], so a login survives page
//! reloads within the same browser.
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors (returning `None` for reads,
//! doing nothing for writes). A browser with storage disabled degrades to
//! "logged out on every visit" rather than crashing the app. The key is owned
//! exclusively by this module; no other component touches it.

use crate::store::SessionStore;

/// The `localStorage` key holding the serialized identity.
pub const SESSION_KEY: &str = "user";

/// localStorage-backed SessionStore for the web platform.
///
/// A zero-size struct; the backing storage is looked up from the window on
/// every operation, which is how the browser expects it to be used.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for LocalStore {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(SESSION_KEY).ok().flatten()
    }

    fn save(&self, raw: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(SESSION_KEY, raw);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}
