//! Session context and hooks for the UI.
//!
//! One [`SessionProvider`] sits at the root of the app and owns the live
//! [`SessionState`]. Every screen reads the same signal through
//! [`use_session`], so a login or logout anywhere is visible everywhere
//! without polling.

use dioxus::prelude::*;
use session::{Identity, Session, SessionStore};

use crate::components::Spinner;

/// Live session state shared by every screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub identity: Option<Identity>,
    /// True once the one-time read of durable storage has finished. Until
    /// then the absence of an identity means nothing.
    pub hydrated: bool,
}

/// Copyable handle to the process-wide session.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: Signal<SessionState>,
}

/// Get the current session context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

/// The durable store behind the live state: `localStorage` in the browser,
/// a process-wide in-memory record elsewhere.
fn backend() -> Session<impl SessionStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Session::new(session::LocalStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        use std::sync::OnceLock;

        use session::MemoryStore;

        static STORE: OnceLock<MemoryStore> = OnceLock::new();
        Session::new(STORE.get_or_init(MemoryStore::new).clone())
    }
}

impl SessionContext {
    pub fn state(&self) -> SessionState {
        SessionState {
            identity: self.identity(),
            hydrated: self.hydrated(),
        }
    }

    pub fn identity(&self) -> Option<Identity> {
        self.state.read().identity.clone()
    }

    pub fn hydrated(&self) -> bool {
        self.state.read().hydrated
    }

    /// Adopt the identity the backend returned and persist it. No merging:
    /// whatever session was active before is replaced.
    pub fn login(&self, identity: Identity) {
        backend().login(&identity);
        let mut state = self.state;
        state.set(SessionState {
            identity: Some(identity),
            hydrated: true,
        });
    }

    /// Clear the live and durable session. Safe to call when signed out.
    pub fn logout(&self) {
        backend().logout();
        let mut state = self.state;
        state.set(SessionState {
            identity: None,
            hydrated: true,
        });
    }
}

/// Provider component that owns the session state.
///
/// Wrap the router with it. Dependent rendering is blocked behind a spinner
/// until the durable record has been read, so no screen ever mistakes
/// "not hydrated yet" for "signed out".
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut state = use_signal(SessionState::default);
    use_context_provider(|| SessionContext { state });

    // One-time hydration from durable storage.
    use_effect(move || {
        let identity = backend().hydrate();
        state.set(SessionState {
            identity,
            hydrated: true,
        });
    });

    if !state.read().hydrated {
        return rsx! {
            div { class: "page-loading", Spinner {} }
        };
    }

    rsx! {
        {children}
    }
}
