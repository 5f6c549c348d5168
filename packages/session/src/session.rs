use crate::identity::Identity;
use crate::store::SessionStore;

/// Client-side session lifecycle over a storage backend.
///
/// Owns the durable copy of the authenticated identity. Every operation is
/// infallible from the caller's perspective: storage failures and corrupt
/// records degrade to the logged-out state instead of surfacing an error.
#[derive(Clone, Debug, Default)]
pub struct Session<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Restore the identity persisted by a previous visit.
    ///
    /// A record that no longer parses is removed, so the next hydration
    /// starts from a clean logged-out state.
    pub fn hydrate(&self) -> Option<Identity> {
        let raw = self.store.load()?;
        match serde_json::from_str(&raw) {
            Ok(identity) => Some(identity),
            Err(err) => {
                tracing::warn!("discarding unreadable session record: {err}");
                self.store.clear();
                None
            }
        }
    }

    /// Replace the persisted identity unconditionally.
    pub fn login(&self, identity: &Identity) {
        match serde_json::to_string(identity) {
            Ok(raw) => self.store.save(&raw),
            Err(err) => tracing::error!("failed to serialize session record: {err}"),
        }
    }

    /// Drop the persisted identity. A no-op when nothing is stored.
    pub fn logout(&self) {
        self.store.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Role;
    use crate::store::{MemoryStore, SessionStore};

    fn alice() -> Identity {
        Identity {
            id: 1,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            role: Role::Admin,
        }
    }

    #[test]
    fn hydrate_with_nothing_stored() {
        let session = Session::new(MemoryStore::new());
        assert!(session.hydrate().is_none());
    }

    #[test]
    fn login_then_hydrate_round_trips() {
        let store = MemoryStore::new();
        let session = Session::new(store.clone());

        session.login(&alice());
        assert_eq!(session.hydrate(), Some(alice()));

        // A fresh session over the same storage sees the same identity,
        // the way a page reload would.
        let reloaded = Session::new(store);
        assert_eq!(reloaded.hydrate(), Some(alice()));
    }

    #[test]
    fn login_replaces_previous_identity() {
        let session = Session::new(MemoryStore::new());

        session.login(&alice());
        let bob = Identity {
            id: 2,
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
            role: Role::User,
        };
        session.login(&bob);

        assert_eq!(session.hydrate(), Some(bob));
    }

    #[test]
    fn record_without_role_reads_as_user() {
        let store = MemoryStore::new();
        store.save(r#"{"id":7,"username":"carol","email":"carol@example.com"}"#);

        let session = Session::new(store);
        let identity = session.hydrate().expect("record should parse");
        assert_eq!(identity.role, Role::User);
    }

    #[test]
    fn corrupt_record_hydrates_logged_out_and_is_discarded() {
        let store = MemoryStore::new();
        store.save(r#"{"id":1,"user"#);

        let session = Session::new(store.clone());
        assert!(session.hydrate().is_none());
        // The broken record is gone from storage, not just ignored.
        assert!(store.load().is_none());
        assert!(session.hydrate().is_none());
    }

    #[test]
    fn logout_clears_the_durable_record() {
        let store = MemoryStore::new();
        let session = Session::new(store.clone());

        session.login(&alice());
        session.logout();

        assert!(store.load().is_none());
        assert!(Session::new(store).hydrate().is_none());
    }

    #[test]
    fn logout_without_a_session_is_a_noop() {
        let session = Session::new(MemoryStore::new());
        session.logout();
        session.logout();
        assert!(session.hydrate().is_none());
    }
}
