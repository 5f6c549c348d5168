use std::sync::{Arc, Mutex};

/// Durable storage for the single serialized session record.
///
/// Implementations hold at most one value and never fail loudly: a broken or
/// unavailable backend reads as "nothing stored".
pub trait SessionStore {
    fn load(&self) -> Option<String>;
    fn save(&self, raw: &str);
    fn clear(&self);
}

/// In-memory SessionStore for testing and non-web fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    record: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.record.lock().unwrap().clone()
    }

    fn save(&self, raw: &str) {
        *self.record.lock().unwrap() = Some(raw.to_string());
    }

    fn clear(&self) {
        *self.record.lock().unwrap() = None;
    }
}
