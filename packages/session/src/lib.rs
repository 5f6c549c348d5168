pub mod identity;

mod store;
pub use store::{MemoryStore, SessionStore};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::{LocalStore, SESSION_KEY};

mod session;
pub use identity::{Identity, Role};
pub use session::Session;
