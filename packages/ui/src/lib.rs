//! Shared UI for the BlogSite client: the session provider, the route guard,
//! and the building blocks the screens have in common.

mod auth;
pub use auth::{use_session, SessionContext, SessionProvider, SessionState};

mod guard;
pub use guard::{GuardDecision, RequireSession};

mod crud;
pub use crud::EditorMode;

mod comments;
pub use comments::CommentSection;

mod components;
pub use components::{Alert, ModalOverlay, Spinner};
