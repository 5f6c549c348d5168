//! Client-side gating for the admin screens.
//!
//! This is a UX convenience, not a security boundary: it hides screens from
//! signed-out visitors, while real access control stays with the backend.

use dioxus::prelude::*;
use session::Identity;

use crate::auth::{use_session, SessionState};
use crate::components::Spinner;

/// What a protected screen should do for the current session state.
#[derive(Clone, Debug, PartialEq)]
pub enum GuardDecision {
    /// Durable storage has not been read yet; show a blocking indicator.
    Checking,
    /// Hydration finished with no identity; leave for the public entry.
    Redirect,
    /// A session is active; render the screen and start its fetches.
    Authorized(Identity),
}

impl GuardDecision {
    pub fn evaluate(state: &SessionState) -> Self {
        if !state.hydrated {
            return GuardDecision::Checking;
        }
        match &state.identity {
            Some(identity) => GuardDecision::Authorized(identity.clone()),
            None => GuardDecision::Redirect,
        }
    }
}

/// Wrapper applied by every protected screen.
///
/// Children mount only once the session is hydrated and an identity is
/// present, so their data fetches never run for signed-out visitors. The
/// decision is re-evaluated whenever the session changes: logging out in one
/// part of the UI redirects every mounted protected screen.
#[component]
pub fn RequireSession(children: Element) -> Element {
    let session = use_session();
    let nav = use_navigator();

    use_effect(move || {
        if matches!(
            GuardDecision::evaluate(&session.state()),
            GuardDecision::Redirect
        ) {
            nav.replace("/");
        }
    });

    match GuardDecision::evaluate(&session.state()) {
        GuardDecision::Checking => rsx! {
            div { class: "page-loading", Spinner {} }
        },
        // The effect above issues the navigation; render nothing meanwhile.
        GuardDecision::Redirect => rsx! {},
        GuardDecision::Authorized(_) => rsx! {
            {children}
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use session::Role;

    fn identity() -> Identity {
        Identity {
            id: 1,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            role: Role::Admin,
        }
    }

    #[test]
    fn waits_while_not_hydrated() {
        // Even with no identity, nothing may be decided before hydration.
        let state = SessionState {
            identity: None,
            hydrated: false,
        };
        assert_eq!(GuardDecision::evaluate(&state), GuardDecision::Checking);
    }

    #[test]
    fn redirects_once_hydrated_without_identity() {
        let state = SessionState {
            identity: None,
            hydrated: true,
        };
        assert_eq!(GuardDecision::evaluate(&state), GuardDecision::Redirect);
    }

    #[test]
    fn authorizes_once_hydrated_with_identity() {
        let state = SessionState {
            identity: Some(identity()),
            hydrated: true,
        };
        assert_eq!(
            GuardDecision::evaluate(&state),
            GuardDecision::Authorized(identity())
        );
    }

    #[test]
    fn logout_while_mounted_flips_to_redirect() {
        let mut state = SessionState {
            identity: Some(identity()),
            hydrated: true,
        };
        assert!(matches!(
            GuardDecision::evaluate(&state),
            GuardDecision::Authorized(_)
        ));

        state.identity = None;
        assert_eq!(GuardDecision::evaluate(&state), GuardDecision::Redirect);
    }
}
