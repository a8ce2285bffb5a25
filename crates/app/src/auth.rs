use client::{GateOutcome, HttpApi, SessionGate};
use dioxus::prelude::*;
use shared_types::User;

use crate::routes::route_for;

/// Hook to access the shared API client.
pub fn use_api() -> HttpApi {
    use_context::<HttpApi>()
}

/// Where a gated page stands after its mount-time session check.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Checking,
    Redirecting,
    Ready(User),
}

/// Run the session check for a page once, on mount.
///
/// A rejected or failed check navigates to the gate's destination and the
/// page renders nothing.
pub fn use_session(gate: SessionGate) -> SessionState {
    let api = use_api();
    let check = use_resource(move || {
        let api = api.clone();
        let gate = gate.clone();
        async move { gate.check(&api).await }
    });

    let outcome = check.read().as_ref().cloned();
    match outcome {
        None => SessionState::Checking,
        Some(GateOutcome::Granted(user)) => SessionState::Ready(user),
        Some(GateOutcome::Redirect(destination)) => {
            navigator().replace(route_for(&destination));
            SessionState::Redirecting
        }
    }
}

/// Placeholder shown while the session check is in flight.
#[component]
pub fn SessionLoading() -> Element {
    rsx! {
        div { class: "session-loading",
            p { "Loading..." }
        }
    }
}
