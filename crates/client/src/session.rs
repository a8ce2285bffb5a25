use shared_types::{Destination, User, UserRole, ALL_ROLES};

use crate::api::Api;

/// Result of the mount-time session check.
#[derive(Debug, Clone, PartialEq)]
pub enum GateOutcome {
    /// Render the page for this user.
    Granted(User),
    /// Render nothing and go here instead.
    Redirect(Destination),
}

/// Per-page access rule: which roles may see the page, and where everyone
/// else is sent.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionGate {
    pub allowed: &'static [UserRole],
    pub on_reject: Destination,
}

impl SessionGate {
    /// Any signed-in user; strangers go to the login page.
    pub const HOME: SessionGate = SessionGate {
        allowed: ALL_ROLES,
        on_reject: Destination::Login,
    };

    pub const ADD_USER: SessionGate = SessionGate {
        allowed: &[UserRole::Admin],
        on_reject: Destination::Home { success: None },
    };

    pub const ADD_JOB: SessionGate = SessionGate {
        allowed: &[UserRole::Admin, UserRole::Manager],
        on_reject: Destination::Home { success: None },
    };

    pub fn permits(&self, role: UserRole) -> bool {
        self.allowed.contains(&role)
    }

    /// One `GET /api/auth/me`, no retry. Any failure redirects.
    pub async fn check<A: Api>(&self, api: &A) -> GateOutcome {
        match api.current_user().await {
            Ok(user) if self.permits(user.role) => {
                tracing::debug!(user_id = user.id, role = user.role.as_str(), "Session accepted");
                GateOutcome::Granted(user)
            }
            Ok(user) => {
                tracing::info!(
                    role = user.role.as_str(),
                    redirect = %self.on_reject.path(),
                    "Role not permitted on this page"
                );
                GateOutcome::Redirect(self.on_reject.clone())
            }
            Err(err) => {
                tracing::info!(error = %err, redirect = %self.on_reject.path(), "Session check failed");
                GateOutcome::Redirect(self.on_reject.clone())
            }
        }
    }
}
