use shared_types::{Destination, User, UserRole};

use crate::api::Api;

pub const LOGOUT_FAILED: &str = "Logout failed";
pub const LOGOUT_NETWORK_ERROR: &str = "Network error during logout";
pub const NO_ACTIONS: &str = "No actions available";

/// Buttons offered on the home screen besides Logout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAction {
    AddUser,
    AddJob,
}

impl HomeAction {
    pub fn label(&self) -> &'static str {
        match self {
            HomeAction::AddUser => "Add User",
            HomeAction::AddJob => "Add Job",
        }
    }

    pub fn destination(&self) -> Destination {
        match self {
            HomeAction::AddUser => Destination::AddUser,
            HomeAction::AddJob => Destination::AddJob,
        }
    }
}

/// Actions visible to each role.
pub fn actions_for(role: UserRole) -> &'static [HomeAction] {
    match role {
        UserRole::Admin => &[HomeAction::AddUser, HomeAction::AddJob],
        UserRole::Manager => &[HomeAction::AddJob],
        UserRole::Worker => &[],
    }
}

pub fn greeting(user: &User) -> String {
    format!("Welcome, {}", user.first_name)
}

/// Result of pressing Logout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoutOutcome {
    LoggedOut(Destination),
    /// Stay on the page and raise a blocking alert with this text.
    Alert(&'static str),
}

/// One `POST /api/auth/logout`. Server rejection and transport failure raise
/// different alerts.
pub async fn logout<A: Api>(api: &A) -> LogoutOutcome {
    match api.logout().await {
        Ok(()) => {
            tracing::info!("Logged out");
            LogoutOutcome::LoggedOut(Destination::Login)
        }
        Err(err) if err.is_transport() => {
            tracing::warn!(error = %err, "Logout request did not complete");
            LogoutOutcome::Alert(LOGOUT_NETWORK_ERROR)
        }
        Err(err) => {
            tracing::warn!(error = %err, "Logout rejected");
            LogoutOutcome::Alert(LOGOUT_FAILED)
        }
    }
}
