use serde::{Deserialize, Serialize};

/// Staff role controlling which actions and forms are visible.
///
/// - `Admin`: can add users and jobs.
/// - `Manager`: can add jobs.
/// - `Worker`: read-only home screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Manager,
    Worker,
}

/// Every role, in the order the role picker lists them.
pub const ALL_ROLES: &[UserRole] = &[UserRole::Admin, UserRole::Manager, UserRole::Worker];

impl UserRole {
    /// Parse the wire/form value. Unknown or empty values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(UserRole::Admin),
            "manager" => Some(UserRole::Manager),
            "worker" => Some(UserRole::Worker),
            _ => None,
        }
    }

    /// Lowercase string used on the wire and as the select value.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Manager => "manager",
            UserRole::Worker => "worker",
        }
    }

    /// Human-readable label for pickers.
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Manager => "Manager",
            UserRole::Worker => "Worker",
        }
    }

    /// Non-admin staff must belong to a branch.
    pub fn requires_branch(&self) -> bool {
        !matches!(self, UserRole::Admin)
    }
}

/// The authenticated user as returned by `GET /api/auth/me`.
///
/// Only `role` is mandatory; the session endpoint is allowed to return a
/// partial profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub branch_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// A company branch. The front-end only knows the fixed set in [`Branch::all`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Branch {
    pub id: i64,
    pub name: String,
}

/// Fixed branch directory: `(id, name)`.
const BRANCHES: &[(i64, &str)] = &[(1, "London"), (2, "Manchester"), (3, "Cardiff")];

impl Branch {
    /// All known branches in picker order.
    pub fn all() -> Vec<Branch> {
        BRANCHES
            .iter()
            .map(|(id, name)| Branch {
                id: *id,
                name: (*name).to_string(),
            })
            .collect()
    }

    /// Look up a known branch by id.
    pub fn from_id(id: i64) -> Option<Branch> {
        BRANCHES
            .iter()
            .find(|(known, _)| *known == id)
            .map(|(id, name)| Branch {
                id: *id,
                name: (*name).to_string(),
            })
    }
}

/// Status a job is created with. The backend owns later transitions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    #[default]
    Pending,
}
