use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{JobStatus, User, UserRole};

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /api/users`.
///
/// `password_hash` carries the plaintext password; hashing happens on the
/// backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub branch_id: Option<i64>,
}

/// Request body for `POST /api/jobs`. The backend stores `end_date` as sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateJobRequest {
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub predicted_duration: u8,
    pub end_date: NaiveDate,
    pub notes: String,
    pub status: JobStatus,
}

/// Response body of `GET /api/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionResponse {
    pub user: User,
}

/// Error body returned by the backend on non-ok responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
