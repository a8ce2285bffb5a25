use shared_types::{Destination, LoginForm};

use crate::api::Api;
use crate::outcome::SubmitOutcome;

/// Shown when the backend rejects a login without saying why.
pub const LOGIN_FAILED: &str = "Login failed";

/// Submit credentials as typed. Field presence is left to the backend.
pub async fn submit<A: Api>(api: &A, form: &LoginForm) -> SubmitOutcome {
    match api.login(&form.to_request()).await {
        Ok(()) => {
            tracing::info!(email = %form.email, "Login accepted");
            SubmitOutcome::Navigate(Destination::home())
        }
        Err(err) => SubmitOutcome::failed(&err, LOGIN_FAILED),
    }
}
