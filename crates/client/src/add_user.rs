use shared_types::{Destination, UserForm, USER_ADDED_MESSAGE};

use crate::api::Api;
use crate::outcome::SubmitOutcome;

pub const CREATE_USER_FAILED: &str = "Failed to create user";

/// Validate, then create the user. Validation failures issue no request.
pub async fn submit<A: Api>(api: &A, form: &UserForm) -> SubmitOutcome {
    let request = match form.validate() {
        Ok(request) => request,
        Err(err) => return SubmitOutcome::invalid(err),
    };

    match api.create_user(&request).await {
        Ok(()) => {
            tracing::info!(email = %request.email, role = request.role.as_str(), "User created");
            SubmitOutcome::Navigate(Destination::home_with_success(USER_ADDED_MESSAGE))
        }
        Err(err) => SubmitOutcome::failed(&err, CREATE_USER_FAILED),
    }
}
