use shared_types::{Destination, JobForm};

use crate::api::Api;
use crate::outcome::SubmitOutcome;

pub const CREATE_JOB_FAILED: &str = "Failed to create job";

/// Validate, derive the end date, then create the job as `pending`.
pub async fn submit<A: Api>(api: &A, form: &JobForm) -> SubmitOutcome {
    let request = match form.validate() {
        Ok(request) => request,
        Err(err) => return SubmitOutcome::invalid(err),
    };

    match api.create_job(&request).await {
        Ok(()) => {
            tracing::info!(
                title = %request.title,
                start_date = %request.start_date,
                end_date = %request.end_date,
                "Job created"
            );
            SubmitOutcome::Navigate(Destination::home())
        }
        Err(err) => SubmitOutcome::failed(&err, CREATE_JOB_FAILED),
    }
}
