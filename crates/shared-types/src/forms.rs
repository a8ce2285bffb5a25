//! Transient form state for the login, add-user and add-job pages, with the
//! local validation that runs before any request is issued.

use chrono::{Days, NaiveDate};

use crate::{
    Branch, CreateJobRequest, CreateUserRequest, JobStatus, LoginRequest, UserRole,
    ValidationError, MAX_DESCRIPTION_WORDS,
};

/// Date format used by `<input type="date">` and the API.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Allowed predicted durations, in days.
pub const DURATION_DAYS: std::ops::RangeInclusive<u8> = 1..=7;

/// Allowed staff counts for a job.
pub const STAFF_COUNTS: &[&str] = &["1", "2"];

/// Login credentials as typed. The backend decides what is required.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// Add-user form values. `role` and `branch` hold select values, empty until
/// chosen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    pub first_name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub branch: String,
}

impl UserForm {
    /// The branch picker is visible unless the admin role is selected.
    pub fn shows_branch(&self) -> bool {
        UserRole::parse(&self.role) != Some(UserRole::Admin)
    }

    /// Validate from scratch and build the request body.
    pub fn validate(&self) -> Result<CreateUserRequest, ValidationError> {
        let required = [
            &self.first_name,
            &self.surname,
            &self.email,
            &self.password,
            &self.role,
        ];
        if required.iter().any(|v| v.is_empty()) {
            return Err(ValidationError::MissingFields);
        }
        let role = UserRole::parse(&self.role).ok_or(ValidationError::MissingFields)?;

        let branch_id = if role.requires_branch() {
            let branch = self
                .branch
                .parse::<i64>()
                .ok()
                .and_then(Branch::from_id)
                .ok_or(ValidationError::BranchRequired)?;
            Some(branch.id)
        } else {
            None
        };

        Ok(CreateUserRequest {
            first_name: self.first_name.clone(),
            last_name: self.surname.clone(),
            email: self.email.clone(),
            password_hash: self.password.clone(),
            role,
            branch_id,
        })
    }
}

/// Add-job form values as typed/selected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobForm {
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub predicted_duration: String,
    /// Staff count, "1" or "2".
    pub notes: String,
}

impl JobForm {
    fn parsed_start(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.start_date, DATE_FORMAT).ok()
    }

    fn parsed_duration(&self) -> Option<u8> {
        self.predicted_duration
            .parse::<u8>()
            .ok()
            .filter(|d| DURATION_DAYS.contains(d))
    }

    /// Derived end date, present once both start date and duration are set.
    pub fn end_date(&self) -> Option<NaiveDate> {
        end_date(self.parsed_start()?, self.parsed_duration()?)
    }

    /// End date formatted for display, empty when not yet derivable.
    pub fn end_date_display(&self) -> String {
        self.end_date()
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_default()
    }

    /// Validate from scratch and build the request body.
    pub fn validate(&self) -> Result<CreateJobRequest, ValidationError> {
        let required = [
            &self.title,
            &self.description,
            &self.start_date,
            &self.predicted_duration,
            &self.notes,
        ];
        if required.iter().any(|v| v.is_empty()) {
            return Err(ValidationError::MissingFields);
        }

        if word_count(&self.description) > MAX_DESCRIPTION_WORDS {
            return Err(ValidationError::DescriptionTooLong);
        }

        let start_date = self.parsed_start().ok_or(ValidationError::MissingFields)?;
        let predicted_duration = self.parsed_duration().ok_or(ValidationError::MissingFields)?;
        let end_date =
            end_date(start_date, predicted_duration).ok_or(ValidationError::MissingFields)?;

        Ok(CreateJobRequest {
            title: self.title.clone(),
            description: self.description.clone(),
            start_date,
            predicted_duration,
            end_date,
            notes: self.notes.clone(),
            status: JobStatus::Pending,
        })
    }
}

/// Number of whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// `start + days` calendar days. `None` only past the end of the calendar.
pub fn end_date(start: NaiveDate, days: u8) -> Option<NaiveDate> {
    start.checked_add_days(Days::new(u64::from(days)))
}
