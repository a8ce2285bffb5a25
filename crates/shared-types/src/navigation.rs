/// Pages a workflow can send the user to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Login,
    /// Home, optionally carrying a one-shot success banner.
    Home { success: Option<String> },
    AddUser,
    AddJob,
}

/// Banner shown on the home page after a user is created.
pub const USER_ADDED_MESSAGE: &str = "User added successfully";

impl Destination {
    pub fn home() -> Self {
        Destination::Home { success: None }
    }

    pub fn home_with_success(message: impl Into<String>) -> Self {
        Destination::Home {
            success: Some(message.into()),
        }
    }

    /// Path with the success message URL-encoded into the query string.
    pub fn path(&self) -> String {
        match self {
            Destination::Login => "/login".to_string(),
            Destination::Home { success: None } => "/home".to_string(),
            Destination::Home {
                success: Some(message),
            } => format!("/home?success={}", urlencoding::encode(message)),
            Destination::AddUser => "/add-user".to_string(),
            Destination::AddJob => "/add-job".to_string(),
        }
    }
}

/// Banner text for the home page's `success` query value.
///
/// The router has already decoded the value, so it is shown as given. Blank
/// values show no banner.
pub fn success_banner(query_value: Option<&str>) -> Option<String> {
    query_value
        .filter(|message| !message.trim().is_empty())
        .map(str::to_string)
}
