pub mod add_job;
pub mod add_user;
pub mod home;
pub mod login;
pub mod not_found;

use dioxus::prelude::*;
use shared_types::Destination;

use add_job::AddJob;
use add_user::AddUser;
use home::Home;
use login::Login;
use not_found::NotFound;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Home { success: None })]
    #[route("/login")]
    Login {},
    #[route("/home?:success")]
    Home { success: Option<String> },
    #[route("/add-user")]
    AddUser {},
    #[route("/add-job")]
    AddJob {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Map a workflow destination onto the router.
pub fn route_for(destination: &Destination) -> Route {
    match destination {
        Destination::Login => Route::Login {},
        Destination::Home { success } => Route::Home {
            success: success.clone(),
        },
        Destination::AddUser => Route::AddUser {},
        Destination::AddJob => Route::AddJob {},
    }
}
