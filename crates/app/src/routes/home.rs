use client::home::{self, HomeAction, LogoutOutcome, NO_ACTIONS};
use client::SessionGate;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBriefcase, LdLogOut, LdUserPlus};
use dioxus_free_icons::Icon;
use shared_types::{success_banner, User, UserRole};
use shared_ui::{AlertDialog, Button, ButtonVariant, Card, CardContent, CardTitle};

use crate::auth::{use_api, use_session, SessionLoading, SessionState};
use crate::routes::route_for;

/// Landing page for every signed-in user.
#[component]
pub fn Home(success: Option<String>) -> Element {
    match use_session(SessionGate::HOME) {
        SessionState::Ready(user) => rsx! { Dashboard { user, success } },
        SessionState::Checking => rsx! { SessionLoading {} },
        SessionState::Redirecting => rsx! {},
    }
}

#[component]
fn Dashboard(user: User, success: Option<String>) -> Element {
    let api = use_api();
    let mut logging_out = use_signal(|| false);
    let mut alert = use_signal(|| Option::<&'static str>::None);

    let handle_logout = move |_: MouseEvent| {
        let api = api.clone();
        spawn(async move {
            logging_out.set(true);
            let outcome = home::logout(&api).await;
            logging_out.set(false);
            match outcome {
                LogoutOutcome::LoggedOut(destination) => {
                    navigator().push(route_for(&destination));
                }
                LogoutOutcome::Alert(message) => alert.set(Some(message)),
            }
        });
    };

    let banner = success_banner(success.as_deref());
    let greeting = home::greeting(&user);
    let actions = match user.role {
        UserRole::Admin | UserRole::Manager => rsx! { RoleActions { role: user.role } },
        UserRole::Worker => rsx! { WorkerNotice {} },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        div { class: "home-page",
            if let Some(message) = banner {
                div { class: "success-banner", role: "status", "{message}" }
            }

            Card { class: "home-card",
                CardTitle { "{greeting}" }
                CardContent {
                    {actions}

                    Button {
                        variant: ButtonVariant::Destructive,
                        disabled: logging_out(),
                        onclick: handle_logout,
                        Icon { icon: LdLogOut, width: 16, height: 16 }
                        if logging_out() { "Logging out..." } else { "Logout" }
                    }
                }
            }

            AlertDialog {
                open: alert().is_some(),
                message: alert().unwrap_or_default().to_string(),
                on_dismiss: move |_| alert.set(None),
            }
        }
    }
}

/// Form shortcuts for roles that can create records.
#[component]
fn RoleActions(role: UserRole) -> Element {
    rsx! {
        div { class: "home-actions",
            for action in home::actions_for(role).iter().copied() {
                ActionButton { key: "{action.label()}", action }
            }
        }
    }
}

#[component]
fn WorkerNotice() -> Element {
    rsx! {
        p { class: "home-empty", "{NO_ACTIONS}" }
    }
}

#[component]
fn ActionButton(action: HomeAction) -> Element {
    let icon = match action {
        HomeAction::AddUser => rsx! { Icon { icon: LdUserPlus, width: 16, height: 16 } },
        HomeAction::AddJob => rsx! { Icon { icon: LdBriefcase, width: 16, height: 16 } },
    };

    rsx! {
        Button {
            onclick: move |_| {
                navigator().push(route_for(&action.destination()));
            },
            {icon}
            "{action.label()}"
        }
    }
}
