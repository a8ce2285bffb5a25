use client::{login, FormPhase, SubmitOutcome};
use dioxus::prelude::*;
use shared_types::LoginForm;
use shared_ui::{Button, Card, CardContent, CardTitle, Input};

use crate::auth::use_api;
use crate::routes::route_for;

/// Email/password sign-in. Fields are sent as typed; the backend decides.
#[component]
pub fn Login() -> Element {
    let api = use_api();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut phase = use_signal(FormPhase::default);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let form = LoginForm {
            email: email(),
            password: password(),
        };
        spawn(async move {
            phase.set(FormPhase::Submitting);
            let outcome = login::submit(&api, &form).await;
            match outcome {
                SubmitOutcome::Navigate(destination) => {
                    navigator().push(route_for(&destination));
                }
                other => phase.set(FormPhase::after(&other)),
            }
        });
    };

    let error = phase.read().error().map(str::to_string);
    let submitting = phase.read().is_submitting();

    rsx! {
        div { class: "auth-page",
            Card { class: "auth-card",
                CardTitle { "Login" }
                CardContent {
                    form { class: "form-stack", onsubmit: handle_login,
                        Input {
                            label: "Email",
                            name: "email",
                            input_type: "email",
                            value: email(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            label: "Password",
                            name: "password",
                            input_type: "password",
                            value: password(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }

                        if let Some(err) = error {
                            div { class: "form-error", "{err}" }
                        }

                        Button { button_type: "submit", disabled: submitting, "Login" }
                    }
                }
            }
        }
    }
}
