use client::{add_user, FormPhase, SessionGate, SubmitOutcome};
use dioxus::prelude::*;
use shared_types::{Branch, UserForm, ALL_ROLES};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardTitle, FormSelect, Input, SelectOption,
};

use crate::auth::{use_api, use_session, SessionLoading, SessionState};
use crate::routes::{route_for, Route};

/// Admin-only page for creating an account.
#[component]
pub fn AddUser() -> Element {
    match use_session(SessionGate::ADD_USER) {
        SessionState::Ready(_) => rsx! { AddUserForm {} },
        SessionState::Checking => rsx! { SessionLoading {} },
        SessionState::Redirecting => rsx! {},
    }
}

fn role_options() -> Vec<SelectOption> {
    ALL_ROLES
        .iter()
        .map(|role| SelectOption::new(role.as_str(), role.label()))
        .collect()
}

fn branch_options() -> Vec<SelectOption> {
    Branch::all()
        .iter()
        .map(|branch| SelectOption::new(branch.id.to_string(), branch.name.clone()))
        .collect()
}

/// `initial` seeds the field values; the page starts empty.
#[component]
fn AddUserForm(#[props(default)] initial: UserForm) -> Element {
    let api = use_api();
    let mut form = use_signal(move || initial);
    let mut phase = use_signal(FormPhase::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let current = form();
        spawn(async move {
            phase.set(FormPhase::Submitting);
            match add_user::submit(&api, &current).await {
                SubmitOutcome::Navigate(destination) => {
                    navigator().push(route_for(&destination));
                }
                other => phase.set(FormPhase::after(&other)),
            }
        });
    };

    let error = phase.read().error().map(str::to_string);
    let submitting = phase.read().is_submitting();
    let values = form();

    rsx! {
        div { class: "form-page",
            Card { class: "form-card",
                CardTitle { "Add User" }
                CardContent {
                    form { class: "form-stack", onsubmit: handle_submit,
                        Input {
                            label: "First Name",
                            name: "firstName",
                            value: values.first_name.clone(),
                            on_input: move |e: FormEvent| form.write().first_name = e.value(),
                        }
                        Input {
                            label: "Surname",
                            name: "surname",
                            value: values.surname.clone(),
                            on_input: move |e: FormEvent| form.write().surname = e.value(),
                        }
                        Input {
                            label: "Email",
                            name: "email",
                            input_type: "email",
                            value: values.email.clone(),
                            on_input: move |e: FormEvent| form.write().email = e.value(),
                        }
                        Input {
                            label: "Password",
                            name: "password",
                            input_type: "password",
                            value: values.password.clone(),
                            on_input: move |e: FormEvent| form.write().password = e.value(),
                        }
                        FormSelect {
                            label: "Role",
                            name: "role",
                            value: values.role.clone(),
                            options: role_options(),
                            onchange: move |e: Event<FormData>| form.write().role = e.value(),
                        }

                        if values.shows_branch() {
                            FormSelect {
                                label: "Branch",
                                name: "branch",
                                value: values.branch.clone(),
                                options: branch_options(),
                                onchange: move |e: Event<FormData>| form.write().branch = e.value(),
                            }
                        }

                        if let Some(err) = error {
                            div { class: "form-error", "{err}" }
                        }

                        div { class: "form-actions",
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: move |_| {
                                    navigator().push(Route::Home { success: None });
                                },
                                "Cancel"
                            }
                            Button { button_type: "submit", disabled: submitting, "Submit" }
                        }
                    }
                }
            }
        }
    }
}
