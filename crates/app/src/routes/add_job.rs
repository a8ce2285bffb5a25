use client::{add_job, FormPhase, SessionGate, SubmitOutcome};
use dioxus::prelude::*;
use shared_types::{JobForm, DURATION_DAYS, STAFF_COUNTS};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardTitle, FormSelect, Input, SelectOption,
    Textarea,
};

use crate::auth::{use_api, use_session, SessionLoading, SessionState};
use crate::routes::{route_for, Route};

/// Job creation for admins and managers.
#[component]
pub fn AddJob() -> Element {
    match use_session(SessionGate::ADD_JOB) {
        SessionState::Ready(_) => rsx! { AddJobForm {} },
        SessionState::Checking => rsx! { SessionLoading {} },
        SessionState::Redirecting => rsx! {},
    }
}

fn duration_label(days: u8) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}

fn staff_label(count: &str) -> String {
    if count == "1" {
        "1 staff member".to_string()
    } else {
        format!("{count} staff members")
    }
}

fn duration_options() -> Vec<SelectOption> {
    DURATION_DAYS
        .map(|days| SelectOption::new(days.to_string(), duration_label(days)))
        .collect()
}

fn staff_options() -> Vec<SelectOption> {
    STAFF_COUNTS
        .iter()
        .map(|count| SelectOption::new(*count, staff_label(count)))
        .collect()
}

/// `initial` seeds the field values; the page starts empty.
#[component]
fn AddJobForm(#[props(default)] initial: JobForm) -> Element {
    let api = use_api();
    let mut form = use_signal(move || initial);
    let mut phase = use_signal(FormPhase::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let current = form();
        spawn(async move {
            phase.set(FormPhase::Submitting);
            match add_job::submit(&api, &current).await {
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
    let end_date = values.end_date_display();

    rsx! {
        div { class: "form-page",
            Card { class: "form-card",
                CardTitle { "Add Job" }
                CardContent {
                    form { class: "form-stack", onsubmit: handle_submit,
                        Input {
                            label: "Job Title (e.g. Fix Roof)",
                            name: "title",
                            value: values.title.clone(),
                            on_input: move |e: FormEvent| form.write().title = e.value(),
                        }
                        Textarea {
                            label: "Description (10 words or less)",
                            name: "description",
                            placeholder: "Brief job description",
                            rows: 2,
                            value: values.description.clone(),
                            on_input: move |e: FormEvent| form.write().description = e.value(),
                        }
                        Input {
                            label: "Start Date",
                            name: "startDate",
                            input_type: "date",
                            value: values.start_date.clone(),
                            on_input: move |e: FormEvent| form.write().start_date = e.value(),
                        }
                        FormSelect {
                            label: "Predicted Duration (days)",
                            name: "predictedDuration",
                            value: values.predicted_duration.clone(),
                            options: duration_options(),
                            onchange: move |e: Event<FormData>| {
                                form.write().predicted_duration = e.value()
                            },
                        }

                        if !end_date.is_empty() {
                            div { class: "derived-field",
                                span { class: "derived-field-label", "Calculated End Date" }
                                span { class: "derived-field-value", "{end_date}" }
                            }
                        }

                        FormSelect {
                            label: "Number of Staff",
                            name: "notes",
                            value: values.notes.clone(),
                            options: staff_options(),
                            onchange: move |e: Event<FormData>| form.write().notes = e.value(),
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
