use dioxus::prelude::*;

/// One entry in a [`FormSelect`].
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Text of the empty-valued first option, e.g. "Select role".
pub fn placeholder_for(label: &str) -> String {
    format!("Select {}", label.to_lowercase())
}

/// A labelled native select.
///
/// The first option is always an empty-valued placeholder, so an untouched
/// select reads as "nothing chosen".
#[component]
pub fn FormSelect(
    /// Current selected value; empty means nothing chosen.
    #[props(default)]
    value: String,
    /// Called when the selection changes.
    #[props(default)]
    onchange: Option<EventHandler<Event<FormData>>>,
    /// Label displayed above the select.
    #[props(default)]
    label: String,
    /// Form field name, also used as the element id.
    #[props(default)]
    name: String,
    options: Vec<SelectOption>,
    #[props(default = false)]
    disabled: bool,
) -> Element {
    let placeholder = placeholder_for(&label);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label", r#for: "{name}", "{label}" }
            }
            select {
                class: "form-select",
                id: "{name}",
                name: "{name}",
                value: value.clone(),
                disabled: disabled,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                option { value: "", selected: value.is_empty(), "{placeholder}" }
                for opt in options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == value,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}
