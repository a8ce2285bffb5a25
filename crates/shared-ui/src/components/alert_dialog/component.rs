use dioxus::prelude::*;
use dioxus_primitives::alert_dialog as prim;

#[component]
pub fn AlertDialogRoot(mut props: prim::AlertDialogRootProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "alert-dialog-overlay",
        None,
        false,
    ));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::AlertDialogRoot { ..props }
    }
}

#[component]
pub fn AlertDialogContent(mut props: prim::AlertDialogContentProps) -> Element {
    if props.class.is_none() {
        props.class = Some("alert-dialog-content".to_string());
    }

    rsx! {
        prim::AlertDialogContent { ..props }
    }
}

#[component]
pub fn AlertDialogTitle(mut props: prim::AlertDialogTitleProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "alert-dialog-title",
        None,
        false,
    ));

    rsx! {
        prim::AlertDialogTitle { ..props }
    }
}

#[component]
pub fn AlertDialogDescription(mut props: prim::AlertDialogDescriptionProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "alert-dialog-message",
        None,
        false,
    ));

    rsx! {
        prim::AlertDialogDescription { ..props }
    }
}

#[component]
pub fn AlertDialogActions(mut props: prim::AlertDialogActionsProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "alert-dialog-actions",
        None,
        false,
    ));

    rsx! {
        prim::AlertDialogActions { ..props }
    }
}

#[component]
pub fn AlertDialogAction(mut props: prim::AlertDialogActionProps) -> Element {
    props.attributes.push(Attribute::new("class", "button", None, false));
    props
        .attributes
        .push(Attribute::new("data-style", "primary", None, false));

    rsx! {
        prim::AlertDialogAction { ..props }
    }
}

/// A one-button modal notice. Closing it by any route (the button or
/// Escape) calls `on_dismiss`.
#[component]
pub fn AlertDialog(
    /// Whether the dialog is shown.
    open: bool,
    #[props(default)] title: String,
    message: String,
    #[props(default = "OK".to_string())] dismiss_label: String,
    #[props(default)] on_dismiss: EventHandler<()>,
) -> Element {
    rsx! {
        AlertDialogRoot {
            open: open,
            on_open_change: move |open: bool| {
                if !open {
                    on_dismiss.call(());
                }
            },
            AlertDialogContent {
                if !title.is_empty() {
                    AlertDialogTitle { "{title}" }
                }
                AlertDialogDescription { "{message}" }
                AlertDialogActions {
                    AlertDialogAction {
                        on_click: move |_| on_dismiss.call(()),
                        "{dismiss_label}"
                    }
                }
            }
        }
    }
}
