use dioxus::prelude::*;

/// Dismissible banner showing the current error message
#[derive(Props, PartialEq, Clone)]
pub struct ErrorBannerProps {
    pub message: Option<String>,
    pub on_dismiss: EventHandler<()>,
}

#[component]
pub fn ErrorBanner(props: ErrorBannerProps) -> Element {
    let Some(message) = props.message else {
        return rsx! {};
    };
    let on_dismiss = props.on_dismiss;

    rsx! {
        div {
            class: "error-banner",
            role: "alert",
            span {
                class: "error-banner-message",
                "⚠ {message}"
            }
            button {
                class: "error-banner-dismiss",
                r#type: "button",
                aria_label: "Dismiss",
                onclick: move |_| on_dismiss.call(()),
                "✕"
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct NoticeBannerProps {
    pub message: Option<String>,
}

#[component]
pub fn NoticeBanner(props: NoticeBannerProps) -> Element {
    match props.message {
        Some(message) => rsx! {
            div {
                class: "notice-banner",
                role: "status",
                "✓ {message}"
            }
        },
        None => rsx! {},
    }
}
