use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct LoadingIndicatorProps {
    pub message: String,
    /// Render as a small inline hint instead of a block
    #[props(default)]
    pub inline: bool,
}

#[component]
pub fn LoadingIndicator(props: LoadingIndicatorProps) -> Element {
    let class = if props.inline {
        "loading-indicator inline"
    } else {
        "loading-indicator"
    };

    rsx! {
        div {
            class: "{class}",
            role: "status",
            "⏳ {props.message}"
        }
    }
}
