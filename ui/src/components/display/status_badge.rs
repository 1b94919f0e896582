use dioxus::prelude::*;

use crate::permit::types::ApplicationStatus;

#[derive(Props, PartialEq, Clone)]
pub struct StatusBadgeProps {
    pub status: ApplicationStatus,
}

#[component]
pub fn StatusBadge(props: StatusBadgeProps) -> Element {
    rsx! {
        span {
            class: "{props.status.css_class()}",
            "{props.status.label()}"
        }
    }
}
