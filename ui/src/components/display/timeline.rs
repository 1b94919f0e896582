use dioxus::prelude::*;

use crate::components::display::StatusBadge;
use crate::permit::types::StatusEvent;
use crate::utils::formatting::format_timestamp;

#[derive(Props, PartialEq, Clone)]
pub struct TimelineProps {
    /// Expected oldest first
    pub events: Vec<StatusEvent>,
}

#[component]
pub fn Timeline(props: TimelineProps) -> Element {
    if props.events.is_empty() {
        return rsx! {
            p {
                class: "empty-state",
                "No status changes recorded yet."
            }
        };
    }

    rsx! {
        ol {
            class: "timeline",
            for event in props.events {
                li {
                    class: "timeline-entry",
                    div {
                        class: "timeline-marker"
                    }
                    div {
                        class: "timeline-content",
                        div {
                            class: "timeline-header",
                            StatusBadge { status: event.status }
                            span {
                                class: "timeline-time",
                                "{format_timestamp(&event.occurred_at)}"
                            }
                        }
                        if let Some(actor) = event.actor {
                            div {
                                class: "timeline-actor",
                                "by {actor}"
                            }
                        }
                        if let Some(note) = event.note {
                            p {
                                class: "timeline-note",
                                "{note}"
                            }
                        }
                    }
                }
            }
        }
    }
}
