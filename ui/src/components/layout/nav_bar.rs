use dioxus::prelude::*;

use crate::app::NavTarget;
use crate::services::client::{Capability, Session};

/// Top-level navigation entries, each gated by a capability
pub fn visible_links(session: &Session) -> Vec<(NavTarget, &'static str)> {
    let mut links = vec![(NavTarget::Applications, "Applications")];
    if session.can(Capability::CreateApplications) {
        links.push((NavTarget::NewApplication, "New application"));
    }
    if session.can(Capability::ReviewApplications) {
        links.push((NavTarget::ReviewQueue, "Review queue"));
    }
    links
}

#[derive(Props, PartialEq, Clone)]
pub struct NavBarProps {
    pub session: Session,
    pub active: Option<NavTarget>,
    pub on_navigate: EventHandler<NavTarget>,
    pub on_sign_out: EventHandler<()>,
}

#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let on_navigate = props.on_navigate;
    let on_sign_out = props.on_sign_out;

    rsx! {
        nav {
            class: "nav-bar",
            span {
                class: "nav-brand",
                "Permit Portal"
            }
            ul {
                class: "nav-links",
                for (target, label) in visible_links(&props.session) {
                    li {
                        button {
                            class: if props.active.as_ref() == Some(&target) { "nav-link active" } else { "nav-link" },
                            r#type: "button",
                            onclick: {
                                let target = target.clone();
                                move |_| on_navigate.call(target.clone())
                            },
                            "{label}"
                        }
                    }
                }
            }
            div {
                class: "nav-user",
                span {
                    class: "nav-user-name",
                    "{props.session.display_name}"
                }
                button {
                    class: "button-link",
                    r#type: "button",
                    onclick: move |_| on_sign_out.call(()),
                    "Sign out"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::client::Role;

    #[test]
    fn test_links_follow_capabilities() {
        let applicant = Session::new("u1", "Jo", vec![Role::Applicant], "t");
        let targets: Vec<_> = visible_links(&applicant).into_iter().map(|(t, _)| t).collect();
        assert_eq!(targets, vec![NavTarget::Applications, NavTarget::NewApplication]);

        let reviewer = Session::new("u2", "Riley", vec![Role::Reviewer], "t");
        let targets: Vec<_> = visible_links(&reviewer).into_iter().map(|(t, _)| t).collect();
        assert_eq!(targets, vec![NavTarget::Applications, NavTarget::ReviewQueue]);
    }
}
