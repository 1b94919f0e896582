use dioxus::prelude::*;
use reqwest::Url;

const RETURN_PARAM: &str = "return_to";

/// Sign-in link carrying the page to come back to; falls back to the bare
/// `auth_url` when it cannot be parsed
pub fn sign_in_href(auth_url: &str, return_to: Option<&str>) -> String {
    let Some(return_to) = return_to else {
        return auth_url.to_string();
    };
    match Url::parse(auth_url) {
        Ok(mut url) => {
            url.query_pairs_mut().append_pair(RETURN_PARAM, return_to);
            url.to_string()
        }
        Err(_) => auth_url.to_string(),
    }
}

#[cfg(target_arch = "wasm32")]
fn current_location() -> Option<String> {
    web_sys::window().and_then(|w| w.location().href().ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn current_location() -> Option<String> {
    None
}

#[derive(Props, PartialEq, Clone)]
pub struct SignedOutNoticeProps {
    pub auth_url: String,
}

/// Shown in place of every page when no valid session is stored
#[component]
pub fn SignedOutNotice(props: SignedOutNoticeProps) -> Element {
    let href = sign_in_href(&props.auth_url, current_location().as_deref());

    rsx! {
        div {
            class: "signed-out-notice",
            h2 { "You are signed out" }
            p { "Sign in to view and manage your permit applications." }
            a {
                class: "button-primary",
                href: "{href}",
                "Sign in"
            }
        }
    }
}
