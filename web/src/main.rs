use dioxus::prelude::*;
use permit_ui::components::layout::{NavBar, SignedOutNotice};
use permit_ui::permit::{ApplicationId, WizardStep};
use permit_ui::services::client::{Capability, Session, SessionManager};
use permit_ui::services::config::PortalConfig;
use permit_ui::{ApplicationDetailsPage, ApplicationFilter, ApplicationsPage, NavTarget, PermitWizard};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// Read once at startup and handed to every page explicitly
#[derive(Clone)]
struct PortalContext {
    config: PortalConfig,
    session: Signal<Option<Session>>,
}

impl PortalContext {
    fn session(&self) -> Option<Session> {
        self.session.read().clone()
    }
}

#[component]
fn App() -> Element {
    use_context_provider(|| {
        let config = PortalConfig::load_or_default();
        // Unreadable storage is treated like a missing session
        let session = SessionManager::new(&config.session_storage_key)
            .get_session()
            .ok()
            .flatten();
        PortalContext {
            config,
            session: Signal::new(session),
        }
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Applications {},
        #[route("/review")]
        ReviewQueue {},
        #[route("/applications/new")]
        NewApplication {},
        #[route("/applications/:id/edit?:step")]
        EditApplication { id: String, step: u8 },
        #[route("/applications/:id")]
        ApplicationDetails { id: String },
}

fn route_for(target: NavTarget) -> Route {
    match target {
        NavTarget::Applications => Route::Applications {},
        NavTarget::ReviewQueue => Route::ReviewQueue {},
        NavTarget::NewApplication => Route::NewApplication {},
        NavTarget::EditApplication { id, step } => Route::EditApplication {
            id: id.to_string(),
            step: step.number(),
        },
        NavTarget::ApplicationDetails(id) => Route::ApplicationDetails { id: id.to_string() },
    }
}

/// Nav entry highlighted for the current route
fn active_target(route: &Route) -> Option<NavTarget> {
    match route {
        Route::Applications {} => Some(NavTarget::Applications),
        Route::ReviewQueue {} => Some(NavTarget::ReviewQueue),
        Route::NewApplication {} => Some(NavTarget::NewApplication),
        _ => None,
    }
}

fn use_page_navigation() -> EventHandler<NavTarget> {
    let navigator = use_navigator();
    EventHandler::new(move |target: NavTarget| {
        navigator.push(route_for(target));
    })
}

#[component]
fn Shell() -> Element {
    let portal = use_context::<PortalContext>();
    let route = use_route::<Route>();
    let on_navigate = use_page_navigation();
    let mut session_signal = portal.session;

    let Some(session) = portal.session() else {
        return rsx! {
            SignedOutNotice { auth_url: portal.config.auth_url.clone() }
        };
    };
    let session_storage_key = portal.config.session_storage_key.clone();

    rsx! {
        NavBar {
            session: session,
            active: active_target(&route),
            on_navigate: on_navigate,
            on_sign_out: move |_| {
                SessionManager::new(&session_storage_key).clear_session();
                session_signal.set(None);
            }
        }
        main {
            class: "portal-main",
            Outlet::<Route> {}
        }
    }
}

#[component]
fn NotPermitted() -> Element {
    rsx! {
        div {
            class: "page not-permitted",
            h2 { "Not available" }
            p { "Your account does not have access to this page." }
        }
    }
}

#[component]
fn Applications() -> Element {
    let portal = use_context::<PortalContext>();
    let on_navigate = use_page_navigation();
    let Some(session) = portal.session() else {
        return rsx! {};
    };

    rsx! {
        ApplicationsPage {
            session: session,
            config: portal.config.clone(),
            filter: ApplicationFilter::All,
            on_navigate: on_navigate
        }
    }
}

#[component]
fn ReviewQueue() -> Element {
    let portal = use_context::<PortalContext>();
    let on_navigate = use_page_navigation();
    let Some(session) = portal.session() else {
        return rsx! {};
    };
    if !session.can(Capability::ReviewApplications) {
        return rsx! { NotPermitted {} };
    }

    rsx! {
        ApplicationsPage {
            session: session,
            config: portal.config.clone(),
            filter: ApplicationFilter::ReviewQueue,
            on_navigate: on_navigate
        }
    }
}

#[component]
fn NewApplication() -> Element {
    let portal = use_context::<PortalContext>();
    let on_navigate = use_page_navigation();
    let Some(session) = portal.session() else {
        return rsx! {};
    };
    if !session.can(Capability::CreateApplications) {
        return rsx! { NotPermitted {} };
    }

    rsx! {
        PermitWizard {
            session: session,
            config: portal.config.clone(),
            application_id: None,
            on_navigate: on_navigate
        }
    }
}

#[component]
fn EditApplication(id: String, step: u8) -> Element {
    let portal = use_context::<PortalContext>();
    let on_navigate = use_page_navigation();
    let Some(session) = portal.session() else {
        return rsx! {};
    };
    if !session.can(Capability::EditApplications) {
        return rsx! { NotPermitted {} };
    }

    rsx! {
        PermitWizard {
            key: "{id}",
            session: session,
            config: portal.config.clone(),
            application_id: Some(ApplicationId::new(id.clone())),
            initial_step: WizardStep::from_number(step),
            on_navigate: on_navigate
        }
    }
}

#[component]
fn ApplicationDetails(id: String) -> Element {
    let portal = use_context::<PortalContext>();
    let on_navigate = use_page_navigation();
    let Some(session) = portal.session() else {
        return rsx! {};
    };

    rsx! {
        ApplicationDetailsPage {
            key: "{id}",
            session: session,
            config: portal.config.clone(),
            application_id: ApplicationId::new(id.clone()),
            on_navigate: on_navigate
        }
    }
}
