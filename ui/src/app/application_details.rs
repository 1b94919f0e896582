use dioxus::prelude::*;

use crate::app::{NavTarget, PERMIT_PORTAL_CSS};
use crate::components::display::{ErrorBanner, LoadingIndicator, StatusBadge, Timeline};
use crate::components::forms::DocumentList;
use crate::permit::commands::{LOAD_FAILED_MESSAGE, REMOVE_FAILED_MESSAGE};
use crate::permit::details::{load_application_details, ApplicationDetails, DetailsTab};
use crate::permit::state::WizardStep;
use crate::permit::types::{
    ApplicationId, ComplianceCheck, ComplianceResult, DocumentId, ReviewComment, SelectOption,
};
use crate::services::client::{Capability, HttpPermitGateway, PermitGateway, Session};
use crate::services::config::PortalConfig;
use crate::utils::formatting::{format_area, format_currency, format_optional_timestamp};

fn optional_label<T: SelectOption>(value: Option<T>) -> &'static str {
    value.map(|v| v.label()).unwrap_or("-")
}

fn compliance_class(result: ComplianceResult) -> &'static str {
    match result {
        ComplianceResult::Pass => "compliance-pass",
        ComplianceResult::Fail => "compliance-fail",
        ComplianceResult::NotApplicable => "compliance-na",
        ComplianceResult::Pending => "compliance-pending",
    }
}

fn overview_rows(details: &ApplicationDetails) -> Vec<(&'static str, String)> {
    let application = &details.application;
    let applicant = application.applicant.clone().unwrap_or_default();

    vec![
        ("Applicant", applicant.name),
        ("Email", applicant.email),
        ("Phone", applicant.phone.unwrap_or_else(|| "-".to_string())),
        ("Company", applicant.company.unwrap_or_else(|| "-".to_string())),
        ("Permit type", optional_label(application.permit_type).to_string()),
        ("Work type", optional_label(application.work_type).to_string()),
        ("Address", application.address.clone()),
        ("Description", application.description.clone()),
        ("Occupancy group", optional_label(application.occupancy_group).to_string()),
        ("Construction type", optional_label(application.construction_type).to_string()),
        (
            "Estimated value",
            application
                .estimated_value
                .map(format_currency)
                .unwrap_or_else(|| "-".to_string()),
        ),
        (
            "Building area",
            application
                .building_area
                .map(format_area)
                .unwrap_or_else(|| "-".to_string()),
        ),
        (
            "Storeys",
            application
                .storeys
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ),
        ("Created", format_optional_timestamp(application.created_at.as_deref())),
        ("Submitted", format_optional_timestamp(application.submitted_at.as_deref())),
    ]
}

#[derive(Props, PartialEq, Clone)]
struct ReviewListProps {
    reviews: Vec<ReviewComment>,
}

#[component]
fn ReviewList(props: ReviewListProps) -> Element {
    if props.reviews.is_empty() {
        return rsx! {
            p {
                class: "empty-state",
                "No review comments yet."
            }
        };
    }

    rsx! {
        ul {
            class: "review-list",
            for review in props.reviews {
                li {
                    key: "{review.id}",
                    class: if review.resolved { "review-comment resolved" } else { "review-comment" },
                    div {
                        class: "review-header",
                        strong { "{review.author}" }
                        if let Some(discipline) = review.discipline {
                            span {
                                class: "review-discipline",
                                "{discipline}"
                            }
                        }
                        span {
                            class: "review-time",
                            "{format_optional_timestamp(review.created_at.as_deref())}"
                        }
                        if review.resolved {
                            span {
                                class: "review-resolved",
                                "Resolved"
                            }
                        }
                    }
                    p {
                        class: "review-body",
                        "{review.body}"
                    }
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
struct ComplianceTableProps {
    checks: Vec<ComplianceCheck>,
}

#[component]
fn ComplianceTable(props: ComplianceTableProps) -> Element {
    if props.checks.is_empty() {
        return rsx! {
            p {
                class: "empty-state",
                "No compliance checks have been run."
            }
        };
    }

    rsx! {
        table {
            class: "compliance-table",
            thead {
                tr {
                    th { "Code section" }
                    th { "Description" }
                    th { "Result" }
                    th { "Notes" }
                }
            }
            tbody {
                for check in props.checks {
                    tr {
                        td { "{check.code_section}" }
                        td { "{check.description}" }
                        td {
                            class: "{compliance_class(check.result)}",
                            "{check.result.label()}"
                        }
                        td { "{check.notes.clone().unwrap_or_default()}" }
                    }
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ApplicationDetailsPageProps {
    pub session: Session,
    pub config: PortalConfig,
    pub application_id: ApplicationId,
    pub on_navigate: EventHandler<NavTarget>,
}

#[component]
pub fn ApplicationDetailsPage(props: ApplicationDetailsPageProps) -> Element {
    let on_navigate = props.on_navigate;
    let mut active_tab = use_signal(|| DetailsTab::Overview);
    let mut action_error = use_signal(|| None::<String>);
    let mut removing = use_signal(|| None::<DocumentId>);

    let mut details = {
        let session = props.session.clone();
        let config = props.config.clone();
        let id = props.application_id.clone();
        use_resource(move || {
            let session = session.clone();
            let config = config.clone();
            let id = id.clone();
            async move {
                let gateway = HttpPermitGateway::new(&config, &session)?;
                load_application_details(&gateway, &id).await
            }
        })
    };

    let remove_document = {
        let session = props.session.clone();
        let config = props.config.clone();
        let id = props.application_id.clone();
        move |document_id: DocumentId| {
            // One removal at a time
            if removing.peek().is_some() {
                return;
            }
            removing.set(Some(document_id.clone()));
            action_error.set(None);

            let session = session.clone();
            let config = config.clone();
            let id = id.clone();
            spawn(async move {
                let result = match HttpPermitGateway::new(&config, &session) {
                    Ok(gateway) => gateway.remove_document(&id, &document_id).await,
                    Err(e) => Err(e),
                };
                removing.set(None);
                match result {
                    Ok(()) => details.restart(),
                    Err(e) => action_error.set(Some(e.user_message(REMOVE_FAILED_MESSAGE))),
                }
            });
        }
    };

    let can_edit = props.session.can(Capability::EditApplications);

    let content = match &*details.read_unchecked() {
        None => rsx! {
            LoadingIndicator { message: "Loading application...".to_string() }
        },
        Some(Err(e)) => rsx! {
            ErrorBanner {
                message: Some(e.user_message(LOAD_FAILED_MESSAGE)),
                on_dismiss: move |_| on_navigate.call(NavTarget::Applications)
            }
        },
        Some(Ok(loaded)) => {
            let loaded = loaded.clone();
            let application = loaded.application.clone();
            let show_edit = can_edit && application.status.is_draft();
            let can_remove = show_edit && loaded.can_remove_documents();
            let tab_body = match active_tab() {
                DetailsTab::Overview => rsx! {
                    dl {
                        class: "overview-list",
                        for (label, value) in overview_rows(&loaded) {
                            dt { "{label}" }
                            dd { "{value}" }
                        }
                    }
                },
                DetailsTab::Documents => rsx! {
                    DocumentList {
                        documents: loaded.documents.clone(),
                        can_remove: can_remove,
                        removing: removing(),
                        disabled: removing().is_some(),
                        on_remove: remove_document.clone()
                    }
                },
                DetailsTab::Timeline => rsx! {
                    Timeline { events: loaded.timeline.clone() }
                },
                DetailsTab::Reviews => rsx! {
                    ReviewList { reviews: loaded.reviews.clone() }
                },
                DetailsTab::Compliance => rsx! {
                    ComplianceTable { checks: loaded.compliance.clone() }
                },
            };

            rsx! {
                div {
                    class: "page-header",
                    h1 {
                        class: "page-title",
                        "{application.display_reference()}"
                    }
                    StatusBadge { status: application.status }
                    if show_edit {
                        button {
                            class: "button-primary",
                            r#type: "button",
                            onclick: {
                                let id = application.id.clone();
                                move |_| on_navigate.call(NavTarget::EditApplication {
                                    id: id.clone(),
                                    step: WizardStep::Applicant,
                                })
                            },
                            "Edit"
                        }
                    }
                }

                ul {
                    class: "tab-bar",
                    role: "tablist",
                    for tab in DetailsTab::ALL {
                        li {
                            button {
                                class: if active_tab() == tab { "tab active" } else { "tab" },
                                r#type: "button",
                                role: "tab",
                                onclick: move |_| active_tab.set(tab),
                                "{tab.label()}"
                                if tab == DetailsTab::Reviews && loaded.open_review_count() > 0 {
                                    span {
                                        class: "tab-count",
                                        "{loaded.open_review_count()}"
                                    }
                                }
                                if tab == DetailsTab::Compliance && loaded.failed_check_count() > 0 {
                                    span {
                                        class: "tab-count danger",
                                        "{loaded.failed_check_count()}"
                                    }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "tab-panel",
                    role: "tabpanel",
                    {tab_body}
                }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: PERMIT_PORTAL_CSS }

        div {
            class: "page details-page",
            button {
                class: "button-link",
                r#type: "button",
                onclick: move |_| on_navigate.call(NavTarget::Applications),
                "← All applications"
            }
            ErrorBanner {
                message: action_error(),
                on_dismiss: move |_| action_error.set(None)
            }
            {content}
        }
    }
}
