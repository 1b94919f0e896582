use dioxus::prelude::*;

use crate::app::{ApplicationFilter, NavTarget, PERMIT_PORTAL_CSS};
use crate::components::display::{LoadingIndicator, StatusBadge};
use crate::permit::state::WizardStep;
use crate::permit::storage::DraftStorage;
use crate::permit::types::{ApplicationSummary, SelectOption};
use crate::services::client::{Capability, HttpPermitGateway, PermitGateway, Session};
use crate::services::config::PortalConfig;
use crate::utils::formatting::format_optional_timestamp;

const LIST_FAILED_MESSAGE: &str = "Failed to load applications";

/// Rows shown for `filter`, most recently updated first
pub fn visible_rows(filter: ApplicationFilter, rows: &[ApplicationSummary]) -> Vec<ApplicationSummary> {
    let mut visible: Vec<ApplicationSummary> = rows
        .iter()
        .filter(|row| filter.matches(row))
        .cloned()
        .collect();
    visible.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    visible
}

/// Drafts open in the wizard for users who may edit; everything else opens the detail view
pub fn row_target(row: &ApplicationSummary, session: &Session) -> NavTarget {
    if row.status.is_draft() && session.can(Capability::EditApplications) {
        NavTarget::EditApplication {
            id: row.id.clone(),
            step: WizardStep::Applicant,
        }
    } else {
        NavTarget::ApplicationDetails(row.id.clone())
    }
}

fn reference_label(row: &ApplicationSummary) -> String {
    row.reference_number
        .clone()
        .unwrap_or_else(|| row.id.to_string())
}

fn permit_type_label(row: &ApplicationSummary) -> &'static str {
    row.permit_type.map(|t| t.label()).unwrap_or("-")
}

#[derive(Props, PartialEq, Clone)]
pub struct ApplicationsPageProps {
    pub session: Session,
    pub config: PortalConfig,
    pub filter: ApplicationFilter,
    pub on_navigate: EventHandler<NavTarget>,
}

#[component]
pub fn ApplicationsPage(props: ApplicationsPageProps) -> Element {
    let session = props.session.clone();
    let config = props.config.clone();
    let on_navigate = props.on_navigate;
    let filter = props.filter;

    let applications = use_resource(move || {
        let session = session.clone();
        let config = config.clone();
        async move {
            let gateway = HttpPermitGateway::new(&config, &session)?;
            gateway.list_applications().await
        }
    });

    let can_create = props.session.can(Capability::CreateApplications);
    let create_label = if DraftStorage::new(&props.config.draft_storage_key).has_unsaved_draft() {
        "Continue draft"
    } else {
        "New application"
    };

    let body = match &*applications.read_unchecked() {
        None => rsx! {
            LoadingIndicator { message: "Loading applications...".to_string() }
        },
        Some(Err(e)) => {
            crate::console_error!("[APPLICATIONS] {}", e);
            rsx! {
                div {
                    class: "error-banner",
                    role: "alert",
                    "⚠ {e.user_message(LIST_FAILED_MESSAGE)}"
                }
            }
        }
        Some(Ok(rows)) => {
            let rows = visible_rows(filter, rows);
            if rows.is_empty() {
                rsx! {
                    p {
                        class: "empty-state",
                        if filter == ApplicationFilter::ReviewQueue {
                            "Nothing is waiting for review."
                        } else {
                            "You have no applications yet."
                        }
                    }
                }
            } else {
                rsx! {
                    table {
                        class: "application-table",
                        thead {
                            tr {
                                th { "Reference" }
                                th { "Permit type" }
                                th { "Address" }
                                th { "Status" }
                                th { "Last updated" }
                            }
                        }
                        tbody {
                            for row in rows {
                                tr {
                                    key: "{row.id}",
                                    class: "application-row",
                                    onclick: {
                                        let target = row_target(&row, &props.session);
                                        move |_| on_navigate.call(target.clone())
                                    },
                                    td {
                                        class: "reference",
                                        "{reference_label(&row)}"
                                    }
                                    td { "{permit_type_label(&row)}" }
                                    td { "{row.address}" }
                                    td {
                                        StatusBadge { status: row.status }
                                    }
                                    td { "{format_optional_timestamp(row.updated_at.as_deref())}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: PERMIT_PORTAL_CSS }

        div {
            class: "page applications-page",
            div {
                class: "page-header",
                h1 {
                    class: "page-title",
                    "{filter.title()}"
                }
                if can_create && filter == ApplicationFilter::All {
                    button {
                        class: "button-primary",
                        r#type: "button",
                        onclick: move |_| on_navigate.call(NavTarget::NewApplication),
                        "{create_label}"
                    }
                }
            }
            {body}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::client::Role;
    use serde_json::json;

    fn rows() -> Vec<ApplicationSummary> {
        serde_json::from_value(json!([
            {"id": 1, "status": "draft", "updated_at": "2024-01-01T00:00:00Z"},
            {"id": 2, "status": "submitted", "updated_at": "2024-03-01T00:00:00Z"},
            {"id": 3, "status": "under_review", "updated_at": "2024-02-01T00:00:00Z"},
            {"id": 4, "status": "approved"}
        ]))
        .unwrap()
    }

    #[test]
    fn test_review_queue_filter() {
        let queue = visible_rows(ApplicationFilter::ReviewQueue, &rows());
        let ids: Vec<_> = queue.iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, vec!["2", "3"]);

        assert_eq!(visible_rows(ApplicationFilter::All, &rows()).len(), 4);
    }

    #[test]
    fn test_row_target_depends_on_status_and_capability() {
        let rows = rows();
        let applicant = Session::new("u1", "Jo", vec![Role::Applicant], "t");
        let reviewer = Session::new("u2", "Riley", vec![Role::Reviewer], "t");

        assert!(matches!(row_target(&rows[0], &applicant), NavTarget::EditApplication { .. }));
        assert!(matches!(row_target(&rows[0], &reviewer), NavTarget::ApplicationDetails(_)));
        assert!(matches!(row_target(&rows[1], &applicant), NavTarget::ApplicationDetails(_)));
    }
}
