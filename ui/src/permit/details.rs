use std::cmp::Ordering;

use super::types::*;
use crate::services::client::{GatewayResult, PermitGateway};
use crate::utils::formatting::parse_timestamp;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailsTab {
    Overview,
    Documents,
    Timeline,
    Reviews,
    Compliance,
}

impl DetailsTab {
    pub const ALL: [DetailsTab; 5] = [
        DetailsTab::Overview,
        DetailsTab::Documents,
        DetailsTab::Timeline,
        DetailsTab::Reviews,
        DetailsTab::Compliance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DetailsTab::Overview => "Overview",
            DetailsTab::Documents => "Documents",
            DetailsTab::Timeline => "Timeline",
            DetailsTab::Reviews => "Reviews",
            DetailsTab::Compliance => "Compliance",
        }
    }
}

/// Everything the detail view renders, fetched in one go
#[derive(Clone, Debug, PartialEq)]
pub struct ApplicationDetails {
    pub application: RemoteApplication,
    pub documents: Vec<DocumentRecord>,
    /// Oldest first
    pub timeline: Vec<StatusEvent>,
    pub reviews: Vec<ReviewComment>,
    pub compliance: Vec<ComplianceCheck>,
}

impl ApplicationDetails {
    pub fn open_review_count(&self) -> usize {
        self.reviews.iter().filter(|review| !review.resolved).count()
    }

    pub fn failed_check_count(&self) -> usize {
        self.compliance
            .iter()
            .filter(|check| check.result == ComplianceResult::Fail)
            .count()
    }

    pub fn can_remove_documents(&self) -> bool {
        self.application.status.is_draft()
    }
}

fn or_empty<T>(section: &str, id: &ApplicationId, result: GatewayResult<Vec<T>>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        crate::console_warn!("[DETAILS] Could not load {} for {}: {}", section, id, e);
        Vec::new()
    })
}

/// Runs the five detail fetches concurrently.
///
/// Oldest instant first across offsets; unparseable entries go last in
/// their original order
pub fn sort_timeline(events: &mut [StatusEvent]) {
    events.sort_by(|a, b| {
        match (parse_timestamp(&a.occurred_at), parse_timestamp(&b.occurred_at)) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}

/// Only the application itself is required; a failing secondary fetch leaves
/// its tab empty.
pub async fn load_application_details<G: PermitGateway + ?Sized>(
    gateway: &G,
    id: &ApplicationId,
) -> GatewayResult<ApplicationDetails> {
    crate::console_debug!("[DETAILS] Loading application {}", id);

    let (application, documents, history, reviews, compliance) = futures::join!(
        gateway.get_application(id),
        gateway.list_documents(id),
        gateway.list_status_history(id),
        gateway.list_review_comments(id),
        gateway.list_compliance_checks(id)
    );

    let application = application?;
    let mut timeline = or_empty("history", id, history);
    sort_timeline(&mut timeline);

    Ok(ApplicationDetails {
        application,
        documents: or_empty("documents", id, documents),
        timeline,
        reviews: or_empty("reviews", id, reviews),
        compliance: or_empty("compliance checks", id, compliance),
    })
}
