//! Page-level components
//!
//! Pages never reach into routing or global state: the session and config
//! arrive as props, and navigation requests leave through `on_navigate` as a
//! [`NavTarget`] the host application maps to its own routes.

pub mod application_details;
pub mod applications_page;
pub mod permit_wizard;

pub use application_details::ApplicationDetailsPage;
pub use applications_page::ApplicationsPage;
pub use permit_wizard::PermitWizard;

use dioxus::prelude::*;

use crate::permit::state::WizardStep;
use crate::permit::types::{ApplicationId, ApplicationSummary};

pub(crate) const PERMIT_PORTAL_CSS: Asset = asset!("/assets/styling/permit_portal.css");

/// Where a page wants to go next
#[derive(Clone, Debug, PartialEq)]
pub enum NavTarget {
    Applications,
    ReviewQueue,
    NewApplication,
    EditApplication {
        id: ApplicationId,
        step: WizardStep,
    },
    ApplicationDetails(ApplicationId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplicationFilter {
    All,
    /// Submitted and under-review applications only
    ReviewQueue,
}

impl ApplicationFilter {
    pub fn title(&self) -> &'static str {
        match self {
            ApplicationFilter::All => "Applications",
            ApplicationFilter::ReviewQueue => "Review queue",
        }
    }

    pub fn matches(&self, summary: &ApplicationSummary) -> bool {
        match self {
            ApplicationFilter::All => true,
            ApplicationFilter::ReviewQueue => summary.status.awaits_review(),
        }
    }
}
