//! Permit application domain
//!
//! - **types**: wire and draft types shared with the REST API
//! - **state**: wizard state and the reducer that mutates it
//! - **form_validation**: step validity and upload checks
//! - **commands**: the wizard controller and its command set
//! - **details**: parallel loader for the application detail view
//! - **storage**: local cache for the unsaved draft

pub mod commands;
pub mod details;
pub mod form_validation;
pub mod state;
pub mod storage;
pub mod types;

#[cfg(test)]
pub mod test_support;

pub use commands::{CommandOutcome, WizardCommand, WizardController};
pub use details::{load_application_details, ApplicationDetails, DetailsTab};
pub use form_validation::*;
pub use state::{PendingRequest, WizardAction, WizardMode, WizardState, WizardStep};
pub use storage::DraftStorage;
pub use types::*;
