//! This crate contains the permit portal's domain logic and all shared UI components.

pub mod app;
pub use app::{ApplicationDetailsPage, ApplicationFilter, ApplicationsPage, NavTarget, PermitWizard};

pub mod components;
pub mod permit;
pub mod services;
pub mod utils;
