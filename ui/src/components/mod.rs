//! User Interface Components
//!
//! This module contains reusable Dioxus components for the permit portal UI:
//!
//! - **forms**: The four wizard steps and the document upload widget
//! - **display**: Status badges, timelines, banners and progress markers
//! - **inputs**: Validated input fields and form controls
//! - **layout**: Navigation bar and signed-out notice

pub mod display;
pub mod forms;
pub mod inputs;
pub mod layout;
