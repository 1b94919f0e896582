pub mod applicant_step;
pub mod details_step;
pub mod documents_step;
pub mod project_step;

pub use applicant_step::*;
pub use details_step::*;
pub use documents_step::*;
pub use project_step::*;
