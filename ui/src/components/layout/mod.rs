pub mod nav_bar;
pub mod signed_out_notice;

pub use nav_bar::*;
pub use signed_out_notice::*;
