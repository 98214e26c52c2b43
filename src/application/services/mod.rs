//! Application services

pub mod page;

pub use page::{PageService, RenderReport, FEEDBACK_REDIRECT_FILE, INDEX_FILE};
