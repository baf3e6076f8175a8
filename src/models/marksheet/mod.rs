pub mod responses;
pub mod summary;

pub use summary::{MarkLine, MarkSummary, PASS_PERCENTAGE, ResultStatus};
