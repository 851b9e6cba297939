pub mod aggregate;
pub mod join;
pub mod layout;
pub mod normalize;
pub mod report;

pub use report::{ReportLogic, SortOrder};
