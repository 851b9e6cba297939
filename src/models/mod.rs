pub mod agent;
pub mod call;
pub mod summary;

pub use agent::AgentRecord;
pub use call::CallRecord;
pub use summary::AgentSummary;
