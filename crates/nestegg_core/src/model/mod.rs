mod allocation;
mod results;

pub use allocation::{AllocationCatalog, AllocationProfile};
pub use results::{PercentilePoint, ProjectionResult, ProjectionSummary, Trial, TrialPoint};
