mod aggregation;
mod cycle_overlay;
mod day_range;
mod plan_merge;
mod report;

pub use aggregation::*;
pub use cycle_overlay::*;
pub use day_range::*;
pub use plan_merge::*;
pub use report::*;
