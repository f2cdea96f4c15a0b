mod activity;
mod day;
mod ids;
mod time_plan;
mod timing;

pub use activity::*;
pub use day::*;
pub use ids::*;
pub use time_plan::*;
pub use timing::*;
