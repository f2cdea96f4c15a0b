mod query;

pub mod domain;

pub use domain::*;
pub use query::*;
