mod plans;
mod provider;

pub use plans::*;
pub use provider::*;
