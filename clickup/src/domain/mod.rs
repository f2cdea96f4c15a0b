mod tag;
mod team;
mod time_entry;

pub use tag::*;
pub use team::*;
pub use time_entry::*;
