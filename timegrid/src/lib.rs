//! Day-bucketed aggregation of time-tracking entries, overlaid with
//! recurring hours budgets ("time plans").
//!
//! Raw entries and plan definitions come in through the outbound ports in
//! [`domain::ports`]; the services in [`domain::services`] fold them into
//! the dimension tables and cycle windows a utilization grid renders.

pub mod config;
pub mod domain;
