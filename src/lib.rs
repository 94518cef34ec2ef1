//! ntprobe library exposing reusable NTP reachability probing utilities.

pub mod adapters;
pub mod domain;
mod error;
pub mod fmt;
pub mod protocol;
pub mod services;

pub use domain::ntp::{ProbeOutcome, ServerTime, Target};
pub use error::ProbeError;
pub use services::probe::{probe_all, probe_one};
