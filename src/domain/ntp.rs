use chrono::{DateTime, Local, Utc};
use std::net::IpAddr;

#[cfg(feature = "json")]
use serde::Serialize;

/// Target host resolved to an IP address.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub struct Target {
    pub name: String,
    pub ip: IpAddr,
    pub port: u16,
}

/// Server clock reading taken from a reply's transmit timestamp.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub struct ServerTime {
    pub target: Target,
    pub utc: DateTime<Utc>,
    pub local: DateTime<Local>,
}

/// Per-server probe result.
///
/// `probe_all` yields exactly one of these per input server; a probe's
/// outcome is never influenced by a sibling probe.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub enum ProbeOutcome {
    Success(ServerTime),
    Failure { server: String, reason: String },
}

impl ProbeOutcome {
    /// Name of the server this outcome belongs to, as supplied by the caller.
    pub fn server(&self) -> &str {
        match self {
            ProbeOutcome::Success(time) => &time.target.name,
            ProbeOutcome::Failure { server, .. } => server,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Success(_))
    }
}
