use std::net::{IpAddr, SocketAddr, ToSocketAddrs};

use crate::error::ProbeError;
use crate::protocol::packet::NTP_PORT;

/// Resolve the IP address for a host name according to IPv4/IPv6 mode.
///
/// IPv4 addresses win unless `ipv6_only` is set, in which case anything
/// else is discarded.
pub fn resolve_ip(host: &str, ipv6_only: bool) -> Result<IpAddr, ProbeError> {
    let addrs: Vec<SocketAddr> = (host, NTP_PORT)
        .to_socket_addrs()
        .map_err(|e| ProbeError::Dns(format!("resolution failed for '{host}': {e}")))?
        .collect();

    let (v4, v6): (Vec<IpAddr>, Vec<IpAddr>) = addrs
        .into_iter()
        .map(|a| a.ip())
        .partition(|ip| ip.is_ipv4());

    let pick = if ipv6_only {
        v6.into_iter().next()
    } else {
        v4.into_iter().chain(v6).next()
    };

    pick.ok_or_else(|| {
        if ipv6_only {
            ProbeError::Dns(format!("no IPv6 address found for '{host}'"))
        } else {
            ProbeError::Dns(format!("no IP address found for '{host}'"))
        }
    })
}
