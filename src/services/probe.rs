use std::net::IpAddr;
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Local, Utc};
use futures::future::join_all;
use tracing::instrument;

use crate::adapters::{ntp_socket, resolver};
use crate::domain::ntp::{ProbeOutcome, ServerTime, Target};
use crate::error::ProbeError;
use crate::protocol::packet;

/// Parsed view of a target string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTarget<'a> {
    pub host: &'a str,
    pub port: Option<u16>,
    pub is_ipv6_literal: bool,
}

/// Strict port parsing with range check (1..=65535).
fn parse_port_strict(s: &str) -> Result<u16, ProbeError> {
    let raw = u32::from_str(s).map_err(|_| ProbeError::Other(format!("invalid port: '{s}'")))?;
    if raw == 0 || raw > u16::MAX as u32 {
        return Err(ProbeError::Other(format!(
            "port out of range [1..65535]: {raw}"
        )));
    }
    Ok(raw as u16)
}

#[inline]
fn colon_count(s: &str) -> usize {
    s.as_bytes().iter().filter(|&&b| b == b':').count()
}

/// Parse a user target string without regexes.
///
/// Supported forms: "hostname", "hostname:123", "1.2.3.4", "1.2.3.4:123",
/// "[2001:db8::1]", "[2001:db8::1]:123", and bare IPv6 ("2001:db8::1",
/// no port allowed). More than one unbracketed ':' means bare IPv6.
pub fn parse_target(input: &str) -> Result<ParsedTarget<'_>, ProbeError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ProbeError::Other("empty target".into()));
    }

    // Bracketed IPv6: "[v6]" or "[v6]:port"
    if let Some(rest) = s.strip_prefix('[') {
        let Some(bracket_pos) = rest.find(']') else {
            return Err(ProbeError::Other(format!("missing closing ']' in '{s}'")));
        };
        let host = &rest[..bracket_pos];
        let tail = &rest[bracket_pos + 1..];

        let port = if let Some(p) = tail.strip_prefix(':') {
            Some(parse_port_strict(p)?)
        } else if tail.is_empty() {
            None
        } else {
            return Err(ProbeError::Other(format!(
                "unexpected trailing characters in '{s}'"
            )));
        };

        return Ok(ParsedTarget {
            host,
            port,
            is_ipv6_literal: true,
        });
    }

    match colon_count(s) {
        0 => Ok(ParsedTarget {
            host: s,
            port: None,
            is_ipv6_literal: false,
        }),

        1 => {
            let mut it = s.rsplitn(2, ':');
            let port_str = it.next().unwrap();
            let host = it.next().unwrap_or("");
            if host.is_empty() {
                return Err(ProbeError::Other(format!(
                    "missing host before port in '{s}'"
                )));
            }
            let port = parse_port_strict(port_str)?;
            Ok(ParsedTarget {
                host,
                port: Some(port),
                is_ipv6_literal: false,
            })
        }

        _ => Ok(ParsedTarget {
            host: s,
            port: None,
            is_ipv6_literal: true,
        }),
    }
}

/// Probe a single server; every failure mode folds into the outcome.
///
/// One probe walks parse/resolve, bind, send, then races the first inbound
/// datagram against `timeout`. Exactly one outcome comes back and the socket
/// is released on every exit path.
#[instrument(skip(timeout))]
pub async fn probe_one(server: &str, ipv6: bool, timeout: Duration) -> ProbeOutcome {
    match probe_inner(server, ipv6, timeout).await {
        Ok(time) => ProbeOutcome::Success(time),
        Err(err) => {
            // Anything that keeps the request from leaving counts as a send
            // failure; the rest keep their own reason text.
            let reason = match err {
                ProbeError::Dns(msg) | ProbeError::Other(msg) => format!("send failed: {msg}"),
                other => other.to_string(),
            };
            ProbeOutcome::Failure {
                server: server.to_string(),
                reason,
            }
        }
    }
}

async fn probe_inner(
    server: &str,
    mut ipv6: bool,
    timeout: Duration,
) -> Result<ServerTime, ProbeError> {
    let parsed = parse_target(server)?;
    if parsed.is_ipv6_literal {
        ipv6 = true;
    }
    let ip: IpAddr = resolver::resolve_ip(parsed.host, ipv6)?;
    let port = parsed.port.unwrap_or(packet::NTP_PORT);

    let reply = ntp_socket::exchange((ip, port).into(), timeout).await?;
    let utc: DateTime<Utc> = packet::decode_transmit_time(&reply)?;
    let local: DateTime<Local> = DateTime::from(utc);

    Ok(ServerTime {
        target: Target {
            name: server.to_string(),
            ip,
            port,
        },
        utc,
        local,
    })
}

/// Probe every server concurrently and settle all of them.
///
/// The join never fails fast: each probe resolves on its own and the result
/// vector is in input order, one outcome per server, duplicates included.
#[instrument(skip(timeout))]
pub async fn probe_all(servers: &[String], ipv6: bool, timeout: Duration) -> Vec<ProbeOutcome> {
    let probes = servers
        .iter()
        .map(|s| probe_one(s, ipv6, timeout))
        .collect::<Vec<_>>();
    join_all(probes).await
}
