use std::net::{Ipv6Addr, SocketAddr};
use std::time::Duration;

use tokio::net::UdpSocket;
use tracing::debug;

use crate::error::ProbeError;
use crate::protocol::packet;

/// Perform one request/reply exchange with an NTP server.
///
/// Binds a fresh socket owned by this call, sends the 48-byte client request
/// to `addr` and waits for the first inbound datagram, raced against
/// `timeout`. The socket stays unconnected, so any datagram landing on the
/// ephemeral port is taken as the reply with no source address check — a
/// documented weakness of the probe, kept rather than hardened. The socket is
/// dropped on every exit path.
pub async fn exchange(addr: SocketAddr, timeout: Duration) -> Result<Vec<u8>, ProbeError> {
    let bind_addr: SocketAddr = if addr.is_ipv6() {
        (Ipv6Addr::UNSPECIFIED, 0).into()
    } else {
        ([0, 0, 0, 0], 0).into()
    };
    let socket = UdpSocket::bind(bind_addr)
        .await
        .map_err(|e| ProbeError::Send(e.to_string()))?;

    let request = packet::encode_request();
    socket
        .send_to(&request, addr)
        .await
        .map_err(|e| ProbeError::Send(e.to_string()))?;
    debug!(%addr, local = ?socket.local_addr().ok(), "request sent");

    let mut buf = [0u8; 1024];
    let received = tokio::time::timeout(timeout, socket.recv_from(&mut buf))
        .await
        .map_err(|_| ProbeError::Timeout)?;
    let (len, from) = received.map_err(|e| ProbeError::Transport(e.to_string()))?;
    debug!(len, %from, "reply received");

    Ok(buf[..len].to_vec())
}
