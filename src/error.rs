use thiserror::Error;

/// Top-level error type for the ntprobe library.
///
/// The `Display` text of a variant doubles as the human readable reason
/// carried by an unreachable server's outcome.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// DNS resolution failure.
    #[error("dns: {0}")]
    Dns(String),
    /// The request datagram never left the local socket.
    #[error("send failed: {0}")]
    Send(String),
    /// The transport reported an error after the request was sent.
    #[error("request failed: {0}")]
    Transport(String),
    /// Neither a reply nor a transport error arrived in time.
    #[error("timed out")]
    Timeout,
    /// A datagram arrived but is too short to hold the transmit timestamp.
    #[error("malformed reply: {0} bytes, need 44")]
    MalformedReply(usize),
    /// Underlying IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Other error cases.
    #[error("other: {0}")]
    Other(String),
}
