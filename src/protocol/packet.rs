use chrono::{DateTime, Utc};

use crate::error::ProbeError;

/// Size of a client request; also the minimum size of a full reply.
pub const NTP_PACKET_LEN: usize = 48;

/// Standard NTP UDP port.
pub const NTP_PORT: u16 = 123;

/// Seconds between the NTP epoch (1900-01-01) and the Unix epoch (1970-01-01).
pub const NTP_UNIX_OFFSET: u32 = 2_208_988_800;

/// Byte offset of the transmit timestamp seconds field in a reply.
const TRANSMIT_SECONDS_OFFSET: usize = 40;

/// Build the 48-byte client request.
///
/// Byte 0 packs LI=0, VN=3, Mode=3 (client); every other byte stays zero.
pub fn encode_request() -> [u8; NTP_PACKET_LEN] {
    let mut buf = [0u8; NTP_PACKET_LEN];
    buf[0] = 0x1B;
    buf
}

/// Extract the transmit timestamp from a server reply, at second granularity.
///
/// Only the 4-byte big-endian seconds field at offset 40 is interpreted; the
/// fraction field at offset 44 is ignored, and no mode/version/stratum
/// validation takes place. The 32-bit seconds field wraps in 2036 and no era
/// disambiguation is attempted.
pub fn decode_transmit_time(reply: &[u8]) -> Result<DateTime<Utc>, ProbeError> {
    let Some(field) = reply.get(TRANSMIT_SECONDS_OFFSET..TRANSMIT_SECONDS_OFFSET + 4) else {
        return Err(ProbeError::MalformedReply(reply.len()));
    };
    let since_1900 = u32::from_be_bytes([field[0], field[1], field[2], field[3]]);
    let since_1970 = i64::from(since_1900) - i64::from(NTP_UNIX_OFFSET);
    DateTime::from_timestamp(since_1970, 0)
        .ok_or_else(|| ProbeError::MalformedReply(reply.len()))
}
