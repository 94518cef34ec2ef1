pub mod ntp_socket;
pub mod resolver;
