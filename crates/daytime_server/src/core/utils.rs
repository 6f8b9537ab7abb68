// Protocol constants and format strings
pub const PORT: u16 = 13;
pub const BACKLOG: u32 = 500;

/// Length of every daytime message on the wire, in bytes.
pub const DAYTIME_MSG_LEN: usize = 51;

/// Two-digit year, UTC. Always 17 characters wide.
pub const DATETIME_FORMAT: &str = "%y-%m-%d %H:%M:%S";

/// Literal tail of the NIST daytime line: leap second flag, DUT1 health,
/// advance, the `UTC(NIST)` label and the on-time marker.
pub const MESSAGE_TRAILER: &str = "0 0  00.0 UTC(NIST) * ";

/// Width of the MJD field. Values are carried modulo `10^MJD_WIDTH`.
pub const MJD_WIDTH: usize = 5;
pub const MJD_MODULUS: i64 = 100_000;
