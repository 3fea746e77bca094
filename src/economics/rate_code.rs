//! Static rate-code lookup

/// Label used for codes outside the published table.
pub const UNKNOWN_RATE_CODE: &str = "Unknown";

/// Map a trip's rate-code identifier to its human-readable name.
pub fn rate_code_name(code: i64) -> &'static str {
    match code {
        1 => "Standard rate",
        2 => "JFK",
        3 => "Newark",
        4 => "Nassau or Westchester",
        5 => "Negotiated fare",
        6 => "Group ride",
        99 => "Unknown",
        _ => UNKNOWN_RATE_CODE,
    }
}
