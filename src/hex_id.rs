use regex::Regex;
use std::sync::LazyLock;

use crate::NotificationDefinitionError;

static HEX_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^0x[0-9a-f]+$").expect("hex key pattern is valid"));

/// Parses a definition key of the form `0x1f` (case-insensitive) into its numeric id.
pub fn parse_hex_id(key: &str) -> Result<u64, NotificationDefinitionError> {
    if !HEX_KEY.is_match(key) {
        return Err(NotificationDefinitionError::malformed(format!(
            "invalid hexadecimal key [{}]",
            key
        )));
    }
    u64::from_str_radix(&key[2..], 16).map_err(|err| {
        NotificationDefinitionError::malformed(format!(
            "hexadecimal key [{}] out of range: {}",
            key, err
        ))
    })
}

pub fn format_hex_id(id: u64) -> String {
    format!("{:#x}", id)
}
