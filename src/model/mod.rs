mod notification;
mod notification_state;
mod value_descriptor;
mod variable;

pub use notification::*;
pub use notification_state::*;
pub use value_descriptor::*;
pub use variable::*;

use serde_json::{Map, Value};
use std::collections::{hash_map::Entry, HashMap};

use crate::{parse_hex_id, NotificationDefinitionError};

/// Builds an id keyed map from an object whose keys are hexadecimal ids.
///
/// All keys are validated before any entry is built. Two keys naming the same id
/// (`0x1` and `0x01`) are rejected.
pub(crate) fn parse_hex_map<T, F>(
    entries: &Map<String, Value>,
    build: F,
) -> Result<HashMap<u64, T>, NotificationDefinitionError>
where
    F: Fn(u64, &Value) -> Result<T, NotificationDefinitionError>,
{
    let mut keys: HashMap<u64, &str> = HashMap::with_capacity(entries.len());
    for key in entries.keys() {
        match keys.entry(parse_hex_id(key)?) {
            Entry::Occupied(first) => {
                return Err(NotificationDefinitionError::malformed(format!(
                    "keys [{}] and [{}] name the same id",
                    first.get(),
                    key
                )));
            }
            Entry::Vacant(slot) => {
                slot.insert(key);
            }
        }
    }
    keys.into_iter()
        .map(|(id, key)| -> Result<(u64, T), NotificationDefinitionError> {
            Ok((id, build(id, &entries[key])?))
        })
        .collect()
}

pub(crate) fn hex_keyed_object<'a>(
    value: &'a Value,
    kind: &str,
) -> Result<&'a Map<String, Value>, NotificationDefinitionError> {
    value.as_object().ok_or_else(|| {
        NotificationDefinitionError::malformed(format!(
            "{} is not an object keyed by hexadecimal ids: {}",
            kind, value
        ))
    })
}

pub(crate) fn required_str(
    definition: &Value,
    field: &str,
    kind: &str,
) -> Result<String, NotificationDefinitionError> {
    definition
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| {
            NotificationDefinitionError::malformed(format!(
                "{} is missing text field [{}]",
                kind, field
            ))
        })
}

/// Non-text values count as absent.
pub(crate) fn optional_str(definition: &Value, field: &str) -> Option<String> {
    definition
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
}
