use serde_json::Value;
use std::collections::HashMap;

use crate::model::{hex_keyed_object, parse_hex_map};
use crate::{Notification, NotificationDefinitionError};

pub type NotificationMap = HashMap<u64, Notification>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefinitionFormat {
    /// JSON5, so `//` and `/* */` comments and trailing commas are accepted.
    #[default]
    Json,
    /// YAML flow style accepts JSON plus `#` comments and trailing commas.
    Yaml,
}

impl DefinitionFormat {
    pub fn from_resource_name(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".yaml") || lower.ends_with(".yml") {
            Self::Yaml
        } else {
            Self::Json
        }
    }

    pub fn decode(&self, text: &str) -> Result<Value, NotificationDefinitionError> {
        Ok(match self {
            Self::Json => json5::from_str(text)?,
            Self::Yaml => serde_yml::from_str(text)?,
        })
    }
}

/// Validates and builds all notification definitions from the raw resource text.
/// Any invalid entry fails the whole set.
pub fn parse_definitions(
    text: &str,
    format: DefinitionFormat,
) -> Result<NotificationMap, NotificationDefinitionError> {
    let root = format.decode(text)?;
    parse_hex_map(
        hex_keyed_object(&root, "definition root")?,
        Notification::from_definition,
    )
}
