use serde_json::Value;

use super::{optional_str, required_str};
use crate::NotificationDefinitionError;

/// One discrete value a [`Variable`](crate::Variable) can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationState {
    pub id: u64,
    pub label: String,
    pub description: Option<String>,
}

impl NotificationState {
    pub fn from_definition(
        id: u64,
        definition: &Value,
    ) -> Result<Self, NotificationDefinitionError> {
        Ok(Self {
            id,
            label: required_str(definition, "label", "state")?,
            description: optional_str(definition, "description"),
        })
    }
}

/// A momentary occurrence reported under a notification type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEvent {
    pub id: u64,
    pub label: String,
    pub description: Option<String>,
}

impl NotificationEvent {
    pub fn from_definition(
        id: u64,
        definition: &Value,
    ) -> Result<Self, NotificationDefinitionError> {
        Ok(Self {
            id,
            label: required_str(definition, "label", "event")?,
            description: optional_str(definition, "description"),
        })
    }
}
