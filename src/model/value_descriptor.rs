use serde::Serialize;

/// Result of resolving a reported value against a notification definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ValueDescriptor {
    #[serde(rename_all = "camelCase")]
    State {
        value: u64,
        idle: bool,
        label: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        variable_name: String,
    },
    Event {
        label: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
}

impl ValueDescriptor {
    pub fn label(&self) -> &str {
        match self {
            Self::State { label, .. } | Self::Event { label, .. } => label,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::State { description, .. } | Self::Event { description, .. } => {
                description.as_deref()
            }
        }
    }

    pub fn is_event(&self) -> bool {
        matches!(self, Self::Event { .. })
    }
}
