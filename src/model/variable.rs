use serde_json::Value;
use std::collections::HashMap;

use super::{parse_hex_map, required_str};
use crate::{NotificationDefinitionError, NotificationState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    /// Whether the variable falls back to an idle reading after reporting a state.
    pub idle_capable: bool,
    pub states: HashMap<u64, NotificationState>,
}

impl Variable {
    pub fn from_definition(definition: &Value) -> Result<Self, NotificationDefinitionError> {
        let name = required_str(definition, "name", "variable")?;
        // only an explicit `false` disables idle
        let idle_capable = !matches!(definition.get("idle"), Some(Value::Bool(false)));
        let states = match definition.get("states") {
            Some(Value::Object(states)) => {
                parse_hex_map(states, NotificationState::from_definition)?
            }
            _ => {
                return Err(NotificationDefinitionError::malformed(format!(
                    "variable [{}] has no states object",
                    name
                )));
            }
        };
        Ok(Self {
            name,
            idle_capable,
            states,
        })
    }

    pub fn state(&self, id: u64) -> Option<&NotificationState> {
        self.states.get(&id)
    }
}
