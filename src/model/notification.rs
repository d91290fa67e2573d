use serde_json::Value;
use std::collections::HashMap;

use super::{hex_keyed_object, parse_hex_map, required_str};
use crate::{NotificationDefinitionError, NotificationEvent, ValueDescriptor, Variable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub name: String,
    pub variables: Vec<Variable>,
    pub events: HashMap<u64, NotificationEvent>,
}

impl Notification {
    pub fn from_definition(
        id: u64,
        definition: &Value,
    ) -> Result<Self, NotificationDefinitionError> {
        let name = required_str(definition, "name", "notification")?;
        // anything but an array is treated as "no variables"
        let variables = match definition.get("variables") {
            Some(Value::Array(variables)) => variables
                .iter()
                .map(Variable::from_definition)
                .collect::<Result<Vec<_>, _>>()?,
            _ => Vec::new(),
        };
        let events = match definition.get("events") {
            None | Some(Value::Null) => HashMap::new(),
            Some(events) => parse_hex_map(
                hex_keyed_object(events, "events")?,
                NotificationEvent::from_definition,
            )?,
        };
        Ok(Self {
            id,
            name,
            variables,
            events,
        })
    }

    /// Resolves a reported value. Events take precedence over variable states; variables are
    /// searched in definition order and the first one knowing the value wins.
    pub fn lookup_value(&self, value: u64) -> Option<ValueDescriptor> {
        if let Some(event) = self.events.get(&value) {
            return Some(ValueDescriptor::Event {
                label: event.label.clone(),
                description: event.description.clone(),
            });
        }
        self.variables.iter().find_map(|variable| {
            variable.state(value).map(|state| ValueDescriptor::State {
                value,
                idle: variable.idle_capable,
                label: state.label.clone(),
                description: state.description.clone(),
                variable_name: variable.name.clone(),
            })
        })
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|variable| variable.name == name)
    }

    pub fn event(&self, id: u64) -> Option<&NotificationEvent> {
        self.events.get(&id)
    }
}
