use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_RESOURCE_NAME: &str = "notifications.json";

fn default_resource_name() -> String {
    DEFAULT_RESOURCE_NAME.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    pub config_dir: PathBuf,
    #[serde(default = "default_resource_name")]
    pub resource_name: String,
}

impl RegistryConfig {
    /// Create a new instance with the default resource name
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            resource_name: default_resource_name(),
        }
    }

    pub fn config_dir(mut self, config_dir: impl Into<PathBuf>) -> Self {
        self.config_dir = config_dir.into();
        self
    }

    pub fn resource_name(mut self, resource_name: impl Into<String>) -> Self {
        self.resource_name = resource_name.into();
        self
    }
}
