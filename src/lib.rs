mod definition_error;
mod definition_format;
mod definition_source;
mod hex_id;
mod model;
mod notification_registry;
mod registry_config;

pub use definition_error::*;
pub use definition_format::*;
pub use definition_source::*;
pub use hex_id::*;
pub use model::*;
pub use notification_registry::*;
pub use registry_config::*;
