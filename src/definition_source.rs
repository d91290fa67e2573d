use std::{future::Future, sync::Arc};

/// Supplies the raw text of a named definition resource.
pub trait DefinitionSource: Send + Sync {
    /// `Ok(None)` signals that the resource does not exist.
    fn read_resource(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<String>, std::io::Error>> + Send;
}

impl<T> DefinitionSource for Arc<T>
where
    T: DefinitionSource,
{
    fn read_resource(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<String>, std::io::Error>> + Send {
        (**self).read_resource(name)
    }
}

#[cfg(feature = "fs")]
mod config_dir {
    use std::{io::ErrorKind, path::PathBuf};

    use super::DefinitionSource;

    /// Reads definition resources from files inside a configuration directory.
    #[derive(Debug, Clone)]
    pub struct ConfigDirSource {
        config_dir: PathBuf,
    }

    impl ConfigDirSource {
        pub fn new(config_dir: impl Into<PathBuf>) -> Self {
            Self {
                config_dir: config_dir.into(),
            }
        }

        pub fn config_dir(&self) -> &PathBuf {
            &self.config_dir
        }
    }

    impl DefinitionSource for ConfigDirSource {
        async fn read_resource(&self, name: &str) -> Result<Option<String>, std::io::Error> {
            let path = self.config_dir.join(name);
            match tokio::fs::read_to_string(&path).await {
                Ok(text) => Ok(Some(text)),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
                Err(err) => Err(err),
            }
        }
    }
}

#[cfg(feature = "fs")]
pub use config_dir::*;
