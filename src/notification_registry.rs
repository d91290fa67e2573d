use tokio::sync::OnceCell;

use crate::{
    parse_definitions, DefinitionFormat, DefinitionSource, Notification,
    NotificationDefinitionError, NotificationMap, ValueDescriptor, DEFAULT_RESOURCE_NAME,
};

#[derive(Debug)]
pub enum DefinitionState {
    Loaded(NotificationMap),
    /// A recognized load failure happened, the registry stays empty for its whole lifetime.
    FailedPermanently,
}

impl DefinitionState {
    pub fn definitions(&self) -> Option<&NotificationMap> {
        match self {
            DefinitionState::Loaded(definitions) => Some(definitions),
            DefinitionState::FailedPermanently => None,
        }
    }
}

/// Lazily loaded lookup from notification type to its definition.
///
/// The definitions are read from the source on the first query only. Concurrent first queries
/// share a single load. A missing or malformed resource is reported once and leaves the
/// registry permanently empty, while any other error is returned to the caller and the next
/// query tries again.
#[derive(Debug)]
pub struct NotificationRegistry<S>
where
    S: DefinitionSource,
{
    source: S,
    resource_name: String,
    state: OnceCell<DefinitionState>,
}

impl<S> NotificationRegistry<S>
where
    S: DefinitionSource,
{
    pub fn new(source: S) -> Self {
        Self::with_resource_name(source, DEFAULT_RESOURCE_NAME)
    }

    pub fn with_resource_name(source: S, resource_name: impl Into<String>) -> Self {
        Self {
            source,
            resource_name: resource_name.into(),
            state: OnceCell::new(),
        }
    }

    /// Creates a registry that is already loaded and never reads from its source.
    pub fn preloaded(source: S, definitions: NotificationMap) -> Self {
        Self {
            source,
            resource_name: DEFAULT_RESOURCE_NAME.to_string(),
            state: OnceCell::new_with(Some(DefinitionState::Loaded(definitions))),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    /// Reads and parses the definition resource without touching the cached state.
    pub async fn load(&self) -> Result<NotificationMap, NotificationDefinitionError> {
        let Some(text) = self.source.read_resource(&self.resource_name).await? else {
            return Err(NotificationDefinitionError::ResourceMissing(
                self.resource_name.clone(),
            ));
        };
        parse_definitions(&text, DefinitionFormat::from_resource_name(&self.resource_name))
    }

    async fn state(&self) -> Result<&DefinitionState, NotificationDefinitionError> {
        self.state
            .get_or_try_init(|| async {
                match self.load().await {
                    Ok(definitions) => {
                        log::debug!(
                            "Loaded {} notification definitions from [{}]",
                            definitions.len(),
                            self.resource_name
                        );
                        Ok(DefinitionState::Loaded(definitions))
                    }
                    Err(err) if err.is_recognized() => {
                        log::error!("Unable to load notification definitions: {}", err);
                        Ok(DefinitionState::FailedPermanently)
                    }
                    Err(err) => Err(err),
                }
            })
            .await
    }

    pub async fn lookup_notification(
        &self,
        notification_type: u64,
    ) -> Result<Option<&Notification>, NotificationDefinitionError> {
        Ok(self
            .state()
            .await?
            .definitions()
            .and_then(|definitions| definitions.get(&notification_type)))
    }

    pub async fn resolve(
        &self,
        notification_type: u64,
        value: u64,
    ) -> Result<Option<ValueDescriptor>, NotificationDefinitionError> {
        Ok(self
            .lookup_notification(notification_type)
            .await?
            .and_then(|notification| notification.lookup_value(value)))
    }

    /// Known notification types, in no particular order.
    pub async fn notification_ids(&self) -> Result<Vec<u64>, NotificationDefinitionError> {
        Ok(self
            .state()
            .await?
            .definitions()
            .map(|definitions| definitions.keys().copied().collect())
            .unwrap_or_default())
    }

    /// True once a load has failed in a recognized way.
    pub fn is_failed(&self) -> bool {
        matches!(self.state.get(), Some(DefinitionState::FailedPermanently))
    }

    pub fn is_loaded(&self) -> bool {
        self.state.initialized()
    }
}

#[cfg(feature = "fs")]
impl NotificationRegistry<crate::ConfigDirSource> {
    pub fn from_config(config: &crate::RegistryConfig) -> Self {
        Self::with_resource_name(
            crate::ConfigDirSource::new(config.config_dir.clone()),
            config.resource_name.clone(),
        )
    }
}
