#[cfg(all(test, feature = "fs"))]
mod tests {
    use hc_notification_defs::*;

    const SMOKE: &str = r#"{
        "0x1": {
            "name": "Smoke Alarm",
            "variables": [
                { "name": "Sensor status", "states": { "0x1": { "label": "Smoke detected" } } }
            ],
            "events": { "0x7": { "label": "Maintenance required" } }
        }
    }"#;

    #[tokio::test]
    async fn test_registry_from_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_RESOURCE_NAME), SMOKE).unwrap();

        let registry = NotificationRegistry::from_config(&RegistryConfig::new(dir.path()));
        let smoke = registry.resolve(1, 1).await.unwrap().unwrap();
        assert_eq!(smoke.label(), "Smoke detected");
        let maintenance = registry.resolve(1, 7).await.unwrap().unwrap();
        assert!(maintenance.is_event());
    }

    #[tokio::test]
    async fn test_missing_file_is_permanent() {
        let dir = tempfile::tempdir().unwrap();
        let config = RegistryConfig::new(dir.path()).resource_name("smoke.json");
        let registry = NotificationRegistry::from_config(&config);

        assert_eq!(registry.resolve(1, 1).await.unwrap(), None);
        assert!(registry.is_failed());

        std::fs::write(dir.path().join("smoke.json"), SMOKE).unwrap();
        assert_eq!(registry.resolve(1, 1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_config_dir_source() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("present.json"), "{}").unwrap();
        let source = ConfigDirSource::new(dir.path());

        assert_eq!(source.config_dir(), &dir.path().to_path_buf());
        assert_eq!(source.read_resource("present.json").await.unwrap().as_deref(), Some("{}"));
        assert_eq!(source.read_resource("absent.json").await.unwrap(), None);
    }

    #[test]
    fn test_registry_config_deserialize() {
        let config: RegistryConfig =
            serde_json::from_str(r#"{ "config_dir": "/etc/homecontrol" }"#).unwrap();
        assert_eq!(config.config_dir, std::path::PathBuf::from("/etc/homecontrol"));
        assert_eq!(config.resource_name, DEFAULT_RESOURCE_NAME);

        let config = RegistryConfig::new("/tmp")
            .config_dir("/etc/homecontrol")
            .resource_name("notifications.yaml");
        assert_eq!(config.config_dir, std::path::PathBuf::from("/etc/homecontrol"));
        assert_eq!(config.resource_name, "notifications.yaml");
    }
}
