#[cfg(test)]
mod tests {
    use students::db::db::DB_FILE_NAME;
    use students::db::students::Students;
    use students::libs::config::{Config, DatabaseConfig, LoggingConfig, PhoneConfig, CONFIG_FILE_NAME};
    use students::libs::data_storage::DataStorage;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Points the data directory at a temporary folder for each config test.
    struct ConfigTestContext {
        temp_dir: TempDir,
        storage: DataStorage,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::with_base(temp_dir.path().join("data"));
            ConfigTestContext { temp_dir, storage }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        // When no config file exists, defaults are used.
        let config = Config::read_from(&ctx.storage).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.database.is_none());
        assert!(config.logging.is_none());
        assert!(config.phone.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            database: Some(DatabaseConfig {
                path: PathBuf::from("school.db"),
            }),
            logging: Some(LoggingConfig {
                level: "debug".to_string(),
                max_file_size: 1024,
                max_files: 2,
            }),
            phone: Some(PhoneConfig {
                country_code: Some("+216".to_string()),
            }),
        };
        config.save_to(&ctx.storage).unwrap();

        assert!(ctx.storage.base_path().join(CONFIG_FILE_NAME).exists());
        assert_eq!(Config::read_from(&ctx.storage).unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_config_file(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, r#"{ "phone": { "country_code": "+216" } }"#).unwrap();

        let config = Config::read_from(&ctx.storage).unwrap();
        assert!(config.database.is_none());
        assert_eq!(config.logging(), LoggingConfig::default());
        assert!(config.validator().is_valid_mobile("+216 12345678"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_config_is_an_error(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        assert!(Config::read_from(&ctx.storage).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_database_path_resolution(ctx: &mut ConfigTestContext) {
        let base = ctx.storage.base_path().to_path_buf();

        let default = Config::default();
        assert_eq!(default.database_path(&ctx.storage).unwrap(), base.join(DB_FILE_NAME));

        let relative = Config {
            database: Some(DatabaseConfig {
                path: PathBuf::from("school.db"),
            }),
            ..Config::default()
        };
        assert_eq!(relative.database_path(&ctx.storage).unwrap(), base.join("school.db"));

        let absolute_path = ctx.temp_dir.path().join("elsewhere.db");
        let absolute = Config {
            database: Some(DatabaseConfig { path: absolute_path.clone() }),
            ..Config::default()
        };
        assert_eq!(absolute.database_path(&ctx.storage).unwrap(), absolute_path);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_database_in_missing_directory_opens(ctx: &mut ConfigTestContext) {
        let relative = Config {
            database: Some(DatabaseConfig {
                path: PathBuf::from("school/2024/students.db"),
            }),
            ..Config::default()
        };
        let path = relative.database_path(&ctx.storage).unwrap();
        assert!(ctx.storage.base_path().join("school").join("2024").is_dir());
        let store = Students::open(&path).unwrap();
        store.insert("John Doe", "Math", "12345678").unwrap();
        assert!(path.exists());

        let absolute_path = ctx.temp_dir.path().join("elsewhere").join("nested").join("students.db");
        let absolute = Config {
            database: Some(DatabaseConfig { path: absolute_path.clone() }),
            ..Config::default()
        };
        let path = absolute.database_path(&ctx.storage).unwrap();
        assert_eq!(path, absolute_path);
        let store = Students::open(&path).unwrap();
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_logging_and_validator(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.storage).unwrap();

        let logging = config.logging();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.max_file_size, 10 * 1024 * 1024);
        assert_eq!(logging.max_files, 5);

        assert!(config.validator().is_valid_mobile("12345678"));
        assert!(!config.validator().is_valid_mobile("+216 12345678"));
    }
}
