#[cfg(test)]
mod tests {
    use devlog::libs::config::{Config, DEFAULT_LIST_LIMIT};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_defaults_and_roundtrip(_ctx: &mut ConfigTestContext) {
        // A missing file yields defaults
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.list_limit(), DEFAULT_LIST_LIMIT);

        // Saved values survive a reload and override the default
        let config = Config { list_limit: Some(50) };
        config.save().unwrap();
        let reloaded = Config::read().unwrap();
        assert_eq!(reloaded, config);
        assert_eq!(reloaded.list_limit(), 50);
    }
}
