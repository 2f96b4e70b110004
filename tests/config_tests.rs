
#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use autorename::{
        cli::ConfigArgs,
        config::DEFAULT_NUMERIC_FORMAT,
        errors::RenamerError,
        utils::humanize,
        Placement, RenamerConfig,
    };

    use crate::test_utils::write_config;

    #[test]
    fn test_default_config() {
        let config = RenamerConfig::default();
        assert_eq!(config.placement, Placement::NumericSuffix);
        assert_eq!(config.numeric_format, DEFAULT_NUMERIC_FORMAT);
        assert!(config.string_affix.is_empty());
        assert!(config.separator.is_empty());
        assert!(config.connector.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let (_dir, path) =
            write_config(r#"{ "placement": "string-suffix", "string_affix": "Copy" }"#);

        let config = RenamerConfig::load_from_file(&path).unwrap();
        assert_eq!(config.placement, Placement::StringSuffix);
        assert_eq!(config.string_affix, "Copy");
        assert_eq!(config.numeric_format, "(%d)");
    }

    #[test]
    fn test_load_rejects_unknown_fields() {
        let (_dir, path) = write_config(r#"{ "placment": "numeric-prefix" }"#);

        let err = RenamerConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, RenamerError::Json { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let err = RenamerConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, RenamerError::MissingConfig(p) if p == path));
    }

    #[test]
    fn test_validate_numeric_format_needs_placeholder() {
        let config = RenamerConfig {
            numeric_format: "copy".into(),
            ..Default::default()
        };

        let err = config.validate().unwrap_err();
        assert!(matches!(err, RenamerError::InvalidFormat(ref f) if f == "copy"));
        assert!(humanize(&err).contains("%d"));
    }

    #[test]
    fn test_validate_string_placement_needs_affix() {
        let mut config = RenamerConfig {
            placement: Placement::StringPrefix,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(RenamerError::Config(_))));

        config.string_affix = "old".into();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_json_output_reloads() {
        let config = RenamerConfig {
            placement: Placement::NumericPrefix,
            connector: "-".into(),
            ..Default::default()
        };
        let (_dir, path) = write_config(&config.to_json().unwrap());

        assert_eq!(RenamerConfig::load_from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_flags_override_file() {
        let (_dir, path) = write_config(
            r#"{ "placement": "string-suffix", "string_affix": "Copy", "connector": " " }"#,
        );
        let args = ConfigArgs {
            config: Some(path),
            connector: Some("_".into()),
            separator: Some("-".into()),
            ..Default::default()
        };

        let config = args.resolve().unwrap();
        assert_eq!(config.placement, Placement::StringSuffix);
        assert_eq!(config.string_affix, "Copy");
        assert_eq!(config.connector, "_");
        assert_eq!(config.separator, "-");
    }

    #[test]
    fn test_resolved_config_is_validated() {
        let (_dir, path) = write_config("{}");
        let args = ConfigArgs {
            config: Some(path),
            numeric_format: Some("no placeholder".into()),
            ..Default::default()
        };

        assert!(matches!(args.resolve(), Err(RenamerError::InvalidFormat(_))));
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let args = ConfigArgs {
            config: Some(PathBuf::from("/definitely/not/here/autorename.json")),
            ..Default::default()
        };

        assert!(matches!(args.resolve(), Err(RenamerError::MissingConfig(_))));
    }
}
