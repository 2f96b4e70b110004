#[cfg(test)]
mod tests {
    use autorename::{
        affix::{addition, format_numeric, has_placeholder, repeat_affix, MAX_WIDTH},
        Placement, Renamer, RenamerConfig,
    };

    #[test]
    fn test_placement_flags() {
        assert!(Placement::NumericSuffix.is_numeric());
        assert!(Placement::NumericPrefix.is_numeric());
        assert!(!Placement::StringSuffix.is_numeric());

        assert!(Placement::NumericPrefix.is_prefix());
        assert!(Placement::StringPrefix.is_prefix());
        assert!(!Placement::NumericSuffix.is_prefix());
        assert!(!Placement::StringSuffix.is_prefix());
    }

    #[test]
    fn test_placement_default_and_names() {
        assert_eq!(Placement::default(), Placement::NumericSuffix);
        assert_eq!(Placement::NumericSuffix.to_string(), "numeric-suffix");
        assert_eq!(Placement::StringPrefix.to_string(), "string-prefix");
    }

    #[test]
    fn test_numeric_addition_uses_format() {
        let config = RenamerConfig::default();
        assert_eq!(addition(&config, 2), "(2)");
        assert_eq!(addition(&config, 10), "(10)");
    }

    #[test]
    fn test_string_addition_repeats_affix() {
        let config = RenamerConfig {
            placement: Placement::StringPrefix,
            string_affix: "Copy".into(),
            separator: "-".into(),
            ..Default::default()
        };
        assert_eq!(addition(&config, 1), "Copy");
        assert_eq!(addition(&config, 3), "Copy-Copy-Copy");
    }

    #[test]
    fn test_empty_affix_yields_only_separators() {
        assert_eq!(repeat_affix("", "_", 3), "__");
        assert_eq!(repeat_affix("a", "", 0), "");
    }

    #[test]
    fn test_zero_padding() {
        assert_eq!(format_numeric("%03d", 7), "007");
        assert_eq!(format_numeric("%03d", 1234), "1234");
        assert_eq!(format_numeric("v%d", 5), "v5");
    }

    #[test]
    fn test_format_without_placeholder_is_literal() {
        assert!(!has_placeholder("copy"));
        assert_eq!(format_numeric("copy", 4), "copy");
    }

    #[test]
    fn test_has_placeholder() {
        assert!(has_placeholder("(%d)"));
        assert!(has_placeholder("_%02d"));
        assert!(!has_placeholder("%s"));
    }

    #[test]
    fn test_oversized_width_stays_literal() {
        assert_eq!(format_numeric("(%65536d)", 2), "(%65536d)");
        assert_eq!(format_numeric("(%099999999999999999999999d)", 2), "(%099999999999999999999999d)");
        assert!(!has_placeholder("(%65536d)"));

        let widest = format!("%0{MAX_WIDTH}d");
        assert!(has_placeholder(&widest));
        assert_eq!(format_numeric(&widest, 1).len(), MAX_WIDTH);
    }

    #[test]
    fn test_oversized_width_falls_through_to_next_placeholder() {
        assert_eq!(format_numeric("%70000d-%d", 3), "%70000d-3");
    }

    #[test]
    fn test_oversized_width_is_rejected_but_never_panics() {
        let config = RenamerConfig {
            numeric_format: "(%65536d)".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let mut renamer = Renamer::with_config(config);
        assert_eq!(renamer.get("a.txt"), "a.txt");
        assert_eq!(renamer.get("a.txt"), "a(%65536d).txt");
    }
}
