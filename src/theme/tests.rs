//! Tests for the theme system

#[cfg(test)]
mod tests {
    use crate::theme::models::Theme;
    use crate::theme::parser::parse_theme;
    use rstest::rstest;

    #[test]
    fn test_dracula_theme_parsing() {
        let yaml_content = "--background: \"#282a36\"
--accent: \"#bd93f9\"
--unread: \"#8be9fd\"
";

        let theme = parse_theme("dracula", yaml_content).unwrap();
        assert_eq!(theme.len(), 3);
        assert_eq!(theme.get("--accent"), Some("#bd93f9"));
    }

    #[test]
    fn test_theme_serializes_as_flat_map() {
        let theme = Theme::new().add("--a", "1").add("--b", "x y");
        let yaml = serde_yaml::to_string(&theme).unwrap();
        assert_eq!(yaml.lines().count(), 2);
        assert_eq!(parse_theme("flat", &yaml).unwrap(), theme);
    }

    #[rstest]
    #[case("--x", true)]
    #[case("--", true)]
    #[case("-x", false)]
    #[case("x--", false)]
    #[case("", false)]
    fn test_property_prefix(#[case] name: &str, #[case] valid: bool) {
        let theme = Theme::new().add(name, "1");
        assert_eq!(theme.invalid_names().is_empty(), valid);
    }
}
