//! Merging themes and rendering them to a stylesheet.

use crate::theme::Theme;

/// Name written in the header comment of every generated stylesheet.
pub const GENERATOR: &str = "theme-registry";

/// Layers `selected` over `default`.
///
/// Starts from the default map and overlays the selected map. On a name
/// collision the selected value wins and keeps the default's position, so
/// default names come first followed by names only the selected theme has.
pub fn merge(default: Option<&Theme>, selected: &Theme) -> Theme {
    let mut merged = default.cloned().unwrap_or_default();
    for (name, value) in selected.iter() {
        merged.set(name, value);
    }
    merged
}

/// Renders `theme` as a `:root` custom-property block headed by a comment naming `key`.
pub fn render_stylesheet(key: &str, theme: &Theme) -> String {
    let mut css = format!("/* {GENERATOR} generated theme {key} */\n:root {{\n");
    for (name, value) in theme.iter() {
        css.push_str(&format!("  {name}: {value};\n"));
    }
    css.push_str("}\n");
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_selected_wins_in_place() {
        let default = Theme::new().add("--a", "1").add("--c", "4");
        let selected = Theme::new().add("--b", "3").add("--a", "2");

        let merged = merge(Some(&default), &selected);
        let pairs: Vec<(&str, &str)> = merged.iter().collect();
        assert_eq!(pairs, vec![("--a", "2"), ("--c", "4"), ("--b", "3")]);
    }

    #[test]
    fn test_merge_without_default() {
        let selected = Theme::new().add("--a", "1");
        assert_eq!(merge(None, &selected), selected);
    }

    #[test]
    fn test_merge_leaves_inputs_untouched() {
        let default = Theme::new().add("--a", "1");
        let selected = Theme::new().add("--a", "2");
        let _ = merge(Some(&default), &selected);
        assert_eq!(default.get("--a"), Some("1"));
    }

    #[test]
    fn test_render_stylesheet() {
        let theme = Theme::new().add("--a", "2").add("--b", "3");
        assert_eq!(
            render_stylesheet("dark", &theme),
            "/* theme-registry generated theme dark */\n:root {\n  --a: 2;\n  --b: 3;\n}\n"
        );
    }

    #[test]
    fn test_render_empty_theme() {
        assert_eq!(
            render_stylesheet("empty", &Theme::new()),
            "/* theme-registry generated theme empty */\n:root {\n}\n"
        );
    }
}
