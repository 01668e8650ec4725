use clap::{command, value_parser, Arg, ArgMatches, Command};
use color_eyre::eyre::{eyre, Result};
use std::path::PathBuf;
use theme_registry::config::Config;
use theme_registry::logger::setup_logger;
use theme_registry::theme::load_themes;
use theme_registry::{FileSink, FileStore, ThemeRegistry, ThemeStore, DEFAULT_THEME_KEY};

type CliRegistry = ThemeRegistry<FileSink, FileStore>;

fn cli() -> Command {
    command!()
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Config file (default: ~/.config/theme-registry/config.yml)"),
        )
        .arg(
            Arg::new("themes-dir")
                .long("themes-dir")
                .global(true)
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .help("Directory of *.yml theme files"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .global(true)
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Stylesheet file to write"),
        )
        .subcommand(Command::new("list").about("List registered themes"))
        .subcommand(
            Command::new("apply")
                .about("Apply a theme and remember it")
                .arg(Arg::new("key").required(true)),
        )
        .subcommand(
            Command::new("restore")
                .about("Apply the remembered theme")
                .arg(
                    Arg::new("fallback")
                        .long("fallback")
                        .value_name("KEY")
                        .help("Theme to apply when nothing usable is remembered"),
                ),
        )
        .subcommand(Command::new("current").about("Print the remembered theme key"))
        .subcommand(
            Command::new("show")
                .about("Print the stylesheet for a theme without applying it")
                .arg(Arg::new("key").required(true)),
        )
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let matches = cli().get_matches();
    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    setup_logger(config.log_level()?);

    let mut registry = build_registry(&config, &matches)?;
    run(&mut registry, &config, &matches)
}

/// Compose the registry from the config and the command line overrides.
fn build_registry(config: &Config, matches: &ArgMatches) -> Result<CliRegistry> {
    let themes_dir = match matches.get_one::<PathBuf>("themes-dir") {
        Some(dir) => dir.clone(),
        None => config.themes_dir()?,
    };
    let stylesheet_path = match matches.get_one::<PathBuf>("output") {
        Some(path) => path.clone(),
        None => config.stylesheet_path()?,
    };
    let store = match &config.state_path {
        Some(path) => FileStore::new(path.clone(), config.namespace()),
        None => FileStore::in_cache_dir(config.namespace())?,
    };

    let mut registry = ThemeRegistry::new(FileSink::new(stylesheet_path), store);
    registry.register_themes(load_themes(&themes_dir)?)?;
    Ok(registry)
}

fn run(registry: &mut CliRegistry, config: &Config, matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("list", _)) => {
            let persisted = registry.store().get().ok().flatten();
            for key in registry.theme_keys() {
                let mut marks = Vec::new();
                if key == DEFAULT_THEME_KEY {
                    marks.push("base");
                }
                if persisted.as_deref() == Some(key) {
                    marks.push("active");
                }
                if marks.is_empty() {
                    println!("{key}");
                } else {
                    println!("{key} ({})", marks.join(", "));
                }
            }
        }
        Some(("apply", sub)) => {
            let key = required(sub, "key")?;
            registry.apply_theme(key)?;
            println!("{}", registry.sink().path().display());
        }
        Some(("restore", sub)) => {
            let fallback = sub
                .get_one::<String>("fallback")
                .map(String::as_str)
                .or(config.fallback_theme.as_deref());
            match registry.apply_theme_from_storage(fallback)? {
                Some(key) => println!("{key}"),
                None => return Err(eyre!("No theme remembered and no fallback given")),
            }
        }
        Some(("current", _)) => match registry.store().get()? {
            Some(key) => println!("{key}"),
            None => return Err(eyre!("No theme remembered")),
        },
        Some(("show", sub)) => {
            let key = required(sub, "key")?;
            let css = registry
                .render_theme(key)
                .ok_or_else(|| eyre!("No theme registered for key {key}"))?;
            print!("{css}");
        }
        _ => unreachable!("subcommand is required"),
    }
    Ok(())
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str> {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| eyre!("Missing argument {name}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition() {
        cli().debug_assert();
    }

    fn setup(dir: &TempDir) -> (Config, PathBuf) {
        let themes_dir = dir.path().join("themes");
        fs::create_dir_all(&themes_dir).unwrap();
        fs::write(themes_dir.join("default.yml"), "--radius: 4px\n").unwrap();
        fs::write(themes_dir.join("dark.yml"), "--bg: \"#000\"\n").unwrap();
        fs::write(themes_dir.join("light.yml"), "--bg: \"#fff\"\n").unwrap();

        let css = dir.path().join("out").join("theme.css");
        let config = Config {
            themes_dir: Some(themes_dir),
            stylesheet_path: Some(css.clone()),
            state_path: Some(dir.path().join("state.json")),
            ..Config::default()
        };
        (config, css)
    }

    fn invoke(config: &Config, args: &[&str]) -> Result<CliRegistry> {
        let matches = cli().try_get_matches_from(args)?;
        let mut registry = build_registry(config, &matches)?;
        run(&mut registry, config, &matches)?;
        Ok(registry)
    }

    #[test]
    fn test_apply_then_restore() {
        let dir = TempDir::new().unwrap();
        let (config, css) = setup(&dir);

        invoke(&config, &["theme-registry", "apply", "dark"]).unwrap();
        let written = fs::read_to_string(&css).unwrap();
        assert!(written.contains("--radius: 4px;"));
        assert!(written.contains("--bg: #000;"));

        fs::remove_file(&css).unwrap();
        let registry = invoke(&config, &["theme-registry", "restore", "--fallback", "light"]).unwrap();
        assert_eq!(registry.theme_key(), Some("dark"));
        assert!(fs::read_to_string(&css).unwrap().contains("--bg: #000;"));
    }

    #[test]
    fn test_restore_uses_configured_fallback() {
        let dir = TempDir::new().unwrap();
        let (mut config, _) = setup(&dir);
        config.fallback_theme = Some("light".to_string());

        let registry = invoke(&config, &["theme-registry", "restore"]).unwrap();
        assert_eq!(registry.theme_key(), Some("light"));
    }

    #[test]
    fn test_restore_without_fallback_fails() {
        let dir = TempDir::new().unwrap();
        let (config, css) = setup(&dir);
        assert!(invoke(&config, &["theme-registry", "restore"]).is_err());
        assert!(!css.exists());
    }

    #[test]
    fn test_apply_unknown_theme_fails() {
        let dir = TempDir::new().unwrap();
        let (config, css) = setup(&dir);
        assert!(invoke(&config, &["theme-registry", "apply", "sepia"]).is_err());
        assert!(!css.exists());
    }

    #[test]
    fn test_show_does_not_write() {
        let dir = TempDir::new().unwrap();
        let (config, css) = setup(&dir);
        let registry = invoke(&config, &["theme-registry", "show", "light"]).unwrap();
        assert_eq!(registry.theme_key(), None);
        assert!(!css.exists());
    }
}
