//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_CONFIG_FILES: [&str; 2] = ["answer-synth.toml", ".answer-synth.toml"];
const ENV_PREFIX: &str = "ANSWER_SYNTH_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `ANSWER_SYNTH_<SECTION>__<KEY>`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./answer-synth.toml` or `./.answer-synth.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/answer-synth/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&project_path));
        }

        Self::layer_explicit(figment, config_path)
            .extract()
            .map_err(Box::new)
    }

    fn layer_explicit(figment: Figment, config_path: Option<&Path>) -> Figment {
        let figment = match config_path {
            Some(path) => figment.merge(Toml::file(path)),
            None => figment,
        };
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/answer-synth/config.toml if set,
    /// otherwise falls back to ~/.config/answer-synth/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("answer-synth").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Env:     {}<SECTION>__<KEY>", ENV_PREFIX);

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:^5}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./answer-synth.toml or ./.answer-synth.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use synth_domain::OutputFormat;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.models.directory, PathBuf::from("models"));
        assert_eq!(config.language.affirmative, "yes");
        assert_eq!(config.batch.max_concurrency, 4);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("answer-synth"));
    }

    fn defaults() -> Figment {
        Figment::new().merge(Serialized::defaults(FileConfig::default()))
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "custom.toml",
                r#"
[language]
negative = "nope"

[output]
format = "json"
"#,
            )?;

            let config: FileConfig =
                ConfigLoader::layer_explicit(defaults(), Some(Path::new("custom.toml"))).extract()?;

            assert_eq!(config.language.negative, "nope");
            assert_eq!(config.language.affirmative, "yes");
            assert_eq!(config.output.format, Some(OutputFormat::Json));
            assert_eq!(config.batch.max_concurrency, 4);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_explicit_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "custom.toml",
                r#"
[language]
affirmative = "oui"
negative = "non"

[batch]
max_concurrency = 2
"#,
            )?;
            jail.set_env("ANSWER_SYNTH_BATCH__MAX_CONCURRENCY", 9);
            jail.set_env("ANSWER_SYNTH_LANGUAGE__AFFIRMATIVE", "ja");

            let config: FileConfig =
                ConfigLoader::layer_explicit(defaults(), Some(Path::new("custom.toml"))).extract()?;

            assert_eq!(config.batch.max_concurrency, 9);
            assert_eq!(config.language.affirmative, "ja");
            assert_eq!(config.language.negative, "non");
            Ok(())
        });
    }

    #[test]
    fn test_env_applies_without_explicit_file() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("ANSWER_SYNTH_OUTPUT__COLOR", false);

            let config: FileConfig = ConfigLoader::layer_explicit(defaults(), None).extract()?;

            assert!(!config.output.color);
            assert_eq!(config.batch.max_concurrency, 4);
            Ok(())
        });
    }

    #[test]
    fn test_load_merges_project_file_explicit_file_and_env() {
        figment::Jail::expect_with(|jail| {
            let config_home = jail.directory().join("xdg");
            jail.set_env("XDG_CONFIG_HOME", config_home.display());
            jail.create_file(
                "answer-synth.toml",
                r#"
[language]
affirmative = "si"
negative = "no"

[batch]
max_concurrency = 3
"#,
            )?;
            jail.create_file("custom.toml", "[language]\nnegative = \"non\"\n")?;
            jail.set_env("ANSWER_SYNTH_BATCH__MAX_CONCURRENCY", 7);

            let config = ConfigLoader::load(Some(Path::new("custom.toml"))).map_err(|e| *e)?;

            assert_eq!(config.language.affirmative, "si");
            assert_eq!(config.language.negative, "non");
            assert_eq!(config.batch.max_concurrency, 7);
            Ok(())
        });
    }

    #[test]
    fn test_malformed_explicit_file_is_error() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("broken.toml", "[batch]\nmax_concurrency = \"many\"\n")?;

            let result: Result<FileConfig, _> =
                ConfigLoader::layer_explicit(defaults(), Some(Path::new("broken.toml"))).extract();
            assert!(result.is_err());
            Ok(())
        });
    }

    #[test]
    fn test_malformed_env_value_is_error() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("ANSWER_SYNTH_BATCH__MAX_CONCURRENCY", "many");

            let result: Result<FileConfig, _> = ConfigLoader::layer_explicit(defaults(), None).extract();
            assert!(result.is_err());
            Ok(())
        });
    }
}
