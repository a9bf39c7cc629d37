use failure::Fail;
use log::LevelFilter;
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use crate::i18n::LanguageTag;

/// Load configuration from a TOML file.
pub fn load(path: &Path) -> crate::Result<Config> {
    let data = fs::read(path).map_err(ReadConfigurationError)?;
    let config: Config = toml::from_slice(&data)
        .map_err(ConfigurationError)?;
    Ok(config)
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub locales: Locales,
    #[serde(default)]
    pub logging: Logging,
}

impl Config {
    /// Validate configuration correctness.
    pub fn validate(&self) -> crate::Result<()> {
        ensure!(
            self.locales.path.is_dir(),
            "locale directory {} does not exist",
            self.locales.path.display(),
        );

        Ok(())
    }
}

/// Locale data configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct Locales {
    /// Directory containing Fluent locale files.
    #[serde(default = "default_locales_path")]
    pub path: PathBuf,
    /// Locale used when no requested locale matches.
    #[serde(default)]
    pub default: LanguageTag,
}

/// Logging configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct Logging {
    /// Default logging level.
    #[serde(default = "default_level_filter")]
    pub level: LevelFilter,
    /// Custom filters.
    #[serde(default)]
    pub filters: HashMap<String, LevelFilter>,
}

impl Logging {
    /// Install a logger for this configuration.
    ///
    /// Safe to call more than once; only the first call takes effect.
    pub fn setup(&self) {
        let mut builder = env_logger::Builder::from_default_env();
        builder.filter_level(self.level);

        for (module, level) in &self.filters {
            builder.filter_module(module, *level);
        }

        let _ = builder.try_init();
    }
}

#[derive(Debug, Fail)]
#[fail(display = "Cannot read configuration file")]
pub struct ReadConfigurationError(#[fail(cause)] std::io::Error);

#[derive(Debug, Fail)]
#[fail(display = "Invalid configuration: {}", _0)]
pub struct ConfigurationError(#[fail(cause)] toml::de::Error);

fn default_locales_path() -> PathBuf {
    PathBuf::from("./locales")
}

fn default_level_filter() -> LevelFilter {
    LevelFilter::Info
}

impl Default for Locales {
    fn default() -> Self {
        Locales {
            path: default_locales_path(),
            default: LanguageTag::default(),
        }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Logging {
            level: default_level_filter(),
            filters: HashMap::new(),
        }
    }
}
