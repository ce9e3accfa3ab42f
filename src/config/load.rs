use std::{env, path::PathBuf};

use super::schema::Settings;

impl Settings {
    /// Load settings from environment and optional config file.
    ///
    /// Environment variables use the prefix `SONGBOOK__`; the file is looked up
    /// via [`resolve_config_path`] and may be missing.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("SONGBOOK")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Like [`Settings::load`], but an unreadable or malformed configuration
    /// yields the defaults, so rejections are still reported in Chinese on stdout.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            log::warn!("failed to load config, using defaults: {e}");
            Self::default()
        })
    }
}

/// Resolve the config path from `SONGBOOK_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("SONGBOOK_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/songbook/config.toml`
/// or `~/.config/songbook/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("songbook").join("config.toml"))
}
