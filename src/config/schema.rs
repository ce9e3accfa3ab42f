use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/songbook/config.toml`
/// or `~/.config/songbook/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SONGBOOK__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub diagnostics: DiagnosticsSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiagnosticsSettings {
    /// Print a message whenever an entry operation is rejected.
    pub enabled: bool,
    /// Language of the printed messages.
    pub locale: Locale,
    /// Start each message with its severity, e.g. `[错误]` or `[提示]`.
    pub prefix: bool,
    /// Where messages go.
    pub stream: DiagnosticStream,
}

impl Default for DiagnosticsSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            locale: Locale::Zh,
            prefix: true,
            stream: DiagnosticStream::Stdout,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    #[serde(alias = "zh-cn", alias = "zh_cn", alias = "cn")]
    Zh,
    #[serde(alias = "en-us", alias = "en_us")]
    En,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticStream {
    Stdout,
    Stderr,
}
