use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

const DIAGNOSTICS_ENV_KEYS: [&str; 4] = [
    "SONGBOOK__DIAGNOSTICS__ENABLED",
    "SONGBOOK__DIAGNOSTICS__LOCALE",
    "SONGBOOK__DIAGNOSTICS__PREFIX",
    "SONGBOOK__DIAGNOSTICS__STREAM",
];

/// Remove every `[diagnostics]` override so a developer's shell can't leak in.
fn clear_diagnostics_env() -> Vec<EnvGuard> {
    DIAGNOSTICS_ENV_KEYS.into_iter().map(EnvGuard::remove).collect()
}

#[test]
fn resolve_config_path_prefers_songbook_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("SONGBOOK_CONFIG_PATH", "/tmp/songbook-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/songbook-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("songbook")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("songbook")
            .join("config.toml")
    );
}

#[test]
fn defaults_report_in_chinese_on_stdout() {
    let s = Settings::default();
    assert!(s.diagnostics.enabled);
    assert!(s.diagnostics.prefix);
    assert_eq!(s.diagnostics.locale, Locale::Zh);
    assert_eq!(s.diagnostics.stream, DiagnosticStream::Stdout);
}

#[test]
fn settings_load_from_config_file_and_parse_locale_aliases() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[diagnostics]
enabled = false
locale = "en-us"
prefix = false
stream = "stderr"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("SONGBOOK_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _env = clear_diagnostics_env();

    let s = Settings::load().unwrap();
    assert!(!s.diagnostics.enabled);
    assert!(!s.diagnostics.prefix);
    assert_eq!(s.diagnostics.locale, Locale::En);
    assert_eq!(s.diagnostics.stream, DiagnosticStream::Stderr);
}

#[test]
fn settings_missing_file_falls_back_to_defaults() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("does-not-exist.toml");

    let _g1 = EnvGuard::set("SONGBOOK_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _env = clear_diagnostics_env();

    let s = Settings::load().unwrap();
    assert!(s.diagnostics.enabled);
    assert_eq!(s.diagnostics.locale, Locale::Zh);
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[diagnostics]
enabled = true
locale = "zh"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("SONGBOOK_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _env = clear_diagnostics_env();
    let _g2 = EnvGuard::set("SONGBOOK__DIAGNOSTICS__ENABLED", "false");
    let _g3 = EnvGuard::set("SONGBOOK__DIAGNOSTICS__LOCALE", "en");

    let s = Settings::load().unwrap();
    assert!(!s.diagnostics.enabled);
    assert_eq!(s.diagnostics.locale, Locale::En);
}

#[test]
fn env_alone_can_silence_and_redirect_diagnostics() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("absent.toml");

    let _g1 = EnvGuard::set("SONGBOOK_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _env = clear_diagnostics_env();
    let _g2 = EnvGuard::set("SONGBOOK__DIAGNOSTICS__PREFIX", "false");
    let _g3 = EnvGuard::set("SONGBOOK__DIAGNOSTICS__STREAM", "stderr");

    let s = Settings::load().unwrap();
    assert!(s.diagnostics.enabled);
    assert!(!s.diagnostics.prefix);
    assert_eq!(s.diagnostics.stream, DiagnosticStream::Stderr);
}

#[test]
fn unknown_locale_is_a_load_error_and_falls_back_to_defaults() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[diagnostics]
enabled = false
locale = "klingon"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("SONGBOOK_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _env = clear_diagnostics_env();

    assert!(Settings::load().is_err());

    let s = Settings::load_or_default();
    assert!(s.diagnostics.enabled);
    assert_eq!(s.diagnostics.locale, Locale::Zh);
}

#[test]
fn malformed_toml_falls_back_to_defaults() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(&cfg_path, "[diagnostics\nenabled = false\n").unwrap();

    let _g1 = EnvGuard::set("SONGBOOK_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _env = clear_diagnostics_env();

    let s = Settings::load_or_default();
    assert!(s.diagnostics.enabled);
    assert_eq!(s.diagnostics.stream, DiagnosticStream::Stdout);
}
