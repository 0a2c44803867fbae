use std::{env, path::PathBuf};

use super::schema::Settings;

impl Settings {
    /// Settings for this run: optional TOML file, then `CUBEPLAYER`
    /// environment overrides, then struct defaults. A broken or invalid
    /// config warns on stderr and falls back to defaults instead of
    /// stopping startup.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(s) => match s.validate() {
                Ok(()) => s,
                Err(msg) => {
                    eprintln!("cubeplayer: invalid config, using defaults: {msg}");
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("cubeplayer: failed to load config, using defaults: {e}");
                Self::default()
            }
        }
    }

    fn load() -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = config_file_path() {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }
        builder
            .add_source(
                ::config::Environment::with_prefix("CUBEPLAYER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Sanity checks on loaded values; the error names the offending key.
    pub fn validate(&self) -> Result<(), String> {
        if self.ui.tick_ms == 0 {
            return Err("ui.tick_ms must be >= 1".to_string());
        }
        if !(0.0..=1.0).contains(&self.playback.volume) {
            return Err("playback.volume must be within 0.0..=1.0".to_string());
        }
        if self.controls.volume_step <= 0.0 || self.controls.volume_step > 1.0 {
            return Err("controls.volume_step must be within (0.0, 1.0]".to_string());
        }
        if self.controls.seek_seconds == 0 {
            return Err("controls.seek_seconds must be >= 1".to_string());
        }
        if self.library.extensions.is_empty() {
            return Err("library.extensions must not be empty".to_string());
        }
        Ok(())
    }
}

/// Where the config file lives: an explicit `CUBEPLAYER_CONFIG_PATH`
/// override wins, otherwise `cubeplayer/config.toml` under the XDG config
/// home (`~/.config` when `XDG_CONFIG_HOME` is unset). `None` when neither
/// env var nor `HOME` gives a base.
pub(crate) fn config_file_path() -> Option<PathBuf> {
    if let Some(explicit) = env::var_os("CUBEPLAYER_CONFIG_PATH") {
        return Some(PathBuf::from(explicit));
    }

    let base = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(base.join("cubeplayer").join("config.toml"))
}
