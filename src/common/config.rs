//! Configuration for pagesim.
//!
//! Constants live here alongside [`Settings`], the layered runtime
//! configuration: built-in defaults, then an optional file, then
//! `PAGESIM_*` environment variables.

use std::time::Duration;

use serde::Deserialize;

use crate::common::{PageId, Result};
use crate::sim::replacer::Policy;
use crate::sim::SimulationInput;

/// Frame count used when nothing else is configured.
pub const DEFAULT_FRAMES: usize = 3;

/// Upper bound on the frame count.
///
/// The terminal renderer draws one box per frame; past this the row wraps
/// and the animation becomes unreadable.
pub const MAX_FRAMES: usize = 64;

/// Pause between animated steps, in milliseconds.
pub const DEFAULT_STEP_DELAY_MS: u64 = 1500;

/// Runtime settings for the `pagesim` binary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub frames: usize,
    pub policy: String,
    pub step_delay_ms: u64,
    pub log_level: String,
    #[serde(default)]
    pub label: Option<String>,
}

impl Settings {
    /// Load settings, reading `file` when it is non-empty.
    pub fn new(file: &str) -> Result<Settings> {
        let mut cfg = config::Config::builder()
            .set_default("frames", DEFAULT_FRAMES as u64)?
            .set_default("policy", "fifo")?
            .set_default("step_delay_ms", DEFAULT_STEP_DELAY_MS)?
            .set_default("log_level", "warn")?;
        if !file.is_empty() {
            cfg = cfg.add_source(config::File::with_name(file));
        }
        cfg = cfg.add_source(config::Environment::with_prefix("PAGESIM").try_parsing(true));
        Ok(cfg.build()?.try_deserialize()?)
    }

    /// Merge command-line overrides over these settings into a run input.
    ///
    /// A label, from either layer, wins over the policy name.
    ///
    /// # Errors
    /// - `Error::InvalidInput` if the policy name is unknown or the frame
    ///   count is out of range
    pub fn resolve(&self, overrides: &Overrides, references: Vec<PageId>) -> Result<SimulationInput> {
        let capacity = overrides.frames.unwrap_or(self.frames);
        let policy = match overrides.policy {
            Some(policy) => policy,
            None => self.policy.parse()?,
        };

        let mut input = SimulationInput::new(capacity, references).with_policy(policy);
        if let Some(label) = overrides.label.as_ref().or(self.label.as_ref()) {
            input = input.with_label(label.clone());
        }
        input.validate()?;
        Ok(input)
    }

    /// Pause between animated steps after overrides.
    pub fn step_delay(&self, overrides: &Overrides) -> Duration {
        Duration::from_millis(overrides.step_delay_ms.unwrap_or(self.step_delay_ms))
    }
}

/// Values given on the command line; `None` falls back to [`Settings`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub frames: Option<usize>,
    pub policy: Option<Policy>,
    pub label: Option<String>,
    pub step_delay_ms: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frames: DEFAULT_FRAMES,
            policy: "fifo".to_string(),
            step_delay_ms: DEFAULT_STEP_DELAY_MS,
            log_level: "warn".to_string(),
            label: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Mutex, MutexGuard};

    // Settings::new reads the process environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Sets an environment variable for the lifetime of the guard.
    struct EnvVar(&'static str);

    impl EnvVar {
        fn set(key: &'static str, value: &str) -> Self {
            std::env::set_var(key, value);
            EnvVar(key)
        }
    }

    impl Drop for EnvVar {
        fn drop(&mut self) {
            std::env::remove_var(self.0);
        }
    }

    fn settings_file(lines: &[&str]) -> Result<tempfile::NamedTempFile> {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
        for line in lines {
            writeln!(file, "{}", line)?;
        }
        Ok(file)
    }

    fn pids(ns: &[i64]) -> Vec<PageId> {
        ns.iter().copied().map(PageId::new).collect()
    }

    #[test]
    fn test_default_settings() -> Result<()> {
        let _lock = env_lock();
        let settings = Settings::new("")?;
        assert_eq!(settings.frames, DEFAULT_FRAMES);
        assert_eq!(settings.policy, "fifo");
        assert_eq!(settings.step_delay_ms, DEFAULT_STEP_DELAY_MS);
        Ok(())
    }

    #[test]
    fn test_settings_from_file() -> Result<()> {
        let _lock = env_lock();
        let file = settings_file(&["frames = 4", "policy = \"lru\"", "label = \"demo\""])?;

        let path = file.path().to_string_lossy().to_string();
        let settings = Settings::new(&path)?;
        assert_eq!(settings.frames, 4);
        assert_eq!(settings.policy, "lru");
        assert_eq!(settings.label.as_deref(), Some("demo"));
        assert_eq!(settings.step_delay_ms, DEFAULT_STEP_DELAY_MS);
        Ok(())
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let _lock = env_lock();
        let err = Settings::new("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_env_overrides_file() -> Result<()> {
        let _lock = env_lock();
        let file = settings_file(&["frames = 4", "step_delay_ms = 10"])?;
        let _frames = EnvVar::set("PAGESIM_FRAMES", "6");
        let _policy = EnvVar::set("PAGESIM_POLICY", "mfu");

        let path = file.path().to_string_lossy().to_string();
        let settings = Settings::new(&path)?;
        assert_eq!(settings.frames, 6);
        assert_eq!(settings.policy, "mfu");
        assert_eq!(settings.step_delay_ms, 10);
        Ok(())
    }

    #[test]
    fn test_flag_beats_file() -> Result<()> {
        let _lock = env_lock();
        let file = settings_file(&["frames = 4", "policy = \"lru\"", "step_delay_ms = 10"])?;
        let settings = Settings::new(&file.path().to_string_lossy())?;

        let overrides = Overrides {
            frames: Some(2),
            policy: Some(Policy::Optimal),
            step_delay_ms: Some(0),
            ..Overrides::default()
        };
        let input = settings.resolve(&overrides, pids(&[1, 2]))?;
        assert_eq!(input.capacity, 2);
        assert_eq!(input.policy, Policy::Optimal);
        assert_eq!(input.label, "Optimal");
        assert_eq!(input.references, pids(&[1, 2]));
        assert_eq!(settings.step_delay(&overrides), Duration::ZERO);

        let input = settings.resolve(&Overrides::default(), vec![])?;
        assert_eq!(input.capacity, 4);
        assert_eq!(input.policy, Policy::Lru);
        assert_eq!(settings.step_delay(&Overrides::default()), Duration::from_millis(10));
        Ok(())
    }

    #[test]
    fn test_label_precedence() -> Result<()> {
        let settings = Settings {
            policy: "lfu".to_string(),
            label: Some("classroom".to_string()),
            ..Settings::default()
        };

        let input = settings.resolve(&Overrides::default(), vec![])?;
        assert_eq!(input.policy, Policy::Lfu);
        assert_eq!(input.label, "classroom");

        let overrides = Overrides {
            label: Some("flag".to_string()),
            ..Overrides::default()
        };
        assert_eq!(settings.resolve(&overrides, vec![])?.label, "flag");

        let unlabelled = Settings::default();
        assert_eq!(unlabelled.resolve(&Overrides::default(), vec![])?.label, "FIFO");
        Ok(())
    }

    #[test]
    fn test_resolve_rejects_bad_values() {
        let settings = Settings {
            policy: "random".to_string(),
            ..Settings::default()
        };
        assert!(settings.resolve(&Overrides::default(), vec![]).is_err());

        let overrides = Overrides {
            frames: Some(0),
            policy: Some(Policy::Fifo),
            ..Overrides::default()
        };
        assert!(Settings::default().resolve(&overrides, vec![]).is_err());
    }

    #[test]
    fn test_max_frames_bounds_default() {
        assert!(DEFAULT_FRAMES <= MAX_FRAMES);
    }
}
