// config.rs

use crate::cli::Args;
use crate::report::USB_POLL_INTERVAL_MS;
use std::error::Error;
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// Environment variable prefix, e.g. `DRUMHID_POLL_INTERVAL_MS`.
pub const ENV_PREFIX: &str = "DRUMHID";
pub const MAX_POLL_INTERVAL_MS: u64 = 1000;

#[derive(Debug)]
pub enum ConfigError {
    Source(::config::ConfigError),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Source(e) => write!(f, "configuration error: {}", e),
            ConfigError::Invalid(msg) => write!(f, "invalid configuration: {}", msg),
        }
    }
}

impl Error for ConfigError {}

impl From<::config::ConfigError> for ConfigError {
    fn from(e: ::config::ConfigError) -> Self {
        ConfigError::Source(e)
    }
}

/// Runtime settings. The note table, queue size and report layout are not
/// configurable.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub device: Option<String>,
    pub poll_interval: Duration,
    pub log_to_stderr: bool,
    pub quiet: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            device: None,
            poll_interval: Duration::from_millis(USB_POLL_INTERVAL_MS),
            log_to_stderr: false,
            quiet: false,
        }
    }
}

impl Settings {
    /// Defaults, then the optional file, then `DRUMHID_*` variables.
    pub fn from_sources(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ::config::Config::builder()
            .set_default("poll_interval_ms", USB_POLL_INTERVAL_MS as i64)?
            .set_default("log_to_stderr", false)?
            .set_default("quiet", false)?;

        if let Some(path) = file {
            builder = builder.add_source(::config::File::from(path).required(true));
        }

        let layered = builder
            .add_source(::config::Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let poll_ms = layered.get_int("poll_interval_ms")?;
        let poll_ms = u64::try_from(poll_ms)
            .map_err(|_| ConfigError::Invalid(format!("poll_interval_ms {} < 0", poll_ms)))?;

        let settings = Settings {
            device: layered.get_string("device").ok(),
            poll_interval: Self::validate_poll_interval(poll_ms)?,
            log_to_stderr: layered.get_bool("log_to_stderr")?,
            quiet: layered.get_bool("quiet")?,
        };
        Ok(settings)
    }

    /// Full resolution: sources first, command line last.
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        let mut settings = Self::from_sources(args.config.as_deref())?;
        settings.apply_args(args)?;
        Ok(settings)
    }

    pub fn apply_args(&mut self, args: &Args) -> Result<(), ConfigError> {
        if let Some(device) = &args.bind_to_device {
            self.device = Some(device.clone());
        }
        if let Some(ms) = args.poll_interval_ms {
            self.poll_interval = Self::validate_poll_interval(ms)?;
        }
        self.log_to_stderr |= args.log_stderr;
        self.quiet |= args.quiet;
        Ok(())
    }

    fn validate_poll_interval(ms: u64) -> Result<Duration, ConfigError> {
        if ms == 0 || ms > MAX_POLL_INTERVAL_MS {
            return Err(ConfigError::Invalid(format!(
                "poll_interval_ms must be 1..={}, got {}",
                MAX_POLL_INTERVAL_MS, ms
            )));
        }
        Ok(Duration::from_millis(ms))
    }
}
