use crate::error::ConfigError;
use std::io::IsTerminal;
use std::str::FromStr;

pub const DEBUG_ENV: &str = "MINILOG_DEBUG";
pub const COLOR_ENV: &str = "MINILOG_COLOR";

/// When to wrap lines in ANSI color codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Color unless `NO_COLOR` is set, `TERM=dumb`, or stdout is not a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolves against the current process environment.
    pub fn resolve(self) -> bool {
        self.resolve_with(
            std::env::var_os("NO_COLOR").is_some(),
            std::env::var("TERM").ok().as_deref(),
            std::io::stdout().is_terminal(),
        )
    }

    pub fn resolve_with(self, no_color: bool, term: Option<&str>, stdout_is_tty: bool) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => !no_color && term != Some("dumb") && stdout_is_tty,
        }
    }
}

impl FromStr for ColorChoice {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            other => Err(ConfigError::invalid(
                "color",
                format!("expected auto, always or never, got '{}'", other),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoggerConfig {
    pub debug: bool,
    pub color: ColorChoice,
}

impl LoggerConfig {
    /// Reads `MINILOG_DEBUG` and `MINILOG_COLOR`. Unset variables keep defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = LoggerConfig::default();
        if let Some(raw) = lookup(DEBUG_ENV) {
            config.debug = parse_bool(DEBUG_ENV, &raw)?;
        }
        if let Some(raw) = lookup(COLOR_ENV) {
            config.color = raw.parse()?;
        }
        Ok(config)
    }
}

fn parse_bool(field: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::invalid(
            field,
            format!("expected a boolean, got '{}'", other),
        )),
    }
}
