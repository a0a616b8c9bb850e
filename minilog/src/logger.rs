use crate::config::{ColorChoice, LoggerConfig};
use crate::format;
use crate::level::Level;
use crate::sink::{self, StdoutSink};
use std::fmt;
use std::io::Write;
use tracing_subscriber::fmt::MakeWriter;

/// Leveled console logger.
///
/// Every call renders one line, `[HH:MM:SS.mmm] <prefix> [<LEVEL>] <message>`,
/// and writes it to the sink in a single `write_all`. Debug lines are dropped
/// before anything is computed unless the logger was built with debug enabled.
/// Write failures are ignored.
#[derive(Debug, Clone)]
pub struct Logger<S = StdoutSink> {
    debug_enabled: bool,
    colored: bool,
    sink: S,
}

impl Logger {
    /// Stdout logger with automatic color detection.
    pub fn new(debug_enabled: bool) -> Self {
        Logger::with_sink(debug_enabled, sink::stdout())
    }

    pub fn from_config(config: &LoggerConfig) -> Self {
        Logger::builder()
            .debug(config.debug)
            .color(config.color)
            .build()
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl<S> Logger<S>
where
    S: for<'a> MakeWriter<'a>,
{
    pub fn with_sink(debug_enabled: bool, sink: S) -> Self {
        Logger {
            debug_enabled,
            colored: ColorChoice::Auto.resolve(),
            sink,
        }
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    pub fn colored(&self) -> bool {
        self.colored
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn log(&self, level: Level, msg: &str) {
        if self.suppressed(level) {
            return;
        }
        self.emit(level, msg);
    }

    /// Renders `args` only once the level has passed the debug filter.
    pub fn log_args(&self, level: Level, args: fmt::Arguments<'_>) {
        if self.suppressed(level) {
            return;
        }
        match args.as_str() {
            Some(msg) => self.emit(level, msg),
            None => self.emit(level, &args.to_string()),
        }
    }

    pub fn success(&self, msg: &str) {
        self.log(Level::Success, msg);
    }

    pub fn error(&self, msg: &str) {
        self.log(Level::Error, msg);
    }

    pub fn info(&self, msg: &str) {
        self.log(Level::Info, msg);
    }

    pub fn debug(&self, msg: &str) {
        self.log(Level::Debug, msg);
    }

    pub fn successf(&self, args: fmt::Arguments<'_>) {
        self.log_args(Level::Success, args);
    }

    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log_args(Level::Error, args);
    }

    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.log_args(Level::Info, args);
    }

    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.log_args(Level::Debug, args);
    }

    /// Logs `<component> | <action> | Session: <session_id>`, followed by
    /// ` | <extra>` when `extra` is not empty.
    pub fn log_with_context(
        &self,
        level: Level,
        component: &str,
        action: &str,
        session_id: &str,
        extra: &str,
    ) {
        if self.suppressed(level) {
            return;
        }
        let body = format::format_context(component, action, session_id, extra);
        self.emit(level, &body);
    }

    fn suppressed(&self, level: Level) -> bool {
        level.is_debug() && !self.debug_enabled
    }

    fn emit(&self, level: Level, msg: &str) {
        let line = format::format_line(&format::local_timestamp(), level, msg);
        let rendered = format::render(level, &line, self.colored);
        let _ = self.sink.make_writer().write_all(rendered.as_bytes());
    }
}

/// Builder for loggers with an explicit sink or color choice.
#[derive(Debug, Clone)]
pub struct LoggerBuilder<S = StdoutSink> {
    debug: bool,
    color: ColorChoice,
    sink: S,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        LoggerBuilder {
            debug: false,
            color: ColorChoice::Auto,
            sink: sink::stdout(),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> LoggerBuilder<S> {
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    pub fn color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    pub fn sink<T>(self, sink: T) -> LoggerBuilder<T>
    where
        T: for<'a> MakeWriter<'a>,
    {
        LoggerBuilder {
            debug: self.debug,
            color: self.color,
            sink,
        }
    }

    pub fn build(self) -> Logger<S>
    where
        S: for<'a> MakeWriter<'a>,
    {
        Logger {
            debug_enabled: self.debug,
            colored: self.color.resolve(),
            sink: self.sink,
        }
    }
}
