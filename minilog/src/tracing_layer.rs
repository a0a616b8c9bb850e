use crate::config::LoggerConfig;
use crate::format;
use crate::level::Level;
use anyhow::{Context, Result};
use std::fmt;
use tracing::{Event, Metadata, Subscriber};
use tracing_subscriber::{
    filter::{LevelFilter, Targets},
    fmt::{format::Writer, FmtContext, FormatEvent, FormatFields, MakeWriter},
    prelude::*,
    registry::LookupSpan,
    Layer,
};

/// INFO events with this target render as SUCCESS lines.
pub const SUCCESS_TARGET: &str = "success";

/// Installs a global stdout subscriber that prints minilog lines.
pub fn setup_tracing(config: &LoggerConfig) -> Result<()> {
    let layer = tracing_layer(config.debug, std::io::stdout, config.color.resolve());

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .context("Failed to set global subscriber")?;

    Ok(())
}

/// Console layer for callers composing their own registry. Debug and trace
/// events pass only when `debug` is set.
pub fn tracing_layer<S, W>(debug: bool, make_writer: W, ansi: bool) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter = Targets::new().with_default(if debug {
        LevelFilter::TRACE
    } else {
        LevelFilter::INFO
    });

    tracing_subscriber::fmt::layer()
        .with_writer(make_writer)
        .with_ansi(ansi)
        .event_format(MinilogFormatter)
        .with_filter(filter)
}

pub fn level_for(metadata: &Metadata<'_>) -> Level {
    match *metadata.level() {
        tracing::Level::ERROR => Level::Error,
        tracing::Level::INFO if metadata.target() == SUCCESS_TARGET => Level::Success,
        tracing::Level::WARN | tracing::Level::INFO => Level::Info,
        tracing::Level::DEBUG | tracing::Level::TRACE => Level::Debug,
    }
}

struct MessageVisitor {
    message: String,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

/// Renders events as `[HH:MM:SS.mmm] <prefix> [<LEVEL>] <message>`.
pub struct MinilogFormatter;

impl<S, N> FormatEvent<S, N> for MinilogFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut msg_visitor = MessageVisitor {
            message: String::new(),
        };
        event.record(&mut msg_visitor);

        let level = level_for(event.metadata());
        let line = format::format_line(&format::local_timestamp(), level, &msg_visitor.message);
        write!(
            writer,
            "{}",
            format::render(level, &line, writer.has_ansi_escapes())
        )
    }
}
