//! Line composition. Everything here is pure so the logger and the tracing
//! formatter render identical lines.

use crate::level::Level;
use chrono::{DateTime, Local, TimeZone};
use std::fmt::{self, Write as _};

/// 24-hour clock with millisecond precision, e.g. `09:41:07.250`.
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";

pub fn timestamp<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    now.format(TIMESTAMP_FORMAT).to_string()
}

pub fn local_timestamp() -> String {
    timestamp(&Local::now())
}

/// `[<timestamp>] <prefix> [<LEVEL>] <message>`, without the newline.
pub fn format_line(timestamp: &str, level: Level, msg: &str) -> String {
    format!("[{}] {} [{}] {}", timestamp, level.prefix(), level, msg)
}

/// `<component> | <action> | Session: <session_id>[ | <extra>]`
pub fn format_context(component: &str, action: &str, session_id: &str, extra: &str) -> String {
    let mut body = format!("{} | {} | Session: {}", component, action, session_id);
    if !extra.is_empty() {
        body.push_str(" | ");
        body.push_str(extra);
    }
    body
}

/// Wraps the line in the level's color when `colored` is set and appends the
/// newline outside the escape sequence.
pub fn render(level: Level, line: &str, colored: bool) -> String {
    let mut out = String::with_capacity(line.len() + 12);
    match level.color().filter(|_| colored) {
        Some(color) => {
            let _ = write!(out, "{}", color.paint(line));
        }
        None => out.push_str(line),
    }
    out.push('\n');
    out
}
