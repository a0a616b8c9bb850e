use nu_ansi_term::Color;
use std::fmt;

/// Severity tag attached to every log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Success,
    Error,
    Info,
    Debug,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::Success, Level::Error, Level::Info, Level::Debug];

    /// Literal name printed inside the second bracket pair.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Success => "SUCCESS",
            Level::Error => "ERROR",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
        }
    }

    /// Symbolic prefix, brackets included.
    pub fn prefix(self) -> &'static str {
        match self {
            Level::Success => "[+]",
            Level::Error => "[-]",
            Level::Info => "[!]",
            Level::Debug => "[~]",
        }
    }

    /// Display color. `None` means the line is written uncolored.
    pub fn color(self) -> Option<Color> {
        match self {
            Level::Success => Some(Color::Green),
            Level::Error => Some(Color::Red),
            Level::Info => Some(Color::Yellow),
            Level::Debug => Some(Color::Cyan),
        }
    }

    pub fn is_debug(self) -> bool {
        matches!(self, Level::Debug)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
