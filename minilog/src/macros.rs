//! Formatted variants: `errorf!(logger, "failed: {} ({})", reason, code)`.
//!
//! Arguments are captured with `format_args!`, so a suppressed debug line is
//! never rendered.

#[macro_export]
macro_rules! successf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.successf(::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(::core::format_args!($($arg)+))
    };
}
