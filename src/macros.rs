//! `format!`-style shorthands that log through the global logger.

/// Logs at an explicit level through [`global::logger`](crate::global::logger).
///
/// ```
/// linelog::log!(linelog::Level::Info, "listening on {}", 8080);
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)+) => {{
        let logger = $crate::global::logger();
        let level = $level;
        if logger.enabled(level) {
            logger.log(level, &::std::format!($($arg)+));
        }
    }};
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => { $crate::log!($crate::Level::Debug, $($arg)+) };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => { $crate::log!($crate::Level::Info, $($arg)+) };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => { $crate::log!($crate::Level::Warn, $($arg)+) };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => { $crate::log!($crate::Level::Error, $($arg)+) };
}
