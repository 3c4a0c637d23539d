//! Log targets understood by the terminal formatter, and the macros that emit on them.
//!
//! Regular `tracing` levels cover everything else.

pub use tracing;

pub const TARGET_PRINT: &str = "zonesnatcher::print";
pub const TARGET_SUCCESS: &str = "zonesnatcher::success";
pub const TARGET_FINDING: &str = "zonesnatcher::finding";

/// Prints a line as-is, without a status symbol.
#[macro_export]
macro_rules! mprint {
    () => {
        $crate::log::tracing::info!(target: $crate::log::TARGET_PRINT, "")
    };
    ($($arg:tt)+) => {
        $crate::log::tracing::info!(target: $crate::log::TARGET_PRINT, $($arg)+)
    };
}

/// Reports a completed step.
#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => {
        $crate::log::tracing::info!(target: $crate::log::TARGET_SUCCESS, $($arg)+)
    };
}

/// Reports a vulnerable name server.
#[macro_export]
macro_rules! finding {
    ($($arg:tt)+) => {
        $crate::log::tracing::warn!(target: $crate::log::TARGET_FINDING, $($arg)+)
    };
}
