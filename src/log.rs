//! Logging macros for the path generator and renderer.
//!
//! With the `tracing` feature these are the `tracing` macros. Without it the
//! arguments are still type-checked but never formatted.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        if false {
            let _ = format_args!($($arg)*);
        }
    };
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        if false {
            let _ = format_args!($($arg)*);
        }
    };
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
