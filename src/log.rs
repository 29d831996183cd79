//! Logging for layout, rendering and the state shell.
//!
//! With the `tracing` feature these are the `tracing` macros. Without it
//! they expand to `()`, so they also work in expression position (match
//! arms) and embedders pay nothing.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
