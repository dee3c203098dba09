//! Performance instrumentation for the input hot paths.
//!
//! Pointer move can fire 60+ times per second during a gesture, so the
//! handlers are wrapped in `profile_scope!`. The macro is zero-cost unless
//! the `profiling` feature is enabled:
//! ```toml
//! [dependencies]
//! moodboard = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! fn handle_pointer_move() {
//!     profile_scope!("handle_pointer_move");
//!     // ... event handling code ...
//! }
//! ```

use std::time::Instant;

/// Default threshold above which a scope is reported at warn level
pub const DEFAULT_WARN_THRESHOLD_MS: f64 = 4.0;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $crate::perf::DEFAULT_WARN_THRESHOLD_MS);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

/// RAII timer that reports its scope's duration through `tracing` on drop.
#[derive(Debug)]
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    warn_threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, warn_threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            warn_threshold_ms,
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms > self.warn_threshold_ms {
            tracing::warn!(
                scope = self.name,
                elapsed_ms,
                threshold_ms = self.warn_threshold_ms,
                "Slow canvas operation"
            );
        } else {
            tracing::trace!(scope = self.name, elapsed_ms, "Scope timing");
        }
    }
}
