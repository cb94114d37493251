//! Logging goes through the `log` facade. In the browser the facade is backed
//! by `console_log`, so `warn!` lands in `console.warn` and so on. Host builds
//! leave the facade to whatever logger the embedding binary or test installs.

#[cfg(target_arch = "wasm32")]
use std::sync::Once;

#[cfg(target_arch = "wasm32")]
static LOGGER: Once = Once::new();

/// Install the browser console logger. Safe to call more than once.
pub fn init_logging(level: log::Level) {
    #[cfg(target_arch = "wasm32")]
    LOGGER.call_once(|| {
        // Only fails if another logger was installed first; keep that one.
        let _ = console_log::init_with_level(level);
    });
    #[cfg(not(target_arch = "wasm32"))]
    log::set_max_level(level.to_level_filter());
}
