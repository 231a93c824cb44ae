//! Logger initialization
//!
//! The library only logs through the `log` facade. Hosts that do not install
//! their own logger can call one of these helpers early in startup.

/// Initialize `env_logger`, honoring `RUST_LOG` and falling back to `default_filter`.
///
/// Subsequent calls are ignored.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(default_filter: &str) {
    let result = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter),
    )
    .try_init();

    if result.is_ok() {
        log::debug!("logging initialized");
    }
}

// Web initialization helper
#[cfg(target_arch = "wasm32")]
pub fn init_web_logging(level: log::Level) {
    // Set up panic hook for better error messages in console
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_ok() {
        log::debug!("logging initialized");
    }
}
