/// Application-level constants
pub const APP_NAME: &str = "Nutrimed";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log filter used when `RUST_LOG` is not set.
/// Engine internals stay at `info`; parse-level detail is behind `debug`.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "nutrimed_lib=debug,info"
    } else {
        "nutrimed_lib=info,warn"
    }
}
