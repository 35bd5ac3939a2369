pub mod config;
pub mod models;
pub mod pipeline;

pub use models::MedicalProfile;
pub use pipeline::clinical::{analyze, build_system_prompt, try_analyze, AnalysisError, AnalysisRecord};
pub use pipeline::label::{parse_label, try_parse_label, LabelError, LabelParser, LabelParserConfig, LabelRecord};

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over [`config::default_log_filter`]. Safe to
/// call more than once; only the first call installs a subscriber.
pub fn init_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("{} v{} logging initialised", config::APP_NAME, config::APP_VERSION);
    }
}
