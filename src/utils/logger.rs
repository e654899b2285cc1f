use std::sync::Once;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Installs the process-wide subscriber. Logger setup happens exactly once
/// per process; repeated calls are no-ops.
pub fn init_logger(verbose: bool) {
    INIT.call_once(|| {
        let filter = if verbose {
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("recon_etl=debug,info"))
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("recon_etl=info"))
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .init();
    });
}
