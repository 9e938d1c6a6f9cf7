use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::Settings;

/// Installs the global subscriber. Everything goes to stderr; stdout
/// belongs to command output. Calling it again keeps the first subscriber.
pub fn init(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Err(e) = installed {
        debug!(error = %e, "global subscriber already set");
    }
}
