use bookcache::catalog::factory::create_sync_service;
use bookcache::core::domain::Configuration;
use bookcache::utils::logs::setup_tracing;
use tracing::{error, info};

// Runs one cache sync. Failures are logged only, the exit status stays successful so a
// scheduler simply tries again on its next tick.
#[tokio::main]
async fn main() {
    let (config, config_errors) = Configuration::from_env();
    setup_tracing(config.log_format);
    for err in config_errors {
        error!(error = %err, "ignoring invalid override, using its default");
    }

    let svc = match create_sync_service(&config) {
        Ok(svc) => svc,
        Err(err) => {
            error!(error = %err, "failed to build sync service");
            return;
        }
    };

    match svc.update_cache().await {
        Ok(summary) => {
            info!(run_id = summary.run_id.as_str(), status = ?summary.status, total = summary.total,
                found = summary.found, missing = summary.missing, failed = summary.failed,
                written = summary.written, output = summary.output_path.as_str(), "cache sync finished");
        }
        Err(err) => {
            error!(error = %err, output = config.output_path.as_str(), "failed to write cache");
        }
    }
}
