mod app_config;
mod error;
mod licenses;

use std::io::Write;

use tracing::info;

use crate::{app_config::AppConfig, error::FarmConfigError};

fn main() -> Result<(), FarmConfigError> {
    tracing_subscriber::fmt().init();

    // Constructed once here and handed to whatever consumes it; the
    // deployer edits the defaults in `app_config.rs` before deploying.
    let config = AppConfig::default();

    let backend = if config.deploy_mongo_db {
        "MongoDB"
    } else {
        "Amazon DocumentDB"
    };
    info!(
        "Farm configuration: {} region(s), {} UBL license(s), backed by {}",
        config.deadline_client_linux_ami_map.len(),
        config.ubl_licenses.len(),
        backend,
    );

    let rendered = serde_json::to_string_pretty(&config)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.write_all(b"\n")?;

    Ok(())
}
