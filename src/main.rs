//! Edgeblink firmware — main entry point.
//!
//! ESP-IDF bootstrap only: link patches, logger, then hand off to
//! [`edgeblink::runtime::start`] and park on the running tasks.

#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use edgeblink::config::SystemConfig;

fn main() -> Result<()> {
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("edgeblink v{}", env!("CARGO_PKG_VERSION"));

    let config = SystemConfig::default();
    let app = edgeblink::runtime::start(&config)?;

    info!("System ready.");
    app.join();
    Ok(())
}
