//! DevBr translations
//!
//! Dumps the pt-BR catalog as JSON

use anyhow::Context;
use tracing::info;

use devbr_i18n::{config::Settings, utils::logging, TranslationStore};

fn main() -> anyhow::Result<()> {
    // Load configuration
    let settings = Settings::new().context("failed to load settings")?;
    settings.validate()?;

    // Initialize logging
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", devbr_i18n::info());

    let store = TranslationStore::pt_br();
    let stats = store.stats();
    logging::log_catalog_stats(&stats.locale, stats.sections, stats.total_keys);

    println!("{}", store.to_json()?);
    Ok(())
}
