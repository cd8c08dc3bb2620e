//! Streamify terminal dashboard
//!
//! Loads the record store (JSON snapshot or generated mock data), computes
//! the summary metrics and runs the filterable/sortable stream table.

use streamify::{ui, DashboardConfig, DataSource, ViewController};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let config = DashboardConfig::from_env();

    // Logs go to stderr; the UI draws on the alternate screen
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.rust_log))
        .target(env_logger::Target::Stderr)
        .init();

    let mut source = DataSource::from_config(&config);

    log::info!("🚀 Starting Streamify dashboard");
    log::info!("📊 Configuration:");
    log::info!("   Source: {}", source.describe());
    log::info!("   Top artist ranking: {:?}", config.ranking);
    log::info!("   Table rows: {}", config.table_rows);

    let store = source.load()?;
    let mut controller = ViewController::new(store, config.ranking);

    let metrics = controller.metrics();
    log::info!(
        "✅ Loaded {} streams (users: {}, streams: {}, top artist: {})",
        controller.store().len(),
        metrics.total_users,
        metrics.total_streams,
        metrics.top_artist.as_deref().unwrap_or("N/A")
    );

    ui::run_ui(&mut controller, &mut source, config.table_rows)?;

    log::info!("👋 Dashboard closed");
    Ok(())
}
