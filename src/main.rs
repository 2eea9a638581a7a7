use ecomdash::{
    config::DashboardConfig,
    date_bounds,
    render,
    ui::{run_ui, DashboardApp},
    DashboardState,
    DateRange,
    LoaderCache,
};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let args: Vec<String> = env::args().collect();
    let config = DashboardConfig::from_env()?.apply_args(&args)?;

    // Logs go to stderr so they stay out of the JSON snapshot and the alternate screen
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    log::info!("🚀 Starting ecomdash");
    log::info!("   Data dir: {}", config.data_dir.display());
    log::info!("   Shape: {}", config.shape.as_str());
    log::info!("   Top N: {}", config.top_n);
    log::info!("   RUST_LOG: {}", config.rust_log.as_deref().unwrap_or("info"));

    let mut cache = LoaderCache::new();
    let store = cache.load(config.shape, &config.sources())?;

    let bounds = date_bounds(&*store);
    let range = match (bounds, config.start_date, config.end_date) {
        (_, Some(start), Some(end)) => DateRange::new(start, end),
        (Some(b), start, end) => DateRange::new(start.unwrap_or(b.start), end.unwrap_or(b.end)),
        (None, start, end) => {
            log::warn!("No order carries a purchase timestamp");
            let today = chrono::Local::now().date_naive();
            DateRange::new(start.unwrap_or(today), end.unwrap_or(today))
        }
    };
    if range.is_empty() {
        log::warn!("Start date {} is after end date {}; nothing will match", range.start, range.end);
    }

    let state = DashboardState::new(range).with_top_n(config.top_n);

    if config.json_output {
        let dashboard = render(&*store, &state);
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
        return Ok(());
    }

    let mut app = DashboardApp::new(&*store, state, bounds);
    run_ui(&mut app)?;
    log::info!("👋 Dashboard closed");

    Ok(())
}
