use std::path::PathBuf;

use clap::Parser;
use meetapp::api::HttpApi;
use meetapp::data::storage::DataDirectory;
use meetapp::state::AppState;
use meetapp::worker::ApiWorker;
use meetapp::{App, init_logging};
use meetapp_core::DashboardState;

#[derive(Parser, Debug)]
#[command(name = "meetapp")]
#[command(about = "Browse and subscribe to meetapps from the terminal")]
struct Args {
    /// Path to the data directory (default: ~/.meetapp/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Base URL of the meetapp API (overrides config.yaml)
    #[arg(long, env = "MEETAPP_BASE_URL")]
    base_url: Option<String>,

    /// Session token sent as a bearer credential (overrides config.yaml)
    #[arg(long, env = "MEETAPP_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = DataDirectory::new(args.data_dir.unwrap_or_else(DataDirectory::default_path));
    data_dir.init()?;

    init_logging(data_dir.root(), &args.log_level)?;

    let config = data_dir
        .load_config()?
        .with_overrides(args.base_url, args.token);
    let time_zone = config.resolve_time_zone();
    tracing::info!(
        base_url = %config.api.base_url,
        time_zone = time_zone.iana_name().unwrap_or("system"),
        "Starting meetapp"
    );

    let api = HttpApi::new(&config.api)?;
    let worker = ApiWorker::spawn(api);
    let state = AppState::new(DashboardState::today(time_zone), data_dir.load_keybindings());
    let mut app = App::new(state, worker);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
