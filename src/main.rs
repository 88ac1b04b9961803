mod api;
mod config;
mod models;
mod run;
mod session;
mod ui;

use anyhow::{Context, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    init_logging()?;

    match args.len() {
        1 => {
            let cfg = config::Config::load()?;
            let client = api::ApiClient::new(&cfg.api_url);
            let user = session::CurrentUser::new(cfg.user_id);
            run::as_tui(client, user).await
        }
        2.. => run::as_cli(&args).await,
        _ => {
            eprintln!("Usage: limitui [command]");
            Ok(())
        }
    }
}

/// The TUI owns the terminal, so diagnostics go to a log file in the data
/// directory instead of stdout. Filter with RUST_LOG as usual.
fn init_logging() -> Result<()> {
    let proj_dirs = config::project_dirs()?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    let log_path = data_dir.join("limitui.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("limitui=info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}
