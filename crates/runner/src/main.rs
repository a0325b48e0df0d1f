use anyhow::Context;
use courtside_booking::shutdown_channel;
use courtside_clock::SystemClock;
use courtside_gateway::RestClient;
use courtside_runner::{AppConfigFile, BookingSession, Console, SessionSettings, load_config};
use std::sync::Arc;

fn print_help() {
    eprintln!(
        r#"Courtside - sports venue booking assistant

USAGE:
    courtside [OPTIONS]

OPTIONS:
    -c, --config <PATH>   Load configuration from JSON file
    -h, --help            Print this help message

ENVIRONMENT VARIABLES:
    COURTSIDE_HOST        Booking service base URL (overrides config)
    COURTSIDE_TOKEN       Session token (overrides config)
    COURTSIDE_OPENID      Account open id (overrides config)
    RUST_LOG              Log level filter (default: courtside=info)

EXAMPLES:
    # Run with config file
    courtside --config courtside.json

    # Run from the environment only
    COURTSIDE_HOST=https://booking.example.edu COURTSIDE_TOKEN=... courtside
"#
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("courtside=info"))
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let config = match config_path {
        Some(path) => {
            log::info!("Loading configuration from: {}", path);
            load_config(&path).with_context(|| format!("loading {}", path))?
        }
        None => AppConfigFile::empty(),
    }
    .apply_env();
    config.validate()?;

    log::info!("Booking service: {}", config.gateway.base_url());
    log::debug!("Gateway config: {:?}", config.gateway);

    let settings = SessionSettings::from_config(&config.booking)?;
    let gateway = Arc::new(RestClient::new(config.gateway.clone())?);
    let session = BookingSession::new(gateway, SystemClock::new(), settings);

    let mut console = Console::stdio();
    let plan = session.prepare(&mut console).await?;

    // Ctrl-C stops the wait and the retry loop from here on
    let (stop, mut shutdown) = shutdown_channel();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::info!("Ctrl-C received, stopping");
            let _ = stop.send(true);
        }
    });

    match session.book(plan, &mut console, &mut shutdown).await {
        Ok(order) => {
            log::info!("Booking complete: order {}", order.order_no);
            Ok(())
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("\n{}", e);
            std::process::exit(if e.is_cancelled() { 130 } else { 1 });
        }
    }
}
