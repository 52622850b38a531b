use std::time::Instant;

use clap::Parser;
use log::{error, info};

use gmail_snapshot::cli::{handle_keyring_clear, Cli};
use gmail_snapshot::gmail_api::{fetch_snapshot, try_authenticate, GmailClient};
use gmail_snapshot::output::render_report;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.clear_keyring {
        handle_keyring_clear()?;
        return Ok(());
    }

    let token = try_authenticate().await?;
    let client = GmailClient::new(token)?;

    info!("fetching Gmail data...");
    let started = Instant::now();
    match fetch_snapshot(&client, cli.max_messages).await {
        Ok(data) => {
            info!("data fetched in {:.2}s", started.elapsed().as_secs_f64());
            println!("{}", render_report(&data));
            Ok(())
        }
        Err(e) => {
            error!("failed to fetch Gmail data: {}", e);
            std::process::exit(1);
        }
    }
}
