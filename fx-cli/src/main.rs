//! Currency converter CLI
//!
//! Interactive converter UI for the converter proxy, plus one-shot commands.

mod app;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use directories::ProjectDirs;

use fx_client::ConverterClient;
use fx_history::{FileStorage, HistoryStore};
use fx_types::{ConversionRecord, ConversionRequest, Currency};

use crate::ui::render;

#[derive(Parser)]
#[command(name = "fx")]
#[command(author, version, about = "Currency converter", long_about = None)]
struct Cli {
    /// Base URL of the converter proxy
    #[arg(long, env = "FX_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    /// Directory holding the conversion history
    #[arg(long, env = "FX_HISTORY_DIR")]
    history_dir: Option<PathBuf>,

    /// Runs the interactive converter when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported currencies
    Currencies,
    /// Convert an amount and record it in the history
    Convert {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long)]
        amount: f64,
    },
    /// Show recent conversions
    History {
        /// Print the raw records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check proxy health
    Health,
}

fn history_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    let proj_dirs = ProjectDirs::from("", "", "fx-converter")
        .context("Could not determine project directories")?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let client = ConverterClient::new(&cli.api_url);
    let history = HistoryStore::new(FileStorage::new(history_dir(cli.history_dir)?));
    tracing::debug!(dir = %history.storage().dir().display(), "Using history directory");

    match cli.command {
        None => app::run(client, history).await?,

        Some(Commands::Health) => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ Proxy is healthy");
            } else {
                println!("✗ Proxy is not healthy");
                std::process::exit(1);
            }
        }

        Some(Commands::Currencies) => {
            let names = client.currencies().await?;
            print!("{}", render::currency_list(&Currency::list_from(&names)));
        }

        Some(Commands::Convert { from, to, amount }) => {
            let res = client
                .convert(&ConversionRequest::new(from, to, amount))
                .await?;
            history.append(ConversionRecord::from_result(&res));
            println!("{}", render::format_money(res.result, &res.to));
            println!("{}", render::detail_line(&res));
        }

        Some(Commands::History { json }) => {
            let records = history.load();
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                print!("{}", render::history_view(&records));
            }
        }
    }

    Ok(())
}
