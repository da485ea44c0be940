//! Command-line front end for the shortener client.

use std::sync::Arc;

use clap::Parser;
use colored::Colorize;
use dialoguer::Input;
use tracing_subscriber::EnvFilter;

use url_shortener_client::prelude::*;

#[derive(Parser)]
#[command(
    name = "url-shortener-client",
    version,
    about = "Shorten a URL from the command line"
)]
struct Cli {
    /// URL to shorten; prompted for interactively when omitted.
    url: Option<String>,
}

/// Renders view states onto the terminal.
struct TerminalDisplay;

impl ShortenDisplay for TerminalDisplay {
    fn display(&self, state: ViewState<ShortenViewModel>) {
        match state {
            ViewState::Loading => println!("{}", "Shortening...".dimmed()),
            ViewState::Success(view_model) => {
                println!(
                    "{} {}",
                    "Short URL:".green().bold(),
                    view_model.short_url.bold()
                );
                println!("  {} {}", "for".dimmed(), view_model.original_url);

                if view_model.history.len() > 1 {
                    println!();
                    println!("{}", "History (newest first):".bold());
                    for item in &view_model.history {
                        println!("  {}  {}  {}", item.alias.cyan(), item.short, item.original);
                    }
                }
            }
            ViewState::Error(details) => {
                eprintln!("{} {}", details.title.red().bold(), details.message);
                if let Some(label) = details.retry_label {
                    eprintln!("{}", format!("{label}? The failure looks transient.").yellow());
                }
            }
            ViewState::Idle | ViewState::Empty => {}
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();
    config.log_summary();

    let cli = Cli::parse();
    let raw_url = match cli.url {
        Some(url) => url,
        None => Input::<String>::new()
            .with_prompt("URL to shorten")
            .interact_text()?,
    };

    let transport = Arc::new(HttpTransport::new(
        config.base_url.clone(),
        config.request_timeout,
    )?);
    let orchestrator = Arc::new(ShortenOrchestrator::new(transport, config.retry_policy()));

    let display: Arc<dyn ShortenDisplay> = Arc::new(TerminalDisplay);
    let presenter = Arc::new(ShortenPresenter::new(Arc::new(InlineDispatcher)));
    presenter.attach_display(Arc::downgrade(&display));
    let observer: Arc<dyn ShortenObserver> = presenter.clone();
    orchestrator.attach_observer(Arc::downgrade(&observer));

    orchestrator.shorten(&raw_url).await;

    if orchestrator.history().is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
