//! Terminal front end for the storefront concierge.
//!
//! Loads a store snapshot, prints proactive prompts as they fire and
//! answers stdin lines until EOF or `quit`.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use storefront_concierge::adapters::{
    ChannelPromptPublisher, JsonFileSnapshotSource, RandomReplyChooser,
};
use storefront_concierge::application::{
    ProactiveService, StartSessionCommand, StartSessionHandler,
};
use storefront_concierge::config::{AppConfig, LoggingConfig};
use storefront_concierge::domain::responses::ResponseEngine;

#[derive(Parser)]
#[command(name = "storefront-concierge")]
#[command(about = "Rule-based storefront chat concierge", long_about = None)]
struct Cli {
    /// Store snapshot JSON (camelCase, as emitted by the storefront theme)
    snapshot: PathBuf,

    /// Seed for filler reply selection
    #[arg(long)]
    seed: Option<u64>,
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let registry = tracing_subscriber::registry().with(filter);
    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging);

    let chooser = match cli.seed {
        Some(seed) => RandomReplyChooser::seeded(seed),
        None => RandomReplyChooser::from_entropy(),
    };
    let engine = ResponseEngine::new(config.store_policy()?, Arc::new(chooser));

    let source = Arc::new(JsonFileSnapshotSource::new(&cli.snapshot));
    let mut session = StartSessionHandler::new(source, engine)
        .handle(StartSessionCommand {
            thinking_delay: config.timing.thinking_delay(),
        })
        .await?;

    let (publisher, mut prompts) = ChannelPromptPublisher::channel(8);
    let mut proactive = ProactiveService::new(config.proactive_settings(), Arc::new(publisher));
    tokio::spawn(async move {
        while let Some(prompt) = prompts.recv().await {
            println!("[{:?}] {}", prompt.kind, prompt.message);
        }
    });

    tokio::time::sleep(config.timing.welcome_delay()).await;
    proactive.on_welcome()?;

    let contextual = tokio::time::sleep(config.timing.contextual_prompt_delay());
    tokio::pin!(contextual);
    let mut contextual_fired = false;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let idle = tokio::time::sleep(config.timing.inactivity_timeout());
        tokio::select! {
            _ = &mut contextual, if !contextual_fired => {
                contextual_fired = true;
                proactive.on_page_settled(session.snapshot()).await?;
            }
            _ = idle => {
                proactive.on_inactivity().await?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().eq_ignore_ascii_case("quit") {
                    break;
                }
                proactive.open_chat()?;
                let turn = session.respond(&line).await;
                println!("{}\n", turn.reply);
            }
        }
    }

    session.end();
    Ok(())
}
