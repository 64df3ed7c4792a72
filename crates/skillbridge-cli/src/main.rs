mod config;
mod console;

use config::AppConfig;
use console::{ConsoleSink, ConsoleSource};
use skillbridge_a2a::{A2aClient, A2aInvoker};
use skillbridge_agent::{ConversationOrchestrator, SessionDriver};
use skillbridge_skills::SkillCatalog;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loaded before the subscriber so RUST_LOG may come from .env.
    let dotenv_error = reportable_dotenv_error(dotenvy::dotenv());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(e) = dotenv_error {
        warn!(error = %e, "Ignoring unreadable .env file");
    }

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}. Set it in the environment or a .env file.");
            std::process::exit(1);
        }
    };

    let client = A2aClient::new(config.a2a.clone());
    let catalog = discover_or_empty(&client).await;
    debug!(
        declarations = %serde_json::to_string_pretty(&catalog.declarations())?,
        "Function declarations for Gemini"
    );

    let catalog = Arc::new(catalog);
    let invoker = Arc::new(A2aInvoker::new(client));
    let orchestrator = ConversationOrchestrator::new(config.model, catalog, invoker);
    info!(skills = orchestrator.catalog().len(), "Chat session ready");

    println!("\nChat with Gemini (type 'quit' to exit)");

    let mut conversation = orchestrator.start_conversation();
    let mut source = ConsoleSource::new();
    let mut sink = ConsoleSink;
    SessionDriver::new(&orchestrator)
        .run(&mut conversation, &mut source, &mut sink)
        .await?;

    Ok(())
}

/// A missing .env is normal; anything else (bad syntax, unreadable file) is worth a warning.
fn reportable_dotenv_error(result: dotenvy::Result<PathBuf>) -> Option<dotenvy::Error> {
    result.err().filter(|e| !e.not_found())
}

/// Fetch the skill catalog; an unreachable or broken server means no tools.
async fn discover_or_empty(client: &A2aClient) -> SkillCatalog {
    match client.fetch_catalog().await {
        Ok(catalog) => catalog,
        Err(e) => {
            warn!(
                error = %e,
                server = %client.config().base_url,
                "Skill discovery failed, is the A2A server running? Continuing without tools"
            );
            SkillCatalog::empty()
        }
    }
}
