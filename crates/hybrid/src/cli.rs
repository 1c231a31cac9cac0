//! Command line interface
//!
//! Replays navigations and actions through the event loop and prints every
//! committed frame.

use clap::Parser;
use hybrid_application::components::UiAction;
use hybrid_application::{HostBuilder, RenderedFrame, UiEvent};
use hybrid_infrastructure::config::ConfigLoader;
use hybrid_infrastructure::logging::init_logging;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tracing::info;

/// Command line interface for Hybrid Shell
#[derive(Parser, Debug)]
#[command(name = "hybrid")]
#[command(about = "Hybrid Shell - Composition and routing core of a single-page app")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to navigate to (repeatable, replayed in order)
    #[arg(short, long = "navigate", value_name = "PATH")]
    pub navigate: Vec<String>,

    /// Action to dispatch after the navigations (repeatable)
    #[arg(short, long = "action", value_name = "NAME")]
    pub action: Vec<String>,
}

impl Cli {
    /// Events to replay: navigations first (defaulting to `/`), then actions
    pub fn events(&self) -> Vec<UiEvent> {
        let navigations = if self.navigate.is_empty() {
            vec!["/".to_string()]
        } else {
            self.navigate.clone()
        };

        navigations
            .into_iter()
            .map(UiEvent::Navigate)
            .chain(self.action.iter().map(|name| UiEvent::Action(UiAction::new(name.as_str()))))
            .collect()
    }
}

/// Load configuration, build the host and replay `cli`'s events
pub async fn run(cli: Cli) -> anyhow::Result<Vec<RenderedFrame>> {
    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.logging)?;

    let host = HostBuilder::create_default(config).build()?;
    let events = cli.events();
    info!(events = events.len(), "Replaying events");

    let (sender, inbox) = mpsc::channel(events.len().max(1));
    let (frames, mut outbox) = mpsc::unbounded_channel();
    for event in events {
        sender.send(event).await?;
    }
    drop(sender);

    host.run(inbox, frames).await?;

    let mut rendered = Vec::new();
    while let Some(frame) = outbox.recv().await {
        rendered.push(frame);
    }
    Ok(rendered)
}

fn load_config(
    config_path: Option<&Path>,
) -> hybrid_domain::Result<hybrid_infrastructure::config::AppConfig> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load()
}
