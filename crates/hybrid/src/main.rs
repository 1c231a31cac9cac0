//! Hybrid Shell - Entry Point
//!
//! Replays the navigations and actions given on the command line and prints
//! the HTML committed for each mount point.

use clap::Parser;
use hybrid::cli::{Cli, run};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    for frame in run(cli).await? {
        let page = frame.page.map_or("<not found>", |page| page.name());
        println!("[{}] {} -> {}", frame.generation, frame.path, page);
        for (selector, html) in &frame.mounts {
            println!("  {selector}: {html}");
        }
    }
    Ok(())
}
