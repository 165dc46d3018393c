use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ascii_dfs::{Config, Graph, Layout, SleepPacer, animate};

/// Animate a depth-first traversal of the reference graph.
///
/// With no arguments the traversal starts at vertex 5 and pauses three
/// seconds between frames.
#[derive(Parser, Debug)]
#[command(name = "ascii-dfs", version, about, long_about = None)]
struct Cli {
    /// Vertex to start the traversal from
    #[arg(long)]
    start: Option<usize>,

    /// Pause between frames, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,
}

impl Cli {
    fn config(&self) -> Config {
        let mut config = Config::default();
        if let Some(start) = self.start {
            config = config.with_start(start);
        }
        if let Some(ms) = self.delay_ms {
            config = config.with_delay(Duration::from_millis(ms));
        }
        config
    }
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only frames
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();

    let graph = Graph::reference();
    let layout = Layout::reference();
    graph.validate(&layout, config.height, config.width)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    animate(&graph, &layout, &config, &mut out, &mut SleepPacer(config.delay))?;

    Ok(())
}
