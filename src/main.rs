use clap::Parser;
use log::warn;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use quicktips::core::config;
use quicktips::core::content::{self, builtin};
use quicktips::core::guide::{FileGuideStore, GuideStore, MemoryGuideStore};
use quicktips::tui;

#[derive(Parser)]
#[command(name = "quicktips", about = "Terminal quick-reference guide of Epic EHR tips")]
struct Args {
    /// Alternate content table (TOML file)
    #[arg(short, long)]
    content: Option<String>,

    /// Open the introductory guide at startup regardless of the stored flag
    #[arg(long)]
    guide: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize file logger - writes to quicktips.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("quicktips.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Quick Tips starting up");

    let config = config::load_config()?;
    let resolved = config::resolve(&config, args.content.as_deref());

    let content = match &resolved.content_file {
        Some(path) => {
            log::info!("Loading content table from {}", path.display());
            content::load_content_file(path)?
        }
        None => builtin::content(),
    };
    for warning in content.validate()? {
        warn!("content check: {warning}");
    }

    // The guide flag: read once, written once right after the decision.
    let store: Box<dyn GuideStore> = match FileGuideStore::at_default_path() {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!("guide flag store unavailable ({e}), falling back to in-memory");
            Box::new(MemoryGuideStore::default())
        }
    };
    let first_launch = !store.has_seen();
    if first_launch
        && let Err(e) = store.mark_seen()
    {
        warn!("failed to persist guide flag: {e}");
    }

    tui::run(content, resolved.timing, first_launch || args.guide)?;
    Ok(())
}
