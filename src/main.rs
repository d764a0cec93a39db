use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use scatter::cli::{Cli, Sub};
use scatter::drag::DragController;
use scatter::input::PointerEvent;
use scatter::layout::generate_from_config;
use scatter::layout::snapshot::ItemSnapshot;
use scatter::utils::ConfigPath;
use scatter_config::Config;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "scatter=debug,scatter_config=debug";

/// Output line of `replay --each`.
#[derive(Serialize)]
struct ReplayStep<'a> {
    event: PointerEvent,
    changed: bool,
    items: &'a [ItemSnapshot],
}

fn main() -> anyhow::Result<()> {
    let directives = env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_owned());
    let env_filter = EnvFilter::builder().parse_lossy(directives);
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path = ConfigPath::resolve(cli.config);
    let mut config = config_path.load()?;

    override_seed(&mut config, cli.seed);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.subcommand {
        Sub::Validate => info!("config is valid"),
        Sub::Layout => {
            let controller = DragController::new(generate_from_config(&config));
            print_items(&mut out, &controller)?;
        }
        Sub::Replay { file, each } => {
            let mut controller = DragController::new(generate_from_config(&config));
            replay(&mut controller, open_events(file)?, &mut out, each)?;
            if !each {
                print_items(&mut out, &controller)?;
            }
        }
    }

    Ok(())
}

/// Lets `--seed` take priority over `placement.seed`.
fn override_seed(config: &mut Config, seed: Option<u64>) {
    if let Some(seed) = seed {
        config.placement.seed = Some(seed);
    }
}

fn open_events(file: Option<PathBuf>) -> anyhow::Result<Box<dyn BufRead>> {
    Ok(match file {
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("error opening {path:?}"))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    })
}

fn replay(
    controller: &mut DragController,
    events: impl BufRead,
    out: &mut impl Write,
    each: bool,
) -> anyhow::Result<()> {
    for (idx, line) in events.lines().enumerate() {
        let line = line.context("error reading events")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let event: PointerEvent = serde_json::from_str(line)
            .with_context(|| format!("error parsing event on line {}", idx + 1))?;
        let event = event.with_hit_target(controller.items());
        let changed = controller.process_pointer_event(event);

        if each {
            let items = controller.snapshot();
            let step = ReplayStep {
                event,
                changed,
                items: &items,
            };
            serde_json::to_writer(&mut *out, &step)?;
            writeln!(out)?;
        }
    }

    if let Some(drag) = controller.drag_session() {
        debug!("events ended while item {} is still held", drag.item_id());
    }

    Ok(())
}

fn print_items(out: &mut impl Write, controller: &DragController) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &controller.snapshot())?;
    writeln!(out)?;
    Ok(())
}
