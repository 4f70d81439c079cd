//! dockside - headless replay of dockable panel input

use anyhow::Context;
use clap::Parser;

use dockside::cli::CliArgs;
use dockside::config::DockConfig;
use dockside::model::AppModel;
use dockside::replay::{Replay, ReplayScript};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    dockside::tracing::init();

    let mut config = match &args.config {
        Some(path) => DockConfig::load_from(path),
        None => DockConfig::load(),
    };
    args.apply_overrides(&mut config);

    let script = ReplayScript::load(&args.script)?;
    let viewport = args.viewport.or(script.viewport).unwrap_or_default();
    tracing::info!(
        events = script.events.len(),
        edge = %config.position,
        "replaying {}",
        args.script.display()
    );

    let mut replay = Replay::new(AppModel::new(&config, viewport));
    replay.run(&script.events);
    let report = replay.finish();

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
        println!("{}", json);
    } else {
        for frame in &report.frames {
            println!("{}", frame.summary());
        }
        println!("{}", report.final_frame.summary());
    }

    if args.persist {
        if let Some(layout) = report.persisted {
            config.apply_layout(layout);
            let saved = match &args.config {
                Some(path) => config.save_to(path),
                None => config.save(),
            };
            saved.map_err(anyhow::Error::msg)?;
        }
    }

    Ok(())
}
