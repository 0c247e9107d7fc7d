//! Command-line access to the demo backend.
//!
//! Run with:
//! ```text
//! PICKS_DEMO_DATA_DIR=.picks-demo cargo run -p picks-demo -- <command>
//! ```
//!
//! Commands: `scenarios`, `use <scenario>`, `reset [scenario]`, `dataset`,
//! `season`, `drivers`, `available`, `races`, `current-race`, `picks`,
//! `leaderboard`, `results <race-id>`, `pick <race-id> <driver-id>`, `sync`.

use anyhow::{Context, bail};
use picks::types::CreatePickRequest;
use picks_demo::prelude::*;
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_id(arg: Option<&String>, what: &str) -> anyhow::Result<Uuid> {
    let raw = arg.with_context(|| format!("missing {what} id"))?;
    raw.parse()
        .with_context(|| format!("invalid {what} id: {raw}"))
}

fn parse_scenario(arg: Option<&String>) -> anyhow::Result<Option<ScenarioId>> {
    arg.map(|raw| raw.parse::<ScenarioId>())
        .transpose()
        .map_err(Into::into)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = MockConfig::from_env();
    if !config.enabled {
        bail!("demo mode is disabled; set PICKS_DEMO_MODE=true to enable it");
    }

    let api = MockApi::from_config(config);
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("scenarios");

    match command {
        "scenarios" => print_json(&api.scenarios().await),
        "use" => {
            let scenario = parse_scenario(args.get(1))?.context("missing scenario id")?;
            print_json(&api.switch_scenario(scenario).await)
        }
        "reset" => print_json(&api.reset_scenario(parse_scenario(args.get(1))?).await),
        "dataset" => print_json(&api.store().dataset().await),
        "season" => print_json(&api.season().await),
        "drivers" => print_json(&api.drivers().await),
        "available" => print_json(&api.available_drivers().await),
        "races" => print_json(&api.races().await),
        "current-race" => print_json(&api.current_race().await),
        "picks" => print_json(&api.picks().await),
        "leaderboard" => print_json(&api.leaderboard().await),
        "results" => print_json(&api.race_results(parse_id(args.get(1), "race")?).await),
        "pick" => {
            let request = CreatePickRequest {
                race_id: parse_id(args.get(1), "race")?,
                driver_id: parse_id(args.get(2), "driver")?,
            };
            print_json(&api.create_pick(request).await)
        }
        "sync" => print_json(&api.trigger_sync().await),
        other => bail!("unknown command: {other}"),
    }
}
