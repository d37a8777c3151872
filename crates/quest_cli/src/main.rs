mod game;
mod menu;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use quest_core::{resolve_combat, Encounter, Inventory, ItemKind, QuestConfig, CATALOG, MAX_HEALTH};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::game::Session;

#[derive(Parser)]
#[command(version, about = "The Dragon's Quest: a turn-based text adventure")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive game.
    Play(PlayArgs),
    /// Resolve a single fight and print the combat report as JSON.
    Fight(FightArgs),
    /// Print the item catalog as JSON.
    Catalog,
}

#[derive(Args)]
struct PlayArgs {
    /// Skip the name prompt.
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct FightArgs {
    /// Fight the dragon instead of a forest monster.
    #[arg(long)]
    boss: bool,
    /// Item to carry into the fight, e.g. `steel-sword`. Repeatable.
    #[arg(long = "item")]
    items: Vec<ItemKind>,
    #[arg(long, default_value_t = MAX_HEALTH)]
    health: i32,
    #[arg(long)]
    id: Option<String>,
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Play(args) => handle_play(args),
        Commands::Fight(args) => handle_fight(args),
        Commands::Catalog => handle_catalog(),
    }
}

/// `RUST_LOG` wins over the config's `trace_filter`; default is `warn`.
fn init_tracing(config: &QuestConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.trace_filter().unwrap_or("warn")))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .ok();
}

fn handle_play(args: PlayArgs) -> Result<()> {
    let config = QuestConfig::load(args.config.as_deref())?;
    init_tracing(&config);

    let stdin = io::stdin();
    let mut session = Session::start(stdin.lock(), io::stdout(), &config.player, args.name)
        .context("failed to start the game")?;
    let end = session.run()?;
    let player = session.player();
    info!(
        target: "quest_cli",
        ?end,
        health = player.health(),
        gold = player.gold(),
        "final state"
    );
    Ok(())
}

fn handle_fight(args: FightArgs) -> Result<()> {
    let config = QuestConfig::load(args.config.as_deref())?;
    init_tracing(&config);

    let run_id = args
        .id
        .unwrap_or_else(|| format!("fight-{}", Utc::now().format("%Y%m%dT%H%M%S")));
    let inventory: Inventory = args.items.into_iter().collect();
    let report = resolve_combat(Encounter::for_boss_fight(args.boss), &inventory, args.health);

    let output = serde_json::json!({
        "id": run_id,
        "report": report,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn handle_catalog() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&CATALOG)?);
    Ok(())
}
