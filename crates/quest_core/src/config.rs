use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::health::{MAX_HEALTH, MIN_HEALTH};

const DEFAULT_STARTING_GOLD: u32 = 20;
const DEFAULT_STARTING_HEALTH: i32 = MAX_HEALTH;

pub const STARTING_GOLD_VAR: &str = "QUEST_STARTING_GOLD";
pub const STARTING_HEALTH_VAR: &str = "QUEST_STARTING_HEALTH";

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct QuestConfig {
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}

impl QuestConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&data).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn parse(data: &str) -> Result<Self> {
        let cfg: QuestConfig = toml::from_str(data)?;
        Ok(cfg)
    }

    /// Loads `path` if given, otherwise defaults, then applies
    /// `QUEST_STARTING_*` environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let cfg = match path {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };
        Ok(cfg.with_env_overrides(|key| std::env::var(key).ok()))
    }

    /// Unparseable values are ignored.
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(gold) = lookup(STARTING_GOLD_VAR).and_then(|val| val.parse().ok()) {
            self.player.starting_gold = gold;
        }
        if let Some(health) = lookup(STARTING_HEALTH_VAR).and_then(|val| val.parse().ok()) {
            self.player.starting_health = health;
        }
        self
    }

    pub fn trace_filter(&self) -> Option<&str> {
        self.telemetry
            .as_ref()
            .and_then(|telemetry| telemetry.trace_filter.as_deref())
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PlayerConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_starting_gold")]
    pub starting_gold: u32,
    #[serde(default = "default_starting_health")]
    pub starting_health: i32,
}

impl PlayerConfig {
    pub fn starting_health(&self) -> i32 {
        self.starting_health.clamp(MIN_HEALTH, MAX_HEALTH)
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            name: None,
            starting_gold: DEFAULT_STARTING_GOLD,
            starting_health: DEFAULT_STARTING_HEALTH,
        }
    }
}

fn default_starting_gold() -> u32 {
    DEFAULT_STARTING_GOLD
}

fn default_starting_health() -> i32 {
    DEFAULT_STARTING_HEALTH
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct TelemetryConfig {
    #[serde(default)]
    pub trace_filter: Option<String>,
}
