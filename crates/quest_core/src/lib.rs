//! Combat and equipment core for The Dragon's Quest.
//!
//! Everything here is deterministic and free of I/O; the CLI owns menus
//! and input, and calls into these modules with an explicit
//! [`PlayerState`].

pub mod catalog;
pub mod combat;
pub mod config;
pub mod equipment;
pub mod error;
pub mod health;
pub mod inventory;
pub mod player;
pub mod world;

pub use catalog::{Category, Item, ItemKind, CATALOG};
pub use combat::{resolve_combat, CombatEvent, CombatReport, Encounter, Monster, Outcome};
pub use config::{PlayerConfig, QuestConfig, TelemetryConfig};
pub use equipment::{is_ready, select_best, Loadout};
pub use error::QuestError;
pub use health::{apply_delta, HealthDelta, HealthEvent, MAX_HEALTH, MIN_HEALTH};
pub use inventory::Inventory;
pub use player::{ItemUse, PlayerState};
pub use world::Location;
