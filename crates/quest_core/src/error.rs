use thiserror::Error;

use crate::world::Location;

/// Rejected player actions. None of these are fatal; the caller reports
/// them and lets the player choose again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestError {
    #[error("invalid item number {index} (inventory holds {len} items)")]
    InvalidIndex { index: usize, len: usize },
    #[error("you need {needed} more gold")]
    InsufficientGold { needed: u32 },
    #[error("not prepared for the dragon: a Steel Sword and any armor are required")]
    NotReady,
    #[error("no path from {from} to {to}")]
    NoRoute { from: Location, to: Location },
    #[error("{item} is not sold at the {location}")]
    NotForSale { item: &'static str, location: Location },
    #[error("unknown item `{0}`")]
    UnknownItem(String),
}
