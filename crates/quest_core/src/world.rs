//! Locations, the paths between them and what is sold where.

use std::fmt;

use serde::Serialize;

use crate::catalog::ItemKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Village,
    Blacksmith,
    Market,
    Forest,
    DragonLair,
}

impl Location {
    /// Places reachable in one move. Everything goes through the village.
    pub fn routes(self) -> &'static [Location] {
        match self {
            Location::Village => &[
                Location::Blacksmith,
                Location::Market,
                Location::Forest,
                Location::DragonLair,
            ],
            Location::Blacksmith | Location::Market | Location::Forest | Location::DragonLair => {
                &[Location::Village]
            }
        }
    }

    pub fn can_travel_to(self, destination: Location) -> bool {
        self.routes().contains(&destination)
    }

    /// Items on sale here, in menu order.
    pub fn stock(self) -> &'static [ItemKind] {
        match self {
            Location::Blacksmith => &[
                ItemKind::Sword,
                ItemKind::SteelSword,
                ItemKind::WoodenShield,
                ItemKind::IronShield,
            ],
            Location::Market => &[ItemKind::HealthPotion],
            Location::Village | Location::Forest | Location::DragonLair => &[],
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Location::Village => "village",
            Location::Blacksmith => "blacksmith",
            Location::Market => "market",
            Location::Forest => "forest",
            Location::DragonLair => "dragon_lair",
        };
        f.write_str(label)
    }
}
