//! Fixed item catalog.
//!
//! Every item the game knows about is one of the five templates below.
//! Shops hand out copies of these templates; nothing else creates items.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuestError;

/// How an item is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Weapon,
    Armor,
    Potion,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Weapon => "weapon",
            Category::Armor => "armor",
            Category::Potion => "potion",
        };
        f.write_str(label)
    }
}

/// Identifies one of the catalog templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Sword,
    SteelSword,
    WoodenShield,
    IronShield,
    HealthPotion,
}

impl ItemKind {
    pub const ALL: [ItemKind; 5] = [
        ItemKind::Sword,
        ItemKind::SteelSword,
        ItemKind::WoodenShield,
        ItemKind::IronShield,
        ItemKind::HealthPotion,
    ];

    /// The template this kind stands for.
    pub const fn template(self) -> Item {
        match self {
            ItemKind::Sword => SWORD,
            ItemKind::SteelSword => STEEL_SWORD,
            ItemKind::WoodenShield => WOODEN_SHIELD,
            ItemKind::IronShield => IRON_SHIELD,
            ItemKind::HealthPotion => HEALTH_POTION,
        }
    }

    fn slug(self) -> &'static str {
        match self {
            ItemKind::Sword => "sword",
            ItemKind::SteelSword => "steel-sword",
            ItemKind::WoodenShield => "wooden-shield",
            ItemKind::IronShield => "iron-shield",
            ItemKind::HealthPotion => "health-potion",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ItemKind {
    type Err = QuestError;

    /// Accepts the kebab-case slug (`steel-sword`), the snake_case form
    /// or the display name (`Steel Sword`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        ItemKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == wanted)
            .ok_or_else(|| QuestError::UnknownItem(s.to_string()))
    }
}

/// An immutable item record. Inventory entries are plain copies of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Item {
    pub kind: ItemKind,
    pub name: &'static str,
    pub category: Category,
    /// Price in gold.
    pub cost: u32,
    /// Damage for weapons, protection for armor, healing for potions.
    pub magnitude: u32,
    pub description: &'static str,
}

pub const SWORD: Item = Item {
    kind: ItemKind::Sword,
    name: "Sword",
    category: Category::Weapon,
    cost: 10,
    magnitude: 10,
    description: "A sturdy blade for combat",
};

pub const STEEL_SWORD: Item = Item {
    kind: ItemKind::SteelSword,
    name: "Steel Sword",
    category: Category::Weapon,
    cost: 25,
    magnitude: 20,
    description: "A masterwork blade forged from steel",
};

pub const WOODEN_SHIELD: Item = Item {
    kind: ItemKind::WoodenShield,
    name: "Wooden Shield",
    category: Category::Armor,
    cost: 8,
    magnitude: 5,
    description: "Reduces damage taken in combat",
};

pub const IRON_SHIELD: Item = Item {
    kind: ItemKind::IronShield,
    name: "Iron Shield",
    category: Category::Armor,
    cost: 20,
    magnitude: 10,
    description: "Heavy iron shield providing excellent protection",
};

pub const HEALTH_POTION: Item = Item {
    kind: ItemKind::HealthPotion,
    name: "Health Potion",
    category: Category::Potion,
    cost: 5,
    magnitude: 30,
    description: "Restores 30 health points",
};

/// All templates in catalog order.
pub const CATALOG: [Item; 5] = [SWORD, STEEL_SWORD, WOODEN_SHIELD, IRON_SHIELD, HEALTH_POTION];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_their_templates() {
        for (kind, item) in ItemKind::ALL.into_iter().zip(CATALOG) {
            assert_eq!(kind.template(), item);
            assert_eq!(item.kind, kind);
        }
    }

    #[test]
    fn parses_slugs_and_display_names() {
        assert_eq!("steel-sword".parse::<ItemKind>().unwrap(), ItemKind::SteelSword);
        assert_eq!("Iron Shield".parse::<ItemKind>().unwrap(), ItemKind::IronShield);
        assert_eq!("health_potion".parse::<ItemKind>().unwrap(), ItemKind::HealthPotion);
        assert!(matches!(
            "axe".parse::<ItemKind>(),
            Err(QuestError::UnknownItem(name)) if name == "axe"
        ));
    }
}
