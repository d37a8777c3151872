//! Automatic gear selection and the dragon readiness check.

use crate::catalog::{Category, Item, STEEL_SWORD};
use crate::inventory::Inventory;

/// Best item of `category`: highest magnitude, earliest entry on ties.
pub fn select_best(inventory: &Inventory, category: Category) -> Option<Item> {
    inventory
        .by_category(category)
        .fold(None, |best: Option<&Item>, item| match best {
            Some(current) if current.magnitude >= item.magnitude => Some(current),
            _ => Some(item),
        })
        .copied()
}

/// Weapon and armor a fight would use right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loadout {
    pub weapon: Option<Item>,
    pub armor: Option<Item>,
}

impl Loadout {
    pub fn from_inventory(inventory: &Inventory) -> Self {
        Self {
            weapon: select_best(inventory, Category::Weapon),
            armor: select_best(inventory, Category::Armor),
        }
    }

    /// Protection subtracted from each incoming hit.
    pub fn protection(&self) -> u32 {
        self.armor.map_or(0, |armor| armor.magnitude)
    }
}

/// True when the inventory holds a Steel Sword and any armor.
pub fn is_ready(inventory: &Inventory) -> bool {
    let has_steel_sword = inventory
        .items()
        .iter()
        .any(|item| item.name == STEEL_SWORD.name && item.category == Category::Weapon);
    has_steel_sword && inventory.has_category(Category::Armor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Item, ItemKind, ItemKind::*};

    fn inventory(kinds: &[ItemKind]) -> Inventory {
        kinds.iter().copied().collect()
    }

    #[test]
    fn empty_category_selects_nothing() {
        assert_eq!(select_best(&Inventory::new(), Category::Weapon), None);
        assert_eq!(select_best(&inventory(&[HealthPotion]), Category::Armor), None);
    }

    #[test]
    fn picks_highest_magnitude() {
        let bag = inventory(&[Sword, WoodenShield, SteelSword, IronShield, Sword]);
        assert_eq!(select_best(&bag, Category::Weapon).map(|i| i.kind), Some(SteelSword));
        assert_eq!(select_best(&bag, Category::Armor).map(|i| i.kind), Some(IronShield));
    }

    #[test]
    fn ties_go_to_the_first_entry() {
        let blunt = Item {
            name: "Blunt Sword",
            description: "Same edge, different name",
            ..Sword.template()
        };
        let bag: Inventory = [Sword.template(), blunt].into_iter().collect();
        assert_eq!(select_best(&bag, Category::Weapon).map(|i| i.name), Some("Sword"));

        let bag: Inventory = [blunt, Sword.template()].into_iter().collect();
        assert_eq!(select_best(&bag, Category::Weapon).map(|i| i.name), Some("Blunt Sword"));
    }

    #[test]
    fn loadout_protection_defaults_to_zero() {
        let loadout = Loadout::from_inventory(&inventory(&[Sword]));
        assert_eq!(loadout.protection(), 0);
        let loadout = Loadout::from_inventory(&inventory(&[Sword, WoodenShield]));
        assert_eq!(loadout.protection(), 5);
    }

    #[test]
    fn readiness_needs_steel_sword_and_armor() {
        assert!(!is_ready(&Inventory::new()));
        assert!(!is_ready(&inventory(&[Sword, IronShield])));
        assert!(!is_ready(&inventory(&[SteelSword])));
        assert!(!is_ready(&inventory(&[SteelSword, HealthPotion])));
        assert!(is_ready(&inventory(&[SteelSword, WoodenShield])));
        assert!(is_ready(&inventory(&[IronShield, HealthPotion, SteelSword])));
    }
}
