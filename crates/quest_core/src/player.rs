//! The player aggregate and the actions that mutate it.

use serde::Serialize;
use tracing::{info, warn};

use crate::catalog::{Item, ItemKind};
use crate::combat::{resolve_combat, CombatReport, Encounter};
use crate::config::PlayerConfig;
use crate::equipment::is_ready;
use crate::error::QuestError;
use crate::health::{apply_delta, HealthEvent};
use crate::inventory::Inventory;
use crate::world::Location;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerState {
    pub name: String,
    health: i32,
    gold: u32,
    location: Location,
    inventory: Inventory,
}

/// Result of using an inventory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemUse {
    pub item: Item,
    /// True when the entry was used up.
    pub consumed: bool,
    pub health: i32,
    pub health_event: Option<HealthEvent>,
}

impl PlayerState {
    pub fn new(name: impl Into<String>, config: &PlayerConfig) -> Self {
        Self {
            name: name.into(),
            health: config.starting_health(),
            gold: config.starting_gold,
            location: Location::Village,
            inventory: Inventory::new(),
        }
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn is_ready_for_dragon(&self) -> bool {
        is_ready(&self.inventory)
    }

    /// Runs `delta` through the health clamp and stores the result.
    pub fn adjust_health(&mut self, delta: i32) -> Option<HealthEvent> {
        let (health, event) = apply_delta(self.health, delta);
        self.health = health;
        event
    }

    /// Buys one copy of `kind` from the shop at the current location.
    /// Nothing changes unless the purchase goes through.
    pub fn purchase(&mut self, kind: ItemKind) -> Result<Item, QuestError> {
        let item = kind.template();
        if !self.location.stock().contains(&kind) {
            return Err(QuestError::NotForSale {
                item: item.name,
                location: self.location,
            });
        }
        if self.gold < item.cost {
            let needed = item.cost - self.gold;
            warn!(target: "quest_core.player", item = item.name, needed, "not enough gold");
            return Err(QuestError::InsufficientGold { needed });
        }
        self.gold -= item.cost;
        self.inventory.add(item);
        info!(target: "quest_core.player", item = item.name, gold = self.gold, "item bought");
        Ok(item)
    }

    /// Uses the inventory entry at zero-based `index`.
    pub fn use_item(&mut self, index: usize) -> Result<ItemUse, QuestError> {
        let item = *self.inventory.get(index).ok_or(QuestError::InvalidIndex {
            index,
            len: self.inventory.len(),
        })?;
        let len_before = self.inventory.len();
        let delta = self.inventory.consume(index)?;
        let consumed = self.inventory.len() < len_before;
        let health_event = if delta != 0 {
            self.adjust_health(delta)
        } else {
            None
        };
        Ok(ItemUse {
            item,
            consumed,
            health: self.health,
            health_event,
        })
    }

    /// Moves to `destination`. The dragon's lair is refused unless the
    /// player is ready; a refused move changes nothing.
    pub fn travel(&mut self, destination: Location) -> Result<(), QuestError> {
        if !self.location.can_travel_to(destination) {
            return Err(QuestError::NoRoute {
                from: self.location,
                to: destination,
            });
        }
        if destination == Location::DragonLair && !self.is_ready_for_dragon() {
            warn!(target: "quest_core.player", "dragon's lair blocked");
            return Err(QuestError::NotReady);
        }
        info!(target: "quest_core.player", from = %self.location, to = %destination, "travel");
        self.location = destination;
        Ok(())
    }

    /// Fights `encounter` with the current inventory and applies the report.
    pub fn fight(&mut self, encounter: Encounter) -> CombatReport {
        let report = resolve_combat(encounter, &self.inventory, self.health);
        self.apply_combat(&report);
        report
    }

    /// Credits gold, stores the final health and sends a beaten player
    /// back to the village.
    pub fn apply_combat(&mut self, report: &CombatReport) {
        self.health = report.final_player_health;
        self.gold = self.gold.saturating_add(report.gold_awarded);
        if !report.is_victory() {
            self.location = Location::Village;
        }
        info!(
            target: "quest_core.player",
            health = self.health,
            gold = self.gold,
            location = %self.location,
            "combat applied"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Outcome;

    fn player_with_gold(gold: u32) -> PlayerState {
        let config = PlayerConfig {
            starting_gold: gold,
            ..PlayerConfig::default()
        };
        PlayerState::new("Tester", &config)
    }

    #[test]
    fn starts_in_the_village() {
        let player = PlayerState::new("Tester", &PlayerConfig::default());
        assert_eq!(player.health(), 100);
        assert_eq!(player.gold(), 20);
        assert_eq!(player.location(), Location::Village);
        assert!(player.inventory().is_empty());
    }

    #[test]
    fn purchase_debits_gold() {
        let mut player = player_with_gold(20);
        player.travel(Location::Blacksmith).unwrap();
        let item = player.purchase(ItemKind::Sword).unwrap();
        assert_eq!(item.name, "Sword");
        assert_eq!(player.gold(), 10);
        assert_eq!(player.inventory().len(), 1);
    }

    #[test]
    fn short_on_gold_changes_nothing() {
        let mut player = player_with_gold(20);
        player.travel(Location::Blacksmith).unwrap();
        let before = player.clone();
        assert_eq!(
            player.purchase(ItemKind::SteelSword),
            Err(QuestError::InsufficientGold { needed: 5 })
        );
        assert_eq!(player, before);
    }

    #[test]
    fn shops_only_sell_their_own_stock() {
        let mut player = player_with_gold(100);
        player.travel(Location::Market).unwrap();
        assert!(matches!(
            player.purchase(ItemKind::Sword),
            Err(QuestError::NotForSale { location: Location::Market, .. })
        ));
        assert!(player.purchase(ItemKind::HealthPotion).is_ok());
        assert_eq!(player.gold(), 95);
    }

    #[test]
    fn dragon_lair_is_gated() {
        let mut player = player_with_gold(100);
        assert_eq!(player.travel(Location::DragonLair), Err(QuestError::NotReady));
        assert_eq!(player.location(), Location::Village);

        player.travel(Location::Blacksmith).unwrap();
        player.purchase(ItemKind::SteelSword).unwrap();
        player.purchase(ItemKind::WoodenShield).unwrap();
        assert_eq!(
            player.travel(Location::DragonLair),
            Err(QuestError::NoRoute {
                from: Location::Blacksmith,
                to: Location::DragonLair,
            })
        );
        player.travel(Location::Village).unwrap();
        player.travel(Location::DragonLair).unwrap();
        assert_eq!(player.location(), Location::DragonLair);
    }

    #[test]
    fn potions_heal_and_disappear() {
        let mut player = player_with_gold(100);
        player.travel(Location::Market).unwrap();
        player.purchase(ItemKind::HealthPotion).unwrap();
        player.adjust_health(-50);

        let used = player.use_item(0).unwrap();
        assert!(used.consumed);
        assert_eq!(used.health, 80);
        assert_eq!(player.health(), 80);
        assert!(player.inventory().is_empty());
        assert_eq!(player.use_item(0), Err(QuestError::InvalidIndex { index: 0, len: 0 }));
    }

    #[test]
    fn overhealing_reports_full_health() {
        let mut player = player_with_gold(100);
        player.travel(Location::Market).unwrap();
        player.purchase(ItemKind::HealthPotion).unwrap();
        player.adjust_health(-10);
        let used = player.use_item(0).unwrap();
        assert_eq!(used.health, 100);
        assert_eq!(used.health_event, Some(HealthEvent::FullHealth));
    }

    #[test]
    fn gear_is_never_used_up() {
        let mut player = player_with_gold(100);
        player.travel(Location::Blacksmith).unwrap();
        player.purchase(ItemKind::IronShield).unwrap();
        let used = player.use_item(0).unwrap();
        assert!(!used.consumed);
        assert_eq!(used.health, 100);
        assert_eq!(player.inventory().len(), 1);
    }

    #[test]
    fn losing_a_fight_returns_to_the_village() {
        let mut player = player_with_gold(20);
        player.travel(Location::Forest).unwrap();
        let report = player.fight(Encounter::Forest);
        assert_eq!(report.outcome, Outcome::Defeat);
        assert_eq!(player.health(), 80);
        assert_eq!(player.location(), Location::Village);
    }

    #[test]
    fn winning_a_fight_pays_out() {
        let mut player = player_with_gold(20);
        player.travel(Location::Blacksmith).unwrap();
        player.purchase(ItemKind::Sword).unwrap();
        player.travel(Location::Village).unwrap();
        player.travel(Location::Forest).unwrap();

        let report = player.fight(Encounter::Forest);
        assert!(report.is_victory());
        assert_eq!(player.gold(), 20);
        assert_eq!(player.health(), 90);
        assert_eq!(player.location(), Location::Forest);
    }
}
