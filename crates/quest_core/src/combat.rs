//! Deterministic fight resolution.
//!
//! A fight runs to completion in one call: the player's best weapon and
//! armor are chosen up front and rounds alternate player-then-monster
//! until one side drops. There is no randomness; the same loadout,
//! encounter and starting health always produce the same report.

use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::Item;
use crate::equipment::Loadout;
use crate::health::{apply_delta, HealthEvent, MAX_HEALTH, MIN_HEALTH};
use crate::inventory::Inventory;

/// Health lost when fleeing a fight without a weapon.
pub const RETREAT_PENALTY: i32 = 20;
/// Every monster hit deals at least this much, whatever the armor.
pub const MIN_HIT: i32 = 1;

/// Which scripted fight is taking place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Encounter {
    Forest,
    Dragon,
}

impl Encounter {
    pub fn for_boss_fight(is_boss_fight: bool) -> Self {
        if is_boss_fight {
            Encounter::Dragon
        } else {
            Encounter::Forest
        }
    }

    pub fn is_boss(self) -> bool {
        self == Encounter::Dragon
    }

    pub fn monster(self) -> Monster {
        match self {
            Encounter::Forest => Monster {
                name: "Monster",
                max_health: 20,
                attack_damage: 10,
            },
            Encounter::Dragon => Monster {
                name: "DRAGON",
                max_health: 50,
                attack_damage: 20,
            },
        }
    }

    /// Gold paid out for winning.
    pub fn reward(self) -> u32 {
        match self {
            Encounter::Forest => 10,
            Encounter::Dragon => 50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Monster {
    pub name: &'static str,
    pub max_health: i32,
    pub attack_damage: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Victory,
    Defeat,
}

/// One step of the fight, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CombatEvent {
    /// No weapon: the player flees before any round is played.
    Retreat {
        penalty: i32,
        player_health: i32,
        health_event: Option<HealthEvent>,
    },
    PlayerAttack {
        round: u32,
        damage: i32,
        /// Monster health as shown to the player, floored at zero.
        monster_health: i32,
    },
    MonsterAttack {
        round: u32,
        blocked: u32,
        damage: i32,
        player_health: i32,
        health_event: Option<HealthEvent>,
    },
}

/// Everything the caller needs to narrate and apply a fight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombatReport {
    pub encounter: Encounter,
    pub monster: Monster,
    pub weapon: Option<Item>,
    pub armor: Option<Item>,
    pub outcome: Outcome,
    pub gold_awarded: u32,
    pub legendary_treasure: bool,
    pub final_player_health: i32,
    pub rounds: u32,
    pub events: Vec<CombatEvent>,
}

impl CombatReport {
    pub fn is_victory(&self) -> bool {
        self.outcome == Outcome::Victory
    }
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    AwaitingWeaponCheck,
    RoundExchange { weapon: Item },
    Victory,
    Defeat,
}

struct Combat {
    monster: Monster,
    /// Raw value; may go negative; only `<= 0` is checked.
    monster_health: i32,
    player_health: i32,
    loadout: Loadout,
    round: u32,
    events: Vec<CombatEvent>,
}

impl Combat {
    fn check_weapon(&mut self) -> Phase {
        match self.loadout.weapon {
            Some(weapon) => Phase::RoundExchange { weapon },
            None => {
                let (health, health_event) = apply_delta(self.player_health, -RETREAT_PENALTY);
                self.player_health = health;
                self.events.push(CombatEvent::Retreat {
                    penalty: RETREAT_PENALTY,
                    player_health: health,
                    health_event,
                });
                info!(target: "quest_core.combat", monster = self.monster.name, "no weapon, retreating");
                Phase::Defeat
            }
        }
    }

    fn exchange(&mut self, weapon: Item) -> Phase {
        if self.player_health <= 0 {
            return Phase::Defeat;
        }
        self.round += 1;

        let damage = weapon.magnitude as i32;
        self.monster_health -= damage;
        self.events.push(CombatEvent::PlayerAttack {
            round: self.round,
            damage,
            monster_health: self.monster_health.max(0),
        });
        debug!(
            target: "quest_core.combat",
            round = self.round,
            damage,
            monster_health = self.monster_health,
            "player attacks"
        );
        if self.monster_health <= 0 {
            return Phase::Victory;
        }

        let blocked = self.loadout.protection();
        let damage = (self.monster.attack_damage - blocked as i32).max(MIN_HIT);
        let (health, health_event) = apply_delta(self.player_health, -damage);
        self.player_health = health;
        self.events.push(CombatEvent::MonsterAttack {
            round: self.round,
            blocked,
            damage,
            player_health: health,
            health_event,
        });
        debug!(
            target: "quest_core.combat",
            round = self.round,
            blocked,
            damage,
            player_health = health,
            "monster attacks"
        );

        if self.player_health <= 0 {
            Phase::Defeat
        } else {
            Phase::RoundExchange { weapon }
        }
    }
}

/// Resolves one fight with the player's current inventory.
///
/// Gold and health are not written anywhere; the caller applies
/// `gold_awarded` and `final_player_health` from the report.
pub fn resolve_combat(encounter: Encounter, inventory: &Inventory, player_health: i32) -> CombatReport {
    let monster = encounter.monster();
    let loadout = Loadout::from_inventory(inventory);
    info!(
        target: "quest_core.combat",
        monster = monster.name,
        weapon = loadout.weapon.map(|w| w.name),
        armor = loadout.armor.map(|a| a.name),
        player_health,
        "battle start"
    );

    let mut combat = Combat {
        monster,
        monster_health: monster.max_health,
        player_health: player_health.clamp(MIN_HEALTH, MAX_HEALTH),
        loadout,
        round: 0,
        events: Vec::new(),
    };

    let mut phase = Phase::AwaitingWeaponCheck;
    let outcome = loop {
        phase = match phase {
            Phase::AwaitingWeaponCheck => combat.check_weapon(),
            Phase::RoundExchange { weapon } => combat.exchange(weapon),
            Phase::Victory => break Outcome::Victory,
            Phase::Defeat => break Outcome::Defeat,
        };
    };

    let victory = outcome == Outcome::Victory;
    let gold_awarded = if victory { encounter.reward() } else { 0 };
    info!(
        target: "quest_core.combat",
        monster = monster.name,
        ?outcome,
        gold_awarded,
        rounds = combat.round,
        player_health = combat.player_health,
        "battle over"
    );

    CombatReport {
        encounter,
        monster,
        weapon: loadout.weapon,
        armor: loadout.armor,
        outcome,
        gold_awarded,
        legendary_treasure: victory && encounter.is_boss(),
        final_player_health: combat.player_health,
        rounds: combat.round,
        events: combat.events,
    }
}
