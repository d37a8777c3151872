//! Helpers for deterministic regression tests.

use quest_core::{resolve_combat, CombatReport, Encounter, Inventory, ItemKind, MAX_HEALTH};
use serde_json::json;

pub const DEFAULT_HEALTH: i32 = MAX_HEALTH;

pub fn scripted_fight(encounter: Encounter, loadout: &[ItemKind], health: i32) -> CombatReport {
    let inventory: Inventory = loadout.iter().copied().collect();
    resolve_combat(encounter, &inventory, health)
}

/// The fields a caller acts on, without the blow-by-blow trace.
pub fn report_digest(report: &CombatReport) -> serde_json::Value {
    json!({
        "outcome": report.outcome,
        "gold_awarded": report.gold_awarded,
        "legendary_treasure": report.legendary_treasure,
        "final_player_health": report.final_player_health,
        "rounds": report.rounds,
    })
}

/// Every subset of the catalog, each in catalog order. 32 loadouts.
pub fn all_loadouts() -> Vec<Vec<ItemKind>> {
    let kinds = ItemKind::ALL;
    (0..1u32 << kinds.len())
        .map(|mask| {
            kinds
                .iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1u32 << bit) != 0)
                .map(|(_, kind)| *kind)
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fight_is_deterministic() {
        let loadout = [ItemKind::Sword, ItemKind::WoodenShield];
        let a = report_digest(&scripted_fight(Encounter::Dragon, &loadout, DEFAULT_HEALTH));
        let b = report_digest(&scripted_fight(Encounter::Dragon, &loadout, DEFAULT_HEALTH));
        assert_eq!(a, b);
    }

    #[test]
    fn loadouts_cover_every_subset() {
        let loadouts = all_loadouts();
        assert_eq!(loadouts.len(), 32);
        assert!(loadouts[0].is_empty());
        assert_eq!(loadouts[31].len(), 5);
    }
}
