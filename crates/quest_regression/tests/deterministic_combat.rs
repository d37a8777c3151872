use quest_core::{CombatEvent, Encounter, ItemKind, Outcome, MAX_HEALTH, MIN_HEALTH};
use quest_regression::{all_loadouts, report_digest, scripted_fight, DEFAULT_HEALTH};

const ENCOUNTERS: [Encounter; 2] = [Encounter::Forest, Encounter::Dragon];

#[test]
fn identical_inputs_match_across_every_loadout() {
    for loadout in all_loadouts() {
        for encounter in ENCOUNTERS {
            for health in [1, 15, 50, DEFAULT_HEALTH] {
                let baseline = scripted_fight(encounter, &loadout, health);
                let repeat = scripted_fight(encounter, &loadout, health);
                assert_eq!(baseline, repeat, "{loadout:?} vs {encounter:?} at {health}");
            }
        }
    }
}

#[test]
fn final_health_stays_in_bounds() {
    for loadout in all_loadouts() {
        for encounter in ENCOUNTERS {
            for health in (MIN_HEALTH..=MAX_HEALTH).step_by(7) {
                let report = scripted_fight(encounter, &loadout, health);
                assert!(
                    (MIN_HEALTH..=MAX_HEALTH).contains(&report.final_player_health),
                    "{loadout:?} vs {encounter:?} at {health}: {}",
                    report.final_player_health
                );
            }
        }
    }
}

#[test]
fn gold_only_follows_victory() {
    for loadout in all_loadouts() {
        for encounter in ENCOUNTERS {
            let report = scripted_fight(encounter, &loadout, DEFAULT_HEALTH);
            match report.outcome {
                Outcome::Victory => {
                    assert_eq!(report.gold_awarded, encounter.reward());
                    assert_eq!(report.legendary_treasure, encounter.is_boss());
                }
                Outcome::Defeat => {
                    assert_eq!(report.gold_awarded, 0);
                    assert!(!report.legendary_treasure);
                }
            }
        }
    }
}

#[test]
fn unarmed_loadouts_always_retreat() {
    let unarmed = all_loadouts().into_iter().filter(|loadout| {
        !loadout
            .iter()
            .any(|kind| matches!(kind, ItemKind::Sword | ItemKind::SteelSword))
    });
    for loadout in unarmed {
        for encounter in ENCOUNTERS {
            let report = scripted_fight(encounter, &loadout, DEFAULT_HEALTH);
            assert_eq!(report.outcome, Outcome::Defeat);
            assert_eq!(report.final_player_health, DEFAULT_HEALTH - 20);
            assert_eq!(report.rounds, 0);
            assert!(matches!(report.events[..], [CombatEvent::Retreat { .. }]));
        }
    }
}

#[test]
fn monster_hits_never_drop_below_one() {
    for loadout in all_loadouts() {
        let report = scripted_fight(Encounter::Forest, &loadout, DEFAULT_HEALTH);
        for event in &report.events {
            if let CombatEvent::MonsterAttack { damage, .. } = event {
                assert!(*damage >= 1);
            }
        }
    }
}

#[test]
fn best_gear_beats_the_dragon() {
    let report = scripted_fight(
        Encounter::Dragon,
        &[ItemKind::SteelSword, ItemKind::IronShield],
        DEFAULT_HEALTH,
    );
    assert_eq!(
        report_digest(&report),
        serde_json::json!({
            "outcome": "victory",
            "gold_awarded": 50,
            "legendary_treasure": true,
            "final_player_health": 80,
            "rounds": 3,
        })
    );
}

#[test]
fn weaker_duplicates_do_not_change_the_result() {
    let lean = scripted_fight(
        Encounter::Dragon,
        &[ItemKind::SteelSword, ItemKind::IronShield],
        DEFAULT_HEALTH,
    );
    let cluttered = scripted_fight(
        Encounter::Dragon,
        &[
            ItemKind::Sword,
            ItemKind::WoodenShield,
            ItemKind::SteelSword,
            ItemKind::HealthPotion,
            ItemKind::IronShield,
            ItemKind::Sword,
        ],
        DEFAULT_HEALTH,
    );
    assert_eq!(report_digest(&lean), report_digest(&cluttered));
    assert_eq!(lean.events, cluttered.events);
}
