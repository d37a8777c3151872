use quest_core::{Encounter, ItemKind};
use quest_regression::{scripted_fight, DEFAULT_HEALTH};

#[test]
fn dragon_victory() {
    let report = scripted_fight(
        Encounter::Dragon,
        &[ItemKind::SteelSword, ItemKind::IronShield],
        DEFAULT_HEALTH,
    );
    insta::assert_json_snapshot!("dragon_victory", report);
}

#[test]
fn dragon_defeat() {
    let report = scripted_fight(Encounter::Dragon, &[ItemKind::Sword], 30);
    insta::assert_json_snapshot!("dragon_defeat", report);
}

#[test]
fn forest_retreat() {
    let report = scripted_fight(Encounter::Forest, &[], DEFAULT_HEALTH);
    insta::assert_json_snapshot!("forest_retreat", report);
}
