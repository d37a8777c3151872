//! Menu text, screens and choice parsing.

use std::io::{self, Write};

use quest_core::{
    CombatEvent, CombatReport, Encounter, HealthEvent, ItemKind, Location, PlayerState, CATALOG,
};
use thiserror::Error;

pub const BANNER_WIDTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Travel(Location),
    /// Buy from the shop at the current location.
    Shop,
    FightDragon,
    Status,
    UseItem,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub action: Action,
    pub label: String,
}

impl MenuEntry {
    fn new(action: Action, label: impl Into<String>) -> Self {
        Self {
            action,
            label: label.into(),
        }
    }
}

/// Options offered at `location`, in the order they are numbered.
pub fn menu(location: Location) -> Vec<MenuEntry> {
    let mut entries = match location {
        Location::Village => vec![
            MenuEntry::new(Action::Travel(Location::Blacksmith), "Go to blacksmith"),
            MenuEntry::new(Action::Travel(Location::Market), "Go to market"),
            MenuEntry::new(Action::Travel(Location::Forest), "Enter forest"),
            MenuEntry::new(Action::Travel(Location::DragonLair), "Travel to dragon's lair"),
        ],
        Location::Blacksmith => {
            let mut entries: Vec<_> = location
                .stock()
                .iter()
                .map(|kind| {
                    let item = kind.template();
                    let label = format!("Buy {} ({} gold)", item.name.to_lowercase(), item.cost);
                    MenuEntry::new(Action::Shop, label)
                })
                .collect();
            entries.push(MenuEntry::new(Action::Travel(Location::Village), "Return to village"));
            entries
        }
        Location::Market => vec![
            MenuEntry::new(
                Action::Shop,
                format!("Buy potion ({} gold)", ItemKind::HealthPotion.template().cost),
            ),
            MenuEntry::new(Action::Travel(Location::Village), "Return to village"),
        ],
        Location::Forest => vec![MenuEntry::new(
            Action::Travel(Location::Village),
            "Return to village",
        )],
        Location::DragonLair => vec![
            MenuEntry::new(Action::FightDragon, "Fight the dragon"),
            MenuEntry::new(Action::Travel(Location::Village), "Return to village"),
        ],
    };
    entries.extend([
        MenuEntry::new(Action::Status, "Check status"),
        MenuEntry::new(Action::UseItem, "Use item"),
        MenuEntry::new(Action::Help, "Help"),
        MenuEntry::new(Action::Quit, "Quit game"),
    ]);
    entries
}

fn describe(location: Location) -> &'static str {
    match location {
        Location::Village => "You're in a bustling village. The blacksmith and market are nearby.",
        Location::Blacksmith => {
            "The heat from the forge fills the air. Weapons and armor line the walls."
        }
        Location::Market => {
            "Merchants sell their wares from colorful stalls. A potion seller catches your eye."
        }
        Location::Forest => {
            "The forest is dark and foreboding. You hear strange noises all around you."
        }
        Location::DragonLair => {
            "🐉 The dragon's lair! Smoke and heat fill the cavern. The mighty dragon awaits!"
        }
    }
}

/// Line printed after a successful move from `from` to `to`.
pub fn arrival_text(from: Location, to: Location) -> &'static str {
    match (from, to) {
        (_, Location::Blacksmith) => "You enter the blacksmith's shop.",
        (_, Location::Market) => "You enter the market.",
        (_, Location::Forest) => "You venture into the forest...",
        (_, Location::DragonLair) => {
            "🐉 You approach the dragon's lair...\nThe ground trembles beneath your feet."
        }
        (Location::Forest, Location::Village) => "You hurry back to the safety of the village.",
        (Location::DragonLair, Location::Village) => "You retreat to the village to prepare better.",
        (_, Location::Village) => "You return to the village center.",
    }
}

pub fn show_location(out: &mut impl Write, location: Location, entries: &[MenuEntry]) -> io::Result<()> {
    writeln!(out, "\n=== {} ===", location.to_string().to_uppercase())?;
    writeln!(out, "{}", describe(location))?;
    writeln!(out, "\nWhat would you like to do?")?;
    for (number, entry) in entries.iter().enumerate() {
        writeln!(out, "{}: {}", number + 1, entry.label)?;
    }
    Ok(())
}

pub fn show_status(out: &mut impl Write, player: &PlayerState) -> io::Result<()> {
    writeln!(out, "\n=== {}'s Status ===", player.name)?;
    writeln!(out, "❤️  Health: {}", player.health())?;
    writeln!(out, "💰 Gold: {}", player.gold())?;
    writeln!(out, "📍 Location: {}", player.location())?;
    writeln!(out, "🎒 Inventory: ")?;
    if player.inventory().is_empty() {
        writeln!(out, "   Nothing in inventory")?;
    }
    for (number, item) in player.inventory().items().iter().enumerate() {
        writeln!(out, "   {}. {} - {}", number + 1, item.name, item.description)?;
    }
    Ok(())
}

pub fn show_help(out: &mut impl Write) -> io::Result<()> {
    let forest = Encounter::Forest.monster();
    let dragon = Encounter::Dragon.monster();

    writeln!(out, "\n=== AVAILABLE COMMANDS ===")?;
    writeln!(out, "\n📍 Movement Commands:")?;
    writeln!(out, "- In the village, choose numbered options to travel to different locations")?;
    writeln!(out, "- Visit the blacksmith to buy weapons and armor")?;
    writeln!(out, "- Visit the market to buy healing potions")?;
    writeln!(out, "- Enter the forest to fight monsters and earn gold")?;
    writeln!(out, "- Travel to the dragon's lair when you're ready for the final battle")?;

    writeln!(out, "\n⚔️  Battle Information:")?;
    writeln!(out, "- You need a weapon to win battles")?;
    writeln!(out, "- Better weapons deal more damage")?;
    writeln!(out, "- Armor reduces incoming damage")?;
    writeln!(
        out,
        "- Regular monsters: {} damage, {} health",
        forest.attack_damage, forest.max_health
    )?;
    writeln!(
        out,
        "- Dragon: {} damage, {} health (requires steel sword and armor!)",
        dragon.attack_damage, dragon.max_health
    )?;

    writeln!(out, "\n🎒 Item Usage:")?;
    writeln!(
        out,
        "- Health potions restore {} health",
        ItemKind::HealthPotion.template().magnitude
    )?;
    writeln!(out, "- The game uses your best weapon and armor automatically")?;

    writeln!(out, "\n💰 Shopping:")?;
    for item in CATALOG {
        writeln!(
            out,
            "- {}: {} gold ({} {})",
            item.name,
            item.cost,
            item.magnitude,
            effect_word(item.category)
        )?;
    }

    writeln!(out, "\n🎯 Tips:")?;
    writeln!(out, "- Fight monsters in the forest to earn gold")?;
    writeln!(out, "- Keep healing potions for emergencies")?;
    writeln!(out, "- You need the steel sword AND armor to face the dragon")?;
    writeln!(out, "- Health can't go above 100")?;
    Ok(())
}

fn effect_word(category: quest_core::Category) -> &'static str {
    match category {
        quest_core::Category::Weapon => "damage",
        quest_core::Category::Armor => "protection",
        quest_core::Category::Potion => "healing",
    }
}

pub fn show_inventory_choices(out: &mut impl Write, player: &PlayerState) -> io::Result<()> {
    writeln!(out, "\n=== Inventory ===")?;
    for (number, item) in player.inventory().items().iter().enumerate() {
        writeln!(out, "{}. {}", number + 1, item.name)?;
    }
    Ok(())
}

pub fn show_health_change(
    out: &mut impl Write,
    health: i32,
    event: Option<HealthEvent>,
) -> io::Result<()> {
    match event {
        Some(HealthEvent::FullHealth) => writeln!(out, "You're at full health!")?,
        Some(HealthEvent::GraveDanger) => writeln!(out, "You're gravely wounded!")?,
        None => {}
    }
    writeln!(out, "Health is now: {health}")
}

/// Narrates a resolved fight blow by blow.
pub fn show_combat(out: &mut impl Write, report: &CombatReport) -> io::Result<()> {
    let monster = report.monster.name;
    writeln!(out, "\n⚔️  BATTLE START ⚔️")?;
    writeln!(out, "You face the {monster}!")?;
    writeln!(out, "{monster} Health: {}", report.monster.max_health)?;

    if let Some(weapon) = report.weapon {
        writeln!(out, "\n🗡️  Equipped Weapon: {} (Damage: {})", weapon.name, weapon.magnitude)?;
        match report.armor {
            Some(armor) => writeln!(
                out,
                "🛡️  Equipped Armor: {} (Protection: {})",
                armor.name, armor.magnitude
            )?,
            None => writeln!(out, "🛡️  No armor equipped!")?,
        }
    }

    for event in &report.events {
        match *event {
            CombatEvent::Retreat {
                player_health,
                health_event,
                ..
            } => {
                writeln!(out, "\n❌ Without a weapon, you must retreat!")?;
                show_health_change(out, player_health, health_event)?;
            }
            CombatEvent::PlayerAttack {
                damage,
                monster_health,
                ..
            } => {
                let weapon = report.weapon.map_or("weapon", |w| w.name);
                writeln!(out, "\n--- Your Turn ---")?;
                writeln!(out, "You attack with your {weapon}!")?;
                writeln!(out, "You deal {damage} damage!")?;
                writeln!(out, "{monster} Health: {monster_health}")?;
            }
            CombatEvent::MonsterAttack {
                blocked,
                damage,
                player_health,
                health_event,
                ..
            } => {
                writeln!(out, "\n--- {monster}'s Turn ---")?;
                if let Some(armor) = report.armor {
                    writeln!(out, "🛡️  Your {} blocks {blocked} damage!", armor.name)?;
                }
                writeln!(out, "The {monster} attacks!")?;
                writeln!(out, "You take {damage} damage!")?;
                show_health_change(out, player_health, health_event)?;
            }
        }
    }

    if report.is_victory() {
        writeln!(out, "\n🎉 Victory! The {monster} is defeated!")?;
        if report.legendary_treasure {
            writeln!(out, "💰 You found {} gold and legendary treasure!", report.gold_awarded)?;
        } else {
            writeln!(out, "💰 You found {} gold!", report.gold_awarded)?;
        }
    } else if report.rounds > 0 {
        writeln!(out, "\n💀 You have been defeated!")?;
    }
    Ok(())
}

pub fn banner(out: &mut impl Write, title: &str) -> io::Result<()> {
    let rule = "=".repeat(BANNER_WIDTH);
    writeln!(out, "\n{rule}")?;
    writeln!(out, "{title}")?;
    writeln!(out, "{rule}")
}

/// Why a typed choice was rejected. The text is shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a number!")]
    Empty,
    #[error("That's not a number! Please enter a number.")]
    NotANumber,
    #[error("Please enter a number between 1 and {max}.")]
    OutOfRange { max: usize },
}

/// Reads a leading integer, ignoring anything after the digits
/// (`"2abc"` is 2, `"1.5"` is 1).
pub fn leading_number(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let digits_start = usize::from(trimmed.starts_with(['+', '-']));
    let digits_len = trimmed[digits_start..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    trimmed[..digits_start + digits_len].parse().ok()
}

/// Parses a 1-based menu choice in `1..=max`.
pub fn parse_choice(input: &str, max: usize) -> Result<usize, InputError> {
    if input.trim().is_empty() {
        return Err(InputError::Empty);
    }
    let number = leading_number(input).ok_or(InputError::NotANumber)?;
    match usize::try_from(number) {
        Ok(choice) if (1..=max).contains(&choice) => Ok(choice),
        _ => Err(InputError::OutOfRange { max }),
    }
}
