//! Interactive game loop.
//!
//! Generic over the input and output streams so whole sessions can be
//! scripted in tests.

use std::io::{BufRead, Write};

use anyhow::Result;
use quest_core::{Category, Encounter, ItemKind, Location, PlayerConfig, PlayerState, QuestError};
use tracing::info;

use crate::menu::{self, Action};

/// How a session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    DragonSlain,
    Died,
    Quit,
}

pub struct Session<R, W> {
    input: R,
    out: W,
    player: PlayerState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Greets the player, asking for a name when none is given.
    pub fn start(mut input: R, mut out: W, config: &PlayerConfig, name: Option<String>) -> Result<Self> {
        menu::banner(&mut out, "       The Dragon's Quest        ")?;
        writeln!(out, "\nYour quest: Defeat the dragon in the mountains!")?;

        let name = match name.or_else(|| config.name.clone()) {
            Some(name) => name,
            None => {
                write!(out, "\nWhat is your name, brave adventurer? ")?;
                out.flush()?;
                read_line(&mut input)?
                    .map(|line| line.trim().to_string())
                    .filter(|line| !line.is_empty())
                    .unwrap_or_else(|| "Adventurer".to_string())
            }
        };

        let player = PlayerState::new(name, config);
        writeln!(out, "\nWelcome, {}!", player.name)?;
        writeln!(out, "You start with {} gold.", player.gold())?;
        writeln!(out, "\n💡 Tip: Type 'help' anytime to see available commands!")?;
        info!(target: "quest_cli", player = %player.name, "session started");

        Ok(Self { input, out, player })
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    pub fn run(&mut self) -> Result<GameEnd> {
        let end = self.play()?;
        menu::banner(&mut self.out, "Thanks for playing The Dragon's Quest!")?;
        info!(target: "quest_cli", ?end, "session over");
        Ok(end)
    }

    fn play(&mut self) -> Result<GameEnd> {
        loop {
            let entries = menu::menu(self.player.location());
            menu::show_location(&mut self.out, self.player.location(), &entries)?;

            let action = loop {
                let Some(line) = self.prompt("\nEnter choice (number): ")? else {
                    return Ok(GameEnd::Quit);
                };
                if line.trim().eq_ignore_ascii_case("help") {
                    break Action::Help;
                }
                match menu::parse_choice(&line, entries.len()) {
                    Ok(choice) => break entries[choice - 1].action,
                    Err(err) => {
                        writeln!(self.out, "\nError: {err}")?;
                        writeln!(self.out, "Please try again!")?;
                    }
                }
            };

            if let Some(end) = self.perform(action)? {
                return Ok(end);
            }

            if !self.player.is_alive() {
                menu::banner(&mut self.out, "💀 GAME OVER 💀")?;
                writeln!(self.out, "\nYour health reached 0!")?;
                writeln!(self.out, "The adventure ends here for {}...", self.player.name)?;
                writeln!(
                    self.out,
                    "\n💡 Tip: Keep healing potions and use them before your health gets too low!"
                )?;
                return Ok(GameEnd::Died);
            }
        }
    }

    fn perform(&mut self, action: Action) -> Result<Option<GameEnd>> {
        match action {
            Action::Travel(destination) => self.travel(destination)?,
            Action::Shop => match self.player.location() {
                Location::Blacksmith => self.blacksmith()?,
                _ => self.market()?,
            },
            Action::FightDragon => {
                if self.dragon_battle()? {
                    return Ok(Some(GameEnd::DragonSlain));
                }
            }
            Action::Status => menu::show_status(&mut self.out, &self.player)?,
            Action::UseItem => self.use_item()?,
            Action::Help => menu::show_help(&mut self.out)?,
            Action::Quit => {
                writeln!(self.out, "\nThanks for playing!")?;
                return Ok(Some(GameEnd::Quit));
            }
        }
        Ok(None)
    }

    fn travel(&mut self, destination: Location) -> Result<()> {
        let from = self.player.location();
        match self.player.travel(destination) {
            Ok(()) => {
                writeln!(self.out, "\n{}", menu::arrival_text(from, destination))?;
                if destination == Location::Forest {
                    writeln!(self.out, "\nA monster appears!")?;
                    let report = self.player.fight(Encounter::Forest);
                    menu::show_combat(&mut self.out, &report)?;
                }
            }
            Err(QuestError::NotReady) => {
                let steel = ItemKind::SteelSword.template();
                let wooden = ItemKind::WoodenShield.template();
                let iron = ItemKind::IronShield.template();
                writeln!(self.out, "\n⚠️  WARNING: You are not prepared for the dragon!")?;
                writeln!(self.out, "You need:")?;
                writeln!(self.out, "- {} ({} gold at blacksmith)", steel.name, steel.cost)?;
                writeln!(
                    self.out,
                    "- Any armor ({}: {} gold, {}: {} gold)",
                    wooden.name, wooden.cost, iron.name, iron.cost
                )?;
                writeln!(self.out, "\nThe path to the dragon's lair remains blocked.")?;
            }
            Err(err) => writeln!(self.out, "\n{err}")?,
        }
        Ok(())
    }

    fn blacksmith(&mut self) -> Result<()> {
        let stock = Location::Blacksmith.stock();
        writeln!(self.out, "\n=== BLACKSMITH SHOP ===")?;
        writeln!(self.out, "Your gold: {}", self.player.gold())?;
        writeln!(self.out, "\nAvailable items:")?;
        for (number, kind) in stock.iter().enumerate() {
            let item = kind.template();
            writeln!(
                self.out,
                "{}. {} - {} gold ({})",
                number + 1,
                item.name,
                item.cost,
                item.description
            )?;
        }

        let prompt = format!("\nWhat would you like to buy? (1-{} or 'cancel'): ", stock.len());
        let Some(line) = self.prompt(&prompt)? else {
            return Ok(());
        };
        if is_cancel(&line) {
            return Ok(());
        }
        match menu::parse_choice(&line, stock.len()) {
            Ok(choice) => self.buy(
                stock[choice - 1],
                "Blacksmith: 'A fine choice for a brave adventurer!'",
                "Blacksmith: 'Come back when you have more gold!'",
            ),
            Err(_) => {
                writeln!(self.out, "\nInvalid choice!")?;
                Ok(())
            }
        }
    }

    fn market(&mut self) -> Result<()> {
        self.buy(
            ItemKind::HealthPotion,
            "Merchant: 'This potion will heal your wounds!'",
            "Merchant: 'No gold, no potion!'",
        )
    }

    fn buy(&mut self, kind: ItemKind, accepted: &str, refused: &str) -> Result<()> {
        match self.player.purchase(kind) {
            Ok(item) => {
                writeln!(self.out, "\n{accepted}")?;
                writeln!(self.out, "You bought a {} for {} gold!", item.name, item.cost)?;
                writeln!(self.out, "Gold remaining: {}", self.player.gold())?;
            }
            Err(QuestError::InsufficientGold { needed }) => {
                writeln!(self.out, "\n{refused}")?;
                writeln!(self.out, "You need {needed} more gold.")?;
            }
            Err(err) => writeln!(self.out, "\n{err}")?,
        }
        Ok(())
    }

    fn use_item(&mut self) -> Result<()> {
        if self.player.inventory().is_empty() {
            writeln!(self.out, "\nYou have no items!")?;
            return Ok(());
        }
        menu::show_inventory_choices(&mut self.out, &self.player)?;

        let Some(line) = self.prompt("Use which item? (number or 'cancel'): ")? else {
            return Ok(());
        };
        if is_cancel(&line) {
            return Ok(());
        }
        let index = menu::leading_number(&line)
            .and_then(|number| number.checked_sub(1))
            .and_then(|index| usize::try_from(index).ok())
            .unwrap_or(usize::MAX);
        match self.player.use_item(index) {
            Ok(used) => match used.item.category {
                Category::Potion => {
                    writeln!(self.out, "\nYou drink the {}.", used.item.name)?;
                    menu::show_health_change(&mut self.out, used.health, used.health_event)?;
                    writeln!(self.out, "Health restored to: {}", used.health)?;
                }
                Category::Weapon => {
                    writeln!(self.out, "\nYou ready your {} for battle.", used.item.name)?;
                }
                Category::Armor => {
                    writeln!(self.out, "\nYou equip your {} for protection.", used.item.name)?;
                }
            },
            Err(_) => writeln!(self.out, "\nInvalid item number!")?,
        }
        Ok(())
    }

    /// Returns true when the dragon falls.
    fn dragon_battle(&mut self) -> Result<bool> {
        menu::banner(&mut self.out, "🐉 THE FINAL BATTLE 🐉")?;
        writeln!(self.out, "\nThe dragon roars, shaking the very mountains!")?;
        writeln!(self.out, "This is the moment you've been preparing for.")?;

        let report = self.player.fight(Encounter::Dragon);
        menu::show_combat(&mut self.out, &report)?;

        if !report.is_victory() {
            writeln!(self.out, "\nYou have been defeated by the dragon...")?;
            writeln!(self.out, "Perhaps you need better equipment or more health?")?;
            return Ok(false);
        }

        menu::banner(&mut self.out, "🎉 VICTORY! 🎉")?;
        writeln!(self.out, "\nThe mighty dragon falls! You have saved the realm!")?;
        writeln!(self.out, "\n--- FINAL STATS ---")?;
        writeln!(self.out, "Hero: {}", self.player.name)?;
        writeln!(self.out, "Final Health: {}", self.player.health())?;
        writeln!(self.out, "Final Gold: {}", self.player.gold())?;
        writeln!(self.out, "\nInventory:")?;
        for item in self.player.inventory() {
            writeln!(self.out, "- {}", item.name)?;
        }
        writeln!(self.out, "\nYou are a true hero!")?;
        Ok(true)
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        read_line(&mut self.input)
    }
}

/// `None` at end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn is_cancel(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("cancel")
}
