//! The player's bag.
//!
//! Entries keep insertion order, which is also the order the menus show
//! them in. Buying the same item twice yields two independent entries.

use serde::Serialize;
use tracing::debug;

use crate::catalog::{Category, Item, ItemKind};
use crate::error::QuestError;
use crate::health::HealthDelta;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Inventory {
    entries: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: Item) {
        debug!(target: "quest_core.inventory", item = item.name, slot = self.entries.len(), "item added");
        self.entries.push(item);
    }

    pub fn items(&self) -> &[Item] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes the entry at `index`, shifting later entries down.
    pub fn remove(&mut self, index: usize) -> Result<Item, QuestError> {
        self.check_index(index)?;
        Ok(self.entries.remove(index))
    }

    /// Entries of one category, in inventory order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Item> + '_ {
        self.entries.iter().filter(move |item| item.category == category)
    }

    pub fn has_category(&self, category: Category) -> bool {
        self.by_category(category).next().is_some()
    }

    /// Uses the entry at `index`.
    ///
    /// A potion is removed and its healing returned as a positive delta.
    /// Weapons and armor stay in the bag and yield a zero delta: gear is
    /// always picked automatically when a fight starts.
    pub fn consume(&mut self, index: usize) -> Result<HealthDelta, QuestError> {
        self.check_index(index)?;
        let item = self.entries[index];
        match item.category {
            Category::Potion => {
                self.entries.remove(index);
                debug!(target: "quest_core.inventory", item = item.name, index, "potion consumed");
                Ok(item.magnitude as HealthDelta)
            }
            Category::Weapon | Category::Armor => Ok(0),
        }
    }

    fn check_index(&self, index: usize) -> Result<(), QuestError> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(QuestError::InvalidIndex {
                index,
                len: self.entries.len(),
            })
        }
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<ItemKind> for Inventory {
    fn from_iter<T: IntoIterator<Item = ItemKind>>(iter: T) -> Self {
        iter.into_iter().map(ItemKind::template).collect()
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
