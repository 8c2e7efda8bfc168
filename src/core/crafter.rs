//! # Crafter
//!
//! The actor whose inventory and knowledge the crafting screen queries.
//! `Crafter` is the seam to the rest of the game: inventory snapshots,
//! recipe knowledge, skill levels and the container check all come through it.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::core::catalog::Catalog;
use crate::core::recipe::Recipe;
use crate::core::stockpile::{Holding, Stockpile};

/// Quality an item needs to hold a liquid result.
pub const CONTAINER_QUALITY: &str = "CONTAIN";

pub trait Crafter {
    /// Fresh snapshot of everything usable for crafting.
    fn crafting_inventory(&self, catalog: &Catalog) -> Stockpile;

    /// True if the recipe is memorized.
    fn knows_recipe(&self, recipe: &Recipe) -> bool;

    /// Position in `inventory` of a book or note teaching the recipe.
    fn partial_recipe(&self, recipe: &Recipe, inventory: &Stockpile) -> Option<usize> {
        inventory.recipe_source(&recipe.id)
    }

    fn skill_level(&self, skill: &str) -> u32;

    /// Checks there is somewhere to put `quantity` results.
    /// `Err` carries the message to show the player.
    fn check_eligible_containers(
        &self,
        catalog: &Catalog,
        recipe: &Recipe,
        quantity: u32,
        inventory: &Stockpile,
    ) -> Result<(), String>;
}

/// Player profile as loaded from the catalog file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Player {
    #[serde(default)]
    pub known_recipes: BTreeSet<String>,
    #[serde(default)]
    pub skills: BTreeMap<String, u32>,
    #[serde(default)]
    pub inventory: Vec<Holding>,
}

impl Crafter for Player {
    fn crafting_inventory(&self, catalog: &Catalog) -> Stockpile {
        let stock = Stockpile::gather(catalog, &self.inventory);
        debug!("Crafting inventory: {} stacks", stock.entries().len());
        stock
    }

    fn knows_recipe(&self, recipe: &Recipe) -> bool {
        self.known_recipes.contains(&recipe.id)
    }

    fn skill_level(&self, skill: &str) -> u32 {
        self.skills.get(skill).copied().unwrap_or(0)
    }

    fn check_eligible_containers(
        &self,
        catalog: &Catalog,
        recipe: &Recipe,
        quantity: u32,
        inventory: &Stockpile,
    ) -> Result<(), String> {
        let needs_container = catalog.item(&recipe.result).is_some_and(|i| i.liquid);
        if !needs_container {
            return Ok(());
        }
        let wanted = i32::try_from(quantity.max(1)).unwrap_or(i32::MAX);
        if inventory.has_quality(CONTAINER_QUALITY, 1, wanted) {
            Ok(())
        } else {
            Err(format!(
                "You don't have anything to store {} in!",
                catalog.item_name(&recipe.result)
            ))
        }
    }
}
