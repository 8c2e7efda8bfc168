//! # Catalog
//!
//! Static dictionaries the crafting screen looks things up in: item types,
//! tool qualities, skills and the recipe list itself. Loaded once, never
//! mutated during a selection session.
//!
//! Recipes are addressed by their position in `recipes` (`RecipeRef`), so the
//! candidate list can refer to them without borrowing the catalog.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::recipe::Recipe;

/// Index of a recipe inside `Catalog::recipes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecipeRef(pub usize);

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ItemType {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Quality id → level provided by this item.
    #[serde(default)]
    pub qualities: BTreeMap<String, i32>,
    /// Liquids need a container to be crafted into.
    #[serde(default)]
    pub liquid: bool,
    /// Recipe ids this item (a book) teaches.
    #[serde(default)]
    pub teaches: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QualityType {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SkillType {
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub items: BTreeMap<String, ItemType>,
    pub qualities: BTreeMap<String, QualityType>,
    pub skills: BTreeMap<String, SkillType>,
    pub recipes: Vec<Recipe>,
}

impl Catalog {
    pub fn recipe(&self, recipe: RecipeRef) -> &Recipe {
        &self.recipes[recipe.0]
    }

    /// Every recipe, in load order.
    pub fn all(&self) -> impl Iterator<Item = (RecipeRef, &Recipe)> {
        self.recipes
            .iter()
            .enumerate()
            .map(|(i, r)| (RecipeRef(i), r))
    }

    /// Recipes whose category tag equals `category`.
    pub fn in_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = (RecipeRef, &'a Recipe)> + 'a {
        self.all().filter(move |(_, r)| r.category == category)
    }

    pub fn find(&self, id: &str) -> Option<RecipeRef> {
        self.recipes.iter().position(|r| r.id == id).map(RecipeRef)
    }

    pub fn item(&self, id: &str) -> Option<&ItemType> {
        self.items.get(id)
    }

    /// Display name of an item type, or the raw id if unknown.
    pub fn item_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.items.get(id).map(|i| i.name.as_str()).unwrap_or(id)
    }

    pub fn quality_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.qualities.get(id).map(|q| q.name.as_str()).unwrap_or(id)
    }

    pub fn skill_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.skills.get(id).map(|s| s.name.as_str()).unwrap_or(id)
    }

    /// Description lines for the result pane: description then provided qualities.
    pub fn item_info(&self, id: &str) -> Vec<String> {
        let Some(item) = self.items.get(id) else {
            return Vec::new();
        };
        let mut info = Vec::new();
        if !item.description.is_empty() {
            info.push(item.description.clone());
        }
        for (quality, level) in &item.qualities {
            info.push(format!(
                "Has level {} {} quality.",
                level,
                self.quality_name(quality)
            ));
        }
        if item.liquid {
            info.push("Must be stored in a container.".to_string());
        }
        info
    }
}
