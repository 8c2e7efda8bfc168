//! # Catalog Files
//!
//! Loads a workshop (categories, catalog, player) from a single TOML or JSON
//! file. The format is picked from the file extension.
//!
//! ```toml
//! [[categories]]
//! id = "CC_OTHER"
//! subcategories = ["CSC_ALL", "CSC_OTHER_TOOLS", "CSC_OTHER_OTHER"]
//!
//! [items.hammer]
//! name = "hammer"
//! qualities = { HAMMER = 1 }
//!
//! [[recipes]]
//! id = "make_table"
//! result = "table"
//! category = "CC_OTHER"
//! components = [[{ item = "nail", count = 4 }]]
//!
//! [player]
//! known_recipes = ["make_table"]
//! inventory = [{ item = "nail", count = 10 }]
//! ```
//!
//! Contents are taken as given; nothing is cross-checked.

use log::info;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::catalog::{Catalog, ItemType, QualityType, SkillType};
use crate::core::category::CategoryIndex;
use crate::core::crafter::Player;
use crate::core::recipe::Recipe;
use crate::core::workshop::Workshop;

#[derive(Debug)]
pub enum DataError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Json(serde_json::Error),
    UnsupportedFormat(PathBuf),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Io(e) => write!(f, "data I/O error: {e}"),
            DataError::Toml(e) => write!(f, "data parse error (toml): {e}"),
            DataError::Json(e) => write!(f, "data parse error (json): {e}"),
            DataError::UnsupportedFormat(path) => {
                write!(f, "unsupported data file (want .toml or .json): {}", path.display())
            }
        }
    }
}

impl std::error::Error for DataError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Format::Toml),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CategoryEntry {
    pub id: String,
    #[serde(default)]
    pub subcategories: Vec<String>,
}

/// On-disk shape of a workshop file.
#[derive(Debug, Default, Deserialize)]
pub struct DataFile {
    #[serde(default)]
    pub categories: Vec<CategoryEntry>,
    #[serde(default)]
    pub items: BTreeMap<String, ItemType>,
    #[serde(default)]
    pub qualities: BTreeMap<String, QualityType>,
    #[serde(default)]
    pub skills: BTreeMap<String, SkillType>,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    #[serde(default)]
    pub player: Player,
}

impl DataFile {
    pub fn parse(text: &str, format: Format) -> Result<Self, DataError> {
        match format {
            Format::Toml => toml::from_str(text).map_err(DataError::Toml),
            Format::Json => serde_json::from_str(text).map_err(DataError::Json),
        }
    }

    /// Register categories in file order and assemble the workshop.
    pub fn into_workshop(self) -> Workshop {
        let mut categories = CategoryIndex::new();
        for entry in self.categories {
            categories.register_category(&entry.id, entry.subcategories);
        }
        let catalog = Catalog {
            items: self.items,
            qualities: self.qualities,
            skills: self.skills,
            recipes: self.recipes,
        };
        Workshop::new(catalog, categories, Box::new(self.player))
    }
}

/// Read and parse a workshop file.
pub fn load_workshop(path: &Path) -> Result<Workshop, DataError> {
    let format =
        Format::from_path(path).ok_or_else(|| DataError::UnsupportedFormat(path.to_path_buf()))?;
    let text = fs::read_to_string(path).map_err(DataError::Io)?;
    let data = DataFile::parse(&text, format)?;
    info!(
        "Loaded {} categories, {} recipes, {} items from {}",
        data.categories.len(),
        data.recipes.len(),
        data.items.len(),
        path.display()
    );
    Ok(data.into_workshop())
}
