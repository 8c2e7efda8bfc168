//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).
//!
//! `test_workshop()` is a small camp: two tabs (OTHER, FOOD), a player who
//! knows some recipes, can read one from a book, and carries enough stock to
//! craft a few of them.

use std::collections::BTreeMap;

use crate::core::catalog::{Catalog, ItemType, QualityType, SkillType};
use crate::core::category::CategoryIndex;
use crate::core::crafter::Player;
use crate::core::recipe::{Byproduct, ItemComp, QualityRequirement, Recipe, Requirements};
use crate::core::stockpile::Holding;
use crate::core::workshop::Workshop;

fn item(name: &str) -> ItemType {
    ItemType {
        name: name.to_string(),
        ..Default::default()
    }
}

fn comp(item: &str, count: i32) -> ItemComp {
    ItemComp {
        item_type: item.to_string(),
        count,
    }
}

fn recipe(id: &str, result: &str, category: &str, subcategory: &str, difficulty: i32) -> Recipe {
    Recipe {
        id: id.to_string(),
        result: result.to_string(),
        category: category.to_string(),
        subcategory: subcategory.to_string(),
        difficulty,
        time: 1000,
        ..Default::default()
    }
}

fn strings(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

pub fn test_catalog() -> Catalog {
    let mut catalog = Catalog::default();

    catalog.items.insert(
        "hammer".into(),
        ItemType {
            description: "A claw hammer.".into(),
            qualities: [("HAMMER".to_string(), 1)].into_iter().collect(),
            ..item("hammer")
        },
    );
    catalog.items.insert(
        "jar".into(),
        ItemType {
            qualities: [("CONTAIN".to_string(), 1)].into_iter().collect(),
            ..item("glass jar")
        },
    );
    catalog.items.insert(
        "cookbook".into(),
        ItemType {
            teaches: strings(&["make_stew"]),
            ..item("camp cookbook")
        },
    );
    catalog.items.insert(
        "stew".into(),
        ItemType {
            description: "A thick meat stew.".into(),
            liquid: true,
            ..item("stew")
        },
    );
    for (id, name) in [
        ("nail", "nail"),
        ("plank", "plank"),
        ("steel_chunk", "chunk of steel"),
        ("table", "table"),
        ("bandage", "bandage"),
        ("rag", "rag"),
        ("rope", "rope"),
        ("device", "strange device"),
        ("meat", "meat chunk"),
        ("water", "clean water"),
        ("pot", "cooking pot"),
        ("bone", "bone"),
    ] {
        catalog.items.insert(id.into(), item(name));
    }

    catalog.qualities.insert("HAMMER".into(), QualityType { name: "hammering".into() });
    catalog.qualities.insert("CONTAIN".into(), QualityType { name: "container".into() });
    catalog.skills.insert("cooking".into(), SkillType { name: "cooking".into() });
    catalog.skills.insert("survival".into(), SkillType { name: "survival".into() });

    catalog.recipes.push(Recipe {
        skill_used: Some("fabrication".into()),
        requirements: Requirements {
            components: vec![vec![comp("steel_chunk", 1)], vec![comp("plank", 1)]],
            ..Default::default()
        },
        ..recipe("make_hammer", "hammer", "CC_OTHER", "CSC_OTHER_TOOLS", 1)
    });
    catalog.recipes.push(Recipe {
        skill_used: Some("fabrication".into()),
        requirements: Requirements {
            components: vec![vec![comp("nail", 4)], vec![comp("plank", 2)]],
            qualities: vec![vec![QualityRequirement {
                quality_type: "HAMMER".into(),
                count: 1,
                level: 1,
            }]],
            ..Default::default()
        },
        ..recipe("make_table", "table", "CC_OTHER", "CSC_OTHER_OTHER", 2)
    });
    catalog.recipes.push(Recipe {
        requirements: Requirements {
            components: vec![vec![comp("rag", 2)]],
            ..Default::default()
        },
        ..recipe("make_bandage", "bandage", "CC_OTHER", "", 0)
    });
    catalog.recipes.push(Recipe {
        skill_used: Some("cooking".into()),
        required_skills: BTreeMap::from([("survival".to_string(), 1)]),
        requirements: Requirements {
            tools: vec![vec![comp("pot", -1)]],
            components: vec![vec![comp("meat", 1)], vec![comp("water", 1)]],
            ..Default::default()
        },
        byproducts: vec![Byproduct {
            item: "bone".into(),
            amount: 1,
        }],
        ..recipe("make_stew", "stew", "CC_FOOD", "CSC_FOOD_MEAT", 1)
    });
    catalog.recipes.push(Recipe {
        requirements: Requirements {
            components: vec![vec![comp("rag", 1)]],
            ..Default::default()
        },
        ..recipe("make_rope", "rope", "CC_OTHER", "", 1)
    });
    catalog.recipes.push(recipe("secret_device", "device", "CC_OTHER", "", -1));

    catalog
}

pub fn test_player() -> Player {
    Player {
        known_recipes: ["make_hammer", "make_table", "make_bandage", "secret_device"]
            .into_iter()
            .map(String::from)
            .collect(),
        skills: BTreeMap::from([("fabrication".to_string(), 2), ("cooking".to_string(), 1)]),
        inventory: [
            ("hammer", 1),
            ("nail", 10),
            ("plank", 10),
            ("rag", 4),
            ("jar", 2),
            ("cookbook", 1),
            ("meat", 5),
            ("water", 5),
            ("pot", 1),
        ]
        .into_iter()
        .map(|(item, count)| Holding {
            item: item.to_string(),
            count,
        })
        .collect(),
    }
}

pub fn test_categories() -> CategoryIndex {
    let mut categories = CategoryIndex::new();
    categories.register_category(
        "CC_OTHER",
        strings(&["CSC_ALL", "CSC_OTHER_TOOLS", "CSC_OTHER_OTHER"]),
    );
    categories.register_category(
        "CC_FOOD",
        strings(&["CSC_ALL", "CSC_FOOD_MEAT", "CSC_FOOD_OTHER"]),
    );
    categories
}

pub fn test_workshop() -> Workshop {
    Workshop::new(test_catalog(), test_categories(), Box::new(test_player()))
}

/// Four known recipes in one category, pool order d3_have, d3_missing, d1, d0.
/// Only the `_have` and `d1` recipes are craftable with an empty inventory.
pub fn ranking_workshop() -> Workshop {
    let mut catalog = Catalog::default();
    let missing = Requirements {
        components: vec![vec![comp("unobtainium", 1)]],
        ..Default::default()
    };
    catalog.recipes.push(recipe("d3_have", "widget", "CC_OTHER", "", 3));
    catalog.recipes.push(Recipe {
        requirements: missing.clone(),
        ..recipe("d3_missing", "widget", "CC_OTHER", "", 3)
    });
    catalog.recipes.push(recipe("d1", "widget", "CC_OTHER", "", 1));
    catalog.recipes.push(Recipe {
        requirements: missing,
        ..recipe("d0", "widget", "CC_OTHER", "", 0)
    });
    catalog.recipes.push(recipe("d3_also", "widget", "CC_OTHER", "", 3));

    let mut categories = CategoryIndex::new();
    categories.register_category("CC_OTHER", strings(&["CSC_ALL", "CSC_OTHER_OTHER"]));

    let player = Player {
        known_recipes: ["d3_have", "d3_missing", "d1", "d0", "d3_also"]
            .into_iter()
            .map(String::from)
            .collect(),
        ..Default::default()
    };
    Workshop::new(catalog, categories, Box::new(player))
}
