//! # Recipes
//!
//! Read-only recipe records as loaded from the catalog file.
//!
//! Requirements are lists of alternative groups: every group must be
//! satisfied, and a group is satisfied by any one of its alternatives.
//!
//! ```text
//! tools:      [[hammer, rock], [welder]]     // (hammer OR rock) AND welder
//! components: [[nail x10], [2x4 x2, plank x1]]
//! qualities:  [[CUT >= 1]]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Item with a required count. For tools the count is charges consumed
/// per batch unit, and `-1` means the tool only has to be present.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ItemComp {
    #[serde(rename = "item")]
    pub item_type: String,
    #[serde(default = "one")]
    pub count: i32,
}

fn one() -> i32 {
    1
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct QualityRequirement {
    #[serde(rename = "quality")]
    pub quality_type: String,
    #[serde(default = "one")]
    pub count: i32,
    #[serde(default = "one")]
    pub level: i32,
}

impl QualityRequirement {
    /// Human-readable form, e.g. `1 tool with cutting of 1 or more.`
    pub fn describe(&self, quality_name: &str) -> String {
        let noun = if self.count == 1 { "tool" } else { "tools" };
        format!(
            "{} {} with {} of {} or more.",
            self.count, noun, quality_name, self.level
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Requirements {
    #[serde(default)]
    pub tools: Vec<Vec<ItemComp>>,
    #[serde(default)]
    pub components: Vec<Vec<ItemComp>>,
    #[serde(default)]
    pub qualities: Vec<Vec<QualityRequirement>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Byproduct {
    pub item: String,
    #[serde(default = "one")]
    pub amount: i32,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Recipe {
    pub id: String,
    /// Result item type id.
    pub result: String,
    pub category: String,
    /// Empty when the recipe falls into its category's catch-all subcategory.
    #[serde(default)]
    pub subcategory: String,
    /// Negative difficulty hides the recipe from the crafting screen.
    #[serde(default)]
    pub difficulty: i32,
    /// Primary skill, if any.
    #[serde(default)]
    pub skill_used: Option<String>,
    /// Additional skill → level requirements.
    #[serde(default)]
    pub required_skills: BTreeMap<String, u32>,
    /// Crafting time in moves (100 moves per turn).
    #[serde(default)]
    pub time: u32,
    /// Fractional time saving once a batch reaches `batch_rsize`.
    #[serde(default)]
    pub batch_rscale: f64,
    #[serde(default)]
    pub batch_rsize: u32,
    #[serde(flatten)]
    pub requirements: Requirements,
    #[serde(default)]
    pub byproducts: Vec<Byproduct>,
}

impl Recipe {
    pub fn has_byproducts(&self) -> bool {
        !self.byproducts.is_empty()
    }

    /// Total moves for crafting `batch` units.
    pub fn batch_time(&self, batch: u32) -> u32 {
        let batch = batch.max(1);
        let total = f64::from(self.time) * f64::from(batch);
        let total = if self.batch_rsize > 0
            && batch >= self.batch_rsize
            && self.batch_rscale > 0.0
        {
            total * (1.0 - self.batch_rscale.min(1.0))
        } else {
            total
        };
        total.round() as u32
    }

    /// `name (level), name (level)` or `none`, names resolved through `skill_name`.
    pub fn required_skills_string(&self, skill_name: impl Fn(&str) -> String) -> String {
        if self.required_skills.is_empty() {
            return "none".to_string();
        }
        self.required_skills
            .iter()
            .map(|(skill, level)| format!("{} ({})", skill_name(skill.as_str()), level))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// `Time to complete: ...` text for a number of moves.
pub fn format_time(moves: u32) -> String {
    const TURNS_PER_MINUTE: u32 = 10;
    const TURNS_PER_HOUR: u32 = 600;

    let turns = moves / 100;
    let text = if turns < TURNS_PER_MINUTE {
        let seconds = (turns * 6).max(1);
        plural(seconds, "second")
    } else {
        let minutes = (turns % TURNS_PER_HOUR) / TURNS_PER_MINUTE;
        let hours = turns / TURNS_PER_HOUR;
        match (hours, minutes) {
            (0, m) => plural(m, "minute"),
            (h, 0) => plural(h, "hour"),
            (h, m) => format!("{} and {}", plural(h, "hour"), plural(m, "minute")),
        }
    };
    format!("Time to complete: {}", text)
}

fn plural(n: u32, unit: &str) -> String {
    if n == 1 {
        format!("{} {}", n, unit)
    } else {
        format!("{} {}s", n, unit)
    }
}
