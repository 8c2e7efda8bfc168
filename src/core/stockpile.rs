//! # Stockpile
//!
//! Snapshot of everything the crafter can reach (worn, carried and nearby),
//! plus the requirement evaluator that answers "can this stockpile satisfy
//! these requirements at this batch size" and renders the folded
//! requirement text for the detail pane.
//!
//! A stockpile is taken fresh on every candidate rebuild and never mutated
//! by the crafting screen.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::catalog::Catalog;
use crate::core::recipe::{ItemComp, QualityRequirement, Requirements};

/// An item stack as stored in the player profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Holding {
    pub item: String,
    #[serde(default = "one")]
    pub count: u32,
}

fn one() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockEntry {
    pub item: String,
    /// Stack size, or charges for tools.
    pub count: u32,
    pub qualities: BTreeMap<String, i32>,
    pub teaches: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stockpile {
    entries: Vec<StockEntry>,
}

/// One folded line of requirement text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementLine {
    pub text: String,
    /// `None` for section headers.
    pub met: Option<bool>,
}

impl Stockpile {
    /// Resolve holdings against the catalog to pick up qualities and book contents.
    pub fn gather(catalog: &Catalog, holdings: &[Holding]) -> Self {
        let entries = holdings
            .iter()
            .map(|h| {
                let item = catalog.item(&h.item);
                StockEntry {
                    item: h.item.clone(),
                    count: h.count,
                    qualities: item.map(|i| i.qualities.clone()).unwrap_or_default(),
                    teaches: item.map(|i| i.teaches.clone()).unwrap_or_default(),
                }
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[StockEntry] {
        &self.entries
    }

    pub fn amount_of(&self, item: &str) -> u32 {
        self.entries
            .iter()
            .filter(|e| e.item == item)
            .map(|e| e.count)
            .sum()
    }

    /// At least `amount` items providing `quality` at `level` or better.
    pub fn has_quality(&self, quality: &str, level: i32, amount: i32) -> bool {
        let found: u32 = self
            .entries
            .iter()
            .filter(|e| e.qualities.get(quality).is_some_and(|l| *l >= level))
            .map(|e| e.count)
            .sum();
        i64::from(found) >= i64::from(amount.max(1))
    }

    /// Position of a stack that teaches `recipe_id`, if any.
    pub fn recipe_source(&self, recipe_id: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.teaches.iter().any(|r| r == recipe_id))
    }

    fn has_tool(&self, tool: &ItemComp, batch: u32) -> bool {
        let have = i64::from(self.amount_of(&tool.item_type));
        if tool.count <= 0 {
            have > 0
        } else {
            have >= i64::from(tool.count) * i64::from(batch)
        }
    }

    fn has_component(&self, component: &ItemComp, batch: u32) -> bool {
        i64::from(self.amount_of(&component.item_type))
            >= i64::from(component.count.max(1)) * i64::from(batch)
    }

    fn has_quality_req(&self, req: &QualityRequirement) -> bool {
        self.has_quality(&req.quality_type, req.level, req.count)
    }

    /// Every requirement group has at least one satisfiable alternative.
    pub fn can_satisfy(&self, requirements: &Requirements, batch: u32) -> bool {
        let batch = batch.max(1);
        requirements
            .tools
            .iter()
            .all(|group| group.iter().any(|t| self.has_tool(t, batch)))
            && requirements
                .components
                .iter()
                .all(|group| group.iter().any(|c| self.has_component(c, batch)))
            && requirements
                .qualities
                .iter()
                .all(|group| group.iter().any(|q| self.has_quality_req(q)))
    }

    /// Folded `Tools required:` block (qualities first, then tools).
    pub fn folded_tools_list(
        &self,
        catalog: &Catalog,
        requirements: &Requirements,
        width: usize,
        batch: u32,
    ) -> Vec<RequirementLine> {
        if requirements.tools.is_empty() && requirements.qualities.is_empty() {
            return Vec::new();
        }
        let batch = batch.max(1);
        let mut lines = vec![RequirementLine {
            text: "Tools required:".to_string(),
            met: None,
        }];
        for group in &requirements.qualities {
            let met = group.iter().any(|q| self.has_quality_req(q));
            let text = group
                .iter()
                .map(|q| q.describe(catalog.quality_name(&q.quality_type)))
                .collect::<Vec<_>>()
                .join(" OR ");
            fold_into(&mut lines, &text, width, met);
        }
        for group in &requirements.tools {
            let met = group.iter().any(|t| self.has_tool(t, batch));
            let text = group
                .iter()
                .map(|t| {
                    let name = catalog.item_name(&t.item_type);
                    if t.count > 0 {
                        format!("{} ({} charges)", name, i64::from(t.count) * i64::from(batch))
                    } else {
                        name.to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(" OR ");
            fold_into(&mut lines, &text, width, met);
        }
        lines
    }

    /// Folded `Components required:` block.
    pub fn folded_components_list(
        &self,
        catalog: &Catalog,
        requirements: &Requirements,
        width: usize,
        batch: u32,
    ) -> Vec<RequirementLine> {
        if requirements.components.is_empty() {
            return Vec::new();
        }
        let batch = batch.max(1);
        let mut lines = vec![RequirementLine {
            text: "Components required:".to_string(),
            met: None,
        }];
        for group in &requirements.components {
            let met = group.iter().any(|c| self.has_component(c, batch));
            let text = group
                .iter()
                .map(|c| {
                    format!(
                        "{} ({})",
                        catalog.item_name(&c.item_type),
                        i64::from(c.count.max(1)) * i64::from(batch)
                    )
                })
                .collect::<Vec<_>>()
                .join(" OR ");
            fold_into(&mut lines, &text, width, met);
        }
        lines
    }
}

fn fold_into(lines: &mut Vec<RequirementLine>, text: &str, width: usize, met: bool) {
    let text = format!("> {}", text);
    for line in textwrap::wrap(&text, width.max(1)) {
        lines.push(RequirementLine {
            text: line.into_owned(),
            met: Some(met),
        });
    }
}
