//! # Search Filter
//!
//! Parses the free-text filter of the crafting screen.
//!
//! ```text
//! "hammer"        → name contains "hammer"
//! "c:nail"        → some component's name contains "nail"
//! "tc:saw"        → a tool AND a component contain "saw"
//! "Q:hammering"   → the result item has a quality named like "hammering"
//! ```
//!
//! Flags before the first `:`:
//!
//! | flag | searches                                            |
//! |------|-----------------------------------------------------|
//! | `n`  | result name (default when there is no `:`)          |
//! | `t`  | tool names                                          |
//! | `c`  | component names                                     |
//! | `s`  | primary skill name or the required-skills text      |
//! | `S`  | primary skill name only                             |
//! | `q`  | required tool qualities                             |
//! | `Q`  | qualities of the result item                        |
//!
//! Unknown flag characters are dropped. Every enabled flag must match.

use crate::core::catalog::Catalog;
use crate::core::recipe::{ItemComp, Recipe};

/// Help text shown under the filter prompt.
pub const FILTER_HELP: &str = "Special prefixes for requirements:
  [t] search tools
  [c] search components
  [q] search qualities
  [s] search skills
  [S] search skill used only
Special prefixes for results:
  [Q] search qualities
Examples:
  t:soldering iron
  c:two by four
  q:metal sawing
  s:cooking
  Q:fine bolt turning";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFlags {
    pub name: bool,
    pub tool: bool,
    pub component: bool,
    pub skill: bool,
    pub skill_primary_only: bool,
    pub qualities: bool,
    pub result_qualities: bool,
}

/// A parsed filter: which fields to search and the lowercased query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeQuery {
    pub flags: SearchFlags,
    pub query: String,
}

impl RecipeQuery {
    pub fn parse(filter: &str) -> Self {
        let (flags, query) = match filter.split_once(':') {
            Some((prefix, query)) => {
                let mut flags = SearchFlags::default();
                for flag in prefix.chars() {
                    match flag {
                        'n' => flags.name = true,
                        't' => flags.tool = true,
                        'c' => flags.component = true,
                        's' => flags.skill = true,
                        'S' => flags.skill_primary_only = true,
                        'q' => flags.qualities = true,
                        'Q' => flags.result_qualities = true,
                        _ => {}
                    }
                }
                (flags, query)
            }
            None => (
                SearchFlags {
                    name: true,
                    ..Default::default()
                },
                filter,
            ),
        };
        Self {
            flags,
            query: query.to_lowercase(),
        }
    }

    /// True when there is something to search for.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    /// True if the recipe satisfies every enabled flag.
    pub fn matches(&self, catalog: &Catalog, recipe: &Recipe) -> bool {
        let q = self.query.as_str();
        let flags = &self.flags;

        if flags.name && !lcmatch(catalog.item_name(&recipe.result), q) {
            return false;
        }
        if flags.tool && !lcmatch_any(catalog, &recipe.requirements.tools, q) {
            return false;
        }
        if flags.component && !lcmatch_any(catalog, &recipe.requirements.components, q) {
            return false;
        }
        if flags.result_qualities {
            let found = catalog.item(&recipe.result).is_some_and(|item| {
                item.qualities
                    .keys()
                    .any(|quality| lcmatch(catalog.quality_name(quality), q))
            });
            if !found {
                return false;
            }
        }
        if flags.qualities {
            let found = recipe.requirements.qualities.iter().flatten().any(|req| {
                lcmatch(&req.describe(catalog.quality_name(&req.quality_type)), q)
            });
            if !found {
                return false;
            }
        }
        if flags.skill {
            let Some(skill) = &recipe.skill_used else {
                return false;
            };
            let required = recipe.required_skills_string(|s| catalog.skill_name(s).to_string());
            if !lcmatch(catalog.skill_name(skill), q) && !lcmatch(&required, q) {
                return false;
            }
        }
        if flags.skill_primary_only {
            let Some(skill) = &recipe.skill_used else {
                return false;
            };
            if !lcmatch(catalog.skill_name(skill), q) {
                return false;
            }
        }
        true
    }
}

/// Case-insensitive substring match; `query` must already be lowercase.
pub fn lcmatch(text: &str, query: &str) -> bool {
    text.to_lowercase().contains(query)
}

fn lcmatch_any(catalog: &Catalog, groups: &[Vec<ItemComp>], query: &str) -> bool {
    groups
        .iter()
        .flatten()
        .any(|comp| lcmatch(catalog.item_name(&comp.item_type), query))
}
