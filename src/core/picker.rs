//! # Recipe Picker
//!
//! Builds the candidate list shown in the recipe pane.
//!
//! ```text
//! pool ──► subcategory gate ──► knowledge gate ──► difficulty >= 0 ──► search flags
//!                                                                        │
//!          ┌─────────────────────────────────────────────────────────────┘
//!          ▼
//!   [craftable, easiest first] ++ [not craftable, hardest first]
//! ```
//!
//! Without a filter the pool is the active category. With a filter the pool
//! is every recipe and the subcategory gate is skipped, so a search always
//! spans all categories (a flag-only search like `t:saw` included). A bare
//! prefix such as `t:` has an empty query and counts as no filter.

use log::debug;

use crate::core::catalog::RecipeRef;
use crate::core::category::SUBCATEGORY_ALL;
use crate::core::filter::RecipeQuery;
use crate::core::stockpile::Stockpile;
use crate::core::workshop::Workshop;

/// One row of the recipe pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub recipe: RecipeRef,
    /// Craftable with the current inventory (at the row's batch size in batch mode).
    pub available: bool,
}

/// Candidates for a category/subcategory or a search.
///
/// `subcategory` is `None` when the category has no subcategories, in which
/// case only searches can produce results.
pub fn pick_recipes(
    workshop: &Workshop,
    inventory: &Stockpile,
    category: &str,
    subcategory: Option<&str>,
    filter: &str,
) -> Vec<Candidate> {
    let query = RecipeQuery::parse(filter);
    let filtering = query.is_active();
    let catalog = &workshop.catalog;
    let crafter = workshop.crafter.as_ref();
    let catch_all = workshop.categories.catch_all(category);

    let pool: Vec<_> = if filtering {
        catalog.all().collect()
    } else {
        catalog.in_category(category).collect()
    };

    let mut filtered = Vec::new();
    let mut max_difficulty = 0;

    for (id, rec) in pool {
        max_difficulty = max_difficulty.max(rec.difficulty);

        let in_subcategory = filtering
            || subcategory.is_some_and(|sub| {
                sub == SUBCATEGORY_ALL
                    || rec.subcategory == sub
                    || (rec.subcategory.is_empty() && catch_all == Some(sub))
            });
        if !in_subcategory {
            continue;
        }
        if !crafter.knows_recipe(rec) && crafter.partial_recipe(rec, inventory).is_none() {
            continue;
        }
        if rec.difficulty < 0 {
            continue;
        }
        if filtering && !query.matches(catalog, rec) {
            continue;
        }
        let available = inventory.can_satisfy(&rec.requirements, 1);
        filtered.push((id, rec.difficulty, available));
    }

    let filtered = filtered.as_slice();
    let craftable = (0..=max_difficulty).flat_map(move |difficulty| {
        filtered
            .iter()
            .filter(move |(_, d, available)| *d == difficulty && *available)
    });
    let uncraftable = (0..=max_difficulty).rev().flat_map(move |difficulty| {
        filtered
            .iter()
            .filter(move |(_, d, available)| *d == difficulty && !*available)
    });

    let current: Vec<Candidate> = craftable
        .chain(uncraftable)
        .map(|&(recipe, _, available)| Candidate { recipe, available })
        .collect();

    debug!(
        "Picked {} recipes (category={}, subcategory={:?}, filter={:?})",
        current.len(),
        category,
        subcategory,
        filter
    );
    current
}

/// Candidates for batch mode: the anchor recipe at multipliers `1..=batch_limit`.
pub fn batch_recipes(workshop: &Workshop, inventory: &Stockpile, anchor: RecipeRef) -> Vec<Candidate> {
    let requirements = &workshop.catalog.recipe(anchor).requirements;
    (1..=workshop.batch_limit)
        .map(|batch| Candidate {
            recipe: anchor,
            available: inventory.can_satisfy(requirements, batch),
        })
        .collect()
}
