//! # Workshop
//!
//! Everything a selection session reads but never changes: the catalog,
//! the category index and the crafter. Built once at data-load time and
//! handed to each session explicitly.

use crate::core::catalog::Catalog;
use crate::core::category::CategoryIndex;
use crate::core::crafter::Crafter;

/// Default upper bound on the batch multiplier.
pub const DEFAULT_BATCH_LIMIT: u32 = 20;

pub struct Workshop {
    pub catalog: Catalog,
    pub categories: CategoryIndex,
    pub crafter: Box<dyn Crafter>,
    pub batch_limit: u32,
}

impl Workshop {
    pub fn new(catalog: Catalog, categories: CategoryIndex, crafter: Box<dyn Crafter>) -> Self {
        Self {
            catalog,
            categories,
            crafter,
            batch_limit: DEFAULT_BATCH_LIMIT,
        }
    }

    pub fn with_batch_limit(mut self, batch_limit: u32) -> Self {
        self.batch_limit = batch_limit.max(1);
        self
    }
}
