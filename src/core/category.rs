//! # Category Index
//!
//! The two-level tab structure of the crafting screen: an ordered list of
//! categories, each owning an ordered list of subcategories.
//!
//! ```text
//! CategoryIndex
//! ├── categories: ["CC_WEAPON", "CC_FOOD", ...]          // tab order
//! └── subcategories:
//!     ├── "CC_WEAPON"   → ["CSC_ALL", "CSC_WEAPON_BASHING", ..., "CSC_WEAPON_OTHER"]
//!     ├── "CC_FOOD"     → ["CSC_ALL", "CSC_FOOD_DRINKS", ..., "CSC_FOOD_OTHER"]
//!     └── "CC_NONCRAFT" → [...]                           // stored, never a tab
//! ```
//!
//! The last subcategory of each category is the catch-all for recipes that
//! carry no subcategory tag.
//!
//! Cursors over these lists are plain indices (`Cycle`) into the index, so a
//! `Cycle` must be rebuilt whenever the index is reset or re-registered.

use log::warn;
use std::collections::HashMap;

/// Reserved subcategory id meaning "every subcategory of this category".
pub const SUBCATEGORY_ALL: &str = "CSC_ALL";

/// Category that holds recipes which never appear as a tab.
pub const NONCRAFT_CATEGORY: &str = "CC_NONCRAFT";

#[derive(Debug, Default, Clone)]
pub struct CategoryIndex {
    categories: Vec<String>,
    subcategories: HashMap<String, Vec<String>>,
}

impl CategoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a category and its subcategory list.
    ///
    /// `CC_NONCRAFT` keeps its subcategories (recipes fall back to them) but
    /// is not added to the tab list.
    pub fn register_category(&mut self, id: &str, subcategories: Vec<String>) {
        if id != NONCRAFT_CATEGORY && !self.categories.iter().any(|c| c == id) {
            self.categories.push(id.to_string());
        }
        self.subcategories.insert(id.to_string(), subcategories);
    }

    pub fn reset(&mut self) {
        self.categories.clear();
        self.subcategories.clear();
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Subcategories of `category`; empty for unknown categories.
    pub fn subcategories(&self, category: &str) -> &[String] {
        self.subcategories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The catch-all subcategory (last in the list), if the category has any.
    pub fn catch_all(&self, category: &str) -> Option<&str> {
        self.subcategories(category).last().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Circular cursor over a sequence owned elsewhere.
///
/// Holds only a position and the length it was built for. Resolving against
/// a different (re-registered) sequence is the caller's bug; rebuild instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    index: usize,
    len: usize,
}

impl Cycle {
    /// Cursor at the first element. `None` for an empty sequence.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { index: 0, len })
    }

    /// Cursor at an arbitrary start position. `None` if out of range.
    pub fn at(index: usize, len: usize) -> Option<Self> {
        (index < len).then_some(Self { index, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn next(&mut self) {
        self.index = if self.index + 1 >= self.len { 0 } else { self.index + 1 };
    }

    pub fn prev(&mut self) {
        self.index = if self.index == 0 { self.len - 1 } else { self.index - 1 };
    }

    /// Element under the cursor in `items`.
    pub fn get<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.index)
    }

    /// True if the element under the cursor equals `value`.
    pub fn is<T: PartialEq<U>, U: ?Sized>(&self, items: &[T], value: &U) -> bool {
        self.get(items).is_some_and(|item| item == value)
    }
}

/// Screen name of a category: `CC_WEAPON` → `WEAPON`.
pub fn category_name(id: &str) -> &str {
    match id.strip_prefix("CC_") {
        Some(name) => name,
        None => {
            warn!("could not get screen name of: {}", id);
            id
        }
    }
}

/// Screen name of a subcategory: `CSC_WEAPON_BASHING` → `BASHING`, `CSC_ALL` → `ALL`.
pub fn subcategory_name<'a>(category: &str, id: &'a str) -> &'a str {
    let prefix = format!("CSC_{}_", category_name(category));
    if let Some(name) = id.strip_prefix(prefix.as_str()) {
        return name;
    }
    if id.starts_with(SUBCATEGORY_ALL) {
        return "ALL";
    }
    warn!("could not get screen name of: {}", id);
    id
}
