//! # Selection State
//!
//! Everything one crafting-screen session knows, from the moment it opens
//! until a recipe is chosen or the screen is closed.
//!
//! ```text
//! SelectionState
//! ├── tab: Cycle                    // category cursor
//! ├── subtab: Option<Cycle>         // subcategory cursor (None: category has none)
//! ├── line: usize                   // cursor row (1-based multiplier - 1 in batch mode)
//! ├── filter: String                // search text, empty = browse by category
//! ├── batch / batch_line / anchor   // batch mode and where it was entered from
//! ├── display_mode: u32             // how much recipe detail to show
//! ├── candidates: Vec<Candidate>    // current recipe rows
//! ├── inventory: Stockpile          // snapshot taken at the last rebuild
//! ├── dirty / keep_line             // rebuild pending, keep cursor across it
//! ├── notice: Option<String>        // one-shot message for the player
//! └── chosen / batch_size / done    // outcome
//! ```
//!
//! State changes happen through `update()` in action.rs; `refresh()` turns a
//! pending rebuild into a new candidate list.

use log::{debug, info};
use std::fmt;

use crate::core::catalog::RecipeRef;
use crate::core::category::Cycle;
use crate::core::picker::{Candidate, batch_recipes, pick_recipes};
use crate::core::stockpile::Stockpile;
use crate::core::workshop::Workshop;

/// Highest display mode kept across a rebuild; higher values page components.
pub const MAX_RESTING_DISPLAY_MODE: u32 = 2;

/// What the tab bar shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabMode {
    Normal,
    Filtered,
    Batch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The category index is empty; there is nothing to browse.
    NoCategories,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NoCategories => write!(f, "no recipe categories are registered"),
        }
    }
}

impl std::error::Error for SessionError {}

#[derive(Debug, Clone)]
pub struct SelectionState {
    pub tab: Cycle,
    pub subtab: Option<Cycle>,
    pub line: usize,
    pub batch: bool,
    pub batch_line: usize,
    pub batch_anchor: Option<RecipeRef>,
    pub filter: String,
    pub display_mode: u32,
    pub candidates: Vec<Candidate>,
    pub inventory: Stockpile,
    pub dirty: bool,
    pub keep_line: bool,
    pub notice: Option<String>,
    pub chosen: Option<RecipeRef>,
    pub batch_size: u32,
    pub done: bool,
}

impl SelectionState {
    pub fn new(workshop: &Workshop) -> Result<Self, SessionError> {
        let tab = Cycle::new(workshop.categories.categories().len())
            .ok_or(SessionError::NoCategories)?;
        let mut state = Self {
            tab,
            subtab: None,
            line: 0,
            batch: false,
            batch_line: 0,
            batch_anchor: None,
            filter: String::new(),
            display_mode: 0,
            candidates: Vec::new(),
            inventory: Stockpile::default(),
            dirty: true,
            keep_line: false,
            notice: None,
            chosen: None,
            batch_size: 1,
            done: false,
        };
        state.reset_subtab(workshop);
        Ok(state)
    }

    /// Point the subcategory cursor at the first subcategory of the current
    /// category. Data files list `CSC_ALL` first.
    pub fn reset_subtab(&mut self, workshop: &Workshop) {
        let subcats = workshop.categories.subcategories(self.category(workshop));
        self.subtab = Cycle::new(subcats.len());
    }

    pub fn category<'a>(&self, workshop: &'a Workshop) -> &'a str {
        self.tab
            .get(workshop.categories.categories())
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn subcategory<'a>(&self, workshop: &'a Workshop) -> Option<&'a str> {
        let subcats = workshop.categories.subcategories(self.category(workshop));
        self.subtab
            .and_then(|cycle| cycle.get(subcats))
            .map(String::as_str)
    }

    pub fn tab_mode(&self) -> TabMode {
        if self.batch {
            TabMode::Batch
        } else if self.filter.is_empty() {
            TabMode::Normal
        } else {
            TabMode::Filtered
        }
    }

    /// Quantity the cursor row stands for.
    pub fn multiplier(&self) -> u32 {
        if self.batch {
            u32::try_from(self.line + 1).unwrap_or(u32::MAX)
        } else {
            1
        }
    }

    pub fn current(&self) -> Option<Candidate> {
        self.candidates.get(self.line).copied()
    }

    /// Rebuild the candidate list if something marked it dirty.
    ///
    /// Takes a fresh inventory snapshot, resets the cursor unless `keep_line`
    /// was set, and clamps the cursor and display mode. Returns true if a
    /// rebuild happened.
    pub fn refresh(&mut self, workshop: &Workshop) -> bool {
        if !self.dirty {
            return false;
        }
        self.dirty = false;

        if self.keep_line {
            self.keep_line = false;
        } else {
            self.line = 0;
        }
        self.display_mode = self.display_mode.min(MAX_RESTING_DISPLAY_MODE);

        self.inventory = workshop.crafter.crafting_inventory(&workshop.catalog);
        self.candidates = match (self.batch, self.batch_anchor) {
            (true, Some(anchor)) => batch_recipes(workshop, &self.inventory, anchor),
            _ => pick_recipes(
                workshop,
                &self.inventory,
                self.category(workshop),
                self.subcategory(workshop),
                &self.filter,
            ),
        };

        if self.line >= self.candidates.len() {
            self.line = self.candidates.len().saturating_sub(1);
        }
        debug!(
            "Rebuilt candidates: {} rows, mode={:?}, line={}",
            self.candidates.len(),
            self.tab_mode(),
            self.line
        );
        true
    }

    /// Record the outcome and end the session.
    pub fn finish(&mut self, chosen: Option<RecipeRef>, batch_size: u32) {
        info!("Selection finished: {:?} x{}", chosen, batch_size);
        self.chosen = chosen;
        self.batch_size = batch_size;
        self.done = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::core::category::CategoryIndex;
    use crate::core::crafter::Player;
    use crate::test_support::test_workshop;

    #[test]
    fn test_initial_state() {
        let workshop = test_workshop();
        let state = SelectionState::new(&workshop).unwrap();
        assert_eq!(state.category(&workshop), "CC_OTHER");
        assert_eq!(state.subcategory(&workshop), Some("CSC_ALL"));
        assert_eq!(state.line, 0);
        assert!(state.filter.is_empty());
        assert!(!state.batch);
        assert!(state.dirty);
        assert_eq!(state.tab_mode(), TabMode::Normal);
    }

    #[test]
    fn test_empty_category_index_is_rejected() {
        let workshop = Workshop::new(
            Catalog::default(),
            CategoryIndex::new(),
            Box::new(Player::default()),
        );
        assert_eq!(
            SelectionState::new(&workshop).unwrap_err(),
            SessionError::NoCategories
        );
    }

    #[test]
    fn test_category_without_subcategories() {
        let mut categories = CategoryIndex::new();
        categories.register_category("CC_BARE", Vec::new());
        let workshop = Workshop::new(Catalog::default(), categories, Box::new(Player::default()));
        let mut state = SelectionState::new(&workshop).unwrap();

        assert_eq!(state.subcategory(&workshop), None);
        assert!(state.refresh(&workshop));
        assert!(state.candidates.is_empty());
        assert_eq!(state.line, 0);
    }

    #[test]
    fn test_subtab_resets_to_first_entry() {
        let mut categories = CategoryIndex::new();
        categories.register_category(
            "CC_FOOD",
            vec!["CSC_FOOD_MEAT".into(), "CSC_ALL".into(), "CSC_FOOD_OTHER".into()],
        );
        categories.register_category(
            "CC_WEAPON",
            vec!["CSC_WEAPON_BASHING".into(), "CSC_WEAPON_OTHER".into()],
        );
        let workshop = Workshop::new(Catalog::default(), categories, Box::new(Player::default()));
        let mut state = SelectionState::new(&workshop).unwrap();
        assert_eq!(state.subcategory(&workshop), Some("CSC_FOOD_MEAT"));

        state.tab.next();
        state.reset_subtab(&workshop);
        assert_eq!(state.subcategory(&workshop), Some("CSC_WEAPON_BASHING"));

        state.subtab.as_mut().unwrap().next();
        state.tab.prev();
        state.reset_subtab(&workshop);
        assert_eq!(state.subcategory(&workshop), Some("CSC_FOOD_MEAT"));
    }

    #[test]
    fn test_refresh_only_when_dirty() {
        let workshop = test_workshop();
        let mut state = SelectionState::new(&workshop).unwrap();
        assert!(state.refresh(&workshop));
        assert!(!state.candidates.is_empty());
        assert!(!state.refresh(&workshop));
    }

    #[test]
    fn test_refresh_resets_line_unless_kept() {
        let workshop = test_workshop();
        let mut state = SelectionState::new(&workshop).unwrap();
        state.refresh(&workshop);

        state.line = 1;
        state.dirty = true;
        state.refresh(&workshop);
        assert_eq!(state.line, 0);

        state.line = 1;
        state.keep_line = true;
        state.dirty = true;
        state.refresh(&workshop);
        assert_eq!(state.line, 1);
        assert!(!state.keep_line);
    }

    #[test]
    fn test_refresh_clamps_display_mode() {
        let workshop = test_workshop();
        let mut state = SelectionState::new(&workshop).unwrap();
        state.display_mode = 7;
        state.refresh(&workshop);
        assert_eq!(state.display_mode, MAX_RESTING_DISPLAY_MODE);
    }

    #[test]
    fn test_tab_mode_batch_wins_over_filter() {
        let workshop = test_workshop();
        let mut state = SelectionState::new(&workshop).unwrap();
        state.filter = "hammer".into();
        assert_eq!(state.tab_mode(), TabMode::Filtered);
        state.batch = true;
        assert_eq!(state.tab_mode(), TabMode::Batch);
    }
}
