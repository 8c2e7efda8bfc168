//! # Actions
//!
//! Everything that can happen on the crafting screen becomes an `Action`.
//! Player presses Tab? That's `Action::NextCategory`.
//! Player submits a search? That's `Action::SetFilter(text)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state and returns an `Effect` for the driver to carry out (prompts,
//! popups, ending the session). No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Category, subcategory, filter and batch changes mark the candidate list
//! dirty; cursor movement never does.

use log::debug;

use crate::core::catalog::RecipeRef;
use crate::core::state::SelectionState;
use crate::core::workshop::Workshop;

pub const NOTHING_SELECTED: &str = "Nothing selected!";
pub const CANNOT_CRAFT: &str = "You can't do that!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    PrevCategory,
    NextCategory,
    PrevSubcategory,
    NextSubcategory,
    CursorUp,
    CursorDown,
    ToggleBatch,
    /// Ask for new search text.
    Filter,
    /// Search text supplied by the prompt.
    SetFilter(String),
    ResetFilter,
    CycleMode,
    DescribeRecipe,
    ShowKeybindings,
    Confirm,
    Quit,
}

/// Side effects the driver performs after `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Open the search prompt, prefilled with the current filter.
    PromptFilter(String),
    /// Show the full description of a recipe's result.
    Describe(RecipeRef),
    ShowKeybindings,
    /// The session is over; read `chosen` and `batch_size` from the state.
    Done,
}

pub fn update(state: &mut SelectionState, workshop: &Workshop, action: Action) -> Effect {
    debug!("Action: {:?}", action);
    state.notice = None;

    match action {
        Action::PrevCategory | Action::NextCategory => {
            if action == Action::PrevCategory {
                state.tab.prev();
            } else {
                state.tab.next();
            }
            state.reset_subtab(workshop);
            state.dirty = true;
            Effect::None
        }
        Action::PrevSubcategory | Action::NextSubcategory => {
            if let Some(subtab) = state.subtab.as_mut() {
                if action == Action::PrevSubcategory {
                    subtab.prev();
                } else {
                    subtab.next();
                }
            }
            state.dirty = true;
            Effect::None
        }
        Action::CursorUp => {
            let len = state.candidates.len();
            if len > 0 {
                state.line = if state.line == 0 { len - 1 } else { state.line - 1 };
            }
            Effect::None
        }
        Action::CursorDown => {
            let len = state.candidates.len();
            if len > 0 {
                state.line = if state.line + 1 >= len { 0 } else { state.line + 1 };
            }
            Effect::None
        }
        Action::ToggleBatch => {
            let Some(current) = state.current() else {
                state.notice = Some(NOTHING_SELECTED.to_string());
                return Effect::None;
            };
            state.batch = !state.batch;
            if state.batch {
                state.batch_line = state.line;
                state.batch_anchor = Some(current.recipe);
            } else {
                state.line = state.batch_line;
                state.batch_anchor = None;
                state.keep_line = true;
            }
            state.dirty = true;
            Effect::None
        }
        Action::Filter => Effect::PromptFilter(state.filter.clone()),
        Action::SetFilter(text) => {
            state.filter = text;
            state.dirty = true;
            Effect::None
        }
        Action::ResetFilter => {
            state.filter.clear();
            state.dirty = true;
            Effect::None
        }
        Action::CycleMode => {
            state.display_mode += 1;
            Effect::None
        }
        Action::DescribeRecipe => match state.current() {
            Some(current) => {
                state.keep_line = true;
                state.dirty = true;
                Effect::Describe(current.recipe)
            }
            None => {
                state.notice = Some(NOTHING_SELECTED.to_string());
                Effect::None
            }
        },
        Action::ShowKeybindings => Effect::ShowKeybindings,
        Action::Confirm => confirm(state, workshop),
        Action::Quit => {
            state.finish(None, 1);
            Effect::Done
        }
    }
}

fn confirm(state: &mut SelectionState, workshop: &Workshop) -> Effect {
    let Some(current) = state.current().filter(|c| c.available) else {
        state.notice = Some(CANNOT_CRAFT.to_string());
        return Effect::None;
    };
    let quantity = state.multiplier();
    let recipe = workshop.catalog.recipe(current.recipe);
    if let Err(message) = workshop.crafter.check_eligible_containers(
        &workshop.catalog,
        recipe,
        quantity,
        &state.inventory,
    ) {
        state.notice = Some(message);
        return Effect::None;
    }
    state.finish(Some(current.recipe), quantity);
    Effect::Done
}
