//! End-to-end selection scenarios against the bundled demo workshop.
//!
//! Demo inventory, by category (craftable easiest first, then the rest):
//!   WEAPON: club(0) shiv(1) spear(1)
//!   FOOD:   tea(0) stew(1) jerky(2)
//!   OTHER:  bandage(0) splint(1) table(2) crowbar(4, missing steel)

use std::path::Path;

use workbench::core::action::{Action, CANNOT_CRAFT, Effect, NOTHING_SELECTED, update};
use workbench::core::config::WideLayout;
use workbench::core::data::{self, DataFile, Format};
use workbench::core::state::{SelectionState, TabMode};
use workbench::core::workshop::Workshop;
use workbench::tui::event::TuiEvent;
use workbench::tui::{CraftingScreen, ScreenSettings};

fn demo_workshop() -> Workshop {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/workshop.toml");
    data::load_workshop(&path).unwrap()
}

fn open(workshop: &Workshop) -> SelectionState {
    let mut state = SelectionState::new(workshop).unwrap();
    state.refresh(workshop);
    state
}

fn act(state: &mut SelectionState, workshop: &Workshop, action: Action) -> Effect {
    let effect = update(state, workshop, action);
    state.refresh(workshop);
    effect
}

fn listed(workshop: &Workshop, state: &SelectionState) -> Vec<String> {
    state
        .candidates
        .iter()
        .map(|c| workshop.catalog.recipe(c.recipe).id.clone())
        .collect()
}

#[test]
fn test_initial_state() {
    let workshop = demo_workshop();
    let state = open(&workshop);

    assert_eq!(state.category(&workshop), "CC_WEAPON");
    assert_eq!(state.subcategory(&workshop), Some("CSC_ALL"));
    assert_eq!(state.tab_mode(), TabMode::Normal);
    assert_eq!(state.line, 0);
    assert!(!state.batch);
    assert_eq!(listed(&workshop, &state), ["make_club", "make_shiv", "make_spear"]);
}

#[test]
fn test_category_cycle_returns_home() {
    let workshop = demo_workshop();
    let mut state = open(&workshop);
    // CC_NONCRAFT is never a tab
    assert_eq!(workshop.categories.categories().len(), 3);

    for _ in 0..3 {
        act(&mut state, &workshop, Action::NextCategory);
    }
    assert_eq!(state.category(&workshop), "CC_WEAPON");
    act(&mut state, &workshop, Action::PrevCategory);
    assert_eq!(state.category(&workshop), "CC_OTHER");
    assert_eq!(
        listed(&workshop, &state),
        ["make_bandage", "make_splint", "make_table", "make_crowbar"]
    );
}

#[test]
fn test_catch_all_subcategory_holds_untagged_recipes() {
    let workshop = demo_workshop();
    let mut state = open(&workshop);

    act(&mut state, &workshop, Action::NextSubcategory);
    assert_eq!(state.subcategory(&workshop), Some("CSC_WEAPON_BASHING"));
    assert_eq!(listed(&workshop, &state), ["make_club"]);

    act(&mut state, &workshop, Action::PrevSubcategory);
    act(&mut state, &workshop, Action::PrevSubcategory);
    assert_eq!(state.subcategory(&workshop), Some("CSC_WEAPON_OTHER"));
    assert_eq!(listed(&workshop, &state), ["make_spear"]);
}

#[test]
fn test_recipe_book_unlocks_unknown_recipes() {
    let workshop = demo_workshop();
    let mut state = open(&workshop);
    act(&mut state, &workshop, Action::NextCategory);

    assert_eq!(listed(&workshop, &state), ["make_tea", "make_stew", "make_jerky"]);
    assert!(state.candidates.iter().all(|c| c.available));
}

#[test]
fn test_component_search_spans_categories() {
    let workshop = demo_workshop();
    let mut state = open(&workshop);
    act(&mut state, &workshop, Action::SetFilter("c:nail".into()));

    assert_eq!(state.tab_mode(), TabMode::Filtered);
    assert_eq!(listed(&workshop, &state), ["make_club", "make_table"]);

    act(&mut state, &workshop, Action::ResetFilter);
    assert_eq!(state.tab_mode(), TabMode::Normal);
    assert_eq!(listed(&workshop, &state), ["make_club", "make_shiv", "make_spear"]);
}

#[test]
fn test_search_never_shows_unknown_recipes() {
    let workshop = demo_workshop();
    let mut state = open(&workshop);
    act(&mut state, &workshop, Action::SetFilter("c:plank".into()));
    assert_eq!(listed(&workshop, &state), ["make_club", "make_table"]);
}

#[test]
fn test_batch_round_trip_restores_cursor() {
    let workshop = demo_workshop();
    let mut state = open(&workshop);
    act(&mut state, &workshop, Action::PrevCategory);
    act(&mut state, &workshop, Action::CursorDown);
    act(&mut state, &workshop, Action::CursorDown);
    assert_eq!(state.line, 2);

    act(&mut state, &workshop, Action::ToggleBatch);
    assert_eq!(state.tab_mode(), TabMode::Batch);
    assert_eq!(state.candidates.len(), 20);
    assert_eq!(state.multiplier(), 1);
    // four planks per table, six in the pack
    assert!(state.candidates[0].available);
    assert!(!state.candidates[1].available);

    act(&mut state, &workshop, Action::ToggleBatch);
    assert_eq!(state.line, 2);
    assert_eq!(listed(&workshop, &state)[2], "make_table");
}

#[test]
fn test_cursor_wraps_both_ways() {
    let workshop = demo_workshop();
    let mut state = open(&workshop);

    act(&mut state, &workshop, Action::CursorUp);
    assert_eq!(state.line, 2);
    act(&mut state, &workshop, Action::CursorDown);
    assert_eq!(state.line, 0);

    act(&mut state, &workshop, Action::SetFilter("no such thing".into()));
    assert!(state.candidates.is_empty());
    act(&mut state, &workshop, Action::CursorDown);
    act(&mut state, &workshop, Action::CursorUp);
    assert_eq!(state.line, 0);
    act(&mut state, &workshop, Action::ToggleBatch);
    assert_eq!(state.notice.as_deref(), Some(NOTHING_SELECTED));
    assert!(!state.batch);
}

#[test]
fn test_batch_confirm_returns_quantity() {
    let workshop = demo_workshop();
    let mut state = open(&workshop);
    act(&mut state, &workshop, Action::NextCategory);
    act(&mut state, &workshop, Action::CursorDown);
    act(&mut state, &workshop, Action::ToggleBatch);

    // three portions of water, so 4x is out
    act(&mut state, &workshop, Action::CursorDown);
    act(&mut state, &workshop, Action::CursorDown);
    act(&mut state, &workshop, Action::CursorDown);
    assert_eq!(state.multiplier(), 4);
    assert_eq!(act(&mut state, &workshop, Action::Confirm), Effect::None);
    assert_eq!(state.notice.as_deref(), Some(CANNOT_CRAFT));

    act(&mut state, &workshop, Action::CursorUp);
    assert_eq!(act(&mut state, &workshop, Action::Confirm), Effect::Done);
    assert!(state.done);
    assert_eq!(state.chosen, workshop.catalog.find("make_stew"));
    assert_eq!(state.batch_size, 3);
}

#[test]
fn test_unavailable_confirm_stays_open() {
    let workshop = demo_workshop();
    let mut state = open(&workshop);
    act(&mut state, &workshop, Action::PrevCategory);
    act(&mut state, &workshop, Action::CursorUp);
    assert_eq!(listed(&workshop, &state)[state.line], "make_crowbar");

    act(&mut state, &workshop, Action::Confirm);
    assert!(!state.done);
    assert_eq!(state.notice.as_deref(), Some(CANNOT_CRAFT));
}

#[test]
fn test_quit_chooses_nothing() {
    let workshop = demo_workshop();
    let mut state = open(&workshop);
    assert_eq!(act(&mut state, &workshop, Action::Quit), Effect::Done);
    assert!(state.done);
    assert_eq!(state.chosen, None);
}

#[test]
fn test_inline_catalog_without_categories_is_rejected() {
    let data = DataFile::parse("[player]\nknown_recipes = []\n", Format::Toml).unwrap();
    let workshop = data.into_workshop();
    assert!(SelectionState::new(&workshop).is_err());
}

#[test]
fn test_keyboard_session_picks_searched_recipe() {
    let workshop = demo_workshop();
    let settings = ScreenSettings {
        list_width: 28,
        wide_layout: WideLayout::Never,
    };
    let mut screen = CraftingScreen::new(&workshop, settings).unwrap();

    screen.handle_event(TuiEvent::InputChar('/'));
    for c in "c:nail".chars() {
        screen.handle_event(TuiEvent::InputChar(c));
    }
    screen.handle_event(TuiEvent::Submit);
    screen.handle_event(TuiEvent::CursorDown);
    screen.handle_event(TuiEvent::Submit);

    assert!(screen.is_done());
    let selection = screen.selection();
    assert_eq!(selection.recipe, workshop.catalog.find("make_table"));
    assert_eq!(selection.batch_size, 1);
}
