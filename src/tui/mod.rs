//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the crafting
//! screen, and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! Each event goes to exactly one place, first match wins:
//!
//! ```text
//! Ctrl+C ─────────────► Action::Quit
//! filter prompt open ─► FilterPrompt (Enter → SetFilter, Esc → close)
//! popup open ─────────► Popup (arrows scroll, anything else closes)
//! otherwise ──────────► InputContext → Action → update()
//! ```
//!
//! The screen is redrawn after every event; a pending candidate rebuild
//! always happens before drawing or handling the next event.

mod component;
pub mod components;
pub mod event;
pub mod input_context;
pub mod ui;

use log::info;
use std::io::stdout;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::Frame;

use crate::core::action::{Action, Effect, update};
use crate::core::catalog::RecipeRef;
use crate::core::config::{ResolvedConfig, WideLayout};
use crate::core::projector::{self, Projector};
use crate::core::state::{SelectionState, SessionError};
use crate::core::workshop::Workshop;
use crate::tui::component::EventHandler;
use crate::tui::components::{FilterPrompt, PopupState, PromptEvent};
use crate::tui::event::TuiEvent;
use crate::tui::input_context::{InputAction, InputContext, crafting_context};

/// Display settings for the crafting screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSettings {
    pub list_width: u16,
    pub wide_layout: WideLayout,
}

impl From<&ResolvedConfig> for ScreenSettings {
    fn from(config: &ResolvedConfig) -> Self {
        Self {
            list_width: config.list_width,
            wide_layout: config.wide_layout,
        }
    }
}

/// What the player picked. `recipe` is `None` when the screen was left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub recipe: Option<RecipeRef>,
    pub batch_size: u32,
}

/// TUI-specific presentation state (not part of core selection logic)
pub struct TuiState {
    pub projector: Projector,
    pub input: InputContext,
    pub filter_prompt: Option<FilterPrompt>,
    pub popup: Option<PopupState>,
    pub result_scroll: u16,
    pub list_width: u16,
    pub wide_layout: WideLayout,
}

impl TuiState {
    pub fn new(settings: ScreenSettings) -> Self {
        Self {
            projector: Projector::new(),
            input: crafting_context(),
            filter_prompt: None,
            popup: None,
            result_scroll: 0,
            list_width: settings.list_width,
            wide_layout: settings.wide_layout,
        }
    }
}

/// One crafting-screen session: the selection state plus its presentation.
pub struct CraftingScreen<'w> {
    workshop: &'w Workshop,
    pub state: SelectionState,
    pub tui: TuiState,
}

impl<'w> CraftingScreen<'w> {
    pub fn new(workshop: &'w Workshop, settings: ScreenSettings) -> Result<Self, SessionError> {
        Ok(Self {
            workshop,
            state: SelectionState::new(workshop)?,
            tui: TuiState::new(settings),
        })
    }

    pub fn is_done(&self) -> bool {
        self.state.done
    }

    pub fn selection(&self) -> Selection {
        Selection {
            recipe: self.state.chosen,
            batch_size: self.state.batch_size,
        }
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        self.state.refresh(self.workshop);
        ui::draw_ui(frame, self.workshop, &mut self.state, &mut self.tui);
    }

    pub fn handle_event(&mut self, event: TuiEvent) {
        self.state.refresh(self.workshop);

        match event {
            TuiEvent::Resize => return,
            TuiEvent::ForceQuit => {
                self.apply(Action::Quit);
                return;
            }
            _ => {}
        }

        if let Some(prompt) = self.tui.filter_prompt.as_mut() {
            match prompt.handle_event(&event) {
                Some(PromptEvent::Submit(text)) => {
                    self.tui.filter_prompt = None;
                    self.apply(Action::SetFilter(text));
                }
                Some(PromptEvent::Cancel) => self.tui.filter_prompt = None,
                None => {}
            }
            return;
        }

        if let Some(popup) = self.tui.popup.as_mut() {
            if popup.handle_event(&event).is_some() {
                self.tui.popup = None;
            }
            return;
        }

        let Some(input) = self.tui.input.handle(&event) else {
            return;
        };
        match input {
            InputAction::ScrollUp => {
                self.tui.result_scroll = self.tui.result_scroll.saturating_sub(1);
            }
            InputAction::ScrollDown => {
                self.tui.result_scroll = self.tui.result_scroll.saturating_add(1);
            }
            other => {
                if let Some(action) = other.to_action() {
                    self.apply(action);
                }
            }
        }
    }

    fn apply(&mut self, action: Action) {
        match update(&mut self.state, self.workshop, action) {
            Effect::None | Effect::Done => {}
            Effect::PromptFilter(initial) => {
                self.tui.filter_prompt = Some(FilterPrompt::new(&initial));
            }
            Effect::Describe(recipe) => {
                let (name, info) = projector::describe(self.workshop, recipe);
                let lines = if info.is_empty() {
                    vec!["No description.".to_string()]
                } else {
                    info.lines().map(String::from).collect()
                };
                self.tui.popup = Some(PopupState::page(&name, lines));
            }
            Effect::ShowKeybindings => {
                self.tui.popup = Some(PopupState::page("Keybindings", self.tui.input.help_lines()));
            }
        }
        if let Some(notice) = self.state.notice.as_deref() {
            self.tui.popup = Some(PopupState::notice(notice));
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste, Hide)?;
        info!("Terminal modes enabled (bracketed paste, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Show);
    }
}

/// Run one crafting-screen session on the real terminal.
///
/// The terminal is restored before returning, also on error.
pub fn select_recipe(workshop: &Workshop, settings: ScreenSettings) -> std::io::Result<Selection> {
    let mut screen = CraftingScreen::new(workshop, settings).map_err(std::io::Error::other)?;

    let mut terminal = ratatui::try_init()?;
    let outcome = TerminalModeGuard::new().and_then(|_terminal_mode_guard| {
        run_loop(&mut terminal, &mut screen)
    });
    ratatui::restore();

    let selection = outcome?;
    info!("Crafting screen closed: {:?}", selection);
    Ok(selection)
}

fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    screen: &mut CraftingScreen<'_>,
) -> std::io::Result<Selection> {
    while !screen.is_done() {
        terminal.draw(|f| screen.draw(f))?;
        let event = event::next_event()?;
        screen.handle_event(event);
    }
    Ok(screen.selection())
}
