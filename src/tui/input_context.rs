//! # Input Context
//!
//! Named actions and the keys bound to them. A screen registers the actions
//! it understands; key presses that resolve to an unregistered action are
//! ignored, and the keybinding help lists exactly what was registered.
//!
//! ```text
//! TuiEvent::InputChar('b') ──► InputAction::ToggleBatch ──► Action::ToggleBatch
//! ```

use crate::core::action::Action;
use crate::tui::event::TuiEvent;

/// Every action a key can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    Up,
    Down,
    Left,
    Right,
    /// Scroll the item info pane.
    ScrollUp,
    ScrollDown,
    PrevTab,
    NextTab,
    Confirm,
    Quit,
    CycleMode,
    Filter,
    ResetFilter,
    ToggleBatch,
    HelpRecipe,
    HelpKeybindings,
}

pub const ALL_INPUT_ACTIONS: &[InputAction] = &[
    InputAction::Up,
    InputAction::Down,
    InputAction::Left,
    InputAction::Right,
    InputAction::ScrollUp,
    InputAction::ScrollDown,
    InputAction::PrevTab,
    InputAction::NextTab,
    InputAction::Confirm,
    InputAction::Quit,
    InputAction::CycleMode,
    InputAction::Filter,
    InputAction::ResetFilter,
    InputAction::ToggleBatch,
    InputAction::HelpRecipe,
    InputAction::HelpKeybindings,
];

impl InputAction {
    pub fn default_keys(self) -> Vec<TuiEvent> {
        use TuiEvent::*;
        match self {
            Self::Up => vec![CursorUp],
            Self::Down => vec![CursorDown],
            Self::Left => vec![CursorLeft],
            Self::Right => vec![CursorRight],
            Self::ScrollUp => vec![PageUp],
            Self::ScrollDown => vec![PageDown],
            Self::PrevTab => vec![BackTab, InputChar('<')],
            Self::NextTab => vec![Tab, InputChar('>')],
            Self::Confirm => vec![Submit],
            Self::Quit => vec![Escape, InputChar('q')],
            Self::CycleMode => vec![InputChar('m')],
            Self::Filter => vec![InputChar('F'), InputChar('f'), InputChar('/')],
            Self::ResetFilter => vec![InputChar('R'), InputChar('r')],
            Self::ToggleBatch => vec![InputChar('b')],
            Self::HelpRecipe => vec![InputChar('E'), InputChar('e')],
            Self::HelpKeybindings => vec![InputChar('?')],
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Up => "Move cursor up",
            Self::Down => "Move cursor down",
            Self::Left => "Previous subcategory",
            Self::Right => "Next subcategory",
            Self::ScrollUp => "Scroll item info up",
            Self::ScrollDown => "Scroll item info down",
            Self::PrevTab => "Previous category",
            Self::NextTab => "Next category",
            Self::Confirm => "Craft selected recipe",
            Self::Quit => "Leave",
            Self::CycleMode => "Cycle detail view",
            Self::Filter => "Filter recipes",
            Self::ResetFilter => "Reset filter",
            Self::ToggleBatch => "Toggle batch crafting",
            Self::HelpRecipe => "Describe result",
            Self::HelpKeybindings => "Show keybindings",
        }
    }

    /// What the action does to the selection state. Scrolling only moves
    /// the result pane and has no selection counterpart.
    pub fn to_action(self) -> Option<Action> {
        match self {
            Self::Up => Some(Action::CursorUp),
            Self::Down => Some(Action::CursorDown),
            Self::Left => Some(Action::PrevSubcategory),
            Self::Right => Some(Action::NextSubcategory),
            Self::PrevTab => Some(Action::PrevCategory),
            Self::NextTab => Some(Action::NextCategory),
            Self::Confirm => Some(Action::Confirm),
            Self::Quit => Some(Action::Quit),
            Self::CycleMode => Some(Action::CycleMode),
            Self::Filter => Some(Action::Filter),
            Self::ResetFilter => Some(Action::ResetFilter),
            Self::ToggleBatch => Some(Action::ToggleBatch),
            Self::HelpRecipe => Some(Action::DescribeRecipe),
            Self::HelpKeybindings => Some(Action::ShowKeybindings),
            Self::ScrollUp | Self::ScrollDown => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub action: InputAction,
    pub keys: Vec<TuiEvent>,
}

#[derive(Debug, Clone, Default)]
pub struct InputContext {
    name: String,
    bindings: Vec<Binding>,
}

impl InputContext {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            bindings: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register an action with its default keys. Registering twice is a no-op.
    pub fn register_action(&mut self, action: InputAction) {
        if self.bindings.iter().any(|b| b.action == action) {
            return;
        }
        self.bindings.push(Binding {
            action,
            keys: action.default_keys(),
        });
    }

    /// Register the four cursor directions.
    pub fn register_cardinal(&mut self) {
        for action in [
            InputAction::Up,
            InputAction::Down,
            InputAction::Left,
            InputAction::Right,
        ] {
            self.register_action(action);
        }
    }

    /// The registered action bound to `event`, if any.
    pub fn handle(&self, event: &TuiEvent) -> Option<InputAction> {
        self.bindings
            .iter()
            .find(|b| b.keys.contains(event))
            .map(|b| b.action)
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// One line per registered action, for the keybinding popup.
    pub fn help_lines(&self) -> Vec<String> {
        self.bindings
            .iter()
            .map(|b| {
                let keys: Vec<String> = b.keys.iter().map(key_label).collect();
                format!("{:<28} {}", b.action.display_name(), keys.join(", "))
            })
            .collect()
    }
}

/// The input context of the crafting screen.
pub fn crafting_context() -> InputContext {
    let mut ctxt = InputContext::new("CRAFTING");
    ctxt.register_cardinal();
    for &action in ALL_INPUT_ACTIONS {
        ctxt.register_action(action);
    }
    ctxt
}

/// Short display form of a key.
pub fn key_label(event: &TuiEvent) -> String {
    match event {
        TuiEvent::InputChar(c) => c.to_string(),
        TuiEvent::CursorUp => "UP".into(),
        TuiEvent::CursorDown => "DOWN".into(),
        TuiEvent::CursorLeft => "LEFT".into(),
        TuiEvent::CursorRight => "RIGHT".into(),
        TuiEvent::PageUp => "PPAGE".into(),
        TuiEvent::PageDown => "NPAGE".into(),
        TuiEvent::Tab => "TAB".into(),
        TuiEvent::BackTab => "BACKTAB".into(),
        TuiEvent::Submit => "RETURN".into(),
        TuiEvent::Escape => "ESC".into(),
        other => format!("{:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unregistered_actions_are_ignored() {
        let mut ctxt = InputContext::new("TEST");
        ctxt.register_action(InputAction::Confirm);
        assert_eq!(ctxt.handle(&TuiEvent::Submit), Some(InputAction::Confirm));
        assert_eq!(ctxt.handle(&TuiEvent::InputChar('b')), None);
    }

    #[test]
    fn test_register_cardinal() {
        let mut ctxt = InputContext::new("TEST");
        ctxt.register_cardinal();
        assert_eq!(ctxt.bindings().len(), 4);
        assert_eq!(ctxt.handle(&TuiEvent::CursorLeft), Some(InputAction::Left));
        ctxt.register_cardinal();
        assert_eq!(ctxt.bindings().len(), 4);
    }

    #[test]
    fn test_every_action_has_keys_and_resolves() {
        let ctxt = crafting_context();
        assert_eq!(ctxt.bindings().len(), ALL_INPUT_ACTIONS.len());
        for &action in ALL_INPUT_ACTIONS {
            let keys = action.default_keys();
            assert!(!keys.is_empty(), "{:?} has no keys", action);
            for key in &keys {
                assert_eq!(ctxt.handle(key), Some(action), "{:?}", key);
            }
        }
    }

    #[test]
    fn test_crafting_keys_resolve_to_actions() {
        let ctxt = crafting_context();
        let action = |event: TuiEvent| ctxt.handle(&event).and_then(InputAction::to_action);
        assert_eq!(action(TuiEvent::Tab), Some(Action::NextCategory));
        assert_eq!(action(TuiEvent::InputChar('<')), Some(Action::PrevCategory));
        assert_eq!(action(TuiEvent::CursorRight), Some(Action::NextSubcategory));
        assert_eq!(action(TuiEvent::InputChar('b')), Some(Action::ToggleBatch));
        assert_eq!(action(TuiEvent::InputChar('/')), Some(Action::Filter));
        assert_eq!(action(TuiEvent::InputChar('?')), Some(Action::ShowKeybindings));
        assert_eq!(action(TuiEvent::Escape), Some(Action::Quit));
        assert_eq!(action(TuiEvent::InputChar('z')), None);
        // scrolling belongs to the result pane, not the selection
        assert_eq!(ctxt.handle(&TuiEvent::PageDown), Some(InputAction::ScrollDown));
        assert_eq!(action(TuiEvent::PageDown), None);
    }

    #[test]
    fn test_help_lists_every_registered_action() {
        let ctxt = crafting_context();
        let help = ctxt.help_lines();
        assert_eq!(help.len(), ctxt.bindings().len());
        assert!(help.iter().any(|l| l.starts_with("Toggle batch crafting") && l.ends_with('b')));
        assert!(help.iter().any(|l| l.contains("TAB, >")));
    }
}
