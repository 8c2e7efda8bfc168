//! # TUI Components
//!
//! One file per screen region or overlay.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Receive a borrowed view model from the projector and draw it:
//! - `TabBar`: category and subcategory tabs
//! - `RecipeList`: candidate rows with a scrollbar
//! - `RecipeDetail`: requirement text for the selected recipe
//! - `ResultPane`: result item info (wide layout only)
//! - `Legend`: key hints
//!
//! ### Stateful Components (Event-Driven)
//!
//! Hold their own state while open and emit events:
//! - `FilterPrompt`: modal search editor
//! - `PopupState` / `Popup`: notices, descriptions, keybinding help
//!
//! ```text
//! components/
//! ├── mod.rs
//! ├── tab_bar.rs
//! ├── recipe_list.rs
//! ├── recipe_detail.rs
//! ├── result_pane.rs
//! ├── legend.rs
//! ├── filter_prompt.rs
//! └── popup.rs
//! ```

pub mod filter_prompt;
pub mod legend;
pub mod popup;
pub mod recipe_detail;
pub mod recipe_list;
pub mod result_pane;
pub mod tab_bar;

pub use filter_prompt::{FilterPrompt, PromptEvent};
pub use legend::Legend;
pub use popup::{Popup, PopupEvent, PopupState};
pub use recipe_detail::RecipeDetail;
pub use recipe_list::RecipeList;
pub use result_pane::ResultPane;
pub use tab_bar::TabBar;
