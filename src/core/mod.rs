//! # Core Selection Logic
//!
//! This module contains the crafting screen's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────────┐
//!                    │            CORE             │
//!                    │                             │
//!                    │  • Workshop (catalog,       │
//!                    │    categories, crafter)     │
//!                    │  • SelectionState           │
//!                    │  • Action → update()        │
//!                    │  • Projector (view models)  │
//!                    │                             │
//!                    │  No terminal. No rendering. │
//!                    └──────────────┬──────────────┘
//!                                   │
//!                                   ▼
//!                            ┌────────────┐
//!                            │    TUI     │
//!                            │ (ratatui)  │
//!                            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`category`]: tab structure and the circular `Cycle` cursor
//! - [`recipe`], [`catalog`]: read-only recipe and item data
//! - [`stockpile`], [`crafter`]: what the crafter has and knows
//! - [`filter`], [`picker`]: search parsing and candidate ranking
//! - [`state`], [`action`]: the session state and its reducer
//! - [`projector`]: view models for each screen region
//! - [`config`], [`data`]: settings and catalog files

pub mod action;
pub mod catalog;
pub mod category;
pub mod config;
pub mod crafter;
pub mod data;
pub mod filter;
pub mod picker;
pub mod projector;
pub mod recipe;
pub mod state;
pub mod stockpile;
pub mod workshop;
