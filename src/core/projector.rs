//! # Presentation Projector
//!
//! Turns a `SelectionState` into plain view models for each screen region.
//! The TUI layer only styles and places what it gets from here.
//!
//! ```text
//! ┌ tab bar ──────────────────────────────────────────────┐
//! │ <WEAPON>  FOOD   OTHER                                │
//! │ <ALL>  TOOLS   OTHER                                  │
//! ├ list pane ─────────┬ detail pane ──────┬ result pane ─┤
//! │ hammer             │ Skills used: N/A  │ hammer        │
//! │ table              │ Difficulty: 1     │ A claw ...    │
//! ├ legend ────────────┴───────────────────┴──────────────┤
//! └───────────────────────────────────────────────────────┘
//! ```
//!
//! The projector owns two small caches: the last recipe whose result info
//! was rendered, and the cursor position of the previous detail render
//! (used to decide where paging restarts when components run out).

use unicode_width::UnicodeWidthChar;

use crate::core::catalog::RecipeRef;
use crate::core::category::{category_name, subcategory_name};
use crate::core::recipe::format_time;
use crate::core::state::{SelectionState, TabMode};
use crate::core::stockpile::RequirementLine;
use crate::core::workshop::Workshop;

pub const MORE_MARKER: &str = "v (more)";
pub const NOT_MEMORIZED: &str = "Recipe not memorized yet";
pub const CRAFT_HINT: &str = "Press <ENTER> to attempt to craft object.";

/// Sizes the projector needs from the terminal layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Rows available to the recipe list.
    pub data_lines: usize,
    /// Rows available to the detail pane before `v (more)`.
    pub component_height: usize,
    /// Columns of the detail pane.
    pub detail_width: usize,
    /// Columns of a recipe name in the list pane.
    pub list_width: usize,
    /// Whether the result pane is shown.
    pub wide: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabLabel {
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabBarView {
    pub mode: TabMode,
    pub tabs: Vec<TabLabel>,
    pub subtabs: Vec<TabLabel>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub name: String,
    pub available: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPaneView {
    pub rows: Vec<ListRow>,
    /// Cursor row and total rows, for the scrollbar.
    pub position: usize,
    pub total: usize,
}

/// How a detail line should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Recipe is craftable.
    Normal,
    /// Recipe is not craftable.
    Dim,
    /// Requirement group the inventory satisfies.
    Met,
    /// Requirement group the inventory cannot satisfy.
    Unmet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLine {
    pub text: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailPaneView {
    pub lines: Vec<DetailLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub name: String,
    pub info: Vec<String>,
    pub available: bool,
}

#[derive(Debug, Default)]
pub struct Projector {
    last_result: Option<(RecipeRef, String, Vec<String>)>,
    previous_position: Option<(usize, Option<usize>, usize)>,
}

impl Projector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab_bar(&self, workshop: &Workshop, state: &SelectionState) -> TabBarView {
        let mode = state.tab_mode();
        match mode {
            TabMode::Normal => {
                let category = state.category(workshop);
                let tabs = workshop
                    .categories
                    .categories()
                    .iter()
                    .enumerate()
                    .map(|(i, id)| TabLabel {
                        label: category_name(id).to_string(),
                        selected: i == state.tab.index(),
                    })
                    .collect();
                let subtabs = workshop
                    .categories
                    .subcategories(category)
                    .iter()
                    .enumerate()
                    .map(|(i, id)| TabLabel {
                        label: subcategory_name(category, id).to_string(),
                        selected: state.subtab.is_some_and(|s| s.index() == i),
                    })
                    .collect();
                TabBarView { mode, tabs, subtabs }
            }
            TabMode::Filtered | TabMode::Batch => {
                let label = if mode == TabMode::Batch { "Batch" } else { "Searched" };
                TabBarView {
                    mode,
                    tabs: vec![TabLabel {
                        label: label.to_string(),
                        selected: true,
                    }],
                    subtabs: Vec::new(),
                }
            }
        }
    }

    pub fn list_pane(
        &self,
        workshop: &Workshop,
        state: &SelectionState,
        viewport: &Viewport,
    ) -> ListPaneView {
        let total = state.candidates.len();
        let rows = visible_range(state.line, total, viewport.data_lines)
            .map(|i| {
                let candidate = state.candidates[i];
                let recipe = workshop.catalog.recipe(candidate.recipe);
                let name = workshop.catalog.item_name(&recipe.result);
                let name = if state.batch {
                    format!("{:2}x {}", i + 1, name)
                } else {
                    name.to_string()
                };
                ListRow {
                    name: truncate_to_width(&name, viewport.list_width),
                    available: candidate.available,
                    selected: i == state.line,
                }
            })
            .collect();
        ListPaneView {
            rows,
            position: state.line,
            total,
        }
    }

    /// Detail text for the recipe under the cursor.
    ///
    /// Applies display-mode paging and writes the corrected mode back to the
    /// state when paging runs past the end of the component list.
    pub fn detail_pane(
        &mut self,
        workshop: &Workshop,
        state: &mut SelectionState,
        viewport: &Viewport,
    ) -> DetailPaneView {
        let Some(current) = state.current() else {
            return DetailPaneView::default();
        };
        let catalog = &workshop.catalog;
        let crafter = workshop.crafter.as_ref();
        let recipe = catalog.recipe(current.recipe);
        let tone = if current.available { Tone::Normal } else { Tone::Dim };
        let batch = state.multiplier();
        let width = viewport.detail_width.max(1);

        let mut components = requirement_lines(
            state
                .inventory
                .folded_components_list(catalog, &recipe.requirements, width, batch),
            tone,
        );
        if !crafter.knows_recipe(recipe) {
            components.push(DetailLine {
                text: NOT_MEMORIZED.to_string(),
                tone,
            });
        }

        let position = (
            state.tab.index(),
            state.subtab.map(|s| s.index()),
            state.line,
        );
        let mut offset = 0;
        if state.display_mode > 2 {
            offset = (state.display_mode as usize - 2) * viewport.component_height;
        }
        if components.len() < offset {
            offset = 0;
            state.display_mode = if self.previous_position != Some(position) { 2 } else { 0 };
        }
        self.previous_position = Some(position);

        let mut lines = Vec::new();
        let text = |text: String| DetailLine { text, tone };

        if state.display_mode == 0 {
            let skill_used = recipe.skill_used.as_deref();
            lines.push(text(format!(
                "Skills used: {}",
                skill_used.map_or("N/A", |s| catalog.skill_name(s))
            )));
            lines.push(text(format!(
                "Required skills: {}",
                recipe.required_skills_string(|s| catalog.skill_name(s).to_string())
            )));
            lines.push(text(format!("Difficulty: {}", recipe.difficulty)));
            lines.push(text(match skill_used {
                Some(skill) => format!("Your skill level: {}", crafter.skill_level(skill)),
                None => "Your skill level: N/A".to_string(),
            }));
            for line in textwrap::wrap(&format_time(recipe.batch_time(batch)), width) {
                lines.push(text(line.into_owned()));
            }
            if recipe.has_byproducts() {
                lines.push(text("Byproducts:".to_string()));
                for bp in &recipe.byproducts {
                    lines.push(text(format!(
                        "> {} {}",
                        i64::from(bp.amount) * i64::from(batch),
                        catalog.item_name(&bp.item)
                    )));
                }
            }
        }
        if state.display_mode <= 1 {
            lines.extend(requirement_lines(
                state
                    .inventory
                    .folded_tools_list(catalog, &recipe.requirements, width, batch),
                tone,
            ));
        }

        let mut printed = 0;
        for line in components.iter().skip(offset) {
            if lines.len() >= viewport.component_height {
                break;
            }
            lines.push(line.clone());
            printed += 1;
        }
        if lines.len() >= viewport.component_height && components.len() - offset > printed {
            lines.push(text(MORE_MARKER.to_string()));
        }

        DetailPaneView { lines }
    }

    /// Name and info of the result item, recomputed only when the recipe changes.
    pub fn result_pane(&mut self, workshop: &Workshop, state: &SelectionState) -> Option<ResultView> {
        let current = state.current()?;
        let cached = self
            .last_result
            .as_ref()
            .is_some_and(|(recipe, _, _)| *recipe == current.recipe);
        if !cached {
            let recipe = workshop.catalog.recipe(current.recipe);
            self.last_result = Some((
                current.recipe,
                workshop.catalog.item_name(&recipe.result).to_string(),
                workshop.catalog.item_info(&recipe.result),
            ));
        }
        self.last_result.as_ref().map(|(_, name, info)| ResultView {
            name: name.clone(),
            info: info.clone(),
            available: current.available,
        })
    }

    /// Recipe the result pane last rendered.
    pub fn last_rendered(&self) -> Option<RecipeRef> {
        self.last_result.as_ref().map(|(recipe, _, _)| *recipe)
    }
}

/// Title and body of the describe popup.
pub fn describe(workshop: &Workshop, recipe: RecipeRef) -> (String, String) {
    let recipe = workshop.catalog.recipe(recipe);
    let name = workshop.catalog.item_name(&recipe.result).to_string();
    let info = workshop.catalog.item_info(&recipe.result).join("\n");
    (name, info)
}

/// Key hints under the panes.
pub fn legend(state: &SelectionState, wide: bool) -> Vec<String> {
    let reset = if state.filter.is_empty() { "" } else { "[R]eset, " };
    let batch = if wide && state.batch { "cancel [b]atch" } else { "[b]atch" };
    let keys = format!(
        "[E]: Describe, [F]ind, {}[m]ode, {} [?] keybindings",
        reset, batch
    );
    if wide {
        vec![format!("{}  {}", CRAFT_HINT, keys)]
    } else {
        vec![keys, CRAFT_HINT.to_string()]
    }
}

/// Rows of the list to show so the cursor stays visible.
pub fn visible_range(line: usize, total: usize, data_lines: usize) -> std::ops::Range<usize> {
    if total <= data_lines {
        return 0..total;
    }
    let half = data_lines / 2;
    if line <= half {
        0..data_lines
    } else if line >= total - half {
        total - data_lines..total
    } else {
        line - half..line - half + data_lines
    }
}

/// Cut `text` to at most `width` display columns.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

fn requirement_lines(lines: Vec<RequirementLine>, tone: Tone) -> Vec<DetailLine> {
    lines
        .into_iter()
        .map(|line| DetailLine {
            text: line.text,
            tone: match line.met {
                None => tone,
                Some(true) => Tone::Met,
                Some(false) => Tone::Unmet,
            },
        })
        .collect()
}
