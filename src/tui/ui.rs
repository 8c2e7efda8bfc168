//! Screen layout and the per-frame draw.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ tabs (2 rows)                                                │
//! ├──────────────┬───────────────────────────┬───────────────────┤
//! │ recipe list  │ detail                    │ result (wide only)│
//! ├──────────────┴───────────────────────────┴───────────────────┤
//! │ legend (1 row wide, 2 rows narrow)                           │
//! └──────────────────────────────────────────────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::config::WideLayout;
use crate::core::projector::{self, Viewport};
use crate::core::state::SelectionState;
use crate::core::workshop::Workshop;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Legend, Popup, RecipeDetail, RecipeList, ResultPane, TabBar};

/// Terminal width from which `WideLayout::Auto` shows the result pane.
pub const WIDE_MIN_WIDTH: u16 = 110;
pub const RESULT_PANE_WIDTH: u16 = 36;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub tabs: Rect,
    pub list: Rect,
    pub detail: Rect,
    pub result: Option<Rect>,
    pub legend: Rect,
}

pub fn is_wide(width: u16, mode: WideLayout) -> bool {
    match mode {
        WideLayout::Always => true,
        WideLayout::Never => false,
        WideLayout::Auto => width >= WIDE_MIN_WIDTH,
    }
}

pub fn screen_layout(area: Rect, list_width: u16, wide: bool, legend_lines: u16) -> ScreenLayout {
    use Constraint::{Length, Min};
    let [tabs, main, legend] = Layout::vertical([Length(2), Min(0), Length(legend_lines)]).areas(area);

    let list_column = Length(list_width.saturating_add(2));
    if wide {
        let [list, detail, result] =
            Layout::horizontal([list_column, Min(0), Length(RESULT_PANE_WIDTH)]).areas(main);
        ScreenLayout {
            tabs,
            list,
            detail,
            result: Some(result),
            legend,
        }
    } else {
        let [list, detail] = Layout::horizontal([list_column, Min(0)]).areas(main);
        ScreenLayout {
            tabs,
            list,
            detail,
            result: None,
            legend,
        }
    }
}

impl ScreenLayout {
    /// Sizes the projector works with, derived from the pane rects.
    pub fn viewport(&self) -> Viewport {
        Viewport {
            data_lines: usize::from(self.list.height.saturating_sub(2)),
            component_height: usize::from(self.detail.height),
            detail_width: usize::from(self.detail.width.saturating_sub(2)),
            list_width: usize::from(self.list.width.saturating_sub(2)),
            wide: self.result.is_some(),
        }
    }
}

pub fn draw_ui(frame: &mut Frame, workshop: &Workshop, state: &mut SelectionState, tui: &mut TuiState) {
    let area = frame.area();
    let wide = is_wide(area.width, tui.wide_layout);
    let legend = projector::legend(state, wide);
    let legend_lines = u16::try_from(legend.len()).unwrap_or(1);
    let layout = screen_layout(area, tui.list_width, wide, legend_lines);
    let viewport = layout.viewport();

    let tabs = tui.projector.tab_bar(workshop, state);
    TabBar::new(&tabs).render(frame, layout.tabs);

    let list = tui.projector.list_pane(workshop, state, &viewport);
    RecipeList::new(&list).render(frame, layout.list);

    let detail = tui.projector.detail_pane(workshop, state, &viewport);
    RecipeDetail::new(&detail).render(frame, layout.detail);

    if let Some(result_area) = layout.result {
        if tui.projector.last_rendered() != state.current().map(|c| c.recipe) {
            tui.result_scroll = 0;
        }
        let result = tui.projector.result_pane(workshop, state);
        let mut pane = ResultPane::new(result.as_ref(), tui.result_scroll);
        pane.render(frame, result_area);
        tui.result_scroll = pane.scroll;
    }

    Legend::new(&legend).render(frame, layout.legend);

    if let Some(prompt) = tui.filter_prompt.as_mut() {
        prompt.render(frame, area);
    }
    if let Some(popup) = tui.popup.as_ref() {
        Popup::new(popup).render(frame, area);
    }
}
