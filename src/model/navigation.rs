//! Selection and scroll state machine
//!
//! Indices here are positions in the visible set, never dataset indices.
//! Every mutating method leaves `selected` inside `[0, len)` (or 0 when the
//! set is empty) and the scroll window around it for the given layout.

use crate::view::geometry::{Geometry, ScreenLayout};

/// Which screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Grid,
    Table,
    Detail,
    CategoryFilter,
    CardCreate,
}

impl ViewMode {
    /// The item arrangement for browse modes; `None` for full-screen modes
    pub fn geometry(self) -> Option<Geometry> {
        match self {
            ViewMode::List => Some(Geometry::List),
            ViewMode::Grid => Some(Geometry::Grid),
            ViewMode::Table => Some(Geometry::Table),
            ViewMode::Detail | ViewMode::CategoryFilter | ViewMode::CardCreate => None,
        }
    }

    pub fn is_browse(self) -> bool {
        self.geometry().is_some()
    }

    /// `g` cycle order; secondary modes are left alone
    pub fn next_browse(self) -> Self {
        match self {
            ViewMode::List => ViewMode::Grid,
            ViewMode::Grid => ViewMode::Table,
            ViewMode::Table => ViewMode::List,
            other => other,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::List => "List",
            ViewMode::Grid => "Grid",
            ViewMode::Table => "Table",
            ViewMode::Detail => "Detail",
            ViewMode::CategoryFilter => "Filter",
            ViewMode::CardCreate => "New Card",
        }
    }
}

/// Everything that decides what part of the visible set is on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub mode: ViewMode,
    /// Arrangement of the last browse mode, kept while a secondary screen is up
    pub browse_geometry: Geometry,
    pub selected: usize,
    /// Card shown in the preview pane; only moves on explicit intent
    pub previewed: usize,
    /// First visible item; row-aligned in the grid
    pub scroll_offset: usize,
    pub preview_scroll: usize,
    pub detail_scroll: usize,
    pub width: usize,
    pub height: usize,
    pub show_preview: bool,
}

impl Navigation {
    pub fn new(width: usize, height: usize, show_preview: bool) -> Self {
        Self {
            mode: ViewMode::List,
            browse_geometry: Geometry::List,
            selected: 0,
            previewed: 0,
            scroll_offset: 0,
            preview_scroll: 0,
            detail_scroll: 0,
            width,
            height,
            show_preview,
        }
    }

    /// Switch screens; returns true when the item arrangement changed
    pub fn set_mode(&mut self, mode: ViewMode) -> bool {
        self.mode = mode;
        match mode.geometry() {
            Some(geometry) if geometry != self.browse_geometry => {
                self.browse_geometry = geometry;
                true
            }
            _ => false,
        }
    }

    /// Keep `selected` and `previewed` inside `[0, len)`
    pub fn clamp(&mut self, len: usize) {
        let last = len.saturating_sub(1);
        self.selected = self.selected.min(last);
        self.previewed = self.previewed.min(last);
    }

    /// Move the scroll window so the selection is visible
    ///
    /// The window is also pulled back so the last page stays full after the
    /// set shrinks or the terminal grows.
    pub fn ensure_visible(&mut self, len: usize, layout: &ScreenLayout) {
        match layout.geometry {
            Geometry::Grid => {
                let cols = layout.cols;
                let rows = layout.rows;
                let row = self.selected / cols;
                let mut first = self.scroll_offset / cols;
                if row < first {
                    first = row;
                } else if row >= first + rows {
                    first = row + 1 - rows;
                }
                let total_rows = len.div_ceil(cols);
                first = first.min(total_rows.saturating_sub(rows));
                self.scroll_offset = first * cols;
            }
            Geometry::List | Geometry::Table => {
                let visible = layout.rows;
                if self.selected < self.scroll_offset {
                    self.scroll_offset = self.selected;
                } else if self.selected >= self.scroll_offset + visible {
                    self.scroll_offset = self.selected + 1 - visible;
                }
                self.scroll_offset = self.scroll_offset.min(len.saturating_sub(visible));
            }
        }
    }

    /// Clamp then re-window; used after every change to set, size or geometry
    pub fn rewindow(&mut self, len: usize, layout: &ScreenLayout) {
        self.clamp(len);
        self.ensure_visible(len, layout);
    }

    /// List/Table step by `delta` items
    pub fn move_linear(&mut self, delta: isize, len: usize, layout: &ScreenLayout) {
        if len == 0 {
            self.selected = 0;
            self.scroll_offset = 0;
            return;
        }
        let target = self.selected as isize + delta;
        self.selected = target.clamp(0, len as isize - 1) as usize;
        self.ensure_visible(len, layout);
    }

    /// Grid step by whole columns and rows; edges are no-ops
    pub fn move_grid(&mut self, dx: isize, dy: isize, len: usize, layout: &ScreenLayout) {
        if len == 0 {
            self.selected = 0;
            self.scroll_offset = 0;
            return;
        }
        let cols = layout.cols as isize;
        let max_row = (len as isize - 1) / cols;
        let row = (self.selected as isize / cols + dy).clamp(0, max_row);
        let col = (self.selected as isize % cols + dx).clamp(0, cols - 1);
        self.selected = ((row * cols + col) as usize).min(len - 1);
        self.ensure_visible(len, layout);
    }

    /// Step in the current geometry; used by arrow keys and the wheel
    pub fn step(&mut self, dx: isize, dy: isize, len: usize, layout: &ScreenLayout) {
        match layout.geometry {
            Geometry::Grid => self.move_grid(dx, dy, len, layout),
            Geometry::List | Geometry::Table => self.move_linear(dy, len, layout),
        }
    }

    pub fn page_up(&mut self, len: usize, layout: &ScreenLayout) {
        let page = layout.page_size() as isize;
        self.step(0, -page, len, layout);
    }

    pub fn page_down(&mut self, len: usize, layout: &ScreenLayout) {
        let page = layout.page_size() as isize;
        self.step(0, page, len, layout);
    }

    pub fn home(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
    }

    /// Select the last item with the last page full
    pub fn end(&mut self, len: usize, layout: &ScreenLayout) {
        if len == 0 {
            self.home();
            return;
        }
        self.selected = len - 1;
        self.scroll_offset = match layout.geometry {
            Geometry::Grid => {
                let total_rows = len.div_ceil(layout.cols);
                total_rows.saturating_sub(layout.rows) * layout.cols
            }
            Geometry::List | Geometry::Table => len.saturating_sub(layout.rows),
        };
    }

    /// Show the selected card in the preview pane
    pub fn pin_preview(&mut self) {
        self.previewed = self.selected;
        self.preview_scroll = 0;
    }

    pub fn scroll_preview(&mut self, delta: isize) {
        self.preview_scroll = self.preview_scroll.saturating_add_signed(delta);
    }

    pub fn scroll_detail(&mut self, delta: isize) {
        self.detail_scroll = self.detail_scroll.saturating_add_signed(delta);
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }

    /// Geometry changes start from the top
    pub fn reset_scroll(&mut self) {
        self.scroll_offset = 0;
    }
}
