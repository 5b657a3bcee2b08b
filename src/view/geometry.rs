//! Centralized geometry for rendering, navigation and hit-testing
//!
//! Every consumer derives its numbers from one [`ScreenLayout`], computed
//! fresh from the terminal size on each use. Nothing here is cached, so a
//! resize can never leave the renderer and the hit tester disagreeing.
//!
//! All functions are pure and work in terminal cells.

// ============================================================================
// Layout Constants
// ============================================================================

/// Fixed cell sizes shared by every view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMetrics {
    /// Text area inside a grid card border
    pub card_inner_width: usize,
    pub card_inner_height: usize,
    /// Border cells added around a card's inner area (both sides together)
    pub card_spacing: usize,
    pub max_grid_columns: usize,
    /// Terminal width above which the grid preview sits beside the cards
    pub wide_threshold: usize,
    /// Available height above which the stacked split becomes 40/60
    pub tall_threshold: usize,
    /// Rows before the content band (title + rule)
    pub header_height: usize,
    /// Rows after the content band (rule + status)
    pub footer_height: usize,
    /// Rows the content band never gets: header, footer and padding
    pub chrome_height: usize,
    /// Column titles plus separator above table rows
    pub table_header_rows: usize,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            card_inner_width: 27,
            card_inner_height: 4,
            card_spacing: 2,
            max_grid_columns: 4,
            wide_threshold: 120,
            tall_threshold: 50,
            header_height: 2,
            footer_height: 2,
            chrome_height: 6,
            table_header_rows: 2,
        }
    }
}

impl LayoutMetrics {
    /// Width of one grid cell including its border
    #[inline]
    pub fn card_cell_width(&self) -> usize {
        self.card_inner_width + self.card_spacing
    }

    /// Height of one grid cell including its border
    #[inline]
    pub fn card_cell_height(&self) -> usize {
        self.card_inner_height + self.card_spacing
    }
}

// ============================================================================
// Screen Layout
// ============================================================================

/// How items are arranged in the content band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Geometry {
    #[default]
    List,
    Grid,
    Table,
}

/// Where the preview pane sits, if it is shown at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewPlacement {
    Hidden,
    /// Below the items, starting at this row
    Stacked { top: usize },
    /// Right of the grid, starting at this column
    SideBySide { left: usize },
}

/// Rectangle in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl CellRect {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Resolved layout of one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub metrics: LayoutMetrics,
    pub geometry: Geometry,
    pub width: usize,
    pub height: usize,
    /// Height of the content band before any split
    pub available: usize,
    /// Height given to items when the stacked preview is visible
    pub primary_height: usize,
    pub preview: PreviewPlacement,
    /// Columns used by grid cards (the whole width unless side by side)
    pub grid_width: usize,
    /// Grid columns; 1 for the linear geometries
    pub cols: usize,
    /// List/table rows, or grid card rows
    pub rows: usize,
}

impl ScreenLayout {
    pub fn compute(
        metrics: LayoutMetrics,
        width: usize,
        height: usize,
        geometry: Geometry,
        show_preview: bool,
    ) -> Self {
        let available = height.saturating_sub(metrics.chrome_height);
        let primary_height = if available > metrics.tall_threshold {
            available * 2 / 5
        } else {
            available / 2
        };
        let header = metrics.header_height;

        let (preview, grid_width, cols, rows) = match geometry {
            Geometry::List => {
                let (preview, rows) = if show_preview {
                    let top = header + primary_height;
                    (PreviewPlacement::Stacked { top }, primary_height)
                } else {
                    (PreviewPlacement::Hidden, available)
                };
                (preview, width, 1, rows.max(1))
            }
            Geometry::Table => {
                let rows = available.saturating_sub(metrics.table_header_rows).max(1);
                (PreviewPlacement::Hidden, width, 1, rows)
            }
            Geometry::Grid => {
                let side_by_side = show_preview && width > metrics.wide_threshold;
                let grid_width = if side_by_side { width * 3 / 5 } else { width };
                let cols = (grid_width / metrics.card_cell_width())
                    .min(metrics.max_grid_columns)
                    .max(1);
                let (preview, grid_height) = if side_by_side {
                    (PreviewPlacement::SideBySide { left: grid_width }, available)
                } else if show_preview {
                    let top = header + primary_height;
                    (PreviewPlacement::Stacked { top }, primary_height)
                } else {
                    (PreviewPlacement::Hidden, available)
                };
                let rows = (grid_height / metrics.card_cell_height()).max(1);
                (preview, grid_width, cols, rows)
            }
        };

        Self {
            metrics,
            geometry,
            width,
            height,
            available,
            primary_height,
            preview,
            grid_width,
            cols,
            rows,
        }
    }

    #[inline]
    pub fn header(&self) -> usize {
        self.metrics.header_height
    }

    /// First row below the content band
    #[inline]
    pub fn content_bottom(&self) -> usize {
        self.height.saturating_sub(self.metrics.footer_height)
    }

    /// Rows between header and footer that respond to the pointer
    pub fn content_band(&self) -> CellRect {
        let top = self.header();
        CellRect::new(0, top, self.width, self.content_bottom().saturating_sub(top))
    }

    /// Items per page: rows for the linear geometries, rows for the grid
    #[inline]
    pub fn page_size(&self) -> usize {
        self.rows
    }

    /// Items that fit on screen at once
    #[inline]
    pub fn visible_items(&self) -> usize {
        self.rows * self.cols
    }

    pub fn has_preview(&self) -> bool {
        self.preview != PreviewPlacement::Hidden
    }

    /// Area the items are drawn into
    pub fn items_rect(&self) -> CellRect {
        let header = self.header();
        match (self.geometry, self.preview) {
            (Geometry::Table, _) => CellRect::new(0, header, self.width, self.available),
            (_, PreviewPlacement::Stacked { .. }) => {
                CellRect::new(0, header, self.grid_width, self.primary_height)
            }
            _ => CellRect::new(0, header, self.grid_width, self.available),
        }
    }

    /// Area of the preview pane, clipped to the content band
    pub fn preview_rect(&self) -> Option<CellRect> {
        let band = self.content_band();
        match self.preview {
            PreviewPlacement::Hidden => None,
            PreviewPlacement::Stacked { top } => {
                let height = self.content_bottom().saturating_sub(top);
                (height > 0).then(|| CellRect::new(0, top, self.width, height))
            }
            PreviewPlacement::SideBySide { left } => Some(CellRect::new(
                left,
                band.y,
                self.width.saturating_sub(left),
                band.height,
            )),
        }
    }

    /// Whether (x, y) falls on the preview pane
    pub fn is_over_preview(&self, x: usize, y: usize) -> bool {
        if y < self.header() || y >= self.content_bottom() {
            return false;
        }
        match self.preview {
            PreviewPlacement::Hidden => false,
            PreviewPlacement::Stacked { top } => y >= top,
            PreviewPlacement::SideBySide { left } => x >= left,
        }
    }

    /// Screen rectangle of grid cell `(row, col)` relative to the first visible row
    pub fn grid_cell_rect(&self, row: usize, col: usize) -> CellRect {
        let w = self.metrics.card_cell_width();
        let h = self.metrics.card_cell_height();
        CellRect::new(col * w, self.header() + row * h, w, h)
    }

    /// First screen row of linear items (below the table's column titles)
    pub fn first_item_row(&self) -> usize {
        match self.geometry {
            Geometry::Table => self.header() + self.metrics.table_header_rows,
            _ => self.header(),
        }
    }
}
