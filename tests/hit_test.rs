//! Hit-testing against the shared screen layout

use cellblocks::view::geometry::{Geometry, LayoutMetrics, ScreenLayout};
use cellblocks::view::hit_test::{hit_test, hit_test_ui, HitTarget};

fn layout(width: usize, height: usize, geometry: Geometry, preview: bool) -> ScreenLayout {
    ScreenLayout::compute(LayoutMetrics::default(), width, height, geometry, preview)
}

// ========================================================================
// Grid
// ========================================================================

#[test]
fn test_grid_click_lands_on_item_five() {
    // 3 columns, 7 items: [0 1 2] [3 4 5] [6]
    let l = layout(100, 30, Geometry::Grid, false);
    assert_eq!(l.cols, 3);
    // Row 1, column 2: x in 58..87, y in 8..14
    assert_eq!(hit_test(60, 10, &l, 0, 7), Some(5));
    assert_eq!(hit_test(58, 8, &l, 0, 7), Some(5));
    assert_eq!(hit_test(86, 13, &l, 0, 7), Some(5));
}

#[test]
fn test_grid_misses() {
    let l = layout(100, 30, Geometry::Grid, false);
    // Header rows
    assert_eq!(hit_test(10, 0, &l, 0, 7), None);
    assert_eq!(hit_test(10, 1, &l, 0, 7), None);
    // Empty cell after the last item
    assert_eq!(hit_test(30, 15, &l, 0, 7), None);
    // Right of the last column
    assert_eq!(hit_test(90, 3, &l, 0, 7), None);
    // Footer
    assert_eq!(hit_test(10, 28, &l, 0, 7), None);
    assert_eq!(hit_test(10, 29, &l, 0, 7), None);
}

#[test]
fn test_grid_uses_scroll_rows() {
    let l = layout(100, 30, Geometry::Grid, false);
    // Scrolled down two rows; top-left cell is item 6
    assert_eq!(hit_test(0, 2, &l, 6, 40), Some(6));
    assert_eq!(hit_test(30, 9, &l, 6, 40), Some(10));
}

#[test]
fn test_grid_below_last_row_misses() {
    // 24 available rows: 4 card rows, band rows 2..26 and two spare rows
    let l = layout(100, 30, Geometry::Grid, false);
    assert_eq!(l.rows, 4);
    assert_eq!(hit_test(5, 26, &l, 0, 40), None);
}

#[test]
fn test_side_by_side_preview_is_not_a_card() {
    let l = layout(150, 30, Geometry::Grid, true);
    assert_eq!(l.grid_width, 90);
    assert_eq!(hit_test(95, 5, &l, 0, 20), None);
    assert_eq!(hit_test_ui(95, 5, &l, 0, 20), Some(HitTarget::Preview));
    assert_eq!(hit_test_ui(5, 5, &l, 0, 20), Some(HitTarget::Item(0)));
}

#[test]
fn test_stacked_preview_takes_priority() {
    // 24 rows: 18 available, 9 list rows, preview from row 11
    let l = layout(80, 24, Geometry::List, true);
    assert_eq!(hit_test_ui(5, 10, &l, 0, 20), Some(HitTarget::Item(8)));
    assert_eq!(hit_test_ui(5, 11, &l, 0, 20), Some(HitTarget::Preview));
    assert_eq!(hit_test_ui(5, 22, &l, 0, 20), None);
}

// ========================================================================
// List and table
// ========================================================================

#[test]
fn test_list_rows_map_from_scroll() {
    let l = layout(80, 24, Geometry::List, false);
    assert_eq!(hit_test(0, 2, &l, 0, 30), Some(0));
    assert_eq!(hit_test(0, 2, &l, 5, 30), Some(5));
    assert_eq!(hit_test(79, 19, &l, 5, 30), Some(22));
    // Past the 18 rows
    assert_eq!(hit_test(0, 20, &l, 0, 30), None);
    // Past the end of a short list
    assert_eq!(hit_test(0, 6, &l, 0, 3), None);
}

#[test]
fn test_table_skips_column_titles() {
    let l = layout(100, 24, Geometry::Table, false);
    assert_eq!(hit_test(0, 2, &l, 0, 30), None);
    assert_eq!(hit_test(0, 3, &l, 0, 30), None);
    assert_eq!(hit_test(0, 4, &l, 0, 30), Some(0));
    assert_eq!(hit_test(0, 5, &l, 10, 30), Some(11));
}

#[test]
fn test_table_never_has_preview() {
    let l = layout(200, 60, Geometry::Table, true);
    assert!(!l.has_preview());
    assert_eq!(hit_test_ui(150, 40, &l, 0, 100), Some(HitTarget::Item(36)));
}
