//! Benchmarks for selection movement, hit-testing and rendering
//!
//! Run with: cargo bench navigation

mod support;
use support::{make_grid_model, make_model};

use cellblocks::messages::{AppMsg, Direction, Msg, NavMsg};
use cellblocks::update::update;
use cellblocks::view::geometry::{Geometry, LayoutMetrics, ScreenLayout};
use cellblocks::view::hit_test::hit_test_ui;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

// ============================================================================
// Update-only benchmarks
// ============================================================================

#[divan::bench(args = [100, 1000])]
fn list_move_down(iterations: usize) {
    let mut model = make_model(10_000, 120, 40);

    for _ in 0..iterations {
        let cmd = update(&mut model, Msg::move_selection(Direction::Down));
        divan::black_box(cmd);
    }

    divan::black_box(&model);
}

#[divan::bench(args = [100, 1000])]
fn grid_move_zigzag(iterations: usize) {
    let mut model = make_grid_model(10_000, 160, 50);
    let pattern = [Direction::Right, Direction::Down, Direction::Left, Direction::Down];

    for i in 0..iterations {
        let cmd = update(&mut model, Msg::move_selection(pattern[i % pattern.len()]));
        divan::black_box(cmd);
    }
}

#[divan::bench]
fn grid_page_through(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| make_grid_model(10_000, 160, 50))
        .bench_local_values(|mut model| {
            for _ in 0..50 {
                update(&mut model, Msg::Nav(NavMsg::PageDown));
            }
            update(&mut model, Msg::Nav(NavMsg::End));
            update(&mut model, Msg::Nav(NavMsg::Home));
            model
        });
}

#[divan::bench(args = [(200, 60), (40, 20)])]
fn resize_rewindow(bencher: divan::Bencher, size: (u16, u16)) {
    bencher
        .with_inputs(|| {
            let mut model = make_grid_model(10_000, 120, 40);
            update(&mut model, Msg::Nav(NavMsg::End));
            model
        })
        .bench_local_values(|mut model| {
            update(&mut model, Msg::App(AppMsg::Resize(size.0, size.1)));
            model
        });
}

// ============================================================================
// Layout and hit-testing
// ============================================================================

#[divan::bench]
fn layout_compute_grid_with_preview() {
    let layout = ScreenLayout::compute(
        LayoutMetrics::default(),
        divan::black_box(200),
        divan::black_box(60),
        Geometry::Grid,
        true,
    );
    divan::black_box(layout);
}

#[divan::bench]
fn hit_test_sweep() {
    let layout = ScreenLayout::compute(LayoutMetrics::default(), 160, 50, Geometry::Grid, true);
    let mut hits = 0usize;
    for row in 0..50 {
        for column in 0..160 {
            if hit_test_ui(column, row, &layout, 120, 10_000).is_some() {
                hits += 1;
            }
        }
    }
    divan::black_box(hits);
}

// ============================================================================
// Render phase
// ============================================================================

#[divan::bench(args = ["list", "grid", "table"])]
fn render_frame(bencher: divan::Bencher, mode: &str) {
    let cycles = match mode {
        "grid" => 1,
        "table" => 2,
        _ => 0,
    };
    let mut model = make_model(5_000, 160, 50);
    for _ in 0..cycles {
        update(&mut model, Msg::Nav(NavMsg::CycleView));
    }
    let mut terminal = match Terminal::new(TestBackend::new(160, 50)) {
        Ok(terminal) => terminal,
        Err(e) => panic!("test backend: {e}"),
    };

    bencher.bench_local(|| {
        let frame = terminal.draw(|frame| cellblocks::view::render(frame, &model));
        divan::black_box(frame.is_ok());
    });
}
