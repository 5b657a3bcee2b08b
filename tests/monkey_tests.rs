//! Property tests: random message sequences keep the selection invariants
//!
//! After every message the selection is inside the visible set (or 0 when
//! it is empty), the scroll window contains it, and grid scrolling stays
//! row-aligned. Rendering the final state must not panic.

mod common;

use std::time::{Duration, Instant, SystemTime};

use proptest::prelude::*;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use common::{sample_data, test_model};
use cellblocks::messages::{
    AppMsg, CreateMsg, Direction, FilterMsg, Msg, NavMsg, PointerEvent, PointerKind, SearchMsg,
    TableMsg, UiMsg,
};
use cellblocks::model::AppModel;
use cellblocks::query::SortKey;
use cellblocks::storage::PollOutcome;
use cellblocks::update::update;
use cellblocks::view::geometry::Geometry;

#[derive(Debug, Clone)]
enum Action {
    Send(Msg),
    /// External edit leaving this many cards
    Reload(usize),
    /// Click the same spot twice in quick succession
    DoubleClick(usize, usize),
}

// ──────────────────── strategies ────────────────────

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

fn arb_sort_key() -> impl Strategy<Value = SortKey> {
    prop_oneof![
        Just(SortKey::Title),
        Just(SortKey::Category),
        Just(SortKey::Created),
        Just(SortKey::Updated),
    ]
}

fn arb_pointer() -> impl Strategy<Value = Msg> {
    (
        prop_oneof![
            Just(PointerKind::LeftRelease),
            Just(PointerKind::WheelUp),
            Just(PointerKind::WheelDown),
        ],
        0usize..220,
        0usize..70,
    )
        .prop_map(|(kind, column, row)| {
            Msg::Pointer(PointerEvent {
                kind,
                column,
                row,
                at: Instant::now(),
            })
        })
}

fn arb_msg() -> impl Strategy<Value = Msg> {
    prop_oneof![
        4 => arb_direction().prop_map(Msg::move_selection),
        1 => Just(Msg::Nav(NavMsg::PageUp)),
        1 => Just(Msg::Nav(NavMsg::PageDown)),
        1 => Just(Msg::Nav(NavMsg::Home)),
        1 => Just(Msg::Nav(NavMsg::End)),
        1 => Just(Msg::Nav(NavMsg::PinPreview)),
        1 => Just(Msg::Nav(NavMsg::ScrollPreview(1))),
        2 => Just(Msg::Nav(NavMsg::CycleView)),
        1 => Just(Msg::Nav(NavMsg::OpenDetail)),
        1 => Just(Msg::Ui(UiMsg::ToggleHelp)),
        2 => Just(Msg::Ui(UiMsg::TogglePreview)),
        2 => Just(Msg::Ui(UiMsg::Escape)),
        2 => prop_oneof![Just('1'), Just('2'), Just('x'), Just(' ')].prop_map(Msg::search_char),
        1 => Just(Msg::Search(SearchMsg::DeleteBackward)),
        1 => Just(Msg::Search(SearchMsg::ClearFilters)),
        1 => arb_sort_key().prop_map(|k| Msg::Table(TableMsg::SortBy(k))),
        1 => Just(Msg::Filter(FilterMsg::Open)),
        1 => Just(Msg::Filter(FilterMsg::CursorDown)),
        1 => Just(Msg::Filter(FilterMsg::Toggle)),
        1 => Just(Msg::Create(CreateMsg::Open)),
        1 => Just(Msg::Create(CreateMsg::InsertChar('a'))),
        1 => Just(Msg::Create(CreateMsg::NextField)),
        1 => Just(Msg::Create(CreateMsg::Submit)),
        2 => (0u16..220, 0u16..70).prop_map(|(w, h)| Msg::resize(w, h)),
        3 => arb_pointer(),
    ]
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        20 => arb_msg().prop_map(Action::Send),
        1 => (0usize..40).prop_map(Action::Reload),
        1 => (0usize..200, 0usize..60).prop_map(|(c, r)| Action::DoubleClick(c, r)),
    ]
}

// ──────────────────── helpers ────────────────────

fn apply(model: &mut AppModel, action: Action) {
    match action {
        Action::Send(msg) => {
            update(model, msg);
        }
        Action::Reload(n) => {
            let generation = model.data_generation;
            update(
                model,
                Msg::App(AppMsg::FileChanged {
                    generation,
                    result: Ok(PollOutcome::Changed {
                        data: sample_data(n),
                        modified: SystemTime::now(),
                    }),
                }),
            );
        }
        Action::DoubleClick(column, row) => {
            let t0 = Instant::now();
            for at in [t0, t0 + Duration::from_millis(100)] {
                update(
                    model,
                    Msg::Pointer(PointerEvent {
                        kind: PointerKind::LeftRelease,
                        column,
                        row,
                        at,
                    }),
                );
            }
        }
    }
}

fn check_invariants(model: &AppModel) -> Result<(), TestCaseError> {
    let len = model.visible_len();
    let nav = &model.nav;
    let layout = model.layout();

    if len == 0 {
        prop_assert_eq!(nav.selected, 0);
        prop_assert_eq!(nav.scroll_offset, 0);
        prop_assert!(model.selected_card().is_none());
        return Ok(());
    }

    prop_assert!(nav.selected < len, "selected {} >= len {}", nav.selected, len);
    prop_assert!(nav.previewed < len, "previewed {} >= len {}", nav.previewed, len);
    prop_assert!(
        nav.selected >= nav.scroll_offset
            && nav.selected < nav.scroll_offset + layout.visible_items(),
        "selected {} outside window at {} of {}",
        nav.selected,
        nav.scroll_offset,
        layout.visible_items()
    );
    if layout.geometry == Geometry::Grid {
        prop_assert_eq!(nav.scroll_offset % layout.cols, 0);
    }
    Ok(())
}

// ──────────────────── properties ────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn random_sequences_keep_selection_valid(
        n in 0usize..60,
        actions in prop::collection::vec(arb_action(), 1..80),
    ) {
        let mut model = test_model(n, 100, 30);
        check_invariants(&model)?;
        for action in actions {
            apply(&mut model, action);
            check_invariants(&model)?;
        }
    }

    #[test]
    fn rendering_never_panics(
        n in 0usize..30,
        actions in prop::collection::vec(arb_action(), 0..40),
        (w, h) in (1u16..200, 1u16..60),
    ) {
        let mut model = test_model(n, 100, 30);
        for action in actions {
            apply(&mut model, action);
        }
        update(&mut model, Msg::resize(w, h));

        let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
        terminal
            .draw(|frame| cellblocks::view::render(frame, &model))
            .unwrap();
    }

    #[test]
    fn reload_keeps_generation_monotonic(sizes in prop::collection::vec(0usize..20, 1..10)) {
        let mut model = test_model(10, 80, 24);
        let mut previous = model.data_generation;
        for n in sizes {
            apply(&mut model, Action::Reload(n));
            prop_assert!(model.data_generation > previous);
            previous = model.data_generation;
            prop_assert_eq!(model.data.cards.len(), n);
            check_invariants(&model)?;
        }
    }
}
