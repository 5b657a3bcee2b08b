//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::time::{Duration, Instant};

use cellblocks::config::AppConfig;
use cellblocks::messages::{AppMsg, LoadedData, Msg, NavMsg, PointerEvent, PointerKind};
use cellblocks::model::{AppModel, Card, CardData, Category, ViewMode};
use cellblocks::update::update;

pub const CATEGORY_IDS: [&str; 3] = ["cat-code", "cat-prompts", "cat-notes"];

/// Three categories: Code, Prompts, Notes
pub fn sample_categories() -> Vec<Category> {
    [("Code", "#00ff41"), ("Prompts", "#ff00ff"), ("Notes", "#00a6ff")]
        .iter()
        .zip(CATEGORY_IDS)
        .map(|((name, color), id)| Category {
            id: id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
            hidden: false,
            parent_category_id: None,
        })
        .collect()
}

/// `n` cards titled "Card 0".."Card n-1", categories assigned round robin
pub fn sample_cards(n: usize) -> Vec<Card> {
    (0..n)
        .map(|i| Card {
            id: format!("card-{i}"),
            title: format!("Card {i}"),
            content: format!("Content of card {i}"),
            category_id: CATEGORY_IDS[i % CATEGORY_IDS.len()].to_string(),
            created_at: 1_700_000_000_000 + i as i64 * 1000,
            updated_at: 1_700_000_000_000 + i as i64 * 1000,
            image_id: None,
        })
        .collect()
}

pub fn sample_data(n: usize) -> CardData {
    CardData {
        version: Some("1.0".into()),
        exported_at: None,
        cards: sample_cards(n),
        categories: sample_categories(),
    }
}

pub fn loaded(data: CardData) -> Msg {
    Msg::App(AppMsg::DataLoaded(Ok(LoadedData {
        data,
        modified: None,
    })))
}

/// A loaded model with `n` cards at the given terminal size
pub fn test_model(n: usize, width: usize, height: usize) -> AppModel {
    let mut model = AppModel::new(AppConfig::default(), width, height);
    update(&mut model, loaded(sample_data(n)));
    model
}

/// Same as [`test_model`] but already cycled to `mode`
pub fn test_model_in(mode: ViewMode, n: usize, width: usize, height: usize) -> AppModel {
    let mut model = test_model(n, width, height);
    while model.nav.mode != mode {
        update(&mut model, Msg::Nav(NavMsg::CycleView));
    }
    model
}

pub fn click_at(column: usize, row: usize, at: Instant) -> Msg {
    Msg::Pointer(PointerEvent {
        kind: PointerKind::LeftRelease,
        column,
        row,
        at,
    })
}

pub fn wheel_at(down: bool, column: usize, row: usize) -> Msg {
    Msg::Pointer(PointerEvent {
        kind: if down {
            PointerKind::WheelDown
        } else {
            PointerKind::WheelUp
        },
        column,
        row,
        at: Instant::now(),
    })
}

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Selected item lies inside the scroll window
pub fn selection_visible(model: &AppModel) -> bool {
    let layout = model.layout();
    let nav = &model.nav;
    nav.selected >= nav.scroll_offset && nav.selected < nav.scroll_offset + layout.visible_items()
}

pub fn selected_title(model: &AppModel) -> String {
    model
        .selected_card()
        .map(|c| c.title.clone())
        .unwrap_or_default()
}
