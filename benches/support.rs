//! Shared helpers for benchmarks

use cellblocks::config::AppConfig;
use cellblocks::messages::{AppMsg, LoadedData, Msg, NavMsg};
use cellblocks::model::{AppModel, Card, CardData, Category};
use cellblocks::update::update;

const CATEGORIES: [(&str, &str, &str); 4] = [
    ("cat-code", "Code", "#00ff41"),
    ("cat-prompts", "Prompts", "#ff00ff"),
    ("cat-notes", "Notes", "#00a6ff"),
    ("cat-shell", "Shell", "#ffaa00"),
];

/// A dataset with `count` cards of a few paragraphs each
#[allow(dead_code)]
pub fn make_data(count: usize) -> CardData {
    let categories = CATEGORIES
        .iter()
        .map(|(id, name, color)| Category {
            id: id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
            hidden: false,
            parent_category_id: None,
        })
        .collect();

    let cards = (0..count)
        .map(|i| Card {
            id: format!("{i:032x}"),
            title: format!("Snippet {i} for host-{}", i % 97),
            content: format!(
                "ssh {{{{user}}}}@host-{} -p {{{{port|22}}}}\n{}",
                i % 97,
                "The quick brown fox jumps over the lazy dog. ".repeat(4)
            ),
            category_id: CATEGORIES[i % CATEGORIES.len()].0.to_string(),
            created_at: 1_700_000_000_000 + (i as i64 * 7919) % 1_000_000,
            updated_at: 1_700_000_000_000 + i as i64 * 1000,
            image_id: None,
        })
        .collect();

    CardData {
        version: Some("1.0".into()),
        exported_at: None,
        cards,
        categories,
    }
}

/// A loaded model at the given terminal size
#[allow(dead_code)]
pub fn make_model(count: usize, width: usize, height: usize) -> AppModel {
    let mut model = AppModel::new(AppConfig::default(), width, height);
    update(
        &mut model,
        Msg::App(AppMsg::DataLoaded(Ok(LoadedData {
            data: make_data(count),
            modified: None,
        }))),
    );
    model
}

/// Same as [`make_model`] but switched to the grid
#[allow(dead_code)]
pub fn make_grid_model(count: usize, width: usize, height: usize) -> AppModel {
    let mut model = make_model(count, width, height);
    update(&mut model, Msg::Nav(NavMsg::CycleView));
    model
}
