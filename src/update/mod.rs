//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod create;
mod detail;
mod filter;
mod mouse;
mod navigation;
mod search;
mod ui;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::NavSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use create::update_create;
pub use detail::update_detail;
pub use filter::update_filter;
pub use mouse::update_pointer;
pub use navigation::{update_nav, update_table};
pub use search::update_search;
pub use ui::update_ui;

/// Wheel and Shift+arrow step for the preview and detail panes
pub const SCROLL_STEP: usize = 3;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    // A failed load leaves nothing to browse; only app messages get through
    if model.is_blocked() && !matches!(msg, Msg::App(_)) {
        return None;
    }

    // The help overlay swallows everything except UI toggles and async results
    if model.ui.show_help && !matches!(msg, Msg::Ui(_) | Msg::App(_)) {
        return None;
    }

    match msg {
        Msg::Nav(m) => navigation::update_nav(model, m),
        Msg::Search(m) => search::update_search(model, m),
        Msg::Ui(m) => ui::update_ui(model, m),
        Msg::Table(m) => navigation::update_table(model, m),
        Msg::Filter(m) => filter::update_filter(model, m),
        Msg::Create(m) => create::update_create(model, m),
        Msg::Detail(m) => detail::update_detail(model, m),
        Msg::Pointer(event) => mouse::update_pointer(model, event),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after navigation state and logs diffs for debugging.
/// Filters out noisy messages like ExpireMessages from logging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::UiMsg;

    let is_noisy = matches!(&msg, Msg::Ui(UiMsg::ExpireMessages(_)));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = NavSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = NavSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "nav", %diff, "state changed");
    }

    result
}

/// Get a display name for a message type
///
/// Async results carrying whole datasets are shortened to their variant.
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    use crate::messages::AppMsg;

    match msg {
        Msg::Nav(m) => format!("Nav::{:?}", m),
        Msg::Search(m) => format!("Search::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
        Msg::Table(m) => format!("Table::{:?}", m),
        Msg::Filter(m) => format!("Filter::{:?}", m),
        Msg::Create(m) => format!("Create::{:?}", m),
        Msg::Detail(m) => format!("Detail::{:?}", m),
        Msg::Pointer(e) => format!("Pointer::{:?}({}, {})", e.kind, e.column, e.row),
        Msg::App(AppMsg::DataLoaded(r)) => format!("App::DataLoaded(ok={})", r.is_ok()),
        Msg::App(AppMsg::FileChanged { generation, result }) => {
            format!("App::FileChanged(gen={}, ok={})", generation, result.is_ok())
        }
        Msg::App(m) => format!("App::{:?}", m),
    }
}
