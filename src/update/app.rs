//! App message handlers (terminal events, background results)

use crate::commands::Cmd;
use crate::messages::{AppMsg, LoadedData};
use crate::model::{AppModel, ViewMode};
use crate::storage::{reload_message, PollOutcome};
use crate::template::extract_variables;

/// Handle app messages (terminal events, background results)
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            model.nav.resize(width as usize, height as usize);
            model.relayout();
            Some(Cmd::Redraw)
        }

        AppMsg::DataLoaded(Ok(LoadedData { data, modified })) => {
            model.ui.is_loading = false;
            tracing::info!(
                "Loaded {} cards, {} categories from {}",
                data.cards.len(),
                data.categories.len(),
                model.data_path.display()
            );
            model.apply_data(data);
            model.last_modified = modified;
            model.nav.pin_preview();
            Some(Cmd::batch(vec![Cmd::Redraw, schedule_poll(model)]))
        }

        AppMsg::DataLoaded(Err(e)) => {
            model.ui.is_loading = false;
            tracing::warn!("Failed to load {}: {}", model.data_path.display(), e);
            model.ui.error = Some(e);
            Some(Cmd::Redraw)
        }

        AppMsg::SaveCompleted { card_id, result } => {
            model.ui.is_saving = false;
            match result {
                Ok(modified) => {
                    tracing::info!("Saved card {}", card_id);
                    if modified.is_some() {
                        model.last_modified = modified;
                    }
                    model.ui.set_transient("Card saved");
                }
                Err(e) => {
                    tracing::warn!("Failed to save card {}: {}", card_id, e);
                    model.ui.set_transient(format!("Save failed: {}", e));
                }
            }
            select_created(model, &card_id);
            Some(Cmd::Redraw)
        }

        AppMsg::PollTick => Some(Cmd::PollForChange {
            path: model.data_path.clone(),
            since: model.last_modified,
            generation: model.data_generation,
        }),

        AppMsg::FileChanged { generation, result } => {
            match result {
                Ok(PollOutcome::Changed { data, modified }) => {
                    if generation != model.data_generation {
                        tracing::debug!(
                            "Discarding stale reload (generation {} != {})",
                            generation,
                            model.data_generation
                        );
                        return Some(schedule_poll(model));
                    }
                    let previous = model.data.cards.len();
                    let current = data.cards.len();
                    model.apply_data(data);
                    model.last_modified = Some(modified);
                    model.data_generation += 1;
                    let message = reload_message(previous, current);
                    tracing::info!("{}", message);
                    model.ui.set_transient(message);
                    sync_detail(model);
                    Some(Cmd::batch(vec![Cmd::Redraw, schedule_poll(model)]))
                }
                Ok(PollOutcome::Unchanged) => Some(schedule_poll(model)),
                Err(e) => {
                    tracing::debug!("Change check failed: {}", e);
                    Some(schedule_poll(model))
                }
            }
        }

        AppMsg::CopyCompleted(result) => {
            match result {
                Ok(text) => model.ui.set_transient(text),
                Err(e) => {
                    tracing::warn!("Clipboard copy failed: {}", e);
                    model.ui.set_transient(format!("Copy failed: {}", e));
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::Quit => Some(Cmd::Quit),
    }
}

/// Keep an open detail view on its card after a reload
///
/// The selection follows the card; if the card was deleted the view closes.
fn sync_detail(model: &mut AppModel) {
    if model.nav.mode != ViewMode::Detail {
        return;
    }
    let Some(card) = model.detail_card() else {
        tracing::info!("Card open in detail view was removed externally");
        model.ui.detail.close();
        model.nav.detail_scroll = 0;
        if model.nav.set_mode(ViewMode::List) {
            model.nav.reset_scroll();
            model.rebuild_keep_selection();
        } else {
            model.relayout();
        }
        model.ui.set_transient("Card was removed by an external change");
        return;
    };
    let (id, variables) = (card.id.clone(), extract_variables(&card.content));
    model.ui.detail.refresh_variables(variables);
    if let Some(position) = model.position_of(&id) {
        model.nav.selected = position;
        model.nav.pin_preview();
        let len = model.visible_len();
        let layout = model.layout();
        model.nav.ensure_visible(len, &layout);
    }
}

fn schedule_poll(model: &AppModel) -> Cmd {
    Cmd::SchedulePoll {
        delay: model.config.poll_interval(),
    }
}

/// Back to the list with the new card selected (or the last one if filtered out)
fn select_created(model: &mut AppModel, card_id: &str) {
    if model.nav.set_mode(ViewMode::List) {
        model.nav.reset_scroll();
    }
    model.rebuild_visible();
    let len = model.visible_len();
    model.nav.selected = model
        .position_of(card_id)
        .unwrap_or_else(|| len.saturating_sub(1));
    model.nav.pin_preview();
    let layout = model.layout();
    model.nav.ensure_visible(len, &layout);
}
