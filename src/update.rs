//! Update functions - state transitions for the Elm-style architecture
//!
//! `update` is the single entry point for mutations: it applies a message
//! to the model and reports what side effects took place.

use tracing::{debug, warn};

use crate::clipboard;
use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

/// Apply a message to the model, performing clipboard writes as needed
pub fn update(model: &mut AppModel, msg: Msg) -> Vec<Cmd> {
    update_with_clipboard(model, msg, clipboard::copy_text)
}

/// Like [`update`], with the clipboard write injectable.
///
/// Tests substitute a recording closure here; production code goes through
/// [`update`], which wires in the real system clipboard.
pub fn update_with_clipboard(
    model: &mut AppModel,
    msg: Msg,
    copy: impl FnOnce(&str) -> anyhow::Result<()>,
) -> Vec<Cmd> {
    match msg {
        Msg::SelectTab { demo, tab } => {
            let Some(state) = model.states.get_mut(demo) else {
                return vec![];
            };
            if state.active_tab == tab {
                return vec![];
            }
            state.active_tab = tab;
            vec![Cmd::Redraw]
        }

        Msg::TryIt { demo, now } => {
            // Nothing to reveal without a canned payload
            let Some((card, _)) = model.demo(demo) else {
                return vec![];
            };
            if card.mock_response.is_none() {
                debug!(demo, "try-it ignored: no mock response configured");
                return vec![];
            }
            let window = model.config.reveal_window();
            let state = &mut model.states[demo];
            // Re-triggering restarts the window (last write wins)
            state.reveal.trigger(now, window);
            let deadline = state.reveal.deadline().unwrap_or(now);
            vec![Cmd::Redraw, Cmd::ScheduleTick(deadline)]
        }

        Msg::CopyCode { demo, block, now } => {
            let Some((card, _)) = model.demo(demo) else {
                return vec![];
            };
            let Some(snippet) = card.snippet_for(block) else {
                return vec![];
            };
            // The original, unhighlighted text goes to the clipboard
            if let Err(e) = copy(&snippet.code) {
                warn!(demo, ?block, "clipboard write failed: {e:#}");
                return vec![];
            }
            let window = model.config.copy_reset();
            let state = &mut model.states[demo];
            let flag = state.copied_mut(block);
            flag.trigger(now, window);
            let deadline = flag.deadline().unwrap_or(now);
            vec![Cmd::Redraw, Cmd::ScheduleTick(deadline)]
        }

        Msg::Tick { now } => {
            if model.expire_flags(now) {
                vec![Cmd::Redraw]
            } else {
                vec![]
            }
        }
    }
}
