//! Demo state-flow tests
//!
//! Covers the copy and reveal affordances end to end through `update`,
//! with the clipboard injected so no real clipboard is touched.

mod common;

use std::time::{Duration, Instant};

use resterm::model::{BlockId, CodeTab};
use resterm::update::update_with_clipboard;
use resterm::{Cmd, Msg};

use common::{failing_clipboard, ok_clipboard, test_model};

#[test]
fn test_copy_sets_flag_immediately() {
    let mut model = test_model();
    let now = Instant::now();

    let cmds = update_with_clipboard(
        &mut model,
        Msg::CopyCode {
            demo: 0,
            block: BlockId::Frontend,
            now,
        },
        ok_clipboard,
    );

    assert!(cmds.contains(&Cmd::Redraw));
    assert!(model.states[0].copied(BlockId::Frontend).is_active(now));
    // Other blocks stay idle
    assert!(!model.states[0].copied(BlockId::Backend).is_active(now));
}

#[test]
fn test_copy_flag_resets_after_window() {
    let mut model = test_model();
    let now = Instant::now();
    let window = model.config.copy_reset();

    update_with_clipboard(
        &mut model,
        Msg::CopyCode {
            demo: 0,
            block: BlockId::Frontend,
            now,
        },
        ok_clipboard,
    );

    // Just before expiry: still copied, tick does nothing
    let almost = now + window - Duration::from_millis(1);
    assert!(update_with_clipboard(&mut model, Msg::Tick { now: almost }, ok_clipboard).is_empty());
    assert!(model.states[0].copied(BlockId::Frontend).is_active(almost));

    // At expiry: one transition, one redraw
    let expired = now + window;
    let cmds = update_with_clipboard(&mut model, Msg::Tick { now: expired }, ok_clipboard);
    assert_eq!(cmds, vec![Cmd::Redraw]);
    assert!(!model.states[0].copied(BlockId::Frontend).is_active(expired));

    // Further ticks are no-ops
    let later = expired + window;
    assert!(update_with_clipboard(&mut model, Msg::Tick { now: later }, ok_clipboard).is_empty());
}

#[test]
fn test_recopy_restarts_window() {
    let mut model = test_model();
    let now = Instant::now();
    let window = model.config.copy_reset();
    let msg_at = |now| Msg::CopyCode {
        demo: 0,
        block: BlockId::Frontend,
        now,
    };

    update_with_clipboard(&mut model, msg_at(now), ok_clipboard);
    let halfway = now + window / 2;
    update_with_clipboard(&mut model, msg_at(halfway), ok_clipboard);

    // The first deadline was replaced, not stacked
    let first_deadline = now + window;
    assert!(update_with_clipboard(&mut model, Msg::Tick { now: first_deadline }, ok_clipboard)
        .is_empty());
    assert!(model.states[0]
        .copied(BlockId::Frontend)
        .is_active(first_deadline));

    let second_deadline = halfway + window;
    let cmds =
        update_with_clipboard(&mut model, Msg::Tick { now: second_deadline }, ok_clipboard);
    assert_eq!(cmds, vec![Cmd::Redraw]);
}

#[test]
fn test_copy_failure_leaves_flag_idle() {
    let mut model = test_model();
    let now = Instant::now();

    let cmds = update_with_clipboard(
        &mut model,
        Msg::CopyCode {
            demo: 0,
            block: BlockId::Backend,
            now,
        },
        failing_clipboard,
    );

    // Non-fatal: no redraw, no armed flag
    assert!(cmds.is_empty());
    assert!(!model.states[0].copied(BlockId::Backend).is_active(now));
}

#[test]
fn test_copy_sends_original_text() {
    use std::cell::RefCell;

    let mut model = test_model();
    let now = Instant::now();
    let captured = RefCell::new(String::new());

    update_with_clipboard(
        &mut model,
        Msg::CopyCode {
            demo: 0,
            block: BlockId::Frontend,
            now,
        },
        |text| {
            *captured.borrow_mut() = text.to_string();
            Ok(())
        },
    );

    // The clipboard gets the plain snippet, no styling applied
    assert_eq!(*captured.borrow(), model.demos[0].frontend.code);
    assert!(!captured.borrow().contains('\u{1b}'));
}

#[test]
fn test_try_it_reveals_for_window_then_hides() {
    let mut model = test_model();
    let now = Instant::now();
    let window = model.config.reveal_window();

    let cmds = update_with_clipboard(&mut model, Msg::TryIt { demo: 2, now }, ok_clipboard);
    assert!(cmds.contains(&Cmd::Redraw));
    assert!(cmds.contains(&Cmd::ScheduleTick(now + window)));
    assert!(model.states[2].reveal.is_active(now));

    update_with_clipboard(&mut model, Msg::Tick { now: now + window }, ok_clipboard);
    assert!(!model.states[2].reveal.is_active(now + window));
}

#[test]
fn test_try_it_again_restarts_reveal_window() {
    let mut model = test_model();
    let now = Instant::now();
    let window = model.config.reveal_window();

    update_with_clipboard(&mut model, Msg::TryIt { demo: 0, now }, ok_clipboard);
    let halfway = now + window / 2;
    update_with_clipboard(&mut model, Msg::TryIt { demo: 0, now: halfway }, ok_clipboard);

    assert!(model.states[0].reveal.is_active(now + window));
    assert!(!model.states[0].reveal.is_active(halfway + window));
}

#[test]
fn test_try_it_without_mock_response_is_noop() {
    let mut model = test_model();
    model.demos[1].mock_response = None;
    let now = Instant::now();

    let cmds = update_with_clipboard(&mut model, Msg::TryIt { demo: 1, now }, ok_clipboard);
    assert!(cmds.is_empty());
    assert!(!model.states[1].reveal.is_active(now));
}

#[test]
fn test_select_tab_redraws_only_on_change() {
    let mut model = test_model();

    let cmds = update_with_clipboard(
        &mut model,
        Msg::SelectTab {
            demo: 0,
            tab: CodeTab::Backend,
        },
        ok_clipboard,
    );
    assert_eq!(cmds, vec![Cmd::Redraw]);
    assert_eq!(model.states[0].active_tab, CodeTab::Backend);

    // Selecting the already-active tab changes nothing
    let cmds = update_with_clipboard(
        &mut model,
        Msg::SelectTab {
            demo: 0,
            tab: CodeTab::Backend,
        },
        ok_clipboard,
    );
    assert!(cmds.is_empty());
}

#[test]
fn test_out_of_range_demo_is_ignored() {
    let mut model = test_model();
    let now = Instant::now();

    assert!(update_with_clipboard(&mut model, Msg::TryIt { demo: 99, now }, ok_clipboard).is_empty());
    assert!(update_with_clipboard(
        &mut model,
        Msg::CopyCode {
            demo: 99,
            block: BlockId::Frontend,
            now
        },
        ok_clipboard
    )
    .is_empty());
}
