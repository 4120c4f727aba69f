//! Tests for the shortcut provider.

use super::*;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, ModifierKeyCode};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn counter() -> (Arc<AtomicUsize>, impl FnMut() -> Option<Cmd> + Send + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let inner = count.clone();
    (count, move || {
        inner.fetch_add(1, Ordering::SeqCst);
        None
    })
}

fn event(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind)
}

fn ctrl() -> KeyCode {
    KeyCode::Modifier(ModifierKeyCode::LeftControl)
}

fn shift() -> KeyCode {
    KeyCode::Modifier(ModifierKeyCode::LeftShift)
}

/// Provider with CtrlCmd+C and H+I registered, as two separate consumers.
fn two_consumers() -> (ShortcutProvider, Arc<AtomicUsize>, Arc<AtomicUsize>) {
    let mut provider = ShortcutProvider::new();
    let (copy_count, copy) = counter();
    let (hi_count, hi) = counter();
    provider.register([Key::CtrlCmd, Key::Char('C')], copy).unwrap();
    provider.register([Key::Char('H'), Key::Char('I')], hi).unwrap();
    (provider, copy_count, hi_count)
}

#[test]
fn test_ctrl_c_fires_once() {
    let (mut provider, copy_count, hi_count) = two_consumers();

    provider.handle_key_event(&event(ctrl(), KeyEventKind::Press));
    provider.handle_key_event(&event(KeyCode::Char('c'), KeyEventKind::Press));
    provider.handle_key_event(&event(KeyCode::Char('c'), KeyEventKind::Release));
    provider.handle_key_event(&event(ctrl(), KeyEventKind::Release));

    assert_eq!(copy_count.load(Ordering::SeqCst), 1);
    assert_eq!(hi_count.load(Ordering::SeqCst), 0);
}

#[test]
fn test_non_shortcut_combination_calls_nothing() {
    let (mut provider, copy_count, hi_count) = two_consumers();

    provider.handle_key_event(&event(shift(), KeyEventKind::Press));
    provider.handle_key_event(&event(KeyCode::Char('c'), KeyEventKind::Press));
    provider.handle_key_event(&event(KeyCode::Char('c'), KeyEventKind::Release));
    provider.handle_key_event(&event(ctrl(), KeyEventKind::Release));

    assert_eq!(copy_count.load(Ordering::SeqCst), 0);
    assert_eq!(hi_count.load(Ordering::SeqCst), 0);
    assert!(provider.pressed().is_empty());
}

#[test]
fn test_press_order_does_not_matter() {
    let (mut provider, _, hi_count) = two_consumers();

    provider.handle_key_event(&event(KeyCode::Char('i'), KeyEventKind::Press));
    provider.handle_key_event(&event(KeyCode::Char('h'), KeyEventKind::Press));
    provider.handle_key_event(&event(KeyCode::Char('h'), KeyEventKind::Release));

    assert_eq!(hi_count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_repeat_is_idempotent() {
    let (mut provider, copy_count, _) = two_consumers();

    provider.handle_key_event(&event(ctrl(), KeyEventKind::Press));
    provider.handle_key_event(&event(ctrl(), KeyEventKind::Repeat));
    provider.handle_key_event(&event(KeyCode::Char('c'), KeyEventKind::Press));
    provider.handle_key_event(&event(KeyCode::Char('c'), KeyEventKind::Repeat));
    assert_eq!(provider.pressed().chord().len(), 2);

    provider.handle_key_event(&event(KeyCode::Char('c'), KeyEventKind::Release));
    assert_eq!(copy_count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_set_cleared_after_unmatched_release() {
    let (mut provider, copy_count, _) = two_consumers();

    provider.key_down(Key::Char('Z'));
    assert!(provider.key_up().is_none());
    assert!(provider.pressed().is_empty());

    // The stale Z must not leak into the next chord.
    provider.key_down(Key::CtrlCmd);
    provider.key_down(Key::Char('C'));
    provider.key_up();
    assert_eq!(copy_count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_duplicate_registration_fails_before_any_key() {
    struct Copy;
    impl ShortcutConsumer for Copy {
        fn register_shortcuts(&self, registry: &mut ShortcutRegistry) -> Result<(), ShortcutError> {
            registry.register([Key::CtrlCmd, Key::Char('C')], || None)
        }
    }

    let mut provider = ShortcutProvider::new();
    provider.mount(&Copy).unwrap();
    let err = provider.mount(&Copy).unwrap_err();
    assert!(matches!(err, ShortcutError::Duplicate { .. }));
    assert!(provider.pressed().is_empty());
}

#[test]
fn test_lowercase_registration_fires_and_collides() {
    let mut provider = ShortcutProvider::new();
    let (count, copy) = counter();
    provider.register([Key::CtrlCmd, Key::Char('c')], copy).unwrap();

    let err = provider
        .register([Key::Char('C'), Key::CtrlCmd], || None)
        .unwrap_err();
    assert!(matches!(err, ShortcutError::Duplicate { .. }));

    provider.handle_key_event(&event(ctrl(), KeyEventKind::Press));
    provider.handle_key_event(&event(KeyCode::Char('c'), KeyEventKind::Press));
    provider.handle_key_event(&event(KeyCode::Char('c'), KeyEventKind::Release));
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_inactive_provider_ignores_keys() {
    let (mut provider, copy_count, _) = two_consumers();

    provider.key_down(Key::CtrlCmd);
    provider.deactivate();
    assert!(!provider.is_active());
    assert!(provider.pressed().is_empty());

    provider.handle_key_event(&event(ctrl(), KeyEventKind::Press));
    provider.handle_key_event(&event(KeyCode::Char('c'), KeyEventKind::Press));
    provider.handle_key_event(&event(KeyCode::Char('c'), KeyEventKind::Release));
    assert_eq!(copy_count.load(Ordering::SeqCst), 0);

    provider.activate();
    provider.handle_key_event(&event(ctrl(), KeyEventKind::Press));
    provider.handle_key_event(&event(KeyCode::Char('c'), KeyEventKind::Press));
    provider.handle_key_event(&event(KeyCode::Char('c'), KeyEventKind::Release));
    assert_eq!(copy_count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_key_msg_synthesizes_release() {
    let (mut provider, copy_count, _) = two_consumers();

    let msg: Msg = Box::new(KeyMsg {
        key: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
    });
    provider.update(&msg);
    assert_eq!(copy_count.load(Ordering::SeqCst), 1);
    assert!(provider.pressed().is_empty());
}

#[test]
fn test_key_msg_without_synthesized_release_waits_for_event() {
    let mut provider = ShortcutProvider::with_config(ProviderConfig {
        synthesize_release: false,
    });
    let (count, cb) = counter();
    provider.register([Key::CtrlCmd, Key::Char('C')], cb).unwrap();

    provider.handle_key_msg(&KeyMsg {
        key: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
    });
    assert_eq!(count.load(Ordering::SeqCst), 0);

    provider.handle_key_event(&event(KeyCode::Char('c'), KeyEventKind::Release));
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_shift_modifier_prevents_match() {
    let (mut provider, copy_count, _) = two_consumers();

    provider.handle_key_msg(&KeyMsg {
        key: KeyCode::Char('C'),
        modifiers: KeyModifiers::CONTROL | KeyModifiers::SHIFT,
    });
    assert_eq!(copy_count.load(Ordering::SeqCst), 0);
}

#[test]
fn test_non_key_messages_are_ignored() {
    let (mut provider, _, _) = two_consumers();
    let msg: Msg = Box::new(42u32);
    assert!(provider.update(&msg).is_none());
}

#[tokio::test]
async fn test_callback_command_is_returned() {
    struct Jump;

    let mut provider = ShortcutProvider::new();
    provider
        .register([Key::CtrlCmd, Key::Char('K')], || {
            Some(Box::pin(async { Some(Box::new(Jump) as Msg) }) as Cmd)
        })
        .unwrap();

    provider.key_down(Key::CtrlCmd);
    provider.key_down(Key::Char('K'));
    let cmd = provider.key_up().expect("command");
    let msg = cmd.await.expect("message");
    assert!(msg.downcast_ref::<Jump>().is_some());
}
