//! The provider scope: owns a registry and turns key events into chords.

use super::chord::{Chord, Key, KeySet};
use super::registry::{Shortcut, ShortcutError, ShortcutRegistry};
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyEvent, KeyEventKind};

/// Options for a [`ShortcutProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Treat every `bubbletea_rs::KeyMsg` as a full press-and-release.
    ///
    /// bubbletea key messages carry no release information; with this off,
    /// `KeyMsg`s only add keys and a release has to arrive as a raw
    /// [`KeyEvent`] with [`KeyEventKind::Release`].
    pub synthesize_release: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            synthesize_release: true,
        }
    }
}

/// Anything that wants global chords registers them through this trait when
/// it is mounted under a provider.
pub trait ShortcutConsumer {
    /// Registers this consumer's chords. Errors propagate to the mount call.
    fn register_shortcuts(&self, registry: &mut ShortcutRegistry) -> Result<(), ShortcutError>;
}

/// Owns one [`ShortcutRegistry`] and the pressed-key set for a UI subtree.
///
/// The provider starts active. While inactive it ignores all key events,
/// which mirrors detaching global key listeners. Registrations survive
/// deactivation and are dropped with the provider; there is no per-chord
/// unregister.
///
/// ```rust
/// use chat_widgets::shortcut::{Key, ShortcutProvider};
/// use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, ModifierKeyCode};
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
///
/// let fired = Arc::new(AtomicBool::new(false));
/// let flag = fired.clone();
/// let mut provider = ShortcutProvider::new();
/// provider
///     .register([Key::CtrlCmd, Key::Char('C')], move || {
///         flag.store(true, Ordering::SeqCst);
///         None
///     })
///     .unwrap();
///
/// let ctrl = KeyCode::Modifier(ModifierKeyCode::LeftControl);
/// provider.handle_key_event(&KeyEvent::new_with_kind(ctrl, KeyModifiers::CONTROL, KeyEventKind::Press));
/// provider.handle_key_event(&KeyEvent::new_with_kind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press));
/// provider.handle_key_event(&KeyEvent::new_with_kind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Release));
/// assert!(fired.load(Ordering::SeqCst));
/// ```
#[derive(Debug)]
pub struct ShortcutProvider {
    registry: ShortcutRegistry,
    pressed: KeySet,
    active: bool,
    config: ProviderConfig,
}

impl Default for ShortcutProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortcutProvider {
    /// Creates an active provider with an empty registry.
    pub fn new() -> Self {
        Self::with_config(ProviderConfig::default())
    }

    /// Creates an active provider with the given options.
    pub fn with_config(config: ProviderConfig) -> Self {
        log::debug!("shortcut provider attached");
        Self {
            registry: ShortcutRegistry::new(),
            pressed: KeySet::new(),
            active: true,
            config,
        }
    }

    /// Current options.
    pub fn config(&self) -> ProviderConfig {
        self.config
    }

    /// The registry owned by this scope.
    pub fn registry(&self) -> &ShortcutRegistry {
        &self.registry
    }

    /// Mutable access for consumers that register directly.
    pub fn registry_mut(&mut self) -> &mut ShortcutRegistry {
        &mut self.registry
    }

    /// Registers `callback` for the chord formed by `keys`.
    pub fn register<F>(
        &mut self,
        keys: impl IntoIterator<Item = Key>,
        callback: F,
    ) -> Result<(), ShortcutError>
    where
        F: FnMut() -> Option<Cmd> + Send + 'static,
    {
        self.registry.register(keys, callback)
    }

    /// Registers a fully built shortcut.
    pub fn register_shortcut(&mut self, shortcut: Shortcut) -> Result<(), ShortcutError> {
        self.registry.register_shortcut(shortcut)
    }

    /// Lets `consumer` register its chords in this scope.
    pub fn mount<C: ShortcutConsumer + ?Sized>(&mut self, consumer: &C) -> Result<(), ShortcutError> {
        consumer.register_shortcuts(&mut self.registry)
    }

    /// Starts listening for key events.
    pub fn activate(&mut self) {
        if !self.active {
            log::debug!("shortcut provider attached");
        }
        self.active = true;
    }

    /// Stops listening and forgets any held keys.
    pub fn deactivate(&mut self) {
        if self.active {
            log::debug!("shortcut provider detached");
        }
        self.active = false;
        self.pressed.clear();
    }

    /// Whether key events are being observed.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Keys held since the last release.
    pub fn pressed(&self) -> &KeySet {
        &self.pressed
    }

    /// Records a key-down.
    pub fn key_down(&mut self, key: Key) {
        if self.active {
            self.pressed.press(key);
        }
    }

    /// Handles the first key-up of a sequence: matches the held chord, runs
    /// its callback if one is registered, then empties the pressed set.
    pub fn key_up(&mut self) -> Option<Cmd> {
        if !self.active {
            return None;
        }
        let chord: Chord = self.pressed.take();
        if chord.is_empty() {
            return None;
        }
        self.registry.dispatch(&chord)
    }

    /// Feeds a raw crossterm key event.
    ///
    /// Press and repeat events add the key and its reported modifiers to the
    /// pressed set. A repeat of a held key changes nothing. The first release
    /// matches the pressed set against the registry and then empties it,
    /// whether or not a shortcut fired. Keys that are not chord keys, such as
    /// arrows or Enter, add nothing to the set.
    ///
    /// Returns the command of the shortcut that fired, if any. Does nothing
    /// while the provider is inactive.
    ///
    /// # Examples
    ///
    /// ```
    /// use chat_widgets::shortcut::{Key, ShortcutProvider};
    /// use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
    /// use std::sync::atomic::{AtomicBool, Ordering};
    /// use std::sync::Arc;
    ///
    /// let fired = Arc::new(AtomicBool::new(false));
    /// let flag = fired.clone();
    /// let mut provider = ShortcutProvider::new();
    /// provider
    ///     .register([Key::CtrlCmd, Key::Char('K')], move || {
    ///         flag.store(true, Ordering::SeqCst);
    ///         None
    ///     })
    ///     .unwrap();
    ///
    /// let k = |kind| KeyEvent::new_with_kind(KeyCode::Char('k'), KeyModifiers::CONTROL, kind);
    /// provider.handle_key_event(&k(KeyEventKind::Press));
    /// assert!(!fired.load(Ordering::SeqCst));
    /// provider.handle_key_event(&k(KeyEventKind::Release));
    /// assert!(fired.load(Ordering::SeqCst));
    /// assert!(provider.pressed().is_empty());
    /// ```
    pub fn handle_key_event(&mut self, event: &KeyEvent) -> Option<Cmd> {
        if !self.active {
            return None;
        }
        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.press_with_modifiers(event.code, event.modifiers);
                None
            }
            KeyEventKind::Release => self.key_up(),
        }
    }

    /// Feeds a bubbletea key message.
    pub fn handle_key_msg(&mut self, msg: &KeyMsg) -> Option<Cmd> {
        if !self.active {
            return None;
        }
        self.press_with_modifiers(msg.key, msg.modifiers);
        if self.config.synthesize_release {
            self.key_up()
        } else {
            None
        }
    }

    /// Routes any bubbletea message; non-key messages are ignored.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key_msg(key_msg);
        }
        if let Some(event) = msg.downcast_ref::<KeyEvent>() {
            return self.handle_key_event(event);
        }
        None
    }

    fn press_with_modifiers(
        &mut self,
        code: crossterm::event::KeyCode,
        modifiers: crossterm::event::KeyModifiers,
    ) {
        for key in Key::from_modifiers(modifiers) {
            self.key_down(key);
        }
        if let Some(key) = Key::from_key_code(code) {
            self.key_down(key);
        }
    }
}

impl Drop for ShortcutProvider {
    fn drop(&mut self) {
        if self.active {
            log::debug!("shortcut provider detached");
        }
    }
}
