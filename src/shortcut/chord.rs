//! Key tokens, canonical chords, and the pressed-key set.

use crossterm::event::{KeyCode, KeyModifiers, ModifierKeyCode};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One key of a chord.
///
/// Character keys are stored uppercase so `c` and `C` name the same key.
/// Control and the platform command key collapse into [`Key::CtrlCmd`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character, uppercased.
    Char(char),
    /// Control, or Super/Meta/Command.
    CtrlCmd,
    /// Shift.
    Shift,
    /// Alt/Option.
    Alt,
}

impl Key {
    /// Builds a character key, uppercasing it.
    ///
    /// Returns `None` for control characters.
    pub fn char(c: char) -> Option<Self> {
        if c.is_control() {
            return None;
        }
        Some(Key::Char(upper(c)))
    }

    /// The same key in canonical form: character keys uppercased.
    ///
    /// Chords and the pressed-key set store keys in this form, so
    /// `Key::Char('c')` and `Key::Char('C')` are one key.
    pub fn canonical(self) -> Self {
        match self {
            Key::Char(c) => Key::Char(upper(c)),
            other => other,
        }
    }

    /// Classifies a crossterm key code into a chord key.
    ///
    /// Named keys such as arrows or Enter are not chord keys and yield `None`.
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Char(c) => Key::char(c),
            KeyCode::Modifier(m) => match m {
                ModifierKeyCode::LeftControl
                | ModifierKeyCode::RightControl
                | ModifierKeyCode::LeftSuper
                | ModifierKeyCode::RightSuper
                | ModifierKeyCode::LeftMeta
                | ModifierKeyCode::RightMeta => Some(Key::CtrlCmd),
                ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift => Some(Key::Shift),
                ModifierKeyCode::LeftAlt | ModifierKeyCode::RightAlt => Some(Key::Alt),
                _ => None,
            },
            _ => None,
        }
    }

    /// Keys implied by the modifier flags a terminal reports with a key event.
    pub fn from_modifiers(modifiers: KeyModifiers) -> Vec<Self> {
        let mut keys = Vec::new();
        if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER | KeyModifiers::META)
        {
            keys.push(Key::CtrlCmd);
        }
        if modifiers.contains(KeyModifiers::SHIFT) {
            keys.push(Key::Shift);
        }
        if modifiers.contains(KeyModifiers::ALT) {
            keys.push(Key::Alt);
        }
        keys
    }

    /// Canonical token text.
    pub fn token(&self) -> String {
        match self {
            Key::Char(c) => c.to_string(),
            Key::CtrlCmd => "CtrlCmd".to_string(),
            Key::Shift => "Shift".to_string(),
            Key::Alt => "Alt".to_string(),
        }
    }
}

// Characters whose uppercase form is several chars (`ß` -> `SS`) stay as
// they are rather than collapsing onto another key.
fn upper(c: char) -> char {
    let mut up = c.to_uppercase();
    match (up.next(), up.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}

// Ordered by token text so a sorted set is already canonical.
impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        self.token().cmp(&other.token())
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Error returned when parsing a chord from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChordParseError {
    /// The input had no keys.
    #[error("empty chord")]
    Empty,
    /// A part could not be mapped to a key.
    #[error("unknown key `{0}`")]
    UnknownKey(String),
}

/// A canonical set of keys held together.
///
/// Two chords are equal when they hold the same keys, regardless of the
/// order the keys were listed or pressed in. The canonical identifier is the
/// sorted key tokens joined with `+`.
///
/// ```rust
/// use chat_widgets::shortcut::{Chord, Key};
///
/// let a = Chord::new([Key::CtrlCmd, Key::Char('C')]);
/// let b: Chord = "c+ctrl".parse().unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "C+CtrlCmd");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Chord {
    keys: BTreeSet<Key>,
}

impl Chord {
    /// Delimiter between tokens in the canonical identifier.
    pub const DELIMITER: &'static str = "+";

    /// Builds a chord from any collection of keys.
    ///
    /// Character keys are uppercased, so `[CtrlCmd, Char('c')]` and
    /// `[Char('C'), CtrlCmd]` build the same chord.
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().map(Key::canonical).collect(),
        }
    }

    /// Keys in canonical order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.keys.iter()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the chord holds no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<String> = self.keys.iter().map(Key::token).collect();
        f.write_str(&tokens.join(Self::DELIMITER))
    }
}

impl FromIterator<Key> for Chord {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl FromStr for Chord {
    type Err = ChordParseError;

    /// Parses text such as `"Ctrl+C"`, `"cmd+shift+k"` or the canonical
    /// `"C+CtrlCmd"`. Matching is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ChordParseError::Empty);
        }

        let mut keys = BTreeSet::new();
        for part in s.split('+') {
            let part = part.trim();
            let key = match part.to_lowercase().as_str() {
                "ctrl" | "control" | "cmd" | "command" | "meta" | "super" | "ctrlcmd" => {
                    Key::CtrlCmd
                }
                "shift" => Key::Shift,
                "alt" | "option" => Key::Alt,
                _ => {
                    let mut chars = part.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => {
                            Key::char(c).ok_or_else(|| ChordParseError::UnknownKey(part.into()))?
                        }
                        _ => return Err(ChordParseError::UnknownKey(part.to_string())),
                    }
                }
            };
            keys.insert(key);
        }

        Ok(Self { keys })
    }
}

/// The keys currently held down.
///
/// Filled by consecutive key-down events and drained on the first key-up.
/// Inserting a key that is already held is a no-op.
#[derive(Debug, Clone, Default)]
pub struct KeySet {
    pressed: BTreeSet<Key>,
}

impl KeySet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a key-down.
    pub fn press(&mut self, key: Key) {
        self.pressed.insert(key.canonical());
    }

    /// Whether `key` is held.
    pub fn contains(&self, key: Key) -> bool {
        self.pressed.contains(&key.canonical())
    }

    /// Whether nothing is held.
    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty()
    }

    /// The chord formed by the held keys.
    pub fn chord(&self) -> Chord {
        Chord {
            keys: self.pressed.clone(),
        }
    }

    /// Returns the held chord and empties the set.
    pub fn take(&mut self) -> Chord {
        Chord {
            keys: std::mem::take(&mut self.pressed),
        }
    }

    /// Forgets every held key.
    pub fn clear(&mut self) {
        self.pressed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_keys_are_case_insensitive() {
        assert_eq!(Key::char('c'), Some(Key::Char('C')));
        assert_eq!(Key::char('C'), Some(Key::Char('C')));
        assert_eq!(Key::char('\u{7}'), None);
    }

    #[test]
    fn test_classify_modifier_codes() {
        assert_eq!(
            Key::from_key_code(KeyCode::Modifier(ModifierKeyCode::LeftControl)),
            Some(Key::CtrlCmd)
        );
        assert_eq!(
            Key::from_key_code(KeyCode::Modifier(ModifierKeyCode::RightSuper)),
            Some(Key::CtrlCmd)
        );
        assert_eq!(
            Key::from_key_code(KeyCode::Modifier(ModifierKeyCode::LeftShift)),
            Some(Key::Shift)
        );
        assert_eq!(
            Key::from_key_code(KeyCode::Modifier(ModifierKeyCode::RightAlt)),
            Some(Key::Alt)
        );
        assert_eq!(Key::from_key_code(KeyCode::Enter), None);
        assert_eq!(Key::from_key_code(KeyCode::Up), None);
    }

    #[test]
    fn test_modifier_flags() {
        let keys = Key::from_modifiers(KeyModifiers::CONTROL | KeyModifiers::SHIFT);
        assert_eq!(keys, vec![Key::CtrlCmd, Key::Shift]);
        assert!(Key::from_modifiers(KeyModifiers::NONE).is_empty());
    }

    #[test]
    fn test_chord_order_independent() {
        let a = Chord::new([Key::Char('C'), Key::CtrlCmd]);
        let b = Chord::new([Key::CtrlCmd, Key::Char('C')]);
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "C+CtrlCmd");
        assert_eq!(Chord::new([Key::Char('I'), Key::Char('H')]).to_string(), "H+I");
    }

    #[test]
    fn test_parse_chord() {
        let c: Chord = "Ctrl+Shift+k".parse().unwrap();
        assert_eq!(c, Chord::new([Key::CtrlCmd, Key::Shift, Key::Char('K')]));
        assert_eq!(" ".parse::<Chord>(), Err(ChordParseError::Empty));
        assert_eq!(
            "ctrl+enter".parse::<Chord>(),
            Err(ChordParseError::UnknownKey("enter".to_string()))
        );
    }

    #[test]
    fn test_canonical_text_round_trips() {
        let c: Chord = "C+CtrlCmd".parse().unwrap();
        assert_eq!(c.to_string(), "C+CtrlCmd");
    }

    #[test]
    fn test_key_set_is_idempotent_and_drains() {
        let mut set = KeySet::new();
        set.press(Key::CtrlCmd);
        set.press(Key::Char('C'));
        set.press(Key::Char('C'));
        assert_eq!(set.chord().len(), 2);

        let chord = set.take();
        assert_eq!(chord.to_string(), "C+CtrlCmd");
        assert!(set.is_empty());
    }

    #[test]
    fn test_char_keys_fold_case_in_chords() {
        let lower = Chord::new([Key::CtrlCmd, Key::Char('c')]);
        assert_eq!(lower, Chord::new([Key::Char('C'), Key::CtrlCmd]));
        assert_eq!(lower.to_string(), "C+CtrlCmd");

        let mut set = KeySet::new();
        set.press(Key::Char('c'));
        assert!(set.contains(Key::Char('C')));
        set.press(Key::CtrlCmd);
        assert_eq!(set.take(), lower);
    }

    #[test]
    fn test_multi_char_uppercase_keeps_the_char() {
        assert_eq!(Key::char('ß'), Some(Key::Char('ß')));
        assert_ne!(Key::char('ß'), Key::char('s'));
        assert_eq!(Key::Char('é').canonical(), Key::Char('É'));
    }
}
