//! Type-safe key bindings shared by all grid components.
//!
//! A [`Binding`] groups one or more key presses under a single action together
//! with the help text shown in the footer. Components expose their bindings
//! through a [`KeyMap`] so the help renderer can stay generic.

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single concrete key press: a key code plus its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Modifier keys held during the press.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

/// Help text attached to a binding: the key label and a short description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Display label for the key(s), e.g. "↑/k".
    pub key: String,
    /// Short action description, e.g. "up".
    pub desc: String,
}

/// A key binding: the presses that trigger it, its help text, and whether it
/// is currently enabled.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    /// Help entry rendered by the `help` module.
    pub help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from a list of key presses.
    ///
    /// Accepts plain [`KeyCode`]s or `(KeyCode, KeyModifiers)` tuples:
    ///
    /// ```
    /// use datagrid_widgets::key::Binding;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let quit = Binding::new(vec![KeyCode::Char('q')]);
    /// let force = Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)]);
    /// assert!(!quit.is_disabled());
    /// # let _ = force;
    /// ```
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help label and description (builder pattern).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Disables the binding; disabled bindings never match and are hidden
    /// from help.
    pub fn with_disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Enables or disables the binding in place.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether this binding is currently disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Returns true when the key message triggers this binding.
    ///
    /// A press with no declared modifiers also matches shifted characters, so
    /// `Char('G')` bindings behave the same across terminals that do and do
    /// not report SHIFT.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        !self.disabled
            && self.keys.iter().any(|kp| {
                kp.code == msg.key
                    && (kp.modifiers == msg.modifiers
                        || (kp.modifiers == KeyModifiers::NONE
                            && msg.modifiers == KeyModifiers::SHIFT))
            })
    }
}

/// Convenience for checking a message against a binding.
pub fn matches(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(msg)
}

/// Source of key bindings for help rendering.
///
/// Components implement this so `help::Model` can produce a context-sensitive
/// footer without knowing anything about the component itself.
pub trait KeyMap {
    /// The essential bindings for the compact, single-line help view.
    fn short_help(&self) -> Vec<&Binding>;

    /// All bindings, grouped into columns, for the expanded help view.
    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![self.short_help()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn matches_any_declared_key() {
        let b = Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]).with_help("↑/k", "up");
        assert!(b.matches(&key(KeyCode::Up)));
        assert!(b.matches(&key(KeyCode::Char('k'))));
        assert!(!b.matches(&key(KeyCode::Down)));
    }

    #[test]
    fn modifier_bindings_require_modifiers() {
        let b = Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)]);
        assert!(!b.matches(&key(KeyCode::Char('c'))));
        assert!(b.matches(&KeyMsg {
            key: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        }));
    }

    #[test]
    fn shifted_char_matches_plain_binding() {
        let b = Binding::new(vec![KeyCode::Char('G')]);
        assert!(b.matches(&KeyMsg {
            key: KeyCode::Char('G'),
            modifiers: KeyModifiers::SHIFT,
        }));
    }

    #[test]
    fn disabled_binding_never_matches() {
        let b = Binding::new(vec![KeyCode::Enter]).with_disabled();
        assert!(!b.matches(&key(KeyCode::Enter)));
    }
}
