//! Single-line text input used for quick search and filter values.
//!
//! A deliberately small input: value editing, cursor movement, placeholder,
//! and focus state. The grid forwards key messages here while a search or a
//! filter value is being typed.

use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;

/// Single-line text input model.
pub struct Model {
    /// Prompt rendered before the text, e.g. "> ".
    pub prompt: String,
    /// Placeholder shown while the value is empty.
    pub placeholder: String,
    /// Style for the prompt.
    pub prompt_style: Style,
    /// Style for the typed text.
    pub text_style: Style,
    /// Style for the placeholder text.
    pub placeholder_style: Style,
    /// Maximum number of characters accepted; 0 means unlimited.
    pub char_limit: usize,

    value: Vec<char>,
    pos: usize,
    focus: bool,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            placeholder: String::new(),
            prompt_style: Style::new(),
            text_style: Style::new(),
            placeholder_style: Style::new().foreground(AdaptiveColor {
                Light: "#9B9B9B",
                Dark: "#5C5C5C",
            }),
            char_limit: 0,
            value: Vec::new(),
            pos: 0,
            focus: false,
        }
    }
}

/// Creates a new text input with default settings.
pub fn new() -> Model {
    Model::default()
}

impl Model {
    /// The current value.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Replaces the value and moves the cursor to the end.
    pub fn set_value(&mut self, s: &str) {
        self.value = s.chars().collect();
        if self.char_limit > 0 {
            self.value.truncate(self.char_limit);
        }
        self.pos = self.value.len();
    }

    /// Clears the value.
    pub fn reset(&mut self) {
        self.value.clear();
        self.pos = 0;
    }

    /// Sets the placeholder text.
    pub fn set_placeholder(&mut self, s: &str) {
        self.placeholder = s.to_string();
    }

    /// Current cursor position in characters.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamped to the value bounds.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
    }

    /// Moves the cursor to the start of the value.
    pub fn cursor_start(&mut self) {
        self.pos = 0;
    }

    /// Moves the cursor to the end of the value.
    pub fn cursor_end(&mut self) {
        self.pos = self.value.len();
    }

    /// Handles a key message while focused.
    ///
    /// Unfocused inputs ignore everything, so the embedding component can
    /// forward messages unconditionally.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }
        let Some(key_msg) = msg.downcast_ref::<KeyMsg>() else {
            return None;
        };

        match key_msg.key {
            KeyCode::Char('a') if key_msg.modifiers == KeyModifiers::CONTROL => {
                self.cursor_start();
            }
            KeyCode::Char('e') if key_msg.modifiers == KeyModifiers::CONTROL => {
                self.cursor_end();
            }
            KeyCode::Char('u') if key_msg.modifiers == KeyModifiers::CONTROL => {
                self.value.drain(..self.pos);
                self.pos = 0;
            }
            KeyCode::Char(c) if !key_msg.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.char_limit == 0 || self.value.len() < self.char_limit {
                    self.value.insert(self.pos, c);
                    self.pos += 1;
                }
            }
            KeyCode::Backspace => {
                if self.pos > 0 {
                    self.pos -= 1;
                    self.value.remove(self.pos);
                }
            }
            KeyCode::Delete => {
                if self.pos < self.value.len() {
                    self.value.remove(self.pos);
                }
            }
            KeyCode::Left => {
                self.pos = self.pos.saturating_sub(1);
            }
            KeyCode::Right => {
                self.pos = (self.pos + 1).min(self.value.len());
            }
            KeyCode::Home => self.cursor_start(),
            KeyCode::End => self.cursor_end(),
            _ => {}
        }
        None
    }

    /// Renders the prompt, value (or placeholder), and cursor.
    pub fn view(&self) -> String {
        let prompt = self.prompt_style.clone().render(&self.prompt);

        if self.value.is_empty() && !self.placeholder.is_empty() && !self.focus {
            return format!(
                "{}{}",
                prompt,
                self.placeholder_style.clone().render(&self.placeholder)
            );
        }

        if !self.focus {
            return format!("{}{}", prompt, self.text_style.clone().render(&self.value()));
        }

        // Focused: draw a block cursor at the insertion point.
        let cursor_style = Style::new().reverse(true);
        let before: String = self.value[..self.pos].iter().collect();
        let (at, after) = if self.pos < self.value.len() {
            (
                self.value[self.pos].to_string(),
                self.value[self.pos + 1..].iter().collect::<String>(),
            )
        } else {
            (" ".to_string(), String::new())
        };

        format!(
            "{}{}{}{}",
            prompt,
            self.text_style.clone().render(&before),
            cursor_style.render(&at),
            self.text_style.clone().render(&after)
        )
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(m: &mut Model, code: KeyCode) {
        let msg: Msg = Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        });
        m.update(&msg);
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut input = new();
        input.focus();
        for c in "ana".chars() {
            press(&mut input, KeyCode::Char(c));
        }
        assert_eq!(input.value(), "ana");
        assert_eq!(input.position(), 3);
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let mut input = new();
        input.focus();
        input.set_value("abc");
        press(&mut input, KeyCode::Left);
        press(&mut input, KeyCode::Backspace);
        assert_eq!(input.value(), "ac");
    }

    #[test]
    fn unfocused_input_ignores_keys() {
        let mut input = new();
        press(&mut input, KeyCode::Char('x'));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn char_limit_is_enforced() {
        let mut input = new();
        input.char_limit = 2;
        input.focus();
        for c in "abcd".chars() {
            press(&mut input, KeyCode::Char(c));
        }
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn ctrl_u_clears_to_start() {
        let mut input = new();
        input.focus();
        input.set_value("hello");
        let msg: Msg = Box::new(KeyMsg {
            key: KeyCode::Char('u'),
            modifiers: KeyModifiers::CONTROL,
        });
        input.update(&msg);
        assert_eq!(input.value(), "");
    }
}
