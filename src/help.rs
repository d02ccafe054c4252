//! Compact help footer generated from key bindings.
//!
//! Renders a single "q quit • / search • ? more" style line from any
//! [`key::KeyMap`], or a multi-column layout when expanded. Disabled
//! bindings are hidden automatically, and the line is truncated with an
//! ellipsis when it would exceed the configured width.

use crate::key;
use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthStr;

const ELLIPSIS: &str = "…";

/// Styles for the help line elements.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style for key labels.
    pub short_key: Style,
    /// Style for action descriptions.
    pub short_desc: Style,
    /// Style for the separator between entries.
    pub short_separator: Style,
    /// Style for the truncation ellipsis.
    pub ellipsis: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let key_style = Style::new().foreground(AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        });
        let desc_style = Style::new().foreground(AdaptiveColor {
            Light: "#B2B2B2",
            Dark: "#4A4A4A",
        });
        let sep_style = Style::new().foreground(AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        });
        Self {
            short_key: key_style,
            short_desc: desc_style,
            short_separator: sep_style.clone(),
            ellipsis: sep_style,
        }
    }
}

/// Help view model.
#[derive(Debug, Clone)]
pub struct Model {
    /// Maximum render width in cells; 0 disables truncation.
    pub width: usize,
    /// When true, `view` renders the expanded multi-column layout.
    pub show_all: bool,
    /// Element styles.
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            width: 0,
            show_all: false,
            styles: Styles::default(),
        }
    }
}

impl Model {
    /// Creates a help model with default styling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum width (builder pattern).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders help for the given key map, honoring `show_all`.
    pub fn view<K: key::KeyMap>(&self, keymap: &K) -> String {
        if self.show_all {
            self.full_help_view(keymap.full_help())
        } else {
            self.short_help_view(keymap.short_help())
        }
    }

    /// Renders the compact single-line help view.
    pub fn short_help_view(&self, bindings: Vec<&key::Binding>) -> String {
        let mut out = String::new();
        let mut used = 0usize;
        let separator = self.styles.short_separator.clone().render(" • ");

        for binding in bindings {
            if binding.is_disabled() || binding.help.key.is_empty() {
                continue;
            }

            let entry = format!(
                "{} {}",
                self.styles.short_key.clone().render(&binding.help.key),
                self.styles.short_desc.clone().render(&binding.help.desc)
            );
            let entry_width = binding.help.key.width() + 1 + binding.help.desc.width();
            let sep_width = if out.is_empty() { 0 } else { 3 };

            if self.width > 0 && used + sep_width + entry_width > self.width {
                out.push_str(&self.styles.ellipsis.clone().render(ELLIPSIS));
                break;
            }

            if !out.is_empty() {
                out.push_str(&separator);
            }
            out.push_str(&entry);
            used += sep_width + entry_width;
        }
        out
    }

    /// Renders the expanded multi-column help view.
    ///
    /// Each group becomes a column with its key labels left-aligned to the
    /// widest label in the group.
    pub fn full_help_view(&self, groups: Vec<Vec<&key::Binding>>) -> String {
        let mut columns: Vec<Vec<String>> = Vec::new();
        let mut heights = 0usize;

        for group in groups {
            let visible: Vec<&key::Binding> = group
                .into_iter()
                .filter(|b| !b.is_disabled() && !b.help.key.is_empty())
                .collect();
            if visible.is_empty() {
                continue;
            }

            let label_width = visible.iter().map(|b| b.help.key.width()).max().unwrap_or(0);
            let lines: Vec<String> = visible
                .iter()
                .map(|b| {
                    let pad = " ".repeat(label_width - b.help.key.width());
                    format!(
                        "{}{} {}",
                        self.styles.short_key.clone().render(&b.help.key),
                        pad,
                        self.styles.short_desc.clone().render(&b.help.desc)
                    )
                })
                .collect();
            heights = heights.max(lines.len());
            columns.push(lines);
        }

        let mut rows = Vec::with_capacity(heights);
        for i in 0..heights {
            let row: Vec<String> = columns
                .iter()
                .map(|col| col.get(i).cloned().unwrap_or_default())
                .collect();
            rows.push(row.join("    "));
        }
        rows.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use lipgloss_extras::lipgloss::strip_ansi;

    struct Map {
        up: key::Binding,
        down: key::Binding,
        quit: key::Binding,
    }

    impl key::KeyMap for Map {
        fn short_help(&self) -> Vec<&key::Binding> {
            vec![&self.up, &self.down, &self.quit]
        }

        fn full_help(&self) -> Vec<Vec<&key::Binding>> {
            vec![vec![&self.up, &self.down], vec![&self.quit]]
        }
    }

    fn map() -> Map {
        Map {
            up: key::Binding::new(vec![KeyCode::Up]).with_help("↑", "up"),
            down: key::Binding::new(vec![KeyCode::Down]).with_help("↓", "down"),
            quit: key::Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit"),
        }
    }

    #[test]
    fn short_help_joins_entries_with_dots() {
        let help = Model::new();
        let line = strip_ansi(&help.view(&map()));
        assert_eq!(line, "↑ up • ↓ down • q quit");
    }

    #[test]
    fn disabled_bindings_are_hidden() {
        let mut m = map();
        m.down.set_enabled(false);
        let help = Model::new();
        let line = strip_ansi(&help.view(&m));
        assert_eq!(line, "↑ up • q quit");
    }

    #[test]
    fn short_help_truncates_at_width() {
        let help = Model::new().with_width(10);
        let line = strip_ansi(&help.view(&map()));
        assert!(line.starts_with("↑ up"));
        assert!(line.ends_with(ELLIPSIS));
    }

    #[test]
    fn full_help_renders_columns() {
        let mut help = Model::new();
        help.show_all = true;
        let text = strip_ansi(&help.view(&map()));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("↑ up"));
        assert!(lines[0].contains("q quit"));
        assert!(lines[1].contains("↓ down"));
    }
}
