//! Interactive advanced filter builder.
//!
//! The builder composes structured [`SearchFilter`]s from three selections:
//! a field (cycled from the declared filterable fields), an operator, and a
//! typed value. Pending filters accumulate in a list; applying hands the
//! whole list to the embedding grid and closes the builder.
//!
//! State machine: `closed → open (N pending) → applied`. Adding with any of
//! the three selections missing is silently ignored, never an error.

use super::style::GridStyles;
use crate::key::{self, KeyMap as KeyMapTrait};
use crate::query::{FilterOp, FilterValue, SearchFilter};
use crate::textinput;
use crate::Component;
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

/// Which of the three selections has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Slot {
    /// The field selector.
    #[default]
    Field,
    /// The operator selector.
    Op,
    /// The value input.
    Value,
}

/// Outcome of a builder interaction the embedding grid must react to.
#[derive(Debug, Clone, PartialEq)]
pub enum BuilderEvent {
    /// The pending filter list was applied; the builder closed itself.
    Applied(Vec<SearchFilter>),
    /// Pending filters and the quick query must be reset.
    Cleared,
}

/// Key bindings for the filter builder.
#[derive(Debug, Clone)]
pub struct BuilderKeyMap {
    /// Focus the next selection slot.
    pub next_slot: key::Binding,
    /// Focus the previous selection slot.
    pub prev_slot: key::Binding,
    /// Previous choice in the focused selector.
    pub prev_choice: key::Binding,
    /// Next choice in the focused selector.
    pub next_choice: key::Binding,
    /// Add the composed filter to the pending list.
    pub add: key::Binding,
    /// Remove the highlighted pending filter.
    pub remove: key::Binding,
    /// Highlight the previous pending filter.
    pub select_up: key::Binding,
    /// Highlight the next pending filter.
    pub select_down: key::Binding,
    /// Apply the pending list and close.
    pub apply: key::Binding,
    /// Clear pending filters and the quick query.
    pub clear_all: key::Binding,
    /// Close without applying.
    pub close: key::Binding,
}

impl Default for BuilderKeyMap {
    fn default() -> Self {
        Self {
            next_slot: key::Binding::new(vec![KeyCode::Tab]).with_help("tab", "next field"),
            prev_slot: key::Binding::new(vec![KeyCode::BackTab]).with_help("shift+tab", "prev"),
            prev_choice: key::Binding::new(vec![KeyCode::Left]).with_help("←", "prev choice"),
            next_choice: key::Binding::new(vec![KeyCode::Right]).with_help("→", "next choice"),
            add: key::Binding::new(vec![KeyCode::Enter]).with_help("enter", "add filter"),
            remove: key::Binding::new(vec![(KeyCode::Char('d'), KeyModifiers::CONTROL)])
                .with_help("ctrl+d", "remove"),
            select_up: key::Binding::new(vec![KeyCode::Up]).with_help("↑", "select"),
            select_down: key::Binding::new(vec![KeyCode::Down]).with_help("↓", "select"),
            apply: key::Binding::new(vec![(KeyCode::Char('s'), KeyModifiers::CONTROL)])
                .with_help("ctrl+s", "apply"),
            clear_all: key::Binding::new(vec![(KeyCode::Char('l'), KeyModifiers::CONTROL)])
                .with_help("ctrl+l", "clear all"),
            close: key::Binding::new(vec![KeyCode::Esc]).with_help("esc", "close"),
        }
    }
}

impl KeyMapTrait for BuilderKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.add, &self.apply, &self.clear_all, &self.close]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.next_slot, &self.prev_slot, &self.prev_choice, &self.next_choice],
            vec![&self.add, &self.remove, &self.select_up, &self.select_down],
            vec![&self.apply, &self.clear_all, &self.close],
        ]
    }
}

/// The advanced filter builder model.
pub struct Model {
    open: bool,
    fields: Vec<String>,
    field_idx: Option<usize>,
    op_idx: Option<usize>,
    value_input: textinput::Model,
    slot: Slot,
    pending: Vec<SearchFilter>,
    selected: usize,
    /// Key bindings.
    pub keymap: BuilderKeyMap,
}

impl Model {
    /// Creates a closed builder over the given filterable fields.
    pub fn new(fields: Vec<String>) -> Self {
        let mut value_input = textinput::new();
        value_input.prompt = String::new();
        value_input.set_placeholder("value (ranges: lo..hi)");
        Self {
            open: false,
            fields,
            field_idx: None,
            op_idx: None,
            value_input,
            slot: Slot::Field,
            pending: Vec::new(),
            selected: 0,
            keymap: BuilderKeyMap::default(),
        }
    }

    /// Whether the builder is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The pending (not yet applied) filters.
    pub fn pending(&self) -> &[SearchFilter] {
        &self.pending
    }

    /// Opens the builder.
    pub fn open(&mut self) {
        self.open = true;
        self.slot = Slot::Field;
    }

    /// Closes the builder without touching pending filters.
    pub fn close(&mut self) {
        self.open = false;
        self.value_input.blur();
    }

    /// Adds the currently composed filter to the pending list.
    ///
    /// Requires all three selections: a field, an operator, and a value that
    /// parses for the operator. Anything missing makes this a silent no-op.
    pub fn add_filter(&mut self) {
        let Some(field_idx) = self.field_idx else {
            return;
        };
        let Some(op_idx) = self.op_idx else {
            return;
        };
        let op = FilterOp::ALL[op_idx];
        let Some(value) = FilterValue::parse(op, &self.value_input.value()) else {
            return;
        };

        self.pending
            .push(SearchFilter::new(self.fields[field_idx].clone(), op, value));
        self.selected = self.pending.len() - 1;
        self.value_input.reset();
    }

    /// Removes one pending filter by position; out-of-range is ignored.
    pub fn remove_filter(&mut self, index: usize) {
        if index < self.pending.len() {
            self.pending.remove(index);
            self.selected = self.selected.min(self.pending.len().saturating_sub(1));
        }
    }

    /// Applies: returns the pending list and closes the builder.
    pub fn apply(&mut self) -> Vec<SearchFilter> {
        self.close();
        self.pending.clone()
    }

    /// Empties the pending list (the grid also resets its quick query).
    pub fn clear_all(&mut self) {
        self.pending.clear();
        self.selected = 0;
        self.value_input.reset();
    }

    /// Handles a key message while open.
    pub fn update(&mut self, msg: &Msg) -> Option<BuilderEvent> {
        let key_msg = msg.downcast_ref::<KeyMsg>()?;

        if self.keymap.close.matches(key_msg) {
            self.close();
            return None;
        }
        if self.keymap.apply.matches(key_msg) {
            return Some(BuilderEvent::Applied(self.apply()));
        }
        if self.keymap.clear_all.matches(key_msg) {
            self.clear_all();
            return Some(BuilderEvent::Cleared);
        }
        if self.keymap.add.matches(key_msg) {
            self.add_filter();
            return None;
        }
        if self.keymap.remove.matches(key_msg) {
            self.remove_filter(self.selected);
            return None;
        }
        if self.keymap.next_slot.matches(key_msg) {
            self.focus_slot(match self.slot {
                Slot::Field => Slot::Op,
                Slot::Op => Slot::Value,
                Slot::Value => Slot::Field,
            });
            return None;
        }
        if self.keymap.prev_slot.matches(key_msg) {
            self.focus_slot(match self.slot {
                Slot::Field => Slot::Value,
                Slot::Op => Slot::Field,
                Slot::Value => Slot::Op,
            });
            return None;
        }
        if self.keymap.select_up.matches(key_msg) {
            self.selected = self.selected.saturating_sub(1);
            return None;
        }
        if self.keymap.select_down.matches(key_msg) {
            if self.selected + 1 < self.pending.len() {
                self.selected += 1;
            }
            return None;
        }

        match self.slot {
            Slot::Field => {
                if self.keymap.next_choice.matches(key_msg) {
                    self.field_idx = cycle(self.field_idx, self.fields.len(), 1);
                } else if self.keymap.prev_choice.matches(key_msg) {
                    self.field_idx = cycle(self.field_idx, self.fields.len(), -1);
                }
            }
            Slot::Op => {
                if self.keymap.next_choice.matches(key_msg) {
                    self.op_idx = cycle(self.op_idx, FilterOp::ALL.len(), 1);
                } else if self.keymap.prev_choice.matches(key_msg) {
                    self.op_idx = cycle(self.op_idx, FilterOp::ALL.len(), -1);
                }
            }
            Slot::Value => {
                self.value_input.update(msg);
            }
        }
        None
    }

    fn focus_slot(&mut self, slot: Slot) {
        self.slot = slot;
        if slot == Slot::Value {
            self.value_input.focus();
        } else {
            self.value_input.blur();
        }
    }

    /// Renders the builder panel.
    pub fn view(&self, styles: &GridStyles) -> String {
        let selector = |label: &str, focused: bool| -> String {
            if focused {
                styles.builder_selected.clone().render(label)
            } else {
                styles.builder_label.clone().render(label)
            }
        };

        let field_label = self
            .field_idx
            .map(|i| self.fields[i].clone())
            .unwrap_or_else(|| "field".to_string());
        let op_label = self
            .op_idx
            .map(|i| FilterOp::ALL[i].label().to_string())
            .unwrap_or_else(|| "operator".to_string());

        let mut out = String::new();
        out.push_str(&format!(
            "{} {} {} {}\n",
            styles.builder_label.clone().render("Filter:"),
            selector(&field_label, self.slot == Slot::Field),
            selector(&op_label, self.slot == Slot::Op),
            if self.slot == Slot::Value {
                self.value_input.view()
            } else {
                selector(&self.value_input.value(), false)
            }
        ));

        for (i, filter) in self.pending.iter().enumerate() {
            let marker = if i == self.selected { "▸" } else { " " };
            out.push_str(&format!(
                "{} {}\n",
                marker,
                styles.builder_filter.clone().render(&format!(
                    "{} {} {}",
                    filter.field, filter.op, filter.value
                ))
            ));
        }
        out
    }
}

fn cycle(current: Option<usize>, len: usize, step: isize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match current {
        None => {
            if step > 0 {
                0
            } else {
                len - 1
            }
        }
        Some(i) => (i as isize + step).rem_euclid(len as isize) as usize,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::FilterValue;

    fn press(m: &mut Model, code: KeyCode) -> Option<BuilderEvent> {
        let msg: Msg = Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        });
        m.update(&msg)
    }

    fn ctrl(m: &mut Model, c: char) -> Option<BuilderEvent> {
        let msg: Msg = Box::new(KeyMsg {
            key: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
        });
        m.update(&msg)
    }

    fn builder() -> Model {
        let mut b = Model::new(vec!["name".to_string(), "age".to_string()]);
        b.open();
        b
    }

    /// Cycles to field `idx`, operator `op_idx`, and types `value`.
    fn compose(b: &mut Model, field_steps: usize, op_steps: usize, value: &str) {
        for _ in 0..field_steps {
            press(b, KeyCode::Right);
        }
        press(b, KeyCode::Tab);
        for _ in 0..op_steps {
            press(b, KeyCode::Right);
        }
        press(b, KeyCode::Tab);
        for c in value.chars() {
            press(b, KeyCode::Char(c));
        }
    }

    #[test]
    fn add_requires_all_three_selections() {
        let mut b = builder();

        // Nothing selected at all: ignored.
        press(&mut b, KeyCode::Enter);
        assert!(b.pending().is_empty());

        // Field and operator but no value: still ignored.
        press(&mut b, KeyCode::Right);
        press(&mut b, KeyCode::Tab);
        press(&mut b, KeyCode::Right);
        press(&mut b, KeyCode::Enter);
        assert!(b.pending().is_empty());
    }

    #[test]
    fn composed_filter_is_added() {
        let mut b = builder();
        compose(&mut b, 1, 1, "ana");
        press(&mut b, KeyCode::Enter);

        assert_eq!(b.pending().len(), 1);
        let f = &b.pending()[0];
        assert_eq!(f.field, "name");
        assert_eq!(f.op, FilterOp::Contains);
        assert_eq!(f.value, FilterValue::Text("ana".to_string()));
    }

    #[test]
    fn malformed_between_value_is_silently_ignored() {
        let mut b = builder();
        // field "age", operator "between" (7th in the cycle), single bound.
        compose(&mut b, 2, 7, "25");
        press(&mut b, KeyCode::Enter);
        assert!(b.pending().is_empty());
    }

    #[test]
    fn well_formed_between_value_parses_as_range() {
        let mut b = builder();
        compose(&mut b, 2, 7, "25..50");
        press(&mut b, KeyCode::Enter);
        assert_eq!(b.pending().len(), 1);
        assert_eq!(b.pending()[0].value, FilterValue::NumberRange(25.0, 50.0));
    }

    #[test]
    fn remove_deletes_by_position() {
        let mut b = builder();
        compose(&mut b, 1, 1, "ana");
        press(&mut b, KeyCode::Enter);
        for c in "beto".chars() {
            press(&mut b, KeyCode::Char(c));
        }
        press(&mut b, KeyCode::Enter);
        assert_eq!(b.pending().len(), 2);

        b.remove_filter(0);
        assert_eq!(b.pending().len(), 1);
        assert_eq!(b.pending()[0].value, FilterValue::Text("beto".to_string()));

        // Out of range: ignored.
        b.remove_filter(9);
        assert_eq!(b.pending().len(), 1);
    }

    #[test]
    fn apply_reports_filters_and_closes() {
        let mut b = builder();
        compose(&mut b, 1, 1, "ana");
        press(&mut b, KeyCode::Enter);

        let event = ctrl(&mut b, 's');
        match event {
            Some(BuilderEvent::Applied(filters)) => assert_eq!(filters.len(), 1),
            other => panic!("expected Applied, got {:?}", other),
        }
        assert!(!b.is_open());
    }

    #[test]
    fn clear_all_empties_pending_and_reports() {
        let mut b = builder();
        compose(&mut b, 1, 1, "ana");
        press(&mut b, KeyCode::Enter);

        let event = ctrl(&mut b, 'l');
        assert_eq!(event, Some(BuilderEvent::Cleared));
        assert!(b.pending().is_empty());
        // Clearing keeps the builder open for further composition.
        assert!(b.is_open());
    }

    #[test]
    fn esc_closes_without_applying() {
        let mut b = builder();
        compose(&mut b, 1, 1, "ana");
        press(&mut b, KeyCode::Enter);
        assert!(press(&mut b, KeyCode::Esc).is_none());
        assert!(!b.is_open());
        assert_eq!(b.pending().len(), 1);
    }
}
