//! View rendering for the grid: header, table body, status bar, and footer.

use super::style::{ELLIPSIS, NULL_PLACEHOLDER};
use super::types::GridState;
use crate::query::{CellValue, Row, SortDirection};
use lipgloss_extras::lipgloss;

use super::model::Model;

const COLUMN_GAP: &str = "  ";

impl<R: Row> Model<R> {
    /// Renders the full grid view.
    pub fn render(&self) -> String {
        let mut sections: Vec<String> = Vec::new();

        sections.push(self.header_view());
        if let Some(summary) = self.filter_summary_view() {
            sections.push(summary);
        }
        sections.push(self.table_view());
        if self.builder.is_open() {
            sections.push(self.builder.view(&self.styles));
        }
        if self.show_status_bar {
            sections.push(self.status_view());
        }
        sections.push(self.styles.pagination.clone().render(&self.paginator.view()));
        sections.push(self.styles.help.clone().render(&self.help.view(self)));

        sections.join("\n")
    }

    fn header_view(&self) -> String {
        if self.state == GridState::Searching {
            return self
                .styles
                .title_bar
                .clone()
                .render(&self.search_input.view());
        }

        let mut line = self.styles.title.clone().render(&self.title);
        if !self.query.is_empty() {
            line.push_str(
                &self
                    .styles
                    .search_prompt
                    .clone()
                    .render(&format!(" “{}”", self.query)),
            );
        }
        self.styles.title_bar.clone().render(&line)
    }

    fn filter_summary_view(&self) -> Option<String> {
        if self.filters.is_empty() {
            return None;
        }
        let parts: Vec<String> = self
            .filters
            .iter()
            .map(|f| format!("{} {} {}", f.field, f.op, f.value))
            .collect();
        Some(
            self.styles
                .filter_summary
                .clone()
                .render(&format!("filters: {}", parts.join(" and "))),
        )
    }

    fn table_view(&self) -> String {
        let page = self.page_view();
        if page.rows.is_empty() {
            return self
                .styles
                .no_rows
                .clone()
                .render("No records to display.");
        }

        let widths = self.column_widths(&page.rows);
        let mut out = String::new();

        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                out.push_str(COLUMN_GAP);
            }
            let mut label = column.title.clone();
            if self.sort.field.as_deref() == Some(column.key.as_str()) {
                label.push_str(match self.sort.direction {
                    SortDirection::Ascending => " ▲",
                    SortDirection::Descending => " ▼",
                });
            }
            let style = if i == self.active_column {
                &self.styles.header_selected
            } else if self.sort.field.as_deref() == Some(column.key.as_str()) {
                &self.styles.header_sorted
            } else {
                &self.styles.header
            };
            out.push_str(&style.clone().render(&pad(&label, widths[i])));
        }
        out.push('\n');

        for (row_index, row) in page.rows.iter().enumerate() {
            let mut line = String::new();
            for (i, column) in self.columns.iter().enumerate() {
                if i > 0 {
                    line.push_str(COLUMN_GAP);
                }
                line.push_str(&pad(&self.cell_view(column, row), widths[i]));
            }
            if row_index == self.cursor {
                line = self.styles.selected_row.clone().render(&lipgloss::strip_ansi(&line));
            }
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Renders one cell, applying the column's renderer or the default
    /// coercions for booleans, dates, and null.
    fn cell_view(&self, column: &super::types::Column<R>, row: &R) -> String {
        let value = row.field(&column.key);
        if let Some(render) = column.renderer() {
            return render(&value, row);
        }
        match value {
            CellValue::Bool(true) => self.styles.badge_yes.clone().render("yes"),
            CellValue::Bool(false) => self.styles.badge_no.clone().render("no"),
            CellValue::Date(date) => date.format("%Y-%m-%d").to_string(),
            CellValue::Null => self.styles.null_cell.clone().render(NULL_PLACEHOLDER),
            other => other.to_string(),
        }
    }

    /// Fixed widths win; otherwise a column sizes to the widest of its
    /// header label and the cells on the current page.
    fn column_widths(&self, rows: &[R]) -> Vec<usize> {
        self.columns
            .iter()
            .map(|column| {
                if let Some(w) = column.width {
                    return w;
                }
                // Sort indicator space is reserved on every sortable header.
                let mut width = lipgloss::width_visible(&column.title)
                    + if column.sortable { 2 } else { 0 };
                for row in rows {
                    width = width.max(lipgloss::width_visible(&self.cell_view(column, row)));
                }
                width
            })
            .collect()
    }

    fn status_view(&self) -> String {
        let page = self.page_view();
        let total = self.visible_len();
        let text = if total == 0 {
            "0 records".to_string()
        } else {
            format!(
                "{}–{} of {} records",
                page.start_index + 1,
                page.end_index,
                total
            )
        };
        self.styles.status_bar.clone().render(&text)
    }
}

/// Pads `text` with spaces to `width` display cells, truncating with an
/// ellipsis when it overflows. Styled text is measured, not mangled: the
/// truncation path first strips ANSI sequences.
fn pad(text: &str, width: usize) -> String {
    let visible = lipgloss::width_visible(text);
    if visible > width {
        let plain = lipgloss::strip_ansi(text);
        let mut out = String::new();
        let mut used = 0;
        for c in plain.chars() {
            let w = lipgloss::width_visible(&c.to_string());
            if used + w > width.saturating_sub(1) {
                break;
            }
            used += w;
            out.push(c);
        }
        out.push_str(ELLIPSIS);
        return out;
    }
    format!("{}{}", text, " ".repeat(width - visible))
}

#[cfg(test)]
mod tests {
    use super::super::types::Column;
    use super::*;
    use crate::grid;
    use chrono::NaiveDate;
    use crossterm::event::{KeyCode, KeyModifiers};
    use bubbletea_rs::{KeyMsg, Msg};

    #[derive(Debug, Clone)]
    struct Visit {
        id: &'static str,
        patient: &'static str,
        date: Option<NaiveDate>,
        paid: bool,
    }

    impl Row for Visit {
        fn id(&self) -> String {
            self.id.to_string()
        }

        fn field(&self, key: &str) -> CellValue {
            match key {
                "patient" => self.patient.into(),
                "date" => self
                    .date
                    .map(CellValue::Date)
                    .unwrap_or(CellValue::Null),
                "paid" => self.paid.into(),
                _ => CellValue::Null,
            }
        }
    }

    fn visits() -> Vec<Visit> {
        vec![
            Visit {
                id: "1",
                patient: "Ana Gomez",
                date: NaiveDate::from_ymd_opt(2024, 3, 14),
                paid: true,
            },
            Visit {
                id: "2",
                patient: "Bruno Diaz",
                date: None,
                paid: false,
            },
        ]
    }

    fn columns() -> Vec<Column<Visit>> {
        vec![
            Column::new("patient", "Patient").sortable(),
            Column::new("date", "Date"),
            Column::new("paid", "Paid"),
        ]
    }

    #[test]
    fn view_contains_headers_and_cells() {
        let g = grid::Model::new(visits(), columns(), 80, 24).with_title("Visits");
        let plain = lipgloss::strip_ansi(&g.render());

        assert!(plain.contains("Visits"));
        assert!(plain.contains("Patient"));
        assert!(plain.contains("Ana Gomez"));
        assert!(plain.contains("2024-03-14"));
    }

    #[test]
    fn default_coercions_render_badges_and_null_placeholder() {
        let g = grid::Model::new(visits(), columns(), 80, 24);
        let plain = lipgloss::strip_ansi(&g.render());

        assert!(plain.contains("yes"));
        assert!(plain.contains("no"));
        assert!(plain.contains(NULL_PLACEHOLDER));
    }

    #[test]
    fn custom_renderer_overrides_the_default() {
        let cols = vec![
            Column::new("patient", "Patient"),
            Column::new("paid", "Paid").with_render(|value, _row| match value {
                CellValue::Bool(true) => "PAID".to_string(),
                _ => "DUE".to_string(),
            }),
        ];
        let g = grid::Model::new(visits(), cols, 80, 24);
        let plain = lipgloss::strip_ansi(&g.render());

        assert!(plain.contains("PAID"));
        assert!(plain.contains("DUE"));
    }

    #[test]
    fn sorted_column_header_carries_a_direction_indicator() {
        let mut g = grid::Model::new(visits(), columns(), 80, 24);
        let sort: Msg = Box::new(KeyMsg {
            key: KeyCode::Char('s'),
            modifiers: KeyModifiers::NONE,
        });
        g.update(&sort);
        assert!(lipgloss::strip_ansi(&g.render()).contains("Patient ▲"));

        let sort_again: Msg = Box::new(KeyMsg {
            key: KeyCode::Char('s'),
            modifiers: KeyModifiers::NONE,
        });
        g.update(&sort_again);
        assert!(lipgloss::strip_ansi(&g.render()).contains("Patient ▼"));
    }

    #[test]
    fn empty_projection_renders_the_placeholder_message() {
        let g: grid::Model<Visit> = grid::Model::new(Vec::new(), columns(), 80, 24);
        assert!(lipgloss::strip_ansi(&g.render()).contains("No records to display."));
    }

    #[test]
    fn status_bar_reports_the_page_range() {
        let g = grid::Model::new(visits(), columns(), 80, 24);
        assert!(lipgloss::strip_ansi(&g.render()).contains("1–2 of 2 records"));
    }

    #[test]
    fn pad_truncates_with_an_ellipsis() {
        assert_eq!(pad("abcdef", 4), "abc…");
        assert_eq!(pad("ab", 4), "ab  ");
    }
}
