//! Styling for the grid component.
//!
//! All defaults use `AdaptiveColor` so the grid stays readable on both light
//! and dark terminal themes. Cell padding and layout spacing live in the
//! renderer; this module only decides colors and emphasis.

use lipgloss_extras::prelude::*;

/// Unicode ellipsis used when truncating cell content.
pub const ELLIPSIS: &str = "…";

/// Placeholder rendered for null cells.
pub const NULL_PLACEHOLDER: &str = "—";

/// Style configuration for every visual element of the grid.
#[derive(Debug, Clone)]
pub struct GridStyles {
    /// Container for the title line.
    pub title_bar: Style,
    /// The grid title text.
    pub title: Style,
    /// Column header cells.
    pub header: Style,
    /// The header cell of the currently selected column.
    pub header_selected: Style,
    /// The header cell of the sorted column (sort indicator included).
    pub header_sorted: Style,
    /// The row under the cursor.
    pub selected_row: Style,
    /// The quick-search prompt label.
    pub search_prompt: Style,
    /// Summary line of applied advanced filters.
    pub filter_summary: Style,
    /// Status bar text.
    pub status_bar: Style,
    /// "No records" message.
    pub no_rows: Style,
    /// Pagination line container.
    pub pagination: Style,
    /// Help line container.
    pub help: Style,
    /// Badge for `true` boolean cells.
    pub badge_yes: Style,
    /// Badge for `false` boolean cells.
    pub badge_no: Style,
    /// Placeholder for null cells.
    pub null_cell: Style,
    /// Labels inside the filter builder.
    pub builder_label: Style,
    /// The focused selector/slot inside the filter builder.
    pub builder_selected: Style,
    /// A pending filter entry inside the builder.
    pub builder_filter: Style,
}

impl Default for GridStyles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };
        let very_subdued = AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        };

        Self {
            title_bar: Style::new().padding(0, 0, 1, 2),
            title: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            header: Style::new().bold(true).foreground(AdaptiveColor {
                Light: "#4A4A4A",
                Dark: "#BDBDBD",
            }),
            header_selected: Style::new().bold(true).foreground(AdaptiveColor {
                Light: "#EE6FF8",
                Dark: "#EE6FF8",
            }),
            header_sorted: Style::new().bold(true).foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            selected_row: Style::new()
                .foreground(Color::from("230"))
                .background(Color::from("62")),
            search_prompt: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            filter_summary: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
            status_bar: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#A49FA5",
                    Dark: "#777777",
                })
                .padding(0, 0, 1, 2),
            no_rows: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            pagination: Style::new()
                .foreground(subdued.clone())
                .padding_left(2),
            help: Style::new().padding(1, 0, 0, 2),
            badge_yes: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#73F59F",
            }),
            badge_no: Style::new().foreground(AdaptiveColor {
                Light: "#FF4672",
                Dark: "#ED567A",
            }),
            null_cell: Style::new().foreground(very_subdued.clone()),
            builder_label: Style::new().foreground(subdued),
            builder_selected: Style::new()
                .foreground(Color::from("230"))
                .background(Color::from("62"))
                .padding(0, 1, 0, 1),
            builder_filter: Style::new().foreground(very_subdued),
        }
    }
}
