//! The pure filter/sort/paginate engine behind the grid component.
//!
//! Everything in this module is a synchronous, total function over its
//! inputs: no I/O, no panics on malformed filters, no internal state. The
//! grid re-derives its visible page from these operations every time any
//! input changes, so a given set of rows, query, filters, sort, and page
//! always produces the same projection.
//!
//! The module also owns the data-model vocabulary: [`CellValue`], the
//! [`Row`] trait, [`SortState`], and the structured [`SearchFilter`] used by
//! the advanced filter builder.

use chrono::NaiveDate;
use std::cmp::Ordering;
use std::fmt::Display;

/// A single typed attribute value inside a [`Row`].
///
/// Keeping values in a closed enum (rather than stringly-typed cells) lets
/// sorting and range filters compare numbers as numbers and dates as dates,
/// while text matching falls back to a well-defined string form.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// A text value.
    Str(String),
    /// A signed integer.
    Int(i64),
    /// A floating-point number.
    Float(f64),
    /// A boolean flag.
    Bool(bool),
    /// A calendar date.
    Date(NaiveDate),
    /// Absent or unsupported value. Never matches a text query.
    Null,
}

impl CellValue {
    /// The string form used for quick-search and `contains`-style matching.
    ///
    /// Numbers use their decimal representation, dates their ISO form.
    /// `Null` returns `None` so absent values never match any query.
    pub fn search_text(&self) -> Option<String> {
        match self {
            CellValue::Str(s) => Some(s.clone()),
            CellValue::Int(n) => Some(n.to_string()),
            CellValue::Float(n) => Some(n.to_string()),
            CellValue::Bool(b) => Some(b.to_string()),
            CellValue::Date(d) => Some(d.format("%Y-%m-%d").to_string()),
            CellValue::Null => None,
        }
    }

    /// Natural ordering used by [`sort_rows`].
    ///
    /// Values of the same kind compare naturally; `Int` and `Float` compare
    /// as numbers. `Null` sorts before everything else. Values of unrelated
    /// kinds compare equal so a stable sort leaves their input order intact.
    pub fn cmp_natural(&self, other: &CellValue) -> Ordering {
        use CellValue::*;
        match (self, other) {
            (Null, Null) => Ordering::Equal,
            (Null, _) => Ordering::Less,
            (_, Null) => Ordering::Greater,
            (Str(a), Str(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (Bool(a), Bool(b)) => a.cmp(b),
            (Date(a), Date(b)) => a.cmp(b),
            (a, b) => match (a.as_number(), b.as_number()) {
                (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            },
        }
    }

    /// Numeric view of the value, if it has one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Int(n) => Some(*n as f64),
            CellValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Whether this cell is the null value.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

impl Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.search_text() {
            Some(s) => write!(f, "{}", s),
            None => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Str(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Str(s)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Int(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Int(n as i64)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Float(n)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

/// A record displayed by the grid.
///
/// Rows are owned by the caller and never mutated by the grid; the engine
/// only clones them into derived projections. `id()` must be unique within
/// the displayed collection, and `field()` is the typed accessor the columns
/// and filters key into (unknown keys return [`CellValue::Null`]).
///
/// # Examples
///
/// ```
/// use datagrid_widgets::query::{CellValue, Row};
///
/// #[derive(Clone)]
/// struct Task {
///     id: u32,
///     title: String,
///     done: bool,
/// }
///
/// impl Row for Task {
///     fn id(&self) -> String {
///         self.id.to_string()
///     }
///
///     fn field(&self, key: &str) -> CellValue {
///         match key {
///             "title" => self.title.as_str().into(),
///             "done" => self.done.into(),
///             _ => CellValue::Null,
///         }
///     }
/// }
/// ```
pub trait Row: Clone {
    /// Unique identifier within the displayed collection.
    fn id(&self) -> String;

    /// Typed access to one attribute by key; `Null` for unknown keys.
    fn field(&self, key: &str) -> CellValue;
}

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Current sort selection: the sorted field (if any) and the direction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    /// Field key currently sorted by; `None` preserves input order.
    pub field: Option<String>,
    /// Direction applied to `field`.
    pub direction: SortDirection,
}

impl SortState {
    /// Applies a sort request for `field`.
    ///
    /// Re-selecting the currently sorted field toggles the direction;
    /// selecting a different field resets to ascending.
    pub fn toggle(&mut self, field: &str) {
        if self.field.as_deref() == Some(field) {
            self.direction = self.direction.toggled();
        } else {
            self.field = Some(field.to_string());
            self.direction = SortDirection::Ascending;
        }
    }

    /// Clears the sort, restoring input order.
    pub fn clear(&mut self) {
        self.field = None;
        self.direction = SortDirection::Ascending;
    }
}

/// Comparison operator of a structured filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// Case-insensitive substring match.
    Contains,
    /// Exact match after stringification.
    Equals,
    /// Case-insensitive prefix match.
    StartsWith,
    /// Case-insensitive suffix match.
    EndsWith,
    /// Numeric or date greater-than.
    GreaterThan,
    /// Numeric or date less-than.
    LessThan,
    /// Inclusive range test; requires a range value.
    Between,
}

impl FilterOp {
    /// All operators, in the order the filter builder cycles through them.
    pub const ALL: [FilterOp; 7] = [
        FilterOp::Contains,
        FilterOp::Equals,
        FilterOp::StartsWith,
        FilterOp::EndsWith,
        FilterOp::GreaterThan,
        FilterOp::LessThan,
        FilterOp::Between,
    ];

    /// Human-readable label used by the filter builder.
    pub fn label(self) -> &'static str {
        match self {
            FilterOp::Contains => "contains",
            FilterOp::Equals => "equals",
            FilterOp::StartsWith => "starts with",
            FilterOp::EndsWith => "ends with",
            FilterOp::GreaterThan => "greater than",
            FilterOp::LessThan => "less than",
            FilterOp::Between => "between",
        }
    }
}

impl Display for FilterOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Typed operand of a structured filter.
///
/// Ranges carry both bounds, so a `between` filter with the wrong arity is
/// unrepresentable. A `Between` op applied to a non-range value is treated
/// as non-matching rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// Free text.
    Text(String),
    /// A number.
    Number(f64),
    /// A calendar date.
    Date(NaiveDate),
    /// Inclusive numeric range.
    NumberRange(f64, f64),
    /// Inclusive date range.
    DateRange(NaiveDate, NaiveDate),
}

impl FilterValue {
    /// Parses user input into a typed value for the given operator.
    ///
    /// `Between` expects `lo..hi` where both bounds parse as dates
    /// (`YYYY-MM-DD`) or both as numbers. Other operators try date, then
    /// number, then fall back to text. Returns `None` for empty input or a
    /// range that cannot be parsed.
    pub fn parse(op: FilterOp, raw: &str) -> Option<FilterValue> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if op == FilterOp::Between {
            let (lo, hi) = raw.split_once("..")?;
            let (lo, hi) = (lo.trim(), hi.trim());
            if let (Ok(a), Ok(b)) = (parse_date(lo), parse_date(hi)) {
                return Some(FilterValue::DateRange(a, b));
            }
            if let (Ok(a), Ok(b)) = (lo.parse::<f64>(), hi.parse::<f64>()) {
                return Some(FilterValue::NumberRange(a, b));
            }
            return None;
        }

        if let Ok(d) = parse_date(raw) {
            return Some(FilterValue::Date(d));
        }
        if let Ok(n) = raw.parse::<f64>() {
            return Some(FilterValue::Number(n));
        }
        Some(FilterValue::Text(raw.to_string()))
    }

    fn as_text(&self) -> String {
        match self {
            FilterValue::Text(s) => s.clone(),
            FilterValue::Number(n) => n.to_string(),
            FilterValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            FilterValue::NumberRange(a, b) => format!("{}..{}", a, b),
            FilterValue::DateRange(a, b) => {
                format!("{}..{}", a.format("%Y-%m-%d"), b.format("%Y-%m-%d"))
            }
        }
    }
}

impl Display for FilterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_text())
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
}

/// One structured condition composed in the advanced filter builder.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFilter {
    /// Row field key the condition applies to.
    pub field: String,
    /// Comparison operator.
    pub op: FilterOp,
    /// Typed operand.
    pub value: FilterValue,
}

impl SearchFilter {
    /// Creates a filter.
    pub fn new(field: impl Into<String>, op: FilterOp, value: FilterValue) -> Self {
        Self {
            field: field.into(),
            op,
            value,
        }
    }

    /// Whether `row` satisfies this condition.
    ///
    /// Text operators compare the stringified cell case-insensitively;
    /// `equals` compares the exact string forms; ordering operators compare
    /// numerically or by date depending on the operand, and mismatched kinds
    /// never match.
    pub fn matches<R: Row>(&self, row: &R) -> bool {
        let cell = row.field(&self.field);
        match self.op {
            FilterOp::Contains | FilterOp::StartsWith | FilterOp::EndsWith => {
                let Some(text) = cell.search_text() else {
                    return false;
                };
                let haystack = text.to_lowercase();
                let needle = self.value.as_text().to_lowercase();
                match self.op {
                    FilterOp::Contains => haystack.contains(&needle),
                    FilterOp::StartsWith => haystack.starts_with(&needle),
                    _ => haystack.ends_with(&needle),
                }
            }
            FilterOp::Equals => match cell.search_text() {
                Some(text) => text == self.value.as_text(),
                None => false,
            },
            FilterOp::GreaterThan | FilterOp::LessThan => {
                let ord = match (&self.value, &cell) {
                    (FilterValue::Number(n), cell) => match cell.as_number() {
                        Some(x) => x.partial_cmp(n),
                        None => None,
                    },
                    (FilterValue::Date(d), CellValue::Date(x)) => Some(x.cmp(d)),
                    _ => None,
                };
                match (self.op, ord) {
                    (FilterOp::GreaterThan, Some(Ordering::Greater)) => true,
                    (FilterOp::LessThan, Some(Ordering::Less)) => true,
                    _ => false,
                }
            }
            FilterOp::Between => match (&self.value, &cell) {
                (FilterValue::NumberRange(lo, hi), cell) => match cell.as_number() {
                    Some(x) => x >= *lo && x <= *hi,
                    None => false,
                },
                (FilterValue::DateRange(lo, hi), CellValue::Date(x)) => x >= lo && x <= hi,
                // Non-range operand with a between op: non-matching, not an error.
                _ => false,
            },
        }
    }
}

/// One page of a derived projection, plus its paging metadata.
#[derive(Debug, Clone)]
pub struct PageView<R> {
    /// The rows on the requested page, in projection order.
    pub rows: Vec<R>,
    /// `ceil(count / per_page)`; 0 when the projection is empty.
    pub total_pages: usize,
    /// Index of the first row on this page within the projection.
    pub start_index: usize,
    /// One past the last row on this page within the projection.
    pub end_index: usize,
}

/// Keeps rows whose declared fields contain `pattern`, case-insensitively.
///
/// An empty pattern is the identity. A row passes when any of the declared
/// fields' string form contains the pattern; null fields never match.
pub fn filter_by_text<R: Row, S: AsRef<str>>(rows: &[R], pattern: &str, fields: &[S]) -> Vec<R> {
    if pattern.is_empty() {
        return rows.to_vec();
    }
    let needle = pattern.to_lowercase();
    rows.iter()
        .filter(|row| {
            fields.iter().any(|f| {
                row.field(f.as_ref())
                    .search_text()
                    .is_some_and(|text| text.to_lowercase().contains(&needle))
            })
        })
        .cloned()
        .collect()
}

/// Sorts rows by `field` in the given direction.
///
/// The sort is stable: rows with equal keys keep their input order, in both
/// directions. `None` performs no sorting at all.
pub fn sort_rows<R: Row>(rows: &[R], field: Option<&str>, direction: SortDirection) -> Vec<R> {
    let mut sorted = rows.to_vec();
    if let Some(key) = field {
        sorted.sort_by(|a, b| {
            let ord = a.field(key).cmp_natural(&b.field(key));
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }
    sorted
}

/// Keeps rows satisfying every filter (logical AND).
pub fn apply_filters<R: Row>(rows: &[R], filters: &[SearchFilter]) -> Vec<R> {
    if filters.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| filters.iter().all(|f| f.matches(*row)))
        .cloned()
        .collect()
}

/// Slices one page out of `rows`.
///
/// Pages are 1-indexed. A page beyond the end is clamped to the last valid
/// page, so a projection that shrinks under a new filter still shows data.
/// An empty projection yields an empty page with `total_pages == 0`.
pub fn paginate<R: Row>(rows: &[R], page: usize, per_page: usize) -> PageView<R> {
    let per_page = per_page.max(1);
    let count = rows.len();
    if count == 0 {
        return PageView {
            rows: Vec::new(),
            total_pages: 0,
            start_index: 0,
            end_index: 0,
        };
    }

    let total_pages = count.div_ceil(per_page);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * per_page;
    let end = (start + per_page).min(count);

    PageView {
        rows: rows[start..end].to_vec(),
        total_pages,
        start_index: start,
        end_index: end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Person {
        id: &'static str,
        name: &'static str,
        age: i64,
        active: bool,
    }

    impl Row for Person {
        fn id(&self) -> String {
            self.id.to_string()
        }

        fn field(&self, key: &str) -> CellValue {
            match key {
                "name" => self.name.into(),
                "age" => self.age.into(),
                "active" => self.active.into(),
                _ => CellValue::Null,
            }
        }
    }

    fn people() -> Vec<Person> {
        vec![
            Person {
                id: "1",
                name: "Ana",
                age: 30,
                active: true,
            },
            Person {
                id: "2",
                name: "Beto",
                age: 45,
                active: false,
            },
            Person {
                id: "3",
                name: "Ana Paula",
                age: 22,
                active: true,
            },
        ]
    }

    fn ids(rows: &[Person]) -> Vec<&'static str> {
        rows.iter().map(|p| p.id).collect()
    }

    #[test]
    fn quick_search_is_case_insensitive_and_preserves_order() {
        let out = filter_by_text(&people(), "ana", &["name"]);
        assert_eq!(ids(&out), vec!["1", "3"]);
    }

    #[test]
    fn quick_search_empty_pattern_is_identity() {
        let rows = people();
        assert_eq!(filter_by_text(&rows, "", &["name"]), rows);
    }

    #[test]
    fn quick_search_result_is_subset_containing_pattern() {
        let rows = people();
        let out = filter_by_text(&rows, "a", &["name"]);
        assert!(out.len() <= rows.len());
        for row in &out {
            assert!(row.name.to_lowercase().contains('a'));
        }
    }

    #[test]
    fn quick_search_matches_numbers_by_decimal_string() {
        let out = filter_by_text(&people(), "45", &["age"]);
        assert_eq!(ids(&out), vec!["2"]);
    }

    #[test]
    fn quick_search_null_fields_never_match() {
        let out = filter_by_text(&people(), "ana", &["missing"]);
        assert!(out.is_empty());
    }

    #[test]
    fn sort_by_age_ascending_then_descending() {
        let asc = sort_rows(&people(), Some("age"), SortDirection::Ascending);
        assert_eq!(ids(&asc), vec!["3", "1", "2"]);

        let desc = sort_rows(&people(), Some("age"), SortDirection::Descending);
        assert_eq!(ids(&desc), vec!["2", "1", "3"]);
    }

    #[test]
    fn sort_is_idempotent() {
        let once = sort_rows(&people(), Some("age"), SortDirection::Ascending);
        let twice = sort_rows(&once, Some("age"), SortDirection::Ascending);
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn sort_none_preserves_input_order() {
        let rows = people();
        assert_eq!(sort_rows(&rows, None, SortDirection::Descending), rows);
    }

    #[test]
    fn equal_keys_keep_input_order_in_both_directions() {
        let mut rows = people();
        rows.push(Person {
            id: "4",
            name: "Caio",
            age: 30,
            active: false,
        });

        let asc = sort_rows(&rows, Some("age"), SortDirection::Ascending);
        let desc = sort_rows(&rows, Some("age"), SortDirection::Descending);

        // ids 1 and 4 share age 30; relative order must survive either way.
        let pos = |list: &[Person], id: &str| list.iter().position(|p| p.id == id).unwrap();
        assert!(pos(&asc, "1") < pos(&asc, "4"));
        assert!(pos(&desc, "1") < pos(&desc, "4"));
    }

    #[test]
    fn paginate_splits_three_rows_across_two_pages() {
        let rows = people();
        let first = paginate(&rows, 1, 2);
        assert_eq!(ids(&first.rows), vec!["1", "2"]);
        assert_eq!(first.total_pages, 2);
        assert_eq!((first.start_index, first.end_index), (0, 2));

        let second = paginate(&rows, 2, 2);
        assert_eq!(ids(&second.rows), vec!["3"]);
        assert_eq!((second.start_index, second.end_index), (2, 3));
    }

    #[test]
    fn paginate_pages_cover_every_row_exactly_once() {
        let labels: [&'static str; 7] = ["0", "1", "2", "3", "4", "5", "6"];
        let rows: Vec<Person> = labels
            .iter()
            .enumerate()
            .map(|(i, id)| Person {
                id,
                name: "x",
                age: i as i64,
                active: false,
            })
            .collect();

        let total = paginate(&rows, 1, 3).total_pages;
        let mut seen = 0;
        for page in 1..=total {
            let view = paginate(&rows, page, 3);
            let expected = if page == total { 1 } else { 3 };
            assert_eq!(view.rows.len(), expected);
            seen += view.rows.len();
        }
        assert_eq!(seen, rows.len());
    }

    #[test]
    fn paginate_empty_has_zero_pages() {
        let view = paginate(&Vec::<Person>::new(), 1, 10);
        assert!(view.rows.is_empty());
        assert_eq!(view.total_pages, 0);
    }

    #[test]
    fn paginate_single_page_when_count_fits() {
        let view = paginate(&people(), 1, 10);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.rows.len(), 3);
    }

    #[test]
    fn paginate_clamps_out_of_range_page() {
        let view = paginate(&people(), 99, 2);
        assert_eq!(ids(&view.rows), vec!["3"]);
        assert_eq!(view.total_pages, 2);
    }

    #[test]
    fn between_is_inclusive_on_both_ends() {
        let f = SearchFilter::new("age", FilterOp::Between, FilterValue::NumberRange(25.0, 50.0));
        let out = apply_filters(&people(), &[f]);
        assert_eq!(ids(&out), vec!["1", "2"]);

        let edges = SearchFilter::new("age", FilterOp::Between, FilterValue::NumberRange(22.0, 30.0));
        let out = apply_filters(&people(), &[edges]);
        assert_eq!(ids(&out), vec!["1", "3"]);
    }

    #[test]
    fn between_with_non_range_value_matches_nothing() {
        let f = SearchFilter::new(
            "age",
            FilterOp::Between,
            FilterValue::Text("25".to_string()),
        );
        assert!(apply_filters(&people(), &[f]).is_empty());
    }

    #[test]
    fn filters_combine_with_and() {
        let wide = SearchFilter::new(
            "name",
            FilterOp::Contains,
            FilterValue::Text("ana".to_string()),
        );
        let narrow = SearchFilter::new("age", FilterOp::GreaterThan, FilterValue::Number(25.0));

        let one = apply_filters(&people(), &[wide.clone()]);
        let both = apply_filters(&people(), &[wide, narrow]);
        assert!(both.len() <= one.len());
        assert_eq!(ids(&both), vec!["1"]);
    }

    #[test]
    fn equals_compares_exact_string_forms() {
        let hit = SearchFilter::new("name", FilterOp::Equals, FilterValue::Text("Ana".to_string()));
        assert_eq!(ids(&apply_filters(&people(), &[hit])), vec!["1"]);

        let miss = SearchFilter::new("name", FilterOp::Equals, FilterValue::Text("ana".to_string()));
        assert!(apply_filters(&people(), &[miss]).is_empty());
    }

    #[test]
    fn ordering_ops_on_mismatched_kinds_match_nothing() {
        let f = SearchFilter::new(
            "name",
            FilterOp::GreaterThan,
            FilterValue::Number(10.0),
        );
        assert!(apply_filters(&people(), &[f]).is_empty());
    }

    #[test]
    fn date_filters_compare_by_date() {
        #[derive(Clone)]
        struct Visit {
            id: &'static str,
            day: NaiveDate,
        }
        impl Row for Visit {
            fn id(&self) -> String {
                self.id.to_string()
            }
            fn field(&self, key: &str) -> CellValue {
                match key {
                    "day" => self.day.into(),
                    _ => CellValue::Null,
                }
            }
        }

        let d = |s| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
        let visits = vec![
            Visit { id: "a", day: d("2026-01-10") },
            Visit { id: "b", day: d("2026-02-20") },
            Visit { id: "c", day: d("2026-03-05") },
        ];

        let range = SearchFilter::new(
            "day",
            FilterOp::Between,
            FilterValue::DateRange(d("2026-01-10"), d("2026-02-20")),
        );
        let out = apply_filters(&visits, &[range]);
        let got: Vec<_> = out.iter().map(|v| v.id).collect();
        assert_eq!(got, vec!["a", "b"]);

        let after = SearchFilter::new("day", FilterOp::GreaterThan, FilterValue::Date(d("2026-02-01")));
        let out = apply_filters(&visits, &[after]);
        let got: Vec<_> = out.iter().map(|v| v.id).collect();
        assert_eq!(got, vec!["b", "c"]);
    }

    #[test]
    fn parse_range_values() {
        assert_eq!(
            FilterValue::parse(FilterOp::Between, "25..50"),
            Some(FilterValue::NumberRange(25.0, 50.0))
        );
        let d = |s| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
        assert_eq!(
            FilterValue::parse(FilterOp::Between, "2026-01-01..2026-06-30"),
            Some(FilterValue::DateRange(d("2026-01-01"), d("2026-06-30")))
        );
        // Wrong arity or unparseable bounds are rejected at parse time.
        assert_eq!(FilterValue::parse(FilterOp::Between, "25"), None);
        assert_eq!(FilterValue::parse(FilterOp::Between, "a..b"), None);
    }

    #[test]
    fn parse_scalar_values_prefer_date_then_number() {
        assert!(matches!(
            FilterValue::parse(FilterOp::Equals, "2026-05-01"),
            Some(FilterValue::Date(_))
        ));
        assert_eq!(
            FilterValue::parse(FilterOp::LessThan, "12.5"),
            Some(FilterValue::Number(12.5))
        );
        assert_eq!(
            FilterValue::parse(FilterOp::Contains, "ana"),
            Some(FilterValue::Text("ana".to_string()))
        );
        assert_eq!(FilterValue::parse(FilterOp::Contains, "   "), None);
    }

    #[test]
    fn sort_toggle_contract() {
        let mut sort = SortState::default();
        sort.toggle("age");
        assert_eq!(sort.field.as_deref(), Some("age"));
        assert_eq!(sort.direction, SortDirection::Ascending);

        sort.toggle("age");
        assert_eq!(sort.direction, SortDirection::Descending);

        // A different column resets to ascending.
        sort.toggle("name");
        assert_eq!(sort.field.as_deref(), Some("name"));
        assert_eq!(sort.direction, SortDirection::Ascending);
    }
}
