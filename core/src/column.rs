//! Column layout for terminal output.
//!
//! Lines up a table of strings into aligned, divider-separated rows. Widths
//! are measured on the visible text, so cells carrying ANSI colour escapes
//! still line up.

use std::sync::LazyLock;

use regex::Regex;

/// Formats a table of cells into aligned lines.
///
/// Implemented by [`ColumnLayout`], and by any closure with the same shape,
/// so help rendering can be pointed at a different layout.
pub trait ColumnFormatter {
    /// Lays `rows` out as lines. `dividers[i]` is placed to the left of
    /// column `i`.
    fn format_table(&self, rows: &[Vec<String>], dividers: &[&str]) -> Vec<String>;
}

impl<F> ColumnFormatter for F
where
    F: Fn(&[Vec<String>], &[&str]) -> Vec<String>,
{
    fn format_table(&self, rows: &[Vec<String>], dividers: &[&str]) -> Vec<String> {
        self(rows, dividers)
    }
}

/// Default column layout.
///
/// # Examples
///
/// ```
/// use argot_core::{ColumnFormatter, ColumnLayout};
///
/// let rows = vec![
///     vec!["-v".to_string(), "--verbose".to_string(), "Chatty".to_string()],
///     vec!["-o".to_string(), "--out".to_string(), "Output file".to_string()],
/// ];
/// let lines = ColumnLayout::default().format_table(&rows, &["  ", "  ", "  "]);
/// assert_eq!(lines[0], "  -v  --verbose  Chatty");
/// assert_eq!(lines[1], "  -o  --out      Output file");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Emit every divider, including the trailing one, even on short rows.
    pub all_dividers: bool,
}

impl ColumnFormatter for ColumnLayout {
    fn format_table(&self, rows: &[Vec<String>], dividers: &[&str]) -> Vec<String> {
        format_table(rows, dividers, self.all_dividers)
    }
}

/// Removes ANSI colour escapes such as `\x1b[31m`.
pub fn strip_colour(text: &str) -> String {
    static COLOUR_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\x1b\[\d+(?:;\d+)*m").expect("static regex must compile"));
    COLOUR_RE.replace_all(text, "").into_owned()
}

/// Width of `text` as it appears on screen.
pub fn visible_width(text: &str) -> usize {
    strip_colour(text).chars().count()
}

/// Widest visible cell among `cells`.
pub fn column_width<'a>(cells: impl IntoIterator<Item = &'a str>) -> usize {
    cells.into_iter().map(visible_width).max().unwrap_or(0)
}

/// Lays out `table` in aligned columns.
///
/// Each cell is preceded by its column's divider and padded to the column
/// width; trailing whitespace is trimmed from every line. Rows shorter than
/// the widest row stop after their last cell, unless `all_dividers` is set,
/// in which case every divider (plus the one after the last column) is
/// emitted.
pub fn format_table(table: &[Vec<String>], dividers: &[&str], all_dividers: bool) -> Vec<String> {
    let columns = table.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|column| {
            column_width(
                table
                    .iter()
                    .filter_map(|row| row.get(column).map(String::as_str)),
            )
        })
        .collect();

    table
        .iter()
        .map(|row| {
            let mut line = String::new();
            for (column, width) in widths.iter().enumerate() {
                let cell = row.get(column);
                if cell.is_none() && !all_dividers {
                    continue;
                }
                let cell = cell.map(String::as_str).unwrap_or_default();

                line.push_str(dividers.get(column).copied().unwrap_or_default());
                line.push_str(cell);
                let padding = width.saturating_sub(visible_width(cell));
                line.extend(std::iter::repeat_n(' ', padding));
            }
            if all_dividers {
                line.push_str(dividers.get(columns).copied().unwrap_or_default());
            }
            line.trim_end().to_string()
        })
        .collect()
}

/// Lays a flat list out in up to `columns` columns, filled top to bottom.
///
/// The column count shrinks until the layout fits in `width` characters
/// (never below one). `dividers` are the left, between-column and right
/// dividers; anything other than three of them falls back to
/// `["", " ", ""]`.
///
/// # Examples
///
/// ```
/// use argot_core::column_list;
///
/// let items: Vec<String> = ["a", "b", "c", "d", "e"].iter().map(|s| s.to_string()).collect();
/// assert_eq!(column_list(&items, 2, 80, &[]), vec!["a d", "b e", "c"]);
/// ```
pub fn column_list(list: &[String], columns: usize, width: usize, dividers: &[&str]) -> Vec<String> {
    if list.is_empty() {
        return Vec::new();
    }

    let (left, middle, right) = match dividers {
        [left, middle, right] => (*left, *middle, *right),
        _ => ("", " ", ""),
    };

    let item_width = column_width(list.iter().map(String::as_str));
    let mut columns = columns.max(1);
    while columns > 1 {
        let needed = left.len() + right.len() + item_width * columns + middle.len() * (columns - 1);
        if needed <= width {
            break;
        }
        columns -= 1;
    }

    let (rows, remainder) = (list.len() / columns, list.len() % columns);
    let mut items = list.iter();
    let column_items: Vec<Vec<String>> = (0..columns)
        .map(|column| {
            let take = rows + usize::from(column < remainder);
            items.by_ref().take(take).cloned().collect()
        })
        .collect();

    let row_count = column_items.first().map(Vec::len).unwrap_or(0);
    let mut row_items: Vec<Vec<String>> = vec![Vec::new(); row_count];
    for column in &column_items {
        for (index, item) in column.iter().enumerate() {
            row_items[index].push(item.clone());
        }
    }

    let mut all: Vec<&str> = vec![left];
    all.extend(std::iter::repeat_n(middle, columns - 1));
    all.push(right);

    format_table(&row_items, &all, true)
}
