//! # Rendering Module
//!
//! Turns library values into terminal text. Every function here returns a
//! `String` so the output can be tested without capturing stdout; the
//! command handlers do the printing.
//!
//! Styling goes through `console`, which drops escape codes automatically
//! when stdout is not a terminal.

use console::style;
use record_status::codes::CodeTable;
use record_status::filter::{FilterExpression, FilterValue, SqlFragment};
use record_status::StatusName;
use unicode_width::UnicodeWidthStr;

/// Placeholder shown when a read yields no status.
pub const NO_STATUS: &str = "-";

/// Gap between aligned columns.
const COLUMN_GAP: usize = 2;

fn pad_to(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{}{}", text, " ".repeat(fill))
}

/// Bind values as a bracketed SQL-literal list: `['A', NULL, '']`.
pub fn format_binds(binds: &[FilterValue]) -> String {
    let literals: Vec<String> = binds.iter().map(ToString::to_string).collect();
    format!("[{}]", literals.join(", "))
}

fn format_fragment(sql: &SqlFragment) -> String {
    format!("{}  {}", sql.clause, style(format_binds(&sql.binds)).dim())
}

/// The code table as two aligned columns.
pub fn render_codes(table: &CodeTable) -> String {
    if table.is_empty() {
        return "No status codes defined.\n".to_string();
    }

    let width = table
        .iter()
        .map(|entry| UnicodeWidthStr::width(entry.code.as_str()))
        .max()
        .unwrap_or(0)
        + COLUMN_GAP;

    table
        .iter()
        .map(|entry| {
            format!(
                "{}{}\n",
                style(pad_to(entry.code.as_str(), width)).bold(),
                entry.name
            )
        })
        .collect()
}

pub fn render_name(name: Option<&StatusName>) -> String {
    match name {
        Some(name) => format!("{}\n", name),
        None => format!("{}\n", NO_STATUS),
    }
}

/// Named scopes, one per line: `name  clause  [binds]`.
pub fn render_scopes(
    scopes: &[(StatusName, FilterExpression)],
    qualifier: Option<&str>,
) -> String {
    let width = scopes
        .iter()
        .map(|(name, _)| UnicodeWidthStr::width(name.as_str()))
        .max()
        .unwrap_or(0)
        + COLUMN_GAP;

    scopes
        .iter()
        .map(|(name, filter)| {
            format!(
                "{}{}\n",
                style(pad_to(name.as_str(), width)).bold(),
                format_fragment(&filter.to_sql(qualifier))
            )
        })
        .collect()
}

pub fn render_filter(filter: &FilterExpression, qualifier: Option<&str>) -> String {
    format!("{}\n", format_fragment(&filter.to_sql(qualifier)))
}
