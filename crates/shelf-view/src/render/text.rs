//! Plain-text rendering for terminals.

use crate::pagination::PageControl;

use super::{PaginationView, Screen, TableBody};

const TITLE_WIDTH: usize = 40;
const CATEGORY_WIDTH: usize = 16;

/// Renders the table body as fixed-width text, one line per product.
#[must_use]
pub fn table_text(body: &TableBody) -> String {
    match body {
        TableBody::Rows(rows) => {
            let mut out = format!(
                "{:>6}  {:<TITLE_WIDTH$}  {:>10}  {:<CATEGORY_WIDTH$}\n",
                "ID", "Title", "Price", "Category"
            );
            for row in rows {
                out.push_str(&format!(
                    "{:>6}  {:<TITLE_WIDTH$}  {:>10}  {:<CATEGORY_WIDTH$}\n",
                    row.id,
                    truncate(&row.title, TITLE_WIDTH),
                    row.price_label,
                    truncate(&row.category_name, CATEGORY_WIDTH),
                ));
            }
            out
        }
        TableBody::NoResults => "No products found\n".to_owned(),
        TableBody::Error(message) => format!("{message}\n"),
    }
}

/// Renders the page-number row and status, e.g. `< [1] 2 3 >  Page 1 / 3 (1-10 of 25)`.
///
/// The active page is bracketed; disabled previous/next arrows are blanked.
#[must_use]
pub fn pagination_text(pagination: &PaginationView) -> String {
    let mut out = String::from(if pagination.previous_disabled { " " } else { "<" });
    for control in &pagination.controls {
        match control {
            PageControl::Page {
                number,
                active: true,
            } => out.push_str(&format!(" [{number}]")),
            other => out.push_str(&format!(" {}", other.label())),
        }
    }
    out.push(' ');
    out.push(if pagination.next_disabled { ' ' } else { '>' });
    out.push_str(&format!("  {}", pagination.status));
    out
}

/// Table followed by the pagination line.
#[must_use]
pub fn screen_text(screen: &Screen) -> String {
    let mut out = table_text(&screen.body);
    out.push_str(&pagination_text(&screen.pagination));
    out.push('\n');
    out
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_owned();
    }
    let mut cut: String = value.chars().take(width.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}
