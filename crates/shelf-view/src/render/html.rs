//! HTML markup for the catalog table and pagination controls.
//!
//! Text fields pass through [`escape_angle_brackets`]; nothing else is escaped.

use crate::pagination::{PageControl, PAGE_SIZE_OPTIONS};

use super::{escape_angle_brackets, PaginationView, ProductRow, Screen, TableBody};

const COLUMNS: [&str; 6] = ["Image", "ID", "Title", "Price", "Category", "Description"];

/// Markup for the `<tbody>` contents.
#[must_use]
pub fn table_body_html(body: &TableBody) -> String {
    match body {
        TableBody::Rows(rows) => rows.iter().map(row_html).collect(),
        TableBody::NoResults => format!(
            r#"<tr><td colspan="{}" class="no-results">No products found</td></tr>"#,
            COLUMNS.len()
        ),
        TableBody::Error(message) => format!(
            r#"<tr><td colspan="{}" class="error">{}</td></tr>"#,
            COLUMNS.len(),
            escape_angle_brackets(message)
        ),
    }
}

fn row_html(row: &ProductRow) -> String {
    let title = escape_angle_brackets(&row.title);
    let image_cell = if row.has_image() {
        format!(
            r#"<img src="{}" alt="{title}" class="product-image" referrerpolicy="no-referrer">"#,
            row.image_url
        )
    } else {
        r#"<div class="product-image placeholder">No Image</div>"#.to_owned()
    };
    format!(
        concat!(
            "<tr>",
            "<td>{image}</td>",
            "<td>{id}</td>",
            "<td>{title}</td>",
            "<td>{price}</td>",
            "<td>{category}</td>",
            r#"<td><div class="description-cell">Hover<div class="description-tooltip">{description}</div></div></td>"#,
            "</tr>"
        ),
        image = image_cell,
        id = row.id,
        title = title,
        price = row.price_label,
        category = escape_angle_brackets(&row.category_name),
        description = row.description_html,
    )
}

/// Markup for the page-number row, status line, and previous/next buttons.
#[must_use]
pub fn pagination_html(pagination: &PaginationView) -> String {
    let mut html = String::from(r#"<div class="pagination">"#);
    html.push_str(&format!(
        r#"<button id="prevBtn" class="pagination-btn"{}>Previous</button>"#,
        disabled_attr(pagination.previous_disabled)
    ));
    html.push_str(r#"<span id="pageNumbers">"#);
    for control in &pagination.controls {
        match control {
            PageControl::Page { number, active } => {
                let class = if *active {
                    "pagination-btn active"
                } else {
                    "pagination-btn"
                };
                html.push_str(&format!(
                    r#"<button class="{class}" data-page="{number}">{number}</button>"#
                ));
            }
            PageControl::Ellipsis => html.push_str(r#"<span class="ellipsis">...</span>"#),
        }
    }
    html.push_str("</span>");
    html.push_str(&format!(
        r#"<button id="nextBtn" class="pagination-btn"{}>Next</button>"#,
        disabled_attr(pagination.next_disabled)
    ));
    html.push_str(&format!(r#"<span id="pageInfo">{}</span>"#, pagination.status));
    html.push_str("</div>");
    html
}

fn page_size_select_html(selected: usize) -> String {
    let mut html = String::from(r#"<select id="itemsPerPage">"#);
    for size in PAGE_SIZE_OPTIONS {
        let selected_attr = if size == selected { " selected" } else { "" };
        html.push_str(&format!(
            r#"<option value="{size}"{selected_attr}>{size}</option>"#
        ));
    }
    html.push_str("</select>");
    html
}

fn disabled_attr(disabled: bool) -> &'static str {
    if disabled {
        " disabled"
    } else {
        ""
    }
}

/// A standalone HTML document showing `screen`, with `search` prefilled in
/// the search box.
#[must_use]
pub fn page_html(screen: &Screen, search: &str) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>Products</title>\n</head>\n<body>\n",
    );
    let search = escape_angle_brackets(search).replace('"', "&quot;");
    html.push_str(&format!(
        r#"<div class="controls"><input id="searchInput" type="search" placeholder="Search by title" value="{search}">{}</div>"#,
        page_size_select_html(screen.pagination.page_size)
    ));
    html.push('\n');
    html.push_str("<table>\n<thead><tr>");
    for column in COLUMNS {
        html.push_str(&format!("<th>{column}</th>"));
    }
    html.push_str("</tr></thead>\n<tbody id=\"productTableBody\">");
    html.push_str(&table_body_html(&screen.body));
    html.push_str("</tbody>\n</table>\n");
    html.push_str(&pagination_html(&screen.pagination));
    html.push_str("\n</body>\n</html>\n");
    html
}
