//! Projection of a page slice into presentation data.
//!
//! The types here carry everything a front end needs and nothing about markup.
//! [`html`] and [`text`] turn them into output.

pub mod html;
pub mod text;

use shelf_core::Product;

use crate::pagination::{page_controls, PageControl, PaginationState, MAX_PAGE_CONTROLS};

const MISSING_CATEGORY: &str = "N/A";
const MISSING_DESCRIPTION: &str = "No description";

/// One table row with display fields already derived.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub id: i64,
    pub title: String,
    /// Price formatted as dollars with two decimals, e.g. `$12.50`.
    pub price_label: String,
    pub category_name: String,
    /// Primary image, else first gallery image, else empty.
    pub image_url: String,
    /// Description with `<` and `>` escaped. Not a general sanitizer.
    pub description_html: String,
}

impl ProductRow {
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        let description = product.description.as_deref().unwrap_or_default();
        let description_html = if description.is_empty() {
            MISSING_DESCRIPTION.to_owned()
        } else {
            escape_angle_brackets(description)
        };
        Self {
            id: product.id,
            title: product.title.clone(),
            price_label: price_label(product.price),
            category_name: product
                .category_name()
                .unwrap_or(MISSING_CATEGORY)
                .to_owned(),
            image_url: product.primary_image().unwrap_or_default().to_owned(),
            description_html,
        }
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }
}

/// Formats `price` as dollars with two decimals.
///
/// Exact half-cent values (only multiples of 1/8 can be exact in binary)
/// round away from zero, and `-0.0` prints as `$0.00`.
fn price_label(price: f64) -> String {
    let price = price + 0.0;
    let eighths = (price * 8.0).abs();
    let half_cent = eighths.fract() == 0.0 && eighths % 2.0 == 1.0;
    let amount = if half_cent {
        (price * 100.0).round() / 100.0
    } else {
        price
    };
    format!("${amount:.2}")
}

/// Content of the table body.
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    Rows(Vec<ProductRow>),
    /// The page has no products; shown as a single placeholder row.
    NoResults,
    /// A single error row with a display message.
    Error(String),
}

/// Page-number row, status line, and previous/next enablement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub controls: Vec<PageControl>,
    pub current: usize,
    pub total: usize,
    /// e.g. `Page 1 / 3 (1-10 of 25)`.
    pub status: String,
    pub previous_disabled: bool,
    pub next_disabled: bool,
    pub page_size: usize,
}

/// Everything shown after an event: table body plus pagination controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub body: TableBody,
    pub pagination: PaginationView,
}

/// Projects the products of one page into table rows.
#[must_use]
pub fn render_rows(page_items: &[Product]) -> TableBody {
    if page_items.is_empty() {
        return TableBody::NoResults;
    }
    TableBody::Rows(page_items.iter().map(ProductRow::from_product).collect())
}

/// Table body for a failed fetch.
#[must_use]
pub fn render_error(message: &str) -> TableBody {
    TableBody::Error(format!("Error loading products: {message}"))
}

/// Pagination controls for a view of `view_len` items.
#[must_use]
pub fn render_pagination(state: &PaginationState, view_len: usize) -> PaginationView {
    let total = state.total_pages(view_len);
    let current = state.page();
    let (first, last) = state.display_range(view_len);
    PaginationView {
        controls: page_controls(current, total, MAX_PAGE_CONTROLS),
        current,
        total,
        status: format!("Page {current} / {total} ({first}-{last} of {view_len})"),
        previous_disabled: current <= 1,
        next_disabled: current >= total,
        page_size: state.page_size(),
    }
}

/// Escapes `<` and `>` only.
#[must_use]
pub fn escape_angle_brackets(raw: &str) -> String {
    raw.replace('<', "&lt;").replace('>', "&gt;")
}
