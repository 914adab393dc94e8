//! One-shot HTML export of a single query result page.

use std::path::Path;

use anyhow::Context;
use shelf_client::ProductSource;
use shelf_view::render::html::page_html;
use shelf_view::{Controller, SortKey, TableBody};

/// Query applied, in order, after the catalog loads.
#[derive(Debug, Clone)]
pub(crate) struct ExportQuery {
    pub search: Option<String>,
    pub sort: Option<SortKey>,
    pub descending: bool,
    pub page_size: String,
    pub page: usize,
}

/// Replays `query` as user events and renders the resulting screen as HTML.
///
/// Search runs before sort because searching clears any active sort.
pub(crate) async fn render_export<S: ProductSource>(source: S, query: &ExportQuery) -> String {
    let mut controller = Controller::new(source);
    let mut screen = controller.load().await;
    if matches!(screen.body, TableBody::Error(_)) {
        return page_html(&screen, "");
    }

    if let Some(search) = &query.search {
        controller.search(search);
    }
    if let Some(key) = query.sort {
        controller.sort_by(key);
        if query.descending {
            controller.sort_by(key);
        }
    }
    controller.set_page_size(&query.page_size);
    screen = controller.go_to_page(query.page);

    page_html(&screen, query.search.as_deref().unwrap_or_default())
}

/// Writes the export to `out`, or stdout when `out` is `None`.
///
/// # Errors
///
/// Returns an error if the output cannot be written. A failed fetch is not an
/// error here: it is rendered into the page as an error row.
pub(crate) async fn run_export<S: ProductSource>(
    source: S,
    query: &ExportQuery,
    out: Option<&Path>,
) -> anyhow::Result<()> {
    let html = render_export(source, query).await;
    match out {
        Some(path) => {
            tokio::fs::write(path, html)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote catalog page");
        }
        None => print!("{html}"),
    }
    Ok(())
}
