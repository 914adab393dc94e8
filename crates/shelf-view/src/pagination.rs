//! Page arithmetic over the current view.
//!
//! Pages are 1-based. Every function here is total: out-of-range pages are
//! clamped and slices stop at the end of the view.

/// Page size used until the user picks another one, and the fallback for
/// unparseable page-size input.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Choices offered by the page-size selector.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

/// Width of the contiguous page-number window.
pub const MAX_PAGE_CONTROLS: usize = 7;

/// Number of pages needed for `view_len` items. Never less than one.
#[must_use]
pub fn total_pages(view_len: usize, page_size: usize) -> usize {
    view_len.div_ceil(page_size.max(1)).max(1)
}

/// Items shown on `page`. Pages past the end yield an empty slice.
#[must_use]
pub fn slice<T>(view: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(view.len());
    let end = start.saturating_add(page_size).min(view.len());
    &view[start..end]
}

/// Clamps a requested page into `[1, total]`.
#[must_use]
pub fn clamp_page(requested: usize, total: usize) -> usize {
    requested.clamp(1, total.max(1))
}

/// Parses page-size input the way a form field would.
///
/// Takes the leading decimal digits of the trimmed input, so `"20 per page"`
/// yields 20. Missing, unparseable, or zero input yields
/// [`DEFAULT_PAGE_SIZE`].
#[must_use]
pub fn parse_page_size(raw: &str) -> usize {
    let trimmed = raw.trim();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    match trimmed[..digits_end].parse::<usize>() {
        Ok(size) if size > 0 => size,
        _ => DEFAULT_PAGE_SIZE,
    }
}

/// One entry in the page-number button row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Page { number: usize, active: bool },
    Ellipsis,
}

impl PageControl {
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            PageControl::Page { number, .. } => number.to_string(),
            PageControl::Ellipsis => "...".to_owned(),
        }
    }

    /// Page this control navigates to, if it is a button.
    #[must_use]
    pub fn target(&self) -> Option<usize> {
        match self {
            PageControl::Page { number, .. } => Some(*number),
            PageControl::Ellipsis => None,
        }
    }
}

/// Builds the page-number row for `current` of `total` pages.
///
/// The row is a window of up to `max_to_show` contiguous pages centred on
/// `current`, re-anchored leftward when it would run past `total`. A jump to
/// page 1 is added when the window starts after it, and a jump to the last
/// page when the window ends before it. An ellipsis marks each gap of at
/// least one hidden page.
#[must_use]
pub fn page_controls(current: usize, total: usize, max_to_show: usize) -> Vec<PageControl> {
    let total = total.max(1);
    let current = current.clamp(1, total);
    let width = max_to_show.max(1);

    let mut start = current.saturating_sub(width / 2).max(1);
    let end = total.min(start + width - 1);
    if end - start < width - 1 {
        start = end.saturating_sub(width - 1).max(1);
    }

    let mut controls = Vec::with_capacity(width + 4);
    if start > 1 {
        controls.push(PageControl::Page {
            number: 1,
            active: current == 1,
        });
    }
    if start > 2 {
        controls.push(PageControl::Ellipsis);
    }
    controls.extend((start..=end).map(|number| PageControl::Page {
        number,
        active: number == current,
    }));
    if end + 1 < total {
        controls.push(PageControl::Ellipsis);
    }
    if end < total {
        controls.push(PageControl::Page {
            number: total,
            active: current == total,
        });
    }
    controls
}

/// Current page and page size.
///
/// `page` is kept within `[1, total_pages]` by every method that takes the
/// view length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    page: usize,
    page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationState {
    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn total_pages(&self, view_len: usize) -> usize {
        total_pages(view_len, self.page_size)
    }

    /// Returns to page 1.
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Changes the page size and returns to page 1. Zero falls back to the default.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        self.page = 1;
    }

    /// Moves to `requested`, clamped into the valid page range.
    pub fn go_to(&mut self, requested: usize, view_len: usize) {
        self.page = clamp_page(requested, self.total_pages(view_len));
    }

    /// Advances one page. Returns `false` on the last page.
    pub fn next(&mut self, view_len: usize) -> bool {
        if self.page < self.total_pages(view_len) {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Goes back one page. Returns `false` on the first page.
    pub fn previous(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// 1-based inclusive display range of the current page, `(0, 0)` for an
    /// empty view.
    #[must_use]
    pub fn display_range(&self, view_len: usize) -> (usize, usize) {
        let first = ((self.page - 1) * self.page_size + 1).min(view_len);
        let last = (self.page * self.page_size).min(view_len);
        (first, last)
    }
}

#[cfg(test)]
#[path = "pagination_test.rs"]
mod tests;
