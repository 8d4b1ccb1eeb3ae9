use crate::models::photo::Photo;

/// Items assumed per server page; only used for next-page arithmetic.
pub const PAGE_SIZE: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    SingleColumn,
    DoubleColumn,
}

impl DisplayMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::SingleColumn => Self::DoubleColumn,
            Self::DoubleColumn => Self::SingleColumn,
        }
    }
}

/// Everything the view renders from, owned exclusively by the browse
/// controller and published as snapshots.
///
/// `photos` is the curated list in page-arrival order; `search_results`
/// is a separate list that takes over whenever `search_text` is
/// non-empty. The two loading flags double as single-flight guards, one
/// per fetch category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrowseState {
    pub photos: Vec<Photo>,
    pub search_results: Vec<Photo>,
    pub search_text: String,
    pub has_loaded_initial: bool,
    pub is_loading: bool,
    pub is_loading_more: bool,
    pub display_mode: DisplayMode,
    pub last_error: Option<String>,
}

impl BrowseState {
    /// The list the view should currently display.
    #[must_use]
    pub fn display_rows(&self) -> &[Photo] {
        if self.search_text.is_empty() {
            &self.photos
        } else {
            &self.search_results
        }
    }

    /// 1-based page to request next in browse mode, assuming every prior
    /// page was full.
    #[must_use]
    pub fn next_browse_page(&self) -> usize {
        self.photos.len() / PAGE_SIZE + 1
    }

    /// 1-based page to request next in search mode.
    #[must_use]
    pub fn next_search_page(&self) -> usize {
        self.search_results.len() / PAGE_SIZE + 1
    }
}
