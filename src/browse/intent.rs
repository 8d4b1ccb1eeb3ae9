use crate::common::api_client::ApiClientError;
use crate::models::photo::Photo;

/// User-facing inputs to the browse controller.
#[derive(Debug, Clone, PartialEq)]
pub enum BrowseIntent {
    /// The view became visible. Triggers the initial fetch at most once
    /// per controller lifetime.
    ViewAppeared,
    /// Explicit refresh of the curated listing, replacing it wholesale.
    Reload,
    /// The user scrolled near the end of the active list.
    LoadMore,
    /// The search field changed. Empty text reverts to browse mode.
    SearchTextChanged(String),
    /// Flip between single- and double-column layout.
    ToggleDisplayMode,
}

/// Which fetch a dispatched effect belongs to. Determines the completion
/// transition and which loading flag a failure must release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    Initial,
    More,
    Search,
    SearchMore,
}

/// Side effect descriptor produced by [`reduce`](crate::browse::reduce).
/// The effect runner turns each into exactly one fetch and one
/// [`Completion`] fed back into the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchEffect {
    /// Default curated page, no query parameters.
    LoadInitial,
    /// A specific curated page, appended on success.
    LoadPage { page: usize },
    /// Fresh search, page 1, replacing the search results on success.
    Search { query: String, page: usize },
    /// Next search page, appended to the search results on success.
    SearchMore { query: String, page: usize },
}

/// Terminal outcome of a dispatched fetch, re-entering the controller's
/// sequence. Every dispatched effect produces exactly one of these.
#[derive(Debug)]
pub(crate) enum Completion {
    InitialLoaded(Vec<Photo>),
    MoreLoaded(Vec<Photo>),
    SearchLoaded(Vec<Photo>),
    SearchMoreLoaded(Vec<Photo>),
    Failed {
        kind: FetchKind,
        error: ApiClientError,
    },
}
