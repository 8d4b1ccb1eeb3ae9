use crate::api::photo_query::PhotoQueryService;
use crate::browse::intent::{BrowseIntent, Completion, FetchEffect, FetchKind};
use crate::browse::state::BrowseState;
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, warn};

/// Pure transition function: applies an intent to the state and returns
/// the fetch to dispatch, if any.
///
/// Guard rules: at most one initial/refresh fetch (`is_loading`) and at
/// most one load-more fetch (`is_loading_more`) in flight; load-more is
/// additionally rejected while an initial/refresh fetch is running.
/// Rejected intents are dropped, not queued.
pub fn reduce(state: &mut BrowseState, intent: BrowseIntent) -> Option<FetchEffect> {
    match intent {
        BrowseIntent::ViewAppeared => {
            if state.is_loading {
                return None;
            }
            // First appearance only, and only while nothing is loaded yet.
            if state.has_loaded_initial || !state.photos.is_empty() {
                return None;
            }
            state.has_loaded_initial = true;
            state.is_loading = true;
            state.last_error = None;
            Some(FetchEffect::LoadInitial)
        }
        BrowseIntent::Reload => {
            if state.is_loading {
                return None;
            }
            state.is_loading = true;
            state.last_error = None;
            Some(FetchEffect::LoadInitial)
        }
        BrowseIntent::LoadMore => {
            if state.is_loading_more || state.is_loading {
                return None;
            }
            state.is_loading_more = true;
            state.last_error = None;
            if state.search_text.is_empty() {
                Some(FetchEffect::LoadPage {
                    page: state.next_browse_page(),
                })
            } else {
                Some(FetchEffect::SearchMore {
                    query: state.search_text.clone(),
                    page: state.next_search_page(),
                })
            }
        }
        BrowseIntent::SearchTextChanged(text) => {
            state.search_text = text;
            state.search_results.clear();
            if state.search_text.is_empty() {
                // Back to browse mode, nothing to fetch.
                return None;
            }
            state.is_loading = true;
            state.last_error = None;
            Some(FetchEffect::Search {
                query: state.search_text.clone(),
                page: 1,
            })
        }
        BrowseIntent::ToggleDisplayMode => {
            state.display_mode = state.display_mode.toggled();
            None
        }
    }
}

/// Applies a fetch outcome to the state.
///
/// Success transitions replace or append per fetch kind. A failure only
/// releases the flag its own dispatch set; releasing the other category's
/// flag here could let a duplicate fetch through while one is in flight.
pub(crate) fn apply_completion(state: &mut BrowseState, completion: Completion) {
    match completion {
        Completion::InitialLoaded(photos) => {
            state.is_loading = false;
            state.photos = photos;
        }
        Completion::MoreLoaded(photos) => {
            state.is_loading_more = false;
            state.photos.extend(photos);
        }
        Completion::SearchLoaded(photos) => {
            state.is_loading = false;
            state.is_loading_more = false;
            state.search_results = photos;
        }
        Completion::SearchMoreLoaded(photos) => {
            state.is_loading_more = false;
            state.search_results.extend(photos);
        }
        Completion::Failed { kind, error } => {
            error!("Failed to fetch photos ({kind:?}): {error}");
            match kind {
                FetchKind::Initial | FetchKind::Search => state.is_loading = false,
                FetchKind::More | FetchKind::SearchMore => state.is_loading_more = false,
            }
            state.last_error = Some(error.to_string());
        }
    }
}

async fn run_fetch(service: &PhotoQueryService, effect: FetchEffect) -> Completion {
    match effect {
        FetchEffect::LoadInitial => match service.load().await {
            Ok(photos) => Completion::InitialLoaded(photos),
            Err(error) => Completion::Failed {
                kind: FetchKind::Initial,
                error,
            },
        },
        FetchEffect::LoadPage { page } => match service.load_page(page).await {
            Ok(photos) => Completion::MoreLoaded(photos),
            Err(error) => Completion::Failed {
                kind: FetchKind::More,
                error,
            },
        },
        FetchEffect::Search { query, page } => match service.search(&query, page).await {
            Ok(photos) => Completion::SearchLoaded(photos),
            Err(error) => Completion::Failed {
                kind: FetchKind::Search,
                error,
            },
        },
        FetchEffect::SearchMore { query, page } => match service.search(&query, page).await {
            Ok(photos) => Completion::SearchMoreLoaded(photos),
            Err(error) => Completion::Failed {
                kind: FetchKind::SearchMore,
                error,
            },
        },
    }
}

/// Owns the browse state and processes intents and fetch completions one
/// at a time. Fetches run in spawned tasks and re-enter through the
/// completion channel, so the state only ever has one mutator.
pub struct BrowseController {
    service: PhotoQueryService,
    state: BrowseState,
    published: watch::Sender<BrowseState>,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
    intents_rx: mpsc::UnboundedReceiver<BrowseIntent>,
}

/// Caller-side surface of a running [`BrowseController`]: send intents,
/// read published state snapshots.
#[derive(Clone)]
pub struct BrowseHandle {
    intents: mpsc::UnboundedSender<BrowseIntent>,
    state: watch::Receiver<BrowseState>,
}

impl BrowseController {
    #[must_use]
    pub fn new(service: PhotoQueryService) -> (Self, BrowseHandle) {
        let (intents_tx, intents_rx) = mpsc::unbounded_channel();
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        let (published, state_rx) = watch::channel(BrowseState::default());
        let controller = Self {
            service,
            state: BrowseState::default(),
            published,
            completions_tx,
            completions_rx,
            intents_rx,
        };
        let handle = BrowseHandle {
            intents: intents_tx,
            state: state_rx,
        };
        (controller, handle)
    }

    /// Create a controller and run it on the current runtime.
    #[must_use]
    pub fn spawn(service: PhotoQueryService) -> BrowseHandle {
        let (controller, handle) = Self::new(service);
        tokio::spawn(controller.run());
        handle
    }

    /// Process intents and completions until every handle is dropped.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                intent = self.intents_rx.recv() => match intent {
                    Some(intent) => {
                        if let Some(effect) = reduce(&mut self.state, intent) {
                            self.dispatch(effect);
                        }
                        self.publish();
                    }
                    None => break,
                },
                Some(completion) = self.completions_rx.recv() => {
                    apply_completion(&mut self.state, completion);
                    self.publish();
                }
            }
        }
        debug!("Browse controller stopped, all handles dropped");
    }

    fn publish(&self) {
        self.published.send_replace(self.state.clone());
    }

    fn dispatch(&self, effect: FetchEffect) {
        let service = self.service.clone();
        let completions = self.completions_tx.clone();
        tokio::spawn(async move {
            let completion = run_fetch(&service, effect).await;
            if completions.send(completion).is_err() {
                warn!("Browse controller stopped before a fetch completed");
            }
        });
    }
}

impl BrowseHandle {
    /// Send an intent to the controller. Intents arriving while a fetch
    /// of the same category is in flight are dropped by the guards, not
    /// queued; the caller re-triggers on its next input event.
    pub fn send(&self, intent: BrowseIntent) {
        if self.intents.send(intent).is_err() {
            warn!("Browse controller is gone, dropping intent");
        }
    }

    /// Snapshot of the most recently published state.
    #[must_use]
    pub fn state(&self) -> BrowseState {
        self.state.borrow().clone()
    }

    /// A receiver that observes every published state, for callers that
    /// want to await changes instead of polling.
    #[must_use]
    pub fn watch(&self) -> watch::Receiver<BrowseState> {
        self.state.clone()
    }
}
