use std::future::Future;
use std::time::Duration;

use tokio::select;
use tokio::sync::{mpsc, watch};
use tokio::time::{Instant, sleep_until};

use crate::catalog::Page;
use crate::catalog::errors::CatalogResult;
use crate::listing::query::QueryState;

/// Quiet period before a search draft becomes the effective search.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Fetch status of a listing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No fetch in flight; `data` matches the committed query.
    Idle,
    /// A fetch for the committed query is in flight.
    Loading,
    /// The last fetch failed; `data` still holds the previous good page.
    Error,
}

/// Observable state of one listing view.
#[derive(Debug, Clone)]
pub struct ListingSnapshot<T> {
    /// Committed query driving requests and the URL.
    pub query: QueryState,
    /// Uncommitted search text, echoed immediately on every keystroke.
    pub draft: String,
    pub phase: Phase,
    /// Last successfully fetched page, kept across failed refreshes.
    pub data: Option<Page<T>>,
    /// URL query string matching the last successful fetch.
    pub url_query: String,
}

enum Event {
    SearchInput(String),
    PageSelected(usize),
}

/// Owns the query state of one mounted listing view.
///
/// Runs as a task reacting to input events, the debounce timer, and fetch
/// completions. Every commit bumps a generation counter and completions
/// from superseded generations are dropped, so the last committed state
/// always wins regardless of response ordering. Dropping the controller
/// closes the event channel, which stops the loop; in-flight fetches then
/// resolve into a closed channel and have no effect.
pub struct ListingController<T> {
    events: mpsc::UnboundedSender<Event>,
    snapshots: watch::Receiver<ListingSnapshot<T>>,
}

impl<T> ListingController<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Mounts a view: spawns the event loop and issues the fetch for the
    /// seeded query.
    pub fn spawn<F, Fut>(initial: QueryState, fetch: F) -> Self
    where
        F: FnMut(QueryState) -> Fut + Send + 'static,
        Fut: Future<Output = CatalogResult<Page<T>>> + Send + 'static,
    {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (done_tx, done_rx) = mpsc::unbounded_channel();

        let snapshot = ListingSnapshot {
            draft: initial.search_text.clone(),
            url_query: initial.to_query_string(),
            query: initial,
            phase: Phase::Loading,
            data: None,
        };
        let (snap_tx, snap_rx) = watch::channel(snapshot.clone());

        let mut inner = Inner {
            fetch,
            snapshot,
            snap_tx,
            done_tx,
            done_rx,
            event_rx,
            generation: 0,
            deadline: None,
        };

        tokio::spawn(async move {
            inner.start_fetch();
            inner.run().await;
        });

        Self {
            events: event_tx,
            snapshots: snap_rx,
        }
    }

    /// Raw keystroke. Updates the draft immediately; the effective search
    /// commits only after [`SEARCH_DEBOUNCE`] of quiet.
    pub fn search_input(&self, text: impl Into<String>) {
        let _ = self.events.send(Event::SearchInput(text.into()));
    }

    /// Page selection; takes effect immediately.
    pub fn select_page(&self, page: usize) {
        let _ = self.events.send(Event::PageSelected(page));
    }

    pub fn snapshot(&self) -> ListingSnapshot<T> {
        self.snapshots.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ListingSnapshot<T>> {
        self.snapshots.clone()
    }
}

struct Inner<T, F> {
    fetch: F,
    snapshot: ListingSnapshot<T>,
    snap_tx: watch::Sender<ListingSnapshot<T>>,
    done_tx: mpsc::UnboundedSender<(u64, CatalogResult<Page<T>>)>,
    done_rx: mpsc::UnboundedReceiver<(u64, CatalogResult<Page<T>>)>,
    event_rx: mpsc::UnboundedReceiver<Event>,
    generation: u64,
    deadline: Option<Instant>,
}

impl<T, F, Fut> Inner<T, F>
where
    T: Clone + Send + Sync + 'static,
    F: FnMut(QueryState) -> Fut,
    Fut: Future<Output = CatalogResult<Page<T>>> + Send + 'static,
{
    async fn run(&mut self) {
        loop {
            let deadline = self.deadline;
            let debounce = async move {
                match deadline {
                    Some(at) => sleep_until(at).await,
                    None => std::future::pending().await,
                }
            };

            select! {
                event = self.event_rx.recv() => match event {
                    // View unmounted: cancel the debounce and stop. Any
                    // in-flight fetch resolves into a closed channel.
                    None => break,
                    Some(Event::SearchInput(text)) => {
                        self.snapshot.draft = text;
                        self.deadline = Some(Instant::now() + SEARCH_DEBOUNCE);
                        self.publish();
                    }
                    Some(Event::PageSelected(page)) => {
                        if self.snapshot.query.commit_page(page) {
                            self.start_fetch();
                        }
                    }
                },
                _ = debounce => {
                    self.deadline = None;
                    let draft = self.snapshot.draft.clone();
                    if self.snapshot.query.commit_search(&draft) {
                        self.start_fetch();
                    }
                },
                Some((generation, result)) = self.done_rx.recv() => {
                    if generation != self.generation {
                        // Superseded before it resolved.
                        continue;
                    }
                    match result {
                        Ok(page) => {
                            self.snapshot.phase = Phase::Idle;
                            self.snapshot.url_query = self.snapshot.query.to_query_string();
                            self.snapshot.data = Some(page);
                        }
                        Err(err) => {
                            log::warn!(
                                "Listing fetch failed for {}: {err}",
                                self.snapshot.query.to_query_string()
                            );
                            self.snapshot.phase = Phase::Error;
                        }
                    }
                    self.publish();
                },
            }
        }
    }

    fn start_fetch(&mut self) {
        self.generation += 1;
        let generation = self.generation;
        let done = self.done_tx.clone();
        let request = (self.fetch)(self.snapshot.query.clone());
        tokio::spawn(async move {
            let _ = done.send((generation, request.await));
        });
        self.snapshot.phase = Phase::Loading;
        self.publish();
    }

    fn publish(&self) {
        let _ = self.snap_tx.send(self.snapshot.clone());
    }
}
