//! # Delayed Reveal
//!
//! A [`CatalogView`] recomputes its result list synchronously on every query change, but
//! only publishes it after a fixed delay. While the delay runs the view reports itself
//! as loading. Each view owns at most one pending reveal:
//!
//! - a new query aborts the pending reveal before scheduling its own,
//! - every scheduled reveal carries a generation number, and it publishes only if that
//!   generation is still the latest when it fires (checked under the channel lock),
//! - closing or dropping the view aborts the pending reveal.
//!
//! The published [`RevealState`] is observed through a `tokio::sync::watch` receiver,
//! so a client can `select!` on it alongside its input.
//!
//! Views must be created and changed inside a tokio runtime.

use super::{facets, pipeline, CatalogRecord, Facet, Filter, Query};
use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

pub const REVEAL_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct RevealState<R> {
    pub loading: bool,
    pub visible: Vec<R>,
    generation: u64,
    reveals: u64,
}

impl<R> RevealState<R> {
    fn initial() -> Self {
        Self {
            loading: true,
            visible: Vec::new(),
            generation: 0,
            reveals: 0,
        }
    }

    /// Number of recomputes so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of reveals actually published.
    pub fn reveals(&self) -> u64 {
        self.reveals
    }
}

pub struct CatalogView<R: CatalogRecord> {
    records: Cow<'static, [R]>,
    query: Query<R::Sort>,
    computed: Vec<R>,
    delay: Duration,
    state: Arc<watch::Sender<RevealState<R>>>,
    pending: Option<JoinHandle<()>>,
}

impl<R: CatalogRecord> CatalogView<R> {
    /// Opens the view with the default query and schedules the first reveal.
    pub fn open(records: impl Into<Cow<'static, [R]>>, delay: Duration) -> Self {
        let (tx, _) = watch::channel(RevealState::initial());
        let mut view = Self {
            records: records.into(),
            query: Query::default(),
            computed: Vec::new(),
            delay,
            state: Arc::new(tx),
            pending: None,
        };
        view.recompute();
        view
    }

    pub fn query(&self) -> &Query<R::Sort> {
        &self.query
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Results of the current query, whether or not they have been revealed yet.
    pub fn computed(&self) -> &[R] {
        &self.computed
    }

    pub fn subscribe(&self) -> watch::Receiver<RevealState<R>> {
        self.state.subscribe()
    }

    pub fn state(&self) -> RevealState<R> {
        self.state.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// Distinct values of `facet` across every record of the view.
    pub fn facets(&self, facet: Facet) -> Vec<String> {
        facets::values(&self.records, facet)
    }

    pub fn set_search(&mut self, term: impl Into<String>) -> bool {
        let mut next = self.query.clone();
        next.set_search(term);
        self.set_query(next)
    }

    pub fn set_filter(&mut self, facet: Facet, filter: Filter) -> bool {
        let mut next = self.query.clone();
        next.set_filter(facet, filter);
        self.set_query(next)
    }

    pub fn set_sort(&mut self, sort: R::Sort) -> bool {
        let mut next = self.query.clone();
        next.set_sort(sort);
        self.set_query(next)
    }

    pub fn reset(&mut self) -> bool {
        self.set_query(Query::default())
    }

    /// Replaces the query. Returns false, and schedules nothing, when it is unchanged.
    pub fn set_query(&mut self, query: Query<R::Sort>) -> bool {
        if query == self.query {
            return false;
        }
        self.query = query;
        self.recompute();
        true
    }

    pub fn close(self) {}

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                trace!(catalog = R::NAME, "cancelled pending reveal");
            }
            handle.abort();
        }
    }

    fn recompute(&mut self) {
        self.computed = pipeline::run(&self.records, &self.query);
        self.cancel_pending();

        let mut generation = 0;
        self.state.send_modify(|s| {
            s.generation += 1;
            s.loading = true;
            generation = s.generation;
        });

        let state = Arc::clone(&self.state);
        let results = self.computed.clone();
        let delay = self.delay;
        debug!(
            catalog = R::NAME,
            generation,
            matched = results.len(),
            "scheduled reveal"
        );

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let published = state.send_if_modified(|s| {
                if s.generation != generation {
                    return false;
                }
                s.loading = false;
                s.visible = results;
                s.reveals += 1;
                true
            });
            if published {
                debug!(catalog = R::NAME, generation, "revealed");
            }
        }));
    }
}

impl<R: CatalogRecord> Drop for CatalogView<R> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BookSort, CardSort};
    use crate::data;
    use crate::model::{Book, Card};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn ids<R: CatalogRecord>(records: &[R]) -> Vec<u32> {
        records.iter().map(|r| r.id()).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn reveals_only_after_the_delay() {
        let view = CatalogView::<Book>::open(data::books(), REVEAL_DELAY);
        assert!(view.is_loading());
        assert_eq!(view.computed().len(), 8);

        tokio::time::sleep(ms(499)).await;
        let state = view.state();
        assert!(state.loading);
        assert!(state.visible.is_empty());

        tokio::time::sleep(ms(2)).await;
        let state = view.state();
        assert!(!state.loading);
        assert_eq!(ids(&state.visible), (1..=8).collect::<Vec<_>>());
        assert_eq!(state.reveals(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn new_query_cancels_pending_reveal() {
        let mut view = CatalogView::<Book>::open(data::books(), REVEAL_DELAY);

        tokio::time::sleep(ms(300)).await;
        assert!(view.set_sort(BookSort::Title));

        // The first timer would have fired at 500ms.
        tokio::time::sleep(ms(300)).await;
        let state = view.state();
        assert!(state.loading);
        assert!(state.visible.is_empty());
        assert_eq!(state.reveals(), 0);

        tokio::time::sleep(ms(300)).await;
        let state = view.state();
        assert!(!state.loading);
        assert_eq!(state.reveals(), 1);
        assert_eq!(state.visible.first().map(|b| b.title.as_str()), Some("Clean Code"));
    }

    #[tokio::test(start_paused = true)]
    async fn last_query_wins_over_a_burst() {
        let mut view = CatalogView::<Book>::open(data::books(), REVEAL_DELAY);
        let mut rx = view.subscribe();

        for term in ["c", "cl", "cle", "clean"] {
            view.set_search(term);
            tokio::time::sleep(ms(100)).await;
        }
        view.set_search("react");

        rx.wait_for(|s| !s.loading).await.unwrap();
        let state = rx.borrow().clone();
        assert_eq!(state.reveals(), 1);
        assert_eq!(state.generation(), 6);
        assert_eq!(ids(&state.visible), vec![3]);
    }

    #[tokio::test(start_paused = true)]
    async fn identical_query_is_a_no_op() {
        let mut view = CatalogView::<Card>::open(data::cards(), REVEAL_DELAY);
        tokio::time::sleep(ms(600)).await;
        assert_eq!(view.state().reveals(), 1);

        assert!(!view.set_search(""));
        assert!(!view.set_sort(CardSort::Default));
        assert!(!view.set_filter(Facet::Platform, Filter::All));
        assert!(!view.is_loading());

        tokio::time::sleep(ms(600)).await;
        let state = view.state();
        assert_eq!(state.reveals(), 1);
        assert_eq!(state.generation(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn closing_cancels_the_timer() {
        let view = CatalogView::<Card>::open(data::cards(), REVEAL_DELAY);
        let rx = view.subscribe();
        view.close();

        tokio::time::sleep(ms(1000)).await;
        let state = rx.borrow();
        assert!(state.loading);
        assert_eq!(state.reveals(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_reveals_default_order() {
        let mut view = CatalogView::<Card>::open(data::cards(), ms(50));
        view.set_filter(Facet::Platform, Filter::only("Web"));
        view.set_sort(CardSort::Size);
        tokio::time::sleep(ms(60)).await;
        assert_eq!(ids(&view.state().visible), vec![1, 6, 4, 2]);

        assert!(view.reset());
        assert!(view.is_loading());
        tokio::time::sleep(ms(60)).await;
        assert_eq!(ids(&view.state().visible), (1..=9).collect::<Vec<_>>());
    }

    #[tokio::test(start_paused = true)]
    async fn owned_records_are_supported() {
        let books: Vec<Book> = data::books()[..2].to_vec();
        let view = CatalogView::<Book>::open(books, ms(10));
        assert_eq!(view.facets(Facet::SampleType), vec!["Code Examples", "Sample Chapter"]);
        tokio::time::sleep(ms(20)).await;
        assert_eq!(view.state().visible.len(), 2);
    }
}
