//! One-shot loader behind the offer list.
//!
//! The loader issues a single read when the component is activated and hands
//! the result back only while the owning component is still mounted.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use contracts::domain::a001_offer::Offer;

use crate::domain::a001_offer::api::{FetchFailure, OfferSource};

/// Marks whether the owner of a pending load is still mounted
#[derive(Debug, Clone)]
pub struct Liveness(Arc<AtomicBool>);

impl Default for Liveness {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl Liveness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_live(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn revoke(&self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Lets exactly one caller through
#[derive(Debug, Default)]
pub struct OnceGuard(AtomicBool);

impl OnceGuard {
    pub fn try_begin(&self) -> bool {
        !self.0.swap(true, Ordering::AcqRel)
    }
}

pub struct OfferListLoader<S> {
    source: S,
    activated: OnceGuard,
    liveness: Liveness,
}

impl<S> OfferListLoader<S>
where
    S: OfferSource + Clone + 'static,
{
    pub fn new(source: S) -> Self {
        Self {
            source,
            activated: OnceGuard::default(),
            liveness: Liveness::new(),
        }
    }

    /// Returns the load task on the first call and `None` afterwards.
    ///
    /// The task fetches once, logs a failure, and passes the result to `apply`
    /// unless the loader was torn down in the meantime.
    pub fn activate<F>(&self, apply: F) -> Option<impl Future<Output = ()> + 'static>
    where
        F: FnOnce(Result<Vec<Offer>, FetchFailure>) + 'static,
    {
        if !self.activated.try_begin() {
            log::debug!("Offer list already activated, not fetching again");
            return None;
        }

        let source = self.source.clone();
        let liveness = self.liveness.clone();
        Some(async move {
            let result = source.fetch_offers().await;
            if let Err(err) = &result {
                log::error!("Offer list: {}", err);
            }
            if !liveness.is_live() {
                log::debug!("Offer list unmounted before the fetch settled, dropping result");
                return;
            }
            apply(result);
        })
    }

    pub fn teardown(&self) {
        self.liveness.revoke();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_offer::ui::list::state::{OfferListState, OfferListView};
    use crate::shared::test_log;
    use async_trait::async_trait;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::FutureExt;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    type FetchResult = Result<Vec<Offer>, FetchFailure>;

    #[derive(Clone)]
    struct FakeSource {
        result: FetchResult,
        calls: Rc<Cell<usize>>,
    }

    impl FakeSource {
        fn new(result: FetchResult) -> Self {
            Self {
                result,
                calls: Rc::new(Cell::new(0)),
            }
        }
    }

    #[async_trait(?Send)]
    impl OfferSource for FakeSource {
        async fn fetch_offers(&self) -> FetchResult {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    /// Settles only when the test sends a result
    #[derive(Clone)]
    struct PendingSource {
        rx: Rc<RefCell<Option<oneshot::Receiver<FetchResult>>>>,
    }

    impl PendingSource {
        fn new() -> (Self, oneshot::Sender<FetchResult>) {
            let (tx, rx) = oneshot::channel();
            let source = Self {
                rx: Rc::new(RefCell::new(Some(rx))),
            };
            (source, tx)
        }
    }

    #[async_trait(?Send)]
    impl OfferSource for PendingSource {
        async fn fetch_offers(&self) -> FetchResult {
            let rx = self.rx.borrow_mut().take();
            match rx {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(FetchFailure::network("sender dropped"))),
                None => Err(FetchFailure::network("fetched twice")),
            }
        }
    }

    fn sample() -> Vec<Offer> {
        vec![Offer::new(1, "A", "d1"), Offer::new(2, "B", "d2")]
    }

    fn shared_state() -> Rc<RefCell<OfferListState>> {
        Rc::new(RefCell::new(OfferListState::new()))
    }

    fn settle_into(
        state: &Rc<RefCell<OfferListState>>,
    ) -> impl FnOnce(FetchResult) + 'static {
        let state = state.clone();
        move |result| {
            state.borrow_mut().settle(result);
        }
    }

    #[test]
    fn test_loading_until_fetch_settles() {
        let (source, tx) = PendingSource::new();
        let loader = OfferListLoader::new(source);
        let state = shared_state();

        let mut task = Box::pin(loader.activate(settle_into(&state)).unwrap());
        assert!(task.as_mut().now_or_never().is_none());
        assert_eq!(state.borrow().render(), OfferListView::Loading);

        tx.send(Ok(sample())).unwrap();
        block_on(task);
        assert_eq!(state.borrow().render().entries().len(), 2);
    }

    #[test]
    fn test_success_renders_offers_in_order() {
        let loader = OfferListLoader::new(FakeSource::new(Ok(sample())));
        let state = shared_state();

        block_on(loader.activate(settle_into(&state)).unwrap());

        let entries = state.borrow().render().entries();
        let shown: Vec<(&str, &str)> = entries
            .iter()
            .map(|e| (e.name.as_str(), e.details.as_str()))
            .collect();
        assert_eq!(shown, vec![("A", "d1"), ("B", "d2")]);
    }

    #[test]
    fn test_empty_success() {
        let loader = OfferListLoader::new(FakeSource::new(Ok(Vec::new())));
        let state = shared_state();

        block_on(loader.activate(settle_into(&state)).unwrap());

        assert_eq!(state.borrow().render(), OfferListView::Offers(Vec::new()));
    }

    #[test]
    fn test_failure_logs_once_and_renders_empty() {
        test_log::capture();
        let loader = OfferListLoader::new(FakeSource::new(Err(FetchFailure::status(502))));
        let state = shared_state();

        block_on(loader.activate(settle_into(&state)).unwrap());

        assert_eq!(state.borrow().render(), OfferListView::Offers(Vec::new()));
        let errors = test_log::errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("HTTP 502"));
    }

    #[test]
    fn test_success_logs_no_errors() {
        test_log::capture();
        let loader = OfferListLoader::new(FakeSource::new(Ok(sample())));
        let state = shared_state();

        block_on(loader.activate(settle_into(&state)).unwrap());

        assert!(test_log::errors().is_empty());
    }

    #[test]
    fn test_fetches_once_per_mount() {
        let source = FakeSource::new(Ok(sample()));
        let calls = source.calls.clone();
        let loader = OfferListLoader::new(source);
        let state = shared_state();

        let task = loader.activate(settle_into(&state)).unwrap();
        assert!(loader.activate(settle_into(&state)).is_none());
        block_on(task);

        // re-rendering and re-activating never issue another read
        for _ in 0..3 {
            let _ = state.borrow().render();
            assert!(loader.activate(settle_into(&state)).is_none());
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_result_after_teardown_is_dropped() {
        let (source, tx) = PendingSource::new();
        let loader = OfferListLoader::new(source);
        let state = shared_state();
        let applied = Rc::new(Cell::new(false));

        let task = loader.activate({
            let applied = applied.clone();
            move |_| applied.set(true)
        });
        let mut task = Box::pin(task.unwrap());
        assert!(task.as_mut().now_or_never().is_none());

        loader.teardown();
        tx.send(Ok(sample())).unwrap();
        block_on(task);

        assert!(!applied.get());
        assert!(state.borrow().is_loading());
    }

    #[test]
    fn test_failure_after_teardown_does_not_panic() {
        let (source, tx) = PendingSource::new();
        let loader = OfferListLoader::new(source);
        let state = shared_state();

        let mut task = Box::pin(loader.activate(settle_into(&state)).unwrap());
        assert!(task.as_mut().now_or_never().is_none());

        loader.teardown();
        tx.send(Err(FetchFailure::network("reset"))).unwrap();
        block_on(task);

        assert!(state.borrow().is_loading());
    }

    #[test]
    fn test_once_guard() {
        let guard = OnceGuard::default();
        assert!(guard.try_begin());
        assert!(!guard.try_begin());
        assert!(!guard.try_begin());
    }
}
