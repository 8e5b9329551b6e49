use crate::domain::model::ConfigState;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

pub type Observer = Arc<dyn Fn(&ConfigState) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct Inner {
    current: ConfigState,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

/// Latest-value cache plus a list of observers, notified synchronously in
/// publish order. Late subscribers get the cached state on subscription.
#[derive(Default)]
pub struct StatePublisher {
    inner: Mutex<Inner>,
}

static SHARED: OnceLock<Arc<StatePublisher>> = OnceLock::new();

impl StatePublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide instance. Holds `Empty` until the first run publishes.
    pub fn shared() -> Arc<StatePublisher> {
        SHARED.get_or_init(|| Arc::new(StatePublisher::new())).clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn current(&self) -> ConfigState {
        self.lock().current.clone()
    }

    /// Stores `state` and notifies every observer. Returns `false` (and keeps
    /// the current value) when asked to go back to `Empty` from a loaded state.
    pub fn publish(&self, state: ConfigState) -> bool {
        let observers: Vec<Observer> = {
            let mut inner = self.lock();
            if state.is_empty() && !inner.current.is_empty() {
                tracing::warn!("Ignoring attempt to reset a published configuration state");
                return false;
            }
            inner.current = state.clone();
            inner.observers.iter().map(|(_, o)| o.clone()).collect()
        };

        tracing::debug!("Publishing state to {} observer(s)", observers.len());
        for observer in observers {
            observer(&state);
        }
        true
    }

    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&ConfigState) + Send + Sync + 'static,
    {
        let observer: Observer = Arc::new(observer);
        let (id, snapshot) = {
            let mut inner = self.lock();
            let id = SubscriptionId(inner.next_id);
            inner.next_id += 1;
            inner.observers.push((id, observer.clone()));
            (id, inner.current.clone())
        };

        observer(&snapshot);
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.lock();
        let before = inner.observers.len();
        inner.observers.retain(|(sid, _)| *sid != id);
        inner.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.lock().observers.len()
    }
}

impl std::fmt::Debug for StatePublisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("StatePublisher")
            .field("current", &inner.current)
            .field("observers", &inner.observers.len())
            .finish()
    }
}
