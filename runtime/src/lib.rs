//! # Vitrine Runtime
//!
//! The imperative shell of the storefront: a [`Store`] that owns the state,
//! runs intents through the reducer, and executes the resulting effects.
//!
//! The whole system is single-threaded and event-driven. Every mutation
//! happens in response to a discrete intent processed to completion before
//! the next one is handled, so the store is a plain owned value with
//! `&mut self` dispatch: no locks, no tasks, no channels.
//!
//! ## Ordering guarantees
//!
//! For each dispatched intent, in order:
//!
//! 1. the reducer mutates the state (the commit),
//! 2. persistence effects rewrite their documents (best effort),
//! 3. emitted events are delivered to observers alongside the new state,
//! 4. deferred intents run, each with its own commit-then-effects cycle.
//!
//! Observers therefore always see a state at least as new as the event they
//! are handed, and a deferred intent always runs after the transition that
//! deferred it was visible.

pub mod file_store;

pub use file_store::FileStore;

use std::collections::VecDeque;
use std::sync::Arc;

use vitrine_core::effect::Effect;
use vitrine_core::reducer::Reducer;
use vitrine_core::storage::DocumentStore;

/// Callback registered by the presentation layer.
///
/// Receives the committed state and one emitted event.
pub type Observer<S, E> = Box<dyn FnMut(&S, &E)>;

/// Deferred-intent cycles allowed per dispatch. A reducer that keeps
/// deferring past this is stuck in a feedback loop; the tail is dropped.
const MAX_CYCLES_PER_SEND: usize = 32;

/// The runtime store: owns state, reducer, environment, and storage.
///
/// # Example
///
/// ```ignore
/// let documents: Arc<dyn DocumentStore> = Arc::new(FileStore::new(data_dir));
/// let mut store = Store::new(initial_state, StorefrontReducer, env, documents);
///
/// store.subscribe(|state, event| render(state, event));
///
/// let notices = store.send(Intent::AddToCart { product_id });
/// ```
pub struct Store<R: Reducer> {
    state: R::State,
    reducer: R,
    environment: R::Environment,
    documents: Arc<dyn DocumentStore>,
    observers: Vec<Observer<R::State, R::Event>>,
}

impl<R> Store<R>
where
    R: Reducer,
    R::Action: std::fmt::Debug,
    R::Event: Clone + std::fmt::Debug,
{
    /// Create a new store with initial state, reducer, environment, and
    /// document storage.
    #[must_use]
    pub fn new(
        initial_state: R::State,
        reducer: R,
        environment: R::Environment,
        documents: Arc<dyn DocumentStore>,
    ) -> Self {
        Self {
            state: initial_state,
            reducer,
            environment,
            documents,
            observers: Vec::new(),
        }
    }

    /// Register an observer notified after each commit, once per emitted
    /// event.
    ///
    /// Observers are the seam for the presentation layer: they re-render
    /// from the state and surface user-visible events (confirmations,
    /// rejected validations, drawer opens).
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&R::State, &R::Event) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Borrow the current state.
    #[must_use]
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// The document storage this store persists into.
    #[must_use]
    pub fn documents(&self) -> Arc<dyn DocumentStore> {
        Arc::clone(&self.documents)
    }

    /// Dispatch an intent and process it to completion.
    ///
    /// Returns every event emitted during the dispatch, including those of
    /// deferred cycles, in delivery order. The same events are handed to
    /// subscribed observers; the return value exists so a caller that just
    /// dispatched can react synchronously (show an alert, pick up an order
    /// confirmation) without subscribing.
    ///
    /// Persistence failures are logged and swallowed here: the in-memory
    /// state is authoritative and the mutation path never fails.
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub fn send(&mut self, action: R::Action) -> Vec<R::Event> {
        let mut queue = VecDeque::new();
        queue.push_back(action);

        let mut emitted = Vec::new();
        let mut cycles = 0;

        while let Some(action) = queue.pop_front() {
            if cycles == MAX_CYCLES_PER_SEND {
                tracing::warn!(
                    dropped = queue.len() + 1,
                    "deferred intent loop exceeded {MAX_CYCLES_PER_SEND} cycles"
                );
                break;
            }
            cycles += 1;

            tracing::debug!(?action, "reducing intent");
            let effects = self
                .reducer
                .reduce(&mut self.state, action, &self.environment);

            // State is committed; now run what the reducer described.
            for effect in effects {
                match effect {
                    Effect::None => {}
                    Effect::Persist { key, document } => {
                        if let Err(error) = self.documents.write(key, &document) {
                            tracing::warn!(key, %error, "document write failed; state kept in memory");
                        } else {
                            tracing::debug!(key, bytes = document.len(), "document rewritten");
                        }
                    }
                    Effect::Defer(action) => queue.push_back(*action),
                    Effect::Emit(event) => {
                        tracing::debug!(?event, "emitting event");
                        for observer in &mut self.observers {
                            observer(&self.state, &event);
                        }
                        emitted.push(event);
                    }
                }
            }
        }

        emitted
    }
}
