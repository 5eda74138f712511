//! Effect descriptions returned by reducers.
//!
//! Effects are NOT executed immediately. They are descriptions of what should
//! happen, returned from reducers and executed by the runtime `Store` only
//! after the state mutation that produced them has been committed. This is
//! what makes the reducers pure and the ordering guarantees of the system
//! explicit: persistence always reflects a state the observers have already
//! seen, and deferred intents always run against a committed state.

use smallvec::SmallVec;

/// The effect list returned by a reducer.
///
/// Most dispatches produce zero, one, or two effects, so the list is an
/// inline [`SmallVec`] that never allocates for the common case.
pub type Effects<A, E> = SmallVec<[Effect<A, E>; 4]>;

/// A side effect description produced by a reducer.
///
/// # Type Parameters
///
/// - `A`: the intent type, for the `Defer` feedback loop
/// - `E`: the event type delivered to observers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect<A, E> {
    /// No-op effect.
    None,

    /// Rewrite one durable document wholesale.
    ///
    /// The reducer serializes the collection it owns; the runtime performs
    /// the write. A failed write is logged and swallowed; the in-memory
    /// state remains authoritative.
    Persist {
        /// Stable document key (one per persisted collection).
        key: &'static str,
        /// Full serialized document contents.
        document: String,
    },

    /// Re-dispatch an intent after the current state transition is visible
    /// to observers.
    ///
    /// This is the commit-boundary scheduling device used for "go home,
    /// then scroll": the deferred intent is reduced in its own cycle, so
    /// anything it emits is observed strictly after the transition that
    /// deferred it.
    Defer(Box<A>),

    /// Deliver an event to the store's observers.
    ///
    /// Events are the user-visible output channel: confirmations, rejected
    /// validations, drawer opens, scroll requests.
    Emit(E),
}

impl<A, E> Effect<A, E> {
    /// An empty effect list.
    #[must_use]
    pub fn none() -> Effects<A, E> {
        SmallVec::new()
    }

    /// A single-effect list.
    #[must_use]
    pub fn just(effect: Self) -> Effects<A, E> {
        let mut effects = SmallVec::new();
        effects.push(effect);
        effects
    }

    /// Defer an intent to run after the current commit.
    #[must_use]
    pub fn defer(action: A) -> Self {
        Self::Defer(Box::new(action))
    }
}
