//! The core trait for business logic.
//!
//! Reducers are pure functions: `(State, Intent, Environment) → Effects`.
//! They contain all state-transition logic, are deterministic given their
//! environment, and never perform I/O themselves.

use crate::effect::Effects;

/// The core abstraction for business logic.
///
/// # Type Parameters
///
/// - `State`: the domain state this reducer operates on
/// - `Action`: the intent type this reducer processes
/// - `Event`: the observable events this reducer can emit
/// - `Environment`: the injected dependencies this reducer needs
///
/// # Example
///
/// ```ignore
/// impl Reducer for StorefrontReducer {
///     type State = StorefrontState;
///     type Action = Intent;
///     type Event = Notice;
///     type Environment = StorefrontEnvironment;
///
///     fn reduce(
///         &self,
///         state: &mut StorefrontState,
///         action: Intent,
///         env: &StorefrontEnvironment,
///     ) -> Effects<Intent, Notice> {
///         match action {
///             Intent::GoHome => {
///                 state.view = View::Home;
///                 Effect::none()
///             }
///             // ...
///         }
///     }
/// }
/// ```
pub trait Reducer {
    /// The state type this reducer operates on.
    type State;

    /// The intent type this reducer processes.
    type Action;

    /// The event type this reducer emits to observers.
    type Event;

    /// The environment type with injected dependencies.
    type Environment;

    /// Reduce an intent into state changes and effects.
    ///
    /// This is a pure function that:
    /// 1. Validates the intent against the current state
    /// 2. Updates state in place
    /// 3. Returns effect descriptions to be executed by the runtime
    ///
    /// Invalid or unmatchable intents (unknown ids, out-of-range indices)
    /// must leave the state untouched; whether they emit an event or are
    /// silent no-ops is a per-intent contract.
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Effects<Self::Action, Self::Event>;
}
