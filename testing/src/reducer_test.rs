//! Ergonomic testing utilities for reducers
//!
//! This module provides a fluent API for testing reducers with readable Given-When-Then syntax.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use vitrine_core::effect::Effect;
use vitrine_core::reducer::Reducer;

/// Type alias for state assertion functions
type StateAssertion<S> = Box<dyn FnOnce(&S)>;

/// Type alias for effect assertion functions
type EffectAssertion<A, E> = Box<dyn FnOnce(&[Effect<A, E>])>;

/// Fluent API for testing reducers with Given-When-Then syntax
///
/// # Example
///
/// ```ignore
/// use vitrine_testing::ReducerTest;
///
/// ReducerTest::new(StorefrontReducer)
///     .with_env(test_environment())
///     .given_state(StorefrontState::default())
///     .when_action(Intent::OpenCart)
///     .then_state(|state| {
///         assert!(state.cart_open);
///     })
///     .then_effects(|effects| {
///         assert!(effects.is_empty());
///     })
///     .run();
/// ```
pub struct ReducerTest<R, S, A, V, E>
where
    R: Reducer<State = S, Action = A, Event = V, Environment = E>,
{
    reducer: R,
    environment: Option<E>,
    initial_state: Option<S>,
    action: Option<A>,
    state_assertions: Vec<StateAssertion<S>>,
    effect_assertions: Vec<EffectAssertion<A, V>>,
}

impl<R, S, A, V, E> ReducerTest<R, S, A, V, E>
where
    R: Reducer<State = S, Action = A, Event = V, Environment = E>,
{
    /// Create a new reducer test with the given reducer
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            environment: None,
            initial_state: None,
            action: None,
            state_assertions: Vec::new(),
            effect_assertions: Vec::new(),
        }
    }

    /// Set the environment for the test
    #[must_use]
    pub fn with_env(mut self, env: E) -> Self {
        self.environment = Some(env);
        self
    }

    /// Set the initial state (Given)
    #[must_use]
    pub fn given_state(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Set the action to test (When)
    #[must_use]
    pub fn when_action(mut self, action: A) -> Self {
        self.action = Some(action);
        self
    }

    /// Add an assertion about the resulting state (Then)
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&S) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Add an assertion about the resulting effects (Then)
    #[must_use]
    pub fn then_effects<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&[Effect<A, V>]) + 'static,
    {
        self.effect_assertions.push(Box::new(assertion));
        self
    }

    /// Run the test and execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if initial state, action, or environment is not set,
    /// or if any assertions fail.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let mut state = self
            .initial_state
            .expect("Initial state must be set with given_state()");

        let action = self.action.expect("Action must be set with when_action()");

        let env = self
            .environment
            .expect("Environment must be set with with_env()");

        // Execute reducer
        let effects = self.reducer.reduce(&mut state, action, &env);

        // Run state assertions
        for assertion in self.state_assertions {
            assertion(&state);
        }

        // Run effect assertions
        for assertion in self.effect_assertions {
            assertion(&effects);
        }
    }
}

/// Helper assertions for effect lists
pub mod assertions {
    use vitrine_core::effect::Effect;

    /// Assert that there are no effects
    ///
    /// # Panics
    ///
    /// Panics if effects is not empty.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_no_effects<A: std::fmt::Debug, E: std::fmt::Debug>(effects: &[Effect<A, E>]) {
        assert!(
            effects.is_empty() || matches!(effects, [Effect::None]),
            "Expected no effects, but found {}: {:?}",
            effects.len(),
            effects
        );
    }

    /// Assert the number of effects
    ///
    /// # Panics
    ///
    /// Panics if the number of effects doesn't match expected.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_effects_count<A, E>(effects: &[Effect<A, E>], expected: usize) {
        assert_eq!(
            effects.len(),
            expected,
            "Expected {} effects, but found {}",
            expected,
            effects.len()
        );
    }

    /// Assert that a document with the given key is persisted
    ///
    /// # Panics
    ///
    /// Panics if no `Persist` effect for `key` is found.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_persists<A, E>(effects: &[Effect<A, E>], key: &str) {
        assert!(
            effects
                .iter()
                .any(|e| matches!(e, Effect::Persist { key: k, .. } if *k == key)),
            "Expected a Persist effect for key {key:?}, but none found"
        );
    }

    /// Assert that no document write is described
    ///
    /// # Panics
    ///
    /// Panics if any `Persist` effect is found.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_no_persist<A, E>(effects: &[Effect<A, E>]) {
        assert!(
            !effects.iter().any(|e| matches!(e, Effect::Persist { .. })),
            "Expected no Persist effects, but found one"
        );
    }

    /// Assert that at least one deferred intent is described
    ///
    /// # Panics
    ///
    /// Panics if no `Defer` effect is found.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_has_defer<A, E>(effects: &[Effect<A, E>]) {
        assert!(
            effects.iter().any(|e| matches!(e, Effect::Defer(_))),
            "Expected at least one Defer effect, but none found"
        );
    }

    /// Collect the events emitted by an effect list, in order
    pub fn emitted<'a, A, E>(effects: &'a [Effect<A, E>]) -> Vec<&'a E> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Emit(event) => Some(event),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::effect::{Effect, Effects};
    use vitrine_core::reducer::Reducer;

    #[derive(Clone, Debug)]
    struct TestState {
        count: i32,
    }

    #[derive(Clone, Debug)]
    enum TestAction {
        Increment,
        Announce,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum TestEvent {
        Announced(i32),
    }

    struct TestReducer;

    struct TestEnv;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;
        type Event = TestEvent;
        type Environment = TestEnv;

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> Effects<Self::Action, Self::Event> {
            match action {
                TestAction::Increment => {
                    state.count += 1;
                    Effect::none()
                }
                TestAction::Announce => Effect::just(Effect::Emit(TestEvent::Announced(state.count))),
            }
        }
    }

    #[test]
    fn test_reducer_test_increment() {
        ReducerTest::new(TestReducer)
            .with_env(TestEnv)
            .given_state(TestState { count: 0 })
            .when_action(TestAction::Increment)
            .then_state(|state| {
                assert_eq!(state.count, 1);
            })
            .then_effects(|effects| {
                assertions::assert_no_effects(effects);
            })
            .run();
    }

    #[test]
    fn test_emitted_collects_events() {
        ReducerTest::new(TestReducer)
            .with_env(TestEnv)
            .given_state(TestState { count: 3 })
            .when_action(TestAction::Announce)
            .then_effects(|effects| {
                assert_eq!(assertions::emitted(effects), vec![&TestEvent::Announced(3)]);
            })
            .run();
    }

    #[test]
    fn test_assertions_no_effects() {
        assertions::assert_no_effects::<TestAction, TestEvent>(&[Effect::None]);
        assertions::assert_no_effects::<TestAction, TestEvent>(&[]);
    }

    #[test]
    fn test_assertions_effects_count() {
        assertions::assert_effects_count(&[Effect::<TestAction, TestEvent>::None], 1);
        assertions::assert_effects_count::<TestAction, TestEvent>(&[], 0);
    }

    #[test]
    fn test_assertions_persist() {
        let effects = [Effect::<TestAction, TestEvent>::Persist {
            key: "doc",
            document: "[]".to_string(),
        }];
        assertions::assert_persists(&effects, "doc");
        assertions::assert_no_persist::<TestAction, TestEvent>(&[]);
    }
}
