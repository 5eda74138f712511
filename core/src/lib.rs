//! # Vitrine Core
//!
//! Core traits and types for the Vitrine storefront state model.
//!
//! This crate provides the fundamental abstractions for a client-resident
//! application whose entire behavior is a single in-memory state value
//! mutated through named user intents.
//!
//! ## Core Concepts
//!
//! - **State**: the single source of truth (catalog, ledger, cart, view)
//! - **Intent**: a named user action raised by the presentation layer
//! - **Reducer**: pure function `(State, Intent, Environment) → Effects`
//! - **Effect**: side effect descriptions (not execution)
//! - **Environment**: injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Explicit Effects (no hidden I/O)
//! - Dependency Injection via Environment
//!
//! ## Example
//!
//! ```
//! use vitrine_core::effect::{Effect, Effects};
//! use vitrine_core::reducer::Reducer;
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterIntent {
//!     Increment,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterEvent {}
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterIntent;
//!     type Event = CounterEvent;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut CounterState,
//!         action: CounterIntent,
//!         _env: &(),
//!     ) -> Effects<CounterIntent, CounterEvent> {
//!         match action {
//!             CounterIntent::Increment => {
//!                 state.count += 1;
//!                 Effects::new()
//!             }
//!         }
//!     }
//! }
//! ```

pub mod effect;
pub mod environment;
pub mod reducer;
pub mod storage;

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use smallvec::SmallVec;
