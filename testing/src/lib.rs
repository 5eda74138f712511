//! # Vitrine Testing
//!
//! Testing utilities and helpers for the Vitrine storefront state model.
//!
//! This crate provides:
//! - Mock implementations of environment traits (`FixedClock`,
//!   `SequentialIds`)
//! - In-memory and failing [`DocumentStore`](vitrine_core::storage::DocumentStore)
//!   doubles
//! - A fluent Given-When-Then builder for reducer tests
//! - Assertion helpers for effect lists
//!
//! ## Example
//!
//! ```ignore
//! use vitrine_testing::{ReducerTest, assertions};
//!
//! ReducerTest::new(StorefrontReducer)
//!     .with_env(test_environment())
//!     .given_state(StorefrontState::default())
//!     .when_action(Intent::OpenCart)
//!     .then_state(|state| assert!(state.cart_open))
//!     .then_effects(assertions::assert_no_persist)
//!     .run();
//! ```

pub mod reducer_test;

use chrono::{DateTime, Utc};
use vitrine_core::environment::{Clock, IdGenerator};

/// Mock implementations for testing.
pub mod mocks {
    use super::{Clock, DateTime, IdGenerator, Utc};
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
    use vitrine_core::storage::{DocumentStore, StorageError};

    /// Fixed clock for deterministic tests.
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use vitrine_testing::mocks::FixedClock;
    /// use vitrine_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// assert_eq!(clock.now(), clock.now());
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time.
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC).
    ///
    /// # Panics
    ///
    /// Panics if the hardcoded timestamp fails to parse, which should never
    /// happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }

    /// Deterministic id generator: one shared counter drives both shapes.
    ///
    /// `timestamp_id("p")` yields `p1001`, `p1002`, ...; `display_token()`
    /// yields `T00000001`, `T00000002`, ...
    #[derive(Debug, Default)]
    pub struct SequentialIds {
        counter: AtomicU64,
    }

    impl SequentialIds {
        /// Create a generator starting from 1.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        fn next(&self) -> u64 {
            self.counter.fetch_add(1, Ordering::Relaxed) + 1
        }
    }

    impl IdGenerator for SequentialIds {
        fn timestamp_id(&self, prefix: &str) -> String {
            format!("{prefix}{}", 1_000 + self.next())
        }

        fn display_token(&self) -> String {
            format!("T{:08}", self.next())
        }
    }

    /// In-memory document store.
    #[derive(Debug, Default)]
    pub struct MemoryStore {
        documents: Mutex<HashMap<String, String>>,
    }

    impl MemoryStore {
        /// Create an empty store.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-seed a document, e.g. to simulate a previous session or a
        /// corrupt on-disk state.
        #[must_use]
        pub fn with_document(self, key: &str, contents: &str) -> Self {
            self.documents
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .insert(key.to_string(), contents.to_string());
            self
        }
    }

    impl DocumentStore for MemoryStore {
        fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self
                .documents
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .get(key)
                .cloned())
        }

        fn write(&self, key: &str, contents: &str) -> Result<(), StorageError> {
            self.documents
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .insert(key.to_string(), contents.to_string());
            Ok(())
        }
    }

    /// Document store whose writes always fail, for exercising the
    /// best-effort persistence path (state must stay authoritative).
    #[derive(Debug, Default)]
    pub struct FailingStore {
        attempts: AtomicUsize,
    }

    impl FailingStore {
        /// Create a store that rejects every write.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Number of writes attempted against this store.
        #[must_use]
        pub fn write_attempts(&self) -> usize {
            self.attempts.load(Ordering::Relaxed)
        }
    }

    impl DocumentStore for FailingStore {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn write(&self, key: &str, _contents: &str) -> Result<(), StorageError> {
            self.attempts.fetch_add(1, Ordering::Relaxed);
            Err(StorageError::WriteRejected {
                key: key.to_string(),
                reason: "simulated quota exhaustion".to_string(),
            })
        }
    }
}

// Re-export commonly used items
pub use mocks::{FailingStore, FixedClock, MemoryStore, SequentialIds, test_clock};
pub use reducer_test::{ReducerTest, assertions};
