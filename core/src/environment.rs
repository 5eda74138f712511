//! Dependency injection traits.
//!
//! All external dependencies of the reducers (time and identifier
//! generation) are abstracted behind traits and injected via the
//! Environment parameter. Production implementations live here; fixed and
//! sequential test doubles live in `vitrine-testing`.

use chrono::{DateTime, Utc};
use rand::Rng;

/// Abstracts time operations for testability.
///
/// # Examples
///
/// ```
/// use vitrine_core::environment::{Clock, SystemClock};
///
/// let clock = SystemClock;
/// let now = clock.now();
/// assert!(now.timestamp() > 0);
/// ```
pub trait Clock: Send + Sync {
    /// Get the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Identifier generation for new aggregate entries.
///
/// Two shapes are produced, matching the two places the system mints ids:
/// catalog entries carry a time-ordered token (stable, sortable by
/// creation), while orders carry a short random display token shown to the
/// customer in the confirmation. Neither is required to be unguessable.
pub trait IdGenerator: Send + Sync {
    /// A time-ordered token with the given prefix, e.g. `p1735689600000`.
    fn timestamp_id(&self, prefix: &str) -> String;

    /// A short random display token, e.g. `K3F8Q1Z7X`.
    fn display_token(&self) -> String;
}

/// Length of the random display token, matching the historical order ids.
const DISPLAY_TOKEN_LEN: usize = 9;

const BASE36: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Production id generator: millisecond timestamps and random base36 tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemIds;

impl IdGenerator for SystemIds {
    fn timestamp_id(&self, prefix: &str) -> String {
        format!("{prefix}{}", Utc::now().timestamp_millis())
    }

    fn display_token(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..DISPLAY_TOKEN_LEN)
            .map(|_| char::from(BASE36[rng.gen_range(0..BASE36.len())]))
            .collect()
    }
}
