//! Process-wide escalate-only flags.
//!
//! A [`StickyFlag`] starts lowered, is seeded once from an external reading
//! on first access, and can only ever be raised afterwards. Concurrent
//! readers and writers can race, but the only possible outcome of a race is
//! a raised flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

use crate::constants::ALLOW_INTERNAL_TYPES_ENV;

/// Monotonic boolean: once raised, it stays raised for the process lifetime.
pub struct StickyFlag {
    raised: AtomicBool,
    seeded: Once,
    seed: fn() -> bool,
}

impl StickyFlag {
    /// Create a lowered flag whose first read consults `seed`.
    pub const fn new(seed: fn() -> bool) -> Self {
        Self {
            raised: AtomicBool::new(false),
            seeded: Once::new(),
            seed,
        }
    }

    /// Raise the flag. Returns `true` if this call performed the transition.
    pub fn raise(&self) -> bool {
        self.raised
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Combine an external reading with the current state. A `false`
    /// reading never lowers a raised flag.
    pub fn absorb(&self, reading: bool) {
        if reading {
            self.raise();
        }
    }

    /// Current value, seeding from the external reading on the first call.
    pub fn is_raised(&self) -> bool {
        self.seeded.call_once(|| self.absorb((self.seed)()));
        self.raised.load(Ordering::Acquire)
    }
}

impl std::fmt::Debug for StickyFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StickyFlag")
            .field("raised", &self.raised.load(Ordering::Relaxed))
            .field("seeded", &self.seeded.is_completed())
            .finish()
    }
}

/// Whether discovery may report types under the engine's own namespace.
pub static INTERNAL_TYPES: StickyFlag = StickyFlag::new(read_internal_types_env);

/// Read `URM_ALLOW_INTERNAL_TYPES`; only a case-insensitive `true` counts.
pub fn read_internal_types_env() -> bool {
    std::env::var(ALLOW_INTERNAL_TYPES_ENV)
        .map(|value| value.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Permanently allow internal types for this process.
pub fn allow_internal_types() {
    if INTERNAL_TYPES.raise() {
        tracing::debug!("internal types allowed for the rest of the process");
    }
}

pub fn internal_types_allowed() -> bool {
    INTERNAL_TYPES.is_raised()
}
