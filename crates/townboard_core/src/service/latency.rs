//! Injectable delay strategy for the access facade.

use std::time::Duration;

/// Per-operation-class artificial delays.
///
/// Delay length carries no semantic meaning; callers must only rely on
/// operations eventually resolving. Tests inject [`LatencyProfile::zero`]
/// to run deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    /// Announcement list/get operations.
    pub query: Duration,
    /// Announcement create/update operations.
    pub mutation: Duration,
    /// Category listing, traditionally a little faster.
    pub categories: Duration,
}

impl LatencyProfile {
    /// Remote-call emulation used by the real UI.
    pub fn simulated() -> Self {
        Self {
            query: Duration::from_millis(120),
            mutation: Duration::from_millis(120),
            categories: Duration::from_millis(80),
        }
    }

    /// No delay at all, for tests and smoke probes.
    pub fn zero() -> Self {
        Self {
            query: Duration::ZERO,
            mutation: Duration::ZERO,
            categories: Duration::ZERO,
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::simulated()
    }
}
