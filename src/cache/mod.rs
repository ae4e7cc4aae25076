// ABOUTME: Throttled metrics snapshot cache decoupling frame ingestion from analysis
// ABOUTME: Recomputes only when the previous snapshot is older than the configured interval
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Wall-clock sources for the throttle
pub mod clock;

pub use clock::{Clock, ManualClock, SystemClock};

use pierre_motion_core::models::PerformanceMetrics;
use std::sync::Arc;
use tracing::trace;

#[derive(Debug, Clone)]
struct CachedSnapshot {
    metrics: Arc<PerformanceMetrics>,
    computed_at_ms: u64,
}

/// Latest metrics snapshot and when it was computed
///
/// A snapshot is reused while `now - computed_at <= interval`. A zero
/// interval disables throttling. A clock that moves backwards keeps the
/// snapshot until it moves past the interval again.
#[derive(Debug, Clone)]
pub struct MetricsCache {
    recompute_interval_ms: u64,
    entry: Option<CachedSnapshot>,
}

impl MetricsCache {
    /// Empty cache with the given throttle interval
    #[must_use]
    pub const fn new(recompute_interval_ms: u64) -> Self {
        Self {
            recompute_interval_ms,
            entry: None,
        }
    }

    /// Throttle interval in milliseconds
    #[must_use]
    pub const fn recompute_interval_ms(&self) -> u64 {
        self.recompute_interval_ms
    }

    /// Whether a new snapshot must be computed at `now_ms`
    #[must_use]
    pub fn is_stale(&self, now_ms: u64) -> bool {
        match &self.entry {
            None => true,
            Some(entry) => {
                self.recompute_interval_ms == 0
                    || now_ms.saturating_sub(entry.computed_at_ms) > self.recompute_interval_ms
            }
        }
    }

    /// Return the cached snapshot, or compute and store a fresh one when stale
    pub fn get_or_compute(
        &mut self,
        now_ms: u64,
        compute: impl FnOnce() -> PerformanceMetrics,
    ) -> Arc<PerformanceMetrics> {
        if let Some(entry) = self.entry.as_ref().filter(|_| !self.is_stale(now_ms)) {
            trace!(cache.age_ms = now_ms.saturating_sub(entry.computed_at_ms), "Metrics cache hit");
            return Arc::clone(&entry.metrics);
        }
        self.store(compute(), now_ms)
    }

    /// Replace the snapshot unconditionally
    pub fn store(&mut self, metrics: PerformanceMetrics, now_ms: u64) -> Arc<PerformanceMetrics> {
        let metrics = Arc::new(metrics);
        self.entry = Some(CachedSnapshot {
            metrics: Arc::clone(&metrics),
            computed_at_ms: now_ms,
        });
        metrics
    }

    /// Latest snapshot, if any
    #[must_use]
    pub fn snapshot(&self) -> Option<Arc<PerformanceMetrics>> {
        self.entry.as_ref().map(|entry| Arc::clone(&entry.metrics))
    }

    /// Drop the snapshot so the next request recomputes
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
