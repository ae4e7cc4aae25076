// ABOUTME: Fixed-capacity FIFO history of movement frames shared by all analyzers
// ABOUTME: Insertion order is chronological order; the oldest frame is evicted at capacity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_motion_core::constants::engine::DEFAULT_HISTORY_CAPACITY;
use pierre_motion_core::models::{MovementFrame, Point2};
use std::collections::VecDeque;

/// Ring buffer of recent frames
///
/// Only the engine appends and evicts; analyzers borrow it read-only.
#[derive(Debug, Clone)]
pub struct FrameHistoryBuffer {
    frames: VecDeque<MovementFrame>,
    capacity: usize,
}

impl FrameHistoryBuffer {
    /// Create an empty buffer; a zero capacity is raised to one frame
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            frames: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Build a buffer by pushing `frames` in order
    #[must_use]
    pub fn from_frames(capacity: usize, frames: impl IntoIterator<Item = MovementFrame>) -> Self {
        let mut buffer = Self::new(capacity);
        for frame in frames {
            buffer.push(frame);
        }
        buffer
    }

    /// Append a frame, returning the evicted oldest frame when full
    pub fn push(&mut self, frame: MovementFrame) -> Option<MovementFrame> {
        let evicted = if self.frames.len() == self.capacity {
            self.frames.pop_front()
        } else {
            None
        };
        self.frames.push_back(frame);
        evicted
    }

    /// Multiply every stored velocity by `factor`
    ///
    /// Used when the pixel scale changes so that stored m/s values match the
    /// scale that distances are converted with.
    pub fn rescale_velocities(&mut self, factor: f64) {
        for frame in &mut self.frames {
            frame.velocity = frame.velocity.scale(factor);
        }
    }

    /// Drop every frame
    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Most recent frame
    #[must_use]
    pub fn latest(&self) -> Option<&MovementFrame> {
        self.frames.back()
    }

    /// Number of buffered frames
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no frames are buffered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Maximum number of frames retained
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Frames oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &MovementFrame> {
        self.frames.iter()
    }

    /// Consecutive `(previous, current)` frame pairs
    pub fn pairs(&self) -> impl Iterator<Item = (&MovementFrame, &MovementFrame)> {
        self.frames.iter().zip(self.frames.iter().skip(1))
    }

    /// Pixel displacement of the centroid for every pair where both centroids are valid
    pub fn centroid_displacements(&self) -> impl Iterator<Item = Point2> + '_ {
        self.pairs()
            .filter_map(|(previous, current)| current.displacement_from(previous))
    }

    /// Milliseconds between the oldest and newest frame
    #[must_use]
    pub fn window_duration_ms(&self) -> u64 {
        match (self.frames.front(), self.frames.back()) {
            (Some(first), Some(last)) => last.timestamp_ms.saturating_sub(first.timestamp_ms),
            _ => 0,
        }
    }
}

impl Default for FrameHistoryBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
