//! Event types and sinks for observing point generation.
//!
//! This module defines [`GenerationEvent`] and a set of sinks to emit or collect
//! events while running [`crate::placement::generator::generate_points_with_events`].
use glam::DVec2;

use crate::placement::config::GenerationConfig;
use crate::placement::generator::GenerationReport;

/// Describes events emitted by the rejection sampler.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum GenerationEvent {
    /// Emitted once before the first candidate is drawn.
    Started {
        /// The generation configuration used.
        config: GenerationConfig,
    },

    /// Emitted when a candidate passes the separation test.
    PointAccepted {
        /// Zero-based position in draw order (uid - 1).
        index: usize,
        /// The accepted point.
        point: DVec2,
        /// Candidates drawn so far, including this one.
        attempts: usize,
    },

    /// Emitted when all requested points were placed.
    Finished {
        /// Summary of the run.
        report: GenerationReport,
    },

    /// Non-fatal warning generated during generation.
    Warning {
        /// Context string (e.g. the policy tag).
        context: String,
        /// Human-readable message.
        message: String,
    },
}

/// A generic event sink that accepts [`GenerationEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: GenerationEvent);
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: GenerationEvent) {}
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(GenerationEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(GenerationEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(GenerationEvent),
{
    #[inline]
    fn send(&mut self, event: GenerationEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<GenerationEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<GenerationEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[GenerationEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: GenerationEvent) {
        self.events.push(event);
    }
}
