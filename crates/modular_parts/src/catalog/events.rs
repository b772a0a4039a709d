//! Event types and sinks for observing catalog assembly.
//!
//! [`crate::catalog::assembly::Assembler::assemble_with_events`] reports every
//! selection, skipped set and warning to an [`EventSink`].
use crate::catalog::assembly::{AssemblyResult, Selection};
use crate::catalog::config::ModularConfig;

/// Describes events emitted while assembling a catalog.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum AssemblyEvent {
    /// Emitted when assembly starts.
    AssemblyStarted {
        /// The configuration in effect.
        config: ModularConfig,
        /// Number of sets in the catalog.
        set_count: usize,
    },

    /// Emitted when a part was drawn for a set.
    PartSelected {
        /// Index of the set in the catalog.
        set_index: usize,
        /// The selection made.
        selection: Selection,
    },

    /// Emitted for every set counted in [`AssemblyResult::sets_skipped`].
    SetSkipped {
        set_index: usize,
        set_name: String,
        reason: SkipReason,
    },

    /// Non-fatal warning; a failed draw emits one before its `SetSkipped`.
    Warning {
        /// Context string (e.g. set name).
        context: String,
        /// Human-readable message.
        message: String,
    },

    /// Emitted when assembly finishes.
    AssemblyFinished { result: AssemblyResult },
}

/// Why a set produced no selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The set is inactive and the config does not include inactive sets.
    Inactive,
    /// The draw failed, e.g. the set has no parts or a negative weight.
    DrawFailed,
}

/// A generic event sink that accepts [`AssemblyEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: AssemblyEvent);
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: AssemblyEvent) {}
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(AssemblyEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(AssemblyEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(AssemblyEvent),
{
    #[inline]
    fn send(&mut self, event: AssemblyEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<AssemblyEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<AssemblyEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[AssemblyEvent] {
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
    fn send(&mut self, event: AssemblyEvent) {
        self.events.push(event);
    }
}
