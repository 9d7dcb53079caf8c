//! Search observer trait for progress reporting and diagnostics.

use tracing::debug;

use crate::State;

/// Callbacks invoked by [`Solver::solve_with`][crate::Solver::solve_with]
/// as the layered search advances.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Trivial rosters (one or two people)
/// skip the layered search and fire no callbacks.
///
/// # Example — frontier size printer
///
/// ```rust,ignore
/// struct Sizes;
///
/// impl SearchObserver for Sizes {
///     fn on_layer_end(&mut self, layer: usize, _kept: &[State], next: &[State]) {
///         eprintln!("layer {layer}: {} states", next.len());
///     }
/// }
/// ```
pub trait SearchObserver {
    /// Called once before the first layer.
    fn on_search_start(&mut self, _people: usize, _crossings: usize) {}

    /// Called after each crossing layer.
    ///
    /// `kept` holds the one representative per dedup key that was expanded;
    /// `next` is the un-deduplicated frontier those representatives produced.
    fn on_layer_end(&mut self, _layer: usize, _kept: &[State], _next: &[State]) {}

    /// Called once with the winning state and the final frontier size.
    fn on_search_end(&mut self, _best: &State, _frontier_len: usize) {}
}

/// A [`SearchObserver`] that does nothing.
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Emits a `debug!` event per layer and one at the end.
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn on_search_start(&mut self, people: usize, crossings: usize) {
        debug!(people, crossings, "layered search starting");
    }

    fn on_layer_end(&mut self, layer: usize, kept: &[State], next: &[State]) {
        debug!(layer, expanded = kept.len(), frontier = next.len(), "layer done");
    }

    fn on_search_end(&mut self, best: &State, frontier_len: usize) {
        debug!(elapsed = %best.elapsed(), frontier = frontier_len, "search done");
    }
}
