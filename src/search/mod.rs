// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking grid search.
//!
//! For every grid cell, [`enumerate`] starts an independent depth-first
//! exploration, growing a candidate word one adjacent unused cell at a
//! time. The dictionary is queried after every extension:
//!
//! - `NotFound` prunes the branch: no superstring of the candidate can be
//!   a word, so nothing beyond it is ever explored.
//! - `WordFound` emits the candidate to the sink, then keeps extending
//!   (the word may be a prefix of a longer one).
//! - `PrefixFound` keeps extending without emitting.
//!
//! Output order is fully deterministic: start cells are taken row-major
//! and neighbors in the grid's fixed clockwise order. No deduplication is
//! performed; a word reachable via distinct cell paths is emitted once per
//! path.
//!
//! Recursion depth is bounded by the cell count (the mask forbids revisits),
//! so the search always terminates.
//!
//! # Parallelization
//!
//! Start-cell searches are independent: the dictionary is read-only during
//! search and every path owns its own candidate buffer and mask. A parallel
//! variant could fan out over start cells without synchronization, at the
//! cost of interleaved emission order.

pub mod statistics;

pub use statistics::{Counters, Statistics};

use crate::dictionary::{Dictionary, LookupResult};
use crate::grid::{Coord, Grid, VisitedMask};

/// Sink capability for discovered words.
///
/// The engine invokes [`emit`](Self::emit) once per discovered
/// word-occurrence; the sink decides whether to print, collect, or filter.
pub trait WordSink {
    fn emit(&mut self, word: &str);
}

/// Sink that collects every emitted word in discovery order.
#[derive(Debug, Default)]
pub struct CollectSink {
    pub words: Vec<String>,
}

impl CollectSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WordSink for CollectSink {
    fn emit(&mut self, word: &str) {
        self.words.push(word.to_string());
    }
}

/// Sink that prints each word on its own line to stdout.
#[derive(Debug, Default)]
pub struct PrintSink;

impl WordSink for PrintSink {
    fn emit(&mut self, word: &str) {
        println!("{}", word);
    }
}

/// Adapter turning any `FnMut(&str)` closure into a sink.
///
/// A blanket `impl<F: FnMut(&str)> WordSink for F` would conflict with the
/// concrete sink impls under trait coherence, so closures go through this
/// wrapper instead.
#[derive(Debug)]
pub struct FnSink<F>(pub F);

impl<F: FnMut(&str)> WordSink for FnSink<F> {
    fn emit(&mut self, word: &str) {
        (self.0)(word);
    }
}

/// Find every dictionary word embeddable in the grid.
///
/// Emits each discovered word-occurrence to `sink` in deterministic order
/// and returns the run's [`Statistics`].
pub fn enumerate<S: WordSink>(grid: &Grid, dict: &Dictionary, sink: &mut S) -> Statistics {
    let mut stats = Statistics::new();

    for start in grid.cells() {
        stats.increment(Counters::Starts);

        let mut mask = VisitedMask::new(grid.rows(), grid.cols());
        mask.mark(start);

        let candidate = (grid.letter(start) as char).to_string();
        extend(grid, dict, sink, &mut stats, &candidate, start, &mask);
    }

    log::debug!(
        "search finished: {} starts, {} extensions, {} lookups, {} pruned, {} occurrences",
        stats.get(Counters::Starts),
        stats.get(Counters::Extensions),
        stats.total_lookups(),
        stats.lookups(LookupResult::NotFound),
        stats.get(Counters::WordsEmitted),
    );
    stats
}

/// Extend one candidate word ending at `cell`.
///
/// `mask` already marks every cell of `candidate`, including `cell`.
fn extend<S: WordSink>(
    grid: &Grid,
    dict: &Dictionary,
    sink: &mut S,
    stats: &mut Statistics,
    candidate: &str,
    cell: Coord,
    mask: &VisitedMask,
) {
    let result = dict.lookup(candidate);
    stats.record_lookup(result);

    match result {
        LookupResult::NotFound => return,
        LookupResult::WordFound => {
            stats.increment(Counters::WordsEmitted);
            sink.emit(candidate);
        }
        LookupResult::PrefixFound => {}
    }

    for next in grid.neighbors(cell) {
        if mask.is_used(next) {
            continue;
        }
        stats.increment(Counters::Extensions);

        let mut next_mask = mask.clone();
        next_mask.mark(next);

        let mut next_candidate = String::with_capacity(candidate.len() + 1);
        next_candidate.push_str(candidate);
        next_candidate.push(grid.letter(next) as char);

        extend(grid, dict, sink, stats, &next_candidate, next, &next_mask);
    }
}
