// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search statistics.
//!
//! Counters are accumulated during one [`enumerate`](super::enumerate) run
//! and returned to the caller. Lookup outcomes are tallied per
//! [`LookupResult`] so tests can verify pruning behavior precisely.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

use crate::dictionary::LookupResult;

#[derive(Debug, EnumCountMacro, Copy, Clone)]
#[repr(u8)]
pub enum Counters {
    /// Independent searches started (one per grid cell).
    Starts,

    /// Candidate extension steps: recursive moves to an adjacent unused
    /// cell, not counting the one-letter seed of each start.
    Extensions,

    /// Word-occurrences emitted to the sink.
    WordsEmitted,
}

const COUNT: usize = Counters::COUNT + LookupResult::COUNT;

/// Counter block for one search run.
#[derive(Debug, Default)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    pub fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Record the outcome of one dictionary lookup.
    pub fn record_lookup(&mut self, result: LookupResult) {
        self.stats[Counters::COUNT + result as usize] += 1;
    }

    /// Number of lookups that produced the given outcome.
    pub fn lookups(&self, result: LookupResult) -> u64 {
        self.stats[Counters::COUNT + result as usize]
    }

    /// Total number of dictionary lookups performed.
    pub fn total_lookups(&self) -> u64 {
        self.stats[Counters::COUNT..].iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = Statistics::new();
        assert_eq!(stats.get(Counters::Starts), 0);
        assert_eq!(stats.total_lookups(), 0);
    }

    #[test]
    fn test_increment_and_get() {
        let mut stats = Statistics::new();
        stats.increment(Counters::WordsEmitted);
        stats.increment(Counters::WordsEmitted);
        stats.increment(Counters::Extensions);
        assert_eq!(stats.get(Counters::WordsEmitted), 2);
        assert_eq!(stats.get(Counters::Extensions), 1);
        assert_eq!(stats.get(Counters::Starts), 0);
    }

    #[test]
    fn test_lookup_tallies_are_per_result() {
        let mut stats = Statistics::new();
        stats.record_lookup(LookupResult::NotFound);
        stats.record_lookup(LookupResult::PrefixFound);
        stats.record_lookup(LookupResult::PrefixFound);
        stats.record_lookup(LookupResult::WordFound);
        assert_eq!(stats.lookups(LookupResult::NotFound), 1);
        assert_eq!(stats.lookups(LookupResult::PrefixFound), 2);
        assert_eq!(stats.lookups(LookupResult::WordFound), 1);
        assert_eq!(stats.total_lookups(), 4);
    }
}
