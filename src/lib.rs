// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Find all dictionary words embeddable in a letter grid.
//!
//! Words are formed by chains of 8-directionally adjacent grid cells with
//! no cell used twice. The crate has two tightly coupled pieces:
//!
//! # Architecture
//!
//! ## Dictionary trie (immutable after build)
//!
//! An ordered multi-way tree of letters built once from a word list,
//! stored as an arena of nodes with sorted sibling chains. It answers the
//! trinary query "not found / valid prefix / complete word" that the
//! search relies on for pruning.
//!
//! ## Grid search (per-path mutable state)
//!
//! A depth-first backtracking enumeration over every start cell and every
//! adjacency chain. Each path owns its own candidate string and visitation
//! mask (copy-on-branch), so sibling branches never observe each other's
//! state and the read-only dictionary could be shared across parallel
//! start-cell searches without synchronization.
//!
//! # Search Algorithm
//!
//! 1. Build the dictionary from a line-oriented word source.
//! 2. For every cell in row-major order, grow candidate words one adjacent
//!    unused cell at a time, in a fixed clockwise neighbor order.
//! 3. Query the dictionary after each extension: `NotFound` prunes the
//!    branch, `WordFound` emits the candidate to the caller's sink.
//!
//! Output order is deterministic and no deduplication is performed: a word
//! reachable via distinct cell paths is emitted once per path.
//!
//! # Example
//!
//! ```
//! use wordgrid_search::dictionary::Dictionary;
//! use wordgrid_search::grid::Grid;
//! use wordgrid_search::search::{enumerate, CollectSink};
//!
//! let mut dict = Dictionary::new();
//! dict.insert("cat").unwrap();
//! dict.insert("car").unwrap();
//!
//! // 2x2 grid, rows "ca" and "rt".
//! let grid = Grid::new(2, 2, "cart");
//! let mut sink = CollectSink::new();
//! enumerate(&grid, &dict, &mut sink);
//! assert_eq!(sink.words, vec!["cat", "car"]);
//! ```

pub mod dictionary;
pub mod grid;
pub mod search;

// Re-export commonly used types
pub use dictionary::{BuildError, Dictionary, LookupResult, WordReader};
pub use grid::{Coord, Grid, VisitedMask};
pub use search::{enumerate, CollectSink, FnSink, WordSink};
