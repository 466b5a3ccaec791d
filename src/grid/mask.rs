// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-path visitation mask.
//!
//! One mask exists per search path, marking which cells the current
//! candidate word has already consumed. Masks are cloned at every branch
//! (copy-on-branch) so sibling branches of the search tree never observe
//! each other's marks. This is deliberately not a single shared mask with
//! undo-on-backtrack: the copy makes every exit path trivially correct.

use super::Coord;

/// Boolean matrix with the same shape as the grid it shadows.
#[derive(Debug, Clone)]
pub struct VisitedMask {
    rows: usize,
    cols: usize,
    used: Vec<bool>,
}

impl VisitedMask {
    /// A fresh mask with every cell unused.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            used: vec![false; rows * cols],
        }
    }

    /// Mark one cell as consumed by the current candidate.
    pub fn mark(&mut self, at: Coord) {
        debug_assert!(at.row < self.rows && at.col < self.cols);
        self.used[at.row * self.cols + at.col] = true;
    }

    pub fn is_used(&self, at: Coord) -> bool {
        debug_assert!(at.row < self.rows && at.col < self.cols);
        self.used[at.row * self.cols + at.col]
    }
}
