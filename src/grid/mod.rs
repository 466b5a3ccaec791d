// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Letter grid and cell addressing.
//!
//! A [`Grid`] is a fixed rectangular matrix of single letters, filled
//! row-major from a flat string and immutable afterwards. The reference
//! configuration is 4×4 but the search generalizes to any rectangle.
//!
//! Cell adjacency is 8-directional (horizontal, vertical, diagonal).
//! [`Grid::neighbors`] yields the in-bounds neighbors of a cell in a fixed
//! clockwise order starting from North:
//!
//! ```text
//! +---+---+---+
//! | 8 | 1 | 2 |
//! +---+---+---+
//! | 7 | X | 3 |
//! +---+---+---+
//! | 6 | 5 | 4 |
//! +---+---+---+
//! ```
//!
//! This order is observable: it fixes the sequence in which words are
//! discovered, so it must never change.

pub mod mask;

pub use mask::VisitedMask;

/// Number of grid rows in the reference CLI configuration.
pub const GRID_ROWS: usize = 4;

/// Number of grid columns in the reference CLI configuration.
pub const GRID_COLS: usize = 4;

/// Clockwise (row, col) neighbor offsets starting from North.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),  // N
    (-1, 1),  // NE
    (0, 1),   // E
    (1, 1),   // SE
    (1, 0),   // S
    (1, -1),  // SW
    (0, -1),  // W
    (-1, -1), // NW
];

/// Row/column address of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A fixed rectangular matrix of letters, immutable after construction.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Build a grid from a flat string of exactly `rows * cols` letters,
    /// filled row-major.
    ///
    /// # Panics
    ///
    /// Panics if the string length does not match the grid dimensions;
    /// that is a caller contract violation, not a recoverable error.
    pub fn new(rows: usize, cols: usize, letters: &str) -> Self {
        Self::try_new(rows, cols, letters).unwrap_or_else(|| {
            panic!(
                "grid string length {} does not match {}x{} grid",
                letters.len(),
                rows,
                cols
            )
        })
    }

    /// Build a grid, returning `None` if the string length does not match.
    pub fn try_new(rows: usize, cols: usize, letters: &str) -> Option<Self> {
        if letters.len() != rows * cols {
            return None;
        }
        Some(Self {
            rows,
            cols,
            cells: letters.as_bytes().to_vec(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The letter at one cell.
    pub fn letter(&self, at: Coord) -> u8 {
        debug_assert!(at.row < self.rows && at.col < self.cols);
        self.cells[at.row * self.cols + at.col]
    }

    /// All cell coordinates in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Coord { row, col }))
    }

    /// In-bounds neighbors of a cell, clockwise starting from North.
    pub fn neighbors(&self, at: Coord) -> impl Iterator<Item = Coord> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(drow, dcol)| {
            let row = at.row.checked_add_signed(drow)?;
            let col = at.col.checked_add_signed(dcol)?;
            (row < self.rows && col < self.cols).then_some(Coord { row, col })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_fill() {
        let grid = Grid::new(3, 4, "abcdefghijkl");
        assert_eq!(grid.letter(Coord::new(0, 0)), b'a');
        assert_eq!(grid.letter(Coord::new(0, 3)), b'd');
        assert_eq!(grid.letter(Coord::new(1, 0)), b'e');
        assert_eq!(grid.letter(Coord::new(2, 3)), b'l');
    }

    #[test]
    #[should_panic(expected = "does not match")]
    fn test_wrong_length_panics() {
        Grid::new(4, 4, "short");
    }

    #[test]
    fn test_try_new_wrong_length() {
        assert!(Grid::try_new(4, 4, "short").is_none());
        assert!(Grid::try_new(2, 2, "abcd").is_some());
    }

    #[test]
    fn test_cells_row_major() {
        let grid = Grid::new(2, 2, "abcd");
        let cells: Vec<Coord> = grid.cells().collect();
        assert_eq!(
            cells,
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(1, 0),
                Coord::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_neighbor_order_interior_cell() {
        let grid = Grid::new(3, 3, "abcdefghi");
        let neighbors: Vec<Coord> = grid.neighbors(Coord::new(1, 1)).collect();
        // N, NE, E, SE, S, SW, W, NW
        assert_eq!(
            neighbors,
            vec![
                Coord::new(0, 1),
                Coord::new(0, 2),
                Coord::new(1, 2),
                Coord::new(2, 2),
                Coord::new(2, 1),
                Coord::new(2, 0),
                Coord::new(1, 0),
                Coord::new(0, 0),
            ]
        );
    }

    #[test]
    fn test_neighbor_order_corner_cell() {
        let grid = Grid::new(3, 3, "abcdefghi");
        let neighbors: Vec<Coord> = grid.neighbors(Coord::new(0, 0)).collect();
        // Only E, SE, S survive the bounds filter, in clockwise order.
        assert_eq!(
            neighbors,
            vec![Coord::new(0, 1), Coord::new(1, 1), Coord::new(1, 0)]
        );
    }

    #[test]
    fn test_single_row_grid_neighbors() {
        let grid = Grid::new(1, 2, "ab");
        let neighbors: Vec<Coord> = grid.neighbors(Coord::new(0, 0)).collect();
        assert_eq!(neighbors, vec![Coord::new(0, 1)]);
    }
}
