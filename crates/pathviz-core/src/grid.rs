//! The [`GridModel`]: a square board of `num_cells × num_cells` cells.

use crate::error::GridError;
use crate::geom::Cell;

/// Bounds of a square board.
///
/// The model holds no cell contents; walls live in an
/// [`ObstacleSet`](crate::ObstacleSet) owned by the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridModel {
    num_cells: i32,
}

impl GridModel {
    /// Create a board with `num_cells` rows and columns.
    ///
    /// Fails with [`GridError::InvalidSize`] unless `num_cells` is positive.
    pub fn new(num_cells: i32) -> Result<Self, GridError> {
        if num_cells <= 0 {
            return Err(GridError::InvalidSize(num_cells));
        }
        Ok(Self { num_cells })
    }

    /// Side length of the board.
    #[inline]
    pub fn num_cells(self) -> i32 {
        self.num_cells
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        let n = self.num_cells as usize;
        n * n
    }

    /// Always `false`: a model is never built with a non-positive size.
    #[inline]
    pub fn is_empty(self) -> bool {
        false
    }

    /// Whether `cell` satisfies `0 <= row, col < num_cells`.
    #[inline]
    pub fn contains(self, cell: Cell) -> bool {
        cell.row >= 0 && cell.row < self.num_cells && cell.col >= 0 && cell.col < self.num_cells
    }

    /// Row-major flat index of `cell`, or `None` outside the board.
    #[inline]
    pub fn index(self, cell: Cell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        Some(cell.row as usize * self.num_cells as usize + cell.col as usize)
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn cell(self, idx: usize) -> Cell {
        let n = self.num_cells as usize;
        Cell::new((idx / n) as i32, (idx % n) as i32)
    }

    /// Top-left and bottom-right corners, the default endpoints of a board.
    pub fn corners(self) -> (Cell, Cell) {
        (Cell::ORIGIN, Cell::new(self.num_cells - 1, self.num_cells - 1))
    }

    /// In-bounds cardinal neighbours of `cell` in expansion order.
    pub fn neighbors(self, cell: Cell) -> impl Iterator<Item = Cell> {
        cell.neighbors_4().into_iter().filter(move |&n| self.contains(n))
    }

    /// Row-major iterator over every cell.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let n = self.num_cells;
        (0..n).flat_map(move |row| (0..n).map(move |col| Cell::new(row, col)))
    }

    /// Odd coordinates `1, 3, 5, …` strictly below `num_cells - 1`.
    ///
    /// These are the carve nodes of a backtracking maze; the last row and
    /// column are always left as border.
    pub fn odd_coords(self) -> impl Iterator<Item = i32> {
        (1..self.num_cells - 1).step_by(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_size() {
        assert_eq!(GridModel::new(0), Err(GridError::InvalidSize(0)));
        assert_eq!(GridModel::new(-3), Err(GridError::InvalidSize(-3)));
        assert!(GridModel::new(1).is_ok());
    }

    #[test]
    fn bounds() {
        let g = GridModel::new(5).unwrap();
        assert!(g.contains(Cell::new(0, 0)));
        assert!(g.contains(Cell::new(4, 4)));
        assert!(!g.contains(Cell::new(5, 0)));
        assert!(!g.contains(Cell::new(0, -1)));
        assert_eq!(g.len(), 25);
    }

    #[test]
    fn index_round_trip() {
        let g = GridModel::new(7).unwrap();
        for c in g.cells() {
            let i = g.index(c).unwrap();
            assert_eq!(g.cell(i), c);
        }
        assert_eq!(g.index(Cell::new(1, 0)), Some(7));
        assert_eq!(g.index(Cell::new(7, 0)), None);
    }

    #[test]
    fn corner_neighbors_are_clipped() {
        let g = GridModel::new(3).unwrap();
        let n: Vec<_> = g.neighbors(Cell::new(0, 0)).collect();
        assert_eq!(n, vec![Cell::new(0, 1), Cell::new(1, 0)]);
    }

    #[test]
    fn odd_coords_exclude_last_line() {
        let g = GridModel::new(15).unwrap();
        let odd: Vec<_> = g.odd_coords().collect();
        assert_eq!(odd, vec![1, 3, 5, 7, 9, 11, 13]);

        let g = GridModel::new(4).unwrap();
        assert_eq!(g.odd_coords().collect::<Vec<_>>(), vec![1]);

        let g = GridModel::new(2).unwrap();
        assert_eq!(g.odd_coords().count(), 0);
    }

    #[test]
    fn cells_are_row_major() {
        let g = GridModel::new(2).unwrap();
        let cells: Vec<_> = g.cells().collect();
        assert_eq!(
            cells,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(1, 0),
                Cell::new(1, 1)
            ]
        );
    }
}
