use bit_set::BitSet;

use crate::cells::Cell;
use crate::units::{ColumnsCount, RowsCount};

/// Which cells of a `rows * columns` rectangle are walls.
///
/// A bit in the set means the cell is open. Coordinates outside the rectangle are always walls.
#[derive(Debug, Clone)]
pub struct WallMask {
    open: BitSet,
    rows: usize,
    columns: usize,
}

impl WallMask {
    /// A mask of the given size with every cell a wall.
    pub fn all_walls(rows: RowsCount, columns: ColumnsCount) -> WallMask {
        let (RowsCount(rows), ColumnsCount(columns)) = (rows, columns);
        WallMask {
            open: BitSet::with_capacity(rows * columns),
            rows,
            columns,
        }
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        RowsCount(self.rows)
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        ColumnsCount(self.columns)
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.columns
    }

    /// Is the given cell a wall?
    ///
    /// Cells outside the rectangle are reported as walls rather than being an error.
    pub fn is_wall(&self, cell: Cell) -> bool {
        match self.bit_index(cell) {
            Some(bit_index) => !self.open.contains(bit_index),
            None => true,
        }
    }

    /// Knock the wall out of a cell. Returns false if the cell lies outside the mask.
    pub fn open(&mut self, cell: Cell) -> bool {
        if let Some(bit_index) = self.bit_index(cell) {
            self.open.insert(bit_index);
            true
        } else {
            false
        }
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Open cells in row major order.
    pub fn iter_open(&self) -> impl Iterator<Item = Cell> + '_ {
        let columns = self.columns;
        self.open.iter().map(move |bit_index| Cell::new(bit_index / columns, bit_index % columns))
    }

    #[inline]
    fn bit_index(&self, cell: Cell) -> Option<usize> {
        if self.contains(cell) {
            Some(cell.row * self.columns + cell.col)
        } else {
            None
        }
    }
}

impl PartialEq for WallMask {
    fn eq(&self, other: &WallMask) -> bool {
        self.rows == other.rows && self.columns == other.columns &&
        self.open.iter().eq(other.open.iter())
    }
}
impl Eq for WallMask {}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(rows: usize, columns: usize) -> WallMask {
        WallMask::all_walls(RowsCount(rows), ColumnsCount(columns))
    }

    #[test]
    fn starts_as_all_walls() {
        let m = mask(3, 4);
        for row in 0..3 {
            for col in 0..4 {
                assert!(m.is_wall(Cell::new(row, col)));
            }
        }
        assert_eq!(m.open_count(), 0);
    }

    #[test]
    fn out_of_range_is_a_wall() {
        let mut m = mask(2, 2);
        assert!(m.is_wall(Cell::new(2, 0)));
        assert!(m.is_wall(Cell::new(0, 2)));
        assert!(!m.open(Cell::new(5, 5)));
        assert_eq!(m.open_count(), 0);
    }

    #[test]
    fn opening_cells() {
        let mut m = mask(2, 3);
        assert!(m.open(Cell::new(1, 2)));
        assert!(m.open(Cell::new(0, 1)));
        assert!(!m.is_wall(Cell::new(1, 2)));
        assert!(!m.is_wall(Cell::new(0, 1)));
        assert!(m.is_wall(Cell::new(1, 1)));
        assert_eq!(m.iter_open().collect::<Vec<_>>(), vec![Cell::new(0, 1), Cell::new(1, 2)]);
    }
}
