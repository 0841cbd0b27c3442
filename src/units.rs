#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowsCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnsCount(pub usize);

/// Number of cells on the even aligned lattice (0, 2, 4...) that fit in `count` rows or columns.
#[inline]
pub fn even_aligned_count(count: usize) -> usize {
    count / 2 + count % 2
}
