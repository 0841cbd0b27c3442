use std::fmt;

/// A (row, column) position on a maze grid.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

/// A single move between 4-connected cells.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// All actions, in the order neighbours are generated while searching.
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    pub fn name(self) -> &'static str {
        match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Cell {
        Cell { row, col }
    }

    /// The cell `distance` steps away in the direction of `action`.
    /// Returns None if that would fall below row or column zero; upper bounds are the grid's concern.
    pub fn offset(self, action: Action, distance: usize) -> Option<Cell> {
        let (row, col) = (self.row, self.col);
        match action {
            Action::Up => row.checked_sub(distance).map(|r| Cell::new(r, col)),
            Action::Down => row.checked_add(distance).map(|r| Cell::new(r, col)),
            Action::Left => col.checked_sub(distance).map(|c| Cell::new(row, c)),
            Action::Right => col.checked_add(distance).map(|c| Cell::new(row, c)),
        }
    }

    #[inline]
    pub fn adjacent(self, action: Action) -> Option<Cell> {
        self.offset(action, 1)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
