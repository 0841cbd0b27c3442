use error_chain::bail;
use petgraph::graph::{NodeIndex, UnGraph};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

use crate::cells::{Action, Cell};
use crate::errors::*;
use crate::masks::WallMask;
use crate::units::{ColumnsCount, RowsCount};
use crate::utils;

pub const START_MARKER: char = 'A';
pub const GOAL_MARKER: char = 'B';
pub const OPEN_MARKER: char = ' ';
pub const WALL_MARKER: char = '#';

/// Open cells next to some cell, paired with the action that moves there.
pub type Neighbours = SmallVec<[(Action, Cell); 4]>;

/// A rectangular maze of open and blocked cells with a single start and a single goal.
///
/// Grids are read only once built, either by parsing maze text or by a generator.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    walls: WallMask,
    start: Cell,
    goal: Cell,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: rows: {:?}, columns: {:?}, start: {:?}, goal: {:?}, open cells: {:?}",
               self.height(), self.width(), self.start, self.goal, self.walls.open_count())
    }
}

impl Grid {
    /// Build a grid from a wall mask.
    ///
    /// Fails if the start or goal is outside the mask, is a wall, or they are the same cell.
    pub fn new(walls: WallMask, start: Cell, goal: Cell) -> Result<Grid> {
        if walls.is_wall(start) {
            bail!(ErrorKind::MalformedMaze(format!("start {} is not an open cell inside the maze", start)));
        }
        if walls.is_wall(goal) {
            bail!(ErrorKind::MalformedMaze(format!("goal {} is not an open cell inside the maze", goal)));
        }
        if start == goal {
            bail!(ErrorKind::MalformedMaze(format!("start and goal are both at {}", start)));
        }

        Ok(Grid { walls, start, goal })
    }

    /// Parse the maze text encoding: one line per row, `A` start, `B` goal, space open and anything else a wall.
    ///
    /// Rows shorter than the longest row are padded with walls.
    pub fn parse(contents: &str) -> Result<Grid> {
        let start_count = contents.matches(START_MARKER).count();
        if start_count != 1 {
            bail!(ErrorKind::MalformedMaze(format!("maze must have exactly one start point, found {}",
                                                   start_count)));
        }
        let goal_count = contents.matches(GOAL_MARKER).count();
        if goal_count != 1 {
            bail!(ErrorKind::MalformedMaze(format!("maze must have exactly one goal, found {}", goal_count)));
        }

        let lines: Vec<&str> = contents.lines().collect();
        let height = lines.len();
        let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);

        let mut walls = WallMask::all_walls(RowsCount(height), ColumnsCount(width));
        let mut start = None;
        let mut goal = None;

        for (row, line) in lines.iter().enumerate() {
            for (col, glyph) in line.chars().enumerate() {
                let cell = Cell::new(row, col);
                match glyph {
                    START_MARKER => start = Some(cell),
                    GOAL_MARKER => goal = Some(cell),
                    OPEN_MARKER => {}
                    _ => continue,
                }
                walls.open(cell);
            }
        }

        match (start, goal) {
            (Some(start), Some(goal)) => Grid::new(walls, start, goal),
            _ => bail!(ErrorKind::MalformedMaze(String::from("start or goal marker not found"))),
        }
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.walls.rows().0
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.walls.columns().0
    }

    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Is the cell a wall? Cells outside the grid count as walls.
    #[inline]
    pub fn blocked(&self, cell: Cell) -> bool {
        self.walls.is_wall(cell)
    }

    /// Open cells reachable in one move, in the order up, down, left, right.
    pub fn neighbours(&self, cell: Cell) -> Neighbours {
        Action::ALL
            .iter()
            .filter_map(|&action| {
                cell.adjacent(action)
                    .filter(|&adjacent| !self.blocked(adjacent))
                    .map(|adjacent| (action, adjacent))
            })
            .collect()
    }

    /// Where a single move from `cell` ends up, if the move is legal.
    pub fn step(&self, cell: Cell, action: Action) -> Option<Cell> {
        cell.adjacent(action).filter(|&next| !self.blocked(next))
    }

    /// Every cell of the grid in row major order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> {
        let (height, width) = (self.height(), self.width());
        (0..height).flat_map(move |row| (0..width).map(move |col| Cell::new(row, col)))
    }

    pub fn iter_open(&self) -> impl Iterator<Item = Cell> + '_ {
        self.walls.iter_open()
    }

    /// The open cells as graph nodes, with an edge between each pair of horizontally or vertically adjacent
    /// open cells.
    pub fn passage_graph(&self) -> UnGraph<Cell, ()> {
        let open_count = self.walls.open_count();
        let mut graph = UnGraph::with_capacity(open_count, open_count * 2);
        let mut node_indices = utils::fnv_hashmap::<Cell, NodeIndex>(open_count);

        for cell in self.iter_open() {
            node_indices.insert(cell, graph.add_node(cell));
        }

        // Only look down and right so each passage is added once.
        for cell in self.iter_open() {
            for &action in &[Action::Down, Action::Right] {
                if let Some(next) = self.step(cell, action) {
                    graph.add_edge(node_indices[&cell], node_indices[&next], ());
                }
            }
        }

        graph
    }
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Grid> {
        Grid::parse(s)
    }
}
