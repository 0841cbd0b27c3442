//! Distance estimates from a cell to the goal, for the priority ordered search.

use std::str::FromStr;

use crate::cells::Cell;
use crate::errors::*;
use crate::frontier::Priority;

pub trait Heuristic {
    fn estimate(&self, from: Cell, goal: Cell) -> Priority;
}

impl<F> Heuristic for F
    where F: Fn(Cell, Cell) -> Priority
{
    fn estimate(&self, from: Cell, goal: Cell) -> Priority {
        self(from, goal)
    }
}

/// `|(goal.row - from.row) + (goal.col - from.col)|`
///
/// Row and column offsets of opposite sign cancel out, so this is not a metric: cells on the goal's
/// anti-diagonal all estimate zero. Combined with the constant step cost the priority search is not
/// guaranteed to find a shortest path.
#[derive(Debug, Copy, Clone, Default)]
pub struct SummedOffset;

impl Heuristic for SummedOffset {
    fn estimate(&self, from: Cell, goal: Cell) -> Priority {
        let row_offset = goal.row as isize - from.row as isize;
        let col_offset = goal.col as isize - from.col as isize;
        (row_offset + col_offset).abs() as Priority
    }
}

/// `|goal.row - from.row| + |goal.col - from.col|`, admissible on a 4-connected grid.
#[derive(Debug, Copy, Clone, Default)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    fn estimate(&self, from: Cell, goal: Cell) -> Priority {
        abs_diff(goal.row, from.row) + abs_diff(goal.col, from.col)
    }
}

/// A heuristic chosen by name at run time: `summed-offset` or `manhattan`.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum HeuristicKind {
    SummedOffset,
    Manhattan,
}

impl FromStr for HeuristicKind {
    type Err = Error;

    fn from_str(name: &str) -> Result<HeuristicKind> {
        match name {
            "summed-offset" => Ok(HeuristicKind::SummedOffset),
            "manhattan" => Ok(HeuristicKind::Manhattan),
            _ => Err(format!("unknown heuristic '{}', expected summed-offset or manhattan", name).into()),
        }
    }
}

impl Heuristic for HeuristicKind {
    fn estimate(&self, from: Cell, goal: Cell) -> Priority {
        match *self {
            HeuristicKind::SummedOffset => SummedOffset.estimate(from, goal),
            HeuristicKind::Manhattan => Manhattan.estimate(from, goal),
        }
    }
}

#[inline]
fn abs_diff(a: usize, b: usize) -> usize {
    if a > b { a - b } else { b - a }
}
