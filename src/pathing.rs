//! Graph search over a maze grid.
//!
//! Both search flavours share one loop: take a node off the frontier, stop if it is the goal, otherwise mark its
//! cell explored and push the unexplored neighbours. What differs is the frontier's removal order and whether a
//! cell already waiting in the frontier may be pushed again.
//!
//! Nodes taken off the frontier go into an arena `Vec` and children refer to their parent by arena index, so the
//! path is rebuilt by walking indices back to the root without any shared ownership between nodes.

use error_chain::bail;
use log::{debug, trace};

use crate::cells::{Action, Cell};
use crate::errors::*;
use crate::frontier::{Frontier, FrontierKind, NodeId, Priority, SearchNode};
use crate::grid::Grid;
use crate::heuristics::Heuristic;
use crate::utils::{self, FnvHashSet};

/// The moves from the start to the goal, and the cell each move enters. The start cell is not included, the goal
/// is the last cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub actions: Vec<Action>,
    pub cells: Vec<Cell>,
}

impl Solution {
    /// Number of moves.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Does replaying the actions from the grid's start pass through `cells` and finish on the goal?
    pub fn follows(&self, grid: &Grid) -> bool {
        if self.actions.len() != self.cells.len() {
            return false;
        }

        let mut position = grid.start();
        for (&action, &cell) in self.actions.iter().zip(self.cells.iter()) {
            match grid.step(position, action) {
                Some(next) if next == cell => position = next,
                _ => return false,
            }
        }
        position == grid.goal()
    }
}

/// How the priority search charges for reaching a cell, the `g` in `g + h`.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CostModel {
    /// Every cell costs 1 however far it is from the start. Paths found are not necessarily the shortest.
    ConstantStep,
    /// The number of moves from the start. With an admissible heuristic this is A* and finds a shortest path.
    PathDepth,
}

#[derive(Debug, Copy, Clone)]
pub struct SearchOptions {
    pub max_iterations: Option<usize>,
    pub cost_model: CostModel,
}

impl Default for SearchOptions {
    fn default() -> SearchOptions {
        SearchOptions {
            max_iterations: None,
            cost_model: CostModel::ConstantStep,
        }
    }
}

#[derive(Debug, Default)]
pub struct SearchOptionsBuilder {
    options: SearchOptions,
}

impl SearchOptionsBuilder {
    pub fn new() -> SearchOptionsBuilder {
        SearchOptionsBuilder::default()
    }

    /// Give up with `IterationLimitExceeded` once this many nodes have been taken off the frontier.
    pub fn max_iterations(mut self, max_iterations: Option<usize>) -> Self {
        self.options.max_iterations = max_iterations;
        self
    }

    pub fn cost_model(mut self, cost_model: CostModel) -> Self {
        self.options.cost_model = cost_model;
        self
    }

    pub fn build(self) -> SearchOptions {
        self.options
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
enum Expansion {
    /// Skip neighbours that are explored or already waiting in the frontier.
    UnseenOnly,
    /// Skip only explored neighbours. A cell may sit in the frontier more than once.
    UnexploredOnly,
}

/// Path finding from a grid's start to its goal.
///
/// The explored cells and the count of nodes taken off the frontier are kept from the most recent solve for
/// rendering and reporting. Each solve starts from scratch.
#[derive(Debug)]
pub struct PathSearch<'g> {
    grid: &'g Grid,
    options: SearchOptions,
    explored: FnvHashSet<Cell>,
    num_explored: usize,
    nodes: Vec<SearchNode>,
}

impl<'g> PathSearch<'g> {
    pub fn new(grid: &'g Grid) -> PathSearch<'g> {
        PathSearch::with_options(grid, SearchOptions::default())
    }

    pub fn with_options(grid: &'g Grid, options: SearchOptions) -> PathSearch<'g> {
        PathSearch {
            grid,
            options,
            explored: utils::fnv_hashset(0),
            num_explored: 0,
            nodes: vec![],
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        self.grid
    }

    /// Cells expanded by the last solve.
    #[inline]
    pub fn explored(&self) -> &FnvHashSet<Cell> {
        &self.explored
    }

    /// Nodes taken off the frontier by the last solve, the goal node included.
    #[inline]
    pub fn num_explored(&self) -> usize {
        self.num_explored
    }

    /// Uninformed search. A `Lifo` frontier searches depth first, `Fifo` breadth first (shortest path).
    ///
    /// Neighbours are generated up, down, left, right, so the path found is deterministic for a given grid and
    /// frontier kind even when several paths are equally short.
    pub fn solve(&mut self, kind: FrontierKind) -> Result<Solution> {
        debug!("{:?} search from {} to {}", kind, self.grid.start(), self.grid.goal());
        self.search(Frontier::new(kind), Expansion::UnseenOnly, |_| 0)
    }

    /// Priority search ordered by `g + h`, `h` being the heuristic's estimate from a cell to the goal.
    ///
    /// A cell is only expanded once, the first time it comes off the frontier. There is no decrease-key: later
    /// copies of an explored cell are dropped even if they were reached more cheaply.
    pub fn solve_informed<H: Heuristic>(&mut self, heuristic: &H) -> Result<Solution> {
        let goal = self.grid.goal();
        let cost_model = self.options.cost_model;
        debug!("priority search ({:?}) from {} to {}", cost_model, self.grid.start(), goal);

        self.search(Frontier::new(FrontierKind::Priority),
                    Expansion::UnexploredOnly,
                    |child: &SearchNode| {
                        let g = match cost_model {
                            CostModel::ConstantStep => 1,
                            CostModel::PathDepth => child.depth,
                        };
                        g + heuristic.estimate(child.state, goal)
                    })
    }

    fn reset(&mut self) {
        self.explored.clear();
        self.num_explored = 0;
        self.nodes.clear();
    }

    fn search<P>(&mut self, mut frontier: Frontier, expansion: Expansion, child_priority: P) -> Result<Solution>
        where P: Fn(&SearchNode) -> Priority
    {
        self.reset();
        frontier.add(SearchNode::root(self.grid.start()));

        loop {
            if frontier.is_empty() {
                debug!("no solution after exploring {} states", self.num_explored);
                bail!(ErrorKind::NoSolution);
            }
            if let Some(limit) = self.options.max_iterations {
                if self.num_explored >= limit {
                    bail!(ErrorKind::IterationLimitExceeded(limit));
                }
            }

            let node = frontier.remove()?;
            self.num_explored += 1;

            if node.state == self.grid.goal() {
                let solution = self.path_to(node);
                debug!("found a path of {} moves after exploring {} states", solution.len(), self.num_explored);
                return Ok(solution);
            }

            if !self.explored.insert(node.state) {
                // A stale copy of a cell that was already expanded.
                continue;
            }
            trace!("expanding {} (frontier holds {})", node.state, frontier.len());

            let node_id = NodeId(self.nodes.len());
            self.nodes.push(node);

            for &(action, state) in self.grid.neighbours(node.state).iter() {
                if self.explored.contains(&state) {
                    continue;
                }
                if expansion == Expansion::UnseenOnly && frontier.contains_state(state) {
                    continue;
                }
                let child = SearchNode::child(node_id, &node, action, state);
                let priority = child_priority(&child);
                frontier.add(child.with_priority(priority));
            }
        }
    }

    fn path_to(&self, goal_node: SearchNode) -> Solution {
        let mut actions = Vec::with_capacity(goal_node.depth);
        let mut cells = Vec::with_capacity(goal_node.depth);

        let mut current = goal_node;
        while let (Some(parent_id), Some(action)) = (current.parent, current.action) {
            actions.push(action);
            cells.push(current.state);
            current = self.nodes[parent_id.0];
        }

        actions.reverse();
        cells.reverse();
        Solution { actions, cells }
    }
}
