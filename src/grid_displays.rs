use itertools::Itertools;
use std::fmt;

use crate::cells::Cell;
use crate::grid::{Grid, GOAL_MARKER, OPEN_MARKER, START_MARKER, WALL_MARKER};
use crate::pathing::Solution;
use crate::utils::FnvHashSet;

/// How a grid is laid out when written as maze text.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum TextLayout {
    /// One character per cell. Parsing the output gives back an identical grid.
    Compact,
    /// The cells of a row joined by single spaces, as the maze generator writes its files.
    /// Parsing this back sees every separator as an open cell.
    SpaceJoined,
}

impl Grid {
    /// The maze text character for a cell.
    pub fn marker(&self, cell: Cell) -> char {
        if cell == self.start() {
            START_MARKER
        } else if cell == self.goal() {
            GOAL_MARKER
        } else if self.blocked(cell) {
            WALL_MARKER
        } else {
            OPEN_MARKER
        }
    }

    /// Serialize to the maze text encoding, one line per row each ending in a newline.
    pub fn to_maze_text(&self, layout: TextLayout) -> String {
        let mut output = String::with_capacity(self.height() * (self.width() * 2 + 1));
        for row in 0..self.height() {
            let mut markers = (0..self.width()).map(|col| self.marker(Cell::new(row, col)));
            match layout {
                TextLayout::Compact => output.extend(markers),
                TextLayout::SpaceJoined => output.push_str(&markers.join(" ")),
            }
            output.push('\n');
        }
        output
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_maze_text(TextLayout::Compact))
    }
}

/// A read only picture of a grid with a solution, the explored cells and a player position drawn over it.
#[derive(Debug, Clone, Copy)]
pub struct SolutionDisplay<'a> {
    grid: &'a Grid,
    solution: Option<&'a Solution>,
    explored: Option<&'a FnvHashSet<Cell>>,
    player: Option<Cell>,
}

impl<'a> SolutionDisplay<'a> {
    const WALL: char = '█';
    const ON_PATH: char = '*';
    const EXPLORED: char = '.';
    const PLAYER: char = '@';

    pub fn new(grid: &'a Grid) -> SolutionDisplay<'a> {
        SolutionDisplay {
            grid,
            solution: None,
            explored: None,
            player: None,
        }
    }

    pub fn solution(mut self, solution: Option<&'a Solution>) -> Self {
        self.solution = solution;
        self
    }

    pub fn explored(mut self, explored: Option<&'a FnvHashSet<Cell>>) -> Self {
        self.explored = explored;
        self
    }

    pub fn player(mut self, player: Option<Cell>) -> Self {
        self.player = player;
        self
    }

    fn glyph(&self, cell: Cell) -> char {
        let on_path = || self.solution.map_or(false, |s| s.cells.contains(&cell));
        let explored = || self.explored.map_or(false, |e| e.contains(&cell));

        if self.grid.blocked(cell) {
            Self::WALL
        } else if self.player == Some(cell) {
            Self::PLAYER
        } else if cell == self.grid.start() {
            START_MARKER
        } else if cell == self.grid.goal() {
            GOAL_MARKER
        } else if on_path() {
            Self::ON_PATH
        } else if explored() {
            Self::EXPLORED
        } else {
            OPEN_MARKER
        }
    }
}

impl<'a> fmt::Display for SolutionDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.grid.height() {
            let line: String = (0..self.grid.width()).map(|col| self.glyph(Cell::new(row, col))).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::cells::Action;
    use crate::utils;

    const MAZE: &str = "##B#\n#  #\n#A #\n";

    #[test]
    fn compact_text_round_trips() {
        let g = Grid::parse(MAZE).unwrap();
        let text = g.to_maze_text(TextLayout::Compact);
        assert_eq!(text, MAZE);
        assert_eq!(Grid::parse(&text).unwrap(), g);
        assert_eq!(format!("{}", g), MAZE);
    }

    #[test]
    fn ragged_input_serializes_padded() {
        let g = Grid::parse("A  \n#\nB").unwrap();
        assert_eq!(g.to_maze_text(TextLayout::Compact), "A  \n###\nB##\n");
        let reparsed = Grid::parse(&g.to_maze_text(TextLayout::Compact)).unwrap();
        assert_eq!(reparsed, g);
    }

    #[test]
    fn space_joined_text() {
        let g = Grid::parse("A#\n B").unwrap();
        assert_eq!(g.to_maze_text(TextLayout::SpaceJoined), "A #\n  B\n");
    }

    #[test]
    fn overlay_shows_path_and_explored_cells() {
        let g = Grid::parse(MAZE).unwrap();
        let solution = Solution {
            actions: vec![Action::Up, Action::Right, Action::Up],
            cells: vec![Cell::new(1, 1), Cell::new(1, 2), Cell::new(0, 2)],
        };
        let mut explored = utils::fnv_hashset(4);
        explored.insert(Cell::new(2, 1));
        explored.insert(Cell::new(1, 1));
        explored.insert(Cell::new(2, 2));

        let picture = SolutionDisplay::new(&g)
            .solution(Some(&solution))
            .explored(Some(&explored))
            .to_string();
        assert_eq!(picture, "██B█\n█**█\n█A.█\n");
    }

    #[test]
    fn overlay_shows_player() {
        let g = Grid::parse(MAZE).unwrap();
        let picture = SolutionDisplay::new(&g).player(Some(Cell::new(1, 2))).to_string();
        assert_eq!(picture, "██B█\n█ @█\n█A █\n");
    }
}
