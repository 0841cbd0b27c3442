//! **maze_search** generates grid mazes and finds routes through them with depth first, breadth first and
//! heuristic priority searches.

pub mod cells;
pub mod errors;
pub mod frontier;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod heuristics;
pub mod masks;
pub mod pathing;
pub mod units;
pub mod utils;
