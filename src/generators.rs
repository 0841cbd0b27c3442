use error_chain::bail;
use log::debug;
use petgraph::algo;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::cells::{Action, Cell};
use crate::errors::*;
use crate::grid::Grid;
use crate::masks::WallMask;
use crate::units::{even_aligned_count, ColumnsCount, RowsCount};

/// Carve a perfect maze with the recursive backtracker (randomized depth first search) algorithm.
///
/// Maze cells sit on the even rows and columns; the odd rows and columns are the walls between them, knocked out
/// where a passage joins two cells. Carving starts from a random even aligned cell and visits every other even
/// aligned cell exactly once, so the open cells always form a spanning tree: exactly one route between any
/// two of them.
///
/// The carving origin becomes the start. The goal is drawn independently from the even aligned cells, redrawn
/// if it lands on the start. As every even aligned cell is carved the goal is always reachable.
///
/// Fails with `InvalidDimensions` unless the grid has room for at least two even aligned cells, or if the cell
/// count does not fit in a `usize`.
pub fn generate<R: Rng>(rows: RowsCount, columns: ColumnsCount, rng: &mut R) -> Result<Grid> {
    let (RowsCount(rows_count), ColumnsCount(columns_count)) = (rows, columns);
    if rows_count.checked_mul(columns_count).is_none() {
        bail!(ErrorKind::InvalidDimensions(rows_count, columns_count));
    }
    // No larger than rows * columns, so cannot overflow.
    let lattice_size = even_aligned_count(rows_count) * even_aligned_count(columns_count);
    if lattice_size < 2 {
        bail!(ErrorKind::InvalidDimensions(rows_count, columns_count));
    }

    let mut walls = WallMask::all_walls(rows, columns);
    let start = random_even_aligned_cell(rows, columns, rng);
    carve_passages_from(start, &mut walls, rng);

    let goal = loop {
        let candidate = random_even_aligned_cell(rows, columns, rng);
        if candidate != start {
            break candidate;
        }
    };

    debug!("carved a {}x{} maze, {} open cells, start {} goal {}",
           rows_count, columns_count, walls.open_count(), start, goal);
    Grid::new(walls, start, goal)
}

/// `generate` driven by a generator seeded with `seed`. The same seed gives the same maze.
pub fn generate_with_seed(rows: RowsCount, columns: ColumnsCount, seed: u64) -> Result<Grid> {
    let mut rng = XorShiftRng::seed_from_u64(seed);
    generate(rows, columns, &mut rng)
}

/// Are the open cells one connected region without any loops?
pub fn is_perfect_maze(grid: &Grid) -> bool {
    let graph = grid.passage_graph();
    graph.node_count() > 0 &&
    algo::connected_components(&graph) == 1 &&
    !algo::is_cyclic_undirected(&graph)
}

fn random_even_aligned_cell<R: Rng>(rows: RowsCount, columns: ColumnsCount, rng: &mut R) -> Cell {
    let row = rng.gen_range(0..even_aligned_count(rows.0)) * 2;
    let col = rng.gen_range(0..even_aligned_count(columns.0)) * 2;
    Cell::new(row, col)
}

/// One level of the carving recursion: a cell and the shuffled order its two step neighbours are tried in.
struct CarveFrame {
    cell: Cell,
    directions: [Action; 4],
    next_direction: usize,
}

impl CarveFrame {
    fn enter<R: Rng>(cell: Cell, rng: &mut R) -> CarveFrame {
        let mut directions = Action::ALL;
        directions.shuffle(rng);
        CarveFrame {
            cell,
            directions,
            next_direction: 0,
        }
    }
}

// Iterative form of the recursive carve, so large mazes cannot overflow the call stack. Each frame resumes its
// direction list where it left off when the frame above it returns.
fn carve_passages_from<R: Rng>(origin: Cell, walls: &mut WallMask, rng: &mut R) {
    walls.open(origin);
    let mut stack = vec![CarveFrame::enter(origin, rng)];

    while let Some(frame) = stack.last_mut() {
        if frame.next_direction == frame.directions.len() {
            stack.pop();
            continue;
        }

        let action = frame.directions[frame.next_direction];
        frame.next_direction += 1;
        let cell = frame.cell;

        let target = cell.offset(action, 2).filter(|&t| walls.contains(t) && walls.is_wall(t));
        if let (Some(target), Some(between)) = (target, cell.offset(action, 1)) {
            walls.open(target);
            walls.open(between);
            stack.push(CarveFrame::enter(target, rng));
        }
    }
}

#[cfg(test)]
mod tests {

    use quickcheck::{quickcheck, TestResult};

    use super::*;
    use crate::frontier::FrontierKind;
    use crate::grid_displays::TextLayout;
    use crate::heuristics::SummedOffset;
    use crate::pathing::PathSearch;

    fn maze(rows: usize, columns: usize, seed: u64) -> Grid {
        generate_with_seed(RowsCount(rows), ColumnsCount(columns), seed).expect("valid dimensions")
    }

    fn is_invalid_dimensions(result: Result<Grid>) -> bool {
        match result {
            Err(e) => match *e.kind() {
                ErrorKind::InvalidDimensions(..) => true,
                _ => false,
            },
            Ok(_) => false,
        }
    }

    #[test]
    fn start_and_goal_are_distinct_even_aligned_open_cells() {
        for seed in 0..50 {
            let g = maze(11, 15, seed);
            assert_eq!(g.height(), 11);
            assert_eq!(g.width(), 15);
            for &cell in &[g.start(), g.goal()] {
                assert!(!g.blocked(cell));
                assert_eq!(cell.row % 2, 0);
                assert_eq!(cell.col % 2, 0);
            }
            assert!(g.start() != g.goal());
        }
    }

    #[test]
    fn every_even_aligned_cell_is_carved() {
        let g = maze(10, 10, 7);
        for cell in g.iter().filter(|c| c.row % 2 == 0 && c.col % 2 == 0) {
            assert!(!g.blocked(cell), "{} was not carved", cell);
        }
        for cell in g.iter().filter(|c| c.row % 2 == 1 && c.col % 2 == 1) {
            assert!(g.blocked(cell), "{} is a wall lattice corner", cell);
        }
        // An even row count leaves the last row as a wall.
        assert!((0..10).all(|col| g.blocked(Cell::new(9, col))));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        assert_eq!(maze(21, 21, 1234), maze(21, 21, 1234));
    }

    #[test]
    fn too_small_dimensions_are_rejected() {
        let gen = |rows, columns| generate_with_seed(RowsCount(rows), ColumnsCount(columns), 0);
        assert!(is_invalid_dimensions(gen(0, 5)));
        assert!(is_invalid_dimensions(gen(5, 0)));
        assert!(is_invalid_dimensions(gen(1, 1)));
        assert!(is_invalid_dimensions(gen(2, 2)));
        assert!(is_invalid_dimensions(gen(usize::MAX, 3)));
        assert!(is_invalid_dimensions(gen(usize::MAX / 2, 4)));
        assert!(gen(1, 3).is_ok());
        assert!(gen(3, 1).is_ok());
    }

    #[test]
    fn single_row_maze_is_a_corridor() {
        let g = maze(1, 7, 99);
        assert!((0..7).all(|col| !g.blocked(Cell::new(0, col))));
        assert!(is_perfect_maze(&g));
    }

    #[test]
    fn large_maze_does_not_exhaust_the_stack() {
        let g = maze(401, 401, 5);
        assert!(is_perfect_maze(&g));
        assert_eq!(g.iter_open().count(), 201 * 201 + (201 * 201 - 1));
    }

    #[test]
    fn generated_text_parses_back() {
        let g = maze(9, 13, 3);
        assert_eq!(Grid::parse(&g.to_maze_text(TextLayout::Compact)).unwrap(), g);

        let spaced = Grid::parse(&g.to_maze_text(TextLayout::SpaceJoined)).unwrap();
        assert_eq!(spaced.width(), 13 * 2 - 1);
        assert_eq!(spaced.start(), Cell::new(g.start().row, g.start().col * 2));
        assert_eq!(spaced.goal(), Cell::new(g.goal().row, g.goal().col * 2));
    }

    #[test]
    fn quickcheck_generated_mazes_are_perfect() {
        fn p(rows: u8, columns: u8, seed: u64) -> TestResult {
            let (rows, columns) = (rows as usize % 40 + 1, columns as usize % 40 + 1);
            if even_aligned_count(rows) * even_aligned_count(columns) < 2 {
                return TestResult::discard();
            }
            let g = maze(rows, columns, seed);
            TestResult::from_bool(is_perfect_maze(&g))
        }
        quickcheck(p as fn(u8, u8, u64) -> TestResult)
    }

    #[test]
    fn quickcheck_every_search_finds_the_one_path() {
        fn p(rows: u8, columns: u8, seed: u64) -> TestResult {
            let (rows, columns) = (rows as usize % 30 + 3, columns as usize % 30 + 3);
            let g = maze(rows, columns, seed);
            let mut search = PathSearch::new(&g);
            let dfs = search.solve(FrontierKind::Lifo).unwrap();
            let bfs = search.solve(FrontierKind::Fifo).unwrap();
            let informed = search.solve_informed(&SummedOffset).unwrap();
            TestResult::from_bool(dfs.follows(&g) && dfs == bfs && bfs == informed)
        }
        quickcheck(p as fn(u8, u8, u64) -> TestResult)
    }
}
