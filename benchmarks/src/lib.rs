//! Shared helpers for wayfinder benchmark suites.
//!
//! Each regime is a grid shaped to stress one part of the engine: open
//! space (heuristic guidance), dense random walls (frontier churn), a
//! serpentine corridor (long paths, tiny frontier) and a sealed goal (full
//! component exploration).

use wayfinder_harness::mazes::random::RandomMaze;
use wayfinder_kernel::grid::{CellKind, Grid};

/// A named benchmark grid.
pub struct Regime {
    pub name: &'static str,
    pub grid: Grid,
}

/// Open `size × size` field, start and goal in opposite corners.
///
/// # Panics
///
/// Panics if `size < 2`. Benchmark setup failures are fatal.
#[must_use]
pub fn open_field(size: usize) -> Grid {
    let mut codes = vec![vec![CellKind::Empty.code(); size]; size];
    codes[0][0] = CellKind::Start.code();
    codes[size - 1][size - 1] = CellKind::Goal.code();
    Grid::from_codes(&codes).expect("open field")
}

/// Seeded random walls at the given density.
///
/// # Panics
///
/// Panics on invalid generator parameters.
#[must_use]
pub fn random_walls(size: usize, density: f64, seed: u64) -> Grid {
    let codes = RandomMaze::new(size, size, density, seed)
        .generate()
        .expect("random maze parameters");
    Grid::from_codes(&codes).expect("random maze grid")
}

/// Horizontal corridors joined at alternating ends.
///
/// Even rows are open; odd rows are walls except one gap, alternating
/// between the right and left edge. `size` should be odd.
///
/// # Panics
///
/// Panics if `size < 2`.
#[must_use]
pub fn serpentine(size: usize) -> Grid {
    let mut codes = vec![vec![CellKind::Empty.code(); size]; size];
    for (r, row) in codes.iter_mut().enumerate().filter(|(r, _)| r % 2 == 1) {
        row.fill(CellKind::Wall.code());
        let gap = if (r / 2) % 2 == 0 { size - 1 } else { 0 };
        row[gap] = CellKind::Empty.code();
    }
    codes[0][0] = CellKind::Start.code();
    let last = size - 1;
    codes[last][last] = CellKind::Goal.code();
    Grid::from_codes(&codes).expect("serpentine")
}

/// Open field whose goal is sealed in by walls on all sides.
///
/// # Panics
///
/// Panics if `size < 4`.
#[must_use]
pub fn sealed_goal(size: usize) -> Grid {
    let mut codes = vec![vec![CellKind::Empty.code(); size]; size];
    codes[0][0] = CellKind::Start.code();
    let last = size - 1;
    codes[last][last] = CellKind::Goal.code();
    for (r, c) in [
        (last - 1, last),
        (last, last - 1),
        (last - 1, last - 1),
    ] {
        codes[r][c] = CellKind::Wall.code();
    }
    Grid::from_codes(&codes).expect("sealed goal")
}

/// The standard regime set used by the macro benchmarks.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    vec![
        Regime {
            name: "open_field_64",
            grid: open_field(64),
        },
        Regime {
            name: "random_walls_64",
            grid: random_walls(64, 0.3, 42),
        },
        Regime {
            name: "serpentine_63",
            grid: serpentine(63),
        },
        Regime {
            name: "sealed_goal_48",
            grid: sealed_goal(48),
        },
    ]
}
