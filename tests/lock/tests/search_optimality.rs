//! Optimality and admissibility lock tests against an independent Dijkstra.
//!
//! Under 4-way movement every heuristic is admissible, so A* must return
//! exactly the Dijkstra cost. Under 8-way movement Chebyshev stays
//! admissible; Euclidean overestimates a pure diagonal by the factor
//! `√2 / 1.414` (the step cost is rounded down), so its checks carry that
//! relative tolerance. Manhattan is not admissible under 8-way movement and
//! is only required to return a valid, never-cheaper-than-optimal path.

use lock_tests::reference::{dijkstra_costs, optimal_cost};
use wayfinder_harness::contract::MazeSourceV1;
use wayfinder_harness::mazes::catalog::{catalog, COMPLEX_MAZE};
use wayfinder_harness::mazes::random::RandomMaze;
use wayfinder_kernel::grid::Grid;
use wayfinder_search::heuristic::HeuristicKind;
use wayfinder_search::movement::{Movement, DIAGONAL_STEP_COST};
use wayfinder_search::policy::SearchPolicyV1;
use wayfinder_search::search::solve;

/// Relative overestimate of Euclidean over the 8-way step costs.
const EUCLIDEAN_DIAGONAL_SLACK: f64 = std::f64::consts::SQRT_2 / DIAGONAL_STEP_COST;

fn corpus() -> Vec<(String, Grid)> {
    let mut grids: Vec<(String, Grid)> = catalog()
        .iter()
        .map(|m| {
            let grid = Grid::from_codes(&m.cell_codes().unwrap()).unwrap();
            (m.id().to_string(), grid)
        })
        .collect();
    for seed in 0..40 {
        let rows = 4 + (seed % 9) as usize;
        let cols = 5 + (seed % 7) as usize;
        let density = [0.1, 0.2, 0.3, 0.4][(seed % 4) as usize];
        let codes = RandomMaze::new(rows, cols, density, seed).generate().unwrap();
        grids.push((format!("random:{seed}"), Grid::from_codes(&codes).unwrap()));
    }
    grids
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn four_way_cost_equals_dijkstra_for_every_heuristic() {
    for (id, grid) in corpus() {
        let reference = optimal_cost(&grid, Movement::FourWay);
        for heuristic in HeuristicKind::ALL {
            let result = solve(&grid, &SearchPolicyV1::new(heuristic, false));
            match reference {
                Some(cost) => {
                    let found = result.path_cost().unwrap_or_else(|| {
                        panic!("{id} / {heuristic}: reachable goal reported unreachable")
                    });
                    assert!(close(found, cost), "{id} / {heuristic}: {found} != {cost}");
                }
                None => assert!(!result.is_goal_reached(), "{id} / {heuristic}: phantom path"),
            }
        }
    }
}

#[test]
fn eight_way_chebyshev_cost_equals_dijkstra() {
    for (id, grid) in corpus() {
        let reference = optimal_cost(&grid, Movement::EightWay);
        let result = solve(&grid, &SearchPolicyV1::new(HeuristicKind::Chebyshev, true));
        match reference {
            Some(cost) => {
                let found = result.path_cost().unwrap();
                assert!(close(found, cost), "{id}: {found} != {cost}");
            }
            None => assert!(!result.is_goal_reached(), "{id}: phantom path"),
        }
    }
}

#[test]
fn eight_way_euclidean_cost_within_diagonal_slack() {
    for (id, grid) in corpus() {
        let Some(cost) = optimal_cost(&grid, Movement::EightWay) else {
            continue;
        };
        let found = solve(&grid, &SearchPolicyV1::new(HeuristicKind::Euclidean, true))
            .path_cost()
            .unwrap();
        assert!(found >= cost - 1e-9, "{id}: {found} below optimal {cost}");
        assert!(
            found <= cost * EUCLIDEAN_DIAGONAL_SLACK + 1e-9,
            "{id}: {found} exceeds {cost} by more than the diagonal slack"
        );
    }
}

#[test]
fn eight_way_manhattan_is_never_cheaper_than_optimal() {
    for (id, grid) in corpus() {
        let reference = optimal_cost(&grid, Movement::EightWay);
        let result = solve(&grid, &SearchPolicyV1::new(HeuristicKind::Manhattan, true));
        assert_eq!(result.is_goal_reached(), reference.is_some(), "{id}");
        if let (Some(found), Some(cost)) = (result.path_cost(), reference) {
            assert!(found >= cost - 1e-9, "{id}: {found} below optimal {cost}");
        }
    }
}

#[test]
fn eight_way_manhattan_overestimates_on_complex_maze() {
    let grid = Grid::from_codes(&COMPLEX_MAZE.cell_codes().unwrap()).unwrap();
    let optimal = optimal_cost(&grid, Movement::EightWay).unwrap();
    let found = solve(&grid, &SearchPolicyV1::new(HeuristicKind::Manhattan, true))
        .path_cost()
        .unwrap();
    assert!(found > optimal + 1.0, "{found} vs {optimal}");
}

// ---------------------------------------------------------------------------
// Admissibility: h(n) <= true cost-to-goal
// ---------------------------------------------------------------------------

fn assert_admissible(heuristic: HeuristicKind, movement: Movement, slack: f64) {
    for (id, grid) in corpus() {
        let Some(goal) = grid.goal() else {
            continue;
        };
        let to_goal = dijkstra_costs(&grid, goal, movement);
        for (pos, _) in grid.iter() {
            let Some(true_cost) = to_goal[pos.row * grid.cols() + pos.col] else {
                continue;
            };
            let estimate = heuristic.estimate(pos, goal);
            assert!(
                estimate <= true_cost * slack + 1e-9,
                "{id}: {heuristic} at {pos} estimates {estimate} > {true_cost} ({})",
                movement.name()
            );
        }
    }
}

#[test]
fn every_heuristic_admissible_four_way() {
    for heuristic in HeuristicKind::ALL {
        assert_admissible(heuristic, Movement::FourWay, 1.0);
    }
}

#[test]
fn chebyshev_admissible_eight_way() {
    assert_admissible(HeuristicKind::Chebyshev, Movement::EightWay, 1.0);
}

#[test]
fn euclidean_admissible_eight_way_up_to_diagonal_slack() {
    assert_admissible(
        HeuristicKind::Euclidean,
        Movement::EightWay,
        EUCLIDEAN_DIAGONAL_SLACK,
    );
}
