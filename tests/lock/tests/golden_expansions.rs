//! Golden expansion lock: exact outcomes for every catalog maze under every
//! heuristic and movement topology.
//!
//! Any change to expansion order, tie-breaking, step costs or heuristic
//! arithmetic moves at least one of these values. The trace digest covers
//! every closed position with its exact `f`, `g`, `h` bits and counters.

use wayfinder_harness::contract::MazeSourceV1;
use wayfinder_harness::mazes::catalog::by_id;
use wayfinder_kernel::grid::{Grid, Position};
use wayfinder_search::heuristic::HeuristicKind;
use wayfinder_search::policy::SearchPolicyV1;
use wayfinder_search::search::solve;

struct Golden {
    maze: &'static str,
    heuristic: HeuristicKind,
    allow_diagonal: bool,
    nodes_explored: u64,
    path_length: Option<usize>,
    path_cost: Option<f64>,
    nodes_generated: u64,
    frontier_high_water: u64,
    trace_digest: &'static str,
}

const GOLDENS: &[Golden] = &[
    Golden {
        maze: "simple_path",
        heuristic: HeuristicKind::Manhattan,
        allow_diagonal: false,
        nodes_explored: 5,
        path_length: Some(5),
        path_cost: Some(4.0),
        nodes_generated: 9,
        frontier_high_water: 5,
        trace_digest: "sha256:4ec8d1e34fefad8b0d513d363ca4809a01917777bc5cb8aa2e13bdc5abf03020",
    },
    Golden {
        maze: "simple_path",
        heuristic: HeuristicKind::Manhattan,
        allow_diagonal: true,
        nodes_explored: 5,
        path_length: Some(5),
        path_cost: Some(4.0),
        nodes_generated: 10,
        frontier_high_water: 6,
        trace_digest: "sha256:86dd24a80ad35c1d892eb7a73e5ec1f0b54a125f60862ef0990007b6d02ac2d9",
    },
    Golden {
        maze: "simple_path",
        heuristic: HeuristicKind::Euclidean,
        allow_diagonal: false,
        nodes_explored: 5,
        path_length: Some(5),
        path_cost: Some(4.0),
        nodes_generated: 9,
        frontier_high_water: 5,
        trace_digest: "sha256:4ec8d1e34fefad8b0d513d363ca4809a01917777bc5cb8aa2e13bdc5abf03020",
    },
    Golden {
        maze: "simple_path",
        heuristic: HeuristicKind::Euclidean,
        allow_diagonal: true,
        nodes_explored: 5,
        path_length: Some(5),
        path_cost: Some(4.0),
        nodes_generated: 10,
        frontier_high_water: 6,
        trace_digest: "sha256:86dd24a80ad35c1d892eb7a73e5ec1f0b54a125f60862ef0990007b6d02ac2d9",
    },
    Golden {
        maze: "simple_path",
        heuristic: HeuristicKind::Chebyshev,
        allow_diagonal: false,
        nodes_explored: 5,
        path_length: Some(5),
        path_cost: Some(4.0),
        nodes_generated: 9,
        frontier_high_water: 5,
        trace_digest: "sha256:4ec8d1e34fefad8b0d513d363ca4809a01917777bc5cb8aa2e13bdc5abf03020",
    },
    Golden {
        maze: "simple_path",
        heuristic: HeuristicKind::Chebyshev,
        allow_diagonal: true,
        nodes_explored: 5,
        path_length: Some(5),
        path_cost: Some(4.0),
        nodes_generated: 10,
        frontier_high_water: 6,
        trace_digest: "sha256:86dd24a80ad35c1d892eb7a73e5ec1f0b54a125f60862ef0990007b6d02ac2d9",
    },
    Golden {
        maze: "with_obstacles",
        heuristic: HeuristicKind::Manhattan,
        allow_diagonal: false,
        nodes_explored: 13,
        path_length: Some(9),
        path_cost: Some(8.0),
        nodes_generated: 16,
        frontier_high_water: 5,
        trace_digest: "sha256:e89106bf81599162773d6a88d3c38a1a70e708fbad9fc203234041d40fdc5939",
    },
    Golden {
        maze: "with_obstacles",
        heuristic: HeuristicKind::Manhattan,
        allow_diagonal: true,
        nodes_explored: 5,
        path_length: Some(5),
        path_cost: Some(5.656),
        nodes_generated: 15,
        frontier_high_water: 11,
        trace_digest: "sha256:595d65dfb14705b64b4116dab5138eb0cb06a3069e7aa21e8962282ad2557320",
    },
    Golden {
        maze: "with_obstacles",
        heuristic: HeuristicKind::Euclidean,
        allow_diagonal: false,
        nodes_explored: 13,
        path_length: Some(9),
        path_cost: Some(8.0),
        nodes_generated: 16,
        frontier_high_water: 5,
        trace_digest: "sha256:5be6b0d4972afca5f945813d890c3c21d80f4b487fb4a1e1b6a20b045d94e7a9",
    },
    Golden {
        maze: "with_obstacles",
        heuristic: HeuristicKind::Euclidean,
        allow_diagonal: true,
        nodes_explored: 5,
        path_length: Some(5),
        path_cost: Some(5.656),
        nodes_generated: 15,
        frontier_high_water: 11,
        trace_digest: "sha256:34e651a73a554abd8e7874464c79570bd7716a50fae521b2802c05c726309986",
    },
    Golden {
        maze: "with_obstacles",
        heuristic: HeuristicKind::Chebyshev,
        allow_diagonal: false,
        nodes_explored: 13,
        path_length: Some(9),
        path_cost: Some(8.0),
        nodes_generated: 16,
        frontier_high_water: 5,
        trace_digest: "sha256:34ac7397bdb16e6718c199c600bec92479090a7316aa5d23a1b57502f11be131",
    },
    Golden {
        maze: "with_obstacles",
        heuristic: HeuristicKind::Chebyshev,
        allow_diagonal: true,
        nodes_explored: 8,
        path_length: Some(5),
        path_cost: Some(5.656),
        nodes_generated: 16,
        frontier_high_water: 10,
        trace_digest: "sha256:1dc5e40b6113ab03855be76f94f466e05036997f06f2dba3700ba8cc8759175d",
    },
    Golden {
        maze: "complex_maze",
        heuristic: HeuristicKind::Manhattan,
        allow_diagonal: false,
        nodes_explored: 45,
        path_length: Some(19),
        path_cost: Some(18.0),
        nodes_generated: 49,
        frontier_high_water: 8,
        trace_digest: "sha256:f435ed5261fa64ba9453bd5fce4ba341c5cf49307fe7ab30e40e60c1c7b2b765",
    },
    Golden {
        maze: "complex_maze",
        heuristic: HeuristicKind::Manhattan,
        allow_diagonal: true,
        nodes_explored: 16,
        path_length: Some(16),
        path_cost: Some(16.241999999999997),
        nodes_generated: 30,
        frontier_high_water: 15,
        trace_digest: "sha256:bc887f022dfad06bc5b0afdad5c39072caae111e55678ccd149cc32280667c07",
    },
    Golden {
        maze: "complex_maze",
        heuristic: HeuristicKind::Euclidean,
        allow_diagonal: false,
        nodes_explored: 47,
        path_length: Some(19),
        path_cost: Some(18.0),
        nodes_generated: 51,
        frontier_high_water: 11,
        trace_digest: "sha256:4184194b44ac55a321c2e50927bf1e990d3f029d00f0cb33b891993bbe552851",
    },
    Golden {
        maze: "complex_maze",
        heuristic: HeuristicKind::Euclidean,
        allow_diagonal: true,
        nodes_explored: 28,
        path_length: Some(14),
        path_cost: Some(15.069999999999999),
        nodes_generated: 40,
        frontier_high_water: 11,
        trace_digest: "sha256:03f03480563e787dc920d79cc19bd5f14b67a2fee7bc593ea19f914d3fdbead8",
    },
    Golden {
        maze: "complex_maze",
        heuristic: HeuristicKind::Chebyshev,
        allow_diagonal: false,
        nodes_explored: 48,
        path_length: Some(19),
        path_cost: Some(18.0),
        nodes_generated: 53,
        frontier_high_water: 12,
        trace_digest: "sha256:383007c155ce8f06efd7d94f74598e3cea63761a360bf1b87eb4085329654b16",
    },
    Golden {
        maze: "complex_maze",
        heuristic: HeuristicKind::Chebyshev,
        allow_diagonal: true,
        nodes_explored: 32,
        path_length: Some(14),
        path_cost: Some(15.069999999999999),
        nodes_generated: 46,
        frontier_high_water: 13,
        trace_digest: "sha256:3adcf0d832926e66d2c92b2ea7544225bbda9a72d83eb2997b4e371024ee4d4d",
    },
    Golden {
        maze: "unreachable_goal",
        heuristic: HeuristicKind::Manhattan,
        allow_diagonal: false,
        nodes_explored: 12,
        path_length: None,
        path_cost: None,
        nodes_generated: 12,
        frontier_high_water: 3,
        trace_digest: "sha256:c7c2caac521704efd38ba6bd9b0f55d7fb41e5776f284bfd91b4f521a07e56b7",
    },
    Golden {
        maze: "unreachable_goal",
        heuristic: HeuristicKind::Manhattan,
        allow_diagonal: true,
        nodes_explored: 12,
        path_length: None,
        path_cost: None,
        nodes_generated: 16,
        frontier_high_water: 7,
        trace_digest: "sha256:281066bf546f53534aa545565f1b2ae0589af6f46694d66319a6d8a94d4fdf51",
    },
    Golden {
        maze: "unreachable_goal",
        heuristic: HeuristicKind::Euclidean,
        allow_diagonal: false,
        nodes_explored: 12,
        path_length: None,
        path_cost: None,
        nodes_generated: 12,
        frontier_high_water: 3,
        trace_digest: "sha256:7f262b41b8686fa1f7a3668751265b6ac628c3b4d7d7dd3f3bba6d02b8fa4672",
    },
    Golden {
        maze: "unreachable_goal",
        heuristic: HeuristicKind::Euclidean,
        allow_diagonal: true,
        nodes_explored: 12,
        path_length: None,
        path_cost: None,
        nodes_generated: 16,
        frontier_high_water: 7,
        trace_digest: "sha256:539d11a2cc66481cca3feb3a8db7ea4f8b467b992b59baa14192172ac7fc6604",
    },
    Golden {
        maze: "unreachable_goal",
        heuristic: HeuristicKind::Chebyshev,
        allow_diagonal: false,
        nodes_explored: 12,
        path_length: None,
        path_cost: None,
        nodes_generated: 12,
        frontier_high_water: 3,
        trace_digest: "sha256:67a43c2c94b398600b3741b580fa49c05eb10428490338b0ac3f056c58358553",
    },
    Golden {
        maze: "unreachable_goal",
        heuristic: HeuristicKind::Chebyshev,
        allow_diagonal: true,
        nodes_explored: 12,
        path_length: None,
        path_cost: None,
        nodes_generated: 16,
        frontier_high_water: 7,
        trace_digest: "sha256:6cf287777e646e86e64e43575d8a9086cdf377ab90d75260e3b4628ed2c8541f",
    },
];

fn catalog_grid(id: &str) -> Grid {
    let maze = by_id(id).unwrap();
    Grid::from_codes(&maze.cell_codes().unwrap()).unwrap()
}

#[test]
fn golden_expansions_match() {
    assert_eq!(GOLDENS.len(), 24);
    for golden in GOLDENS {
        let grid = catalog_grid(golden.maze);
        let policy = SearchPolicyV1::new(golden.heuristic, golden.allow_diagonal);
        let result = solve(&grid, &policy);
        let label = format!(
            "{} / {} / diagonal={}",
            golden.maze, golden.heuristic, golden.allow_diagonal
        );

        assert_eq!(result.stats.nodes_explored, golden.nodes_explored, "{label}: explored");
        assert_eq!(result.path_length(), golden.path_length, "{label}: path length");
        assert_eq!(
            result.path_cost().map(f64::to_bits),
            golden.path_cost.map(f64::to_bits),
            "{label}: path cost"
        );
        assert_eq!(result.stats.nodes_generated, golden.nodes_generated, "{label}: generated");
        assert_eq!(
            result.stats.frontier_high_water, golden.frontier_high_water,
            "{label}: high water"
        );
        assert_eq!(result.trace.digest().as_str(), golden.trace_digest, "{label}: trace");
    }
}

#[test]
fn golden_complex_maze_diagonal_path() {
    let grid = catalog_grid("complex_maze");
    let result = solve(&grid, &SearchPolicyV1::new(HeuristicKind::Euclidean, true));
    let expected: Vec<Position> = [
        (0, 0), (1, 0), (2, 0), (3, 0), (4, 1), (4, 2), (4, 3),
        (4, 4), (5, 5), (6, 6), (7, 6), (8, 7), (9, 8), (9, 9),
    ]
    .into_iter()
    .map(Position::from)
    .collect();
    assert_eq!(result.path, Some(expected));
}

#[test]
fn golden_with_obstacles_visitation_order() {
    let grid = catalog_grid("with_obstacles");
    let result = solve(&grid, &SearchPolicyV1::default());
    let expected: Vec<Position> = [
        (0, 0), (1, 0), (0, 1), (2, 0), (1, 1), (2, 1), (2, 2),
        (2, 3), (3, 3), (2, 4), (4, 3), (3, 4), (4, 4),
    ]
    .into_iter()
    .map(Position::from)
    .collect();
    assert_eq!(result.trace.visitation_order(), expected);
    assert_eq!(
        result.path,
        Some(
            [(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (2, 3), (3, 3), (4, 3), (4, 4)]
                .into_iter()
                .map(Position::from)
                .collect()
        )
    );
}

#[test]
fn golden_fingerprints() {
    let expected = [
        ("simple_path", "sha256:562fb6a8c004733f5a83b8663ed4886d26191ea9281d56965d347566f4b09f06"),
        ("with_obstacles", "sha256:742ae187b0925c39db8fae5b176f937971f1c133d863b012a66c4749c1dc152c"),
        ("complex_maze", "sha256:6b1ca44b68745bd947e782a820a93e6751537d350c6724bfcc23179274f00848"),
        ("unreachable_goal", "sha256:e4c0dbd39f791209530c953fdbc0b5fac69e3e5da142c2b6382a23c8c619619c"),
    ];
    for (id, fingerprint) in expected {
        assert_eq!(catalog_grid(id).fingerprint().as_str(), fingerprint, "{id}");
    }
}

#[test]
fn golden_policy_digests() {
    let expected = [
        (HeuristicKind::Manhattan, false, "sha256:a1b7ba55b77d32b3177a92321838264d46d8884723a827dd7001e1ddf3afa57b"),
        (HeuristicKind::Manhattan, true, "sha256:b2c5da5fc0a45ba4870b20c03d8b957454cc0a108d15a2348e63e7f044eec0a5"),
        (HeuristicKind::Euclidean, false, "sha256:2126e662834d6d1584a1691ec2db3a5106bcc4528f15284784fba6929c83aea3"),
        (HeuristicKind::Euclidean, true, "sha256:e041e1eeb3d8bab5051674ac824d874156f8b4c17100cf7854f0856aa79718ca"),
        (HeuristicKind::Chebyshev, false, "sha256:265328c1c2ac592aef7db679f2994584b8949b0380a1f9f0506176294f279b5f"),
        (HeuristicKind::Chebyshev, true, "sha256:ec24d2794d150cdc7ace5f841d192f405b0c7577d099fd59d1664d57d3f65330"),
    ];
    for (heuristic, allow_diagonal, digest) in expected {
        let policy = SearchPolicyV1::new(heuristic, allow_diagonal);
        assert_eq!(policy.digest().as_str(), digest, "{heuristic} / {allow_diagonal}");
    }
}
