//! Hash domain lock tests.
//!
//! Every stored fingerprint, trace digest, policy digest and bundle digest
//! is prefixed with one of these separators. Changing a separator, or
//! hashing an artifact under the wrong one, silently invalidates every
//! bundle already on disk.

use std::collections::BTreeSet;

use wayfinder_harness::bundle::{DOMAIN_BUNDLE_ARTIFACT, DOMAIN_BUNDLE_DIGEST};
use wayfinder_harness::contract::MazeSourceV1;
use wayfinder_harness::mazes::catalog::WITH_OBSTACLES;
use wayfinder_kernel::grid::Grid;
use wayfinder_kernel::proof::canon::canonical_json_bytes;
use wayfinder_kernel::proof::hash::canonical_hash;
use wayfinder_kernel::proof::hash_domain::HashDomain;
use wayfinder_search::heuristic::HeuristicKind;
use wayfinder_search::policy::SearchPolicyV1;
use wayfinder_search::search::solve;

const PINNED: [(HashDomain, &[u8]); 5] = [
    (HashDomain::GridIdentity, b"WAYFINDER::GRID_IDENTITY::V1\0"),
    (HashDomain::SearchTrace, b"WAYFINDER::SEARCH_TRACE::V1\0"),
    (HashDomain::SearchPolicy, b"WAYFINDER::SEARCH_POLICY::V1\0"),
    (HashDomain::BundleArtifact, b"WAYFINDER::BUNDLE_ARTIFACT::V1\0"),
    (HashDomain::BundleDigest, b"WAYFINDER::BUNDLE_DIGEST::V1\0"),
];

#[test]
fn domain_set_and_bytes_are_pinned() {
    let declared: Vec<HashDomain> = PINNED.iter().map(|(d, _)| *d).collect();
    assert_eq!(HashDomain::ALL, declared.as_slice(), "domain set changed");
    for (domain, bytes) in PINNED {
        assert_eq!(domain.as_bytes(), bytes, "{domain} bytes changed");
    }
}

#[test]
fn same_payload_hashes_apart_under_each_domain() {
    let digests: BTreeSet<String> = HashDomain::ALL
        .iter()
        .map(|&d| canonical_hash(d, b"{}").as_str().to_string())
        .collect();
    assert_eq!(digests.len(), HashDomain::ALL.len());
}

#[test]
fn each_artifact_hashes_under_its_own_domain() {
    let grid = Grid::from_codes(&WITH_OBSTACLES.cell_codes().unwrap()).unwrap();
    assert_eq!(
        grid.fingerprint(),
        canonical_hash(HashDomain::GridIdentity, &grid.identity_bytes())
    );

    let policy = SearchPolicyV1::new(HeuristicKind::Euclidean, true);
    assert_eq!(
        policy.digest(),
        canonical_hash(
            HashDomain::SearchPolicy,
            &canonical_json_bytes(&policy.to_json_value())
        )
    );

    let trace = solve(&grid, &policy).trace;
    assert_eq!(
        trace.digest(),
        canonical_hash(HashDomain::SearchTrace, &trace.to_bytes())
    );

    assert_eq!(DOMAIN_BUNDLE_ARTIFACT, HashDomain::BundleArtifact);
    assert_eq!(DOMAIN_BUNDLE_DIGEST, HashDomain::BundleDigest);
}
