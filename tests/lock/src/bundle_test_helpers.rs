//! Shared test helpers for mutating and rebuilding artifact bundles.
//!
//! Rebuilding keeps the manifest, digest basis and digest consistent with the
//! modified artifacts, so negative tests hit the semantic binding check they
//! target instead of a plain content-hash mismatch.

use wayfinder_harness::bundle::{build_bundle, ArtifactBundleV1};
use wayfinder_kernel::proof::canon::canonical_json_bytes;

/// Rewrite one JSON artifact and rebuild the bundle around it.
///
/// # Panics
///
/// Panics if the artifact is missing or is not valid JSON. These are
/// test-only invariants.
pub fn rebuild_with_modified_json(
    bundle: &ArtifactBundleV1,
    name: &str,
    modify: impl FnOnce(&mut serde_json::Value),
) -> ArtifactBundleV1 {
    let mut value: serde_json::Value =
        serde_json::from_slice(&bundle.artifacts[name].content).unwrap();
    modify(&mut value);
    let modified = canonical_json_bytes(&value);

    build_bundle(
        bundle
            .artifacts
            .values()
            .map(|a| {
                let content = if a.name == name {
                    modified.clone()
                } else {
                    a.content.clone()
                };
                (a.name.clone(), content, a.normative)
            })
            .collect(),
    )
}

/// Rebuild the bundle with one artifact removed.
#[must_use]
pub fn rebuild_without_artifact(bundle: &ArtifactBundleV1, name: &str) -> ArtifactBundleV1 {
    build_bundle(
        bundle
            .artifacts
            .values()
            .filter(|a| a.name != name)
            .map(|a| (a.name.clone(), a.content.clone(), a.normative))
            .collect(),
    )
}
