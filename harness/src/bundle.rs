//! In-memory artifact bundle: the output of a harness run.
//!
//! No file I/O in this module. The bundle is a deterministic in-memory
//! representation that can be inspected programmatically.
//!
//! # Normative vs observational artifacts
//!
//! Each artifact is tagged `normative` (participates in bundle digest)
//! or observational (present in the manifest but excluded from digest).
//!
//! `overlay.json` is observational: it is a presentation projection of
//! `trace.json` and `result.json` and carries no independent commitment.
//!
//! The bundle digest is computed over the **digest basis**: a canonical
//! JSON projection of normative artifact hashes only.

use std::collections::BTreeMap;

use thiserror::Error;
use wayfinder_kernel::grid::Grid;
use wayfinder_kernel::proof::canon::canonical_json_bytes;
use wayfinder_kernel::proof::hash::{canonical_hash, ContentHash};
use wayfinder_kernel::proof::hash_domain::HashDomain;
use wayfinder_search::policy::SearchPolicyV1;

/// Domain prefix for bundle artifact content hashing.
pub const DOMAIN_BUNDLE_ARTIFACT: HashDomain = HashDomain::BundleArtifact;

/// Domain prefix for bundle digest computation.
pub const DOMAIN_BUNDLE_DIGEST: HashDomain = HashDomain::BundleDigest;

pub(crate) const MANIFEST_SCHEMA_VERSION: &str = "bundle.v1";
const DIGEST_BASIS_SCHEMA_VERSION: &str = "bundle_digest_basis.v1";

/// A single artifact in the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleArtifact {
    /// Logical filename (e.g., `"grid.json"`, `"trace.json"`).
    pub name: String,
    /// Raw bytes of the artifact.
    pub content: Vec<u8>,
    /// Content hash: `canonical_hash(DOMAIN_BUNDLE_ARTIFACT, content)`.
    pub content_hash: ContentHash,
    /// Whether this artifact participates in the bundle digest.
    pub normative: bool,
}

/// The complete artifact bundle from a harness run.
///
/// All JSON artifacts use kernel's `canonical_json_bytes`.
#[derive(Debug, Clone)]
pub struct ArtifactBundleV1 {
    /// Artifacts indexed by logical name, in sorted order (`BTreeMap`).
    pub artifacts: BTreeMap<String, BundleArtifact>,
    /// Full manifest: canonical JSON listing all artifacts with normative flags.
    pub manifest: Vec<u8>,
    /// Digest basis: canonical JSON listing normative artifact hashes only.
    pub digest_basis: Vec<u8>,
    /// Bundle digest: `canonical_hash(DOMAIN_BUNDLE_DIGEST, digest_basis)`.
    pub digest: ContentHash,
}

impl ArtifactBundleV1 {
    /// Artifact bytes by logical name.
    #[must_use]
    pub fn content(&self, name: &str) -> Option<&[u8]> {
        self.artifacts.get(name).map(|a| a.content.as_slice())
    }

    /// Parse a JSON artifact by logical name.
    #[must_use]
    pub fn json(&self, name: &str) -> Option<serde_json::Value> {
        self.content(name)
            .and_then(|bytes| serde_json::from_slice(bytes).ok())
    }
}

/// Input for bundle assembly: logical name, bytes and normative flag.
pub struct ArtifactInput {
    pub name: String,
    pub content: Vec<u8>,
    pub normative: bool,
}

impl From<(String, Vec<u8>, bool)> for ArtifactInput {
    fn from((name, content, normative): (String, Vec<u8>, bool)) -> Self {
        Self {
            name,
            content,
            normative,
        }
    }
}

/// Build an `ArtifactBundleV1` from a list of artifact inputs.
///
/// Computes content hashes, builds the sorted manifest and digest basis, and
/// derives the bundle digest. A later input with the same name replaces an
/// earlier one.
///
/// Accepts `Vec<ArtifactInput>` or `Vec<(String, Vec<u8>, bool)>` (via `From`).
#[must_use]
pub fn build_bundle(artifacts: Vec<impl Into<ArtifactInput>>) -> ArtifactBundleV1 {
    let mut artifact_map = BTreeMap::new();

    for input in artifacts {
        let input = input.into();
        let content_hash = canonical_hash(DOMAIN_BUNDLE_ARTIFACT, &input.content);
        artifact_map.insert(
            input.name.clone(),
            BundleArtifact {
                name: input.name,
                content: input.content,
                content_hash,
                normative: input.normative,
            },
        );
    }

    let manifest = compute_manifest_bytes(&artifact_map);
    let digest_basis = compute_digest_basis_bytes(&artifact_map);
    let digest = canonical_hash(DOMAIN_BUNDLE_DIGEST, &digest_basis);

    ArtifactBundleV1 {
        artifacts: artifact_map,
        manifest,
        digest_basis,
        digest,
    }
}

/// Error from bundle integrity verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BundleVerifyError {
    /// An artifact's stored `content_hash` does not match recomputed hash.
    #[error("content hash mismatch for {artifact}: stored {expected}, recomputed {actual}")]
    ContentHashMismatch {
        artifact: String,
        expected: String,
        actual: String,
    },
    /// Stored `manifest` bytes do not match recomputed manifest from artifacts.
    #[error("manifest does not match artifacts")]
    ManifestMismatch,
    /// Stored `manifest` bytes are not in canonical JSON form.
    #[error("manifest is not canonical JSON")]
    ManifestNotCanonical,
    /// Stored `digest_basis` bytes do not match recomputed normative projection.
    #[error("digest basis does not match normative artifacts")]
    DigestBasisMismatch,
    /// Stored `digest_basis` bytes are not in canonical JSON form.
    #[error("digest basis is not canonical JSON")]
    DigestBasisNotCanonical,
    /// Stored `digest` does not match recomputed hash of `digest_basis`.
    #[error("bundle digest mismatch: stored {expected}, recomputed {actual}")]
    DigestMismatch { expected: String, actual: String },
    /// A normative JSON artifact is not in canonical JSON form.
    #[error("normative artifact {artifact} is not canonical JSON")]
    ArtifactNotCanonical { artifact: String },
    /// A bound artifact could not be decoded.
    #[error("artifact {artifact} could not be decoded: {detail}")]
    ArtifactDecode { artifact: String, detail: String },
    /// `result.json` is missing a binding field.
    #[error("result.json is missing field {field}")]
    ResultFieldMissing { field: String },
    /// A digest declared in `result.json` does not match the artifact it binds.
    #[error("{field} mismatch: declared {declared}, recomputed {recomputed}")]
    BindingMismatch {
        field: String,
        declared: String,
        recomputed: String,
    },
}

/// Verify the internal consistency of a bundle.
///
/// This is a pure integrity check; it does NOT re-run the search.
/// It proves:
///
/// 1. Each artifact's `content_hash` matches `canonical_hash(DOMAIN_BUNDLE_ARTIFACT, content)`.
/// 2. `manifest` bytes match the canonical JSON projection recomputed from all artifacts.
/// 3. `digest_basis` bytes match the canonical JSON projection recomputed from normative
///    artifacts only.
/// 4. `digest` matches `canonical_hash(DOMAIN_BUNDLE_DIGEST, digest_basis)`.
/// 5. `manifest` and `digest_basis` are in canonical JSON form.
/// 6. Normative JSON artifacts (`.json` extension + `normative: true`) are in canonical form.
/// 7. If `result.json` exists: its `grid_fingerprint`, `policy_digest` and
///    `trace_artifact_hash` match values recomputed from `grid.json`,
///    `policy.json` and `trace.json`.
///
/// # Errors
///
/// Returns the first [`BundleVerifyError`] encountered.
pub fn verify_bundle(bundle: &ArtifactBundleV1) -> Result<(), BundleVerifyError> {
    // Step 1: Verify each artifact's content_hash.
    for artifact in bundle.artifacts.values() {
        let recomputed = canonical_hash(DOMAIN_BUNDLE_ARTIFACT, &artifact.content);
        if recomputed != artifact.content_hash {
            return Err(BundleVerifyError::ContentHashMismatch {
                artifact: artifact.name.clone(),
                expected: artifact.content_hash.as_str().to_string(),
                actual: recomputed.as_str().to_string(),
            });
        }
    }

    // Step 2-3: Manifest and digest basis must be canonical and match.
    if !is_canonical_json(&bundle.manifest) {
        return Err(BundleVerifyError::ManifestNotCanonical);
    }
    if compute_manifest_bytes(&bundle.artifacts) != bundle.manifest {
        return Err(BundleVerifyError::ManifestMismatch);
    }
    if !is_canonical_json(&bundle.digest_basis) {
        return Err(BundleVerifyError::DigestBasisNotCanonical);
    }
    if compute_digest_basis_bytes(&bundle.artifacts) != bundle.digest_basis {
        return Err(BundleVerifyError::DigestBasisMismatch);
    }

    // Step 4: Digest.
    let recomputed_digest = canonical_hash(DOMAIN_BUNDLE_DIGEST, &bundle.digest_basis);
    if recomputed_digest != bundle.digest {
        return Err(BundleVerifyError::DigestMismatch {
            expected: bundle.digest.as_str().to_string(),
            actual: recomputed_digest.as_str().to_string(),
        });
    }

    // Step 6: Normative JSON artifacts.
    for artifact in bundle.artifacts.values() {
        if artifact.normative
            && artifact.name.ends_with(".json")
            && !is_canonical_json(&artifact.content)
        {
            return Err(BundleVerifyError::ArtifactNotCanonical {
                artifact: artifact.name.clone(),
            });
        }
    }

    // Step 7: Result bindings.
    verify_result_bindings(bundle)
}

fn compute_manifest_bytes(artifacts: &BTreeMap<String, BundleArtifact>) -> Vec<u8> {
    let manifest_artifacts: Vec<serde_json::Value> = artifacts
        .values()
        .map(|a| {
            serde_json::json!({
                "content_hash": a.content_hash.as_str(),
                "name": a.name,
                "normative": a.normative,
            })
        })
        .collect();

    canonical_json_bytes(&serde_json::json!({
        "artifacts": manifest_artifacts,
        "schema_version": MANIFEST_SCHEMA_VERSION,
    }))
}

fn compute_digest_basis_bytes(artifacts: &BTreeMap<String, BundleArtifact>) -> Vec<u8> {
    let normative_artifacts: Vec<serde_json::Value> = artifacts
        .values()
        .filter(|a| a.normative)
        .map(|a| {
            serde_json::json!({
                "content_hash": a.content_hash.as_str(),
                "name": a.name,
            })
        })
        .collect();

    canonical_json_bytes(&serde_json::json!({
        "artifacts": normative_artifacts,
        "schema_version": DIGEST_BASIS_SCHEMA_VERSION,
    }))
}

/// Parse then re-canonicalize; true iff the bytes round-trip unchanged.
fn is_canonical_json(bytes: &[u8]) -> bool {
    serde_json::from_slice::<serde_json::Value>(bytes)
        .is_ok_and(|value| canonical_json_bytes(&value) == bytes)
}

/// If `result.json` exists, each digest it declares must match the artifact
/// it binds. A declared binding whose artifact is absent is an error.
fn verify_result_bindings(bundle: &ArtifactBundleV1) -> Result<(), BundleVerifyError> {
    let Some(result_artifact) = bundle.artifacts.get("result.json") else {
        return Ok(());
    };
    let result: serde_json::Value = serde_json::from_slice(&result_artifact.content)
        .map_err(|e| decode_error("result.json", &e))?;

    let grid_bytes = required_artifact(bundle, "grid.json")?;
    let grid_value: serde_json::Value =
        serde_json::from_slice(grid_bytes).map_err(|e| decode_error("grid.json", &e))?;
    let codes: Vec<Vec<u8>> = serde_json::from_value(grid_value["cells"].clone())
        .map_err(|e| decode_error("grid.json", &e))?;
    let grid = Grid::from_codes(&codes).map_err(|e| decode_error("grid.json", &e))?;
    check_binding(&result, "grid_fingerprint", &grid.fingerprint())?;

    let policy_bytes = required_artifact(bundle, "policy.json")?;
    let policy_text =
        std::str::from_utf8(policy_bytes).map_err(|e| decode_error("policy.json", &e))?;
    let policy =
        SearchPolicyV1::from_json_str(policy_text).map_err(|e| decode_error("policy.json", &e))?;
    check_binding(&result, "policy_digest", &policy.digest())?;

    let trace_hash = bundle
        .artifacts
        .get("trace.json")
        .map(|a| a.content_hash.clone())
        .ok_or_else(|| missing_artifact("trace.json"))?;
    check_binding(&result, "trace_artifact_hash", &trace_hash)
}

fn required_artifact<'a>(
    bundle: &'a ArtifactBundleV1,
    name: &str,
) -> Result<&'a [u8], BundleVerifyError> {
    bundle.content(name).ok_or_else(|| missing_artifact(name))
}

fn missing_artifact(name: &str) -> BundleVerifyError {
    BundleVerifyError::ArtifactDecode {
        artifact: name.to_string(),
        detail: "bound by result.json but absent".into(),
    }
}

fn decode_error(artifact: &str, err: &impl std::fmt::Display) -> BundleVerifyError {
    BundleVerifyError::ArtifactDecode {
        artifact: artifact.to_string(),
        detail: err.to_string(),
    }
}

fn check_binding(
    result: &serde_json::Value,
    field: &str,
    recomputed: &ContentHash,
) -> Result<(), BundleVerifyError> {
    let declared = result[field]
        .as_str()
        .ok_or_else(|| BundleVerifyError::ResultFieldMissing {
            field: field.to_string(),
        })?;
    if declared != recomputed.as_str() {
        return Err(BundleVerifyError::BindingMismatch {
            field: field.to_string(),
            declared: declared.to_string(),
            recomputed: recomputed.as_str().to_string(),
        });
    }
    Ok(())
}
