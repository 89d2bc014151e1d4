//! Bundle directory persistence: write/read/verify `ArtifactBundleV1` to/from disk.
//!
//! # Directory layout (`BundleDirectoryV1`)
//!
//! ```text
//! <dir>/
//!   bundle_manifest.json         canonical JSON, full artifact listing
//!   bundle_digest_basis.json     canonical JSON, normative projection only
//!   bundle_digest.txt            ASCII digest string (e.g. "sha256:...")
//!   grid.json                    artifact file (normative)
//!   policy.json                  artifact file (normative)
//!   result.json                  artifact file (normative)
//!   trace.json                   artifact file (normative)
//!   overlay.json                 artifact file (observational)
//! ```
//!
//! The directory path is never part of any hash surface. File ordering on disk
//! is irrelevant; the manifest's declared list is the source of truth.
//!
//! # Fail-closed semantics
//!
//! - Missing declared artifact files → error
//! - Extra undeclared files → error
//! - Content hash mismatch → error
//! - Non-canonical manifest or digest basis → error

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use thiserror::Error;
use tracing::debug;
use wayfinder_kernel::proof::hash::{canonical_hash, ContentHash};

use crate::bundle::{
    verify_bundle, ArtifactBundleV1, BundleArtifact, BundleVerifyError, DOMAIN_BUNDLE_DIGEST,
    MANIFEST_SCHEMA_VERSION,
};

const MANIFEST_FILENAME: &str = "bundle_manifest.json";
const DIGEST_BASIS_FILENAME: &str = "bundle_digest_basis.json";
const DIGEST_FILENAME: &str = "bundle_digest.txt";

/// Reserved metadata filenames (not artifact files).
const METADATA_FILENAMES: &[&str] = &[MANIFEST_FILENAME, DIGEST_BASIS_FILENAME, DIGEST_FILENAME];

const TEMP_PREFIX: &str = ".tmp_";

/// Error writing, reading or verifying a bundle directory.
#[derive(Debug, Error)]
pub enum BundleDirError {
    #[error("I/O error: {detail}")]
    Io { detail: String },
    #[error("missing metadata file: {filename}")]
    MissingMetadata { filename: String },
    #[error("missing artifact: {name}")]
    MissingArtifact { name: String },
    #[error("undeclared extra file: {name}")]
    ExtraFile { name: String },
    /// Artifact names must be plain filenames.
    #[error("artifact name is not a plain filename: {name}")]
    UnsafeArtifactName { name: String },
    #[error("manifest parse error: {detail}")]
    ManifestParseError { detail: String },
    #[error("manifest version mismatch: {found}")]
    ManifestVersionMismatch { found: String },
    #[error("manifest entry invalid: {detail}")]
    ManifestEntryInvalid { detail: String },
    /// `bundle_digest.txt` content doesn't match the recomputed digest.
    #[error("digest mismatch: stored={stored}, recomputed={recomputed}")]
    DigestMismatch { stored: String, recomputed: String },
    #[error("verify error: {0}")]
    Verify(#[from] BundleVerifyError),
}

/// Write an `ArtifactBundleV1` to a directory in `BundleDirectoryV1` format.
///
/// Creates the directory if it does not exist. Writes each artifact file,
/// plus the three metadata files.
///
/// # Errors
///
/// Returns [`BundleDirError::Io`] on I/O failure and
/// [`BundleDirError::UnsafeArtifactName`] for names that would escape `dir`.
pub fn write_bundle_dir(bundle: &ArtifactBundleV1, dir: &Path) -> Result<(), BundleDirError> {
    std::fs::create_dir_all(dir).map_err(|e| BundleDirError::Io {
        detail: format!("create_dir_all: {e}"),
    })?;

    for artifact in bundle.artifacts.values() {
        check_artifact_name(&artifact.name)?;
        write_atomic(&dir.join(&artifact.name), &artifact.content)?;
    }

    write_atomic(&dir.join(MANIFEST_FILENAME), &bundle.manifest)?;
    write_atomic(&dir.join(DIGEST_BASIS_FILENAME), &bundle.digest_basis)?;
    write_atomic(&dir.join(DIGEST_FILENAME), bundle.digest.as_str().as_bytes())?;

    debug!(
        dir = %dir.display(),
        artifacts = bundle.artifacts.len(),
        digest = %bundle.digest,
        "bundle directory written"
    );
    Ok(())
}

/// Read a `BundleDirectoryV1` directory into an `ArtifactBundleV1`.
///
/// Fail-closed:
/// - Missing declared artifact files → error
/// - Extra undeclared files → error
/// - Manifest must be valid JSON with `schema_version: "bundle.v1"`
///
/// The stored `bundle_digest.txt` is verified against the recomputed digest.
/// Per-artifact hashes are checked by [`verify_bundle_dir`], not here.
///
/// # Errors
///
/// Returns [`BundleDirError`] on any validation failure.
pub fn read_bundle_dir(dir: &Path) -> Result<ArtifactBundleV1, BundleDirError> {
    let manifest_bytes = read_required(dir, MANIFEST_FILENAME)?;
    let digest_basis_bytes = read_required(dir, DIGEST_BASIS_FILENAME)?;
    let digest_bytes = read_required(dir, DIGEST_FILENAME)?;

    let manifest_value: serde_json::Value =
        serde_json::from_slice(&manifest_bytes).map_err(|e| {
            BundleDirError::ManifestParseError {
                detail: e.to_string(),
            }
        })?;

    let schema_version = manifest_value["schema_version"].as_str().unwrap_or("");
    if schema_version != MANIFEST_SCHEMA_VERSION {
        return Err(BundleDirError::ManifestVersionMismatch {
            found: schema_version.to_string(),
        });
    }

    let artifact_entries = manifest_value["artifacts"].as_array().ok_or_else(|| {
        BundleDirError::ManifestParseError {
            detail: "\"artifacts\" is not an array".into(),
        }
    })?;

    let mut artifacts = BTreeMap::new();
    for entry in artifact_entries {
        let artifact = read_declared_artifact(dir, entry)?;
        artifacts.insert(artifact.name.clone(), artifact);
    }

    for filename in list_files(dir)? {
        if !artifacts.contains_key(&filename) && !METADATA_FILENAMES.contains(&filename.as_str())
        {
            return Err(BundleDirError::ExtraFile { name: filename });
        }
    }

    let recomputed_digest = canonical_hash(DOMAIN_BUNDLE_DIGEST, &digest_basis_bytes);
    let stored_digest = String::from_utf8_lossy(&digest_bytes).trim().to_string();
    if recomputed_digest.as_str() != stored_digest {
        return Err(BundleDirError::DigestMismatch {
            stored: stored_digest,
            recomputed: recomputed_digest.as_str().to_string(),
        });
    }

    Ok(ArtifactBundleV1 {
        artifacts,
        manifest: manifest_bytes,
        digest_basis: digest_basis_bytes,
        digest: recomputed_digest,
    })
}

/// Verify a bundle directory: read from disk, then run `verify_bundle()`.
///
/// This is the primary offline verification entrypoint.
///
/// # Errors
///
/// Returns [`BundleDirError`] on read failure or integrity mismatch.
pub fn verify_bundle_dir(dir: &Path) -> Result<(), BundleDirError> {
    let bundle = read_bundle_dir(dir)?;
    verify_bundle(&bundle)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn read_declared_artifact(
    dir: &Path,
    entry: &serde_json::Value,
) -> Result<BundleArtifact, BundleDirError> {
    let name = entry["name"]
        .as_str()
        .ok_or_else(|| BundleDirError::ManifestEntryInvalid {
            detail: "missing \"name\" field".into(),
        })?
        .to_string();
    check_artifact_name(&name)?;

    let content_hash_str = entry["content_hash"].as_str().ok_or_else(|| {
        BundleDirError::ManifestEntryInvalid {
            detail: format!("missing \"content_hash\" for {name}"),
        }
    })?;
    let content_hash = ContentHash::parse(content_hash_str).ok_or_else(|| {
        BundleDirError::ManifestEntryInvalid {
            detail: format!("invalid content_hash format for {name}: {content_hash_str}"),
        }
    })?;

    let normative =
        entry["normative"]
            .as_bool()
            .ok_or_else(|| BundleDirError::ManifestEntryInvalid {
                detail: format!("missing \"normative\" for {name}"),
            })?;

    let content = std::fs::read(dir.join(&name))
        .map_err(|_| BundleDirError::MissingArtifact { name: name.clone() })?;

    Ok(BundleArtifact {
        name,
        content,
        content_hash,
        normative,
    })
}

/// Reject empty names, path separators, `..`, metadata names and the temp prefix.
fn check_artifact_name(name: &str) -> Result<(), BundleDirError> {
    let unsafe_name = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\'])
        || name.starts_with(TEMP_PREFIX)
        || METADATA_FILENAMES.contains(&name);
    if unsafe_name {
        return Err(BundleDirError::UnsafeArtifactName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Write bytes to a path via temp file + rename (best-effort atomicity on Unix).
fn write_atomic(path: &Path, content: &[u8]) -> Result<(), BundleDirError> {
    let (Some(dir), Some(file_name)) = (path.parent(), path.file_name()) else {
        return Err(BundleDirError::Io {
            detail: format!("not a file path: {}", path.display()),
        });
    };
    let temp_path = dir.join(format!("{TEMP_PREFIX}{}", file_name.to_string_lossy()));

    std::fs::write(&temp_path, content).map_err(|e| BundleDirError::Io {
        detail: format!("write {}: {e}", temp_path.display()),
    })?;
    std::fs::rename(&temp_path, path).map_err(|e| BundleDirError::Io {
        detail: format!("rename {} → {}: {e}", temp_path.display(), path.display()),
    })
}

fn read_required(dir: &Path, filename: &str) -> Result<Vec<u8>, BundleDirError> {
    std::fs::read(dir.join(filename)).map_err(|_| BundleDirError::MissingMetadata {
        filename: filename.to_string(),
    })
}

/// All regular files in the directory (filenames only), temp files skipped.
fn list_files(dir: &Path) -> Result<BTreeSet<String>, BundleDirError> {
    let io = |what: &str, e: std::io::Error| BundleDirError::Io {
        detail: format!("{what}: {e}"),
    };

    let mut files = BTreeSet::new();
    for entry in std::fs::read_dir(dir).map_err(|e| io("read_dir", e))? {
        let entry = entry.map_err(|e| io("dir entry", e))?;
        let file_type = entry.file_type().map_err(|e| io("file_type", e))?;
        if !file_type.is_file() {
            continue;
        }
        // Non-UTF-8 names can never be declared, so they count as extra.
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.starts_with(TEMP_PREFIX) {
            files.insert(name);
        }
    }
    Ok(files)
}
