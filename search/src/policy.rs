//! Search policy types.

use serde::{Deserialize, Serialize};
use wayfinder_kernel::proof::canon::canonical_json_bytes;
use wayfinder_kernel::proof::hash::{canonical_hash, ContentHash};
use wayfinder_kernel::proof::hash_domain::HashDomain;

use crate::error::SearchError;
use crate::heuristic::HeuristicKind;
use crate::movement::Movement;

/// Per-search configuration, fixed for the whole search.
///
/// Loadable from JSON; missing fields take their defaults and unknown
/// fields are rejected:
///
/// ```json
/// {"heuristic": "euclidean", "allow_diagonal": true}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchPolicyV1 {
    /// Heuristic strategy (default `manhattan`).
    pub heuristic: HeuristicKind,
    /// 8-way movement when true, 4-way otherwise (default `false`).
    pub allow_diagonal: bool,
}

impl SearchPolicyV1 {
    #[must_use]
    pub const fn new(heuristic: HeuristicKind, allow_diagonal: bool) -> Self {
        Self {
            heuristic,
            allow_diagonal,
        }
    }

    /// The movement topology this policy selects.
    #[must_use]
    pub const fn movement(&self) -> Movement {
        Movement::from_allow_diagonal(self.allow_diagonal)
    }

    /// Decode a policy from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if the document is not valid
    /// JSON, names an unknown heuristic, or carries unknown fields.
    pub fn from_json_str(s: &str) -> Result<Self, SearchError> {
        serde_json::from_str(s).map_err(|e| SearchError::InvalidPolicy {
            detail: e.to_string(),
        })
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "allow_diagonal": self.allow_diagonal,
            "heuristic": self.heuristic.name(),
        })
    }

    /// Content hash of the policy's canonical JSON.
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        canonical_hash(
            HashDomain::SearchPolicy,
            &canonical_json_bytes(&self.to_json_value()),
        )
    }
}
