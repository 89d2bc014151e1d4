//! Typed domain separators for canonical hashing.
//!
//! Every production hash computation MUST select a domain via [`HashDomain`].
//! This module is the single authority for domain-separator byte strings.
//! Adding a new domain is a single change here: the enum, `as_bytes()`,
//! `ALL`, and `Display` are all generated from the same macro invocation.

/// Declares `HashDomain` enum, `as_bytes()`, `ALL`, and `Display` from one list.
macro_rules! define_hash_domains {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $bytes:expr
        ),+ $(,)?
    ) => {
        /// Typed domain separator for [`super::hash::canonical_hash`].
        ///
        /// Every variant maps to a unique, null-terminated byte string used as
        /// a SHA-256 prefix.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl HashDomain {
            /// The raw domain-separator bytes (null-terminated).
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// All domain variants in declaration order.
            pub const ALL: &[HashDomain] = &[
                $( Self::$variant, )+
            ];
        }

        impl core::fmt::Display for HashDomain {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $( Self::$variant => write!(f, stringify!($variant)), )+
                }
            }
        }
    };
}

define_hash_domains! {
    // -----------------------------------------------------------------------
    // Kernel (grid layer)
    // -----------------------------------------------------------------------

    /// `Grid` identity hashing (dimensions + cell codes).
    GridIdentity => b"WAYFINDER::GRID_IDENTITY::V1\0",

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// Search trace hashing (per-expansion snapshots).
    SearchTrace => b"WAYFINDER::SEARCH_TRACE::V1\0",

    /// Search policy hashing.
    SearchPolicy => b"WAYFINDER::SEARCH_POLICY::V1\0",

    // -----------------------------------------------------------------------
    // Harness
    // -----------------------------------------------------------------------

    /// Bundle artifact content hashing.
    BundleArtifact => b"WAYFINDER::BUNDLE_ARTIFACT::V1\0",

    /// Bundle digest (normative projection).
    BundleDigest => b"WAYFINDER::BUNDLE_DIGEST::V1\0",
}
