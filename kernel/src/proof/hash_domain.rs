//! Typed domain separators for canonical hashing.
//!
//! Every hash computation in the workspace selects a domain via [`HashDomain`].
//! Adding a new domain is a single change here: the enum, `as_bytes()`, `ALL`,
//! and `Display` are all generated from the same macro invocation.

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
    // Kernel (world model)
    // -----------------------------------------------------------------------

    /// Configuration identity bytes (stacks + held object). Search dedup key.
    ConfigurationIdentity => b"STACKER::CONFIGURATION_IDENTITY::V1\0",

    /// Full world snapshot (object table + start configuration).
    WorldSnapshot => b"STACKER::WORLD_SNAPSHOT::V1\0",

    // -----------------------------------------------------------------------
    // Harness
    // -----------------------------------------------------------------------

    /// Compiled goal formula.
    GoalFormula => b"STACKER::GOAL_FORMULA::V1\0",

    /// Planner policy snapshot.
    PolicySnapshot => b"STACKER::POLICY_SNAPSHOT::V1\0",

    /// Plan report (normative projection of a planning run).
    PlanReport => b"STACKER::PLAN_REPORT::V1\0",
}
