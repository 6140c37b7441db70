//! # Kernpath
//!
//! Capability-path selection for SIMD kernel dispatch.
//!
//! A numerical-kernel library that ships one implementation per CPU
//! instruction-set generation needs to pick, at build time and at runtime,
//! exactly which implementation to run, without virtual dispatch on the hot
//! path and without two variants ever sharing an identity. Kernpath is that
//! selection layer: an opaque bitmask type ([`Path`]) with one bit per
//! implementation, `const` set algebra over it, per-architecture constant
//! sets frozen at build configuration time, and the single resolution rule
//! ([`most_significant_path`]) that narrows an ambiguous "any of these is
//! acceptable" mask to one definite choice.
//!
//! The kernels themselves, CPU feature probing, and the dispatcher that
//! invokes the chosen implementation are consumers of this crate, not part
//! of it.
//!
//! ## Quick Start
//!
//! ```rust
//! use kernpath::{most_significant_path, Path, DEFAULT_PATHS};
//!
//! // A hardware probe narrows the compiled-in set to what the CPU supports
//! // (here: pretend only the portable path survived).
//! let available = DEFAULT_PATHS & Path::PORTABLE;
//!
//! // One dispatch decision: the most specialized acceptable path wins.
//! let chosen = most_significant_path(available);
//! assert_eq!(chosen, Path::PORTABLE);
//! ```
//!
//! ## Design
//!
//! - **Bits are priorities.** Higher bit value = more specialized
//!   implementation; resolution is "highest bit wins".
//! - **Sets are frozen per build.** `cfg(target_arch)` decides which bits
//!   exist and how [`DEFAULT_ARCH_PATHS`] / [`EXTRA_ARCH_PATHS`] are
//!   populated. Disjointness of the base sets is asserted at compile time; a
//!   bit collision cannot reach runtime.
//! - **Everything is pure.** No state, no I/O, no synchronization; every
//!   operation is referentially transparent and safely concurrent.
//! - **Resolving the empty mask yields the empty mask.** Fallback policy
//!   belongs to the dispatcher, not this layer.
//!
//! ## Feature Flags
//!
//! - `serde`: derive `Serialize`/`Deserialize` on [`Path`] for consumer
//!   configuration files.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Path bits live in a u8; pow2 helpers work on u32
#![allow(clippy::cast_possible_truncation)]

// ============================================================================
// Core Modules
// ============================================================================

/// Implementation-path bitmask type, algebra, and resolution.
pub mod path;

/// Per-architecture path sets and compile-time invariant checks.
pub mod sets;

/// Architecture profile identification.
pub mod platform;

/// Power-of-two arithmetic helpers.
pub mod pow2;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for kernpath operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Re-exports
// ============================================================================

pub use path::{most_significant_path, Path, PathIter};
pub use platform::ArchProfile;
pub use sets::{
    ALL_PATHS, DEFAULT_ARCH_PATHS, DEFAULT_PATHS, EXTRA_ARCH_PATHS, NON_ARCH_PATHS,
};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and constants for convenient imports.
///
/// ```rust
/// use kernpath::prelude::*;
///
/// assert!(ALL_PATHS.contains(Path::PORTABLE));
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::path::{most_significant_path, Path};
    pub use crate::platform::ArchProfile;
    pub use crate::sets::{
        ALL_PATHS, DEFAULT_ARCH_PATHS, DEFAULT_PATHS, EXTRA_ARCH_PATHS, NON_ARCH_PATHS,
    };
}

// ============================================================================
// Tests
// ============================================================================
