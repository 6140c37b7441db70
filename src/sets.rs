//! Per-architecture path sets and their compile-time invariants.
//!
//! Three disjoint base sets partition the defined paths:
//!
//! - [`NON_ARCH_PATHS`]: paths defined regardless of CPU architecture. Slow
//!   but portable; currently just [`Path::PORTABLE`].
//! - [`DEFAULT_ARCH_PATHS`]: the architecture-specific paths recommended for
//!   general use on the active profile.
//! - [`EXTRA_ARCH_PATHS`]: the remaining architecture-specific paths:
//!   work-in-progress implementations, or targets for minority hardware that
//!   is not the right code-size/performance compromise for most users.
//!
//! Neither architecture set includes a fallback for CPUs that support none
//! of its members at runtime; that is what the aggregates below are for.
//! [`DEFAULT_PATHS`] is what entry points use when the caller does not pick a
//! mask explicitly, and [`ALL_PATHS`] is everything available to compile.
//!
//! Disjointness of the base sets is load-bearing: a bit shared between two
//! sets would let the resolver conflate two distinct implementations. The
//! `const` assertions at the bottom make any collision a compile error.

use crate::path::Path;

/// Paths defined on every architecture. Portable, slow, always runnable.
pub const NON_ARCH_PATHS: Path = Path::PORTABLE;

/// Architecture paths recommended for general use on this build's profile.
///
/// On 64-bit ARM the dot-product path rides along: the targets this crate
/// supports can all detect the extension at runtime, and the hardware probe
/// strips the bit on cores without it.
#[cfg(target_arch = "aarch64")]
pub const DEFAULT_ARCH_PATHS: Path = Path::NEON.union(Path::NEON_DOTPROD);

/// Architecture paths not recommended by default on this build's profile.
#[cfg(target_arch = "aarch64")]
pub const EXTRA_ARCH_PATHS: Path = Path::NONE;

/// Architecture paths recommended for general use on this build's profile.
///
/// 32-bit ARM compiles no dot-product kernels: the bit exists but belongs to
/// neither set, so it is absent from [`ALL_PATHS`].
#[cfg(target_arch = "arm")]
pub const DEFAULT_ARCH_PATHS: Path = Path::NEON;

/// Architecture paths not recommended by default on this build's profile.
#[cfg(target_arch = "arm")]
pub const EXTRA_ARCH_PATHS: Path = Path::NONE;

/// Architecture paths recommended for general use on this build's profile.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub const DEFAULT_ARCH_PATHS: Path = Path::AVX2.union(Path::AVX512);

/// Architecture paths not recommended by default on this build's profile.
///
/// SSE 4.2 and AVX-VNNI are still work in progress.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub const EXTRA_ARCH_PATHS: Path = Path::SSE42.union(Path::AVX_VNNI);

/// Architecture paths recommended for general use on this build's profile.
#[cfg(not(any(
    target_arch = "x86",
    target_arch = "x86_64",
    target_arch = "aarch64",
    target_arch = "arm"
)))]
pub const DEFAULT_ARCH_PATHS: Path = Path::NONE;

/// Architecture paths not recommended by default on this build's profile.
#[cfg(not(any(
    target_arch = "x86",
    target_arch = "x86_64",
    target_arch = "aarch64",
    target_arch = "arm"
)))]
pub const EXTRA_ARCH_PATHS: Path = Path::NONE;

/// The mask entry points use when the caller does not pick one: the portable
/// path plus the recommended architecture paths.
pub const DEFAULT_PATHS: Path = Path::PORTABLE.union(DEFAULT_ARCH_PATHS);

/// Every path available to compile on this build's profile.
pub const ALL_PATHS: Path =
    NON_ARCH_PATHS.union(DEFAULT_ARCH_PATHS).union(EXTRA_ARCH_PATHS);

// A bit collision between the base sets is a configuration bug, not a
// runtime condition: it must block compilation.
const _: () = {
    assert!(
        DEFAULT_ARCH_PATHS.disjoint(EXTRA_ARCH_PATHS),
        "default and extra architecture path sets share a bit"
    );
    assert!(
        DEFAULT_ARCH_PATHS.disjoint(NON_ARCH_PATHS),
        "default architecture path set collides with the portable set"
    );
    assert!(
        EXTRA_ARCH_PATHS.disjoint(NON_ARCH_PATHS),
        "extra architecture path set collides with the portable set"
    );
    assert!(
        DEFAULT_PATHS.disjoint(ALL_PATHS.complement()),
        "default paths must be contained in the all-paths mask"
    );
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ArchProfile;

    #[test]
    fn test_base_sets_pairwise_disjoint() {
        assert!(NON_ARCH_PATHS.disjoint(DEFAULT_ARCH_PATHS));
        assert!(NON_ARCH_PATHS.disjoint(EXTRA_ARCH_PATHS));
        assert!(DEFAULT_ARCH_PATHS.disjoint(EXTRA_ARCH_PATHS));
    }

    #[test]
    fn test_aggregates() {
        assert_eq!(DEFAULT_PATHS, Path::PORTABLE | DEFAULT_ARCH_PATHS);
        assert_eq!(
            ALL_PATHS,
            NON_ARCH_PATHS | DEFAULT_ARCH_PATHS | EXTRA_ARCH_PATHS
        );
        assert!(ALL_PATHS.contains(DEFAULT_PATHS));
        assert!(DEFAULT_PATHS.disjoint(!ALL_PATHS));
    }

    #[test]
    fn test_arch_sets_empty_iff_generic_profile() {
        let has_arch = !DEFAULT_ARCH_PATHS.is_none() || !EXTRA_ARCH_PATHS.is_none();
        assert_eq!(has_arch, ArchProfile::ACTIVE.has_arch_paths());
    }

    // Each profile's exact bit assignments. Bit values are reused between
    // mutually exclusive profiles (NEON and SSE42 both sit at 0x4), so the
    // assignments are pinned per profile instead of assumed globally unique.
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    #[test]
    fn test_x86_profile_assignments() {
        assert_eq!(Path::SSE42.bits(), 0x04);
        assert_eq!(Path::AVX2.bits(), 0x08);
        assert_eq!(Path::AVX512.bits(), 0x10);
        assert_eq!(Path::AVX_VNNI.bits(), 0x20);
        assert_eq!(DEFAULT_ARCH_PATHS, Path::AVX2 | Path::AVX512);
        assert_eq!(EXTRA_ARCH_PATHS, Path::SSE42 | Path::AVX_VNNI);
        assert_eq!(ALL_PATHS.bits(), 0x3e);
    }

    #[cfg(target_arch = "aarch64")]
    #[test]
    fn test_neon64_profile_assignments() {
        assert_eq!(Path::NEON.bits(), 0x04);
        assert_eq!(Path::NEON_DOTPROD.bits(), 0x08);
        assert_eq!(DEFAULT_ARCH_PATHS, Path::NEON | Path::NEON_DOTPROD);
        assert_eq!(EXTRA_ARCH_PATHS, Path::NONE);
        assert_eq!(ALL_PATHS.bits(), 0x0e);
    }

    #[cfg(target_arch = "arm")]
    #[test]
    fn test_neon32_profile_assignments() {
        assert_eq!(Path::NEON.bits(), 0x04);
        assert_eq!(DEFAULT_ARCH_PATHS, Path::NEON);
        assert_eq!(EXTRA_ARCH_PATHS, Path::NONE);
        // The dotprod bit exists but is compiled into neither set.
        assert!(ALL_PATHS.disjoint(Path::NEON_DOTPROD));
        assert_eq!(ALL_PATHS.bits(), 0x06);
    }

    #[cfg(not(any(
        target_arch = "x86",
        target_arch = "x86_64",
        target_arch = "aarch64",
        target_arch = "arm"
    )))]
    #[test]
    fn test_generic_profile_assignments() {
        assert_eq!(DEFAULT_ARCH_PATHS, Path::NONE);
        assert_eq!(EXTRA_ARCH_PATHS, Path::NONE);
        assert_eq!(ALL_PATHS, Path::PORTABLE);
    }
}
