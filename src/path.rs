//! Implementation-path bitmasks and the resolution rule that picks one.
//!
//! A [`Path`] names one implementation of an architecture-specific kernel,
//! typically one SIMD instruction-set generation. Path values are bits, so a
//! `Path` doubles as a *set* of acceptable implementations: entry points take
//! an OR-ed mask meaning "any of these is fine, compile them all and decide
//! at runtime". Kernels monomorphized per single-bit path coexist in one
//! binary as distinct symbols, so runtime selection costs one resolved value,
//! not a virtual call on the hot loop.
//!
//! Bit positions encode preference: a higher bit is a more specialized,
//! faster implementation. [`most_significant_path`] collapses a mask to the
//! single best member, and is meant to run once per dispatch decision.
//!
//! Architecture bits are defined only for the build's active profile (see
//! [`ArchProfile`]), and mutually exclusive profiles reuse bit values:
//! `NEON` on ARM and `SSE42` on x86 both occupy 0x4. A `Path` value is
//! meaningful within one build, never across builds for different targets;
//! do not persist raw masks between machines. The names accepted by the
//! [`FromStr`] impl are likewise per-profile.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};
use std::str::FromStr;

use crate::error::Error;
use crate::platform::ArchProfile;
use crate::pow2;

/// A set of kernel implementation paths, one bit per path.
///
/// `Path::NONE` is the empty set. `Path::PORTABLE` is always defined and
/// always runnable; the remaining bits exist only on the matching target
/// architecture. Set algebra is available both as `const fn`s (usable in
/// constant expressions, including the compile-time disjointness checks in
/// [`crate::sets`]) and through the standard bit operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path(u8);

impl Path {
    /// The empty set: no acceptable implementation.
    pub const NONE: Self = Self(0);

    /// Portable scalar implementation, available on every target.
    ///
    /// Intended as the universal fallback and as the reference for testing
    /// the specialized paths against.
    pub const PORTABLE: Self = Self(0x2);

    /// Baseline ARM NEON implementation.
    #[cfg(any(target_arch = "arm", target_arch = "aarch64"))]
    pub const NEON: Self = Self(0x4);

    /// NEON plus the dot-product extension found on newer ARM cores.
    #[cfg(any(target_arch = "arm", target_arch = "aarch64"))]
    pub const NEON_DOTPROD: Self = Self(0x8);

    /// SSE 4.2 implementation. Work in progress, not tuned yet.
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    pub const SSE42: Self = Self(0x4);

    /// AVX2 implementation.
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    pub const AVX2: Self = Self(0x8);

    /// AVX-512 implementation.
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    pub const AVX512: Self = Self(0x10);

    /// AVX-VNNI implementation. Work in progress, not tuned yet.
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    pub const AVX_VNNI: Self = Self(0x20);

    /// Raw bit pattern of the mask.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if the mask is empty.
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the mask holds exactly one path.
    ///
    /// Kernel registries index by single-bit values; resolved dispatch
    /// decisions satisfy this predicate.
    #[must_use]
    pub const fn is_single_bit(self) -> bool {
        pow2::is_pot(self.0 as u32)
    }

    /// Set union.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Set intersection.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Symmetric difference: paths in exactly one of the two masks.
    #[must_use]
    pub const fn symmetric_difference(self, other: Self) -> Self {
        Self(self.0 ^ other.0)
    }

    /// Complement over the full bit width of the representation.
    #[must_use]
    pub const fn complement(self) -> Self {
        Self(!self.0)
    }

    /// Returns true if the two masks share no path.
    #[must_use]
    pub const fn disjoint(self, other: Self) -> bool {
        self.intersection(other).is_none()
    }

    /// Returns true if every path in `other` is also in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Iterates the single-bit members of the mask in ascending priority
    /// order.
    #[must_use]
    pub const fn iter(self) -> PathIter {
        PathIter { remaining: self.0 }
    }

    /// Name of a single-bit path under the active architecture profile.
    ///
    /// Returns `None` for the empty mask, for multi-bit masks, and for bits
    /// with no path defined in this build.
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        match self {
            Self::PORTABLE => Some("portable"),

            #[cfg(any(target_arch = "arm", target_arch = "aarch64"))]
            Self::NEON => Some("neon"),
            #[cfg(any(target_arch = "arm", target_arch = "aarch64"))]
            Self::NEON_DOTPROD => Some("neon-dotprod"),

            #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
            Self::SSE42 => Some("sse42"),
            #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
            Self::AVX2 => Some("avx2"),
            #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
            Self::AVX512 => Some("avx512"),
            #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
            Self::AVX_VNNI => Some("avx-vnni"),

            _ => None,
        }
    }

    /// Looks up a path by name under the active architecture profile.
    ///
    /// `"none"` yields the empty mask. Names of paths that exist only on
    /// other architectures are not recognized.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "none" => Some(Self::NONE),
            "portable" => Some(Self::PORTABLE),

            #[cfg(any(target_arch = "arm", target_arch = "aarch64"))]
            "neon" => Some(Self::NEON),
            #[cfg(any(target_arch = "arm", target_arch = "aarch64"))]
            "neon-dotprod" => Some(Self::NEON_DOTPROD),

            #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
            "sse42" => Some(Self::SSE42),
            #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
            "avx2" => Some(Self::AVX2),
            #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
            "avx512" => Some(Self::AVX512),
            #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
            "avx-vnni" => Some(Self::AVX_VNNI),

            _ => None,
        }
    }
}

impl BitOr for Path {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitAnd for Path {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitXor for Path {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        self.symmetric_difference(rhs)
    }
}

impl Not for Path {
    type Output = Self;

    fn not(self) -> Self {
        self.complement()
    }
}

impl fmt::Display for Path {
    /// Renders the mask as `|`-separated path names, `"none"` when empty.
    ///
    /// Bits with no path defined in this build (complements produce them)
    /// render as hex.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return f.write_str("none");
        }
        let mut first = true;
        for bit in self.iter() {
            if !first {
                f.write_str("|")?;
            }
            first = false;
            match bit.name() {
                Some(name) => f.write_str(name)?,
                None => {
                    let bits = bit.bits();
                    write!(f, "{bits:#04x}")?;
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = Error;

    /// Parses a `|`-separated list of path names into a mask.
    ///
    /// Surrounding whitespace per name is ignored; `"none"` contributes
    /// nothing. Only names defined for the active architecture profile are
    /// accepted.
    fn from_str(s: &str) -> Result<Self, Error> {
        let mut mask = Self::NONE;
        for part in s.split('|') {
            let part = part.trim();
            match Self::from_name(part) {
                Some(path) => mask = mask.union(path),
                None => {
                    return Err(Error::UnknownPathName {
                        name: part.to_owned(),
                        profile: ArchProfile::ACTIVE.name(),
                    })
                }
            }
        }
        Ok(mask)
    }
}

/// Iterator over the single-bit members of a [`Path`] mask.
///
/// Yields paths in ascending bit order, i.e. least-preferred first.
#[derive(Debug, Clone)]
pub struct PathIter {
    remaining: u8,
}

impl Iterator for PathIter {
    type Item = Path;

    fn next(&mut self) -> Option<Path> {
        if self.remaining == 0 {
            return None;
        }
        let low = self.remaining & self.remaining.wrapping_neg();
        self.remaining ^= low;
        Some(Path(low))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for PathIter {}

impl IntoIterator for Path {
    type Item = Path;
    type IntoIter = PathIter;

    fn into_iter(self) -> PathIter {
        self.iter()
    }
}

/// Narrows a mask to the single highest-priority path it contains.
///
/// The highest set bit wins: bit values are assigned in increasing order of
/// specialization, so this encodes "always prefer the most specialized
/// implementation still acceptable". A single-bit mask is returned unchanged
/// and the function is idempotent.
///
/// The empty mask resolves to [`Path::NONE`]. There is no implicit fallback
/// to [`Path::PORTABLE`] here; the dispatcher owns fallback policy and an
/// empty result tells it no acceptable implementation remained.
#[must_use]
pub const fn most_significant_path(mask: Path) -> Path {
    if mask.is_none() {
        Path::NONE
    } else {
        Path(pow2::round_down_pot(mask.0 as u32) as u8)
    }
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Disjointness is symmetric.
        #[test]
        fn prop_disjoint_symmetric(a in any::<u8>(), b in any::<u8>()) {
            let (p, q) = (Path(a), Path(b));
            prop_assert_eq!(p.disjoint(q), q.disjoint(p));
        }

        /// Every mask is disjoint from the empty mask.
        #[test]
        fn prop_disjoint_none(a in any::<u8>()) {
            prop_assert!(Path(a).disjoint(Path::NONE));
        }

        /// The algebra matches the underlying bit arithmetic.
        #[test]
        fn prop_ops_match_bits(a in any::<u8>(), b in any::<u8>()) {
            let (p, q) = (Path(a), Path(b));
            prop_assert_eq!((p | q).bits(), a | b);
            prop_assert_eq!((p & q).bits(), a & b);
            prop_assert_eq!((p ^ q).bits(), a ^ b);
            prop_assert_eq!((!p).bits(), !a);
        }

        /// Resolution is idempotent.
        #[test]
        fn prop_resolution_idempotent(a in any::<u8>()) {
            let once = most_significant_path(Path(a));
            prop_assert_eq!(most_significant_path(once), once);
        }

        /// A non-empty mask resolves to its own highest single bit.
        #[test]
        fn prop_resolution_picks_highest_member(a in 1u8..=u8::MAX) {
            let mask = Path(a);
            let resolved = most_significant_path(mask);
            prop_assert!(resolved.is_single_bit());
            prop_assert!(mask.contains(resolved));
            prop_assert_eq!(mask.iter().last(), Some(resolved));
        }

        /// Display and parse round-trip for masks made of defined paths.
        #[test]
        fn prop_display_parse_round_trip(a in any::<u8>()) {
            let mask = Path(a).intersection(crate::sets::ALL_PATHS);
            let parsed: Path = mask.to_string().parse().unwrap();
            prop_assert_eq!(parsed, mask);
        }

        /// Iteration yields disjoint single bits whose union is the input.
        #[test]
        fn prop_iter_partitions_mask(a in any::<u8>()) {
            let mask = Path(a);
            let mut rebuilt = Path::NONE;
            for bit in mask.iter() {
                prop_assert!(bit.is_single_bit());
                prop_assert!(rebuilt.disjoint(bit));
                rebuilt = rebuilt | bit;
            }
            prop_assert_eq!(rebuilt, mask);
        }
    }
}
