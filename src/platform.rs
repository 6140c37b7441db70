//! Architecture profile identification.
//!
//! Exactly one profile is active per build, selected by `target_arch` at
//! compile time. The profile decides which path bits exist and how the
//! default and extra path sets are populated (see [`crate::sets`]); it never
//! changes at runtime. Runtime narrowing against what the CPU actually
//! supports is the hardware probe's job, outside this crate.

use std::fmt;

/// The architecture profile a build was configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchProfile {
    /// x86 and x86_64: SSE 4.2 through AVX-VNNI path bits exist.
    X86,
    /// 64-bit ARM: NEON is baseline, the dot-product extension is detectable.
    Neon64,
    /// 32-bit ARM: NEON only.
    Neon32,
    /// No architecture-specific paths; the portable path stands alone.
    Generic,
}

impl ArchProfile {
    /// The profile this build was compiled for.
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    pub const ACTIVE: Self = Self::X86;

    /// The profile this build was compiled for.
    #[cfg(target_arch = "aarch64")]
    pub const ACTIVE: Self = Self::Neon64;

    /// The profile this build was compiled for.
    #[cfg(target_arch = "arm")]
    pub const ACTIVE: Self = Self::Neon32;

    /// The profile this build was compiled for.
    #[cfg(not(any(
        target_arch = "x86",
        target_arch = "x86_64",
        target_arch = "aarch64",
        target_arch = "arm"
    )))]
    pub const ACTIVE: Self = Self::Generic;

    /// Short lowercase profile name for diagnostics and error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::X86 => "x86",
            Self::Neon64 => "neon64",
            Self::Neon32 => "neon32",
            Self::Generic => "generic",
        }
    }

    /// Returns true if the profile defines any architecture-specific paths.
    #[must_use]
    pub const fn has_arch_paths(self) -> bool {
        !matches!(self, Self::Generic)
    }
}

impl fmt::Display for ArchProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
