//! Error types for kernpath operations.
//!
//! The path algebra itself is total and cannot fail; set misconfiguration is
//! caught by `const` assertions at compile time. The only fallible surface
//! is parsing path names out of consumer configuration.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in kernpath operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A path name that is not defined for the active architecture profile.
    ///
    /// Path bits only exist for the build's target architecture, so a name
    /// that is valid on another architecture (`"neon"` in an x86 build) is
    /// rejected the same way as a typo.
    #[error("unknown path name `{name}` for architecture profile `{profile}`")]
    UnknownPathName {
        /// The name that failed to parse.
        name: String,
        /// Name of the active architecture profile.
        profile: &'static str,
    },
}
