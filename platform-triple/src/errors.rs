//! Errors!

use miette::Diagnostic;
use platform_triple_schema::{ParseTripleError, TargetTriple};
use thiserror::Error;

/// A Result returned by platform-triple
pub type Result<T> = std::result::Result<T, PlatformError>;

/// An Error/Diagnostic returned by platform-triple
///
/// Apart from I/O, every variant is a caller asking a question that has no
/// answer for the given triple. None of them are "the answer is nothing":
/// those are returned as values (an empty platform name, no runtime version).
#[derive(Debug, Error, Diagnostic)]
#[non_exhaustive]
pub enum PlatformError {
    /// Axoasset returned an error (I/O error, malformed SDK info)
    #[cfg(feature = "cli")]
    #[error(transparent)]
    #[diagnostic(transparent)]
    Axoasset(#[from] axoasset::AxoassetError),

    /// A triple string that isn't arch-vendor-os[-environment]
    #[error(transparent)]
    #[diagnostic(help("triples look like arm64-apple-ios14.0 or x86_64-unknown-linux-gnu"))]
    ParseTriple(#[from] ParseTripleError),

    /// Asked for the Apple platform of a triple that isn't an Apple OS
    #[error("{triple} is not a Darwin triple")]
    #[diagnostic(help("only macOS, iOS, tvOS, and watchOS triples have an Apple platform kind"))]
    NotDarwin {
        /// The triple
        triple: TargetTriple,
    },

    /// The OS component wasn't any OS we know about
    #[error("{triple} has an unrecognized operating system '{os_name}'")]
    UnknownOperatingSystem {
        /// The triple
        triple: TargetTriple,
        /// The OS component as written
        os_name: String,
    },

    /// A Windows triple whose environment doesn't pick a toolchain flavour
    #[error("{triple} has an unsupported Windows environment")]
    #[diagnostic(help("Windows triples need an msvc, itanium, gnu, or cygnus environment"))]
    UnsupportedWindowsEnvironment {
        /// The triple
        triple: TargetTriple,
    },
}
