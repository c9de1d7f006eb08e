//! Classification of target triples for a compiler toolchain.
//!
//! Given a parsed [`Triple`][], this crate answers the questions a driver
//! asks before it can pick an SDK, name a module artifact, or decide which
//! runtime to link against:
//!
//! * which Apple platform it is ([`darwin_platform_kind`][])
//! * what its platform directory is called ([`platform_name_for_triple`][])
//! * what canonical triple its module files are named after
//!   ([`normalized_module_triple`][])
//! * which runtime ABI it must stay compatible with
//!   ([`runtime_compatibility_version`][])
//! * which SDK version to record ([`target_sdk_version`][])
//!
//! Everything here is a pure function of its inputs. [`platform_report`][]
//! bundles all of it into one serializable [`PlatformReport`][].

#![deny(missing_docs)]
#![allow(clippy::result_large_err)]

pub mod darwin;
pub mod environment;
pub mod errors;
pub mod module_triple;
pub mod names;
pub mod platforms;
pub mod remap;
pub mod report;
pub mod runtime;
#[cfg(test)]
mod tests;

pub use darwin::darwin_platform_kind;
pub use environment::{
    infers_simulator_environment, is_ios_simulator, is_mac_catalyst, is_simulator_suffixed,
    is_tvos_simulator, is_watchos_simulator, triples_valid_for_zippering,
};
pub use errors::{PlatformError, Result};
pub use module_triple::{normalized_module_triple, unversioned_triple};
pub use names::{major_architecture_name, platform_name, platform_name_for_triple};
pub use platform_triple_schema::{
    DarwinPlatformKind, PlatformReport, SdkInfo, Triple, VersionMap, VersionTuple,
};
pub use remap::{catalyst_to_macos_version, remap_version, target_sdk_version};
pub use report::platform_report;
pub use runtime::{requires_runtime_rpath, runtime_compatibility_version};
