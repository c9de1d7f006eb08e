//! # platform-triple-schema
//!
//! The data model shared by everything that classifies target triples:
//! [`Triple`][] itself, the [`VersionTuple`][]s and [`VersionMap`][]s that
//! runtime/SDK versions are expressed in, the Apple platform kinds, and the
//! serializable [`PlatformReport`][] that platform-triple emits.
//!
//! The root type of the JSON schema is [`PlatformReport`][].

#![deny(missing_docs)]

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub mod macros;
pub mod sdk;
pub mod triple;
pub mod version;

pub use sdk::{SdkInfo, SdkVersionMaps};
pub use triple::{
    Architecture, Environment, OperatingSystem, ParseTripleError, SubArchitecture, Triple, Vendor,
};
pub use version::{ParseVersionError, VersionMap, VersionTuple};

crate::declare_strongly_typed_string! {
    /// A rendered target triple (e.g. `arm64-apple-ios14.0-simulator`)
    pub struct TargetTriple;

    /// The name of a platform as used in SDK and library directory names
    /// (e.g. `iphonesimulator`, `linux`, `mingw`)
    pub struct PlatformName;
}

/// The Apple platforms a Darwin triple can denote
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Serialize, Deserialize, JsonSchema)]
pub enum DarwinPlatformKind {
    /// macOS
    #[serde(rename = "macos")]
    MacOS,
    /// iOS on a device (including Mac Catalyst)
    #[serde(rename = "iphoneos")]
    IPhoneOS,
    /// iOS simulator
    #[serde(rename = "iphoneos-simulator")]
    IPhoneOSSimulator,
    /// tvOS on a device
    #[serde(rename = "tvos")]
    TvOS,
    /// tvOS simulator
    #[serde(rename = "tvos-simulator")]
    TvOSSimulator,
    /// watchOS on a device
    #[serde(rename = "watchos")]
    WatchOS,
    /// watchOS simulator
    #[serde(rename = "watchos-simulator")]
    WatchOSSimulator,
}

impl DarwinPlatformKind {
    /// Every kind, in declaration order
    pub const ALL: [DarwinPlatformKind; 7] = [
        Self::MacOS,
        Self::IPhoneOS,
        Self::IPhoneOSSimulator,
        Self::TvOS,
        Self::TvOSSimulator,
        Self::WatchOS,
        Self::WatchOSSimulator,
    ];

    /// Whether this is one of the simulator kinds
    pub fn is_simulator(self) -> bool {
        matches!(
            self,
            Self::IPhoneOSSimulator | Self::TvOSSimulator | Self::WatchOSSimulator
        )
    }
}

/// Everything platform-triple can tell you about one target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PlatformReport {
    /// The triple that was classified
    pub target: TargetTriple,
    /// The Apple platform, for Darwin triples
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub darwin_platform: Option<DarwinPlatformKind>,
    /// The platform name, if the OS has one
    ///
    /// Missing for OSes that are known but have no platform directory.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_name: Option<PlatformName>,
    /// The architecture name used for per-architecture directories
    pub major_architecture: String,
    /// The canonical triple for naming per-target module files
    pub module_triple: TargetTriple,
    /// The triple with its OS version stripped
    pub unversioned_triple: TargetTriple,
    /// Targets a simulator (explicitly or by inference from the architecture)
    pub simulator: bool,
    /// Targets Mac Catalyst
    pub mac_catalyst: bool,
    /// Whether the simulator was inferred rather than spelled out
    pub infers_simulator: bool,
    /// Binaries need an rpath to find the runtime (it isn't in the OS)
    pub requires_runtime_rpath: bool,
    /// The oldest runtime ABI the binary must stay compatible with
    ///
    /// Missing if the OS version doesn't constrain it.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_compatibility_version: Option<VersionTuple>,
    /// The SDK version to record in the binary, if SDK info was provided
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_sdk_version: Option<VersionTuple>,
    /// Whether this target can be zippered with a requested variant
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zippering: Option<ZipperingReport>,
}

/// The result of checking a pair of triples for zippering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ZipperingReport {
    /// The other half of the pair
    pub variant: TargetTriple,
    /// Whether the pair can be combined into one zippered binary
    pub compatible: bool,
}

impl PlatformReport {
    /// Get the JSON Schema for a PlatformReport
    pub fn json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(PlatformReport)
    }
}
