//! The parts of an SDK's `SDKSettings.json` that version remapping needs.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::version::{VersionMap, VersionTuple};

/// What an SDK says about itself
///
/// This mirrors the `Version` and `VersionMap` keys of `SDKSettings.json`;
/// all the other keys in that file are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct SdkInfo {
    /// The SDK's own version (for a macOS SDK, a macOS version)
    pub version: VersionTuple,
    /// Tables relating this SDK's versions to related platforms
    #[serde(default)]
    pub version_map: SdkVersionMaps,
}

/// Version tables shipped with an SDK
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SdkVersionMaps {
    /// macOS version → iOS version as seen by Mac Catalyst code
    #[serde(rename = "macOS_iOSMac")]
    #[serde(default)]
    #[serde(skip_serializing_if = "VersionMap::is_empty")]
    pub macos_to_catalyst: VersionMap,
    /// Mac Catalyst iOS version → macOS version
    #[serde(rename = "iOSMac_macOS")]
    #[serde(default)]
    #[serde(skip_serializing_if = "VersionMap::is_empty")]
    pub catalyst_to_macos: VersionMap,
}

impl SdkInfo {
    /// An SDK with no version tables
    pub fn new(version: VersionTuple) -> Self {
        Self {
            version,
            version_map: SdkVersionMaps::default(),
        }
    }
}
