//! Translating SDK versions between related platforms.

use platform_triple_schema::{SdkInfo, Triple, VersionMap, VersionTuple};
use tracing::{debug, warn};

use crate::environment::is_mac_catalyst;

/// Look `version` up in `map`, retrying without a trailing `.0`
///
/// Version maps are written at the coarsest granularity that matters, so
/// `10.15.0` finds a `10.15` entry and `11.0.0` finds an `11` entry. A
/// non-zero component is never dropped: `10.15.3` only finds `10.15.3`. The
/// build component is ignored.
pub fn remap_version(map: &VersionMap, version: VersionTuple) -> Option<VersionTuple> {
    let version = version.without_build();
    if let Some(found) = map.get(&version) {
        return Some(found);
    }

    if version.subminor() != Some(0) {
        return None;
    }
    let minor = version.minor()?;
    let version = VersionTuple::with_minor(version.major(), minor);
    if let Some(found) = map.get(&version) {
        debug!("remapped {version}.0 through the {version} entry");
        return Some(found);
    }

    if minor != 0 {
        return None;
    }
    let version = VersionTuple::new(version.major());
    let found = map.get(&version)?;
    debug!("remapped {version}.0.0 through the {version} entry");
    Some(found)
}

/// The SDK version to record in a binary built for `triple`
///
/// A Mac Catalyst binary is built against a macOS SDK but records the iOS
/// version that SDK corresponds to. If the SDK doesn't say, this is `0.0.0`.
/// Every other triple records the SDK's own version.
pub fn target_sdk_version(sdk: &SdkInfo, triple: &Triple) -> VersionTuple {
    if !is_mac_catalyst(triple) {
        return sdk.version;
    }

    remap_version(&sdk.version_map.macos_to_catalyst, sdk.version).unwrap_or_else(|| {
        warn!(
            "SDK version {} has no Mac Catalyst equivalent, recording 0.0.0 for {triple}",
            sdk.version
        );
        VersionTuple::with_subminor(0, 0, 0)
    })
}

/// The macOS version that a Mac Catalyst (iOS) version corresponds to, per
/// the SDK's reverse table
pub fn catalyst_to_macos_version(sdk: &SdkInfo, version: VersionTuple) -> Option<VersionTuple> {
    remap_version(&sdk.version_map.catalyst_to_macos, version)
}
