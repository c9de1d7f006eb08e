//! Everything we know about a triple, gathered into one serializable report.

use platform_triple_schema::{PlatformName, PlatformReport, SdkInfo, Triple, ZipperingReport};

use crate::darwin::darwin_platform_kind;
use crate::environment::{
    infers_simulator_environment, is_mac_catalyst, is_simulator_suffixed,
    triples_valid_for_zippering,
};
use crate::errors::Result;
use crate::module_triple::{normalized_module_triple, unversioned_triple};
use crate::names::{major_architecture_name, platform_name_for_triple};
use crate::remap::target_sdk_version;
use crate::runtime::{requires_runtime_rpath, runtime_compatibility_version};

/// Classify `triple`
///
/// The SDK version is only computed if `sdk` is given, and the zippering
/// check only if `variant` is. Errors are the same ones the individual
/// classifiers return: an OS we don't recognize, or a Windows triple with an
/// environment we can't pick a toolchain for.
pub fn platform_report(
    triple: &Triple,
    sdk: Option<&SdkInfo>,
    variant: Option<&Triple>,
) -> Result<PlatformReport> {
    let darwin_platform = if triple.is_darwin() {
        Some(darwin_platform_kind(triple)?)
    } else {
        None
    };
    let platform_name = match platform_name_for_triple(triple)? {
        "" => None,
        name => Some(PlatformName::from(name)),
    };
    let infers_simulator = infers_simulator_environment(triple);

    Ok(PlatformReport {
        target: triple.to_target_triple(),
        darwin_platform,
        platform_name,
        major_architecture: major_architecture_name(triple).to_owned(),
        module_triple: normalized_module_triple(triple).to_target_triple(),
        unversioned_triple: unversioned_triple(triple).to_target_triple(),
        simulator: is_simulator_suffixed(triple) || infers_simulator,
        mac_catalyst: is_mac_catalyst(triple),
        infers_simulator,
        requires_runtime_rpath: requires_runtime_rpath(triple),
        runtime_compatibility_version: runtime_compatibility_version(triple),
        target_sdk_version: sdk.map(|sdk| target_sdk_version(sdk, triple)),
        zippering: variant.map(|variant| ZipperingReport {
            variant: variant.to_target_triple(),
            compatible: triples_valid_for_zippering(triple, variant),
        }),
    })
}
