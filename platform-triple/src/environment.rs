//! Yes/no questions about a triple's environment (simulator, Mac Catalyst)
//! and whether two triples can be zippered together.

use platform_triple_schema::{Environment, OperatingSystem, Triple};

/// The environment is spelled `simulator`
pub fn is_simulator_suffixed(triple: &Triple) -> bool {
    triple.environment() == Environment::Simulator
}

/// An iOS simulator triple (never a Mac Catalyst one)
pub fn is_ios_simulator(triple: &Triple) -> bool {
    triple.operating_system() == OperatingSystem::Ios
        && !is_mac_catalyst(triple)
        && is_simulator_suffixed(triple)
}

/// A tvOS simulator triple
pub fn is_tvos_simulator(triple: &Triple) -> bool {
    triple.operating_system() == OperatingSystem::TvOS && is_simulator_suffixed(triple)
}

/// A watchOS simulator triple
pub fn is_watchos_simulator(triple: &Triple) -> bool {
    triple.operating_system() == OperatingSystem::WatchOS && is_simulator_suffixed(triple)
}

/// An iOS triple with the `macabi` environment
pub fn is_mac_catalyst(triple: &Triple) -> bool {
    triple.operating_system() == OperatingSystem::Ios
        && triple.environment() == Environment::MacAbi
}

/// Whether an Apple mobile triple with no environment should be read as a
/// simulator triple
///
/// Older triples left off `-simulator` when targeting a simulator on an
/// Intel Mac, since no x86 device ever existed.
pub fn infers_simulator_environment(triple: &Triple) -> bool {
    match triple.operating_system() {
        OperatingSystem::Ios | OperatingSystem::TvOS | OperatingSystem::WatchOS => {
            !triple.has_environment()
                && triple.architecture().is_x86()
                && !is_mac_catalyst(triple)
        }
        _ => false,
    }
}

/// Whether `target` and `target_variant` can be combined into a single
/// "zippered" binary that runs as both macOS and Mac Catalyst code
///
/// Either order is accepted: a macOS library zippered with a Catalyst variant,
/// or a Catalyst library zippered with a macOS variant.
pub fn triples_valid_for_zippering(target: &Triple, target_variant: &Triple) -> bool {
    if target.arch_name() != target_variant.arch_name()
        || target.architecture() != target_variant.architecture()
        || target.sub_architecture() != target_variant.sub_architecture()
        || target.vendor() != target_variant.vendor()
    {
        return false;
    }

    (target.is_macos() && is_mac_catalyst(target_variant))
        || (target_variant.is_macos() && is_mac_catalyst(target))
}
