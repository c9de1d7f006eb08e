//! Which runtime ABI a binary has to stay compatible with, and whether it
//! has to bring its own copy of the runtime.

use platform_triple_schema::{OperatingSystem, Triple, VersionTuple};

use crate::environment::{is_mac_catalyst, is_simulator_suffixed};

/// The macOS version a triple targets, with kernel-versioned `darwinN` names
/// translated to marketing versions and an unversioned macOS read as 10.4
fn macos_version(triple: &Triple) -> (u32, u32, u32) {
    let (major, minor, subminor) = triple.os_version().components();
    match triple.operating_system() {
        OperatingSystem::Darwin => match major {
            // darwin8 shipped as 10.4; nothing older is supported
            0..=8 => (10, 4, 0),
            9..=19 => (10, major - 4, 0),
            _ => (11 + (major - 20), 0, 0),
        },
        _ if major == 0 => (10, 4, 0),
        _ => (major, minor, subminor),
    }
}

/// The iOS or tvOS version a triple targets; an unversioned triple reads as
/// 5 (7 on 64-bit ARM, which nothing older ran on)
fn ios_version(triple: &Triple) -> (u32, u32, u32) {
    match triple.os_version().components() {
        (0, minor, subminor) if triple.architecture().is_aarch64() => (7, minor, subminor),
        (0, minor, subminor) => (5, minor, subminor),
        version => version,
    }
}

/// The watchOS version a triple targets; an unversioned triple reads as 2
fn watchos_version(triple: &Triple) -> (u32, u32, u32) {
    match triple.os_version().components() {
        (0, minor, subminor) => (2, minor, subminor),
        version => version,
    }
}

/// The oldest runtime ABI a binary for this triple has to work with
///
/// `None` means the OS version is new enough that there's no constraint
/// beyond "whatever the toolchain ships", or that the OS has no runtime in
/// the OS at all.
pub fn runtime_compatibility_version(triple: &Triple) -> Option<VersionTuple> {
    // arm64e only ever shipped with 5.3 and later
    if triple.arch_name() == "arm64e" {
        return Some(VersionTuple::with_minor(5, 3));
    }

    let is_aarch64 = triple.architecture().is_aarch64();
    let (major, minor) = match triple.operating_system() {
        OperatingSystem::Darwin | OperatingSystem::MacOS => match macos_version(triple) {
            (10, minor, _) if is_aarch64 && minor <= 16 => (5, 3),
            (10, minor, _) if minor <= 14 => (5, 0),
            (10, 15, subminor) if subminor <= 3 => (5, 1),
            (10, 15, _) => (5, 2),
            (11, _, _) => (5, 3),
            _ => return None,
        },
        OperatingSystem::Ios | OperatingSystem::TvOS => {
            let (major, minor, _) = ios_version(triple);
            // arm64 simulators and Mac Catalyst arrived with iOS 14 / runtime 5.3
            let needs_5_3 = is_simulator_suffixed(triple) || is_mac_catalyst(triple);
            match (major, minor) {
                (0..=14, _) if is_aarch64 && needs_5_3 => (5, 3),
                (0..=12, _) => (5, 0),
                (13, 0..=3) => (5, 1),
                (13, _) => (5, 2),
                _ => return None,
            }
        }
        OperatingSystem::WatchOS => match watchos_version(triple) {
            (0..=5, _, _) => (5, 0),
            (6, 0..=1, _) => (5, 1),
            (6, _, _) => (5, 2),
            _ => return None,
        },
        _ => return None,
    };
    Some(VersionTuple::with_minor(major, minor))
}

/// Whether binaries need an rpath to find the runtime, because the OS
/// version they target doesn't ship one
///
/// macOS binaries always use the runtime next to them, so never need one.
pub fn requires_runtime_rpath(triple: &Triple) -> bool {
    let os_version = triple.os_version();
    match triple.operating_system() {
        OperatingSystem::Ios | OperatingSystem::TvOS => os_version.is_older_than(12, 2),
        OperatingSystem::WatchOS => os_version.is_older_than(5, 2),
        _ => false,
    }
}
