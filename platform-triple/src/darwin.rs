//! Which Apple platform a Darwin triple is for.

use platform_triple_schema::{DarwinPlatformKind, OperatingSystem, Triple};

use crate::environment::{is_ios_simulator, is_tvos_simulator, is_watchos_simulator};
use crate::errors::{PlatformError, Result};

/// Classify a Darwin triple as one of the seven Apple platform kinds
///
/// Mac Catalyst triples are `IPhoneOS`: they build against iOS APIs.
/// Asking this of a non-Darwin triple is an error.
pub fn darwin_platform_kind(triple: &Triple) -> Result<DarwinPlatformKind> {
    let kind = match triple.operating_system() {
        OperatingSystem::Darwin | OperatingSystem::MacOS => DarwinPlatformKind::MacOS,
        OperatingSystem::Ios if is_ios_simulator(triple) => DarwinPlatformKind::IPhoneOSSimulator,
        OperatingSystem::Ios => DarwinPlatformKind::IPhoneOS,
        OperatingSystem::TvOS if is_tvos_simulator(triple) => DarwinPlatformKind::TvOSSimulator,
        OperatingSystem::TvOS => DarwinPlatformKind::TvOS,
        OperatingSystem::WatchOS if is_watchos_simulator(triple) => {
            DarwinPlatformKind::WatchOSSimulator
        }
        OperatingSystem::WatchOS => DarwinPlatformKind::WatchOS,
        OperatingSystem::Linux
        | OperatingSystem::FreeBsd
        | OperatingSystem::OpenBsd
        | OperatingSystem::Windows
        | OperatingSystem::Ps4
        | OperatingSystem::Haiku
        | OperatingSystem::Wasi
        | OperatingSystem::Ananas
        | OperatingSystem::CloudAbi
        | OperatingSystem::DragonFly
        | OperatingSystem::Emscripten
        | OperatingSystem::Fuchsia
        | OperatingSystem::KFreeBsd
        | OperatingSystem::Lv2
        | OperatingSystem::NetBsd
        | OperatingSystem::Solaris
        | OperatingSystem::Minix
        | OperatingSystem::Rtems
        | OperatingSystem::NaCl
        | OperatingSystem::Cnk
        | OperatingSystem::Aix
        | OperatingSystem::Cuda
        | OperatingSystem::Nvcl
        | OperatingSystem::AmdHsa
        | OperatingSystem::ElfIamcu
        | OperatingSystem::Mesa3D
        | OperatingSystem::Contiki
        | OperatingSystem::AmdPal
        | OperatingSystem::HermitCore
        | OperatingSystem::Hurd
        | OperatingSystem::Unknown => {
            return Err(PlatformError::NotDarwin {
                triple: triple.to_target_triple(),
            })
        }
    };
    Ok(kind)
}
