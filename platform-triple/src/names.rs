//! Platform names (the directory names SDKs and runtime libraries live
//! under) and architecture names.

use platform_triple_schema::{
    DarwinPlatformKind, Environment, OperatingSystem, SubArchitecture, Triple,
};

use crate::darwin::darwin_platform_kind;
use crate::errors::{PlatformError, Result};

/// The platform name of an Apple platform kind
pub fn platform_name(kind: DarwinPlatformKind) -> &'static str {
    match kind {
        DarwinPlatformKind::MacOS => "macosx",
        DarwinPlatformKind::IPhoneOS => "iphoneos",
        DarwinPlatformKind::IPhoneOSSimulator => "iphonesimulator",
        DarwinPlatformKind::TvOS => "appletvos",
        DarwinPlatformKind::TvOSSimulator => "appletvsimulator",
        DarwinPlatformKind::WatchOS => "watchos",
        DarwinPlatformKind::WatchOSSimulator => "watchsimulator",
    }
}

/// The platform name of any triple
///
/// Returns `""` for operating systems we know about but have no toolchain
/// support for; callers should treat that as "unsupported platform". An OS we
/// don't recognize at all, or a Windows triple without a usable environment,
/// is an error.
pub fn platform_name_for_triple(triple: &Triple) -> Result<&'static str> {
    let name = match triple.operating_system() {
        OperatingSystem::Unknown => {
            return Err(PlatformError::UnknownOperatingSystem {
                triple: triple.to_target_triple(),
                os_name: triple.os_name().to_owned(),
            })
        }
        OperatingSystem::Ananas
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
        | OperatingSystem::Hurd => "",
        OperatingSystem::Darwin
        | OperatingSystem::MacOS
        | OperatingSystem::Ios
        | OperatingSystem::TvOS
        | OperatingSystem::WatchOS => platform_name(darwin_platform_kind(triple)?),
        OperatingSystem::Linux => {
            if triple.is_android() {
                "android"
            } else {
                "linux"
            }
        }
        OperatingSystem::FreeBsd => "freebsd",
        OperatingSystem::OpenBsd => "openbsd",
        OperatingSystem::Windows => windows_platform_name(triple)?,
        OperatingSystem::Ps4 => "ps4",
        OperatingSystem::Haiku => "haiku",
        OperatingSystem::Wasi => "wasi",
    };
    Ok(name)
}

fn windows_platform_name(triple: &Triple) -> Result<&'static str> {
    match triple.environment() {
        Environment::Cygnus => Ok("cygwin"),
        Environment::Gnu => Ok("mingw"),
        Environment::Msvc | Environment::Itanium => Ok("windows"),
        Environment::None
        | Environment::Unknown
        | Environment::Simulator
        | Environment::MacAbi
        | Environment::GnuEabi
        | Environment::GnuEabiHf
        | Environment::GnuX32
        | Environment::Musl
        | Environment::MuslEabi
        | Environment::MuslEabiHf
        | Environment::Eabi
        | Environment::EabiHf
        | Environment::CoreClr
        | Environment::Android { .. } => Err(PlatformError::UnsupportedWindowsEnvironment {
            triple: triple.to_target_triple(),
        }),
    }
}

/// The architecture name to use for per-architecture directories
///
/// On Linux, 32-bit ARM spellings like `armv7l` or `armv7a` all collapse to
/// `armv7` (and likewise for `armv6`). Everything else is the architecture as
/// written.
pub fn major_architecture_name(triple: &Triple) -> &str {
    if triple.operating_system() == OperatingSystem::Linux {
        match triple.sub_architecture() {
            Some(SubArchitecture::ArmV7) => return "armv7",
            Some(SubArchitecture::ArmV6) => return "armv6",
            _ => {}
        }
    }
    triple.arch_name()
}
