//! The [`Triple`][] type: a target's `arch-vendor-os[-environment]` identity.
//!
//! A Triple remembers both the component strings it was built from and what
//! each component was classified as. Classification code matches on the
//! enums; artifact naming code works with the strings.

use std::fmt;
use std::str::FromStr;

use crate::version::VersionTuple;
use crate::TargetTriple;

/// An error from splitting a string into triple components
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseTripleError {
    /// Not arch-vendor-os or arch-vendor-os-environment
    #[error("'{triple}' should have 3 or 4 '-'-separated components, found {count}")]
    WrongComponentCount {
        /// The input
        triple: String,
        /// How many components it had
        count: usize,
    },
    /// The architecture component was empty
    #[error("'{triple}' has an empty architecture")]
    EmptyArchitecture {
        /// The input
        triple: String,
    },
}

/// The architecture family of a triple
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(non_camel_case_types)]
pub enum Architecture {
    /// 32-bit x86 (i386 through i986)
    X86,
    /// x86_64 / amd64
    X86_64,
    /// 64-bit ARM (arm64, aarch64, arm64e)
    Aarch64,
    /// 64-bit ARM with 32-bit pointers (arm64_32)
    Aarch64_32,
    /// 32-bit ARM
    Arm,
    /// 32-bit ARM in thumb mode
    Thumb,
    /// 32-bit PowerPC
    PowerPc,
    /// 64-bit big-endian PowerPC
    PowerPc64,
    /// 64-bit little-endian PowerPC
    PowerPc64Le,
    /// 32-bit RISC-V
    Riscv32,
    /// 64-bit RISC-V
    Riscv64,
    /// IBM Z
    S390x,
    /// 32-bit SPARC
    Sparc,
    /// 64-bit SPARC (sparcv9)
    Sparc64,
    /// 32-bit MIPS, either endianness
    Mips,
    /// 64-bit MIPS, either endianness
    Mips64,
    /// 32-bit WebAssembly
    Wasm32,
    /// 64-bit WebAssembly
    Wasm64,
    /// Anything else
    Unknown,
}

impl Architecture {
    /// Classify an architecture name
    pub fn from_name(name: &str) -> Self {
        match name {
            "i386" | "i486" | "i586" | "i686" | "i786" | "i886" | "i986" | "x86" => Self::X86,
            "x86_64" | "amd64" | "x86_64h" => Self::X86_64,
            "arm64" | "aarch64" | "arm64e" => Self::Aarch64,
            "arm64_32" | "aarch64_32" => Self::Aarch64_32,
            "powerpc" | "ppc" => Self::PowerPc,
            "powerpc64" | "ppc64" => Self::PowerPc64,
            "powerpc64le" | "ppc64le" => Self::PowerPc64Le,
            "riscv32" => Self::Riscv32,
            "riscv64" | "riscv64gc" => Self::Riscv64,
            "s390x" | "systemz" => Self::S390x,
            "sparc" => Self::Sparc,
            "sparc64" | "sparcv9" => Self::Sparc64,
            "mips" | "mipsel" => Self::Mips,
            "mips64" | "mips64el" => Self::Mips64,
            "wasm32" => Self::Wasm32,
            "wasm64" => Self::Wasm64,
            "xscale" => Self::Arm,
            _ if name.starts_with("thumb") => Self::Thumb,
            _ if name.starts_with("arm") => Self::Arm,
            _ => Self::Unknown,
        }
    }

    /// 32- or 64-bit x86
    pub fn is_x86(self) -> bool {
        matches!(self, Self::X86 | Self::X86_64)
    }

    /// Any 64-bit ARM
    pub fn is_aarch64(self) -> bool {
        matches!(self, Self::Aarch64 | Self::Aarch64_32)
    }
}

/// A refinement of the architecture family
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SubArchitecture {
    /// ARMv5 (armv5, armv5t)
    ArmV5,
    /// ARMv5TE
    ArmV5TE,
    /// ARMv6 (armv6, armv6j, armv6z)
    ArmV6,
    /// ARMv6-M (Cortex-M0/M1)
    ArmV6M,
    /// ARMv6K
    ArmV6K,
    /// ARMv6KZ (armv6kz, armv6zk)
    ArmV6KZ,
    /// ARMv6T2
    ArmV6T2,
    /// ARMv7-A (armv7, armv7a)
    ArmV7,
    /// ARMv7 with the virtualization extensions
    ArmV7VE,
    /// Apple's ARMv7s (A6 and later)
    ArmV7S,
    /// Apple's ARMv7k (Apple Watch)
    ArmV7K,
    /// ARMv7-M (Cortex-M3)
    ArmV7M,
    /// ARMv7E-M (Cortex-M4/M7)
    ArmV7EM,
    /// 32-bit ARMv8-A
    ArmV8,
    /// arm64 with pointer authentication
    Arm64E,
}

impl SubArchitecture {
    /// Find the refinement encoded in an architecture name, if any
    pub fn from_arch_name(name: &str) -> Option<Self> {
        if name == "arm64e" {
            return Some(Self::Arm64E);
        }
        let version = name
            .strip_prefix("arm")
            .or_else(|| name.strip_prefix("thumb"))?;
        // arm64 and arm64_32 aren't 32-bit ARM refinements
        if version.starts_with("64") {
            return None;
        }
        let version = version
            .strip_suffix("eb")
            .or_else(|| version.strip_suffix("be"))
            .unwrap_or(version);
        // armv7l, armv6l: the trailing 'l' is endianness, not a variant
        let version = version.strip_suffix('l').unwrap_or(version);
        let sub_arch = match version {
            "v5" | "v5t" => Self::ArmV5,
            "v5te" => Self::ArmV5TE,
            "v6" | "v6j" | "v6z" => Self::ArmV6,
            "v6k" => Self::ArmV6K,
            "v6kz" | "v6zk" => Self::ArmV6KZ,
            "v6m" | "v6-m" | "v6sm" | "v6s-m" => Self::ArmV6M,
            "v6t2" => Self::ArmV6T2,
            "v7" | "v7a" | "v7-a" => Self::ArmV7,
            "v7ve" => Self::ArmV7VE,
            "v7s" => Self::ArmV7S,
            "v7k" => Self::ArmV7K,
            "v7m" | "v7-m" => Self::ArmV7M,
            "v7em" | "v7e-m" => Self::ArmV7EM,
            "v8" | "v8a" | "v8-a" => Self::ArmV8,
            _ => return None,
        };
        Some(sub_arch)
    }
}

/// Who made the target
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Vendor {
    /// apple
    Apple,
    /// pc
    Pc,
    /// scei (Sony)
    Scei,
    /// suse
    Suse,
    /// ibm
    Ibm,
    /// nvidia
    Nvidia,
    /// amd
    Amd,
    /// mesa
    Mesa,
    /// "unknown", empty, or anything unrecognized
    Unknown,
}

impl Vendor {
    /// Classify a vendor name
    pub fn from_name(name: &str) -> Self {
        match name {
            "apple" => Self::Apple,
            "pc" => Self::Pc,
            "scei" => Self::Scei,
            "suse" => Self::Suse,
            "ibm" => Self::Ibm,
            "nvidia" => Self::Nvidia,
            "amd" => Self::Amd,
            "mesa" => Self::Mesa,
            _ => Self::Unknown,
        }
    }
}

/// The operating system family of a triple
///
/// Every family has its own variant, including the Apple ones that share a
/// kernel: code that dispatches on this must say what it does for each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperatingSystem {
    /// macOS named by its kernel (`darwin19`)
    Darwin,
    /// macOS (`macos`, `macosx10.15`)
    MacOS,
    /// iOS, including Mac Catalyst
    Ios,
    /// tvOS
    TvOS,
    /// watchOS
    WatchOS,
    /// Linux, including Android
    Linux,
    /// FreeBSD
    FreeBsd,
    /// OpenBSD
    OpenBsd,
    /// `win32` / `windows`
    Windows,
    /// PlayStation 4
    Ps4,
    /// Haiku
    Haiku,
    /// WebAssembly System Interface
    Wasi,
    /// Ananas
    Ananas,
    /// CloudABI
    CloudAbi,
    /// DragonFly BSD
    DragonFly,
    /// Emscripten
    Emscripten,
    /// Fuchsia
    Fuchsia,
    /// FreeBSD kernel with a GNU userland
    KFreeBsd,
    /// PlayStation 3
    Lv2,
    /// NetBSD
    NetBsd,
    /// Solaris and illumos
    Solaris,
    /// MINIX
    Minix,
    /// RTEMS
    Rtems,
    /// Native Client
    NaCl,
    /// Blue Gene compute node kernel
    Cnk,
    /// AIX
    Aix,
    /// NVIDIA CUDA
    Cuda,
    /// NVIDIA OpenCL
    Nvcl,
    /// AMD HSA runtime
    AmdHsa,
    /// Intel MCU ELF
    ElfIamcu,
    /// Mesa 3D
    Mesa3D,
    /// Contiki
    Contiki,
    /// AMD PAL runtime
    AmdPal,
    /// HermitCore unikernel
    HermitCore,
    /// GNU Hurd
    Hurd,
    /// Not a name we recognize
    Unknown,
}

/// OS name prefixes, checked in order. The OS version follows the prefix.
const OS_PREFIXES: &[(&str, OperatingSystem)] = &[
    ("darwin", OperatingSystem::Darwin),
    ("dragonfly", OperatingSystem::DragonFly),
    ("freebsd", OperatingSystem::FreeBsd),
    ("fuchsia", OperatingSystem::Fuchsia),
    ("ios", OperatingSystem::Ios),
    ("kfreebsd", OperatingSystem::KFreeBsd),
    ("linux", OperatingSystem::Linux),
    ("lv2", OperatingSystem::Lv2),
    ("macosx", OperatingSystem::MacOS),
    ("macos", OperatingSystem::MacOS),
    ("netbsd", OperatingSystem::NetBsd),
    ("openbsd", OperatingSystem::OpenBsd),
    ("solaris", OperatingSystem::Solaris),
    ("win32", OperatingSystem::Windows),
    ("windows", OperatingSystem::Windows),
    ("haiku", OperatingSystem::Haiku),
    ("minix", OperatingSystem::Minix),
    ("rtems", OperatingSystem::Rtems),
    ("nacl", OperatingSystem::NaCl),
    ("cnk", OperatingSystem::Cnk),
    ("aix", OperatingSystem::Aix),
    ("cuda", OperatingSystem::Cuda),
    ("nvcl", OperatingSystem::Nvcl),
    ("amdhsa", OperatingSystem::AmdHsa),
    ("ps4", OperatingSystem::Ps4),
    ("elfiamcu", OperatingSystem::ElfIamcu),
    ("tvos", OperatingSystem::TvOS),
    ("watchos", OperatingSystem::WatchOS),
    ("mesa3d", OperatingSystem::Mesa3D),
    ("contiki", OperatingSystem::Contiki),
    ("amdpal", OperatingSystem::AmdPal),
    ("hermit", OperatingSystem::HermitCore),
    ("hurd", OperatingSystem::Hurd),
    ("wasi", OperatingSystem::Wasi),
    ("emscripten", OperatingSystem::Emscripten),
    ("ananas", OperatingSystem::Ananas),
    ("cloudabi", OperatingSystem::CloudAbi),
];

impl OperatingSystem {
    /// Classify an OS name, returning the family and whatever follows the
    /// family's prefix (usually the version digits)
    pub fn from_name(name: &str) -> (Self, &str) {
        OS_PREFIXES
            .iter()
            .find_map(|&(prefix, os)| name.strip_prefix(prefix).map(|rest| (os, rest)))
            .unwrap_or((Self::Unknown, name))
    }

    /// macOS, iOS, tvOS, or watchOS
    pub fn is_darwin(self) -> bool {
        matches!(
            self,
            Self::Darwin | Self::MacOS | Self::Ios | Self::TvOS | Self::WatchOS
        )
    }

    /// macOS, whether spelled as `macos` or `darwin`
    pub fn is_macos(self) -> bool {
        matches!(self, Self::Darwin | Self::MacOS)
    }
}

/// The fourth triple component
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Environment {
    /// No environment component at all
    None,
    /// "unknown" or a name we don't recognize
    Unknown,
    /// An Apple simulator
    Simulator,
    /// Mac Catalyst
    MacAbi,
    /// glibc
    Gnu,
    /// glibc, soft-float ARM EABI
    GnuEabi,
    /// glibc, hard-float ARM EABI
    GnuEabiHf,
    /// glibc, x32 ABI
    GnuX32,
    /// musl
    Musl,
    /// musl, soft-float ARM EABI
    MuslEabi,
    /// musl, hard-float ARM EABI
    MuslEabiHf,
    /// bare-metal ARM EABI
    Eabi,
    /// bare-metal hard-float ARM EABI
    EabiHf,
    /// Microsoft Visual C++ (also spelled by its ABI)
    Msvc,
    /// Itanium C++ ABI on Windows
    Itanium,
    /// Cygwin
    Cygnus,
    /// .NET Core CLR
    CoreClr,
    /// Android, optionally with its minimum API level (`android21`)
    Android {
        /// The API level digits, if any
        api_level: Option<u32>,
    },
}

impl Environment {
    /// Classify an environment name
    pub fn from_name(name: &str) -> Self {
        const PREFIXES: &[(&str, Environment)] = &[
            ("eabihf", Environment::EabiHf),
            ("eabi", Environment::Eabi),
            ("gnueabihf", Environment::GnuEabiHf),
            ("gnueabi", Environment::GnuEabi),
            ("gnux32", Environment::GnuX32),
            ("gnu", Environment::Gnu),
            ("musleabihf", Environment::MuslEabiHf),
            ("musleabi", Environment::MuslEabi),
            ("musl", Environment::Musl),
            ("msvc", Environment::Msvc),
            ("itanium", Environment::Itanium),
            ("cygnus", Environment::Cygnus),
            ("coreclr", Environment::CoreClr),
            ("simulator", Environment::Simulator),
            ("macabi", Environment::MacAbi),
        ];

        if name.is_empty() {
            return Self::None;
        }
        if let Some(rest) = name.strip_prefix("android") {
            let digits = rest.trim_start_matches(|c: char| !c.is_ascii_digit());
            return Self::Android {
                api_level: digits.parse().ok(),
            };
        }
        PREFIXES
            .iter()
            .find(|(prefix, _)| name.starts_with(prefix))
            .map(|&(_, env)| env)
            .unwrap_or(Self::Unknown)
    }

    /// Any flavour of Android
    pub fn is_android(self) -> bool {
        matches!(self, Self::Android { .. })
    }

    /// The canonical spelling of this environment, without any version
    /// digits. `None` and `Unknown` have no spelling.
    pub fn canonical_name(self) -> Option<&'static str> {
        let name = match self {
            Self::None | Self::Unknown => return None,
            Self::Simulator => "simulator",
            Self::MacAbi => "macabi",
            Self::Gnu => "gnu",
            Self::GnuEabi => "gnueabi",
            Self::GnuEabiHf => "gnueabihf",
            Self::GnuX32 => "gnux32",
            Self::Musl => "musl",
            Self::MuslEabi => "musleabi",
            Self::MuslEabiHf => "musleabihf",
            Self::Eabi => "eabi",
            Self::EabiHf => "eabihf",
            Self::Msvc => "msvc",
            Self::Itanium => "itanium",
            Self::Cygnus => "cygnus",
            Self::CoreClr => "coreclr",
            Self::Android { .. } => "android",
        };
        Some(name)
    }
}

/// Reads the leading `major[.minor[.subminor]]` out of what follows an OS
/// name. No digits at all reads as `0`.
fn parse_os_version(rest: &str) -> VersionTuple {
    let mut components = rest
        .split('.')
        .map_while(|part| {
            let digits: &str = &part[..part
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(part.len())];
            digits.parse::<u32>().ok()
        })
        .take(3);
    match (components.next(), components.next(), components.next()) {
        (Some(major), Some(minor), Some(subminor)) => {
            VersionTuple::with_subminor(major, minor, subminor)
        }
        (Some(major), Some(minor), None) => VersionTuple::with_minor(major, minor),
        (Some(major), None, _) => VersionTuple::new(major),
        (None, _, _) => VersionTuple::new(0),
    }
}

/// A target triple, `arch-vendor-os[-environment]`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Triple {
    arch_name: String,
    architecture: Architecture,
    sub_architecture: Option<SubArchitecture>,
    vendor_name: String,
    vendor: Vendor,
    os_name: String,
    operating_system: OperatingSystem,
    os_version: VersionTuple,
    environment_name: Option<String>,
    environment: Environment,
}

impl Triple {
    /// Build a triple from its components, classifying each one
    pub fn new(arch: &str, vendor: &str, os: &str, environment: Option<&str>) -> Self {
        let (operating_system, version_suffix) = OperatingSystem::from_name(os);
        Self {
            arch_name: arch.to_owned(),
            architecture: Architecture::from_name(arch),
            sub_architecture: SubArchitecture::from_arch_name(arch),
            vendor_name: vendor.to_owned(),
            vendor: Vendor::from_name(vendor),
            os_name: os.to_owned(),
            operating_system,
            os_version: parse_os_version(version_suffix),
            environment_name: environment.map(ToOwned::to_owned),
            environment: environment.map_or(Environment::None, Environment::from_name),
        }
    }

    /// The architecture as written
    pub fn arch_name(&self) -> &str {
        &self.arch_name
    }

    /// The architecture family
    pub fn architecture(&self) -> Architecture {
        self.architecture
    }

    /// The architecture refinement, if any
    pub fn sub_architecture(&self) -> Option<SubArchitecture> {
        self.sub_architecture
    }

    /// The vendor as written
    pub fn vendor_name(&self) -> &str {
        &self.vendor_name
    }

    /// The vendor
    pub fn vendor(&self) -> Vendor {
        self.vendor
    }

    /// The OS as written, version and all
    pub fn os_name(&self) -> &str {
        &self.os_name
    }

    /// The OS family
    pub fn operating_system(&self) -> OperatingSystem {
        self.operating_system
    }

    /// The version embedded in the OS name, exactly as written (`0` if none)
    pub fn os_version(&self) -> VersionTuple {
        self.os_version
    }

    /// The environment as written, if there was a fourth component
    pub fn environment_name(&self) -> Option<&str> {
        self.environment_name.as_deref()
    }

    /// The environment
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Whether the triple spells out a (non-empty) environment component,
    /// even if that component is "unknown"
    pub fn has_environment(&self) -> bool {
        self.environment_name
            .as_deref()
            .map_or(false, |name| !name.is_empty())
    }

    /// macOS, iOS, tvOS, or watchOS
    pub fn is_darwin(&self) -> bool {
        self.operating_system.is_darwin()
    }

    /// macOS, whether spelled `macos`, `macosx` or `darwin`
    pub fn is_macos(&self) -> bool {
        self.operating_system.is_macos()
    }

    /// Linux with an Android environment
    pub fn is_android(&self) -> bool {
        self.operating_system == OperatingSystem::Linux && self.environment.is_android()
    }

    /// This triple as a strongly-typed string
    pub fn to_target_triple(&self) -> TargetTriple {
        TargetTriple::new(self.to_string())
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.arch_name, self.vendor_name, self.os_name)?;
        if let Some(environment) = &self.environment_name {
            write!(f, "-{environment}")?;
        }
        Ok(())
    }
}

impl FromStr for Triple {
    type Err = ParseTripleError;

    /// Positional split into arch-vendor-os[-environment]. This doesn't reorder
    /// or validate components: `aarch64-linux-android` is read as vendor
    /// "linux" and OS "android".
    fn from_str(triple: &str) -> Result<Self, Self::Err> {
        let parts = triple.split('-').collect::<Vec<_>>();
        match parts[..] {
            [arch, ..] if arch.is_empty() => Err(ParseTripleError::EmptyArchitecture {
                triple: triple.to_owned(),
            }),
            [arch, vendor, os] => Ok(Self::new(arch, vendor, os, None)),
            [arch, vendor, os, environment] => Ok(Self::new(arch, vendor, os, Some(environment))),
            _ => Err(ParseTripleError::WrongComponentCount {
                triple: triple.to_owned(),
                count: parts.len(),
            }),
        }
    }
}

impl TryFrom<&target_lexicon::Triple> for Triple {
    type Error = ParseTripleError;

    /// Read a Rust target triple. Rust spells the simulator environment `sim`.
    fn try_from(triple: &target_lexicon::Triple) -> Result<Self, Self::Error> {
        let arch = triple.architecture.to_string();
        if arch.is_empty() {
            return Err(ParseTripleError::EmptyArchitecture {
                triple: triple.to_string(),
            });
        }
        let environment = match &triple.environment {
            target_lexicon::Environment::Unknown => None,
            target_lexicon::Environment::Sim => Some("simulator".to_owned()),
            other => Some(other.to_string()),
        };
        Ok(Self::new(
            &arch,
            &triple.vendor.to_string(),
            &triple.operating_system.to_string(),
            environment.as_deref(),
        ))
    }
}
