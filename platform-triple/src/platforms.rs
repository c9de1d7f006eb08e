//! Well-known target triples

// Apple triples
/// Intel macOS, spelled by its marketing version (10.15 Catalina)
pub const TARGET_X64_MACOS: &str = "x86_64-apple-macosx10.15";
/// Intel macOS, spelled by its kernel version (darwin19 is 10.15)
pub const TARGET_X64_DARWIN: &str = "x86_64-apple-darwin19";
/// Apple Silicon macOS (11.0+, Big Sur+)
pub const TARGET_ARM64_MACOS: &str = "arm64-apple-macos11";
/// arm64e macOS (pointer authentication)
pub const TARGET_ARM64E_MACOS: &str = "arm64e-apple-macos11";
/// 64-bit iOS device
pub const TARGET_ARM64_IOS: &str = "arm64-apple-ios14.0";
/// 32-bit iOS device (A6 and later)
pub const TARGET_ARMV7S_IOS: &str = "armv7s-apple-ios10.0";
/// iOS simulator on Apple Silicon
pub const TARGET_ARM64_IOS_SIM: &str = "arm64-apple-ios14.0-simulator";
/// iOS simulator on Intel
pub const TARGET_X64_IOS_SIM: &str = "x86_64-apple-ios13.0-simulator";
/// Intel Mac Catalyst
pub const TARGET_X64_MAC_CATALYST: &str = "x86_64-apple-ios13.1-macabi";
/// Apple Silicon Mac Catalyst
pub const TARGET_ARM64_MAC_CATALYST: &str = "arm64-apple-ios14.0-macabi";
/// 64-bit tvOS device
pub const TARGET_ARM64_TVOS: &str = "arm64-apple-tvos14.0";
/// tvOS simulator on Intel
pub const TARGET_X64_TVOS_SIM: &str = "x86_64-apple-tvos13.0-simulator";
/// 32-bit watchOS device
pub const TARGET_ARMV7K_WATCHOS: &str = "armv7k-apple-watchos6.0";
/// 64-bit watchOS device with 32-bit pointers
pub const TARGET_ARM64_32_WATCHOS: &str = "arm64_32-apple-watchos6.2";
/// watchOS simulator on Intel
pub const TARGET_X86_WATCHOS_SIM: &str = "i386-apple-watchos6.0-simulator";

/// List of all recognized Apple triples
pub const KNOWN_DARWIN_TRIPLES: &[&str] = &[
    TARGET_X64_MACOS,
    TARGET_X64_DARWIN,
    TARGET_ARM64_MACOS,
    TARGET_ARM64E_MACOS,
    TARGET_ARM64_IOS,
    TARGET_ARMV7S_IOS,
    TARGET_ARM64_IOS_SIM,
    TARGET_X64_IOS_SIM,
    TARGET_X64_MAC_CATALYST,
    TARGET_ARM64_MAC_CATALYST,
    TARGET_ARM64_TVOS,
    TARGET_X64_TVOS_SIM,
    TARGET_ARMV7K_WATCHOS,
    TARGET_ARM64_32_WATCHOS,
    TARGET_X86_WATCHOS_SIM,
];

/// 64-bit Linux (glibc)
pub const TARGET_X64_LINUX_GNU: &str = "x86_64-unknown-linux-gnu";
/// ARM64 Linux (glibc)
pub const TARGET_ARM64_LINUX_GNU: &str = "aarch64-unknown-linux-gnu";
/// ARMv7-A Linux, hardfloat
pub const TARGET_ARMV7_LINUX_GNU: &str = "armv7-unknown-linux-gnueabihf";
/// ARMv6 Linux, hardfloat (Raspberry Pi 1 and Zero)
pub const TARGET_ARMV6_LINUX_GNU: &str = "armv6-unknown-linux-gnueabihf";
/// 64-bit Linux with MUSL
pub const TARGET_X64_LINUX_MUSL: &str = "x86_64-unknown-linux-musl";
/// ARM64 Android (API level 21+)
pub const TARGET_ARM64_ANDROID: &str = "aarch64-unknown-linux-android21";
/// ARMv7 Android (API level 16+)
pub const TARGET_ARMV7_ANDROID: &str = "armv7-none-linux-androideabi16";
/// 64-bit Windows MSVC
pub const TARGET_X64_WINDOWS: &str = "x86_64-unknown-windows-msvc";
/// 64-bit MinGW
pub const TARGET_X64_MINGW: &str = "x86_64-unknown-windows-gnu";
/// 64-bit Cygwin
pub const TARGET_X64_CYGWIN: &str = "x86_64-unknown-windows-cygnus";
/// 64-bit FreeBSD
pub const TARGET_X64_FREEBSD: &str = "x86_64-unknown-freebsd";
/// 64-bit OpenBSD
pub const TARGET_X64_OPENBSD: &str = "x86_64-unknown-openbsd";
/// 64-bit Haiku
pub const TARGET_X64_HAIKU: &str = "x86_64-unknown-haiku";
/// WebAssembly System Interface
pub const TARGET_WASM32_WASI: &str = "wasm32-unknown-wasi";
/// PlayStation 4
pub const TARGET_X64_PS4: &str = "x86_64-scei-ps4";
/// 64-bit NetBSD (known, but no platform name)
pub const TARGET_X64_NETBSD: &str = "x86_64-unknown-netbsd";
/// 64-bit Solaris (known, but no platform name)
pub const TARGET_X64_SOLARIS: &str = "x86_64-pc-solaris";

/// List of all recognized non-Apple triples
pub const KNOWN_OTHER_TRIPLES: &[&str] = &[
    TARGET_X64_LINUX_GNU,
    TARGET_ARM64_LINUX_GNU,
    TARGET_ARMV7_LINUX_GNU,
    TARGET_ARMV6_LINUX_GNU,
    TARGET_X64_LINUX_MUSL,
    TARGET_ARM64_ANDROID,
    TARGET_ARMV7_ANDROID,
    TARGET_X64_WINDOWS,
    TARGET_X64_MINGW,
    TARGET_X64_CYGWIN,
    TARGET_X64_FREEBSD,
    TARGET_X64_OPENBSD,
    TARGET_X64_HAIKU,
    TARGET_WASM32_WASI,
    TARGET_X64_PS4,
    TARGET_X64_NETBSD,
    TARGET_X64_SOLARIS,
];

/// List of all recognized triples
pub const KNOWN_TRIPLES: &[&[&str]] = &[KNOWN_DARWIN_TRIPLES, KNOWN_OTHER_TRIPLES];

/// Translates a known triple into a human-readable display name
pub fn triple_to_display_name(name: &str) -> Option<&str> {
    match name.trim() {
        TARGET_X64_MACOS => Some("Intel macOS"),
        TARGET_X64_DARWIN => Some("Intel macOS (darwin)"),
        TARGET_ARM64_MACOS => Some("Apple Silicon macOS"),
        TARGET_ARM64E_MACOS => Some("arm64e macOS"),
        TARGET_ARM64_IOS => Some("iOS"),
        TARGET_ARMV7S_IOS => Some("ARMv7s iOS"),
        TARGET_ARM64_IOS_SIM => Some("ARM64 iOS Simulator"),
        TARGET_X64_IOS_SIM => Some("x64 iOS Simulator"),
        TARGET_X64_MAC_CATALYST => Some("Intel Mac Catalyst"),
        TARGET_ARM64_MAC_CATALYST => Some("Apple Silicon Mac Catalyst"),
        TARGET_ARM64_TVOS => Some("tvOS"),
        TARGET_X64_TVOS_SIM => Some("x64 tvOS Simulator"),
        TARGET_ARMV7K_WATCHOS => Some("ARMv7k watchOS"),
        TARGET_ARM64_32_WATCHOS => Some("ARM64_32 watchOS"),
        TARGET_X86_WATCHOS_SIM => Some("x86 watchOS Simulator"),

        TARGET_X64_LINUX_GNU => Some("x64 Linux"),
        TARGET_ARM64_LINUX_GNU => Some("ARM64 Linux"),
        TARGET_ARMV7_LINUX_GNU => Some("ARMv7 Linux"),
        TARGET_ARMV6_LINUX_GNU => Some("ARMv6 Linux (Hardfloat)"),
        TARGET_X64_LINUX_MUSL => Some("x64 MUSL Linux"),
        TARGET_ARM64_ANDROID => Some("Android"),
        TARGET_ARMV7_ANDROID => Some("ARMv7 Android"),
        TARGET_X64_WINDOWS => Some("x64 Windows"),
        TARGET_X64_MINGW => Some("x64 MinGW"),
        TARGET_X64_CYGWIN => Some("x64 Cygwin"),
        TARGET_X64_FREEBSD => Some("x64 FreeBSD"),
        TARGET_X64_OPENBSD => Some("x64 OpenBSD"),
        TARGET_X64_HAIKU => Some("x64 Haiku"),
        TARGET_WASM32_WASI => Some("WASI"),
        TARGET_X64_PS4 => Some("PS4"),
        TARGET_X64_NETBSD => Some("x64 NetBSD"),
        TARGET_X64_SOLARIS => Some("x64 Solaris"),

        _ => None,
    }
}
