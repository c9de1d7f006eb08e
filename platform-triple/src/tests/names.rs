use std::collections::BTreeSet;

use super::{known_darwin_triples, triple};
use crate::darwin::darwin_platform_kind;
use crate::errors::PlatformError;
use crate::names::*;
use crate::platforms::KNOWN_TRIPLES;
use platform_triple_schema::DarwinPlatformKind;

#[test]
fn test_platform_names_are_distinct() {
    let names = DarwinPlatformKind::ALL
        .iter()
        .map(|&kind| platform_name(kind))
        .collect::<BTreeSet<_>>();
    assert_eq!(names.len(), DarwinPlatformKind::ALL.len());
    assert_eq!(platform_name(DarwinPlatformKind::MacOS), "macosx");
    assert_eq!(
        platform_name(DarwinPlatformKind::IPhoneOSSimulator),
        "iphonesimulator"
    );
    assert_eq!(platform_name(DarwinPlatformKind::TvOS), "appletvos");
    assert_eq!(
        platform_name(DarwinPlatformKind::WatchOSSimulator),
        "watchsimulator"
    );
}

#[test]
fn test_darwin_platform_name_matches_kind() {
    for t in known_darwin_triples() {
        let kind = darwin_platform_kind(&t).unwrap();
        assert_eq!(
            platform_name_for_triple(&t).unwrap(),
            platform_name(kind),
            "{t}"
        );
    }
}

#[test]
fn test_other_platform_names() {
    let cases = [
        ("x86_64-unknown-linux-gnu", "linux"),
        ("aarch64-unknown-linux-android21", "android"),
        ("x86_64-unknown-freebsd", "freebsd"),
        ("x86_64-unknown-openbsd", "openbsd"),
        ("x86_64-unknown-haiku", "haiku"),
        ("wasm32-unknown-wasi", "wasi"),
        ("x86_64-scei-ps4", "ps4"),
        ("x86_64-unknown-windows-msvc", "windows"),
        ("x86_64-unknown-windows-itanium", "windows"),
        ("x86_64-unknown-windows-gnu", "mingw"),
        ("x86_64-unknown-windows-cygnus", "cygwin"),
    ];
    for (input, expected) in cases {
        assert_eq!(platform_name_for_triple(&triple(input)).unwrap(), expected, "{input}");
    }
}

#[test]
fn test_known_but_platformless() {
    for input in [
        "x86_64-unknown-netbsd",
        "x86_64-pc-solaris",
        "x86_64-unknown-dragonfly",
        "aarch64-unknown-fuchsia",
        "x86_64-unknown-hurd-gnu",
        "nvptx64-nvidia-cuda",
        "wasm32-unknown-emscripten",
    ] {
        assert_eq!(platform_name_for_triple(&triple(input)).unwrap(), "", "{input}");
    }
}

#[test]
fn test_unknown_os_is_an_error() {
    let err = platform_name_for_triple(&triple("x86_64-unknown-potatos")).unwrap_err();
    assert!(
        matches!(&err, PlatformError::UnknownOperatingSystem { os_name, .. } if os_name == "potatos"),
        "{err:?}"
    );
}

#[test]
fn test_unsupported_windows_environment_is_an_error() {
    for input in ["x86_64-pc-windows", "x86_64-pc-windows-musl", "x86_64-pc-windows-unknown"] {
        let err = platform_name_for_triple(&triple(input)).unwrap_err();
        assert!(
            matches!(err, PlatformError::UnsupportedWindowsEnvironment { .. }),
            "{input}: {err:?}"
        );
    }
}

#[test]
fn test_every_known_triple_has_an_answer() {
    for input in KNOWN_TRIPLES.iter().flat_map(|triples| triples.iter()) {
        platform_name_for_triple(&triple(input)).unwrap();
    }
}

#[test]
fn test_major_architecture_name() {
    let cases = [
        ("armv7-unknown-linux-gnueabihf", "armv7"),
        ("armv7l-unknown-linux-gnueabihf", "armv7"),
        ("armv7a-unknown-linux-gnueabi", "armv7"),
        ("armv7-none-linux-androideabi16", "armv7"),
        ("armv6-unknown-linux-gnueabihf", "armv6"),
        ("armv6l-unknown-linux-gnueabihf", "armv6"),
        // other v7 and v6 profiles keep their own names
        ("armv7ve-unknown-linux-gnueabihf", "armv7ve"),
        ("armv6kz-unknown-linux-gnueabihf", "armv6kz"),
        // only Linux collapses ARM variants
        ("armv7l-unknown-freebsd", "armv7l"),
        ("armv7s-apple-ios10.0", "armv7s"),
        ("arm-unknown-linux-gnueabi", "arm"),
        ("x86_64-unknown-linux-gnu", "x86_64"),
        ("arm64-apple-ios14.0", "arm64"),
    ];
    for (input, expected) in cases {
        assert_eq!(major_architecture_name(&triple(input)), expected, "{input}");
    }
}
