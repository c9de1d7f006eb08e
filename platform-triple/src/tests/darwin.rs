use super::{known_darwin_triples, triple};
use crate::darwin::darwin_platform_kind;
use crate::environment::is_ios_simulator;
use crate::errors::PlatformError;
use platform_triple_schema::DarwinPlatformKind;

#[test]
fn test_darwin_platform_kinds() {
    let cases = [
        ("x86_64-apple-macosx10.15", DarwinPlatformKind::MacOS),
        ("x86_64-apple-darwin19", DarwinPlatformKind::MacOS),
        ("arm64-apple-macos11", DarwinPlatformKind::MacOS),
        ("arm64-apple-ios14.0", DarwinPlatformKind::IPhoneOS),
        ("arm64-apple-ios14.0-simulator", DarwinPlatformKind::IPhoneOSSimulator),
        ("x86_64-apple-ios13.0-simulator", DarwinPlatformKind::IPhoneOSSimulator),
        ("x86_64-apple-ios13.1-macabi", DarwinPlatformKind::IPhoneOS),
        ("arm64-apple-tvos14.0", DarwinPlatformKind::TvOS),
        ("x86_64-apple-tvos13.0-simulator", DarwinPlatformKind::TvOSSimulator),
        ("armv7k-apple-watchos6.0", DarwinPlatformKind::WatchOS),
        ("i386-apple-watchos6.0-simulator", DarwinPlatformKind::WatchOSSimulator),
    ];
    for (input, expected) in cases {
        assert_eq!(darwin_platform_kind(&triple(input)).unwrap(), expected, "{input}");
    }
}

#[test]
fn test_inferred_simulator_is_still_a_device_kind() {
    // the classifier only looks at what's spelled out
    assert_eq!(
        darwin_platform_kind(&triple("x86_64-apple-ios13.0")).unwrap(),
        DarwinPlatformKind::IPhoneOS
    );
}

#[test]
fn test_ios_simulator_iff_simulator_kind() {
    for t in known_darwin_triples() {
        let kind = darwin_platform_kind(&t).unwrap();
        assert_eq!(
            is_ios_simulator(&t),
            kind == DarwinPlatformKind::IPhoneOSSimulator,
            "{t}"
        );
        // deterministic
        assert_eq!(darwin_platform_kind(&t).unwrap(), kind);
    }
}

#[test]
fn test_non_darwin_is_an_error() {
    for input in [
        "x86_64-unknown-linux-gnu",
        "x86_64-pc-windows-msvc",
        "x86_64-unknown-potatos",
    ] {
        let err = darwin_platform_kind(&triple(input)).unwrap_err();
        assert!(
            matches!(&err, PlatformError::NotDarwin { triple } if triple == input),
            "{err:?}"
        );
    }
}
