use super::{known_darwin_triples, triple};
use crate::module_triple::*;
use crate::platforms::KNOWN_TRIPLES;
use platform_triple_schema::Triple;

fn module_triple(s: &str) -> String {
    normalized_module_triple(&triple(s)).to_string()
}

#[test]
fn test_alias_tables() {
    assert_eq!(lookup_alias(ARCH_ALIASES, "amd64"), Some("x86_64"));
    assert_eq!(lookup_alias(ARCH_ALIASES, "aarch64"), Some("arm64"));
    assert_eq!(lookup_alias(ARCH_ALIASES, "i686"), Some("i386"));
    assert_eq!(lookup_alias(ARCH_ALIASES, ""), Some("unknown"));
    assert_eq!(lookup_alias(ARCH_ALIASES, "arm64e"), None);
    assert_eq!(lookup_alias(ARCH_ALIASES, "armv7k"), None);

    assert_eq!(lookup_alias(OS_ALIASES, "darwin"), Some("macos"));
    assert_eq!(lookup_alias(OS_ALIASES, "macosx"), Some("macos"));
    assert_eq!(lookup_alias(OS_ALIASES, "ios"), None);

    assert_eq!(lookup_alias(ENVIRONMENT_ALIASES, "unknown"), Some(None));
    assert_eq!(lookup_alias(ENVIRONMENT_ALIASES, "simulator"), None);
}

#[test]
fn test_alias_targets_are_canonical() {
    for &(_, canonical) in ARCH_ALIASES {
        assert_eq!(lookup_alias(ARCH_ALIASES, canonical), Some(canonical));
    }
    for &(_, canonical) in OS_ALIASES {
        assert_eq!(lookup_alias(OS_ALIASES, canonical), Some(canonical));
    }
}

#[test]
fn test_apple_module_triples() {
    let cases = [
        ("x86_64-apple-macosx10.15", "x86_64-apple-macos"),
        ("x86_64-apple-darwin19", "x86_64-apple-macos"),
        ("aarch64-unknown-darwin20", "arm64-apple-macos"),
        ("arm64-apple-ios14.0", "arm64-apple-ios"),
        ("arm64e-apple-ios14.0", "arm64e-apple-ios"),
        ("armv7s-apple-ios10.0", "armv7s-apple-ios"),
        ("i686-apple-ios10.0-simulator", "i386-apple-ios-simulator"),
        ("x86_64-apple-ios13.1-macabi", "x86_64-apple-ios-macabi"),
        ("arm64-apple-ios14.0-unknown", "arm64-apple-ios"),
        ("arm64-apple-tvos14.0", "arm64-apple-tvos"),
        ("armv7k-apple-watchos6.0", "armv7k-apple-watchos"),
    ];
    for (input, expected) in cases {
        assert_eq!(module_triple(input), expected, "{input}");
    }
}

#[test]
fn test_equivalent_spellings_collapse() {
    assert_eq!(
        module_triple("amd64-apple-macosx10.15"),
        module_triple("x86_64-apple-macosx10.15")
    );
    assert_eq!(
        module_triple("x86_64-apple-macos11"),
        module_triple("x86_64-unknown-darwin19")
    );
    assert_ne!(
        module_triple("arm64e-apple-ios14.0"),
        module_triple("arm64-apple-ios14.0")
    );
    assert_ne!(
        module_triple("arm64-apple-ios14.0-simulator"),
        module_triple("arm64-apple-ios14.0")
    );
}

#[test]
fn test_android_module_triples() {
    assert_eq!(
        module_triple("aarch64-unknown-linux-android21"),
        "aarch64-unknown-linux-android"
    );
    assert_eq!(
        module_triple("armv7-none-linux-androideabi16"),
        "armv7-none-linux-android"
    );
}

#[test]
fn test_other_triples_unchanged() {
    for input in [
        "x86_64-unknown-linux-gnu",
        "amd64-unknown-linux-gnu",
        "x86_64-pc-windows-msvc",
        "x86_64-unknown-freebsd12.1",
        "wasm32-unknown-wasi",
    ] {
        assert_eq!(module_triple(input), input);
    }
}

#[test]
fn test_normalization_is_idempotent() {
    let extra = ["amd64-unknown-macosx10.15.4", "i986-apple-ios-unknown"].map(triple);
    let all = KNOWN_TRIPLES
        .iter()
        .flat_map(|triples| triples.iter())
        .map(|s| triple(s))
        .chain(extra);
    for t in all {
        let once = normalized_module_triple(&t);
        let twice = normalized_module_triple(&once);
        assert_eq!(once, twice, "{t}");
    }
}

#[test]
fn test_rust_triples_normalize_too() {
    let rust: target_lexicon::Triple = "aarch64-apple-ios-sim".parse().unwrap();
    let t = Triple::try_from(&rust).unwrap();
    assert_eq!(
        normalized_module_triple(&t).to_string(),
        "arm64-apple-ios-simulator"
    );
}

#[test]
fn test_unversioned_triples() {
    let cases = [
        ("x86_64-apple-macosx10.15.4", "x86_64-apple-macosx"),
        ("amd64-apple-macos11", "amd64-apple-macos"),
        ("arm64-apple-ios14.0-simulator", "arm64-apple-ios-simulator"),
        ("x86_64-apple-ios13.0-unknown", "x86_64-apple-ios"),
        ("aarch64-unknown-linux-android21", "aarch64-unknown-linux-android"),
        ("x86_64-unknown-freebsd12.1", "x86_64-unknown-freebsd"),
        ("x86_64-unknown-linux-gnu", "x86_64-unknown-linux-gnu"),
    ];
    for (input, expected) in cases {
        assert_eq!(unversioned_triple(&triple(input)).to_string(), expected, "{input}");
    }
}

#[test]
fn test_darwin_module_triples_stay_darwin() {
    for t in known_darwin_triples() {
        let normalized = normalized_module_triple(&t);
        assert!(normalized.is_darwin(), "{t}");
        assert_eq!(normalized.vendor_name(), "apple");
        assert!(normalized.os_version().is_empty(), "{t}");
    }
}
