use super::{known_darwin_triples, triple};
use crate::environment::*;
use platform_triple_schema::Triple;

#[test]
fn test_simulator_predicates() {
    assert!(is_simulator_suffixed(&triple("x86_64-apple-ios13.0-simulator")));
    assert!(!is_simulator_suffixed(&triple("x86_64-apple-ios13.0")));

    assert!(is_ios_simulator(&triple("arm64-apple-ios14.0-simulator")));
    assert!(!is_ios_simulator(&triple("arm64-apple-ios14.0")));
    assert!(!is_ios_simulator(&triple("arm64-apple-tvos14.0-simulator")));
    assert!(!is_ios_simulator(&triple("x86_64-apple-ios13.1-macabi")));

    assert!(is_tvos_simulator(&triple("x86_64-apple-tvos13.0-simulator")));
    assert!(!is_tvos_simulator(&triple("x86_64-apple-ios13.0-simulator")));

    assert!(is_watchos_simulator(&triple("i386-apple-watchos6.0-simulator")));
    assert!(!is_watchos_simulator(&triple("armv7k-apple-watchos6.0")));
}

#[test]
fn test_mac_catalyst() {
    assert!(is_mac_catalyst(&triple("x86_64-apple-ios13.1-macabi")));
    assert!(is_mac_catalyst(&triple("arm64-apple-ios14.0-macabi")));
    assert!(!is_mac_catalyst(&triple("x86_64-apple-tvos13.1-macabi")));
    assert!(!is_mac_catalyst(&triple("x86_64-apple-ios13.1")));
    assert!(!is_mac_catalyst(&triple("x86_64-apple-macosx10.15")));
}

#[test]
fn test_infers_simulator_environment() {
    assert!(infers_simulator_environment(&triple("x86_64-apple-ios13.0")));
    assert!(infers_simulator_environment(&triple("i386-apple-ios10.0")));
    assert!(infers_simulator_environment(&triple("x86_64-apple-tvos13.0")));
    assert!(infers_simulator_environment(&triple("i386-apple-watchos6.0")));

    // arm could be a device
    assert!(!infers_simulator_environment(&triple("arm64-apple-ios14.0")));
    assert!(!infers_simulator_environment(&triple("armv7k-apple-watchos6.0")));
    // already explicit, one way or another
    assert!(!infers_simulator_environment(&triple(
        "x86_64-apple-ios13.0-simulator"
    )));
    assert!(!infers_simulator_environment(&triple(
        "x86_64-apple-ios13.0-unknown"
    )));
    assert!(!infers_simulator_environment(&triple(
        "x86_64-apple-ios13.1-macabi"
    )));
    // not a mobile OS
    assert!(!infers_simulator_environment(&triple(
        "x86_64-apple-macosx10.15"
    )));
    assert!(!infers_simulator_environment(&triple(
        "x86_64-unknown-linux-gnu"
    )));
}

#[test]
fn test_zippering_either_order() {
    let macos = triple("x86_64-apple-macosx10.15");
    let catalyst = triple("x86_64-apple-ios13.1-macabi");
    assert!(triples_valid_for_zippering(&macos, &catalyst));
    assert!(triples_valid_for_zippering(&catalyst, &macos));

    let darwin = triple("x86_64-apple-darwin19");
    assert!(triples_valid_for_zippering(&darwin, &catalyst));
}

#[test]
fn test_zippering_mismatches() {
    let catalyst = triple("x86_64-apple-ios13.1-macabi");
    // different architecture
    assert!(!triples_valid_for_zippering(
        &triple("arm64-apple-macos11"),
        &catalyst
    ));
    // different vendor
    assert!(!triples_valid_for_zippering(
        &triple("x86_64-unknown-macosx10.15"),
        &catalyst
    ));
    // not a macOS + Catalyst pair
    assert!(!triples_valid_for_zippering(
        &triple("x86_64-apple-macosx10.15"),
        &triple("x86_64-apple-macosx10.14")
    ));
    assert!(!triples_valid_for_zippering(
        &catalyst,
        &triple("x86_64-apple-ios13.1-macabi")
    ));
    assert!(!triples_valid_for_zippering(
        &triple("x86_64-apple-macosx10.15"),
        &triple("x86_64-apple-ios13.0-simulator")
    ));
}

#[test]
fn test_zippering_every_known_macos_triple() {
    for macos in known_darwin_triples().filter(Triple::is_macos) {
        let catalyst = Triple::new(
            macos.arch_name(),
            macos.vendor_name(),
            "ios14.0",
            Some("macabi"),
        );
        assert!(triples_valid_for_zippering(&macos, &catalyst), "{macos}");
        assert!(triples_valid_for_zippering(&catalyst, &macos), "{macos}");

        let other_arch = if macos.arch_name() == "x86_64" {
            "arm64"
        } else {
            "x86_64"
        };
        let mismatched = Triple::new(other_arch, macos.vendor_name(), "ios14.0", Some("macabi"));
        assert!(!triples_valid_for_zippering(&macos, &mismatched), "{macos}");
        assert!(!triples_valid_for_zippering(&mismatched, &macos), "{macos}");
    }
}
