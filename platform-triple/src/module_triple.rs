//! Canonical triples for naming per-target module artifacts.
//!
//! Textually different spellings of the same target (`amd64` and `x86_64`,
//! `macosx10.15` and `macos`) should share one artifact name. Spellings that
//! change the ABI (`arm64e`, `armv7k`) or what code sees at compile time
//! (`simulator`, `macabi`) must not.

use platform_triple_schema::Triple;
use tracing::debug;

/// Architecture spellings that name the same Apple target
pub const ARCH_ALIASES: &[(&str, &str)] = &[
    ("arm64", "arm64"),
    ("aarch64", "arm64"),
    ("x86_64", "x86_64"),
    ("amd64", "x86_64"),
    ("i386", "i386"),
    ("i486", "i386"),
    ("i586", "i386"),
    ("i686", "i386"),
    ("i786", "i386"),
    ("i886", "i386"),
    ("i986", "i386"),
    ("unknown", "unknown"),
    ("", "unknown"),
];

/// OS spellings (with the version already cut off) that name the same Apple OS
pub const OS_ALIASES: &[(&str, &str)] = &[
    ("macos", "macos"),
    ("macosx", "macos"),
    ("darwin", "macos"),
    ("unknown", "unknown"),
    ("", "unknown"),
];

/// Environment spellings that mean "no environment"
pub const ENVIRONMENT_ALIASES: &[(&str, Option<&str>)] = &[("unknown", None), ("", None)];

/// Look `name` up in an alias table
pub fn lookup_alias<T: Copy>(table: &[(&str, T)], name: &str) -> Option<T> {
    table
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|&(_, canonical)| canonical)
}

/// The OS name up to (not including) the first ASCII digit
fn os_name_without_version(triple: &Triple) -> &str {
    let os_name = triple.os_name();
    let end = os_name
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(os_name.len());
    &os_name[..end]
}

/// The triple to name this target's compiled module files after
///
/// * Apple triples are rebuilt from canonical components: aliased
///   architecture, vendor `apple`, OS without its version, and the
///   environment only if it says something.
/// * Android triples lose their API level.
/// * Everything else is returned as-is.
///
/// Applying this to its own output gives the same triple back.
pub fn normalized_module_triple(triple: &Triple) -> Triple {
    if triple.is_darwin() {
        return normalized_apple_triple(triple);
    }

    if triple.is_android() {
        let normalized = Triple::new(
            triple.arch_name(),
            triple.vendor_name(),
            triple.os_name(),
            triple.environment().canonical_name(),
        );
        debug!("normalized android module triple {triple} to {normalized}");
        return normalized;
    }

    triple.clone()
}

fn normalized_apple_triple(triple: &Triple) -> Triple {
    debug_assert!(
        triple.is_darwin(),
        "only Apple triples get the 'apple' vendor"
    );

    let arch_name = triple.arch_name();
    let arch = lookup_alias(ARCH_ALIASES, arch_name).unwrap_or(arch_name);

    let os_name = os_name_without_version(triple);
    let os = lookup_alias(OS_ALIASES, os_name).unwrap_or(os_name);

    let environment = triple
        .environment_name()
        .and_then(|name| lookup_alias(ENVIRONMENT_ALIASES, name).unwrap_or(Some(name)));

    let normalized = Triple::new(arch, "apple", os, environment);
    debug!("normalized apple module triple {triple} to {normalized}");
    normalized
}

/// The triple with the version cut off its OS name
///
/// The environment is kept in its canonical spelling (so an Android API level
/// goes too); an `unknown` environment is dropped.
pub fn unversioned_triple(triple: &Triple) -> Triple {
    Triple::new(
        triple.arch_name(),
        triple.vendor_name(),
        os_name_without_version(triple),
        triple.environment().canonical_name(),
    )
}
